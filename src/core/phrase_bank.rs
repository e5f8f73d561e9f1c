/// Phrase banks — the candidate lists every narrative slot is filled from.

use ron::extensions::Extensions;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::schema::mode::Mode;

/// Number of roadmap phases; the phase list is always exactly this long.
pub const PHASE_COUNT: usize = 4;

const LENSES_STRATEGI: &[&str] = &[
    "Transformasi Digital",
    "Optimasi Operasional",
    "Ekspansi Pasar",
    "Pengalaman Pelanggan",
    "Inovasi Produk",
];

const LENSES_IDE: &[&str] = &[
    "Produk Baru",
    "Kemitraan Strategis",
    "Model Bisnis",
    "Program Loyalitas",
    "Ekosistem Platform",
];

const LENSES_KONTEN: &[&str] = &[
    "Narasi Kampanye",
    "Storytelling Merek",
    "Konten Edukatif",
    "Konten Interaktif",
    "Konten Komunitas",
];

const TONES: &[&str] = &[
    "visioner",
    "praktis",
    "futuristik",
    "berorientasi data",
    "berpusat pada manusia",
];

const DIFFERENTIATORS: &[&str] = &[
    "memanfaatkan insight berbasis data real-time",
    "menggabungkan kecerdasan kolektif dari tim lintas fungsi",
    "mengoptimalkan proses dengan pendekatan adaptif",
    "menghadirkan pengalaman personal berskala besar",
    "mengarahkan keputusan melalui eksperimentasi terukur",
];

const ACTION_VERBS: &[&str] = &[
    "Aktifkan",
    "Peta",
    "Prototype",
    "Kalibrasi",
    "Orkestrasi",
    "Sempurnakan",
    "Percepat",
    "Fasilitasi",
];

const IMPACT_STATEMENTS: &[&str] = &[
    "meningkatkan retensi pelanggan secara signifikan",
    "memperkuat posisi merek di pasar sasaran",
    "mengurangi siklus iterasi produk",
    "menciptakan alur onboarding yang lebih intuitif",
    "meningkatkan kepercayaan pemangku kepentingan",
];

const PHASES: [&str; PHASE_COUNT] = ["Explorasi", "Validasi", "Peluncuran", "Skalasi"];

#[derive(Debug, Error)]
pub enum BankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    RonSerialize(#[from] ron::Error),
    #[error("phrase category '{0}' is empty")]
    EmptyCategory(Category),
    #[error("expected 4 phases, found {0}")]
    PhaseCount(usize),
}

/// A named phrase list within a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lens(Mode),
    Tone,
    Differentiator,
    ActionVerb,
    ImpactStatement,
    Phase,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lens(mode) => write!(f, "lens:{}", mode),
            Self::Tone => f.write_str("tone"),
            Self::Differentiator => f.write_str("differentiator"),
            Self::ActionVerb => f.write_str("action_verb"),
            Self::ImpactStatement => f.write_str("impact_statement"),
            Self::Phase => f.write_str("phase"),
        }
    }
}

/// Immutable candidate lists, one per category.
///
/// Every list is non-empty and there are exactly [`PHASE_COUNT`] phases.
/// Both invariants are checked whenever a bank is built from outside data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseBank {
    lenses: FxHashMap<Mode, Vec<String>>,
    tones: Vec<String>,
    differentiators: Vec<String>,
    action_verbs: Vec<String>,
    impact_statements: Vec<String>,
    phases: [String; PHASE_COUNT],
}

// RON file shape: every category is optional, and categories left out
// keep their built-in phrases. Read with `implicit_some` so files can
// write `tones: [...]` instead of `tones: Some([...])`.

fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename = "Lenses")]
struct RonLenses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    strategi: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ide: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    konten: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename = "PhraseBank")]
struct RonPhraseBank {
    #[serde(default)]
    lenses: RonLenses,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tones: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    differentiators: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action_verbs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    impact_statements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phases: Option<Vec<String>>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for PhraseBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PhraseBank {
    /// The phrase bank shipped with the crate.
    pub fn builtin() -> PhraseBank {
        let mut lenses = FxHashMap::default();
        lenses.insert(Mode::Strategi, owned(LENSES_STRATEGI));
        lenses.insert(Mode::Ide, owned(LENSES_IDE));
        lenses.insert(Mode::Konten, owned(LENSES_KONTEN));

        PhraseBank {
            lenses,
            tones: owned(TONES),
            differentiators: owned(DIFFERENTIATORS),
            action_verbs: owned(ACTION_VERBS),
            impact_statements: owned(IMPACT_STATEMENTS),
            phases: PHASES.map(str::to_string),
        }
    }

    /// Load a phrase bank from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<PhraseBank, BankError> {
        let contents = std::fs::read_to_string(path)?;
        let bank = Self::parse_ron(&contents)?;
        info!(path = %path.display(), "loaded phrase bank");
        Ok(bank)
    }

    /// Parse a phrase bank from a RON string. Categories absent from the
    /// input keep their built-in phrases.
    pub fn parse_ron(input: &str) -> Result<PhraseBank, BankError> {
        let raw: RonPhraseBank = ron_options().from_str(input)?;
        let mut bank = Self::builtin();

        let lens_overrides = [
            (Mode::Strategi, raw.lenses.strategi),
            (Mode::Ide, raw.lenses.ide),
            (Mode::Konten, raw.lenses.konten),
        ];
        for (mode, list) in lens_overrides {
            if let Some(list) = list {
                bank.lenses.insert(mode, list);
            }
        }
        if let Some(tones) = raw.tones {
            bank.tones = tones;
        }
        if let Some(differentiators) = raw.differentiators {
            bank.differentiators = differentiators;
        }
        if let Some(action_verbs) = raw.action_verbs {
            bank.action_verbs = action_verbs;
        }
        if let Some(impact_statements) = raw.impact_statements {
            bank.impact_statements = impact_statements;
        }
        if let Some(phases) = raw.phases {
            bank.phases = phases
                .try_into()
                .map_err(|rejected: Vec<String>| BankError::PhaseCount(rejected.len()))?;
        }

        bank.validate()?;
        Ok(bank)
    }

    /// Serialize the full bank to pretty RON, in the shape `parse_ron` reads.
    pub fn to_ron(&self) -> Result<String, BankError> {
        let raw = RonPhraseBank {
            lenses: RonLenses {
                strategi: Some(self.lens(Mode::Strategi).to_vec()),
                ide: Some(self.lens(Mode::Ide).to_vec()),
                konten: Some(self.lens(Mode::Konten).to_vec()),
            },
            tones: Some(self.tones.clone()),
            differentiators: Some(self.differentiators.clone()),
            action_verbs: Some(self.action_verbs.clone()),
            impact_statements: Some(self.impact_statements.clone()),
            phases: Some(self.phases.to_vec()),
        };
        Ok(ron_options().to_string_pretty(&raw, ron::ser::PrettyConfig::default())?)
    }

    /// Check that every category has at least one phrase.
    pub fn validate(&self) -> Result<(), BankError> {
        for (category, list) in self.categories() {
            if list.is_empty() {
                return Err(BankError::EmptyCategory(category));
            }
        }
        Ok(())
    }

    /// All categories with their phrases, lenses first in mode order.
    pub fn categories(&self) -> Vec<(Category, &[String])> {
        let mut out: Vec<(Category, &[String])> = Mode::ALL
            .iter()
            .map(|&mode| (Category::Lens(mode), self.lens(mode)))
            .collect();
        out.push((Category::Tone, self.tones.as_slice()));
        out.push((Category::Differentiator, self.differentiators.as_slice()));
        out.push((Category::ActionVerb, self.action_verbs.as_slice()));
        out.push((Category::ImpactStatement, self.impact_statements.as_slice()));
        out.push((Category::Phase, self.phases.as_slice()));
        out
    }

    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Lens(mode) => self.lens(mode),
            Category::Tone => &self.tones,
            Category::Differentiator => &self.differentiators,
            Category::ActionVerb => &self.action_verbs,
            Category::ImpactStatement => &self.impact_statements,
            Category::Phase => self.phases.as_slice(),
        }
    }

    /// Whether `phrase` is one of the candidates of `category`.
    pub fn contains(&self, category: Category, phrase: &str) -> bool {
        self.get(category).iter().any(|p| p == phrase)
    }

    pub fn lens(&self, mode: Mode) -> &[String] {
        self.lenses.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tones(&self) -> &[String] {
        &self.tones
    }

    pub fn differentiators(&self) -> &[String] {
        &self.differentiators
    }

    pub fn action_verbs(&self) -> &[String] {
        &self.action_verbs
    }

    pub fn impact_statements(&self) -> &[String] {
        &self.impact_statements
    }

    pub fn phases(&self) -> &[String; PHASE_COUNT] {
        &self.phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_is_valid() {
        let bank = PhraseBank::builtin();
        assert!(bank.validate().is_ok());
        assert_eq!(bank.action_verbs().len(), 8);
        assert_eq!(bank.impact_statements().len(), 5);
        for mode in Mode::ALL {
            assert_eq!(bank.lens(mode).len(), 5);
        }
    }

    #[test]
    fn builtin_phases_in_order() {
        let bank = PhraseBank::builtin();
        assert_eq!(
            bank.phases(),
            &["Explorasi", "Validasi", "Peluncuran", "Skalasi"].map(str::to_string)
        );
    }

    #[test]
    fn lens_lists_do_not_overlap() {
        let bank = PhraseBank::builtin();
        for phrase in bank.lens(Mode::Strategi) {
            assert!(!bank.contains(Category::Lens(Mode::Ide), phrase));
            assert!(!bank.contains(Category::Lens(Mode::Konten), phrase));
        }
        for phrase in bank.lens(Mode::Ide) {
            assert!(!bank.contains(Category::Lens(Mode::Konten), phrase));
        }
    }

    #[test]
    fn parse_partial_override_keeps_other_categories() {
        let bank = PhraseBank::parse_ron(
            r#"(
                lenses: (ide: ["Marketplace Mikro"]),
                tones: ["tenang"],
            )"#,
        )
        .unwrap();
        assert_eq!(bank.lens(Mode::Ide), &["Marketplace Mikro".to_string()]);
        assert_eq!(bank.tones(), &["tenang".to_string()]);
        assert_eq!(bank.lens(Mode::Strategi).len(), 5);
        assert_eq!(bank.action_verbs().len(), 8);
    }

    #[test]
    fn parse_builtin_values_is_builtin() {
        let bank = PhraseBank::parse_ron(
            r#"(phases: ["Explorasi", "Validasi", "Peluncuran", "Skalasi"])"#,
        )
        .unwrap();
        assert_eq!(bank, PhraseBank::builtin());
    }

    #[test]
    fn parse_rejects_empty_category() {
        let err = PhraseBank::parse_ron("(differentiators: [])").unwrap_err();
        assert!(matches!(err, BankError::EmptyCategory(Category::Differentiator)));
    }

    #[test]
    fn parse_rejects_wrong_phase_count() {
        let err = PhraseBank::parse_ron(r#"(phases: ["Satu", "Dua"])"#).unwrap_err();
        assert!(matches!(err, BankError::PhaseCount(2)));
    }

    #[test]
    fn parse_rejects_malformed_ron() {
        let err = PhraseBank::parse_ron("(tones: [\"unterminated)").unwrap_err();
        assert!(matches!(err, BankError::Ron(_)));
    }

    #[test]
    fn to_ron_reparses_to_same_bank() {
        let bank = PhraseBank::builtin();
        let text = bank.to_ron().unwrap();
        assert_eq!(PhraseBank::parse_ron(&text).unwrap(), bank);
    }

    #[test]
    fn category_names() {
        assert_eq!(Category::Lens(Mode::Konten).to_string(), "lens:konten");
        assert_eq!(Category::ImpactStatement.to_string(), "impact_statement");
    }

    #[test]
    fn load_test_bank_from_ron() {
        let path = std::path::PathBuf::from("tests/fixtures/test_bank.ron");
        let bank = PhraseBank::load_from_ron(&path).unwrap();
        assert_eq!(bank.lens(Mode::Konten).len(), 3);
        assert!(bank.contains(Category::Lens(Mode::Konten), "Serial Video Pendek"));
        assert_eq!(bank.phases()[0], "Riset");
        assert_eq!(bank.tones().len(), 5);
    }
}
