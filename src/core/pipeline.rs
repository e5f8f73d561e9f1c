/// The narrative pipeline: (prompt, mode) → structured narrative.
///
/// Wires together prompt normalization, seed derivation, scoped
/// selection over the phrase bank, and the fixed output templates.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::phrase_bank::{BankError, Category, PhraseBank};
use crate::core::seed::{normalize_prompt, Seed};
use crate::core::selector::{ScopedSelector, SelectionTrace};
use crate::schema::narrative::{GenerationInput, GenerationResult, RoadmapEntry};

/// Number of insight bullets in every result.
pub const INSIGHT_COUNT: usize = 3;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("phrase bank error: {0}")]
    Bank(#[from] BankError),
    #[error("no phrases available for category '{0}'")]
    EmptyCategory(Category),
}

/// The top-level generator. Built via `NarrativeGenerator::builder()`.
///
/// Holds only immutable data, so one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct NarrativeGenerator {
    bank: PhraseBank,
}

/// Builder for constructing a `NarrativeGenerator`.
#[derive(Debug, Default)]
pub struct NarrativeGeneratorBuilder {
    phrase_bank_path: Option<PathBuf>,
    /// Directly provided bank (for tests and embedders without files).
    phrase_bank: Option<PhraseBank>,
}

/// Fills slots for one call, optionally recording each selection.
struct Assembler<'a> {
    bank: &'a PhraseBank,
    selector: ScopedSelector<'a>,
    trace: Option<&'a mut Vec<SelectionTrace>>,
}

impl<'a> Assembler<'a> {
    fn pick(&mut self, scope: &str, category: Category) -> Result<&'a str, GenerateError> {
        let list = self.bank.get(category);
        let index = self
            .selector
            .index(scope, list.len())
            .ok_or(GenerateError::EmptyCategory(category))?;
        let value = list
            .get(index)
            .ok_or(GenerateError::EmptyCategory(category))?;

        if let Some(trace) = self.trace.as_mut() {
            trace.push(SelectionTrace {
                scope: scope.to_string(),
                index,
                len: list.len(),
                value: value.clone(),
            });
        }
        Ok(value)
    }
}

/// Uppercase the first character, leaving the rest untouched.
///
/// Characters outside the Basic Multilingual Plane are kept as-is, so
/// output matches generators that case-map a single UTF-16 code unit.
pub fn sentence_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.len_utf16() == 1 => first.to_uppercase().chain(chars).collect(),
        Some(_) => value.to_string(),
        None => String::new(),
    }
}

impl NarrativeGenerator {
    pub fn builder() -> NarrativeGeneratorBuilder {
        NarrativeGeneratorBuilder::default()
    }

    pub fn phrase_bank(&self) -> &PhraseBank {
        &self.bank
    }

    /// The seed `generate` would use for this input.
    pub fn seed_for(&self, input: &GenerationInput) -> Seed {
        Seed::for_prompt(input.mode, &input.prompt)
    }

    /// Generate the narrative for an input.
    pub fn generate(&self, input: &GenerationInput) -> Result<GenerationResult, GenerateError> {
        self.assemble(input, None)
    }

    /// Generate the narrative and report every selection made along the way.
    pub fn generate_traced(
        &self,
        input: &GenerationInput,
    ) -> Result<(GenerationResult, Vec<SelectionTrace>), GenerateError> {
        let mut trace = Vec::new();
        let result = self.assemble(input, Some(&mut trace))?;
        Ok((result, trace))
    }

    fn assemble(
        &self,
        input: &GenerationInput,
        trace_out: Option<&mut Vec<SelectionTrace>>,
    ) -> Result<GenerationResult, GenerateError> {
        // 1. Normalize and seed
        let normalized = normalize_prompt(&input.prompt);
        let seed = Seed::derive(input.mode, normalized);
        debug!(mode = %input.mode, %seed, "derived seed");

        let mut asm = Assembler {
            bank: &self.bank,
            selector: ScopedSelector::new(&seed),
            trace: trace_out,
        };

        // 2-4. Framing selections shared by every section
        let lens = asm.pick("lens", Category::Lens(input.mode))?;
        let tone = asm.pick("tone", Category::Tone)?;
        let edge = asm.pick("edge", Category::Differentiator)?;
        let lens_lower = lens.to_lowercase();

        // 5-6. Headline
        let title = format!("{} • {}", lens, sentence_case(normalized));
        let summary = format!(
            "Pendekatan {} untuk {} dengan fokus pada {} yang {}.",
            tone, normalized, lens_lower, edge
        );

        // 7. Insights
        let mut insights = Vec::with_capacity(INSIGHT_COUNT);
        for i in 0..INSIGHT_COUNT {
            let verb = asm.pick(&format!("verb-{}", i), Category::ActionVerb)?;
            let impact = asm.pick(&format!("impact-{}", i), Category::ImpactStatement)?;
            insights.push(format!(
                "{} inisiatif yang {} melalui orkestrasi {}.",
                verb, impact, tone
            ));
        }

        // 8. Roadmap, one entry per phase in bank order
        let mut roadmap = Vec::with_capacity(self.bank.phases().len());
        for (idx, phase) in self.bank.phases().iter().enumerate() {
            let impact = asm.pick(&format!("impact-phase-{}", idx), Category::ImpactStatement)?;
            roadmap.push(RoadmapEntry {
                phase: phase.clone(),
                focus: format!("{} {}", phase, lens),
                impact: format!("{}.", sentence_case(impact)),
            });
        }

        // 9. Call to action
        let cta_verb = asm.pick("cta", Category::ActionVerb)?;
        let call_to_action = format!(
            "{} tim untuk menyelaraskan {} dan mempercepat realisasi {}.",
            cta_verb,
            lens_lower,
            normalized.to_lowercase()
        );

        Ok(GenerationResult {
            title,
            summary,
            insights,
            roadmap,
            call_to_action,
        })
    }
}

impl NarrativeGeneratorBuilder {
    /// Load the phrase bank from a RON file at build time.
    pub fn phrase_bank_path(mut self, path: impl AsRef<Path>) -> Self {
        self.phrase_bank_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Provide a phrase bank directly.
    pub fn with_phrase_bank(mut self, bank: PhraseBank) -> Self {
        self.phrase_bank = Some(bank);
        self
    }

    pub fn build(self) -> Result<NarrativeGenerator, GenerateError> {
        // A file path wins over a directly provided bank
        let bank = match (self.phrase_bank_path, self.phrase_bank) {
            (Some(path), _) => PhraseBank::load_from_ron(&path)?,
            (None, Some(bank)) => {
                bank.validate()?;
                bank
            }
            (None, None) => PhraseBank::builtin(),
        };
        Ok(NarrativeGenerator { bank })
    }
}
