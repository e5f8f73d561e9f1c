/// Bank Linter — validates a RON phrase bank before it is deployed.
///
/// Usage: bank_linter <bank.ron>
///        bank_linter --dump-default

use aurora_narrative::core::phrase_bank::{Category, PhraseBank};
use aurora_narrative::schema::mode::Mode;
use clap::Parser;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Parser)]
#[command(name = "bank_linter", about = "Validate a RON phrase bank")]
struct Args {
    /// Phrase bank file to lint
    #[arg(required_unless_present = "dump_default")]
    bank: Option<PathBuf>,
    /// Print the built-in bank as RON, a starting point for custom banks
    #[arg(long)]
    dump_default: bool,
}

fn main() {
    let args = Args::parse();

    if args.dump_default {
        match PhraseBank::builtin().to_ron() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("ERROR: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let Some(path) = args.bank else {
        eprintln!("ERROR: no phrase bank given");
        process::exit(1);
    };

    let bank = match PhraseBank::load_from_ron(&path) {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("ERROR: Failed to load phrase bank: {}", e);
            process::exit(1);
        }
    };

    let total: usize = bank.categories().iter().map(|(_, list)| list.len()).sum();
    println!("Loaded {} phrases from {}", total, path.display());

    let (errors, warnings) = lint_bank(&bank);

    println!("\n=== Phrase Bank Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if !errors.is_empty() {
        process::exit(1);
    }
}

fn lint_bank(bank: &PhraseBank) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (category, list) in bank.categories() {
        // Low variety warning
        if list.len() < 3 && category != Category::Phase {
            warnings.push(format!(
                "Category '{}' has only {} phrases (minimum 3 recommended)",
                category,
                list.len()
            ));
        }

        let mut seen = FxHashSet::default();
        for phrase in list {
            if phrase.trim().is_empty() {
                errors.push(format!("Category '{}' contains a blank phrase", category));
                continue;
            }
            if phrase.trim() != phrase {
                warnings.push(format!(
                    "Category '{}' phrase '{}' has surrounding whitespace",
                    category, phrase
                ));
            }
            if !seen.insert(phrase.as_str()) {
                warnings.push(format!(
                    "Category '{}' lists '{}' more than once (skews selection)",
                    category, phrase
                ));
            }
        }
    }

    // Templates supply the closing period themselves
    let mid_sentence = [Category::Differentiator, Category::ImpactStatement];
    for category in mid_sentence {
        for phrase in bank.get(category) {
            if phrase.ends_with('.') {
                warnings.push(format!(
                    "Category '{}' phrase '{}' ends with a period; output would read '..'",
                    category, phrase
                ));
            }
        }
    }

    // Shared lens phrases make different modes produce identical framing
    for (i, a) in Mode::ALL.iter().enumerate() {
        for b in &Mode::ALL[i + 1..] {
            for phrase in bank.lens(*a) {
                if bank.contains(Category::Lens(*b), phrase) {
                    warnings.push(format!(
                        "Lens '{}' appears in both '{}' and '{}'",
                        phrase, a, b
                    ));
                }
            }
        }
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_is_clean() {
        let (errors, warnings) = lint_bank(&PhraseBank::builtin());
        assert!(errors.is_empty(), "{:?}", errors);
        assert!(warnings.is_empty(), "{:?}", warnings);
    }

    #[test]
    fn flags_shared_lens_and_duplicates() {
        let bank = PhraseBank::parse_ron(
            r#"(
                lenses: (
                    strategi: ["Ekspansi Pasar", "Ekspansi Pasar", "Model Bisnis"],
                    ide: ["Model Bisnis", "Produk Baru", "Program Loyalitas"],
                ),
            )"#,
        )
        .unwrap();
        let (errors, warnings) = lint_bank(&bank);
        assert!(errors.is_empty());
        assert!(warnings.iter().any(|w| w.contains("more than once")));
        assert!(warnings
            .iter()
            .any(|w| w.contains("'Model Bisnis' appears in both 'strategi' and 'ide'")));
    }

    #[test]
    fn flags_blank_phrase_and_trailing_period() {
        let bank = PhraseBank::parse_ron(
            r#"(
                tones: ["  ", "praktis", "visioner"],
                impact_statements: ["mengurangi biaya.", "menambah margin", "menjaga kas"],
            )"#,
        )
        .unwrap();
        let (errors, warnings) = lint_bank(&bank);
        assert_eq!(errors.len(), 1);
        assert!(warnings.iter().any(|w| w.contains("ends with a period")));
    }
}
