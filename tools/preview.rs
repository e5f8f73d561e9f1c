/// Preview — interactive generation shell for trying prompts, modes and
/// phrase banks.
///
/// Usage: preview [--bank <path>] [--mode <mode>] [--prompt <text>] [--json] [--trace]
///
/// Commands:
///   gen <prompt>     — generate a narrative for the prompt
///   mode <mode>      — set active mode (strategi, ide, konten)
///   seed <prompt>    — show the seed for a prompt under the active mode
///   trace on|off     — print the selection trace after each generation
///   json on|off      — print results as JSON
///   bulk <n>         — generate n sampled prompts with variety stats
///   modes            — list modes
///   bank             — show phrase bank category sizes
///   help             — list commands
///   quit             — exit

use anyhow::Context;
use aurora_narrative::core::pipeline::NarrativeGenerator;
use aurora_narrative::core::selector::SelectionTrace;
use aurora_narrative::schema::mode::Mode;
use aurora_narrative::schema::narrative::{GenerationInput, GenerationResult};
use clap::Parser;
use rustc_hash::FxHashMap;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "preview", about = "Interactive shell for previewing generated narratives")]
struct Args {
    /// RON phrase bank overriding the built-in phrases
    #[arg(long)]
    bank: Option<PathBuf>,
    /// Initial mode
    #[arg(long, default_value = "strategi")]
    mode: Mode,
    /// Generate once for this prompt and exit
    #[arg(long)]
    prompt: Option<String>,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
    /// Print the selection trace after each result
    #[arg(long)]
    trace: bool,
}

struct Session {
    generator: NarrativeGenerator,
    mode: Mode,
    json: bool,
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut builder = NarrativeGenerator::builder();
    if let Some(ref path) = args.bank {
        builder = builder.phrase_bank_path(path);
    }
    let generator = builder.build().context("failed to build generator")?;

    let mut session = Session {
        generator,
        mode: args.mode,
        json: args.json,
        trace: args.trace,
    };

    if let Some(ref prompt) = args.prompt {
        return session.generate(prompt);
    }

    println!("Mode: {}", session.mode);
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
            None => (line.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "gen" | "g" => {
                if rest.is_empty() {
                    println!("Usage: gen <prompt>");
                    continue;
                }
                if let Err(e) = session.generate(rest) {
                    println!("ERROR: {:#}", e);
                }
            }
            "mode" => {
                if rest.is_empty() {
                    println!("Current mode: {}", session.mode);
                    continue;
                }
                match rest.parse::<Mode>() {
                    Ok(mode) => {
                        session.mode = mode;
                        println!("Mode set to {} ({})", mode, mode.label());
                    }
                    Err(e) => println!("{}. Known modes: strategi, ide, konten", e),
                }
            }
            "seed" => {
                let input = GenerationInput::new(rest, session.mode);
                println!("{}", session.generator.seed_for(&input));
            }
            "trace" => match parse_toggle(rest) {
                Some(on) => {
                    session.trace = on;
                    println!("Trace {}", if on { "on" } else { "off" });
                }
                None => println!("Usage: trace on|off"),
            },
            "json" => match parse_toggle(rest) {
                Some(on) => {
                    session.json = on;
                    println!("JSON output {}", if on { "on" } else { "off" });
                }
                None => println!("Usage: json on|off"),
            },
            "bulk" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => session.bulk(n),
                _ => println!("Usage: bulk <n>"),
            },
            "modes" => {
                for mode in Mode::ALL {
                    println!("  {:<9} {} — {}", mode.token(), mode.label(), mode.description());
                }
            }
            "bank" => {
                for (category, list) in session.generator.phrase_bank().categories() {
                    println!("  {:<18} {} phrases", category.to_string(), list.len());
                }
            }
            _ => {
                println!("Unknown command: '{}'. Type 'help' for available commands.", cmd);
            }
        }
    }

    Ok(())
}

impl Session {
    fn generate(&self, prompt: &str) -> anyhow::Result<()> {
        let input = GenerationInput::new(prompt, self.mode);
        let (result, trace) = self.generator.generate_traced(&input)?;

        match (self.json, self.trace) {
            (true, true) => {
                let doc = serde_json::json!({ "data": result, "trace": trace });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            }
            (true, false) => println!("{}", serde_json::to_string_pretty(&result)?),
            (false, show_trace) => {
                print_result(&result);
                if show_trace {
                    print_trace(&trace);
                }
            }
        }
        Ok(())
    }

    /// Generate `count` numbered prompts and report how varied the
    /// selections are.
    fn bulk(&self, count: usize) {
        let mut lens_counts: FxHashMap<String, usize> = FxHashMap::default();
        let mut tone_counts: FxHashMap<String, usize> = FxHashMap::default();
        let mut unique_insights = HashSet::new();
        let mut errors = 0;

        for i in 0..count {
            let input = GenerationInput::new(format!("ide bisnis nomor {}", i), self.mode);
            match self.generator.generate_traced(&input) {
                Ok((result, trace)) => {
                    if let Some(lens) = trace.iter().find(|t| t.scope == "lens") {
                        *lens_counts.entry(lens.value.clone()).or_insert(0) += 1;
                    }
                    if let Some(tone) = trace.iter().find(|t| t.scope == "tone") {
                        *tone_counts.entry(tone.value.clone()).or_insert(0) += 1;
                    }
                    unique_insights.extend(result.insights);
                }
                Err(_) => errors += 1,
            }
        }

        println!("\n=== Bulk Generation: {} narratives ({} errors) ===\n", count - errors, errors);
        println!("Unique insights: {}", unique_insights.len());
        print_distribution("Lens", lens_counts);
        print_distribution("Tone", tone_counts);
        println!();
    }
}

fn print_distribution(name: &str, counts: FxHashMap<String, usize>) {
    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    println!("\n{} distribution:", name);
    for (value, count) in counts {
        println!("  {:<28} {}", value, count);
    }
}

fn print_result(result: &GenerationResult) {
    println!("\n--- {} ---", result.title);
    println!("{}", result.summary);
    println!("\nInsights:");
    for insight in &result.insights {
        println!("  - {}", insight);
    }
    println!("\nRoadmap:");
    for entry in &result.roadmap {
        println!("  [{}] {}", entry.phase, entry.focus);
        println!("      {}", entry.impact);
    }
    println!("\n> {}", result.call_to_action);
    println!("--- End ---\n");
}

fn print_trace(trace: &[SelectionTrace]) {
    for t in trace {
        println!("[Trace] {:<15} {}/{} {}", t.scope, t.index, t.len, t.value);
    }
    println!();
}

fn parse_toggle(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "on" | "true" | "1" => Some(true),
        "off" | "false" | "0" => Some(false),
        _ => None,
    }
}

fn print_help() {
    println!("Commands:");
    println!("  gen <prompt>     Generate a narrative for the prompt");
    println!("  mode <mode>      Set active mode (strategi, ide, konten)");
    println!("  seed <prompt>    Show the seed for a prompt under the active mode");
    println!("  trace on|off     Print the selection trace after each result");
    println!("  json on|off      Print results as JSON");
    println!("  bulk <n>         Generate n sampled prompts with variety statistics");
    println!("  modes            List modes");
    println!("  bank             Show phrase bank category sizes");
    println!("  help             Show this help");
    println!("  quit             Exit");
}
