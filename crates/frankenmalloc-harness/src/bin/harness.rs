//! CLI entrypoint for the frankenmalloc size-class harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use frankenmalloc_harness::structured_log::LogEmitter;
use frankenmalloc_harness::table_report::{
    TableReport, classify, load_classes_json, validate_classes, validate_override,
};
use frankenmalloc_harness::{HarnessError, check_invariants};
use frankenmalloc_sizemap::{Model, SizeMap};

/// Size-class tooling for frankenmalloc.
#[derive(Debug, Parser)]
#[command(name = "frankenmalloc-harness")]
#[command(about = "Inspect and check frankenmalloc size-class tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dump a compiled-in table as JSON.
    DumpTable {
        /// Page model (default, large-pages, pages-256k, small-but-slow).
        #[arg(long, default_value = "default")]
        model: String,
        /// Dump the experimental table instead of the production one.
        #[arg(long)]
        experimental: bool,
        /// Output JSON path (if omitted, prints to stdout).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show which class a request maps to.
    Classify {
        #[arg(long, default_value = "default")]
        model: String,
        /// Requested size in bytes.
        #[arg(long)]
        size: usize,
        /// Required alignment (power of two).
        #[arg(long, default_value_t = 1)]
        align: usize,
    },
    /// Check a candidate specification; exits 1 when it is rejected.
    Validate {
        #[arg(long, default_value = "default")]
        model: String,
        /// Override string: `size,pages,num_to_move` entries joined by `;`.
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        classes: Option<String>,
        /// JSON array of `{size, pages, num_to_move}` objects, class 0 first.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Sweep every size and alignment through a table and check invariants.
    CheckInvariants {
        #[arg(long, default_value = "default")]
        model: String,
        #[arg(long)]
        experimental: bool,
        /// Structured JSONL log path (if omitted, entries are discarded).
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

fn parse_model(name: &str) -> Result<Model, HarnessError> {
    Model::from_str_loose(name).ok_or_else(|| HarnessError::UnknownModel(name.to_string()))
}

fn run_id() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{secs}-{}", std::process::id())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::DumpTable {
            model,
            experimental,
            output,
        } => {
            let report = TableReport::for_model(parse_model(&model)?, experimental);
            let body = report.to_json()?;
            if let Some(path) = output {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, body)?;
                eprintln!(
                    "Wrote {} {} table ({} classes) to {}",
                    report.model,
                    report.source,
                    report.num_classes,
                    path.display()
                );
            } else {
                println!("{body}");
            }
        }
        Command::Classify { model, size, align } => {
            let map = SizeMap::for_model(parse_model(&model)?);
            let report = classify(&map, size, align)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Validate {
            model,
            classes,
            file,
        } => {
            let model = parse_model(&model)?;
            let report = match (classes, file) {
                (Some(spec), _) => validate_override(model, &spec),
                (None, Some(path)) => validate_classes(model, &load_classes_json(&path)?),
                (None, None) => return Err("one of --classes or --file is required".into()),
            };
            println!("{}", report.to_json()?);
            if !report.accepted {
                std::process::exit(1);
            }
        }
        Command::CheckInvariants {
            model,
            experimental,
            log,
        } => {
            let model = parse_model(&model)?;
            let (map, source) = if experimental {
                (SizeMap::experimental_for_model(model), "experimental")
            } else {
                (SizeMap::for_model(model), "default")
            };
            let run_id = run_id();
            let mut emitter = match &log {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    LogEmitter::to_file(path, &run_id)?
                }
                None => LogEmitter::sink(&run_id),
            };
            let report = check_invariants(&map, source, &mut emitter)?;
            for check in &report.checks {
                let status = if check.passed() { "PASS" } else { "FAIL" };
                eprintln!(
                    "[{status}] {} ({} checked, {} violations)",
                    check.name, check.checked, check.violations
                );
                if let Some(first) = &check.first_violation {
                    eprintln!("       first: {first}");
                }
            }
            if let Some(path) = &log {
                eprintln!("Wrote structured log to {}", path.display());
            }
            if !report.all_passed() {
                return Err(format!(
                    "{} invariant check(s) failed for {model}/{source}",
                    report.failed().len()
                )
                .into());
            }
        }
    }

    Ok(())
}
