//! rxpair CLI
//!
//! Loads an interaction dataset once and answers "worst interaction" queries:
//! - `check`: one query from the command line
//! - `repl`: an interactive prompt, one query per line
//! - `list`: every indexed pair in dataset order

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use rxpair_index::{InteractionIndex, SeverityTable};
use rxpair_ingest::{DatasetLoader, LoaderConfig, UnknownSeverityPolicy};

mod repl;

#[derive(Parser)]
#[command(name = "rxpair")]
#[command(
    author,
    version,
    about = "rxpair: find the most severe interaction among a set of drugs"
)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    /// Raise log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DataArgs {
    /// Interaction dataset: a JSON array of `{drugs, severity, description}` records
    #[arg(long, global = true, default_value = "./interactions.json")]
    data: PathBuf,

    /// JSON object mapping severity labels to ranks (default: major=3, moderate=2, minor=1)
    #[arg(long, global = true)]
    severities: Option<PathBuf>,

    /// Fail the load when a record carries a severity label missing from the table
    #[arg(long, global = true)]
    strict_severity: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the worst interaction among the given drugs.
    Check {
        /// Drug names (case-insensitive); at least two
        drugs: Vec<String>,
    },

    /// Read queries from an interactive prompt until `exit` or end of input.
    Repl,

    /// List every indexed drug pair with its interaction.
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let index = load_index(&cli.data)?;

    match cli.command {
        Commands::Check { drugs } => cmd_check(&index, &drugs)?,
        Commands::Repl => repl::cmd_repl(&index)?,
        Commands::List => cmd_list(&index),
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn loader_config(args: &DataArgs) -> Result<LoaderConfig> {
    let severities = match &args.severities {
        Some(path) => read_severity_table(path)?,
        None => SeverityTable::standard(),
    };
    let unknown_severity = if args.strict_severity {
        UnknownSeverityPolicy::Reject
    } else {
        UnknownSeverityPolicy::Lowest
    };
    Ok(LoaderConfig {
        severities,
        unknown_severity,
    })
}

fn read_severity_table(path: &Path) -> Result<SeverityTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read severity table {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid severity table {}", path.display()))
}

fn load_index(args: &DataArgs) -> Result<InteractionIndex> {
    let loader = DatasetLoader::new(loader_config(args)?);
    let index = loader
        .load_path(&args.data)
        .with_context(|| format!("failed to load interactions from {}", args.data.display()))?;
    tracing::info!(path = %args.data.display(), records = index.len(), "dataset loaded");
    Ok(index)
}

fn cmd_check(index: &InteractionIndex, drugs: &[String]) -> Result<()> {
    let line = repl::answer(index, drugs)?;
    println!("{line}");
    Ok(())
}

fn cmd_list(index: &InteractionIndex) {
    let entries = index.entries();
    println!(
        "{} {} interactions ({} distinct pairs)",
        "Listing".green().bold(),
        index.len(),
        entries.len()
    );
    for (key, record) in entries {
        let [a, b] = record.drugs();
        println!(
            "{} {key}  {} {}",
            "Key:".cyan(),
            "Position:".cyan(),
            record.source_position()
        );
        println!(
            "  drugs: [{a}, {b}]  severity: {}  description: {}",
            record.severity(),
            record.description()
        );
    }
}
