//! Interactive query prompt.
//!
//! Each input line is a whitespace-separated list of drug names and is
//! answered with the worst interaction among them. `rustyline` provides line
//! editing by default; a plain stdin loop is used with `--no-default-features`.

use anyhow::Result;
#[cfg(feature = "repl-rustyline")]
use anyhow::anyhow;
use colored::Colorize;
#[cfg(not(feature = "repl-rustyline"))]
use std::io::{self, Write};

use rxpair_index::{impact_line, InteractionIndex, QueryError};

const PROMPT: &str = "rxpair> ";

pub fn cmd_repl(index: &InteractionIndex) -> Result<()> {
    #[cfg(feature = "repl-rustyline")]
    {
        return cmd_repl_rustyline(index);
    }
    #[cfg(not(feature = "repl-rustyline"))]
    {
        return cmd_repl_simple(index);
    }
}

fn print_banner(index: &InteractionIndex) {
    println!("{}", "rxpair interaction check".green().bold());
    println!(
        "{} interactions loaded. Enter drug names separated by spaces; `exit` or ^D to quit.\n",
        index.len()
    );
}

#[cfg(not(feature = "repl-rustyline"))]
fn cmd_repl_simple(index: &InteractionIndex) -> Result<()> {
    print_banner(index);

    let stdin = io::stdin();
    loop {
        print!("{}", PROMPT.cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        if let ReplControl::Exit = dispatch_repl_line(index, &tokenize_repl_line(&line)) {
            break;
        }
    }

    Ok(())
}

#[cfg(feature = "repl-rustyline")]
fn cmd_repl_rustyline(index: &InteractionIndex) -> Result<()> {
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    print_banner(index);

    let mut rl = DefaultEditor::new().map_err(|e| anyhow!("failed to init rustyline: {e}"))?;

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(l) => l,
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(e) => return Err(anyhow!("readline error: {e}")),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        rl.add_history_entry(line)
            .map_err(|e| anyhow!("failed to record history: {e}"))?;

        if let ReplControl::Exit = dispatch_repl_line(index, &tokenize_repl_line(line)) {
            break;
        }
    }

    Ok(())
}

enum ReplControl {
    Continue,
    Exit,
}

fn dispatch_repl_line(index: &InteractionIndex, tokens: &[String]) -> ReplControl {
    match tokens.first().map(String::as_str) {
        None => {}
        Some("exit") | Some("quit") if tokens.len() == 1 => return ReplControl::Exit,
        Some("help") | Some("?") if tokens.len() == 1 => print_help(),
        Some(_) => match answer(index, tokens) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("{} {e}", "error:".red().bold()),
        },
    }
    ReplControl::Continue
}

fn print_help() {
    println!("Enter two or more drug names separated by spaces, e.g.");
    println!("  sildenafil tamsulosin valaciclovir");
    println!("Names are case-insensitive. The most severe known interaction is printed.");
    println!("`exit` or `quit` leaves the prompt.");
}

/// Resolves one query into the line the prompt prints.
pub fn answer<S: AsRef<str>>(index: &InteractionIndex, drugs: &[S]) -> Result<String, QueryError> {
    index.worst_interaction(drugs).map(impact_line)
}

pub fn tokenize_repl_line(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
