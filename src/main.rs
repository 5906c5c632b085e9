//! voxctl
//!
//! Command-line front end for the natural-language command interpreter.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};

use voxctl::automation::{execute_plan, DryRun, Status};
use voxctl::config::Config;
use voxctl::feedback::InterpretationReport;
use voxctl::{get_action_help, wake, Interpreter};

/// voxctl - natural-language desktop commands
#[derive(Parser, Debug)]
#[command(name = "voxctl")]
#[command(version = "0.1.0")]
#[command(about = "Turns natural-language commands into validated automation actions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Command to interpret (compound commands allowed)
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interpret a command and print the ranked actions
    Parse {
        /// Command text
        #[arg(required = true)]
        text: Vec<String>,

        /// Split on connectives ("puis", "et", ...) and insert pauses
        #[arg(long)]
        complex: bool,

        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
    /// List example commands per category
    Examples,
    /// Read commands from stdin and dry-run them
    Listen {
        /// Wake word expected before each command
        #[arg(long)]
        wake_word: Option<String>,

        /// Treat every line as a command, without a wake word
        #[arg(long)]
        no_wake: bool,
    },
    /// Print version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let interpreter = Interpreter::from_config(&config).context("building the pattern catalog")?;

    match cli.command {
        Some(Commands::Parse { text, complex, json }) => {
            parse(&interpreter, &text.join(" "), complex, json);
        }
        Some(Commands::Examples) => print_examples(),
        Some(Commands::Listen { wake_word, no_wake }) => {
            let wake_word = if no_wake {
                None
            } else {
                Some(wake_word.unwrap_or_else(|| config.wake_word.clone()))
            };
            listen(&interpreter, &config, wake_word.as_deref())?;
        }
        Some(Commands::Version) => {
            println!("voxctl 0.1.0");
            println!("Natural-language command interpreter");
            println!("License: Apache-2.0");
        }
        None => {
            if cli.text.is_empty() {
                eprintln!("Error: No command specified");
                eprintln!("Usage: voxctl <TEXT> or voxctl parse <TEXT>");
                process::exit(1);
            }
            parse(&interpreter, &cli.text.join(" "), true, false);
        }
    }
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    Ok(config.apply_env()?)
}

/// Interpret one command and print the result
fn parse(interpreter: &Interpreter, text: &str, complex: bool, json: bool) {
    let report = InterpretationReport::build(interpreter, text, complex);

    if json {
        println!("{}", report.to_json());
        return;
    }

    if !report.recognized {
        println!("❌ Command not recognized: '{}'", text);
        return;
    }

    for entry in &report.actions {
        let mark = if entry.validation.valid { "✓" } else { "✗" };
        println!(
            "  [{}] {:<14} {:<40} (conf: {:.2})",
            mark,
            entry.action.intent().as_str(),
            entry.action.description(),
            entry.action.confidence()
        );
        if !entry.validation.valid {
            println!("      {}", entry.validation.message);
        }
    }
}

fn print_examples() {
    for (category, phrases) in get_action_help() {
        println!("{}:", category);
        for phrase in phrases {
            println!("  - {}", phrase);
        }
    }
}

/// Interactive console: one command per line, dry-run execution
fn listen(interpreter: &Interpreter, config: &Config, wake_word: Option<&str>) -> anyhow::Result<()> {
    match wake_word {
        Some(word) => println!("🎤 Listening - say '{}' followed by your command", word),
        None => println!("🎤 Listening - one command per line"),
    }

    let mut backend = DryRun::new(config.screen);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match wake_word {
            Some(word) => match wake::extract_command(&line, word, &config.filler_words) {
                Some(command) => command,
                None => continue,
            },
            None => line.trim().to_string(),
        };

        let plan = interpreter.plan_complex_command(&command);
        if plan.is_empty() {
            println!("❌ Command not recognized: '{}'", command);
            continue;
        }

        for outcome in execute_plan(&plan, interpreter.validator(), &mut backend) {
            match &outcome.status {
                Status::Done => println!("  ✅ {}", outcome.description),
                Status::Rejected(reason) => println!("  ⚠️ Blocked: {} ({})", outcome.description, reason),
                Status::Failed(reason) => println!("  ❌ Failed: {} ({})", outcome.description, reason),
            }
        }
        io::stdout().flush().context("flushing stdout")?;
    }
    Ok(())
}
