use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Evaluate fully parenthesized prefix arithmetic, eg: (+ 1 (* 2 3))
#[derive(Parser, Debug)]
#[command(name = "polish", version)]
struct Cli {
    /// Only report whether the expression is well formed
    #[arg(long)]
    check: bool,

    /// Print the parsed tree before evaluating it
    #[arg(long)]
    tree: bool,

    /// Expression to evaluate, words are joined with spaces.
    /// Starts an interactive session when missing.
    #[arg(allow_hyphen_values = true)]
    expr: Vec<String>,
}

mod repl {
    use polish::{evaluate, is_valid, PrefixParser};

    pub fn evalexpr(input: &str, print_tree: bool) -> Result<(), String> {
        let tree = PrefixParser::parse_str(input).map_err(|e| e.to_string())?;
        match tree {
            None => println!("No expression"),
            Some(mut tree) => {
                if print_tree {
                    println!("Tree: {}", tree);
                }
                let result = evaluate(&mut tree)
                    .map_err(|e| polish::Error::from(e).to_string())?;
                println!("Result: {}", result);
            }
        }
        Ok(())
    }

    pub fn check(input: &str) -> Result<(), String> {
        match is_valid(input) {
            Ok(true) => println!("valid"),
            Ok(false) => println!("invalid"),
            Err(e) => return Err(format!("lexical error: {}", e)),
        }
        Ok(())
    }
}

fn history_file() -> Option<std::path::PathBuf> {
    dirs::home_dir().map(|home| home.join(".polish_history"))
}

fn interactive(cli: &Cli) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let history = history_file();
    if let Some(path) = &history {
        // first run has no history yet
        if let Err(e) = rl.load_history(path) {
            tracing::debug!(?path, "no history loaded: {}", e);
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                let outcome = if cli.check {
                    repl::check(&line)
                } else {
                    repl::evalexpr(&line, cli.tree)
                };
                if let Err(e) = outcome {
                    eprintln!("{}", e);
                }
            }
        }
    }
    if let Some(path) = &history {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(?path, "could not save history: {}", e);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = if cli.expr.is_empty() {
        interactive(&cli)
    } else {
        let input = cli.expr.join(" ");
        if cli.check {
            repl::check(&input)
        } else {
            repl::evalexpr(&input, cli.tree)
        }
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
