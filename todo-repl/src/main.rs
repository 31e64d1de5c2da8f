//! Interactive / scripted front end for the in-memory to-do store.
//!
//! Reads commands from stdin, one per line, and prints results to stdout.
//! State lives only as long as the process.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use todo::Store;
use tracing::{info, warn};

use todo_repl::config::{OutputFormat, load_config};
use todo_repl::exit_codes;
use todo_repl::logging;
use todo_repl::session::{RunStatus, Session};

#[derive(Parser)]
#[command(
    name = "todo-repl",
    version,
    about = "Manage an in-memory to-do list from stdin commands"
)]
struct Cli {
    /// Config file (missing file means defaults).
    #[arg(long, default_value = "todo.toml")]
    config: PathBuf,

    /// Output format; overrides the config file.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Stop at the first unknown id or malformed command.
    #[arg(long)]
    fail_fast: bool,
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help / --version render through the error path but are not failures
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            if let Err(print_err) = err.print() {
                warn!(error = %print_err, "failed to print usage");
            }
            std::process::exit(code);
        }
    };
    match run(cli) {
        Ok(status) => std::process::exit(exit_code(status)),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<RunStatus> {
    let mut config = load_config(&cli.config)?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.fail_fast {
        config.fail_fast = true;
    }
    info!(format = ?config.format, fail_fast = config.fail_fast, "starting session");

    let store = Store::new();
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut session = Session::new(&store, &config, io::stdout().lock(), io::stderr().lock());
    let status = session.run(stdin.lock(), interactive)?;

    info!(?status, items = store.len(), "session ended");
    Ok(status)
}

fn exit_code(status: RunStatus) -> i32 {
    match status {
        RunStatus::Finished => exit_codes::OK,
        RunStatus::StoppedOnNotFound => exit_codes::NOT_FOUND,
        RunStatus::StoppedOnBadCommand => exit_codes::BAD_COMMAND,
    }
}
