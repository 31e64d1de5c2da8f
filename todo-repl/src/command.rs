//! Line command parsing.

use thiserror::Error;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    List,
    Complete(String),
    Delete(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs an item id")]
    MissingId(&'static str),
    #[error("'{command}' takes no argument after the id, got '{extra}'")]
    TrailingInput { command: &'static str, extra: String },
    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),
    #[error("message is {len} bytes, limit is {max}")]
    MessageTooLong { len: usize, max: usize },
    #[error("line is not valid UTF-8 (after byte {offset})")]
    InvalidUtf8 { offset: usize },
}

/// Usage lines printed by `help`.
pub const USAGE: &[&str] = &[
    "add <message>    add an item, prints its id",
    "list             print all items in insertion order",
    "complete <id>    mark an item complete",
    "delete <id>      remove an item",
    "help             show this text",
    "quit             stop reading input",
];

/// Parse a single line (without its terminator).
///
/// Returns `Ok(None)` for blank lines and `#` comments. Command words are
/// case-insensitive. The `add` message is everything after the first
/// whitespace character following the word, kept verbatim.
pub fn parse_line(line: &str, max_message_len: usize) -> Result<Option<Command>, CommandError> {
    let line = line.trim_start();
    if line.trim_end().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, raw_rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };
    let rest = raw_rest.trim();

    let command = match word.to_ascii_lowercase().as_str() {
        "add" => {
            if raw_rest.len() > max_message_len {
                return Err(CommandError::MessageTooLong {
                    len: raw_rest.len(),
                    max: max_message_len,
                });
            }
            Command::Add(raw_rest.to_string())
        }
        "list" => no_args("list", rest, Command::List)?,
        "complete" => Command::Complete(single_id("complete", rest)?),
        "delete" => Command::Delete(single_id("delete", rest)?),
        "help" => no_args("help", rest, Command::Help)?,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn no_args(name: &'static str, rest: &str, command: Command) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::UnexpectedArgument(name))
    }
}

fn single_id(name: &'static str, rest: &str) -> Result<String, CommandError> {
    let mut parts = rest.split_whitespace();
    let id = parts.next().ok_or(CommandError::MissingId(name))?;
    if let Some(extra) = parts.next() {
        return Err(CommandError::TrailingInput {
            command: name,
            extra: extra.to_string(),
        });
    }
    Ok(id.to_string())
}
