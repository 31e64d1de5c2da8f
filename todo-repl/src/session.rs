//! Drives a [`Store`] from line commands.
//!
//! The session borrows the store; it never owns or creates one. Results are
//! written to `out`, diagnostics for the user to `err`. In JSON mode every
//! result, including failures, is a single JSON line on `out`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde_json::json;
use todo::{Item, Store, StoreError};
use tracing::debug;

use crate::command::{Command, CommandError, USAGE, parse_line};
use crate::config::{OutputFormat, ReplConfig};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Input was exhausted or `quit` was read.
    Finished,
    /// Fail-fast stop on an unknown id.
    StoppedOnNotFound,
    /// Fail-fast stop on a malformed line.
    StoppedOnBadCommand,
}

/// Result of handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
    NotFound,
    BadCommand,
}

pub struct Session<'a, W: Write, E: Write> {
    store: &'a Store,
    config: &'a ReplConfig,
    out: W,
    err: E,
}

impl<'a, W: Write, E: Write> Session<'a, W, E> {
    pub fn new(store: &'a Store, config: &'a ReplConfig, out: W, err: E) -> Self {
        Self {
            store,
            config,
            out,
            err,
        }
    }

    /// Read and execute lines until input ends, `quit`, or a fail-fast stop.
    ///
    /// `interactive` controls whether the configured prompt is shown. The
    /// prompt is never written in JSON mode so stdout stays one document per
    /// line. A line that is not valid UTF-8 counts as a malformed command.
    pub fn run<R: BufRead>(&mut self, mut input: R, interactive: bool) -> Result<RunStatus> {
        let show_prompt = interactive
            && !self.config.prompt.is_empty()
            && self.config.format == OutputFormat::Text;
        let mut buf = Vec::new();
        let status = loop {
            if show_prompt {
                write!(self.out, "{}", self.config.prompt).context("write prompt")?;
                self.out.flush().context("flush stdout")?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf).context("read stdin")? == 0 {
                break RunStatus::Finished;
            }
            let step = match decode_line(&buf) {
                Ok(line) => self.handle_line(line)?,
                Err(err) => {
                    debug!(error = %err, "rejected line");
                    self.report_bad_command(&err)?;
                    Step::BadCommand
                }
            };
            match step {
                Step::Continue => {}
                Step::Quit => break RunStatus::Finished,
                Step::NotFound if self.config.fail_fast => break RunStatus::StoppedOnNotFound,
                Step::BadCommand if self.config.fail_fast => break RunStatus::StoppedOnBadCommand,
                Step::NotFound | Step::BadCommand => {}
            }
        };
        self.out.flush().context("flush stdout")?;
        self.err.flush().context("flush stderr")?;
        Ok(status)
    }

    fn handle_line(&mut self, line: &str) -> Result<Step> {
        match parse_line(line, self.config.max_message_len) {
            Ok(None) => Ok(Step::Continue),
            Ok(Some(command)) => self.execute(command),
            Err(err) => {
                debug!(line, error = %err, "rejected line");
                self.report_bad_command(&err)?;
                Ok(Step::BadCommand)
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<Step> {
        debug!(?command, "dispatch");
        match command {
            Command::Add(message) => {
                let id = self.store.add(message);
                let written = match self.config.format {
                    OutputFormat::Text => writeln!(self.out, "{id}"),
                    OutputFormat::Json => writeln!(self.out, "{}", json!({ "id": id })),
                };
                written.context("write add result")?;
            }
            Command::List => {
                let items = self.store.list();
                self.write_items(&items)?;
            }
            Command::Complete(id) => {
                let result = self.store.complete(&id);
                return self.finish(result);
            }
            Command::Delete(id) => {
                let result = self.store.delete(&id);
                return self.finish(result);
            }
            Command::Help => self.write_usage()?,
            Command::Quit => return Ok(Step::Quit),
        }
        Ok(Step::Continue)
    }

    /// Render the outcome of `complete`/`delete`.
    fn finish(&mut self, result: Result<(), StoreError>) -> Result<Step> {
        match result {
            Ok(()) => {
                let written = match self.config.format {
                    OutputFormat::Text => writeln!(self.out, "ok"),
                    OutputFormat::Json => writeln!(self.out, "{}", json!({ "ok": true })),
                };
                written.context("write result")?;
                Ok(Step::Continue)
            }
            Err(err) => {
                debug!(id = err.id(), "item not found");
                let written = match self.config.format {
                    OutputFormat::Text => writeln!(self.err, "not found: {}", err.id()),
                    OutputFormat::Json => writeln!(
                        self.out,
                        "{}",
                        json!({ "error": "not_found", "id": err.id() })
                    ),
                };
                written.context("write not found")?;
                Ok(Step::NotFound)
            }
        }
    }

    fn write_items(&mut self, items: &[Item]) -> Result<()> {
        match self.config.format {
            OutputFormat::Text => {
                for item in items {
                    let mark = if item.complete { 'x' } else { ' ' };
                    writeln!(self.out, "{} [{}] {}", item.id, mark, item.message)
                        .context("write item")?;
                }
            }
            OutputFormat::Json => {
                let payload = serde_json::to_string(items).context("serialize items")?;
                writeln!(self.out, "{payload}").context("write items")?;
            }
        }
        Ok(())
    }

    fn write_usage(&mut self) -> Result<()> {
        match self.config.format {
            OutputFormat::Text => {
                for line in USAGE {
                    writeln!(self.out, "{line}").context("write usage")?;
                }
            }
            OutputFormat::Json => {
                writeln!(self.out, "{}", json!({ "commands": USAGE })).context("write usage")?;
            }
        }
        Ok(())
    }

    fn report_bad_command(&mut self, err: &CommandError) -> Result<()> {
        let written = match self.config.format {
            OutputFormat::Text => writeln!(self.err, "error: {err}"),
            OutputFormat::Json => writeln!(
                self.out,
                "{}",
                json!({ "error": "invalid_command", "message": err.to_string() })
            ),
        };
        written.context("write command error")
    }
}

/// Strip the `\n` / `\r\n` terminator and decode as UTF-8.
fn decode_line(raw: &[u8]) -> Result<&str, CommandError> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).map_err(|err| CommandError::InvalidUtf8 {
        offset: err.valid_up_to(),
    })
}
