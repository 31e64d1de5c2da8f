//! Stable exit codes for the `todo-repl` binary.

/// All input was consumed.
pub const OK: i32 = 0;
/// Invalid config or flags, or an I/O failure on stdin/stdout.
pub const INVALID: i32 = 1;
/// Stopped early under `--fail-fast` because an id matched no item.
pub const NOT_FOUND: i32 = 2;
/// Stopped early under `--fail-fast` because a line was not a valid command.
pub const BAD_COMMAND: i32 = 3;
