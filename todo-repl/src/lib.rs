//! Line-oriented front end for the in-memory to-do store.
//!
//! This crate is the composition root for [`todo::Store`]: the binary builds
//! exactly one store and hands a reference to a [`session::Session`], which
//! maps each input line onto a store operation.
//!
//! - **[`command`]**: Parse a line into a command.
//! - **[`session`]**: Execute commands against a borrowed store and render results.
//! - **[`config`]**: TOML configuration for output format and limits.

pub mod command;
pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod session;
