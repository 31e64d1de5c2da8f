//! Repl configuration, read from `todo.toml` by default.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// One JSON document per line.
    Json,
}

/// Repl configuration (TOML).
///
/// Missing fields take their defaults; a missing file is the same as an
/// empty one. Command-line flags override whatever is loaded here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReplConfig {
    pub format: OutputFormat,

    /// Stop at the first unknown id or malformed command.
    pub fail_fast: bool,

    /// Written before each read when stdin is a terminal. Empty disables it.
    pub prompt: String,

    /// Reject `add` messages longer than this many bytes.
    pub max_message_len: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            fail_fast: false,
            prompt: String::new(),
            max_message_len: 4096,
        }
    }
}

impl ReplConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_message_len == 0 {
            return Err(anyhow!("max_message_len must be > 0"));
        }
        if self.prompt.contains('\n') {
            return Err(anyhow!("prompt must not contain newlines"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ReplConfig::default()`.
pub fn load_config(path: &Path) -> Result<ReplConfig> {
    if !path.exists() {
        return Ok(ReplConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReplConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ReplConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("todo.toml");
        fs::write(&path, "format = \"json\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(!cfg.fail_fast);
        assert_eq!(cfg.max_message_len, 4096);
    }

    #[test]
    fn zero_message_len_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("todo.toml");
        fs::write(&path, "max_message_len = 0\n").expect("write");

        let err = load_config(&path).expect_err("should reject");
        assert!(format!("{err:#}").contains("max_message_len"));
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("todo.toml");
        fs::write(&path, "format = \"yaml\"\n").expect("write");

        let err = load_config(&path).expect_err("should reject");
        assert!(format!("{err:#}").contains("parse"));
    }
}
