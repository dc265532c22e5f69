// ⚙️ Ledger Configuration - optional JSON settings file
//
// Looked up from `--config <path>` on the command line, then the
// LEDGER_CONFIG environment variable. No file means defaults.

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "LEDGER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// tracing filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            log_filter: "warn".to_string(),
        }
    }
}

impl LedgerConfig {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: LedgerConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Resolve from process arguments and environment
    pub fn load(args: &[String]) -> Result<Self> {
        match config_path(args, std::env::var(CONFIG_ENV).ok()) {
            Some(path) => Self::from_file(path),
            None => Ok(LedgerConfig::default()),
        }
    }
}

/// `--config <path>` wins over the environment value
pub fn config_path(args: &[String], env_value: Option<String>) -> Option<PathBuf> {
    let from_args = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    from_args.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}
