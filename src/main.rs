use anyhow::Result;
use std::env;
use std::io;
use tracing_subscriber::EnvFilter;

use account_ledger::{LedgerConfig, Menu};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = LedgerConfig::load(&args)?;

    init_logging(&config.log_filter);
    tracing::debug!(?config, version = account_ledger::VERSION, "starting ledger");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());
    menu.run()?;

    tracing::debug!(accounts = menu.registry().len(), "session ended");
    Ok(())
}

/// Logs go to stderr so the menu transcript on stdout stays clean.
/// RUST_LOG overrides the configured filter.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
