//! Easy CloudBook - command line entry point
//!
//! # Usage
//!
//! ```bash
//! cloudbook open /reports/trial-balance
//! cloudbook customer add --name "Rahim Traders" --credit-limit 50000
//! cloudbook estimate add --file estimate.json
//! cloudbook reconcile --beginning 10000 --deposits 5000 --payments 3000 --ending 12000
//! ```
//!
//! # Environment Variables
//!
//! * `CLOUDBOOK_DATA_DIR` - Directory for stored collections (default: ./cloudbook-data)
//! * `CLOUDBOOK_CURRENCY` - Report currency code (default: BDT)
//! * `CLOUDBOOK_NUMBER_GROUPING` - `standard` or `indian` (default: standard)
//! * `CLOUDBOOK_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `CLOUDBOOK_LOG_JSON` - Emit JSON log lines (default: false)

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_store::FileStore;
use interface_cli::{App, AppConfig, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }

    init_tracing(&config.log_level, config.log_json);
    tracing::debug!(data_dir = %config.data_dir.display(), "starting");

    let store = Arc::new(FileStore::new(config.data_dir.clone()));
    let color = !cli.no_color && io::stdout().is_terminal();
    let app = App::new(store, &config)?.with_color(color);

    let mut confirm = prompt;
    match app.run(cli.command, &mut confirm).await {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(err.exit_code());
        }
    }
}

/// Logs go to stderr so page output stays clean
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(io::stderr))
            .init();
    }
}

fn prompt(question: &str) -> bool {
    eprint!("{} [y/N] ", question);
    let _ = io::stderr().flush();
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
