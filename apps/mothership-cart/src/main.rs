//! # mothership-cart
//!
//! Reads cart commands from stdin, writes replies to stdout. Logs go to
//! stderr.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mothership_cart::state::AppConfig;
use mothership_cart::App;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;

    init_tracing(&config.log_filter);

    info!(
        minimum_meals = config.policy.minimum_meals(),
        menu_path = ?config.menu_path,
        "Starting Mothership cart host"
    );

    let app = App::from_config(&config).context("loading menu")?;
    info!(items = app.menu.menu().len(), "State initialized");

    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(stdin.lock(), stdout.lock())
        .context("processing requests")?;

    info!("Input closed, shutting down");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `MOTHERSHIP_LOG=debug` - every command
/// - `MOTHERSHIP_LOG=mothership_cart=trace` - only this crate
/// - Default: INFO
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
