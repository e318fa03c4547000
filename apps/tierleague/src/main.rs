//! # tierleague - Multi-tier League Seasons
//!
//! The main binary for the tierleague season engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                apps/tierleague (THE BINARY)          │
//! │                                                      │
//! │  ┌─────────────┐   ┌─────────────┐   ┌────────────┐  │
//! │  │    CLI      │   │   Config    │   │  Render    │  │
//! │  │   (clap)    │   │   (toml)    │   │ (text/json)│  │
//! │  └──────┬──────┘   └──────┬──────┘   └─────┬──────┘  │
//! │         └─────────────────┼────────────────┘         │
//! │                           ▼                          │
//! │                  ┌─────────────────┐                 │
//! │                  │ tierleague-core │                 │
//! │                  │   (THE RULES)   │                 │
//! │                  └─────────────────┘                 │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! tierleague check -f competition.toml
//! tierleague season -f competition.toml --end-season
//! tierleague team -f competition.toml -t 0 -n "Brisbane Roar"
//! ```

use clap::Parser;
use tierleague::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // TIERLEAGUE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("TIERLEAGUE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tierleague=info".into());

    // Logs go to stderr; stdout carries tables and JSON.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  tierleague v{}
  Seasons • Standings • Promotion & Relegation
"#,
        env!("CARGO_PKG_VERSION")
    );
}
