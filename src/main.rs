//! # Slate - A Minimal Text Editor
//!
//! One document, a line-number gutter, a live status bar and a
//! light/dark theme that is remembered between runs.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the editor
//! cargo run
//!
//! # With info-level logging (repeat -v for more)
//! cargo run -- -v
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slate_ui::{Flags, run};

/// Slate - a minimal text editor
#[derive(Parser, Debug)]
#[command(name = "slate")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            args.log_level(),
        ))
        .init();

    tracing::info!("Starting Slate v{}", env!("CARGO_PKG_VERSION"));

    let flags = Flags::resolve();
    tracing::info!("Settings file: {}", flags.settings.path().display());

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
