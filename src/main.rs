//! WhereBus - Voice Skill for Bus Tracking
//!
//! Reads one platform event as JSON, answers it against the configured hub,
//! and prints the response envelope.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wherebus::alexa::SkillEvent;
use wherebus::config::Config;
use wherebus::error::SkillError;
use wherebus::geocode::Nominatim;
use wherebus::handler::SkillHandler;
use wherebus::hub::RestHub;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Read the platform event from a file instead of stdin
    #[arg(short, long)]
    event: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging on stderr; stdout carries the response envelope
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚌 WhereBus v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    let raw_event = match &args.event {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read event from stdin")?;
            buf
        }
    };
    let event: SkillEvent = serde_json::from_str(&raw_event)
        .map_err(|e| SkillError::Envelope(e.to_string()))?;

    let hub = RestHub::new(&config);
    let geocoder = Nominatim::new();
    let handler = SkillHandler::new(&hub, &geocoder, &config.tracker_domain);

    let response = handler.handle(&event).await;
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
