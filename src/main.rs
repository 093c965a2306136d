use anyhow::{Context, Result};
use clap::Parser;
use led_snake::game::PresentationConfig;
use led_snake::modes::PlayMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Parser)]
#[command(name = "led_snake")]
#[command(version, about = "Snake on a 5x5 LED matrix, steered with two buttons")]
struct Cli {
    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding presentation settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the greeting scrolled at startup
    #[arg(long)]
    no_greeting: bool,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let mut presentation = match &cli.config {
        Some(path) => PresentationConfig::load(path)?,
        None => PresentationConfig::default(),
    };
    if cli.no_greeting {
        presentation.show_greeting = false;
    }

    let mut play_mode = PlayMode::new(presentation, cli.seed);
    play_mode.run().await
}
