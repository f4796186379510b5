use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zoompan::input::InputEvent;
use zoompan::memory::MemoryView;
use zoompan::settings::default_settings_path;
use zoompan::{ZoomPan, ZoomPanSettings};

#[derive(Parser)]
#[command(name = "zoompan", about = "Replay input events through the zoom/pan controller")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a scripted event sequence and print the resulting view state
    Replay {
        /// JSON script: `{ "view": {...}, "events": [...] }`
        script: PathBuf,
        /// Settings file (defaults to the platform config dir)
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Print the tool's help keys
    HelpKeys,
}

#[derive(Deserialize)]
struct ReplayScript {
    view: MemoryView,
    events: Vec<InputEvent>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zoompan=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn replay(script: PathBuf, settings: Option<PathBuf>) -> Result<()> {
    let settings = match settings {
        Some(path) => ZoomPanSettings::load(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => default_settings_path()
            .map(|path| ZoomPanSettings::load_or_default(path))
            .unwrap_or_default(),
    };

    let content = fs::read_to_string(&script)
        .with_context(|| format!("reading script {}", script.display()))?;
    let ReplayScript { view, events } =
        serde_json::from_str(&content).context("parsing replay script")?;

    let mut tool = ZoomPan::with_settings(view, settings);
    tool.init();
    tool.activate(true);
    for (i, event) in events.iter().enumerate() {
        tool.handle_event(event)
            .with_context(|| format!("event #{i} ({event:?})"))?;
    }
    info!("replayed {} events", events.len());

    println!("{}", serde_json::to_string_pretty(tool.app())?);
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    match Cli::parse().command {
        Command::Replay { script, settings } => replay(script, settings),
        Command::HelpKeys => {
            println!("{}", serde_json::to_string_pretty(&ZoomPan::<MemoryView>::help())?);
            Ok(())
        }
    }
}
