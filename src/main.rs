mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use evreg_core::store::{FileStorage, Store};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "evreg")]
#[command(about = "Manage campus events and student registrations from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events open for registration
    Events,
    /// List events with admin details and registration counts
    Admin,
    /// Add a new event (prompts for any missing field)
    Add {
        /// Unique event ID (e.g. "E004")
        #[arg(long)]
        id: Option<String>,

        /// Event name
        #[arg(long)]
        name: Option<String>,

        /// Category label (shown as "General" when omitted)
        #[arg(long)]
        category: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove an event (asks for confirmation)
    Remove { event_id: String },
    /// Register a student for an event
    Register { event_id: String },
    /// Show who registered for an event
    Registrations { event_id: String },
    /// Show the dashboard counters
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = Store::new(FileStorage::open()?);
    // Best effort: load_events falls back to the seed on its own if this fails
    if let Err(e) = store.init() {
        warn!("could not seed event storage: {e}");
    }

    match cli.command {
        Commands::Events => commands::events::run(&store),
        Commands::Admin => commands::admin::run(&store),
        Commands::Add {
            id,
            name,
            category,
            date,
        } => commands::add::run(&store, id, name, category, date),
        Commands::Remove { event_id } => commands::remove::run(&store, &event_id),
        Commands::Register { event_id } => commands::register::run(&store, &event_id),
        Commands::Registrations { event_id } => commands::registrations::run(&store, &event_id),
        Commands::Stats => commands::stats::run(&store),
    }
}
