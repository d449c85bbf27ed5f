use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use thingstore::config::Config;
use thingstore::{logger, LocalStorage, ThingDraft, ThingId, ThingRepository, ThingRepositoryExt};

#[derive(Parser)]
#[command(name = "thingstore")]
#[command(about = "Store things and look them up by shape or color")]
struct Cli {
    /// Configuration file (defaults to ./thingstore.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file.
    InitConfig {
        /// Target path (defaults to the user config dir)
        path: Option<PathBuf>,
    },
    #[command(flatten)]
    Store(StoreCommand),
}

/// Operations that run against the configured database.
#[derive(Subcommand)]
enum StoreCommand {
    /// Insert a thing, or overwrite the one with --id.
    Save {
        #[arg(long)]
        shape: String,
        #[arg(long)]
        color: String,
        #[arg(long)]
        id: Option<ThingId>,
    },
    /// Print one thing, or null if there is none with this id.
    Get { id: ThingId },
    /// Print every thing.
    List,
    /// Delete a thing; unknown ids are not an error.
    Delete { id: ThingId },
    /// Print things with exactly this shape.
    ByShape { shape: String },
    /// Print things with exactly this color.
    ByColor { color: String },
    /// Print how many things are stored.
    Count,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::get_default_config_path()?,
    };
    Config::generate_default_config(path)
}

async fn run(command: StoreCommand, config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(log_path) = logger::init(&config.logging)? {
        info!("Logging to {}", log_path.display());
    }

    let storage = LocalStorage::new(&config.database)
        .await
        .context("Failed to open storage")?;

    match command {
        StoreCommand::Save { shape, color, id } => {
            let mut draft = ThingDraft::new(shape, color);
            draft.id = id;
            print_json(&storage.save(draft).await?)?;
        }
        StoreCommand::Get { id } => print_json(&storage.find_by_id(id).await?)?,
        StoreCommand::List => print_json(&storage.find_all().await?)?,
        StoreCommand::Delete { id } => {
            let removed = storage.delete_by_id(id).await?;
            print_json(&serde_json::json!({ "id": id, "deleted": removed }))?;
        }
        StoreCommand::ByShape { shape } => print_json(&storage.find_by_shape(&shape).await?)?,
        StoreCommand::ByColor { color } => print_json(&storage.find_by_color(&color).await?)?,
        StoreCommand::Count => print_json(&storage.count().await?)?,
    }

    storage.close().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::InitConfig { path } => init_config(path),
        Commands::Store(command) => run(command, cli.config).await,
    }
}
