mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::SortKey;

#[derive(Parser)]
#[command(name = "sprout", about = "Track houseplants and their watering schedule")]
struct Cli {
    /// Data file (overrides SPROUT_FILE env var and config file)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sprout config file
    Init {
        /// Data file path to record in the config
        #[arg(long, default_value = config::DEFAULT_DATA_FILE)]
        data_file: String,
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Show watering info for every plant
    List {
        /// Emit records as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show plants that need watering today
    Due,
    /// Add a plant (planted and watered today)
    Add {
        /// Plant name
        name: String,
        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
        /// Watering frequency in days
        #[arg(long, default_value_t = 7)]
        frequency: i64,
    },
    /// Record that a plant was watered today
    Water {
        /// 0-based position in the list
        index: usize,
    },
    /// Remove a plant by its 0-based position
    Remove {
        /// 0-based position in the list
        index: usize,
    },
    /// Reorder the stored collection
    Sort {
        /// Sort key
        #[arg(value_enum)]
        key: SortKey,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { data_file, force } => commands::run_init(&data_file, force),
        Commands::List { json } => {
            let path = config::resolve_data_file(cli.file.as_deref());
            commands::run_list(&path, json)
        }
        Commands::Due => {
            let path = config::resolve_data_file(cli.file.as_deref());
            commands::run_due(&path)
        }
        Commands::Add {
            name,
            notes,
            frequency,
        } => {
            let path = config::resolve_data_file(cli.file.as_deref());
            commands::run_add(&path, &name, &notes, frequency)
        }
        Commands::Water { index } => {
            let path = config::resolve_data_file(cli.file.as_deref());
            commands::run_water(&path, index)
        }
        Commands::Remove { index } => {
            let path = config::resolve_data_file(cli.file.as_deref());
            commands::run_remove(&path, index)
        }
        Commands::Sort { key } => {
            let path = config::resolve_data_file(cli.file.as_deref());
            commands::run_sort(&path, key)
        }
    }
}
