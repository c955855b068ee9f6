//! Command handlers for the sprout CLI.
//!
//! Each handler loads the collection from the data file, operates through
//! the core, and saves back. Skipped lines and defaulted fields are
//! reported through the injected [`TracingSink`].

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Local;

use sprout_core::collection::PlantCollection;
use sprout_core::observer::TracingSink;
use sprout_core::record::PlantRecord;
use sprout_core::store;

use crate::config;

fn load(path: &Path, sink: &TracingSink) -> PlantCollection {
    store::load_collection(path, Local::now().date_naive(), sink)
}

fn save(path: &Path, collection: &PlantCollection, sink: &TracingSink) -> Result<()> {
    store::save_collection(path, collection, sink)
        .with_context(|| format!("failed to save plants to {}", path.display()))
}

/// `sprout init`: write the config file.
pub fn run_init(data_file: &str, force: bool) -> Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        storage: config::StorageSection {
            data_file: data_file.to_string(),
        },
    };
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  storage.data_file = {data_file}");
    Ok(())
}

/// `sprout list`: watering info per record, or a JSON dump.
pub fn run_list(path: &Path, json: bool) -> Result<()> {
    let sink = TracingSink;
    let collection = load(path, &sink);

    if json {
        println!("{}", serde_json::to_string_pretty(collection.records())?);
        return Ok(());
    }

    if collection.is_empty() {
        println!("No plants tracked yet.");
        return Ok(());
    }
    for record in collection.iter() {
        println!("{}", record.watering_info());
    }
    Ok(())
}

/// `sprout due`: records needing watering today.
pub fn run_due(path: &Path) -> Result<()> {
    let sink = TracingSink;
    let collection = load(path, &sink);
    let due = collection.filter_needing_watering(Local::now().date_naive());

    if due.is_empty() {
        println!("Nothing needs watering.");
        return Ok(());
    }
    for record in &due {
        println!("{}", record.watering_info());
    }
    Ok(())
}

/// `sprout add`: append a plant planted and watered today.
pub fn run_add(path: &Path, name: &str, notes: &str, frequency: i64) -> Result<()> {
    let sink = TracingSink;
    let mut collection = load(path, &sink);

    let today = Local::now().date_naive();
    let record = PlantRecord::new(name, notes, today, today, frequency)
        .with_context(|| format!("cannot add plant {name:?}"))?;
    tracing::info!(name = %record.name(), frequency, "new plant added");
    println!("Added: {}", record.watering_info());
    collection.add(record);

    save(path, &collection, &sink)
}

/// `sprout water`: record a watering for one plant.
pub fn run_water(path: &Path, index: usize) -> Result<()> {
    let sink = TracingSink;
    let mut collection = load(path, &sink);

    let record = collection
        .get_mut(index)
        .context("cannot water plant")?;
    record.water_now();
    println!("Watered: {}", record.watering_info());

    save(path, &collection, &sink)
}

/// `sprout remove`: drop a plant by its 0-based position.
pub fn run_remove(path: &Path, index: usize) -> Result<()> {
    let sink = TracingSink;
    let mut collection = load(path, &sink);

    collection
        .remove_at(index)
        .context("cannot remove plant")?;
    tracing::info!(index, "plant removed");
    println!("Removed plant at position {index}.");

    save(path, &collection, &sink)
}

/// Key for `sprout sort`.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SortKey {
    /// Ascending by name.
    Name,
    /// Earliest-watered first.
    Watered,
}

/// `sprout sort`: reorder the stored collection.
pub fn run_sort(path: &Path, key: SortKey) -> Result<()> {
    let sink = TracingSink;
    let mut collection = load(path, &sink);

    match key {
        SortKey::Name => collection.sort_by_name(),
        SortKey::Watered => collection.sort_by_last_watered(),
    }
    println!("Sorted {} plants.", collection.len());

    save(path, &collection, &sink)
}
