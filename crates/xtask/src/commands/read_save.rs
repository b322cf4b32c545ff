//! Read and inspect save files
//!
//! Decodes `save{N}.txt` files (or any save file by path) and displays their
//! contents.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use pet_core::{ItemCategory, PetState, Stat};
use pet_runtime::repository::read_save_file;
use pet_runtime::{RuntimeConfig, SaveRecord, SaveRepository};

use super::open_repository;

/// Read and inspect save files
#[derive(Parser)]
pub struct ReadSave {
    /// Save slot to read (1-based)
    #[arg(value_name = "SLOT", required_unless_present = "file")]
    slot: Option<u32>,

    /// Read this save file instead of a slot
    #[arg(long, value_name = "PATH", conflicts_with = "slot")]
    file: Option<PathBuf>,

    /// Custom data directory (defaults to SAVE_DATA_DIR or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Stats and inventory
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl ReadSave {
    pub fn execute(self) -> Result<()> {
        let config = RuntimeConfig::from_env();

        let (source, record) = match (self.file, self.slot) {
            (Some(path), _) => {
                let record = read_save_file(&path)
                    .with_context(|| format!("Failed to read save file: {}", path.display()))?;
                (path.display().to_string(), record)
            }
            (None, Some(slot)) => {
                let repo = open_repository(&config, self.data_dir)?;
                let record = repo
                    .load(slot)
                    .with_context(|| format!("Failed to read save slot {slot}"))?;
                (format!("slot {slot}"), record)
            }
            (None, None) => anyhow::bail!("Pass a slot number or --file"),
        };

        println!("{} {}", style("Save:").bold().cyan(), source);
        println!();

        match self.format {
            OutputFormat::Summary => print_summary(&record),
            OutputFormat::Json => print_json(&record)?,
            OutputFormat::Debug => println!("{record:#?}"),
        }

        Ok(())
    }
}

fn print_summary(record: &SaveRecord) {
    let state = &record.state;

    println!("{}", style("=== Pet ===").bold().green());
    println!("  Pet:   {}", state.pet_id);
    println!("  Score: {}", state.score);
    for stat in Stat::ALL {
        println!("  {:<10} {}", format!("{stat}:"), stat_bar(state, stat));
    }
    if state.is_dead() {
        println!("  {}", style("This pet has died.").red().bold());
    }
    println!();

    for category in [ItemCategory::Food, ItemCategory::Gift] {
        let slots = record.inventory.slots(category);
        println!("{}", style(format!("=== {category} ({}) ===", slots.len())).bold().yellow());
        for slot in slots {
            println!("  {:>3} x {}", slot.quantity, slot.item);
        }
        println!();
    }
}

fn stat_bar(state: &PetState, stat: Stat) -> String {
    let value = state.stat(stat);
    let filled = usize::from(value / 5);
    let bar = format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled));
    let bar = match value {
        0..=20 => style(bar).red(),
        21..=50 => style(bar).yellow(),
        _ => style(bar).green(),
    };
    format!("{bar} {value:>3}")
}

fn print_json(record: &SaveRecord) -> Result<()> {
    let json = serde_json::json!({
        "state": record.state,
        "inventory": record.inventory,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
