//! Clean save data command
//!
//! Deletes save slots from the data directory.
//!
//! Safety: Always prompts for confirmation before deletion.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::io::{self, Write};
use std::path::PathBuf;

use pet_runtime::{RuntimeConfig, SaveRepository};

use super::open_repository;

/// Delete save slots
#[derive(Parser, Debug)]
pub struct Clean {
    /// Delete only this slot (defaults to every occupied slot)
    #[arg(long, value_name = "SLOT")]
    slot: Option<u32>,

    /// Skip confirmation prompt (dangerous!)
    #[arg(short = 'y', long)]
    yes: bool,

    /// Custom data directory (defaults to SAVE_DATA_DIR or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let config = RuntimeConfig::from_env();
        let repo = open_repository(&config, self.data_dir.clone())?;

        let targets = match self.slot {
            Some(slot) if repo.is_occupied(slot) => vec![slot],
            Some(slot) => {
                println!("{}", style(format!("Slot {slot} is already empty")).dim());
                return Ok(());
            }
            None => repo.list_slots()?,
        };

        if targets.is_empty() {
            println!("{}", style("Nothing to clean - no saves yet").dim());
            return Ok(());
        }

        println!("{}", style("Clean save data").yellow().bold());
        println!();
        println!("The following will be deleted:");
        for slot in &targets {
            println!("  {} slot {slot}", style("->").cyan());
        }
        println!("    {}", style(repo.base_dir().display()).dim());
        println!();

        if !self.yes && !self.confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        for slot in targets {
            print!("Deleting slot {slot}... ");
            io::stdout().flush()?;

            repo.delete(slot)
                .with_context(|| format!("Failed to delete slot {slot}"))?;

            println!("{}", style("done").green());
        }

        println!();
        println!("{}", style("Cleanup complete!").green().bold());

        Ok(())
    }

    /// Prompt user for confirmation
    fn confirm(&self) -> Result<bool> {
        print!("{} ", style("Proceed? [y/N]").yellow().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }
}
