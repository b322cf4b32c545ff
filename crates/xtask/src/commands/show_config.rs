//! Show game configuration
//!
//! Loads the configuration file the way the game does (JSON first, text
//! scanning as fallback, defaults for anything missing) and prints the result.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use pet_content::loaders::load_document;
use pet_content::{ConfigDocument, GameSettings};
use pet_runtime::RuntimeConfig;

/// Show the settings read from the game configuration file
#[derive(Parser)]
pub struct ShowConfig {
    /// Configuration file (defaults to PET_CONFIG_PATH or json/jsonFile.json)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the parent password instead of masking it
    #[arg(long)]
    reveal_password: bool,
}

impl ShowConfig {
    pub fn execute(self) -> Result<()> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| RuntimeConfig::from_env().config_path);

        println!("{} {}", style("Config:").bold().cyan(), path.display());
        match load_document(&path) {
            Ok(ConfigDocument::Structured(_)) => println!("  parsed as JSON"),
            Ok(ConfigDocument::Raw(_)) => println!(
                "  {}",
                style("not valid JSON; values found by text scanning").yellow()
            ),
            Err(err) => println!("  {} {err:#}", style("unreadable, using defaults:").red()),
        }
        println!();

        let settings = GameSettings::load(&path);
        self.print_settings(&settings);
        Ok(())
    }

    fn print_settings(&self, settings: &GameSettings) {
        println!("{}", style("Cooldowns:").bold().yellow());
        for (kind, seconds) in settings.cooldowns.iter() {
            println!("  {:<10} {seconds}s", kind.to_string());
        }
        println!();

        println!("{}", style("Pets:").bold().yellow());
        for (index, pet) in settings.roster.iter().enumerate() {
            println!("  [{index}] {pet}");
        }
        println!();

        let parental = &settings.parental;
        let password = match (&parental.parent_password, self.reveal_password) {
            (None, _) => style("(none)".to_string()).dim(),
            (Some(password), true) => style(password.clone()),
            (Some(password), false) => style("*".repeat(password.len())),
        };
        println!("{}", style("Parental controls:").bold().yellow());
        println!("  Password:          {password}");
        println!("  Total playtime:    {} min", parental.total_play_time);
        println!("  Average playtime:  {} min", parental.average_play_time);
        println!("  Reset playtime:    {} min", parental.reset_play_time);
        println!("  Pet revival:       {}", parental.pet_revival);
        println!();

        println!("{}", style("Starter inventory:").bold().yellow());
        for slot in settings.starter_inventory.iter() {
            println!("  {:>3} x {}", slot.quantity, slot.item);
        }
    }
}
