//! Drive a saved pet headlessly
//!
//! Loads a slot (or starts a new pet), applies one action, optionally uses an
//! item and brings the pet home for a reward, then saves. Like the game, it
//! will not overwrite another occupied slot without confirmation (`--force`);
//! saving back into the slot it loaded needs none.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use pet_core::{Action, ActionKind, ConsumeOutcome, PetId, StatDelta};
use pet_runtime::{RuntimeConfig, SaveRepository, Session};

use super::open_repository;

/// Apply an action to a saved pet and save the result
#[derive(Parser)]
pub struct Act {
    /// Save slot to load (1-based)
    #[arg(value_name = "SLOT")]
    slot: u32,

    /// Action to apply: feed, goToSleep, play or takeToVet
    #[arg(value_name = "ACTION")]
    action: ActionKind,

    /// Start a new pet with this id instead of loading the slot
    #[arg(long, value_name = "PET_ID")]
    new: Option<u32>,

    /// Slot to save into (defaults to SLOT)
    #[arg(long, value_name = "SLOT")]
    to: Option<u32>,

    /// Overwrite the destination slot if it already holds a save
    #[arg(long)]
    force: bool,

    /// Use one unit of this item after the action
    #[arg(long, value_name = "ITEM")]
    use_item: Option<String>,

    /// Bring the pet home afterwards (may grant a reward)
    #[arg(long)]
    home: bool,

    /// Happiness change reported by the play minigame
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    play_happiness: i32,

    /// Score reported by the play minigame
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    play_score: i64,

    /// Custom data directory (defaults to SAVE_DATA_DIR or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Act {
    pub fn execute(self) -> Result<()> {
        let config = RuntimeConfig::from_env();
        let repo = open_repository(&config, self.data_dir.clone())?;
        let destination = self.to.unwrap_or(self.slot);

        if self.refuses_overwrite(repo.is_occupied(destination)) {
            anyhow::bail!(
                "Slot {destination} already holds a save.\n\nHint: pass --force to overwrite it"
            );
        }

        let builder = Session::builder().runtime_config(&config);
        let mut session = match self.new {
            Some(pet_id) => builder.new_session(PetId(pet_id)),
            None => builder
                .load_from(&repo, self.slot)
                .with_context(|| format!("Failed to load slot {}", self.slot))?,
        };

        let action = match self.action {
            ActionKind::Play => Action::play(
                StatDelta::new(self.play_happiness, 0, 0, 0),
                self.play_score,
            ),
            kind => Action::from_kind(kind),
        };
        session.apply_action(action)?;
        println!(
            "{} {} (cooldown {}s)",
            style("Applied").green().bold(),
            self.action,
            session.cooldown_seconds(self.action.as_ref())
        );

        if let Some(name) = &self.use_item {
            match session.consume_item(name) {
                ConsumeOutcome::Consumed { remaining, .. } => {
                    println!("{} {name} ({remaining} left)", style("Used").green().bold())
                }
                ConsumeOutcome::NotFound => {
                    println!("{}", style(format!("No {name} in inventory; nothing happened")).dim())
                }
            }
        }

        if self.home {
            match session.return_home(self.action) {
                Some(reward) => println!("{} {reward}", style("Found").green().bold()),
                None => println!("{}", style("No reward this time").dim()),
            }
        }

        let state = session.state();
        println!(
            "  score {} | health {} | hunger {} | sleep {} | happiness {}",
            state.score, state.health, state.hunger, state.sleep, state.happiness
        );
        if session.is_dead() {
            println!("{}", style("Your pet has died.").red().bold());
        }

        session.save_to(&repo, destination)?;
        println!("{} slot {destination}", style("Saved").green().bold());

        Ok(())
    }

    /// Saving back into the slot that was just loaded is not an overwrite.
    fn refuses_overwrite(&self, destination_occupied: bool) -> bool {
        let destination = self.to.unwrap_or(self.slot);
        let reloaded_slot = self.new.is_none() && destination == self.slot;
        destination_occupied && !reloaded_slot && !self.force
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Act {
        Act::try_parse_from(std::iter::once("act").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn acting_on_a_slot_saves_back_without_force() {
        assert!(!parse(&["2", "feed"]).refuses_overwrite(true));
        assert!(!parse(&["2", "feed", "--to", "2"]).refuses_overwrite(true));
    }

    #[test]
    fn other_occupied_destinations_need_force() {
        assert!(parse(&["2", "feed", "--to", "3"]).refuses_overwrite(true));
        assert!(parse(&["2", "feed", "--new", "1"]).refuses_overwrite(true));
        assert!(!parse(&["2", "feed", "--to", "3", "--force"]).refuses_overwrite(true));
        assert!(!parse(&["2", "feed", "--to", "3"]).refuses_overwrite(false));
    }
}
