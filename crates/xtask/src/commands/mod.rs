//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod act;
mod clean;
mod read_save;
mod show_config;

pub use act::Act;
pub use clean::Clean;
pub use read_save::ReadSave;
pub use show_config::ShowConfig;

use std::path::PathBuf;

use pet_runtime::{FileSaveRepository, RuntimeConfig};

/// Opens the slot repository, honoring an explicit directory override.
fn open_repository(
    config: &RuntimeConfig,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<FileSaveRepository> {
    let dir = data_dir.unwrap_or_else(|| config.save_dir.clone());
    Ok(FileSaveRepository::with_slots(&dir, config.save_slots)?)
}
