//! Runtime layer for the pet game.
//!
//! This crate wires the pure rules in `pet-core` and the settings from
//! `pet-content` into a session API, and persists sessions as plain-text
//! save files.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session facade and its builder
//! - [`repository`] provides the save codec and slot repositories
//! - [`config`] reads runtime settings from the environment
pub mod config;
pub mod repository;
pub mod session;

mod error;

pub use config::RuntimeConfig;
pub use error::{Result, SessionError};
pub use repository::{
    DecodeError, FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveRecord,
    SaveRepository,
};
pub use session::{Session, SessionBuilder};
