//! Environment facts the rules consult but do not own.
//!
//! Currently this is only the random source; static content (catalogs,
//! cooldowns) is passed in explicitly as values.
pub mod rng;

pub use rng::{PcgRng, RngOracle};
