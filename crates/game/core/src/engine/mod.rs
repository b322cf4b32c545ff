//! Stat engine: pure transition rules for every pet action.
//!
//! All rules share the same shape: adjust each vital, clamp into
//! `[0, 100]`, then subtract an extra 10 health (floored at 0) when hunger,
//! sleep or happiness has bottomed out. Individual actions layer a few
//! quirks on top, documented on each function.
mod delta;
mod transition;

pub use delta::StatDelta;
pub use transition::{
    add_score, apply_delta, apply_feed, apply_item, apply_sleep, apply_vet, is_dead,
};
