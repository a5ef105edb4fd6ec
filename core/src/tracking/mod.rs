//! Per-session observation state
//!
//! Some facts cannot be read from a single snapshot and have to be learned
//! by watching the game frame after frame:
//! - **Durations**: statuses only report remaining time, so their maximum is
//!   estimated from observed refreshes.
//! - **Known abilities**: the action status flickers through busy/casting
//!   codes, so "known" is remembered once proven.
//!
//! Both are owned by the caller and passed into each resolution pass; they
//! are not persisted and rebuild themselves as the session runs.

mod durations;
mod known;

pub use durations::{DurationEstimate, DurationTracker};
pub use known::KnownAbilities;
