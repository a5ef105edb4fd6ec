//! Live game state, as seen by the engine.
//!
//! The engine never talks to the game directly. Everything it needs for a
//! frame comes through [`StateSnapshot`], which is assumed to be consistent
//! for the duration of one resolution pass. Implementations must not fail:
//! unavailable data is reported as "unknown" codes, zero timers or `None`.

mod fixed;

pub use fixed::{AbilityReading, FixedSnapshot};

use auralyte_types::{AbilityId, JobId, StatusId};

/// Raw native action status codes
const STATE_READY: u32 = 0;
const STATE_INVALID_TARGET: u32 = 572;
const STATE_UNKNOWN: u32 = 573;
const STATE_BUSY: u32 = 579;
const STATE_CASTING: u32 = 580;
const STATE_USING: u32 = 1262;

/// Decoded action status of an ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityStateCode {
    /// Usable right now
    Ready,
    /// Usable, but the current target is not valid for it
    InvalidTarget,
    /// The player does not have this ability
    Unknown,
    /// Animation lock or similar transient state
    Busy,
    Casting,
    Using,
    /// Any other status (out of range, no resources, recasting, ...)
    Other(u32),
}

impl AbilityStateCode {
    pub fn from_raw(code: u32) -> Self {
        match code {
            STATE_READY => Self::Ready,
            STATE_INVALID_TARGET => Self::InvalidTarget,
            STATE_UNKNOWN => Self::Unknown,
            STATE_BUSY => Self::Busy,
            STATE_CASTING => Self::Casting,
            STATE_USING => Self::Using,
            other => Self::Other(other),
        }
    }

    pub fn raw(self) -> u32 {
        match self {
            Self::Ready => STATE_READY,
            Self::InvalidTarget => STATE_INVALID_TARGET,
            Self::Unknown => STATE_UNKNOWN,
            Self::Busy => STATE_BUSY,
            Self::Casting => STATE_CASTING,
            Self::Using => STATE_USING,
            Self::Other(code) => code,
        }
    }

    /// The state proves the player has the ability
    pub fn proves_known(self) -> bool {
        matches!(self, Self::Ready | Self::InvalidTarget)
    }
}

/// Read-only view of the local player's state for the current frame
pub trait StateSnapshot {
    /// Current job, `None` when there is no local player
    fn current_job(&self) -> Option<JobId>;

    fn current_level(&self) -> u32;

    /// Id of the ability that currently replaces `ability` on the hotbar
    fn adjusted_ability_id(&self, ability: AbilityId) -> AbilityId {
        ability
    }

    fn ability_state(&self, ability: AbilityId) -> AbilityStateCode;

    /// Seconds elapsed in the ability's recast, 0 when not recasting
    fn elapsed_recast(&self, ability: AbilityId) -> f32;

    /// Total recast in seconds, 0 when not recasting
    fn total_recast(&self, ability: AbilityId) -> f32;

    fn is_status_active(&self, status: StatusId) -> bool;

    /// Remaining seconds of a status on the player, 0 when absent
    fn status_remaining(&self, status: StatusId) -> f32;

    /// Whether a named native interface window is currently shown
    fn is_interface_visible(&self, _name: &str) -> bool {
        false
    }
}

/// Clamp a timer read to a non-negative finite number
pub(crate) fn sanitize_secs(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}
