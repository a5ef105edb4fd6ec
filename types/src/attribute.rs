//! Attribute contributions
//!
//! Each attribute feeds exactly one visual channel of an indicator. Bundles
//! list attributes in order; the engine keeps the first value per channel.

use serde::{Deserialize, Serialize};

use crate::{AbilityId, StatusId};

// ═══════════════════════════════════════════════════════════════════════════
// Effect Modes
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlowMode {
    On,
    #[default]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinnerMode {
    On,
    /// Spins counter-clockwise
    Reverse,
    #[default]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreyscaleMode {
    On,
    /// Greyscale the icon but leave overlays (timer, charges) coloured
    IconOnly,
    #[default]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DarkenMode {
    Dark,
    Darker,
    Darkest,
    #[default]
    Off,
}

/// One visual effect flag and the mode it is set to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "mode")]
pub enum EffectSetting {
    Glow(GlowMode),
    Spinner(SpinnerMode),
    Greyscale(GreyscaleMode),
    Darken(DarkenMode),
}

// ═══════════════════════════════════════════════════════════════════════════
// Timers
// ═══════════════════════════════════════════════════════════════════════════

/// How a timer is visualised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    Cooldown,
    ChargeCooldown,
    Buff,
}

/// Where a timer reads its progress from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TimerSource {
    /// Full recast of an ability
    Cooldown { ability: AbilityId },
    /// Recast of the next charge of a multi-charge ability
    ChargeCooldown { ability: AbilityId },
    /// Elapsed time of a status on the player
    Buff { status: StatusId },
}

// ═══════════════════════════════════════════════════════════════════════════
// Attribute
// ═══════════════════════════════════════════════════════════════════════════

/// Independently resolved visual channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeChannel {
    Icon,
    Size,
    Timer,
    Glow,
    Spinner,
    Greyscale,
    Darken,
}

/// A declared contribution to one channel
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Attribute {
    /// Freshly added, no type chosen yet; contributes nothing
    #[default]
    Unset,

    /// Borrow the icon of an ability
    Icon { ability: AbilityId },

    /// Square size in pixels
    Size { pixels: u32 },

    Timer { source: TimerSource },

    Effect { effect: EffectSetting },
}

impl Attribute {
    /// Channel this attribute writes, `None` for an unset attribute
    pub fn channel(&self) -> Option<AttributeChannel> {
        match self {
            Self::Unset => None,
            Self::Icon { .. } => Some(AttributeChannel::Icon),
            Self::Size { .. } => Some(AttributeChannel::Size),
            Self::Timer { .. } => Some(AttributeChannel::Timer),
            Self::Effect { effect } => Some(match effect {
                EffectSetting::Glow(_) => AttributeChannel::Glow,
                EffectSetting::Spinner(_) => AttributeChannel::Spinner,
                EffectSetting::Greyscale(_) => AttributeChannel::Greyscale,
                EffectSetting::Darken(_) => AttributeChannel::Darken,
            }),
        }
    }
}
