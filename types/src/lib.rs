//! Shared configuration types for Auralyte.
//!
//! Everything in here is plain data: the aura tree as the editor writes it
//! and the engine reads it. Behaviour lives in `auralyte-core`.

mod attribute;
mod condition;
pub mod formatting;
mod geometry;
mod node;

pub use attribute::{
    Attribute, AttributeChannel, DarkenMode, EffectSetting, GlowMode, GreyscaleMode, SpinnerMode,
    TimerKind, TimerSource,
};
pub use condition::{Condition, ConditionCategory, ConditionTest, Polarity, Role};
pub use geometry::Vec2;
pub use node::{AttributeBundle, AuraConfig, Node, NodeKind};

/// Game ability (action) identifier.
pub type AbilityId = u32;
/// Game status (buff/debuff) identifier.
pub type StatusId = u32;
/// Player job identifier.
pub type JobId = u32;
/// Icon texture identifier.
pub type IconId = u32;
