//! Level-gated charge counts.
//!
//! A few abilities gain an extra charge from a trait learned at a certain
//! level. The catalog only knows the base count, so the override is applied
//! against the player's level on every lookup.

use auralyte_types::AbilityId;
use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeOverride {
    /// Player level at which the override applies
    pub min_level: u32,
    pub max_charges: u32,
}

static CHARGE_OVERRIDES: phf::Map<u32, ChargeOverride> = phf_map! {
    // Essential Dignity
    3614u32 => ChargeOverride { min_level: 78, max_charges: 2 },
};

pub fn charge_override(ability: AbilityId) -> Option<ChargeOverride> {
    CHARGE_OVERRIDES.get(&ability).copied()
}

/// Effective charge count of an ability at the given player level (always >= 1)
pub fn max_charges_at_level(ability: AbilityId, base: u32, level: u32) -> u32 {
    match charge_override(ability) {
        Some(o) if level >= o.min_level => o.max_charges.max(1),
        _ => base.max(1),
    }
}
