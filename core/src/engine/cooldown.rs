//! Recast and charge math
//!
//! Native recast timers report one elapsed/total pair per ability, even for
//! abilities with several charges. For those the total covers every charge,
//! so the per-charge timer and the available charge count are derived from
//! it here. Nothing is cached: the game's timers are the source of truth.

use crate::game_data::{AbilityInfo, max_charges_at_level};
use crate::snapshot::{StateSnapshot, sanitize_secs};

/// Cooldown of one ability at the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CooldownState {
    /// Seconds since the recast started, 0 when not recasting
    pub elapsed: f32,
    /// Full recast time, `None` when no recast is running
    pub total: Option<f32>,
    /// Charge count after level overrides, always >= 1
    pub max_charges: u32,
    /// Available charges, only reported for multi-charge abilities
    pub charges: Option<u32>,
}

impl CooldownState {
    /// Recast time of a single charge
    pub fn per_charge_max(&self) -> Option<f32> {
        self.total.map(|total| total / self.max_charges as f32)
    }

    /// Progress through the charge currently recovering
    pub fn per_charge_elapsed(&self) -> f32 {
        match self.per_charge_max() {
            Some(per_charge) if per_charge > 0.0 => self.elapsed % per_charge,
            _ => 0.0,
        }
    }

    pub fn is_on_cooldown(&self) -> bool {
        match self.charges {
            Some(charges) => charges == 0,
            None => self.elapsed > 0.0,
        }
    }
}

/// Read the recast state of an already-adjusted ability from the snapshot
pub fn compute_cooldown<S: StateSnapshot + ?Sized>(
    ability: &AbilityInfo,
    snapshot: &S,
) -> CooldownState {
    let raw_total = sanitize_secs(snapshot.total_recast(ability.id));
    let (elapsed, total) = if raw_total > 0.0 {
        (sanitize_secs(snapshot.elapsed_recast(ability.id)), Some(raw_total))
    } else {
        (0.0, None)
    };

    let max_charges =
        max_charges_at_level(ability.id, ability.max_charges, snapshot.current_level());

    let charges = (max_charges > 1).then(|| match total {
        Some(total) if elapsed > 0.0 => {
            let per_charge = total / max_charges as f32;
            ((elapsed / per_charge).floor() as u32).min(max_charges)
        }
        _ => max_charges,
    });

    CooldownState { elapsed, total, max_charges, charges }
}
