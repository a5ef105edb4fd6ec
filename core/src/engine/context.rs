use auralyte_types::{AbilityId, StatusId};

use crate::game_data::{AbilityInfo, GameCatalog, StatusInfo};
use crate::snapshot::StateSnapshot;
use crate::tracking::{DurationTracker, KnownAbilities};

/// Everything a resolution pass reads from or writes to.
///
/// The snapshot and catalog are read-only; the trackers are the only state
/// a pass mutates, and they are owned by the caller.
pub struct EvalContext<'a, S: StateSnapshot + ?Sized> {
    pub snapshot: &'a S,
    pub catalog: &'a GameCatalog,
    pub durations: &'a mut DurationTracker,
    pub known: &'a mut KnownAbilities,
}

impl<'a, S: StateSnapshot + ?Sized> EvalContext<'a, S> {
    pub fn new(
        snapshot: &'a S,
        catalog: &'a GameCatalog,
        durations: &'a mut DurationTracker,
        known: &'a mut KnownAbilities,
    ) -> Self {
        Self { snapshot, catalog, durations, known }
    }

    /// Catalog entry for a configured ability, after hotbar replacement
    pub fn ability(&self, configured: AbilityId) -> Option<&'a AbilityInfo> {
        let adjusted = self.snapshot.adjusted_ability_id(configured);
        let info = self.catalog.ability(adjusted);
        if info.is_none() {
            tracing::trace!(configured, adjusted, "Ability not in catalog");
        }
        info
    }

    pub fn status(&self, status: StatusId) -> Option<&'a StatusInfo> {
        self.catalog.status(status)
    }

    /// If the status is on the player, feed its remaining time to the
    /// duration tracker and return it
    pub fn sample_status(&mut self, status: StatusId) -> Option<f32> {
        if !self.snapshot.is_status_active(status) {
            return None;
        }
        let remaining = self.snapshot.status_remaining(status);
        self.durations.sample_remaining(status, remaining);
        Some(remaining)
    }
}
