//! Sticky "ability known" memory.
//!
//! While the player is casting or animation-locked the action status reports
//! busy codes that say nothing about whether an ability is learned. Reading
//! those as "unknown" makes indicators flicker on every cast, so the last
//! proven answer is kept until the game explicitly reports the ability as
//! unknown again.
//!
//! An explicit "unknown" wipes the memory rather than just reading false for
//! that frame, so an ability lost on a job change stays lost through the busy
//! codes that follow.

use hashbrown::HashSet;

use auralyte_types::AbilityId;

use crate::snapshot::AbilityStateCode;

#[derive(Debug, Clone, Default)]
pub struct KnownAbilities {
    known: HashSet<AbilityId>,
}

impl KnownAbilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a fresh state reading into the memory and return whether the
    /// ability counts as known this frame
    pub fn observe(&mut self, ability: AbilityId, state: AbilityStateCode) -> bool {
        if state.proves_known() {
            self.known.insert(ability);
            true
        } else if state == AbilityStateCode::Unknown {
            self.known.remove(&ability);
            false
        } else {
            self.known.contains(&ability)
        }
    }

    pub fn is_known(&self, ability: AbilityId) -> bool {
        self.known.contains(&ability)
    }

    pub fn clear(&mut self) {
        self.known.clear();
    }
}
