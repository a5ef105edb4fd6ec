//! In-memory snapshot provider
//!
//! Holds a frame's worth of state in plain maps. Used by the replay tool and
//! throughout the tests.

use hashbrown::HashMap;

use auralyte_types::{AbilityId, JobId, StatusId};

use super::{AbilityStateCode, StateSnapshot};

/// Recorded state of one ability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityReading {
    pub state: AbilityStateCode,
    pub elapsed: f32,
    pub total: f32,
}

impl AbilityReading {
    /// Known and off cooldown
    pub fn ready() -> Self {
        Self { state: AbilityStateCode::Ready, elapsed: 0.0, total: 0.0 }
    }

    /// Known and part-way through a recast
    pub fn recasting(elapsed: f32, total: f32) -> Self {
        Self { state: AbilityStateCode::Other(582), elapsed, total }
    }

    pub fn with_state(mut self, state: AbilityStateCode) -> Self {
        self.state = state;
        self
    }
}

/// Snapshot backed by explicit values
#[derive(Debug, Clone, Default)]
pub struct FixedSnapshot {
    pub job: Option<JobId>,
    pub level: u32,
    abilities: HashMap<AbilityId, AbilityReading>,
    statuses: HashMap<StatusId, f32>,
    replacements: HashMap<AbilityId, AbilityId>,
    visible_interfaces: Vec<String>,
}

impl FixedSnapshot {
    pub fn new(job: JobId, level: u32) -> Self {
        Self { job: Some(job), level, ..Default::default() }
    }

    /// A snapshot with no local player
    pub fn without_player() -> Self {
        Self::default()
    }

    pub fn with_ability(mut self, ability: AbilityId, reading: AbilityReading) -> Self {
        self.set_ability(ability, reading);
        self
    }

    pub fn with_status(mut self, status: StatusId, remaining: f32) -> Self {
        self.set_status(status, remaining);
        self
    }

    pub fn with_replacement(mut self, from: AbilityId, to: AbilityId) -> Self {
        self.replacements.insert(from, to);
        self
    }

    pub fn with_visible_interface(mut self, name: impl Into<String>) -> Self {
        self.visible_interfaces.push(name.into());
        self
    }

    pub fn set_ability(&mut self, ability: AbilityId, reading: AbilityReading) {
        self.abilities.insert(ability, reading);
    }

    pub fn set_status(&mut self, status: StatusId, remaining: f32) {
        self.statuses.insert(status, remaining);
    }

    pub fn remove_status(&mut self, status: StatusId) {
        self.statuses.remove(&status);
    }
}

impl StateSnapshot for FixedSnapshot {
    fn current_job(&self) -> Option<JobId> {
        self.job
    }

    fn current_level(&self) -> u32 {
        self.level
    }

    fn adjusted_ability_id(&self, ability: AbilityId) -> AbilityId {
        self.replacements.get(&ability).copied().unwrap_or(ability)
    }

    fn ability_state(&self, ability: AbilityId) -> AbilityStateCode {
        self.abilities
            .get(&ability)
            .map(|reading| reading.state)
            .unwrap_or(AbilityStateCode::Unknown)
    }

    fn elapsed_recast(&self, ability: AbilityId) -> f32 {
        self.abilities.get(&ability).map(|r| r.elapsed).unwrap_or(0.0)
    }

    fn total_recast(&self, ability: AbilityId) -> f32 {
        self.abilities.get(&ability).map(|r| r.total).unwrap_or(0.0)
    }

    fn is_status_active(&self, status: StatusId) -> bool {
        self.statuses.contains_key(&status)
    }

    fn status_remaining(&self, status: StatusId) -> f32 {
        self.statuses.get(&status).copied().unwrap_or(0.0)
    }

    fn is_interface_visible(&self, name: &str) -> bool {
        self.visible_interfaces.iter().any(|visible| visible == name)
    }
}
