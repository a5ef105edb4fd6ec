//! Ability and status catalog
//!
//! The catalog is the engine's view of the game's data sheets: which
//! abilities and statuses exist, their names, icons and base charge counts.
//! Anything missing from the catalog is treated as unknown by the engine.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use auralyte_types::{AbilityId, IconId, StatusId};

/// Static data for one ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityInfo {
    pub id: AbilityId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub icon: IconId,

    /// Charges without level-gated overrides
    #[serde(default = "default_charges")]
    pub max_charges: u32,
}

/// Static data for one status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusInfo {
    pub id: StatusId,

    #[serde(default)]
    pub name: String,
}

fn default_charges() -> u32 {
    1
}

/// On-disk shape of a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default, rename = "ability")]
    pub abilities: Vec<AbilityInfo>,

    #[serde(default, rename = "status")]
    pub statuses: Vec<StatusInfo>,
}

/// Indexed ability/status lookup tables
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    abilities: HashMap<AbilityId, AbilityInfo>,
    statuses: HashMap<StatusId, StatusInfo>,
}

impl GameCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a parsed config file
    pub fn from_config(config: CatalogConfig) -> Self {
        let mut catalog = Self::new();
        let duplicates = catalog.add_config(config);
        if !duplicates.is_empty() {
            tracing::warn!(?duplicates, "Duplicate catalog ids, later entries win");
        }
        catalog
    }

    /// Add entries from a config, returns ids that replaced an existing entry
    pub fn add_config(&mut self, config: CatalogConfig) -> Vec<u32> {
        let mut duplicates = Vec::new();

        for ability in config.abilities {
            let id = ability.id;
            if self.add_ability(ability).is_some() {
                duplicates.push(id);
            }
        }
        for status in config.statuses {
            let id = status.id;
            if self.add_status(status).is_some() {
                duplicates.push(id);
            }
        }

        duplicates
    }

    /// Insert an ability, returning the entry it replaced
    pub fn add_ability(&mut self, mut ability: AbilityInfo) -> Option<AbilityInfo> {
        ability.max_charges = ability.max_charges.max(1);
        self.abilities.insert(ability.id, ability)
    }

    /// Insert a status, returning the entry it replaced
    pub fn add_status(&mut self, status: StatusInfo) -> Option<StatusInfo> {
        self.statuses.insert(status.id, status)
    }

    pub fn ability(&self, id: AbilityId) -> Option<&AbilityInfo> {
        self.abilities.get(&id)
    }

    pub fn status(&self, id: StatusId) -> Option<&StatusInfo> {
        self.statuses.get(&id)
    }

    /// Find an ability by exact name (case-insensitive)
    pub fn ability_by_name(&self, name: &str) -> Option<&AbilityInfo> {
        self.abilities
            .values()
            .find(|ability| ability.name.eq_ignore_ascii_case(name))
    }

    /// Find a status by exact name (case-insensitive)
    pub fn status_by_name(&self, name: &str) -> Option<&StatusInfo> {
        self.statuses
            .values()
            .find(|status| status.name.eq_ignore_ascii_case(name))
    }

    pub fn ability_count(&self) -> usize {
        self.abilities.len()
    }

    pub fn status_count(&self) -> usize {
        self.statuses.len()
    }
}
