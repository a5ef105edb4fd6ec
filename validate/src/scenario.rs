//! Recorded game state for replay
//!
//! A scenario is a list of frames, each one a full snapshot. Frames are fed
//! to a single engine in order so trackers evolve as they would live.

use std::path::Path;

use serde::Deserialize;

use auralyte_core::ConfigError;
use auralyte_core::snapshot::{AbilityReading, AbilityStateCode, FixedSnapshot};
use auralyte_types::{AbilityId, JobId, StatusId};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default, rename = "frame")]
    pub frames: Vec<FrameRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrameRecord {
    /// Omitted when there is no local player
    pub job: Option<JobId>,
    pub level: u32,
    pub abilities: Vec<AbilityRecord>,
    pub statuses: Vec<StatusRecord>,
    pub replacements: Vec<Replacement>,
    pub visible_interfaces: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilityRecord {
    pub id: AbilityId,
    /// Raw action status code, 0 is ready
    #[serde(default)]
    pub state: u32,
    #[serde(default)]
    pub elapsed: f32,
    #[serde(default)]
    pub total: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusRecord {
    pub id: StatusId,
    pub remaining: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Replacement {
    pub from: AbilityId,
    pub to: AbilityId,
}

impl From<&FrameRecord> for FixedSnapshot {
    fn from(record: &FrameRecord) -> Self {
        let mut snapshot = match record.job {
            Some(job) => FixedSnapshot::new(job, record.level),
            None => FixedSnapshot::without_player(),
        };

        for ability in &record.abilities {
            snapshot.set_ability(
                ability.id,
                AbilityReading {
                    state: AbilityStateCode::from_raw(ability.state),
                    elapsed: ability.elapsed,
                    total: ability.total,
                },
            );
        }
        for status in &record.statuses {
            snapshot.set_status(status.id, status.remaining);
        }
        for replacement in &record.replacements {
            snapshot = snapshot.with_replacement(replacement.from, replacement.to);
        }
        for name in &record.visible_interfaces {
            snapshot = snapshot.with_visible_interface(name.clone());
        }

        snapshot
    }
}

pub fn parse_scenario(contents: &str, path: &Path) -> Result<Scenario, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_scenario(path: &Path) -> Result<Scenario, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scenario(&contents, path)
}

#[cfg(test)]
mod tests {
    use auralyte_core::StateSnapshot;

    use super::*;

    const SCENARIO: &str = r#"
[[frame]]
job = 24
level = 90
abilities = [{ id = 7561, elapsed = 12.0, total = 60.0, state = 582 }]
statuses = [{ id = 158, remaining = 18.0 }]
replacements = [{ from = 119, to = 16533 }]

[[frame]]
level = 90
visible_interfaces = ["Talk"]
"#;

    #[test]
    fn frames_become_snapshots() {
        let scenario = parse_scenario(SCENARIO, Path::new("scenario.toml")).unwrap();
        assert_eq!(scenario.frames.len(), 2);

        let first = FixedSnapshot::from(&scenario.frames[0]);
        assert_eq!(first.current_job(), Some(24));
        assert_eq!(first.ability_state(7561), AbilityStateCode::Other(582));
        assert_eq!(first.total_recast(7561), 60.0);
        assert_eq!(first.status_remaining(158), 18.0);
        assert_eq!(first.adjusted_ability_id(119), 16533);

        let second = FixedSnapshot::from(&scenario.frames[1]);
        assert_eq!(second.current_job(), None);
        assert!(second.is_interface_visible("Talk"));
    }

    #[test]
    fn missing_state_means_ready() {
        let text = "[[frame]]\njob = 1\nabilities = [{ id = 7 }]\n";
        let scenario = parse_scenario(text, Path::new("s.toml")).unwrap();
        let snapshot = FixedSnapshot::from(&scenario.frames[0]);
        assert_eq!(snapshot.ability_state(7), AbilityStateCode::Ready);
    }
}
