//! Condition gates
//!
//! A condition is a single boolean test against live player state. Lists of
//! conditions gate nodes and attribute bundles with AND semantics.

use serde::{Deserialize, Serialize};

use crate::{AbilityId, JobId, StatusId};

// ═══════════════════════════════════════════════════════════════════════════
// Roles
// ═══════════════════════════════════════════════════════════════════════════

/// Combat role a job belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Tank,
    Healer,
    Melee,
    Ranged,
    Caster,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Tank, Role::Healer, Role::Melee, Role::Ranged, Role::Caster];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tank => "Tank",
            Self::Healer => "Healer",
            Self::Melee => "Melee",
            Self::Ranged => "Ranged",
            Self::Caster => "Caster",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Condition
// ═══════════════════════════════════════════════════════════════════════════

/// Whether the raw test result is used as-is or flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// "is" / "does"
    #[default]
    Normal,
    /// "is not" / "doesn't"
    Inverted,
}

impl Polarity {
    /// Apply this polarity to a raw test result
    pub fn apply(self, raw: bool) -> bool {
        match self {
            Self::Normal => raw,
            Self::Inverted => !raw,
        }
    }
}

/// Top-level grouping of condition tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionCategory {
    PlayerAttribute,
    AbilityState,
    StatusState,
}

/// The test a condition performs.
///
/// `Unset` is what a freshly added condition holds before the user picks a
/// test; it always passes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ConditionTest {
    #[default]
    Unset,

    /// Player's current job is exactly this job
    Job { job: JobId },

    /// Player's current job belongs to this role
    Role { role: Role },

    /// Ability is usable by the player (learned and not replaced)
    AbilityKnown { ability: AbilityId },

    /// Ability has no charge available / is recasting
    AbilityOnCooldown { ability: AbilityId },

    /// Status is currently on the player
    StatusActive { status: StatusId },
}

impl ConditionTest {
    pub fn category(&self) -> Option<ConditionCategory> {
        match self {
            Self::Unset => None,
            Self::Job { .. } | Self::Role { .. } => Some(ConditionCategory::PlayerAttribute),
            Self::AbilityKnown { .. } | Self::AbilityOnCooldown { .. } => {
                Some(ConditionCategory::AbilityState)
            }
            Self::StatusActive { .. } => Some(ConditionCategory::StatusState),
        }
    }
}

/// A single gate test with its polarity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Condition {
    /// 1-based position within its list (reassigned on reindex)
    #[serde(default)]
    pub id: u32,

    #[serde(default)]
    pub test: ConditionTest,

    #[serde(default)]
    pub polarity: Polarity,
}

impl Condition {
    pub fn new(test: ConditionTest) -> Self {
        Self { id: 0, test, polarity: Polarity::Normal }
    }

    pub fn inverted(test: ConditionTest) -> Self {
        Self { id: 0, test, polarity: Polarity::Inverted }
    }

    pub fn is_unset(&self) -> bool {
        self.test == ConditionTest::Unset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_flips_result() {
        assert!(Polarity::Normal.apply(true));
        assert!(!Polarity::Inverted.apply(true));
        assert!(Polarity::Inverted.apply(false));
    }

    #[test]
    fn category_follows_test() {
        assert_eq!(ConditionTest::Unset.category(), None);
        assert_eq!(
            ConditionTest::Role { role: Role::Tank }.category(),
            Some(ConditionCategory::PlayerAttribute)
        );
        assert_eq!(
            ConditionTest::AbilityOnCooldown { ability: 7 }.category(),
            Some(ConditionCategory::AbilityState)
        );
        assert_eq!(
            ConditionTest::StatusActive { status: 50 }.category(),
            Some(ConditionCategory::StatusState)
        );
    }

    #[test]
    fn parse_condition_toml() {
        let toml = r#"
polarity = "inverted"

[test]
type = "role"
role = "healer"
"#;
        let condition: Condition = toml::from_str(toml).unwrap();
        assert_eq!(condition.polarity, Polarity::Inverted);
        assert_eq!(condition.test, ConditionTest::Role { role: Role::Healer });
    }

    #[test]
    fn missing_test_is_unset() {
        let condition: Condition = toml::from_str("id = 3").unwrap();
        assert!(condition.is_unset());
        assert_eq!(condition.polarity, Polarity::Normal);
    }
}
