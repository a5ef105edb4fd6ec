//! Aura tree nodes
//!
//! The tree is authored by the editor and read-only to the engine. A node is
//! either an indicator (one drawn element) or a group that offsets its
//! children. Both child lists are kept on every node so switching the kind in
//! the editor does not throw away configuration; only the list matching
//! `kind` is consulted.

use serde::{Deserialize, Serialize};

use crate::{Attribute, Condition, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    #[default]
    Indicator,
    Group,
}

/// Gated set of attribute contributions within an indicator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeBundle {
    /// 1-based position within the indicator (reassigned on reindex)
    #[serde(default)]
    pub id: u32,

    /// All must pass for this bundle to contribute
    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl AttributeBundle {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { id: 0, conditions: Vec::new(), attributes }
    }

    pub fn gated(conditions: Vec<Condition>, attributes: Vec<Attribute>) -> Self {
        Self { id: 0, conditions, attributes }
    }
}

/// Indicator or group in the aura tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// 1-based position among siblings (reassigned on reindex)
    #[serde(default)]
    pub id: u32,

    #[serde(default)]
    pub name: String,

    /// Position relative to the parent's resolved position
    #[serde(default)]
    pub offset: Vec2,

    #[serde(default)]
    pub kind: NodeKind,

    /// All must pass for this node and its subtree to be evaluated
    #[serde(default)]
    pub conditions: Vec<Condition>,

    /// Consulted when `kind` is `Indicator`
    #[serde(default)]
    pub bundles: Vec<AttributeBundle>,

    /// Consulted when `kind` is `Group`
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn indicator(name: impl Into<String>, offset: Vec2, bundles: Vec<AttributeBundle>) -> Self {
        Self {
            name: name.into(),
            offset,
            kind: NodeKind::Indicator,
            bundles,
            ..Default::default()
        }
    }

    pub fn group(name: impl Into<String>, offset: Vec2, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            offset,
            kind: NodeKind::Group,
            children,
            ..Default::default()
        }
    }

    /// Add gate conditions (builder style)
    pub fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn is_group(&self) -> bool {
        self.kind == NodeKind::Group
    }
}

/// Root of a saved aura configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuraConfig {
    /// Top-level nodes, drawn in order
    #[serde(default)]
    pub nodes: Vec<Node>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConditionTest, Role, TimerSource};

    #[test]
    fn parse_aura_tree_toml() {
        let toml = r#"
[[nodes]]
name = "Healer cooldowns"
kind = "group"
offset = { x = 100.0, y = 0.0 }

[[nodes.conditions]]
test = { type = "role", role = "healer" }

[[nodes.children]]
name = "Swiftcast"
offset = { x = 0.0, y = 50.0 }

[[nodes.children.bundles]]
attributes = [
    { type = "icon", ability = 7561 },
    { type = "timer", source = { kind = "cooldown", ability = 7561 } },
]
"#;
        let config: AuraConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.nodes.len(), 1);

        let group = &config.nodes[0];
        assert!(group.is_group());
        assert_eq!(group.offset, Vec2::new(100.0, 0.0));
        assert_eq!(group.conditions[0].test, ConditionTest::Role { role: Role::Healer });

        let child = &group.children[0];
        assert_eq!(child.kind, NodeKind::Indicator);
        assert_eq!(child.bundles[0].attributes.len(), 2);
        assert_eq!(
            child.bundles[0].attributes[1],
            Attribute::Timer { source: TimerSource::Cooldown { ability: 7561 } }
        );
    }

    #[test]
    fn empty_document_is_empty_config() {
        let config: AuraConfig = toml::from_str("").unwrap();
        assert!(config.nodes.is_empty());
    }

    #[test]
    fn round_trip_keeps_inactive_lists() {
        let mut node = Node::indicator("x", Vec2::ZERO, vec![AttributeBundle::default()]);
        node.children.push(Node::default());
        let config = AuraConfig { nodes: vec![node] };

        let text = toml::to_string(&config).unwrap();
        let back: AuraConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
