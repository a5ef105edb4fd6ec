//! Static checks over an aura tree
//!
//! None of these stop the engine: unset entries are no-ops and the inactive
//! list of a node is ignored. They usually point at an unfinished edit.

use std::fmt;

use auralyte_core::GameCatalog;
use auralyte_types::{Attribute, Condition, ConditionTest, Node, NodeKind, TimerSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
    UnsetCondition,
    UnsetAttribute { bundle: u32 },
    GroupHasBundles(usize),
    IndicatorHasChildren(usize),
    EmptyGroup,
    UnknownAbility(u32),
    UnknownStatus(u32),
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsetCondition => write!(f, "condition has no test"),
            Self::UnsetAttribute { bundle } => {
                write!(f, "bundle {} has an attribute with no type", bundle)
            }
            Self::GroupHasBundles(n) => {
                write!(f, "group carries {} bundle(s) that are never drawn", n)
            }
            Self::IndicatorHasChildren(n) => {
                write!(f, "indicator carries {} child node(s) that are never drawn", n)
            }
            Self::EmptyGroup => write!(f, "group has no children"),
            Self::UnknownAbility(id) => write!(f, "ability {} is not in the catalog", id),
            Self::UnknownStatus(id) => write!(f, "status {} is not in the catalog", id),
        }
    }
}

/// An issue and the node it was found on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    /// Node names from the top level down, joined by " / "
    pub path: String,
    pub issue: LintIssue,
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.issue)
    }
}

/// Check a whole tree. Catalog checks are skipped without a catalog.
pub fn lint_nodes(nodes: &[Node], catalog: Option<&GameCatalog>) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    for node in nodes {
        lint_node(node, "", catalog, &mut warnings);
    }
    warnings
}

fn lint_node(node: &Node, parent: &str, catalog: Option<&GameCatalog>, out: &mut Vec<LintWarning>) {
    let path = if parent.is_empty() {
        node.name.clone()
    } else {
        format!("{} / {}", parent, node.name)
    };
    let mut push = |issue| out.push(LintWarning { path: path.clone(), issue });

    for issue in node.conditions.iter().filter_map(|c| check_condition(c, catalog)) {
        push(issue);
    }

    match node.kind {
        NodeKind::Indicator => {
            if !node.children.is_empty() {
                push(LintIssue::IndicatorHasChildren(node.children.len()));
            }
            for bundle in &node.bundles {
                for issue in bundle.conditions.iter().filter_map(|c| check_condition(c, catalog)) {
                    push(issue);
                }
                for attribute in &bundle.attributes {
                    if let Some(issue) = check_attribute(attribute, bundle.id, catalog) {
                        push(issue);
                    }
                }
            }
        }
        NodeKind::Group => {
            if !node.bundles.is_empty() {
                push(LintIssue::GroupHasBundles(node.bundles.len()));
            }
            if node.children.is_empty() {
                push(LintIssue::EmptyGroup);
            }
            for child in &node.children {
                lint_node(child, &path, catalog, out);
            }
        }
    }
}

fn check_condition(condition: &Condition, catalog: Option<&GameCatalog>) -> Option<LintIssue> {
    match condition.test {
        ConditionTest::Unset => Some(LintIssue::UnsetCondition),
        ConditionTest::AbilityKnown { ability } | ConditionTest::AbilityOnCooldown { ability } => {
            missing_ability(ability, catalog)
        }
        ConditionTest::StatusActive { status } => missing_status(status, catalog),
        ConditionTest::Job { .. } | ConditionTest::Role { .. } => None,
    }
}

fn check_attribute(
    attribute: &Attribute,
    bundle: u32,
    catalog: Option<&GameCatalog>,
) -> Option<LintIssue> {
    match attribute {
        Attribute::Unset => Some(LintIssue::UnsetAttribute { bundle }),
        Attribute::Icon { ability } => missing_ability(*ability, catalog),
        Attribute::Timer { source } => match *source {
            TimerSource::Cooldown { ability } | TimerSource::ChargeCooldown { ability } => {
                missing_ability(ability, catalog)
            }
            TimerSource::Buff { status } => missing_status(status, catalog),
        },
        Attribute::Size { .. } | Attribute::Effect { .. } => None,
    }
}

// Replacement ids are only known at runtime, so only the configured id is checked
fn missing_ability(id: u32, catalog: Option<&GameCatalog>) -> Option<LintIssue> {
    let catalog = catalog?;
    catalog.ability(id).is_none().then_some(LintIssue::UnknownAbility(id))
}

fn missing_status(id: u32, catalog: Option<&GameCatalog>) -> Option<LintIssue> {
    let catalog = catalog?;
    catalog.status(id).is_none().then_some(LintIssue::UnknownStatus(id))
}

#[cfg(test)]
mod tests {
    use auralyte_core::game_data::{AbilityInfo, StatusInfo};
    use auralyte_types::{AttributeBundle, Vec2};

    use super::*;

    fn catalog() -> GameCatalog {
        let mut catalog = GameCatalog::new();
        catalog.add_ability(AbilityInfo {
            id: 7561,
            name: "Swiftcast".into(),
            icon: 2606,
            max_charges: 1,
        });
        catalog.add_status(StatusInfo { id: 50, name: "Sprint".into() });
        catalog
    }

    fn issues(warnings: &[LintWarning]) -> Vec<&LintIssue> {
        warnings.iter().map(|w| &w.issue).collect()
    }

    #[test]
    fn clean_tree_has_no_warnings() {
        let nodes = vec![Node::group(
            "g",
            Vec2::ZERO,
            vec![Node::indicator(
                "swift",
                Vec2::ZERO,
                vec![AttributeBundle::gated(
                    vec![Condition::new(ConditionTest::StatusActive { status: 50 })],
                    vec![Attribute::Icon { ability: 7561 }],
                )],
            )],
        )];
        assert!(lint_nodes(&nodes, Some(&catalog())).is_empty());
    }

    #[test]
    fn unset_entries_are_flagged() {
        let mut bundle = AttributeBundle::new(vec![Attribute::Unset]);
        bundle.id = 3;
        let nodes = vec![Node::indicator("new", Vec2::ZERO, vec![bundle])
            .with_conditions(vec![Condition::default()])];

        let warnings = lint_nodes(&nodes, None);
        assert_eq!(
            issues(&warnings),
            vec![&LintIssue::UnsetCondition, &LintIssue::UnsetAttribute { bundle: 3 }]
        );
        assert_eq!(warnings[1].to_string(), "new: bundle 3 has an attribute with no type");
    }

    #[test]
    fn inactive_lists_and_empty_groups() {
        let mut group = Node::group("g", Vec2::ZERO, vec![]);
        group.bundles.push(AttributeBundle::default());
        let mut indicator = Node::indicator("i", Vec2::ZERO, vec![]);
        indicator.children.push(Node::default());

        let warnings = lint_nodes(&[group, indicator], None);
        assert_eq!(
            issues(&warnings),
            vec![
                &LintIssue::GroupHasBundles(1),
                &LintIssue::EmptyGroup,
                &LintIssue::IndicatorHasChildren(1)
            ]
        );
    }

    #[test]
    fn unknown_ids_need_a_catalog() {
        let nodes = vec![Node::group(
            "outer",
            Vec2::ZERO,
            vec![Node::indicator(
                "inner",
                Vec2::ZERO,
                vec![AttributeBundle::new(vec![
                    Attribute::Timer { source: TimerSource::Cooldown { ability: 1 } },
                    Attribute::Timer { source: TimerSource::Buff { status: 2 } },
                ])],
            )],
        )];

        assert!(lint_nodes(&nodes, None).is_empty());

        let warnings = lint_nodes(&nodes, Some(&catalog()));
        assert_eq!(
            issues(&warnings),
            vec![&LintIssue::UnknownAbility(1), &LintIssue::UnknownStatus(2)]
        );
        assert_eq!(warnings[0].path, "outer / inner");
    }
}
