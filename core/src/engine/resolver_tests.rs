//! Tests for whole-tree resolution
//!
//! Covers positioning, gating, paint order and state carried across frames.

use auralyte_types::{
    Attribute, AttributeBundle, Condition, ConditionTest, EffectSetting, GlowMode, Node, Role,
    TimerKind, TimerSource, Vec2,
};

use super::{AuraEngine, EvalContext, FrameOutcome, RenderSpec, SuppressReason, resolve_nodes};
use crate::config::EngineSettings;
use crate::game_data::{AbilityInfo, GameCatalog, MISSING_ICON_ID, StatusInfo};
use crate::snapshot::{AbilityReading, FixedSnapshot};
use crate::tracking::{DurationTracker, KnownAbilities};

const WHITE_MAGE: u32 = 24;
const WARRIOR: u32 = 21;
const STONE: u32 = 119;
const GLARE: u32 = 16533;
const GLARE_ICON: u32 = 2637;
const DIGNITY: u32 = 3614;
const REGEN: u32 = 158;

fn catalog() -> GameCatalog {
    let mut catalog = GameCatalog::new();
    catalog.add_ability(AbilityInfo {
        id: STONE,
        name: "Stone".into(),
        icon: 2627,
        max_charges: 1,
    });
    catalog.add_ability(AbilityInfo {
        id: GLARE,
        name: "Glare".into(),
        icon: GLARE_ICON,
        max_charges: 1,
    });
    catalog.add_ability(AbilityInfo {
        id: DIGNITY,
        name: "Essential Dignity".into(),
        icon: 3142,
        max_charges: 1,
    });
    catalog.add_status(StatusInfo { id: REGEN, name: "Regen".into() });
    catalog
}

fn healer_gate() -> Vec<Condition> {
    vec![Condition::new(ConditionTest::Role { role: Role::Healer })]
}

fn resolve(nodes: &[Node], snapshot: &FixedSnapshot) -> Vec<RenderSpec> {
    let catalog = catalog();
    let mut durations = DurationTracker::new();
    let mut known = KnownAbilities::new();
    let mut ctx = EvalContext::new(snapshot, &catalog, &mut durations, &mut known);
    resolve_nodes(nodes, Vec2::ZERO, &mut ctx)
}

fn engine() -> AuraEngine {
    AuraEngine::new(catalog(), EngineSettings::default())
}

fn names(specs: &[RenderSpec]) -> Vec<&str> {
    specs.iter().map(|s| s.name.as_str()).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout and gating
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn group_offset_is_inherited() {
    let nodes = vec![Node::group(
        "group",
        Vec2::new(100.0, 0.0),
        vec![Node::indicator("icon", Vec2::new(0.0, 50.0), vec![])],
    )];
    let specs = resolve(&nodes, &FixedSnapshot::new(WHITE_MAGE, 90));

    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].position, Vec2::new(100.0, 50.0));
    assert_eq!(specs[0].attributes.icon_id, MISSING_ICON_ID);
}

#[test]
fn nested_groups_accumulate_offsets() {
    let nodes = vec![Node::group(
        "outer",
        Vec2::new(10.0, 10.0),
        vec![Node::group(
            "inner",
            Vec2::new(5.0, -5.0),
            vec![Node::indicator("icon", Vec2::new(1.0, 1.0), vec![])],
        )],
    )];
    let specs = resolve(&nodes, &FixedSnapshot::new(WHITE_MAGE, 90));
    assert_eq!(specs[0].position, Vec2::new(16.0, 6.0));
}

#[test]
fn failed_group_gate_hides_subtree() {
    let nodes = vec![Node::group(
        "healer only",
        Vec2::new(100.0, 0.0),
        vec![
            Node::indicator("a", Vec2::ZERO, vec![]),
            Node::indicator("b", Vec2::ZERO, vec![]),
        ],
    )
    .with_conditions(healer_gate())];

    assert!(resolve(&nodes, &FixedSnapshot::new(WARRIOR, 90)).is_empty());
    assert_eq!(resolve(&nodes, &FixedSnapshot::new(WHITE_MAGE, 90)).len(), 2);
}

#[test]
fn failed_indicator_gate_keeps_siblings() {
    let nodes = vec![
        Node::indicator("first", Vec2::ZERO, vec![]),
        Node::indicator("healer", Vec2::ZERO, vec![]).with_conditions(healer_gate()),
        Node::indicator("last", Vec2::ZERO, vec![]),
    ];
    let specs = resolve(&nodes, &FixedSnapshot::new(WARRIOR, 90));
    assert_eq!(names(&specs), vec!["first", "last"]);
}

#[test]
fn specs_follow_document_order() {
    let nodes = vec![
        Node::indicator("a", Vec2::ZERO, vec![]),
        Node::group(
            "g",
            Vec2::ZERO,
            vec![
                Node::indicator("g1", Vec2::ZERO, vec![]),
                Node::group("gg", Vec2::ZERO, vec![Node::indicator("gg1", Vec2::ZERO, vec![])]),
                Node::indicator("g2", Vec2::ZERO, vec![]),
            ],
        ),
        Node::indicator("b", Vec2::ZERO, vec![]),
    ];
    let specs = resolve(&nodes, &FixedSnapshot::new(WHITE_MAGE, 90));
    assert_eq!(names(&specs), vec!["a", "g1", "gg1", "g2", "b"]);
}

#[test]
fn inactive_lists_are_ignored() {
    // A group never draws its own bundles, an indicator never walks children
    let mut group = Node::group("g", Vec2::ZERO, vec![]);
    group.bundles = vec![AttributeBundle::new(vec![Attribute::Size { pixels: 64 }])];
    let mut indicator = Node::indicator("i", Vec2::ZERO, vec![]);
    indicator.children = vec![Node::indicator("hidden", Vec2::ZERO, vec![])];

    let specs = resolve(&[group, indicator], &FixedSnapshot::new(WHITE_MAGE, 90));
    assert_eq!(names(&specs), vec!["i"]);
}

#[test]
fn resolution_is_idempotent() {
    let nodes = vec![Node::indicator(
        "glare",
        Vec2::new(4.0, 4.0),
        vec![AttributeBundle::new(vec![
            Attribute::Icon { ability: GLARE },
            Attribute::Timer { source: TimerSource::Cooldown { ability: GLARE } },
            Attribute::Effect { effect: EffectSetting::Glow(GlowMode::On) },
        ])],
    )];
    let snapshot = FixedSnapshot::new(WHITE_MAGE, 90)
        .with_ability(GLARE, AbilityReading::recasting(1.0, 2.5));

    let mut engine = engine();
    let first = engine.run_frame(&nodes, &snapshot);
    let second = engine.run_frame(&nodes, &snapshot);
    assert_eq!(first, second);
    assert_eq!(first.specs().len(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Attributes through the tree
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn icon_follows_replacement() {
    let nodes = vec![Node::indicator(
        "stone",
        Vec2::ZERO,
        vec![AttributeBundle::new(vec![Attribute::Icon { ability: STONE }])],
    )];
    let snapshot = FixedSnapshot::new(WHITE_MAGE, 90).with_replacement(STONE, GLARE);
    assert_eq!(resolve(&nodes, &snapshot)[0].attributes.icon_id, GLARE_ICON);
}

#[test]
fn charge_timer_tracks_charges_and_degrades() {
    let nodes = vec![Node::indicator(
        "dignity",
        Vec2::ZERO,
        vec![AttributeBundle::new(vec![Attribute::Timer {
            source: TimerSource::ChargeCooldown { ability: DIGNITY },
        }])],
    )];

    // one of two 20s charges back
    let snapshot = FixedSnapshot::new(33, 90)
        .with_ability(DIGNITY, AbilityReading::recasting(25.0, 40.0));
    let attributes = &resolve(&nodes, &snapshot)[0].attributes;
    assert_eq!(attributes.charges, Some(1));
    let timer = attributes.timer.expect("charge timer");
    assert_eq!(timer.kind, TimerKind::ChargeCooldown);
    assert_eq!(timer.value, 5.0);
    assert_eq!(timer.max, Some(20.0));

    // no charges left: drawn as a plain cooldown
    let snapshot = FixedSnapshot::new(33, 90)
        .with_ability(DIGNITY, AbilityReading::recasting(5.0, 40.0));
    let attributes = &resolve(&nodes, &snapshot)[0].attributes;
    assert_eq!(attributes.charges, Some(0));
    assert_eq!(attributes.timer.map(|t| t.kind), Some(TimerKind::Cooldown));
}

#[test]
fn buff_estimate_persists_across_frames() {
    let nodes = vec![Node::indicator(
        "regen",
        Vec2::ZERO,
        vec![AttributeBundle::new(vec![Attribute::Timer {
            source: TimerSource::Buff { status: REGEN },
        }])],
    )];
    let mut engine = engine();
    let mut snapshot = FixedSnapshot::new(WHITE_MAGE, 90);

    let mut readings = Vec::new();
    for remaining in [18.0, 15.0, 12.0, 18.0, 16.0] {
        snapshot.set_status(REGEN, remaining);
        let outcome = engine.run_frame(&nodes, &snapshot);
        let timer = outcome.specs()[0].attributes.timer.expect("buff timer");
        readings.push((timer.value, timer.max));
    }

    assert_eq!(
        readings,
        vec![
            (0.0, Some(18.0)),
            (3.0, Some(18.0)),
            (6.0, Some(18.0)),
            (0.0, Some(18.0)),
            (2.0, Some(18.0)),
        ]
    );

    snapshot.remove_status(REGEN);
    let outcome = engine.run_frame(&nodes, &snapshot);
    assert!(outcome.specs()[0].attributes.timer.is_none());
    // the estimate outlives the status
    assert_eq!(engine.durations().estimated_maximum(REGEN), 18.0);
}

#[test]
fn status_gate_feeds_the_same_tracker() {
    let gate = vec![Condition::new(ConditionTest::StatusActive { status: REGEN })];
    let nodes = vec![Node::indicator("regen up", Vec2::ZERO, vec![]).with_conditions(gate)];
    let mut engine = engine();

    let snapshot = FixedSnapshot::new(WHITE_MAGE, 90).with_status(REGEN, 21.0);
    assert_eq!(engine.run_frame(&nodes, &snapshot).specs().len(), 1);
    assert_eq!(engine.durations().estimated_maximum(REGEN), 21.0);

    let snapshot = FixedSnapshot::new(WHITE_MAGE, 90);
    assert!(engine.run_frame(&nodes, &snapshot).specs().is_empty());
}

#[test]
fn reset_forgets_tracked_state() {
    let gate = vec![
        Condition::new(ConditionTest::StatusActive { status: REGEN }),
        Condition::new(ConditionTest::AbilityKnown { ability: GLARE }),
    ];
    let nodes = vec![Node::indicator("regen and glare", Vec2::ZERO, vec![]).with_conditions(gate)];
    let mut engine = engine();

    let snapshot = FixedSnapshot::new(WHITE_MAGE, 90)
        .with_status(REGEN, 21.0)
        .with_ability(GLARE, AbilityReading::ready());
    assert_eq!(engine.run_frame(&nodes, &snapshot).specs().len(), 1);
    assert!(!engine.durations().is_empty());
    assert!(engine.known().is_known(GLARE));

    engine.reset();
    assert!(engine.durations().is_empty());
    assert!(!engine.known().is_known(GLARE));
}

// ─────────────────────────────────────────────────────────────────────────────
// Frame suppression
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn no_player_suppresses_frame() {
    let nodes = vec![Node::indicator("a", Vec2::ZERO, vec![])];
    let mut engine = engine();
    assert_eq!(
        engine.run_frame(&nodes, &FixedSnapshot::without_player()),
        FrameOutcome::Suppressed(SuppressReason::NoPlayer)
    );

    let mut lenient = AuraEngine::new(
        catalog(),
        EngineSettings { require_player: false, ..EngineSettings::default() },
    );
    assert_eq!(lenient.run_frame(&nodes, &FixedSnapshot::without_player()).specs().len(), 1);
}

#[test]
fn blocking_interface_suppresses_frame() {
    let nodes = vec![Node::indicator("a", Vec2::ZERO, vec![])];
    let settings = EngineSettings {
        blocking_interfaces: vec!["Talk".into()],
        require_player: true,
    };
    let mut engine = AuraEngine::new(catalog(), settings);

    let talking = FixedSnapshot::new(WHITE_MAGE, 90).with_visible_interface("Talk");
    let outcome = engine.run_frame(&nodes, &talking);
    assert_eq!(outcome, FrameOutcome::Suppressed(SuppressReason::InterfaceVisible("Talk".into())));
    assert!(outcome.specs().is_empty());

    let other = FixedSnapshot::new(WHITE_MAGE, 90).with_visible_interface("Inventory");
    assert!(!engine.run_frame(&nodes, &other).is_suppressed());
}

#[test]
fn suppressed_frame_does_not_sample() {
    let gate = vec![Condition::new(ConditionTest::StatusActive { status: REGEN })];
    let nodes = vec![Node::indicator("regen up", Vec2::ZERO, vec![]).with_conditions(gate)];
    let mut engine = engine();

    let snapshot = FixedSnapshot::new(WHITE_MAGE, 90)
        .with_status(REGEN, 21.0)
        .with_visible_interface("AreaMap");
    assert!(engine.run_frame(&nodes, &snapshot).is_suppressed());
    assert!(engine.durations().is_empty());
}
