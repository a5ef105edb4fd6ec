//! Whole-frame driver
//!
//! Owns the trackers that must survive between frames and decides whether a
//! frame is drawn at all.

use auralyte_types::{Node, Vec2};

use crate::config::EngineSettings;
use crate::game_data::GameCatalog;
use crate::snapshot::StateSnapshot;
use crate::tracking::{DurationTracker, KnownAbilities};

use super::EvalContext;
use super::resolver::{RenderSpec, resolve_nodes};

/// Why a frame produced nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuppressReason {
    /// No local player (title screen, zoning)
    NoPlayer,
    /// A blocking game interface is open
    InterfaceVisible(String),
}

impl std::fmt::Display for SuppressReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPlayer => write!(f, "no local player"),
            Self::InterfaceVisible(name) => write!(f, "interface '{}' is visible", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    Rendered(Vec<RenderSpec>),
    Suppressed(SuppressReason),
}

impl FrameOutcome {
    /// Specs to draw, empty when suppressed
    pub fn specs(&self) -> &[RenderSpec] {
        match self {
            Self::Rendered(specs) => specs,
            Self::Suppressed(_) => &[],
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed(_))
    }
}

/// Per-session engine state
#[derive(Debug, Default)]
pub struct AuraEngine {
    catalog: GameCatalog,
    settings: EngineSettings,
    durations: DurationTracker,
    known: KnownAbilities,
}

impl AuraEngine {
    pub fn new(catalog: GameCatalog, settings: EngineSettings) -> Self {
        Self {
            catalog,
            settings,
            durations: DurationTracker::new(),
            known: KnownAbilities::new(),
        }
    }

    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn durations(&self) -> &DurationTracker {
        &self.durations
    }

    pub fn known(&self) -> &KnownAbilities {
        &self.known
    }

    /// Forget duration estimates and known abilities (e.g. on logout)
    pub fn reset(&mut self) {
        self.durations.clear();
        self.known.clear();
    }

    /// Resolve the top-level nodes against one snapshot
    pub fn run_frame<S: StateSnapshot + ?Sized>(
        &mut self,
        nodes: &[Node],
        snapshot: &S,
    ) -> FrameOutcome {
        if let Some(reason) = self.suppress_reason(snapshot) {
            tracing::debug!(%reason, "Frame suppressed");
            return FrameOutcome::Suppressed(reason);
        }

        let mut ctx =
            EvalContext::new(snapshot, &self.catalog, &mut self.durations, &mut self.known);
        let specs = resolve_nodes(nodes, Vec2::ZERO, &mut ctx);
        tracing::trace!(count = specs.len(), "Frame resolved");
        FrameOutcome::Rendered(specs)
    }

    fn suppress_reason<S: StateSnapshot + ?Sized>(&self, snapshot: &S) -> Option<SuppressReason> {
        if self.settings.require_player && snapshot.current_job().is_none() {
            return Some(SuppressReason::NoPlayer);
        }
        self.settings
            .blocking_interfaces
            .iter()
            .find(|name| snapshot.is_interface_visible(name))
            .map(|name| SuppressReason::InterfaceVisible(name.clone()))
    }
}
