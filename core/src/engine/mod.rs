//! Per-frame aura resolution
//!
//! # Architecture
//!
//! ```text
//!   StateSnapshot ──┬── conditions ── gate nodes and bundles
//!                   ├── cooldown ──── recast / charge math
//!                   └── DurationTracker (status maxima)
//!                              │
//!                              ▼
//!                    properties: bundles → ResolvedAttributes
//!                              │
//!                              ▼
//!                    resolver: node tree → [RenderSpec]
//!                              │
//!                              ▼
//!                          renderer
//! ```
//!
//! A pass never fails: anything missing degrades to "condition false" or
//! "attribute not set", and the next frame simply tries again.

mod conditions;
mod context;
mod cooldown;
mod frame;
mod properties;
mod resolver;

#[cfg(test)]
mod resolver_tests;

pub use conditions::{all_pass, evaluate};
pub use context::EvalContext;
pub use cooldown::{CooldownState, compute_cooldown};
pub use frame::{AuraEngine, FrameOutcome, SuppressReason};
pub use properties::{AttributeSlots, ResolvedAttributes, TimerReading, resolve_bundles};
pub use resolver::{RenderSpec, resolve_node, resolve_nodes};
