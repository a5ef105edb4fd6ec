pub mod config;
pub mod engine;
pub mod game_data;
pub mod snapshot;
pub mod tracking;
pub mod tree;

// Re-exports for convenience
pub use config::{ConfigError, EngineSettings};
pub use engine::{
    AuraEngine, FrameOutcome, RenderSpec, ResolvedAttributes, SuppressReason, TimerReading,
};
pub use game_data::GameCatalog;
pub use snapshot::{AbilityReading, AbilityStateCode, FixedSnapshot, StateSnapshot};
pub use tracking::{DurationTracker, KnownAbilities};
