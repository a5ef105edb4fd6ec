//! Static game tables and the ability/status catalog.

mod catalog;
mod charges;
mod jobs;

pub use catalog::{AbilityInfo, CatalogConfig, GameCatalog, StatusInfo};
pub use charges::{ChargeOverride, charge_override, max_charges_at_level};
pub use jobs::{is_role, job_name, job_role};

use auralyte_types::IconId;

/// Icon shown when no icon attribute resolved (the "failure bunny")
pub const MISSING_ICON_ID: IconId = 2914;

/// Indicator size in pixels when no size attribute resolved
pub const DEFAULT_SIZE: u32 = 32;
