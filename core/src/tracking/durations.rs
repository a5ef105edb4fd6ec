//! Status duration estimation
//!
//! Statuses report only their remaining time. Many of them (Sprint is the
//! classic case) can be applied with different durations, and nothing in the
//! game data says which one is in effect. The tracker keeps a high-water mark
//! per status: whenever the remaining time goes *up* between two samples the
//! status was reapplied, and the new remaining time becomes the estimated
//! maximum. A countdown alone never lowers the estimate; only a reapplication
//! replaces it, even with a shorter duration than before.
//!
//! The estimate is only right if the status is sampled on every frame it is
//! active. The very first application is taken at face value, so a status
//! first seen with a shorter duration than later ones reads short until a
//! longer refresh is observed.

use hashbrown::HashMap;

use auralyte_types::StatusId;

use crate::snapshot::sanitize_secs;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationEstimate {
    pub last_observed_remaining: f32,
    pub estimated_maximum: f32,
}

/// Rolling maximum-duration estimates, one per status id
#[derive(Debug, Clone, Default)]
pub struct DurationTracker {
    estimates: HashMap<StatusId, DurationEstimate>,
}

impl DurationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the remaining time of a status seen this frame
    pub fn sample_remaining(&mut self, status: StatusId, raw_remaining: f32) {
        let remaining = sanitize_secs(raw_remaining);

        match self.estimates.get_mut(&status) {
            None => {
                self.estimates.insert(
                    status,
                    DurationEstimate {
                        last_observed_remaining: remaining,
                        estimated_maximum: remaining,
                    },
                );
            }
            Some(estimate) => {
                if remaining > estimate.last_observed_remaining {
                    tracing::debug!(
                        status,
                        old = estimate.estimated_maximum,
                        new = remaining,
                        "Status reapplied, replacing duration estimate"
                    );
                    estimate.estimated_maximum = remaining;
                }
                estimate.last_observed_remaining = remaining;
            }
        }
    }

    /// Estimated full duration, 0 for a status never sampled
    pub fn estimated_maximum(&self, status: StatusId) -> f32 {
        self.estimates
            .get(&status)
            .map(|e| e.estimated_maximum)
            .unwrap_or(0.0)
    }

    /// Time elapsed since the status was (re)applied, as of the last sample
    pub fn elapsed(&self, status: StatusId) -> f32 {
        self.estimates
            .get(&status)
            .map(|e| (e.estimated_maximum - e.last_observed_remaining).max(0.0))
            .unwrap_or(0.0)
    }

    pub fn estimate(&self, status: StatusId) -> Option<DurationEstimate> {
        self.estimates.get(&status).copied()
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    pub fn clear(&mut self) {
        self.estimates.clear();
    }
}
