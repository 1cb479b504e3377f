//! Reporting hooks for the recommendation entry points.
//!
//! The engine never logs on its own; callers hand it an observer.

use crate::types::preferences::Mode;
use std::time::Duration;
use tracing::{debug, info, warn};

pub trait RecommendationObserver: Send + Sync {
    fn recommendations_generated(&self, _mode: Mode, _eligible: usize, _returned: usize) {}

    fn advisory_merged(&self, _opinions: usize) {}

    fn advisory_failed(&self, _reason: &str) {}

    fn advisory_timed_out(&self, _after: Duration) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RecommendationObserver for NoopObserver {}

/// Forwards every event to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RecommendationObserver for TracingObserver {
    fn recommendations_generated(&self, mode: Mode, eligible: usize, returned: usize) {
        info!(?mode, eligible, returned, "recommendations generated");
    }

    fn advisory_merged(&self, opinions: usize) {
        debug!(opinions, "advisory opinions merged");
    }

    fn advisory_failed(&self, reason: &str) {
        warn!(reason, "advisory unavailable, using static scores");
    }

    fn advisory_timed_out(&self, after: Duration) {
        warn!(?after, "advisory timed out, using static scores");
    }
}
