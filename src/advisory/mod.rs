//! Optional third-party opinions blended into the static ranking.

pub mod anthropic;
pub mod merge;

pub use anthropic::AnthropicAdvisor;
pub use merge::merge;

use crate::error::Result;
use crate::observe::RecommendationObserver;
use crate::types::preferences::Preferences;
use crate::types::scoring::Score;
use crate::types::tool::Tool;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One external verdict on a catalog tool. `score` is on the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryOpinion {
    #[serde(alias = "modelId", alias = "model_id")]
    pub tool_id: String,
    pub score: Score,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub explanation: String,
}

#[async_trait]
pub trait AdvisoryPort: Send + Sync {
    /// An empty list means "no opinion".
    async fn advise(&self, tools: &[&Tool], prefs: &Preferences) -> Result<Vec<AdvisoryOpinion>>;
}

/// Static-only mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAdvisor;

#[async_trait]
impl AdvisoryPort for DisabledAdvisor {
    async fn advise(&self, _tools: &[&Tool], _prefs: &Preferences) -> Result<Vec<AdvisoryOpinion>> {
        Ok(Vec::new())
    }
}

/// Runs the advisor under `timeout`. Failures and timeouts are reported to
/// the observer and come back as an empty list.
pub async fn consult(
    advisor: &dyn AdvisoryPort,
    tools: &[&Tool],
    prefs: &Preferences,
    timeout: Duration,
    observer: &dyn RecommendationObserver,
) -> Vec<AdvisoryOpinion> {
    match tokio::time::timeout(timeout, advisor.advise(tools, prefs)).await {
        Ok(Ok(opinions)) => opinions,
        Ok(Err(e)) => {
            observer.advisory_failed(&e.to_string());
            Vec::new()
        }
        Err(_) => {
            observer.advisory_timed_out(timeout);
            Vec::new()
        }
    }
}
