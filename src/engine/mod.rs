//! The recommendation pipeline: eligibility, scoring, reasons, cost and
//! ranking over a catalog for a single preference record.

pub mod composite;
pub mod cost;
pub mod dimensions;
pub mod eligibility;
pub mod extended;
pub mod reasons;
pub mod refine;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::advisory::{self, AdvisoryPort};
use crate::catalog::Catalog;
use crate::observe::RecommendationObserver;
use crate::types::preferences::Preferences;
use crate::types::recommendation::Recommendation;
use crate::types::tool::Tool;
use std::time::Duration;

/// Scores one tool without any eligibility check.
pub fn evaluate<'a>(tool: &'a Tool, prefs: &Preferences) -> Recommendation<'a> {
    let card = composite::score_card(tool, prefs);
    let reasons = reasons::reasons(tool, prefs, &card);
    let cost = cost::estimate_cost(tool, prefs.usage_volume);
    Recommendation::new(tool, card.composite(), reasons, cost, card)
}

fn rank_static<'a>(eligible: &[&'a Tool], prefs: &Preferences) -> Vec<Recommendation<'a>> {
    composite::rank(
        eligible
            .iter()
            .map(|&tool| evaluate(tool, prefs))
            .collect(),
    )
}

/// Static recommendations only.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    prefs: &Preferences,
    observer: &dyn RecommendationObserver,
) -> Vec<Recommendation<'a>> {
    let eligible = eligibility::filter(catalog.tools(), prefs);
    let ranked = rank_static(&eligible, prefs);
    observer.recommendations_generated(prefs.mode(), eligible.len(), ranked.len());
    ranked
}

/// Static recommendations adjusted by an external advisor. The advisor sees
/// every eligible tool but can only re-score tools that survived ranking.
pub async fn generate<'a>(
    catalog: &'a Catalog,
    prefs: &Preferences,
    advisor: &dyn AdvisoryPort,
    timeout: Duration,
    observer: &dyn RecommendationObserver,
) -> Vec<Recommendation<'a>> {
    let eligible = eligibility::filter(catalog.tools(), prefs);
    let ranked = rank_static(&eligible, prefs);

    let opinions = advisory::consult(advisor, &eligible, prefs, timeout, observer).await;
    let merged = if opinions.is_empty() {
        ranked
    } else {
        observer.advisory_merged(opinions.len());
        advisory::merge(ranked, &opinions)
    };

    observer.recommendations_generated(prefs.mode(), eligible.len(), merged.len());
    merged
}
