use crate::advisory::AdvisoryOpinion;
use crate::types::recommendation::{match_percentage, sort_by_score, Recommendation};
use crate::types::scoring::Score;
use std::collections::HashMap;

pub const EXTERNAL_WEIGHT: Score = 0.6;
pub const STATIC_WEIGHT: Score = 0.4;

/// Blends external opinions into a ranked static list.
///
/// Only tools already in the list can be adjusted; opinions about other tools
/// are ignored. With no opinions the list comes back untouched, order
/// included. Later opinions for the same tool win.
pub fn merge<'a>(
    recommendations: Vec<Recommendation<'a>>,
    opinions: &[AdvisoryOpinion],
) -> Vec<Recommendation<'a>> {
    if opinions.is_empty() {
        return recommendations;
    }

    let by_tool: HashMap<&str, &AdvisoryOpinion> = opinions
        .iter()
        .map(|opinion| (opinion.tool_id.as_str(), opinion))
        .collect();

    let mut merged: Vec<Recommendation<'a>> = recommendations
        .into_iter()
        .map(|recommendation| match by_tool.get(recommendation.tool.id.as_str()) {
            Some(opinion) => blend(recommendation, opinion),
            None => recommendation,
        })
        .collect();
    sort_by_score(&mut merged);
    merged
}

fn blend<'a>(mut recommendation: Recommendation<'a>, opinion: &AdvisoryOpinion) -> Recommendation<'a> {
    let blended = opinion.score * EXTERNAL_WEIGHT + recommendation.score * STATIC_WEIGHT;
    let mut reasons = opinion.reasons.clone();
    reasons.extend(recommendation.reasons.into_iter().take(1));

    recommendation.score = blended;
    recommendation.match_percentage = match_percentage(blended);
    recommendation.reasons = reasons;
    recommendation.advisory_explanation = Some(opinion.explanation.clone());
    recommendation
}
