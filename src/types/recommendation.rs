use crate::types::scoring::{Score, ScoreCard};
use crate::types::tool::Tool;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CostRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub tool: &'a Tool,
    pub score: Score,
    pub reasons: Vec<String>,
    pub estimated_monthly_cost: CostRange,
    pub match_percentage: i64,
    pub breakdown: ScoreCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory_explanation: Option<String>,
}

impl<'a> Recommendation<'a> {
    pub fn new(
        tool: &'a Tool,
        score: Score,
        reasons: Vec<String>,
        estimated_monthly_cost: CostRange,
        breakdown: ScoreCard,
    ) -> Self {
        Self {
            tool,
            score,
            reasons,
            estimated_monthly_cost,
            match_percentage: match_percentage(score),
            breakdown,
            advisory_explanation: None,
        }
    }
}

pub fn match_percentage(score: Score) -> i64 {
    score.round() as i64
}

/// Stable sort, highest score first; equal scores keep their input order.
pub fn sort_by_score(recommendations: &mut [Recommendation<'_>]) {
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
}
