use crate::report::RecommendationReport;
use crate::types::preferences::Mode;
use crate::types::recommendation::CostRange;
use crate::types::scoring::{Score, ScoreCard};
use crate::types::tool::Category;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    catalog_fingerprint: &'a str,
    mode: Mode,
    recommendations: Vec<JsonRecommendation<'a>>,
}

#[derive(Serialize)]
struct JsonRecommendation<'a> {
    rank: usize,
    tool_id: &'a str,
    name: &'a str,
    vendor: &'a str,
    category: Category,
    score: Score,
    match_percentage: i64,
    estimated_monthly_cost: CostRange,
    reasons: &'a [String],
    breakdown: &'a ScoreCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    advisory_explanation: Option<&'a str>,
    website: &'a str,
}

pub fn to_json(report: &RecommendationReport<'_>) -> Result<String, serde_json::Error> {
    let document = JsonReport {
        generated_at: report.generated_at,
        catalog_fingerprint: &report.catalog_fingerprint,
        mode: report.mode,
        recommendations: report
            .recommendations
            .iter()
            .enumerate()
            .map(|(index, recommendation)| JsonRecommendation {
                rank: index + 1,
                tool_id: &recommendation.tool.id,
                name: &recommendation.tool.name,
                vendor: &recommendation.tool.vendor,
                category: recommendation.tool.category,
                score: recommendation.score,
                match_percentage: recommendation.match_percentage,
                estimated_monthly_cost: recommendation.estimated_monthly_cost,
                reasons: &recommendation.reasons,
                breakdown: &recommendation.breakdown,
                advisory_explanation: recommendation.advisory_explanation.as_deref(),
                website: &recommendation.tool.website,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&document)
}
