pub mod csv;
pub mod explain;
pub mod json;
pub mod md;
pub mod share;

use crate::catalog::Catalog;
use crate::error::{Result, ToolmatchError};
use crate::types::preferences::Mode;
use crate::types::recommendation::Recommendation;
use chrono::{DateTime, Utc};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Md,
    Json,
    Csv,
    Share,
}

impl FromStr for OutputFormat {
    type Err = ToolmatchError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "md" => Ok(Self::Md),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "share" => Ok(Self::Share),
            other => Err(ToolmatchError::ConfigParse(format!(
                "unsupported output format: {other}"
            ))),
        }
    }
}

/// A ranked list plus the context needed to render it.
#[derive(Debug, Clone)]
pub struct RecommendationReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub catalog_fingerprint: String,
    pub mode: Mode,
    pub recommendations: Vec<Recommendation<'a>>,
}

impl<'a> RecommendationReport<'a> {
    pub fn new(catalog: &Catalog, mode: Mode, recommendations: Vec<Recommendation<'a>>) -> Self {
        Self {
            generated_at: Utc::now(),
            catalog_fingerprint: catalog.fingerprint().to_string(),
            mode,
            recommendations,
        }
    }
}

pub fn render(report: &RecommendationReport<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Json => json::to_json(report).map_err(ToolmatchError::Json),
        OutputFormat::Csv => Ok(csv::to_csv(&report.recommendations)),
        OutputFormat::Share => Ok(share::to_share_text(&report.recommendations)),
    }
}

/// `$min-max/month`, shared by every renderer.
pub(crate) fn format_cost(recommendation: &Recommendation<'_>) -> String {
    let cost = recommendation.estimated_monthly_cost;
    format!("${}-{}/month", cost.min, cost.max)
}
