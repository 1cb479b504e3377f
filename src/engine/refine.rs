//! Post-ranking filters applied by callers to narrow a result list.

use crate::error::{Result, ToolmatchError};
use crate::types::recommendation::Recommendation;
use crate::types::tool::{Category, PrivacyLevel, Tool};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBand {
    #[default]
    All,
    Free,
    Under20,
    Under50,
    Under100,
}

impl PriceBand {
    /// Upper bound on the estimated monthly minimum, if any.
    fn ceiling(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Free => Some(0),
            Self::Under20 => Some(20),
            Self::Under50 => Some(50),
            Self::Under100 => Some(100),
        }
    }

    pub fn admits(self, min_cost: i64) -> bool {
        self.ceiling().map_or(true, |ceiling| min_cost <= ceiling)
    }
}

impl FromStr for PriceBand {
    type Err = ToolmatchError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "all" => Ok(Self::All),
            "free" => Ok(Self::Free),
            "under20" => Ok(Self::Under20),
            "under50" => Ok(Self::Under50),
            "under100" => Ok(Self::Under100),
            other => Err(ToolmatchError::InvalidPreferences(format!(
                "unknown price band `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Api,
    Mobile,
    Offline,
    Team,
    Privacy,
}

impl Feature {
    pub fn offered_by(self, tool: &Tool) -> bool {
        match self {
            Self::Api => tool.api_available,
            Self::Mobile => tool.mobile_app,
            Self::Offline => tool.offline_capabilities,
            Self::Team => tool.team_collaboration,
            Self::Privacy => tool.privacy.level == PrivacyLevel::High,
        }
    }
}

impl FromStr for Feature {
    type Err = ToolmatchError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "api" => Ok(Self::Api),
            "mobile" => Ok(Self::Mobile),
            "offline" => Ok(Self::Offline),
            "team" => Ok(Self::Team),
            "privacy" => Ok(Self::Privacy),
            other => Err(ToolmatchError::InvalidPreferences(format!(
                "unknown feature `{other}`"
            ))),
        }
    }
}

/// Empty vendor, category and feature sets disable that filter.
#[derive(Debug, Clone, Default)]
pub struct Refinement {
    pub price: PriceBand,
    pub vendors: Vec<String>,
    pub categories: Vec<Category>,
    pub features: Vec<Feature>,
}

impl Refinement {
    pub fn is_active(&self) -> bool {
        self.price != PriceBand::All
            || !self.vendors.is_empty()
            || !self.categories.is_empty()
            || !self.features.is_empty()
    }

    pub fn admits(&self, recommendation: &Recommendation<'_>) -> bool {
        let tool = recommendation.tool;
        self.price.admits(recommendation.estimated_monthly_cost.min)
            && (self.vendors.is_empty() || self.vendors.iter().any(|vendor| vendor == &tool.vendor))
            && (self.categories.is_empty() || self.categories.contains(&tool.category))
            && self.features.iter().all(|feature| feature.offered_by(tool))
    }

    pub fn apply<'a>(&self, recommendations: Vec<Recommendation<'a>>) -> Vec<Recommendation<'a>> {
        recommendations
            .into_iter()
            .filter(|recommendation| self.admits(recommendation))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::{copilot_like, free_only};
    use crate::types::recommendation::CostRange;
    use crate::types::scoring::ScoreCard;

    fn rec(tool: &Tool, min: i64) -> Recommendation<'_> {
        Recommendation::new(
            tool,
            60.0,
            Vec::new(),
            CostRange { min, max: min },
            ScoreCard::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        )
    }

    #[test]
    fn price_bands_compare_the_minimum_cost() {
        assert!(PriceBand::Free.admits(0));
        assert!(!PriceBand::Free.admits(1));
        assert!(PriceBand::Under20.admits(20));
        assert!(!PriceBand::Under50.admits(51));
        assert!(PriceBand::All.admits(10_000));
    }

    #[test]
    fn parses_cli_labels() {
        assert_eq!("under50".parse::<PriceBand>().ok(), Some(PriceBand::Under50));
        assert!("cheap".parse::<PriceBand>().is_err());
        assert_eq!("team".parse::<Feature>().ok(), Some(Feature::Team));
        assert!("vr".parse::<Feature>().is_err());
    }

    #[test]
    fn default_refinement_keeps_everything() {
        let copilot = copilot_like();
        let sketch = free_only();
        let refinement = Refinement::default();
        assert!(!refinement.is_active());
        assert_eq!(refinement.apply(vec![rec(&copilot, 10), rec(&sketch, 0)]).len(), 2);
    }

    #[test]
    fn filters_combine_and_preserve_order() {
        let copilot = copilot_like();
        let sketch = free_only();
        let mut other = copilot_like();
        other.id = "other".to_string();
        other.vendor = "Elsewhere".to_string();

        let refinement = Refinement {
            price: PriceBand::Under20,
            vendors: vec!["GitHub".to_string(), "Sketch Labs".to_string()],
            categories: Vec::new(),
            features: vec![Feature::Team],
        };
        let kept = refinement.apply(vec![rec(&copilot, 10), rec(&sketch, 0), rec(&other, 10)]);
        let ids: Vec<&str> = kept.iter().map(|rec| rec.tool.id.as_str()).collect();
        assert_eq!(ids, vec!["github-copilot"]);
    }

    #[test]
    fn category_and_privacy_filters() {
        let copilot = copilot_like();
        let sketch = free_only();
        let by_category = Refinement {
            categories: vec![Category::Image],
            ..Refinement::default()
        };
        let kept = by_category.apply(vec![rec(&copilot, 10), rec(&sketch, 0)]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].tool.id, "sketchpad");

        let private = Refinement {
            features: vec![Feature::Privacy],
            ..Refinement::default()
        };
        assert!(private.apply(vec![rec(&copilot, 10)]).is_empty());
    }
}
