use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Text,
    Image,
    Code,
    Business,
    Multimodal,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Code => "code",
            Self::Business => "business",
            Self::Multimodal => "multimodal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceComplexity {
    Simple,
    Moderate,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    High,
    Medium,
    Low,
}

impl PrivacyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// True when `self` is at least as protective as `required`.
    pub fn meets(self, required: PrivacyLevel) -> bool {
        self.rank() >= required.rank()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Privacy {
    pub level: PrivacyLevel,
    #[serde(default)]
    pub details: Vec<String>,
}

/// A tier price as stored in the catalog.
///
/// Anything that is not a finite number (`"custom"`, `"contact sales"`) is kept
/// as a label and never takes part in price arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl Price {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Amount(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: Price,
    pub unit: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub tokens: Option<Quota>,
    pub requests: Option<Quota>,
}

/// Usage cap on a pricing tier. Catalogs write `-1` for no cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Quota {
    Unlimited,
    Capped(u64),
}

impl TryFrom<i64> for Quota {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Unlimited),
            n => u64::try_from(n)
                .map(Self::Capped)
                .map_err(|_| format!("invalid quota {n}: expected -1 or a non-negative count")),
        }
    }
}

impl From<Quota> for i64 {
    fn from(quota: Quota) -> Self {
        match quota {
            Quota::Unlimited => -1,
            Quota::Capped(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPricing {
    pub input_cost: Option<f64>,
    pub output_cost: Option<f64>,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub free: Option<PricingTier>,
    pub subscription: Option<Vec<PricingTier>>,
    pub api: Option<ApiPricing>,
}

impl Pricing {
    pub fn has_free_tier(&self) -> bool {
        self.free.is_some()
    }

    pub fn subscription_tiers(&self) -> &[PricingTier] {
        self.subscription.as_deref().unwrap_or(&[])
    }

    /// Numeric subscription prices in catalog order; labels are skipped.
    pub fn subscription_prices(&self) -> Vec<f64> {
        self.subscription_tiers()
            .iter()
            .filter_map(|tier| tier.price.amount())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_none() && self.subscription_tiers().is_empty() && self.api.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub vendor: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub technical_requirements: Vec<String>,
    pub interface_complexity: InterfaceComplexity,
    #[serde(default)]
    pub api_available: bool,
    #[serde(default)]
    pub mobile_app: bool,
    #[serde(default)]
    pub offline_capabilities: bool,
    pub privacy: Privacy,
    #[serde(default)]
    pub team_collaboration: bool,
    #[serde(default)]
    pub custom_training: bool,
    pub release_date: Option<String>,
    pub popularity: u8,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub integrations: Vec<String>,
    #[serde(default)]
    pub website: String,
    pub documentation: Option<String>,
}

impl Tool {
    /// Lowercased use-case statements joined by spaces.
    pub fn use_case_text(&self) -> String {
        self.use_cases.join(" ").to_lowercase()
    }

    /// Lowercased description, strengths and use cases.
    pub fn profile_text(&self) -> String {
        let mut text = self.description.to_lowercase();
        for line in self.strengths.iter().chain(&self.use_cases) {
            text.push(' ');
            text.push_str(&line.to_lowercase());
        }
        text
    }

    pub fn has_strength(&self, needle: &str) -> bool {
        self.strengths
            .iter()
            .any(|strength| strength.to_lowercase().contains(needle))
    }

    pub fn mentions_integration(&self, needles: &[&str]) -> bool {
        self.integrations.iter().any(|integration| {
            let integration = integration.to_lowercase();
            needles.iter().any(|needle| integration.contains(needle))
        })
    }
}
