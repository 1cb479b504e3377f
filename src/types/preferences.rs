use crate::error::{Result, ToolmatchError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_PRIORITY_FACTORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Developer,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Developer => "developer",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "1-20")]
    UpTo20,
    #[serde(rename = "21-100")]
    UpTo100,
    #[serde(rename = "100+")]
    Over100,
}

impl BudgetRange {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::UpTo20 => "1-20",
            Self::UpTo100 => "21-100",
            Self::Over100 => "100+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageVolume {
    Light,
    Moderate,
    Heavy,
}

impl UsageVolume {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
        }
    }

    /// Scales the synthetic monthly token volume used for API cost estimates.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Light => 0.5,
            Self::Moderate => 1.0,
            Self::Heavy => 2.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationMethod {
    Web,
    Api,
    Mobile,
    Desktop,
}

impl IntegrationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Api => "api",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

/// Answers only collected by the comprehensive questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedProfile {
    pub industry: Option<String>,
    pub content_types: Option<Vec<String>>,
    pub programming_languages: Option<Vec<String>>,
    pub team_size: Option<String>,
    pub current_tools: Option<Vec<String>>,
    pub workflow_integration: Option<Vec<String>>,
    pub output_formats: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub data_sensitivity: Option<String>,
    pub performance_needs: Option<String>,
    pub customization: Option<String>,
    pub support_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Basic,
    Comprehensive,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Comprehensive => "comprehensive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub primary_use_case: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub budget_range: BudgetRange,
    #[serde(default)]
    pub priority_factors: Vec<String>,
    #[serde(default)]
    pub integration_method: Vec<IntegrationMethod>,
    pub usage_volume: UsageVolume,
    #[serde(default)]
    pub special_requirements: Vec<String>,
    #[serde(flatten)]
    pub extended: ExtendedProfile,
}

impl Preferences {
    /// Comprehensive scoring needs industry, content types and programming
    /// languages all present; anything less is a basic questionnaire.
    pub fn mode(&self) -> Mode {
        let profile = &self.extended;
        if profile.industry.is_some()
            && profile.content_types.is_some()
            && profile.programming_languages.is_some()
        {
            Mode::Comprehensive
        } else {
            Mode::Basic
        }
    }

    pub fn is_comprehensive(&self) -> bool {
        self.mode() == Mode::Comprehensive
    }

    pub fn has_priority(&self, tag: &str) -> bool {
        self.priority_factors.iter().any(|factor| factor == tag)
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| ToolmatchError::InvalidPreferences(e.to_string()))
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| ToolmatchError::InvalidPreferences(e.to_string()))
    }

    /// Shape checks the questionnaire is expected to enforce before the
    /// engine sees a submission.
    pub fn validate(&self) -> Result<()> {
        if self.priority_factors.len() > MAX_PRIORITY_FACTORS {
            return Err(ToolmatchError::InvalidPreferences(format!(
                "at most {} priority factors allowed (found {})",
                MAX_PRIORITY_FACTORS,
                self.priority_factors.len()
            )));
        }
        let blank = self
            .primary_use_case
            .iter()
            .chain(&self.priority_factors)
            .chain(&self.special_requirements)
            .any(|tag| tag.trim().is_empty());
        if blank {
            return Err(ToolmatchError::InvalidPreferences(
                "tags must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
