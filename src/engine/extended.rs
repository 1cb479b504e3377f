//! Scorers that only run for comprehensive questionnaires.

use crate::engine::dimensions::NEUTRAL;
use crate::types::preferences::ExtendedProfile;
use crate::types::scoring::{ExtendedScores, Score};
use crate::types::tool::{Category, PrivacyLevel, Tool};

pub struct IndustryRule {
    pub industry: &'static str,
    pub label: &'static str,
    pub categories: &'static [Category],
    pub min_privacy: Option<PrivacyLevel>,
    pub keywords: &'static [&'static str],
}

pub const INDUSTRY_RULES: &[IndustryRule] = &[
    IndustryRule {
        industry: "tech",
        label: "technology",
        categories: &[Category::Code, Category::Text],
        min_privacy: None,
        keywords: &["code", "developer", "software", "api"],
    },
    IndustryRule {
        industry: "healthcare",
        label: "healthcare",
        categories: &[Category::Text, Category::Multimodal],
        min_privacy: Some(PrivacyLevel::High),
        keywords: &["research", "analysis", "document"],
    },
    IndustryRule {
        industry: "finance",
        label: "finance",
        categories: &[Category::Text, Category::Business],
        min_privacy: Some(PrivacyLevel::High),
        keywords: &["analysis", "data", "document"],
    },
    IndustryRule {
        industry: "education-industry",
        label: "education",
        categories: &[Category::Text, Category::Multimodal],
        min_privacy: None,
        keywords: &["learning", "education", "research", "academic"],
    },
    IndustryRule {
        industry: "marketing",
        label: "marketing",
        categories: &[Category::Text, Category::Image, Category::Multimodal],
        min_privacy: None,
        keywords: &["content", "marketing", "creative", "image"],
    },
    IndustryRule {
        industry: "legal",
        label: "legal",
        categories: &[Category::Text],
        min_privacy: Some(PrivacyLevel::High),
        keywords: &["legal", "document", "compliance"],
    },
    IndustryRule {
        industry: "retail",
        label: "retail",
        categories: &[Category::Business, Category::Text, Category::Image],
        min_privacy: None,
        keywords: &["customer", "product", "support"],
    },
];

const INDUSTRY_BASE: Score = 0.3;
const INDUSTRY_CATEGORY_WEIGHT: Score = 0.3;
const INDUSTRY_PRIVACY_WEIGHT: Score = 0.2;
const INDUSTRY_KEYWORD_WEIGHT: Score = 0.2;
const OTHER_INDUSTRY: Score = 0.7;

pub fn industry_rule(industry: &str) -> Option<&'static IndustryRule> {
    INDUSTRY_RULES.iter().find(|rule| rule.industry == industry)
}

pub fn industry_score(tool: &Tool, industry: &str) -> Score {
    if industry == "other" {
        return OTHER_INDUSTRY;
    }
    let Some(rule) = industry_rule(industry) else {
        return NEUTRAL;
    };

    let mut score = INDUSTRY_BASE;
    if rule.categories.contains(&tool.category) {
        score += INDUSTRY_CATEGORY_WEIGHT;
    }
    if rule
        .min_privacy
        .map_or(true, |required| tool.privacy.level.meets(required))
    {
        score += INDUSTRY_PRIVACY_WEIGHT;
    }
    let text = tool.profile_text();
    if rule.keywords.iter().any(|keyword| text.contains(keyword)) {
        score += INDUSTRY_KEYWORD_WEIGHT;
    }
    score.min(1.0)
}

pub fn team_score(tool: &Tool, team_size: Option<&str>) -> Score {
    let free = tool.pricing.has_free_tier();
    let collaborative = tool.team_collaboration;
    match team_size {
        Some("individual") => {
            if free {
                1.0
            } else {
                0.7
            }
        }
        Some("small-team") => {
            if collaborative {
                1.0
            } else if free {
                0.7
            } else {
                0.5
            }
        }
        Some("medium-team") => {
            if collaborative {
                1.0
            } else {
                0.4
            }
        }
        Some("large-team") => {
            if collaborative {
                1.0
            } else {
                0.2
            }
        }
        _ => NEUTRAL,
    }
}

/// Rows are sensitivity levels, columns are the tool's privacy level
/// (high, medium, low). Regulated data tops out at 0.8 even for high-privacy
/// tools.
pub const SENSITIVITY_FIT: &[(&str, [Score; 3])] = &[
    ("public", [1.0, 1.0, 0.8]),
    ("internal", [1.0, 0.8, 0.4]),
    ("confidential", [1.0, 0.5, 0.1]),
    ("regulated", [0.8, 0.3, 0.0]),
];

pub fn data_sensitivity_score(tool: &Tool, sensitivity: Option<&str>) -> Score {
    let Some(row) = sensitivity.and_then(|level| {
        SENSITIVITY_FIT
            .iter()
            .find(|(name, _)| *name == level)
            .map(|(_, row)| row)
    }) else {
        return NEUTRAL;
    };
    let column = match tool.privacy.level {
        PrivacyLevel::High => 0,
        PrivacyLevel::Medium => 1,
        PrivacyLevel::Low => 2,
    };
    row[column]
}

const MULTILINGUAL_MARKERS: [&str; 3] = ["multilingual", "translation", "languages"];

pub fn is_multilingual(tool: &Tool) -> bool {
    let text = tool.profile_text();
    MULTILINGUAL_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
}

/// An absent or empty language list counts as English-only.
pub fn is_english_only(languages: Option<&[String]>) -> bool {
    languages.map_or(true, |languages| {
        languages.iter().all(|language| language == "english")
    })
}

pub fn language_score(tool: &Tool, languages: Option<&[String]>) -> Score {
    if is_multilingual(tool) {
        1.0
    } else if is_english_only(languages) {
        0.8
    } else {
        0.3
    }
}

pub fn extended_scores(tool: &Tool, profile: &ExtendedProfile) -> ExtendedScores {
    ExtendedScores {
        industry: profile
            .industry
            .as_deref()
            .map_or(NEUTRAL, |industry| industry_score(tool, industry)),
        team: team_score(tool, profile.team_size.as_deref()),
        data_sensitivity: data_sensitivity_score(tool, profile.data_sensitivity.as_deref()),
        language: language_score(tool, profile.languages.as_deref()),
    }
}
