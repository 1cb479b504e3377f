//! Base dimension scorers. Every function maps one preference field and one
//! tool onto [0, 1].

use crate::types::preferences::{BudgetRange, ExperienceLevel, IntegrationMethod};
use crate::types::scoring::Score;
use crate::types::tool::{Category, InterfaceComplexity, PrivacyLevel, Tool};

pub const NEUTRAL: Score = 0.5;

pub struct UseCaseRule {
    pub tag: &'static str,
    pub categories: &'static [Category],
    /// Empty means the category match alone earns `hit`.
    pub keywords: &'static [&'static str],
    pub hit: Score,
    pub miss: Score,
}

pub const USE_CASE_RULES: &[UseCaseRule] = &[
    UseCaseRule {
        tag: "writing",
        categories: &[Category::Text, Category::Multimodal],
        keywords: &["content", "writing"],
        hit: 1.0,
        miss: 0.5,
    },
    UseCaseRule {
        tag: "coding",
        categories: &[Category::Code, Category::Text],
        keywords: &["code", "programming"],
        hit: 1.0,
        miss: 0.3,
    },
    UseCaseRule {
        tag: "data",
        categories: &[Category::Text],
        keywords: &["analysis", "research"],
        hit: 1.0,
        miss: 0.5,
    },
    UseCaseRule {
        tag: "creative",
        categories: &[Category::Image, Category::Multimodal],
        keywords: &[],
        hit: 1.0,
        miss: 1.0,
    },
    UseCaseRule {
        tag: "business",
        categories: &[Category::Business],
        keywords: &[],
        hit: 1.0,
        miss: 1.0,
    },
    UseCaseRule {
        tag: "education",
        categories: &[Category::Text],
        keywords: &[],
        hit: 0.7,
        miss: 0.7,
    },
];

pub fn use_case_rule(tag: &str) -> Option<&'static UseCaseRule> {
    USE_CASE_RULES.iter().find(|rule| rule.tag == tag)
}

/// Match value of a single use-case tag; 0 for unknown tags or a category
/// outside the rule's set.
pub fn use_case_tag_score(tool: &Tool, tag: &str, use_case_text: &str) -> Score {
    let Some(rule) = use_case_rule(tag) else {
        return 0.0;
    };
    if !rule.categories.contains(&tool.category) {
        return 0.0;
    }
    if rule.keywords.is_empty()
        || rule
            .keywords
            .iter()
            .any(|keyword| use_case_text.contains(keyword))
    {
        rule.hit
    } else {
        rule.miss
    }
}

pub fn use_case_score(tool: &Tool, use_cases: &[String]) -> Score {
    if use_cases.is_empty() {
        return 0.0;
    }
    let text = tool.use_case_text();
    let total: Score = use_cases
        .iter()
        .map(|tag| use_case_tag_score(tool, tag, &text))
        .sum();
    total / use_cases.len() as Score
}

/// Cheapest numeric price across the free tier (0) and subscription tiers.
/// API-only pricing does not establish a floor.
pub fn lowest_price(tool: &Tool) -> Option<f64> {
    let free = tool.pricing.has_free_tier().then_some(0.0);
    tool.pricing
        .subscription_prices()
        .into_iter()
        .chain(free)
        .reduce(f64::min)
}

pub fn budget_score(tool: &Tool, budget: BudgetRange) -> Score {
    let pricing = &tool.pricing;
    match budget {
        BudgetRange::Free => {
            if pricing.has_free_tier() {
                1.0
            } else {
                0.0
            }
        }
        BudgetRange::Over100 => 1.0,
        _ if pricing.is_empty() => 0.0,
        BudgetRange::UpTo20 => match lowest_price(tool) {
            Some(price) if price <= 20.0 => 1.0,
            Some(price) if price <= 30.0 => 0.5,
            _ => 0.0,
        },
        BudgetRange::UpTo100 => match lowest_price(tool) {
            Some(price) if price <= 100.0 => 1.0,
            _ => 0.5,
        },
    }
}

pub const EXPERIENCE_FIT: &[(ExperienceLevel, InterfaceComplexity, Score)] = &[
    (ExperienceLevel::Beginner, InterfaceComplexity::Simple, 1.0),
    (ExperienceLevel::Beginner, InterfaceComplexity::Moderate, 0.5),
    (ExperienceLevel::Beginner, InterfaceComplexity::Complex, 0.2),
    (ExperienceLevel::Intermediate, InterfaceComplexity::Moderate, 1.0),
    (ExperienceLevel::Intermediate, InterfaceComplexity::Simple, 0.8),
    (ExperienceLevel::Intermediate, InterfaceComplexity::Complex, 0.5),
    (ExperienceLevel::Advanced, InterfaceComplexity::Complex, 1.0),
    (ExperienceLevel::Advanced, InterfaceComplexity::Moderate, 0.8),
    (ExperienceLevel::Advanced, InterfaceComplexity::Simple, 0.6),
];

pub fn experience_score(tool: &Tool, experience: ExperienceLevel) -> Score {
    if experience == ExperienceLevel::Developer {
        return if tool.api_available { 1.0 } else { 0.3 };
    }
    EXPERIENCE_FIT
        .iter()
        .find(|(level, complexity, _)| {
            *level == experience && *complexity == tool.interface_complexity
        })
        .map(|(_, _, score)| *score)
        .unwrap_or(NEUTRAL)
}

pub type ToolCheck = fn(&Tool) -> bool;

fn is_low_cost(tool: &Tool) -> bool {
    tool.pricing.has_free_tier()
        || tool
            .pricing
            .subscription_tiers()
            .first()
            .and_then(|tier| tier.price.amount())
            .is_some_and(|price| price <= 20.0)
}

fn is_popular(tool: &Tool) -> bool {
    tool.popularity >= 85
}

fn is_fast(tool: &Tool) -> bool {
    tool.has_strength("fast")
}

fn is_private(tool: &Tool) -> bool {
    tool.privacy.level == PrivacyLevel::High
}

fn is_simple(tool: &Tool) -> bool {
    tool.interface_complexity == InterfaceComplexity::Simple
}

fn is_feature_rich(tool: &Tool) -> bool {
    tool.strengths.len() >= 5
}

pub const PRIORITY_RULES: &[(&str, ToolCheck)] = &[
    ("cost", is_low_cost),
    ("quality", is_popular),
    ("speed", is_fast),
    ("privacy", is_private),
    ("ease", is_simple),
    ("features", is_feature_rich),
];

fn works_offline(tool: &Tool) -> bool {
    tool.offline_capabilities
}

fn supports_teams(tool: &Tool) -> bool {
    tool.team_collaboration
}

fn supports_custom_training(tool: &Tool) -> bool {
    tool.custom_training
}

fn has_premium_tier(tool: &Tool) -> bool {
    tool.pricing
        .subscription_prices()
        .iter()
        .any(|price| *price > 50.0)
}

pub const REQUIREMENT_RULES: &[(&str, ToolCheck)] = &[
    ("offline", works_offline),
    ("team", supports_teams),
    ("custom", supports_custom_training),
    ("custom-training", supports_custom_training),
    ("compliance", is_private),
    ("support", has_premium_tier),
];

fn rule_matches(rules: &[(&str, ToolCheck)], tool: &Tool, tag: &str) -> bool {
    rules
        .iter()
        .find(|(name, _)| *name == tag)
        .is_some_and(|(_, check)| check(tool))
}

pub fn priority_matches(tool: &Tool, tag: &str) -> bool {
    rule_matches(PRIORITY_RULES, tool, tag)
}

pub fn requirement_matches(tool: &Tool, tag: &str) -> bool {
    rule_matches(REQUIREMENT_RULES, tool, tag)
}

fn fraction_matched<T>(items: &[T], matched: impl Fn(&T) -> bool) -> Score {
    let hits = items.iter().filter(|item| matched(*item)).count();
    hits as Score / items.len() as Score
}

pub fn priority_score(tool: &Tool, priorities: &[String]) -> Score {
    if priorities.is_empty() {
        return NEUTRAL;
    }
    fraction_matched(priorities, |tag| priority_matches(tool, tag))
}

pub fn integration_supported(tool: &Tool, method: IntegrationMethod) -> bool {
    match method {
        IntegrationMethod::Web => true,
        IntegrationMethod::Api => tool.api_available,
        IntegrationMethod::Mobile => tool.mobile_app,
        IntegrationMethod::Desktop => tool.offline_capabilities,
    }
}

pub fn integration_score(tool: &Tool, methods: &[IntegrationMethod]) -> Score {
    if methods.is_empty() {
        return NEUTRAL;
    }
    fraction_matched(methods, |method| integration_supported(tool, *method))
}

/// No requirements means nothing is missing, so an empty list scores 1.0
/// rather than the neutral 0.5 used by priority and integration.
pub fn requirements_score(tool: &Tool, requirements: &[String]) -> Score {
    if requirements.is_empty() {
        return 1.0;
    }
    fraction_matched(requirements, |tag| requirement_matches(tool, tag))
}
