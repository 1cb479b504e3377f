//! Human-readable justifications.
//!
//! Reasons come from an ordered table of rules. Each rule is a predicate over
//! a [`ScoreContext`] plus a renderer; rules run in table order and their
//! output is concatenated without deduplication.

use crate::engine::dimensions::{
    integration_supported, priority_matches, requirement_matches, use_case_tag_score,
};
use crate::engine::extended::{industry_rule, is_english_only, is_multilingual};
use crate::types::preferences::{Mode, Preferences};
use crate::types::scoring::{Score, ScoreCard};
use crate::types::tool::{Category, Tool};

/// Everything a reason rule may look at.
pub struct ScoreContext<'a> {
    pub tool: &'a Tool,
    pub prefs: &'a Preferences,
    pub scores: &'a ScoreCard,
    /// Per requested use-case tag, the value it contributed to the use-case
    /// average.
    pub use_case_matches: Vec<(&'a str, Score)>,
}

impl<'a> ScoreContext<'a> {
    pub fn new(tool: &'a Tool, prefs: &'a Preferences, scores: &'a ScoreCard) -> Self {
        let text = tool.use_case_text();
        let use_case_matches = prefs
            .primary_use_case
            .iter()
            .map(|tag| (tag.as_str(), use_case_tag_score(tool, tag, &text)))
            .collect();
        Self {
            tool,
            prefs,
            scores,
            use_case_matches,
        }
    }

    fn comprehensive(&self) -> bool {
        self.prefs.mode() == Mode::Comprehensive
    }

    fn extended_score(&self, pick: fn(&crate::types::scoring::ExtendedScores) -> Score) -> Score {
        self.scores.extended.as_ref().map_or(0.0, pick)
    }
}

pub struct ReasonRule {
    pub name: &'static str,
    pub applies: fn(&ScoreContext) -> bool,
    pub render: fn(&ScoreContext) -> Vec<String>,
}

pub const REASON_RULES: &[ReasonRule] = &[
    ReasonRule {
        name: "use_case_fit",
        applies: |ctx| ctx.scores.use_case > 0.7,
        render: |ctx| vec![format!("Excellent for {}", ctx.prefs.primary_use_case.join(", "))],
    },
    ReasonRule {
        name: "budget_fit",
        applies: |ctx| ctx.scores.budget == 1.0,
        render: |_| vec!["Fits your budget perfectly".to_string()],
    },
    ReasonRule {
        name: "experience_fit",
        applies: |ctx| ctx.scores.experience > 0.8,
        render: |ctx| vec![format!("Great for {} users", ctx.prefs.experience_level)],
    },
    ReasonRule {
        name: "use_case_detail",
        applies: |ctx| ctx.scores.use_case > 0.7,
        render: render_use_case_detail,
    },
    ReasonRule {
        name: "priority_privacy",
        applies: |ctx| ctx.prefs.has_priority("privacy") && priority_matches(ctx.tool, "privacy"),
        render: |_| vec!["Strong privacy protection".to_string()],
    },
    ReasonRule {
        name: "priority_speed",
        applies: |ctx| ctx.prefs.has_priority("speed") && priority_matches(ctx.tool, "speed"),
        render: |_| vec!["Fast response times".to_string()],
    },
    ReasonRule {
        name: "priority_quality",
        applies: |ctx| ctx.prefs.has_priority("quality") && ctx.tool.popularity > 85,
        render: |_| vec!["Industry-leading quality".to_string()],
    },
    ReasonRule {
        name: "priority_cost",
        applies: |ctx| ctx.prefs.has_priority("cost") && priority_matches(ctx.tool, "cost"),
        render: |ctx| {
            if ctx.tool.pricing.has_free_tier() {
                vec!["Free tier available to get started".to_string()]
            } else {
                vec!["Affordable entry-level pricing".to_string()]
            }
        },
    },
    ReasonRule {
        name: "priority_ease",
        applies: |ctx| ctx.prefs.has_priority("ease") && priority_matches(ctx.tool, "ease"),
        render: |_| vec!["Simple, approachable interface".to_string()],
    },
    ReasonRule {
        name: "industry_fit",
        applies: |ctx| ctx.comprehensive() && ctx.extended_score(|s| s.industry) > 0.7,
        render: render_industry,
    },
    ReasonRule {
        name: "team_fit",
        applies: |ctx| ctx.comprehensive() && ctx.extended_score(|s| s.team) > 0.7,
        render: render_team,
    },
    ReasonRule {
        name: "data_sensitivity",
        applies: |ctx| ctx.comprehensive() && ctx.prefs.extended.data_sensitivity.is_some(),
        render: render_data_sensitivity,
    },
    ReasonRule {
        name: "integration_methods",
        applies: |ctx| ctx.comprehensive() && !ctx.prefs.integration_method.is_empty(),
        render: render_integration_methods,
    },
    ReasonRule {
        name: "workflow",
        applies: |ctx| ctx.comprehensive() && ctx.prefs.extended.workflow_integration.is_some(),
        render: render_workflow,
    },
    ReasonRule {
        name: "performance",
        applies: |ctx| ctx.comprehensive() && ctx.prefs.extended.performance_needs.is_some(),
        render: render_performance,
    },
    ReasonRule {
        name: "languages",
        applies: |ctx| ctx.comprehensive() && ctx.prefs.extended.languages.is_some(),
        render: render_languages,
    },
    ReasonRule {
        name: "special_requirements",
        applies: |ctx| ctx.comprehensive() && !ctx.prefs.special_requirements.is_empty(),
        render: render_special_requirements,
    },
    ReasonRule {
        name: "current_tools",
        applies: |ctx| ctx.comprehensive() && ctx.prefs.extended.current_tools.is_some(),
        render: render_current_tools,
    },
    ReasonRule {
        name: "support_level",
        applies: |ctx| ctx.comprehensive() && ctx.prefs.extended.support_level.is_some(),
        render: render_support_level,
    },
    ReasonRule {
        name: "key_advantages",
        applies: |ctx| !ctx.tool.pros.is_empty(),
        render: |ctx| {
            let top: Vec<&str> = ctx.tool.pros.iter().take(2).map(String::as_str).collect();
            vec![format!("Key advantages: {}", top.join(", "))]
        },
    },
];

pub fn generate_reasons(ctx: &ScoreContext) -> Vec<String> {
    REASON_RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .flat_map(|rule| (rule.render)(ctx))
        .collect()
}

pub fn reasons(tool: &Tool, prefs: &Preferences, scores: &ScoreCard) -> Vec<String> {
    generate_reasons(&ScoreContext::new(tool, prefs, scores))
}

const USE_CASE_DETAIL: &[(&str, &str)] = &[
    ("writing", "Strong at content creation and writing"),
    ("coding", "Built for code generation and programming work"),
    ("data", "Well suited to data analysis and research"),
    ("creative", "Designed for creative and visual work"),
    ("business", "Tailored to business automation"),
    ("education", "Helpful for learning and clear explanations"),
];

fn render_use_case_detail(ctx: &ScoreContext) -> Vec<String> {
    ctx.use_case_matches
        .iter()
        .filter(|(_, value)| *value > 0.0)
        .filter_map(|(tag, _)| {
            USE_CASE_DETAIL
                .iter()
                .find(|(name, _)| name == tag)
                .map(|(_, sentence)| sentence.to_string())
        })
        .collect()
}

fn render_industry(ctx: &ScoreContext) -> Vec<String> {
    let label = ctx
        .prefs
        .extended
        .industry
        .as_deref()
        .and_then(industry_rule)
        .map_or("your", |rule| rule.label);
    vec![format!("Well suited to {label} industry needs")]
}

fn render_team(ctx: &ScoreContext) -> Vec<String> {
    let sentence = match ctx.prefs.extended.team_size.as_deref() {
        Some("individual") => "A good fit for individual use",
        Some("small-team") => "Works well for small teams",
        Some("medium-team") | Some("large-team") => "Built-in collaboration for larger teams",
        _ => "Fits your team setup",
    };
    vec![sentence.to_string()]
}

fn render_data_sensitivity(ctx: &ScoreContext) -> Vec<String> {
    let sensitivity = ctx
        .prefs
        .extended
        .data_sensitivity
        .as_deref()
        .unwrap_or("your");
    let level = ctx.tool.privacy.level.as_str();
    vec![format!(
        "{}{} privacy level for {} data",
        level[..1].to_uppercase(),
        &level[1..],
        sensitivity
    )]
}

fn render_integration_methods(ctx: &ScoreContext) -> Vec<String> {
    let supported: Vec<&str> = ctx
        .prefs
        .integration_method
        .iter()
        .filter(|method| integration_supported(ctx.tool, **method))
        .map(|method| method.as_str())
        .collect();
    if supported.is_empty() {
        return Vec::new();
    }
    vec![format!("Available through {}", supported.join(", "))]
}

fn render_workflow(ctx: &ScoreContext) -> Vec<String> {
    let tool = ctx.tool;
    let workflow = ctx
        .prefs
        .extended
        .workflow_integration
        .as_deref()
        .unwrap_or(&[]);
    workflow
        .iter()
        .filter_map(|tag| match tag.as_str() {
            "standalone" => Some("Works as a standalone app"),
            "browser-extension" if tool.mentions_integration(&["browser", "chrome"]) => {
                Some("Available as a browser extension")
            }
            "ide-plugin" if tool.category == Category::Code => Some("Plugs into your code editor"),
            "api-integration" if tool.api_available => Some("Connects to your apps through its API"),
            "slack-teams" if tool.mentions_integration(&["slack", "teams", "microsoft"]) => {
                Some("Integrates with your chat platform")
            }
            "zapier" if tool.mentions_integration(&["zapier", "make"]) => {
                Some("Automates through Zapier or Make")
            }
            _ => None,
        })
        .map(str::to_string)
        .collect()
}

fn render_performance(ctx: &ScoreContext) -> Vec<String> {
    let tool = ctx.tool;
    let sentence = match ctx.prefs.extended.performance_needs.as_deref() {
        Some("fastest") if tool.has_strength("fast") => Some("Optimized for fast responses"),
        Some("quality") if tool.popularity >= 85 => Some("Top-tier output quality"),
        Some("batch") if tool.api_available => Some("Handles batch workloads through its API"),
        Some("balanced") => Some("Balances speed and output quality"),
        _ => None,
    };
    sentence.map(str::to_string).into_iter().collect()
}

fn render_languages(ctx: &ScoreContext) -> Vec<String> {
    if is_multilingual(ctx.tool) {
        vec!["Supports multilingual work".to_string()]
    } else if is_english_only(ctx.prefs.extended.languages.as_deref()) {
        vec!["Strong English-language support".to_string()]
    } else {
        Vec::new()
    }
}

const REQUIREMENT_DETAIL: &[(&str, &str)] = &[
    ("offline", "Works offline"),
    ("team", "Built-in team collaboration"),
    ("custom", "Supports custom training on your data"),
    ("custom-training", "Supports custom training on your data"),
    ("compliance", "Meets strict compliance needs"),
    ("support", "Premium plans with dedicated support"),
];

fn render_special_requirements(ctx: &ScoreContext) -> Vec<String> {
    ctx.prefs
        .special_requirements
        .iter()
        .filter(|tag| requirement_matches(ctx.tool, tag))
        .filter_map(|tag| {
            REQUIREMENT_DETAIL
                .iter()
                .find(|(name, _)| *name == tag.as_str())
                .map(|(_, sentence)| sentence.to_string())
        })
        .collect()
}

fn render_current_tools(ctx: &ScoreContext) -> Vec<String> {
    let current = ctx.prefs.extended.current_tools.as_deref().unwrap_or(&[]);
    let tool = ctx.tool;
    let name = tool.name.to_lowercase();
    if current
        .iter()
        .any(|used| used == &tool.id || name.contains(used.as_str()))
    {
        vec!["You already use this tool, so there is nothing new to learn".to_string()]
    } else if current.iter().any(|used| used == "none") {
        vec!["A solid first AI tool".to_string()]
    } else if current.is_empty() {
        Vec::new()
    } else {
        vec!["Complements the tools you already use".to_string()]
    }
}

fn render_support_level(ctx: &ScoreContext) -> Vec<String> {
    let pricing = &ctx.tool.pricing;
    let premium = pricing.subscription_prices().iter().any(|price| *price > 50.0);
    let sentence = match ctx.prefs.extended.support_level.as_deref() {
        Some("enterprise") | Some("priority") if premium => {
            Some("Offers plans with priority support")
        }
        Some("standard") if ctx.tool.documentation.is_some() => {
            Some("Well documented with standard support")
        }
        Some("community") if pricing.has_free_tier() => Some("Free tier with community support"),
        _ => None,
    };
    sentence.map(str::to_string).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::composite::score_card;
    use crate::engine::fixtures::{comprehensive_prefs, copilot_like, developer_prefs, tags};

    fn reasons_for(tool: &Tool, prefs: &Preferences) -> Vec<String> {
        let card = score_card(tool, prefs);
        reasons(tool, prefs, &card)
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<&str> = REASON_RULES.iter().map(|rule| rule.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), REASON_RULES.len());
    }

    #[test]
    fn general_reasons_come_first_and_advantages_last() {
        let tool = copilot_like();
        let prefs = developer_prefs();
        let reasons = reasons_for(&tool, &prefs);

        assert_eq!(
            reasons,
            vec![
                "Excellent for coding".to_string(),
                "Fits your budget perfectly".to_string(),
                "Great for developer users".to_string(),
                "Built for code generation and programming work".to_string(),
                "Industry-leading quality".to_string(),
                "Key advantages: Seamless IDE integration, Learns your codebase".to_string(),
            ]
        );
    }

    #[test]
    fn use_case_detail_requires_a_strong_overall_match() {
        let tool = copilot_like();
        let mut prefs = developer_prefs();
        prefs.primary_use_case = tags(&["coding", "creative"]);
        let reasons = reasons_for(&tool, &prefs);
        assert!(!reasons.iter().any(|reason| reason.starts_with("Excellent for")));
        assert!(!reasons.iter().any(|reason| reason.starts_with("Built for code")));
    }

    #[test]
    fn extended_reasons_are_silent_in_basic_mode() {
        let tool = copilot_like();
        let mut prefs = developer_prefs();
        prefs.extended.data_sensitivity = Some("internal".to_string());
        let reasons = reasons_for(&tool, &prefs);
        assert!(!reasons.iter().any(|reason| reason.contains("privacy level")));
    }

    #[test]
    fn comprehensive_mode_adds_presence_gated_reasons() {
        let tool = copilot_like();
        let prefs = comprehensive_prefs();
        let reasons = reasons_for(&tool, &prefs);

        assert!(reasons.contains(&"Well suited to technology industry needs".to_string()));
        assert!(reasons.contains(&"Works well for small teams".to_string()));
        assert!(reasons.contains(&"Medium privacy level for internal data".to_string()));
        assert!(reasons.contains(&"Available through web, api".to_string()));
        assert!(reasons.contains(&"Plugs into your code editor".to_string()));
        assert!(reasons.contains(&"Strong English-language support".to_string()));
        assert!(reasons.contains(&"Built-in team collaboration".to_string()));
        assert!(reasons.contains(&"You already use this tool, so there is nothing new to learn".to_string()));
        assert_eq!(
            reasons.last().map(String::as_str),
            Some("Key advantages: Seamless IDE integration, Learns your codebase")
        );
    }

    #[test]
    fn reasons_are_not_deduplicated() {
        let tool = copilot_like();
        let mut prefs = developer_prefs();
        prefs.primary_use_case = tags(&["coding", "coding"]);
        let reasons = reasons_for(&tool, &prefs);
        let detail = reasons
            .iter()
            .filter(|reason| reason.as_str() == "Built for code generation and programming work")
            .count();
        assert_eq!(detail, 2);
    }

    #[test]
    fn generation_is_deterministic() {
        let tool = copilot_like();
        let prefs = comprehensive_prefs();
        assert_eq!(reasons_for(&tool, &prefs), reasons_for(&tool, &prefs));
    }
}
