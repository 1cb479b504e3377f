use crate::engine::dimensions::{budget_score, use_case_score};
use crate::types::preferences::Preferences;
use crate::types::tool::Tool;

/// Hard-constraint pass: drops tools with no budget fit or no use-case fit.
/// Catalog order is preserved.
pub fn filter<'a>(tools: &'a [Tool], prefs: &Preferences) -> Vec<&'a Tool> {
    tools.iter().filter(|tool| is_eligible(tool, prefs)).collect()
}

pub fn is_eligible(tool: &Tool, prefs: &Preferences) -> bool {
    budget_score(tool, prefs.budget_range) != 0.0
        && use_case_score(tool, &prefs.primary_use_case) != 0.0
}
