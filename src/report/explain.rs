//! Per-tool score breakdown.

use crate::engine::composite::MIN_SCORE;
use crate::engine::{eligibility, evaluate};
use crate::report::format_cost;
use crate::types::preferences::Preferences;
use crate::types::tool::Tool;

pub fn explain(tool: &Tool, prefs: &Preferences) -> String {
    let recommendation = evaluate(tool, prefs);
    let eligible = eligibility::is_eligible(tool, prefs);

    let mut output = String::new();
    output.push_str(&format!("# {} ({})\n\n", tool.name, tool.vendor));
    output.push_str(&format!("Mode: {}\n\n", prefs.mode().as_str()));
    output.push_str("| dimension | score | weight | points |\n");
    output.push_str("|---|---|---|---|\n");
    for (dimension, score, weight) in recommendation.breakdown.weighted() {
        output.push_str(&format!(
            "| {} | {:.2} | {:.0} | {:.1} |\n",
            dimension.as_str(),
            score,
            weight,
            score * weight
        ));
    }
    output.push_str(&format!(
        "\nComposite: {:.1} ({}% match)\n",
        recommendation.score, recommendation.match_percentage
    ));

    let verdict = if !eligible {
        "excluded by the budget or use-case filter".to_string()
    } else if recommendation.score > MIN_SCORE {
        "eligible and above the display threshold".to_string()
    } else {
        format!("eligible but at or below the {MIN_SCORE:.0} point threshold")
    };
    output.push_str(&format!("Verdict: {verdict}\n"));
    output.push_str(&format!(
        "Estimated cost: {}\n",
        format_cost(&recommendation)
    ));

    if !recommendation.reasons.is_empty() {
        output.push_str("\nReasons:\n");
        for reason in &recommendation.reasons {
            output.push_str(&format!("- {reason}\n"));
        }
    }
    output
}
