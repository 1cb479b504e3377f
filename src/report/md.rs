use crate::report::{format_cost, RecommendationReport};

pub fn to_markdown(report: &RecommendationReport<'_>) -> String {
    let mut output = String::new();
    output.push_str("# AI Tool Recommendations\n\n");
    output.push_str(&format!("Mode: {}\n", report.mode.as_str()));
    output.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if report.recommendations.is_empty() {
        output.push_str("No tools matched your preferences.\n");
        return output;
    }

    for (index, recommendation) in report.recommendations.iter().enumerate() {
        let tool = recommendation.tool;
        output.push_str(&format!(
            "## {}. {} ({})\n\n",
            index + 1,
            tool.name,
            tool.vendor
        ));
        output.push_str(&format!(
            "- Match: {}%\n- Category: {}\n- Estimated cost: {}\n",
            recommendation.match_percentage,
            tool.category,
            format_cost(recommendation)
        ));
        if !tool.website.is_empty() {
            output.push_str(&format!("- Website: {}\n", tool.website));
        }
        output.push('\n');

        if !recommendation.reasons.is_empty() {
            output.push_str("Why it fits:\n\n");
            for reason in &recommendation.reasons {
                output.push_str(&format!("- {reason}\n"));
            }
            output.push('\n');
        }
        if let Some(explanation) = &recommendation.advisory_explanation {
            output.push_str(&format!("> {explanation}\n\n"));
        }
    }

    output
}
