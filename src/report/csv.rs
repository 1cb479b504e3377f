use crate::report::format_cost;
use crate::types::recommendation::Recommendation;

const HEADER: [&str; 5] = ["Name", "Vendor", "Match %", "Estimated Cost", "Website"];

fn field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn to_csv(recommendations: &[Recommendation<'_>]) -> String {
    let mut lines = vec![HEADER.join(",")];
    for recommendation in recommendations {
        let tool = recommendation.tool;
        let row = [
            field(&tool.name),
            field(&tool.vendor),
            format!("{}%", recommendation.match_percentage),
            field(&format_cost(recommendation)),
            field(&tool.website),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}
