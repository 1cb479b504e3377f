use crate::types::recommendation::Recommendation;

pub const SHARE_LIMIT: usize = 3;

pub fn to_share_text(recommendations: &[Recommendation<'_>]) -> String {
    let lines: Vec<String> = recommendations
        .iter()
        .take(SHARE_LIMIT)
        .enumerate()
        .map(|(index, recommendation)| {
            format!(
                "{}. {} ({}% match)",
                index + 1,
                recommendation.tool.name,
                recommendation.match_percentage
            )
        })
        .collect();
    format!("My AI Tool Recommendations:\n\n{}", lines.join("\n"))
}
