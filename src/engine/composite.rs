use crate::engine::dimensions::{
    budget_score, experience_score, integration_score, priority_score, requirements_score,
    use_case_score,
};
use crate::engine::extended::extended_scores;
use crate::types::preferences::Preferences;
use crate::types::recommendation::{sort_by_score, Recommendation};
use crate::types::scoring::{Score, ScoreCard};
use crate::types::tool::Tool;

/// Recommendations must score strictly above this to be shown.
pub const MIN_SCORE: Score = 40.0;
pub const MAX_RECOMMENDATIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    UseCase,
    Budget,
    Experience,
    Priority,
    Integration,
    Requirements,
    Industry,
    Team,
    DataSensitivity,
    Language,
}

impl Dimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UseCase => "use_case",
            Self::Budget => "budget",
            Self::Experience => "experience",
            Self::Priority => "priority",
            Self::Integration => "integration",
            Self::Requirements => "requirements",
            Self::Industry => "industry",
            Self::Team => "team",
            Self::DataSensitivity => "data_sensitivity",
            Self::Language => "language",
        }
    }
}

/// Base weights sum to 100.
pub const BASE_WEIGHTS: &[(Dimension, Score)] = &[
    (Dimension::UseCase, 30.0),
    (Dimension::Budget, 25.0),
    (Dimension::Experience, 15.0),
    (Dimension::Priority, 20.0),
    (Dimension::Integration, 5.0),
    (Dimension::Requirements, 5.0),
];

/// Added on top of the base weights without renormalizing, so comprehensive
/// scores can reach 130.
pub const EXTENDED_WEIGHTS: &[(Dimension, Score)] = &[
    (Dimension::Industry, 10.0),
    (Dimension::Team, 5.0),
    (Dimension::DataSensitivity, 10.0),
    (Dimension::Language, 5.0),
];

impl ScoreCard {
    pub fn get(&self, dimension: Dimension) -> Option<Score> {
        let extended = self.extended.as_ref();
        match dimension {
            Dimension::UseCase => Some(self.use_case),
            Dimension::Budget => Some(self.budget),
            Dimension::Experience => Some(self.experience),
            Dimension::Priority => Some(self.priority),
            Dimension::Integration => Some(self.integration),
            Dimension::Requirements => Some(self.requirements),
            Dimension::Industry => extended.map(|scores| scores.industry),
            Dimension::Team => extended.map(|scores| scores.team),
            Dimension::DataSensitivity => extended.map(|scores| scores.data_sensitivity),
            Dimension::Language => extended.map(|scores| scores.language),
        }
    }

    /// `(dimension, raw score, weight)` for every dimension that was scored.
    pub fn weighted(&self) -> Vec<(Dimension, Score, Score)> {
        BASE_WEIGHTS
            .iter()
            .chain(EXTENDED_WEIGHTS)
            .filter_map(|(dimension, weight)| {
                self.get(*dimension).map(|score| (*dimension, score, *weight))
            })
            .collect()
    }

    /// Weighted sum, unrounded and unclamped.
    pub fn composite(&self) -> Score {
        self.weighted()
            .iter()
            .map(|(_, score, weight)| score * weight)
            .sum()
    }
}

pub fn score_card(tool: &Tool, prefs: &Preferences) -> ScoreCard {
    let card = ScoreCard::new(
        use_case_score(tool, &prefs.primary_use_case),
        budget_score(tool, prefs.budget_range),
        experience_score(tool, prefs.experience_level),
        priority_score(tool, &prefs.priority_factors),
        integration_score(tool, &prefs.integration_method),
        requirements_score(tool, &prefs.special_requirements),
    );
    if prefs.is_comprehensive() {
        card.with_extended(extended_scores(tool, &prefs.extended))
    } else {
        card
    }
}

pub fn score(tool: &Tool, prefs: &Preferences) -> Score {
    score_card(tool, prefs).composite()
}

/// Sort descending (stable), drop anything at or below [`MIN_SCORE`], keep
/// the first [`MAX_RECOMMENDATIONS`].
pub fn rank(mut recommendations: Vec<Recommendation<'_>>) -> Vec<Recommendation<'_>> {
    sort_by_score(&mut recommendations);
    recommendations.retain(|recommendation| recommendation.score > MIN_SCORE);
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
