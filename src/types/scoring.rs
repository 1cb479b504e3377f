use serde::Serialize;

pub type Score = f64;

/// Comprehensive-mode dimensions, only computed when the mode discriminator
/// is present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtendedScores {
    pub industry: Score,
    pub team: Score,
    pub data_sensitivity: Score,
    pub language: Score,
}

/// Normalized [0,1] fit of one tool along every scored dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreCard {
    pub use_case: Score,
    pub budget: Score,
    pub experience: Score,
    pub priority: Score,
    pub integration: Score,
    pub requirements: Score,
    pub extended: Option<ExtendedScores>,
}

impl ScoreCard {
    pub fn new(
        use_case: Score,
        budget: Score,
        experience: Score,
        priority: Score,
        integration: Score,
        requirements: Score,
    ) -> Self {
        Self {
            use_case,
            budget,
            experience,
            priority,
            integration,
            requirements,
            extended: None,
        }
    }

    pub fn with_extended(mut self, extended: ExtendedScores) -> Self {
        self.extended = Some(extended);
        self
    }
}
