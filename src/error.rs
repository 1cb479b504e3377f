use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolmatchError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid preferences: {0}")]
    InvalidPreferences(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("advisory request failed: {0}")]
    Advisory(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ToolmatchError {
    /// Errors caused by what the user handed us rather than by the runtime.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPreferences(_)
                | Self::InvalidCatalog(_)
                | Self::UnknownTool(_)
                | Self::PathNotFound(_)
                | Self::ConfigParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ToolmatchError>;
