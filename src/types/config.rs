use crate::error::ToolmatchError;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ADVISORY_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_ADVISORY_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolmatchConfig {
    pub catalog: Option<CatalogConfig>,
    pub advisory: Option<AdvisoryConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdvisoryConfig {
    #[serde(default)]
    pub enabled: bool,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub api_key_env: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

/// Advisory settings with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorySettings {
    pub enabled: bool,
    pub model: String,
    pub endpoint: String,
    pub api_key_env: String,
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for AdvisorySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            model: DEFAULT_ADVISORY_MODEL.to_string(),
            endpoint: DEFAULT_ADVISORY_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout: Duration::from_secs(10),
            max_tokens: 1000,
            temperature: 0.3,
        }
    }
}

const OUTPUT_FORMATS: [&str; 4] = ["md", "json", "csv", "share"];

impl ToolmatchConfig {
    pub fn catalog_path(&self) -> Option<&PathBuf> {
        self.catalog.as_ref().and_then(|catalog| catalog.path.as_ref())
    }

    pub fn output_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.format.as_deref())
    }

    pub fn advisory_settings(&self) -> AdvisorySettings {
        let defaults = AdvisorySettings::default();
        match &self.advisory {
            Some(advisory) => AdvisorySettings {
                enabled: advisory.enabled,
                model: advisory.model.clone().unwrap_or(defaults.model),
                endpoint: advisory.endpoint.clone().unwrap_or(defaults.endpoint),
                api_key_env: advisory.api_key_env.clone().unwrap_or(defaults.api_key_env),
                timeout: advisory
                    .timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.timeout),
                max_tokens: advisory.max_tokens.unwrap_or(defaults.max_tokens),
                temperature: advisory.temperature.unwrap_or(defaults.temperature),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), ToolmatchError> {
        if let Some(advisory) = &self.advisory {
            if advisory.timeout_secs == Some(0) {
                return Err(ToolmatchError::ConfigParse(
                    "advisory.timeout_secs must be greater than 0".to_string(),
                ));
            }
            if advisory.max_tokens == Some(0) {
                return Err(ToolmatchError::ConfigParse(
                    "advisory.max_tokens must be greater than 0".to_string(),
                ));
            }
            if let Some(temperature) = advisory.temperature {
                if !(0.0..=1.0).contains(&temperature) {
                    return Err(ToolmatchError::ConfigParse(
                        "advisory.temperature must be between 0.0 and 1.0".to_string(),
                    ));
                }
            }
            if advisory
                .api_key_env
                .as_ref()
                .is_some_and(|name| name.trim().is_empty())
            {
                return Err(ToolmatchError::ConfigParse(
                    "advisory.api_key_env cannot be empty".to_string(),
                ));
            }
        }

        if let Some(format) = self.output_format() {
            if !OUTPUT_FORMATS.contains(&format) {
                return Err(ToolmatchError::ConfigParse(format!(
                    "unsupported output.format: {} (expected one of {})",
                    format,
                    OUTPUT_FORMATS.join(", ")
                )));
            }
        }

        Ok(())
    }
}
