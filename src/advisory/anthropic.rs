use crate::advisory::{AdvisoryOpinion, AdvisoryPort};
use crate::error::{Result, ToolmatchError};
use crate::types::config::AdvisorySettings;
use crate::types::preferences::{BudgetRange, Preferences};
use crate::types::tool::{Category, Pricing, Tool};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Asks the Anthropic Messages API to rank the eligible tools.
#[derive(Debug, Clone)]
pub struct AnthropicAdvisor {
    client: Client,
    api_key: String,
    settings: AdvisorySettings,
}

impl AnthropicAdvisor {
    pub fn new(api_key: impl Into<String>, settings: AdvisorySettings) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ToolmatchError::Advisory(
                "Anthropic API key cannot be empty".to_string(),
            ));
        }
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self {
            client,
            api_key,
            settings,
        })
    }

    /// `Ok(None)` when the configured key variable is unset or blank.
    pub fn from_env(settings: AdvisorySettings) -> Result<Option<Self>> {
        match std::env::var(&settings.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Self::new(key, settings).map(Some),
            _ => {
                debug!(variable = %settings.api_key_env, "no advisory API key");
                Ok(None)
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpinionDocument {
    #[serde(default)]
    recommendations: Vec<AdvisoryOpinion>,
}

#[derive(Debug, Serialize)]
struct ToolSummary<'a> {
    id: &'a str,
    name: &'a str,
    vendor: &'a str,
    category: Category,
    pricing: &'a Pricing,
    strengths: &'a [String],
    use_cases: &'a [String],
    pros: &'a [String],
    cons: &'a [String],
}

impl<'a> ToolSummary<'a> {
    fn of(tool: &'a Tool) -> Self {
        Self {
            id: &tool.id,
            name: &tool.name,
            vendor: &tool.vendor,
            category: tool.category,
            pricing: &tool.pricing,
            strengths: head(&tool.strengths, 3),
            use_cases: head(&tool.use_cases, 3),
            pros: head(&tool.pros, 3),
            cons: head(&tool.cons, 2),
        }
    }
}

fn head(items: &[String], count: usize) -> &[String] {
    &items[..items.len().min(count)]
}

fn or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

pub(crate) fn build_prompt(tools: &[&Tool], prefs: &Preferences) -> Result<String> {
    let summaries: Vec<ToolSummary<'_>> = tools.iter().map(|tool| ToolSummary::of(tool)).collect();
    let catalog = serde_json::to_string_pretty(&summaries)?;
    let budget = match prefs.budget_range {
        BudgetRange::Free => "free tools only".to_string(),
        band => format!("${}/month", band.as_str()),
    };
    let integrations: Vec<String> = prefs
        .integration_method
        .iter()
        .map(|method| method.as_str().to_string())
        .collect();

    Ok(format!(
        "You are an objective AI tool recommendation expert. Based on the user's preferences \
and the eligible AI tools, provide unbiased recommendations.

User Preferences:
- Primary Use Cases: {use_cases}
- Experience Level: {experience}
- Budget Range: {budget}
- Priority Factors: {priorities}
- Integration Methods: {integrations}
- Usage Volume: {volume}
- Special Requirements: {requirements}

Eligible AI Tools:
{catalog}

Provide a JSON response with your top 5 recommendations. For each tool:
1. Score it from 0-100 based on fit
2. List 2-3 specific reasons why it matches their needs
3. Provide a brief explanation of trade-offs

Consider:
- Budget constraints are critical, so do not recommend tools outside their range
- Match use cases precisely
- Weight experience level heavily
- Be honest about limitations

Return ONLY valid JSON in this format:
{{
  \"recommendations\": [
    {{
      \"tool_id\": \"tool-id\",
      \"score\": 85,
      \"reasons\": [\"Reason 1\", \"Reason 2\"],
      \"explanation\": \"Brief explanation of why this is a good fit and any trade-offs\"
    }}
  ]
}}",
        use_cases = or_none(&prefs.primary_use_case),
        experience = prefs.experience_level,
        priorities = or_none(&prefs.priority_factors),
        integrations = or_none(&integrations),
        volume = prefs.usage_volume.as_str(),
        requirements = or_none(&prefs.special_requirements),
    ))
}

/// Parses the model's reply, tolerating prose around the JSON object.
pub(crate) fn parse_opinions(text: &str) -> Result<Vec<AdvisoryOpinion>> {
    let start = text.find('{');
    let end = text.rfind('}');
    let body = match (start, end) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => {
            return Err(ToolmatchError::Advisory(
                "reply contained no JSON object".to_string(),
            ))
        }
    };
    let document: OpinionDocument = serde_json::from_str(body)
        .map_err(|e| ToolmatchError::Advisory(format!("unparseable reply: {e}")))?;
    Ok(document
        .recommendations
        .into_iter()
        .map(|mut opinion| {
            opinion.score = opinion.score.clamp(0.0, 100.0);
            opinion
        })
        .collect())
}

#[async_trait]
impl AdvisoryPort for AnthropicAdvisor {
    async fn advise(&self, tools: &[&Tool], prefs: &Preferences) -> Result<Vec<AdvisoryOpinion>> {
        if tools.is_empty() {
            return Ok(Vec::new());
        }
        let started = Instant::now();
        let request = MessagesRequest {
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
            messages: vec![Message {
                role: "user",
                content: build_prompt(tools, prefs)?,
            }],
        };

        info!(model = %self.settings.model, tools = tools.len(), "requesting advisory ranking");
        let response = self
            .client
            .post(&self.settings.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolmatchError::Advisory(format!("status {status}: {body}")));
        }

        let reply: MessagesResponse = response.json().await?;
        debug!(elapsed = ?started.elapsed(), blocks = reply.content.len(), "advisory reply received");

        match reply.content.first() {
            Some(ContentBlock {
                kind,
                text: Some(text),
            }) if kind == "text" => parse_opinions(text),
            _ => Ok(Vec::new()),
        }
    }
}
