//! Field-extraction collaborator.
//!
//! Sends the document text to an OpenAI-compatible chat-completions
//! endpoint and asks for the structured bunker record as JSON. The reply
//! is untrusted: it goes through serde and explicit field validation
//! before anything reaches the compliance engine.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use shared_types::{BunkerRecord, ParameterReading};
use tracing::debug;

use crate::error::ApiError;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub struct FieldExtractor {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl FieldExtractor {
    /// Resolves credentials and endpoint once at startup.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY is not set")?;
        let api_base =
            std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            client: Client::new(),
            api_key,
            api_base,
            model,
        })
    }

    /// Extracts a structured bunker record from raw document text.
    pub async fn extract(&self, text: &str) -> Result<BunkerRecord, ApiError> {
        let prompt = build_prompt(text);

        debug!(model = %self.model, "requesting field extraction");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": [{ "role": "user", "content": prompt }],
                "temperature": 0,
            }))
            .send()
            .await
            .map_err(|e| ApiError::Extraction(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Extraction(format!(
                "upstream returned {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| ApiError::Extraction(format!("unreadable response: {}", e)))?;

        let content = completion
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| ApiError::Extraction("response contained no choices".to_string()))?;

        let record = parse_record(content)?;
        validate_record(&record)?;
        Ok(record)
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        r#"Extract the following from the text:
- Vessel Name
- IMO Number
- Bunker Port
- Bunkering Date
- Product/Fuel Grade
- A dictionary of parameters and values (only numerical values)

Respond with only JSON in this shape:
{{
  "Vessel": "",
  "IMO": "",
  "Port": "",
  "Date": "",
  "Grade": "",
  "Parameters": {{ "Viscosity": "4.5" }}
}}

Text:
{}"#,
        text
    )
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

/// The record shape the model is asked for. Parameters keep the model's
/// output order (serde_json preserve_order), which becomes extraction
/// order in the report.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Vessel")]
    vessel: String,
    #[serde(rename = "IMO")]
    imo: String,
    #[serde(rename = "Port")]
    port: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Grade")]
    grade: String,
    #[serde(rename = "Parameters")]
    parameters: serde_json::Map<String, Value>,
}

/// Parses the model reply into a bunker record.
pub fn parse_record(content: &str) -> Result<BunkerRecord, ApiError> {
    let json_text = strip_code_fence(content);
    let raw: RawRecord = serde_json::from_str(json_text)
        .map_err(|e| ApiError::Extraction(format!("malformed record JSON: {}", e)))?;

    let parameters = raw
        .parameters
        .into_iter()
        .map(|(name, value)| ParameterReading::new(name, value_to_string(&value)))
        .collect();

    Ok(BunkerRecord {
        vessel: raw.vessel,
        imo: raw.imo,
        port: raw.port,
        date: raw.date,
        grade: raw.grade,
        parameters,
    })
}

/// Rejects records missing the fields the engine and the report need.
pub fn validate_record(record: &BunkerRecord) -> Result<(), ApiError> {
    for (name, value) in [
        ("Vessel", &record.vessel),
        ("IMO", &record.imo),
        ("Grade", &record.grade),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::InvalidRequest(format!(
                "extracted record is missing required field '{}'",
                name
            )));
        }
    }
    Ok(())
}

/// Models often wrap JSON in a markdown code fence.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
