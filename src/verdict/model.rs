//! Chat-completion model classifier.
//!
//! Sends the classification prompt to an OpenAI-compatible chat-completions
//! endpoint and recovers a structured verdict from the free-text reply.
//! Models wrap JSON in markdown fences often enough that extraction tries a
//! ```json block first, then any fenced block, then the raw content.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::Error;

use super::classifier::{Classifier, Prompt};
use super::types::Label;

static FENCED_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*([\s\S]*?)\s*```").unwrap());
static FENCED_ANY: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\s*([\s\S]*?)\s*```").unwrap());

/// Classifier backed by an OpenAI-compatible chat-completions API.
pub struct ChatClassifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatClassifier {
    /// Create a classifier from the service configuration.
    ///
    /// The HTTP client is built once with the configured request timeout;
    /// timer expiry surfaces as a transport failure on `classify`.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[async_trait]
impl Classifier for ChatClassifier {
    fn name(&self) -> &'static str {
        "chat_completions"
    }

    async fn classify(&self, prompt: &Prompt) -> Result<String, Error> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt.system.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.user.clone(),
                },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Transport(format!(
                "classifier endpoint returned {}: {}",
                status, body
            )));
        }

        let reply: ChatResponse = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Transport("classifier reply has no choices".to_string()))
    }
}

/// Verdict fields recovered from the model's reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelVerdict {
    pub label: Label,
    pub confidence: f32,
    pub explanation: String,
}

#[derive(Deserialize)]
struct RawVerdict {
    verdict: String,
    confidence: f32,
    explanation: String,
}

/// Parse the model's free-text reply into a verdict.
///
/// Fails with [`Error::Parse`] when no JSON object can be located, a field
/// is missing, the label is unknown, or the confidence leaves [0, 1].
pub fn parse_model_verdict(content: &str) -> Result<ModelVerdict, Error> {
    let candidate = FENCED_JSON
        .captures(content)
        .or_else(|| FENCED_ANY.captures(content))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .unwrap_or(content);

    let raw: RawVerdict = serde_json::from_str(candidate)
        .map_err(|e| Error::Parse(format!("model reply is not valid JSON: {}", e)))?;

    let label = Label::from_str(&raw.verdict)
        .ok_or_else(|| Error::Parse(format!("unknown verdict label: {:?}", raw.verdict)))?;

    if !(0.0..=1.0).contains(&raw.confidence) {
        return Err(Error::Parse(format!(
            "confidence out of range: {}",
            raw.confidence
        )));
    }

    Ok(ModelVerdict {
        label,
        confidence: raw.confidence,
        explanation: raw.explanation,
    })
}
