//! Emotion classification by a remote generative-language service.
//!
//! The service is asked to answer with a line `Emotion: <label>` followed by a short
//! explanation. Anything that goes wrong surfaces as a [`ClassifyError`]; deciding
//! what to store instead is the journal's job.

use crate::config::ClassifierConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::Client;
use serde_json::Value;

/// Label used when the reply names no emotion.
pub const NEUTRAL_LABEL: &str = "Neutral";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub emotion: String,
    pub explanation: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingCredential,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("service answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("{message}")]
    MalformedResponse { message: String },
}

pub trait Classifier {
    fn classify(&self, text: &str) -> Result<Classification, ClassifyError>;
}

/// Google Generative Language (`generateContent`) client.
#[derive(Debug)]
pub struct GeminiClassifier {
    client: Client,
    config: ClassifierConfig,
}

impl GeminiClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifyError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl Classifier for GeminiClassifier {
    fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ClassifyError::MissingCredential)?;

        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": build_prompt(text) }]
            }]
        });
        tracing::debug!(model = %self.config.model, "requesting classification");
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClassifyError::Status { status, body });
        }

        let json: Value = response.json()?;
        let reply = reply_text(&json).ok_or_else(|| ClassifyError::MalformedResponse {
            message: "response has no candidate text".to_string(),
        })?;
        Ok(parse_reply(reply))
    }
}

pub fn build_prompt(text: &str) -> String {
    format!(
        "You are a gentle journaling companion. Read the journal entry below and name the \
         single dominant emotion.\n\
         Answer in exactly this format:\n\
         Emotion: <one word, e.g. Happy, Sad, Anxious, Calm, Angry, Okay>\n\
         Explanation: <two or three supportive sentences>\n\n\
         Journal entry:\n{text}"
    )
}

fn reply_text(json: &Value) -> Option<&str> {
    json.get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
}

static MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^[\s*#>_-]*emotion\b[\s*_]*[:\-]?\s*(.*)$"#).expect("valid regex")
});
static EXPLANATION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^[\s*#>_-]*explanation\b[\s*_]*:[\s*_]*"#).expect("valid regex")
});

/// Splits a reply into label and explanation.
///
/// The first line starting with the `emotion` marker (any case, markdown emphasis
/// allowed) gives the label; every other non-empty line is explanation. Without a
/// usable marker line the label is [`NEUTRAL_LABEL`].
pub fn parse_reply(reply: &str) -> Classification {
    let mut emotion: Option<String> = None;
    let mut explanation = Vec::new();

    for line in reply.lines() {
        if emotion.is_none() {
            if let Some(caps) = MARKER.captures(line) {
                let label = caps[1].trim_matches(|c: char| {
                    c.is_whitespace() || matches!(c, '*' | '_' | '"' | '\'' | '.' | '`')
                });
                emotion = Some(label.to_string());
                continue;
            }
        }
        let line = EXPLANATION_PREFIX.replace(line, "");
        let line = line.trim();
        if !line.is_empty() {
            explanation.push(line.to_string());
        }
    }

    Classification {
        emotion: emotion
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| NEUTRAL_LABEL.to_string()),
        explanation: explanation.join(" "),
    }
}
