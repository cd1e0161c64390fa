use crate::constants::{endpoints, models};
use crate::error::NexusError;
use crate::llm::traits::CompletionClient;
use serde::{Deserialize, Serialize};

pub struct GeminiClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            model: models::DEFAULT_GEMINI_MODEL.to_string(),
            base_url: endpoints::GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Endpoint URL without the credential.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn single_turn(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
pub fn extract_reply(body: &str) -> Result<String, NexusError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| NexusError::malformed(format!("invalid JSON: {e}")))?;

    let candidate = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .ok_or_else(|| NexusError::malformed("no candidates"))?;

    let part = candidate
        .content
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .ok_or_else(|| NexusError::malformed("candidate has no content parts"))?;

    part.text
        .ok_or_else(|| NexusError::malformed("first part has no text"))
}

#[async_trait::async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, NexusError> {
        let url = self.endpoint();
        tracing::debug!(%url, prompt_len = prompt.len(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .query(&[(endpoints::KEY_PARAM, api_key)])
            .json(&GenerateContentRequest::single_turn(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NexusError::request_failed(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        let body = response.text().await?;
        extract_reply(&body)
    }
}
