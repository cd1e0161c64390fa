use crate::error::NexusError;

/// A single-turn text completion backend.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` authenticated with `api_key` and return the generated text.
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, NexusError>;
}
