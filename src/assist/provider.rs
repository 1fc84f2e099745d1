//! Assist providers
//!
//! Defines the text generation trait and the Ollama implementation.

use async_trait::async_trait;

use super::types::{AssistError, AssistProvider};

/// Text generation provider trait
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Get the provider type
    fn provider_type(&self) -> AssistProvider;

    /// Check if the provider is available
    async fn is_available(&self) -> bool;

    /// Generate a completion for a prompt
    async fn generate(&self, prompt: &str) -> Result<String, AssistError>;
}

/// Ollama text model provider
pub struct OllamaProvider {
    /// Ollama API URL
    base_url: String,
    /// Model name (e.g., "qwen2.5:7b")
    model: String,
}

impl OllamaProvider {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaProvider {
    fn provider_type(&self) -> AssistProvider {
        AssistProvider::Ollama
    }

    async fn is_available(&self) -> bool {
        // Check if Ollama is running
        let client = reqwest::Client::new();
        let url = format!("{}/api/tags", self.base_url);

        match client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, AssistError> {
        let client = reqwest::Client::new();
        let url = format!("{}/api/generate", self.base_url);

        let request = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false
        });

        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistError::ApiError(format!("Failed to call Ollama: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AssistError::ApiError(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AssistError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(result["response"].as_str().unwrap_or("").trim().to_string())
    }
}

/// Mock provider for testing
#[cfg(test)]
pub struct MockProvider {
    pub response: String,
    pub available: bool,
}

#[cfg(test)]
#[async_trait]
impl TextGenerator for MockProvider {
    fn provider_type(&self) -> AssistProvider {
        AssistProvider::Ollama
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn generate(&self, _prompt: &str) -> Result<String, AssistError> {
        Ok(self.response.clone())
    }
}
