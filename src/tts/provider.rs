//! Speech synthesis providers
//!
//! Defines the synthesizer trait and the VOICEVOX implementation.

use async_trait::async_trait;

use super::types::{TtsError, TtsProvider};

/// Speech synthesis provider trait
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Get the provider type
    fn provider_type(&self) -> TtsProvider;

    /// Check if the provider is available
    async fn is_available(&self) -> bool;

    /// Synthesize `text` into WAV bytes
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsError>;
}

/// VOICEVOX engine provider
pub struct VoicevoxProvider {
    /// Engine API URL
    base_url: String,
    /// Speaker (voice) id
    speaker: u32,
}

impl VoicevoxProvider {
    pub fn new(base_url: &str, speaker: u32) -> Self {
        Self {
            base_url: base_url.to_string(),
            speaker,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for VoicevoxProvider {
    fn provider_type(&self) -> TtsProvider {
        TtsProvider::Voicevox
    }

    async fn is_available(&self) -> bool {
        // Check if the engine is running
        let client = reqwest::Client::new();
        let url = format!("{}/version", self.base_url);

        match client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsError> {
        let client = reqwest::Client::new();

        // The engine runs in two steps: build an audio query for the text,
        // then render it.
        let query_url = format!(
            "{}/audio_query?text={}&speaker={}",
            self.base_url,
            urlencoding::encode(text),
            self.speaker
        );

        let response = client
            .post(&query_url)
            .send()
            .await
            .map_err(|e| TtsError::ApiError(format!("Failed to call VOICEVOX: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::ApiError(format!(
                "audio_query returned {}: {}",
                status, body
            )));
        }

        let audio_query: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TtsError::ApiError(format!("Failed to parse audio query: {}", e)))?;

        let synth_url = format!("{}/synthesis?speaker={}", self.base_url, self.speaker);

        let response = client
            .post(&synth_url)
            .json(&audio_query)
            .send()
            .await
            .map_err(|e| TtsError::ApiError(format!("Failed to call VOICEVOX: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::ApiError(format!(
                "synthesis returned {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| TtsError::ApiError(format!("Failed to read audio body: {}", e)))?;

        Ok(audio.to_vec())
    }
}
