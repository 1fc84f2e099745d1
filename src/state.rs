//! Application state management

use std::sync::Arc;

use crate::assist::{AssistService, OllamaProvider, TextGenerator};
use crate::config::Config;
use crate::storage::S3Client;
use crate::tts::{SpeechSynthesizer, VoicevoxProvider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pub config: Config,
    pub s3_client: S3Client,
    pub assist: AssistService,
    pub tts: Arc<dyn SpeechSynthesizer>,
}

impl AppState {
    /// Create a new application state with the default providers wired
    /// from configuration
    pub fn new(config: Config, s3_client: S3Client) -> Self {
        let generator: Arc<dyn TextGenerator> = Arc::new(OllamaProvider::new(
            &config.assist.endpoint,
            &config.assist.model,
        ));
        let tts: Arc<dyn SpeechSynthesizer> = Arc::new(VoicevoxProvider::new(
            &config.tts.endpoint,
            config.tts.speaker,
        ));

        Self::with_providers(config, s3_client, generator, tts)
    }

    /// Create application state with explicit providers
    pub fn with_providers(
        config: Config,
        s3_client: S3Client,
        generator: Arc<dyn TextGenerator>,
        tts: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                s3_client,
                assist: AssistService::new(generator),
                tts,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the S3 client
    pub fn s3_client(&self) -> &S3Client {
        &self.inner.s3_client
    }

    /// Get the assist service
    pub fn assist(&self) -> &AssistService {
        &self.inner.assist
    }

    /// Get the speech synthesizer
    pub fn tts(&self) -> &dyn SpeechSynthesizer {
        self.inner.tts.as_ref()
    }

    /// Items per reader page from configuration
    pub fn items_per_page(&self) -> usize {
        self.inner.config.reader.items_per_page
    }
}
