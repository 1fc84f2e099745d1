//! Assist service
//!
//! Builds the Japanese prompts for the explain and paraphrase features
//! and shapes the model output for the reader.

use std::sync::Arc;

use crate::dialect::{parse_dialect, ParsedItem};
use crate::furigana::{add_furigana, strip_furigana};

use super::provider::TextGenerator;
use super::types::AssistError;

/// Reading-assist service backed by a text generation provider
pub struct AssistService {
    provider: Arc<dyn TextGenerator>,
}

impl AssistService {
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self { provider }
    }

    /// Explain a sentence in simple Japanese
    pub async fn explain(&self, sentence: &str) -> Result<String, AssistError> {
        self.ensure_available().await?;
        let plain = strip_furigana(sentence);
        self.provider.generate(&explanation_prompt(&plain)).await
    }

    /// Paraphrase a sentence into simpler variants.
    ///
    /// The model is asked for dialect-format output with bracket readings;
    /// the reply is annotated and re-parsed so the caller always gets
    /// structured items, however sloppy the model output was.
    pub async fn paraphrase(&self, sentence: &str) -> Result<Vec<ParsedItem>, AssistError> {
        self.ensure_available().await?;
        let plain = strip_furigana(sentence);
        let output = self.provider.generate(&paraphrase_prompt(&plain)).await?;
        let annotated = add_furigana(&output);
        Ok(parse_dialect(&annotated))
    }

    async fn ensure_available(&self) -> Result<(), AssistError> {
        if !self.provider.is_available().await {
            return Err(AssistError::ProviderNotAvailable(format!(
                "{:?} provider is not available",
                self.provider.provider_type()
            )));
        }
        Ok(())
    }
}

fn explanation_prompt(sentence: &str) -> String {
    format!(
        "次の日本語の文の意味を、やさしい日本語で短く説明してください。\
         説明だけを出力してください。\n\n文: {}",
        sentence
    )
}

fn paraphrase_prompt(sentence: &str) -> String {
    format!(
        "次の日本語の文を、より簡単な日本語で2通りに言い換えてください。\
         出力は必ず次の形式に従い、難しい漢字には 漢字[かんじ] の形で\
         読みを付けてください。\n\
         <元の文\n\
         >>言い換え1\n\
         >>言い換え2\n\n\
         元の文: {}",
        sentence
    )
}
