//! Text-to-speech
//!
//! Speech synthesis for reader items via a local VOICEVOX engine.

mod provider;
mod types;

pub use provider::{SpeechSynthesizer, VoicevoxProvider};
pub use types::{TtsError, TtsProvider};
