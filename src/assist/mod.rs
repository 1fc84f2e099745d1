//! Reading assist
//!
//! LLM-backed explanation and paraphrasing for sentences in the reader.

mod provider;
mod service;
mod types;

pub use provider::{OllamaProvider, TextGenerator};
pub use service::AssistService;
pub use types::{AssistError, AssistProvider};
