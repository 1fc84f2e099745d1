//! Yomu Server Library
//!
//! This crate exposes the text engine and API surface for benchmarking and
//! testing. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `furigana`: bracket/ruby annotation handling
//! - `dialect`: the heading/variant text format
//! - `extract`: reading-item extraction for both formats
//! - `progress`: bookmarks, progress math, pagination
//!
//! The text engine is pure and synchronous; storage, assist and speech live
//! behind async collaborators wired through `state::AppState`.

pub mod assist;
pub mod config;
pub mod dialect;
pub mod error;
pub mod extract;
pub mod furigana;
pub mod progress;
pub mod routes;
pub mod state;
pub mod storage;
pub mod tts;
pub mod vocabulary;
