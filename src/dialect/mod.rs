//! Dialect text format
//!
//! Texts in this format alternate heading lines (`<` or `＜` marker) with
//! `>>` variant lines. The parser never fails: missing markers are
//! recovered heuristically and stray lines merge into the previous
//! record instead of aborting the parse.

mod parser;
mod types;

pub(crate) use parser::is_heading_line;
pub use parser::parse_dialect;
pub use types::ParsedItem;
