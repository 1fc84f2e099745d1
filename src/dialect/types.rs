use serde::{Deserialize, Serialize};

/// One heading with the variant lines that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedItem {
    pub head: String,
    pub variants: Vec<String>,
}

impl ParsedItem {
    pub fn new(head: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            variants: Vec::new(),
        }
    }

    /// True when neither a head nor any variant was collected.
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.variants.is_empty()
    }
}
