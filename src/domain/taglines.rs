//! The fixed set of taglines the hero section rotates through

use serde::{Deserialize, Serialize};

pub const DEFAULT_TAGLINES: [&str; 5] = [
    "Building smart solutions, one line of code at a time.",
    "Engineering ideas into reality — just like Stark.",
    "Minimal. Modern. Powerful.",
    "Code is my arc reactor.",
    "Turning imagination into innovation.",
];

/// Non-empty list of display strings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaglineSet {
    taglines: Vec<String>,
}

impl TaglineSet {
    pub fn new(taglines: Vec<String>) -> Result<Self, String> {
        if taglines.is_empty() {
            return Err("tagline set must not be empty".to_string());
        }
        Ok(Self { taglines })
    }

    /// Accepts `{"taglines": ["...", ...]}`
    pub fn from_json(json: &str) -> Result<Self, String> {
        let parsed: TaglineSet = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::new(parsed.taglines)
    }

    pub fn len(&self) -> usize {
        self.taglines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taglines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.taglines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.taglines.iter().map(String::as_str)
    }
}

impl Default for TaglineSet {
    fn default() -> Self {
        Self {
            taglines: DEFAULT_TAGLINES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
