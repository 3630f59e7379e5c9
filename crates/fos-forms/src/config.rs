//! Form Configuration

use serde::Deserialize;

/// Form configuration options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Largest submission body accepted when parsing a request (bytes)
    pub max_memory: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_memory: 32 * 1024 * 1024, // 32MB
        }
    }
}
