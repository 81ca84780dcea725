//! Build configuration.

use serde::Deserialize;

/// Formatting options for the generated C text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildConfig {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Values per line in byte array definitions.
    pub bytes_per_line: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            bytes_per_line: 16,
        }
    }
}

impl BuildConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub(crate) fn tab(&self) -> String {
        " ".repeat(self.indent)
    }
}
