use crate::core::geometry::DEFAULT_GAP;
use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_OPTIONS: [&str; 15] = [
    "bold",
    "italic",
    "strikethrough",
    "underline",
    "h1",
    "h2",
    "blockquote",
    "justify-left",
    "justify-center",
    "justify-right",
    "justify-full",
    "indent",
    "outdent",
    "link",
    "clear",
];

/// Host-supplied toolbar configuration. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    // Option identifiers in display order; unknown ones are ignored.
    pub options: Vec<String>,
    pub gap: f64,
    pub link_prompt: String,
    pub link_placeholder: String,
    pub resync_scoped_classes: bool,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            options: DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
            gap: DEFAULT_GAP,
            link_prompt: "Please type in a link".to_string(),
            link_placeholder: "https://".to_string(),
            resync_scoped_classes: true,
        }
    }
}

impl ToolbarConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parse toolbar config")
    }
}
