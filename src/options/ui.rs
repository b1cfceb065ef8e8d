use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Page styling hints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "UI", inline)]
#[serde(default)]
pub struct UiOptions {
    /// CSS color for enabled menu entries and the selected structure.
    pub highlight_color: String,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            highlight_color: "#87ceeb".to_owned(),
        }
    }
}
