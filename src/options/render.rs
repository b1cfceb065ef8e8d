use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Render loop pacing.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Render", inline)]
#[serde(default)]
pub struct RenderOptions {
    /// Frame cap; 0 renders on every tick.
    #[schemars(range(min = 0, max = 240))]
    pub target_fps: u32,
}
