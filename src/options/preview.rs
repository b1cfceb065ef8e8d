use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Render surface and camera used when running outside the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Preview", inline)]
#[serde(default)]
pub struct PreviewOptions {
    /// Surface width in pixels.
    #[schemars(range(min = 1, max = 8192))]
    pub width: u32,
    /// Surface height in pixels.
    #[schemars(range(min = 1, max = 8192))]
    pub height: u32,
    /// Clear color as `0xRRGGBB`.
    pub clear_color: u32,
    /// Half width/height of the orthographic frustum, in scene units.
    #[schemars(range(min = 0.1, max = 10.0))]
    pub half_extent: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Camera position.
    #[schemars(skip)]
    pub eye: [f32; 3],
    /// Look-at target.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Up direction.
    #[schemars(skip)]
    pub up: [f32; 3],
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            clear_color: 0,
            half_extent: 1.5,
            znear: 0.1,
            zfar: 100.0,
            eye: [2.0, 0.0, 1.5],
            target: [0.0, 0.0, 1.5],
            up: [0.0, 0.0, 1.0],
        }
    }
}
