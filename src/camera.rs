//! Orthographic camera for the standalone preview surface.

use glam::{Mat4, Vec3};

use crate::options::PreviewOptions;

/// Orthographic camera defined by eye position, target, and a symmetric
/// frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in root space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Half width and half height of the view volume.
    pub half_extent: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// The standalone preview camera: looking along -X at the middle of the
    /// viewing volume, with +Z up.
    #[must_use]
    pub fn preview(options: &PreviewOptions) -> Self {
        Self {
            eye: Vec3::from_array(options.eye),
            target: Vec3::from_array(options.target),
            up: Vec3::from_array(options.up),
            half_extent: options.half_extent,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Get just the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        let h = self.half_extent;
        Mat4::orthographic_rh(-h, h, -h, h, self.znear, self.zfar)
    }
}
