//! Render surface setup.
//!
//! Standalone runs get their own preview surface and orthographic camera.
//! Inside a host the surface is supplied by the host and no camera is
//! created.

use crate::camera::Camera;
use crate::error::StageError;
use crate::options::PreviewOptions;

/// A prepared render target.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSurface {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Clear color as RGB in `0.0..=1.0`.
    pub clear_color: [f32; 3],
    /// Camera owned by the surface; `None` when the host drives the view.
    pub camera: Option<Camera>,
}

impl RenderSurface {
    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Something that can hand out a render surface.
pub trait SurfaceProvider {
    /// Prepare the surface.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::SurfaceSetup`] if no usable surface can be
    /// created.
    async fn acquire(&self) -> Result<RenderSurface, StageError>;
}

/// Standalone preview surface with its own camera.
#[derive(Debug, Clone)]
pub struct PreviewSurface {
    options: PreviewOptions,
}

impl PreviewSurface {
    /// Surface built from the preview options.
    #[must_use]
    pub fn new(options: PreviewOptions) -> Self {
        Self { options }
    }
}

impl SurfaceProvider for PreviewSurface {
    async fn acquire(&self) -> Result<RenderSurface, StageError> {
        let o = &self.options;
        if o.width == 0 || o.height == 0 {
            return Err(StageError::SurfaceSetup(format!(
                "zero-sized preview surface {}x{}",
                o.width, o.height
            )));
        }
        let frustum_ok = o.half_extent > 0.0 && o.zfar > o.znear;
        if !frustum_ok {
            return Err(StageError::SurfaceSetup(format!(
                "degenerate preview frustum (half extent {}, near {}, far {})",
                o.half_extent, o.znear, o.zfar
            )));
        }
        log::debug!("preview surface {}x{}", o.width, o.height);
        Ok(RenderSurface {
            width: o.width,
            height: o.height,
            clear_color: crate::scene::rgb_from_hex(o.clear_color),
            camera: Some(Camera::preview(o)),
        })
    }
}

/// Host-provided surface; the host owns the view, so no camera.
#[derive(Debug, Clone, Copy)]
pub struct HostSurface {
    /// Width in host pixels.
    pub width: u32,
    /// Height in host pixels.
    pub height: u32,
}

impl SurfaceProvider for HostSurface {
    async fn acquire(&self) -> Result<RenderSurface, StageError> {
        Ok(RenderSurface {
            width: self.width,
            height: self.height,
            clear_color: [0.0; 3],
            camera: None,
        })
    }
}
