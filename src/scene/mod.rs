//! Live scene: an owned node hierarchy under a single root container, plus
//! the render surface the frame loop draws it to.
//!
//! The scene is shared between the composition pipeline (the only writer)
//! and the render loop (a reader on every tick) through [`SharedScene`].
//! Writers hold the borrow only for single, complete mutations, so a tick
//! never observes a half-built composite.

mod node;
mod root;

use std::cell::RefCell;
use std::rc::Rc;

pub use node::{Material, Mesh, SceneNode, Side, Transform};
pub use root::{ActiveModel, RootContainer};

use crate::camera::Camera;
use crate::error::StageError;
use crate::host::HostCorrection;
use crate::placement::CompositeModel;
use crate::surface::RenderSurface;

/// Single-threaded shared handle to the live scene.
pub type SharedScene = Rc<RefCell<Scene>>;

/// Convert `0xRRGGBB` to an RGB triple in `0.0..=1.0`.
#[must_use]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// The live scene.
#[derive(Debug, Default)]
pub struct Scene {
    root: RootContainer,
    surface: Option<RenderSurface>,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Create an empty scene with no surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scene behind a shared handle.
    #[must_use]
    pub fn shared() -> SharedScene {
        Rc::new(RefCell::new(Self::new()))
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene data changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark current generation as rendered.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// The root container.
    #[must_use]
    pub fn root(&self) -> &RootContainer {
        &self.root
    }

    /// The installed render surface, if setup has completed.
    #[must_use]
    pub fn surface(&self) -> Option<&RenderSurface> {
        self.surface.as_ref()
    }

    /// The camera to render with, when the surface brought its own.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.surface.as_ref().and_then(|s| s.camera.as_ref())
    }

    /// Install the render surface (replacing any previous one).
    pub fn install_surface(&mut self, surface: RenderSurface) {
        self.surface = Some(surface);
        self.invalidate();
    }

    /// Insert a fully built composite under the root.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::ModelAlreadyAttached`] if one is already
    /// present.
    pub fn attach_model(
        &mut self,
        composite: CompositeModel,
    ) -> Result<(), StageError> {
        self.root.attach(composite)?;
        self.invalidate();
        Ok(())
    }

    /// Apply the host frame correction to the root (at most once).
    pub fn apply_host_correction(
        &mut self,
        correction: &HostCorrection,
    ) -> bool {
        let applied = self.root.apply_correction(correction);
        if applied {
            self.invalidate();
        }
        applied
    }
}
