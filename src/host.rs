//! Host coordinate frame reconciliation.
//!
//! Inside a host environment the viewer lives in an enclosure whose
//! dimensions are only known after an asynchronous negotiation. Once they
//! arrive the root container is moved down by half the enclosure height,
//! scaled from meters to host pixels and tipped −90° about X so the
//! viewer's +Z-up content stands upright in the host's +Y-up frame.
//! Standalone runs skip all of this.
//!
//! A failed negotiation is not fatal: it is logged and treated as the
//! standalone no-op, so loading and rendering carry on.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::error::StageError;
use crate::scene::SharedScene;

/// Enclosure description reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enclosure {
    /// Interior height, in host pixels.
    pub inner_height: f32,
    /// Interior depth, in host pixels.
    pub inner_depth: f32,
    /// Host pixels per scene meter.
    pub pixels_per_meter: f32,
}

impl Enclosure {
    /// Whether the enclosure is a flat panel (depth of one pixel).
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.inner_depth == 1.0
    }

    /// The root correction for this enclosure.
    #[must_use]
    pub fn correction(&self) -> HostCorrection {
        HostCorrection {
            translation: Vec3::new(0.0, -self.inner_height / 2.0, 0.0),
            scale: self.pixels_per_meter,
            rotation: Quat::from_rotation_x(-FRAC_PI_2),
        }
    }

    fn validate(&self) -> Result<(), StageError> {
        if !self.inner_height.is_finite() || !self.inner_depth.is_finite() {
            return Err(StageError::HostNegotiation(format!(
                "non-finite enclosure dimensions {self:?}"
            )));
        }
        if !(self.pixels_per_meter.is_finite() && self.pixels_per_meter > 0.0)
        {
            return Err(StageError::HostNegotiation(format!(
                "invalid pixels per meter {}",
                self.pixels_per_meter
            )));
        }
        Ok(())
    }
}

/// Transform composed onto the root container once the host frame is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostCorrection {
    /// Added to the root position.
    pub translation: Vec3,
    /// Uniform factor multiplied into the root scale.
    pub scale: f32,
    /// Pre-multiplied onto the root rotation.
    pub rotation: Quat,
}

/// What the host frame task reports back to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HostFrameOutcome {
    /// The correction applied to the root, if any.
    pub correction: Option<HostCorrection>,
    /// Flat-panel flag; `None` when running standalone or after a failed
    /// negotiation.
    pub flat: Option<bool>,
}

/// The environment the viewer runs in.
pub trait HostFrame {
    /// Whether the viewer runs inside the host.
    fn in_client(&self) -> bool;

    /// Ask the host for the enclosure description. Only called when
    /// [`in_client`](Self::in_client) is true.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::HostNegotiation`] if the host rejects the
    /// request.
    async fn negotiate_enclosure(&self) -> Result<Enclosure, StageError>;
}

/// Running outside any host.
#[derive(Debug, Default, Clone, Copy)]
pub struct Standalone;

impl HostFrame for Standalone {
    fn in_client(&self) -> bool {
        false
    }

    async fn negotiate_enclosure(&self) -> Result<Enclosure, StageError> {
        Err(StageError::HostNegotiation(
            "not running inside a host".to_owned(),
        ))
    }
}

/// Negotiate the host frame and, on receipt, apply the correction to the
/// scene root.
///
/// Never fails: negotiation errors are logged and resolve to the standalone
/// outcome.
pub async fn reconcile_host_frame<H: HostFrame>(
    host: &H,
    scene: &SharedScene,
) -> HostFrameOutcome {
    if !host.in_client() {
        log::debug!("standalone: no host frame correction");
        return HostFrameOutcome::default();
    }

    let enclosure = match host.negotiate_enclosure().await {
        Ok(enclosure) => enclosure,
        Err(e) => {
            log::warn!("{e}; continuing without host frame correction");
            return HostFrameOutcome::default();
        }
    };
    if let Err(e) = enclosure.validate() {
        log::warn!("{e}; continuing without host frame correction");
        return HostFrameOutcome::default();
    }

    let correction = enclosure.correction();
    let applied = scene.borrow_mut().apply_host_correction(&correction);
    log::info!(
        "host enclosure {}x{} at {} px/m (flat: {})",
        enclosure.inner_height,
        enclosure.inner_depth,
        enclosure.pixels_per_meter,
        enclosure.is_flat()
    );

    HostFrameOutcome {
        correction: applied.then_some(correction),
        flat: Some(enclosure.is_flat()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use crate::testing::ScriptedHost;

    fn enclosure(depth: f32) -> Enclosure {
        Enclosure {
            inner_height: 600.0,
            inner_depth: depth,
            pixels_per_meter: 500.0,
        }
    }

    #[test]
    fn standalone_applies_nothing() {
        let scene = Scene::shared();
        let outcome = pollster::block_on(reconcile_host_frame(&Standalone, &scene));
        assert_eq!(outcome, HostFrameOutcome::default());
        assert!(scene.borrow().root().correction().is_none());
    }

    #[test]
    fn enclosure_correction_is_applied_to_root() {
        let scene = Scene::shared();
        let host = ScriptedHost::with_enclosure(enclosure(400.0));
        let outcome = pollster::block_on(reconcile_host_frame(&host, &scene));
        assert_eq!(outcome.flat, Some(false));

        let scene = scene.borrow();
        let t = scene.root().node().transform;
        assert_eq!(t.position(), Vec3::new(0.0, -300.0, 0.0));
        assert!((t.scale() - Vec3::splat(500.0)).length() < 1e-3);
        // +Z in the viewer frame maps to +Y in the host frame.
        let up = t.rotation() * Vec3::Z;
        assert!((up - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn unit_depth_reports_flat() {
        let scene = Scene::shared();
        let host = ScriptedHost::with_enclosure(enclosure(1.0));
        let outcome = pollster::block_on(reconcile_host_frame(&host, &scene));
        assert_eq!(outcome.flat, Some(true));
    }

    #[test]
    fn negotiation_failure_degrades_to_noop() {
        let scene = Scene::shared();
        let host = ScriptedHost::failing();
        let outcome = pollster::block_on(reconcile_host_frame(&host, &scene));
        assert_eq!(outcome, HostFrameOutcome::default());
        assert!(scene.borrow().root().correction().is_none());
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let scene = Scene::shared();
        let host = ScriptedHost::with_enclosure(Enclosure {
            pixels_per_meter: 0.0,
            ..enclosure(400.0)
        });
        let outcome = pollster::block_on(reconcile_host_frame(&host, &scene));
        assert_eq!(outcome.correction, None);
        assert!(!scene.borrow().is_dirty());
    }

    #[test]
    fn second_reconcile_does_not_reapply() {
        let scene = Scene::shared();
        let host = ScriptedHost::with_enclosure(enclosure(400.0));
        let first = pollster::block_on(reconcile_host_frame(&host, &scene));
        let second = pollster::block_on(reconcile_host_frame(&host, &scene));
        assert!(first.correction.is_some());
        assert!(second.correction.is_none());
        assert_eq!(
            scene.borrow().root().node().transform.position(),
            Vec3::new(0.0, -300.0, 0.0)
        );
    }
}
