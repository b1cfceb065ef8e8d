use glam::{Mat4, Vec3};

use super::{SceneNode, Transform};
use crate::error::StageError;
use crate::host::HostCorrection;
use crate::identity::StructureIdentity;
use crate::placement::{CompositeModel, Placement};

/// The composite currently shown under the root.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveModel {
    /// Structure the composite was built for.
    pub identity: StructureIdentity,
    /// How its transform was chosen.
    pub placement: Placement,
    index: usize,
}

/// Top-level node of the live scene.
///
/// Holds at most one composite, and receives the host frame correction at
/// most once. The correction composes with whatever transform the root
/// already has and, through the hierarchy, with the composite's own
/// placement.
#[derive(Debug, Clone, Default)]
pub struct RootContainer {
    node: SceneNode,
    correction: Option<HostCorrection>,
    active: Option<ActiveModel>,
}

impl RootContainer {
    /// Empty root with an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node and everything under it.
    #[must_use]
    pub fn node(&self) -> &SceneNode {
        &self.node
    }

    /// The applied host correction, if any.
    #[must_use]
    pub fn correction(&self) -> Option<&HostCorrection> {
        self.correction.as_ref()
    }

    /// The attached composite's bookkeeping, if any.
    #[must_use]
    pub fn active_model(&self) -> Option<&ActiveModel> {
        self.active.as_ref()
    }

    /// The attached composite's node, if any.
    #[must_use]
    pub fn active_node(&self) -> Option<&SceneNode> {
        self.active
            .as_ref()
            .and_then(|active| self.node.children().get(active.index))
    }

    /// Root-space matrix of the attached composite: host correction followed
    /// by the composite's placement.
    #[must_use]
    pub fn active_world_matrix(&self) -> Option<Mat4> {
        self.active_node()
            .map(|node| self.node.transform.matrix() * node.transform.matrix())
    }

    /// Insert a fully built composite in one step.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::ModelAlreadyAttached`] if a composite is
    /// already active; the root is left untouched.
    pub fn attach(
        &mut self,
        composite: CompositeModel,
    ) -> Result<(), StageError> {
        if let Some(active) = &self.active {
            return Err(StageError::ModelAlreadyAttached(
                active.identity.clone(),
            ));
        }
        let (identity, node, placement) = composite.into_parts();
        let index = self.node.children().len();
        self.node.add_child(node);
        self.active = Some(ActiveModel {
            identity,
            placement,
            index,
        });
        Ok(())
    }

    /// Compose the host correction onto the root transform.
    ///
    /// Returns `false` (and changes nothing) if a correction was already
    /// applied.
    pub fn apply_correction(&mut self, correction: &HostCorrection) -> bool {
        if self.correction.is_some() {
            log::warn!("host frame correction already applied; ignoring");
            return false;
        }
        let current = self.node.transform;
        self.node.transform = Transform::from_trs(
            current.position() + correction.translation,
            correction.rotation * current.rotation(),
            current.scale() * Vec3::splat(correction.scale),
        );
        self.correction = Some(*correction);
        true
    }
}
