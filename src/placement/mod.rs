//! Composite construction and normalizing placement.
//!
//! The loaded ball and ribbon models are parented under one composite node.
//! Structures with a hand-tuned entry in the precomputed table get that matrix
//! verbatim; everything else is fitted automatically: the composite is
//! scaled by `1 / radius` (radius from [`estimate_radius`] about the origin)
//! and moved to [`FALLBACK_OFFSET`], so it fills a unit sphere centred just
//! above the floor of the viewing volume.

mod radius;
mod table;

use glam::{Mat4, Vec3};
pub use radius::{estimate_radius, mesh_radius};
pub use table::{precomputed_identities, precomputed_transform};

use crate::identity::StructureIdentity;
use crate::loader::LoadedAssets;
use crate::scene::SceneNode;

/// Local offset of an automatically fitted composite.
pub const FALLBACK_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 0.8);

/// How a composite's transform was chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// The hand-tuned table entry was applied.
    Precomputed,
    /// Fitted from the estimated radius. A radius of 0 means the composite
    /// was empty and left unscaled.
    Derived {
        /// Radius about the origin before scaling.
        radius: f32,
    },
}

/// The ball and ribbon models under one normalizing transform.
#[derive(Debug, Clone)]
pub struct CompositeModel {
    identity: StructureIdentity,
    node: SceneNode,
    placement: Placement,
}

impl CompositeModel {
    /// Structure this composite was built for.
    #[must_use]
    pub fn identity(&self) -> &StructureIdentity {
        &self.identity
    }

    /// The composite node (children: ball, then ribbon, whichever loaded).
    #[must_use]
    pub fn node(&self) -> &SceneNode {
        &self.node
    }

    /// How the transform was chosen.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The composite's local matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.node.transform.matrix()
    }

    /// Split into its parts for insertion into the scene.
    #[must_use]
    pub fn into_parts(self) -> (StructureIdentity, SceneNode, Placement) {
        (self.identity, self.node, self.placement)
    }
}

/// Build the composite for `identity` from whichever assets loaded.
///
/// Never fails: a composite with no geometry is fitted with scale 1 and the
/// fixed offset.
#[must_use]
pub fn resolve_placement(
    identity: &StructureIdentity,
    assets: LoadedAssets,
) -> CompositeModel {
    let mut node = SceneNode::named(identity.as_str());
    let LoadedAssets { ball, ribbon } = assets;
    if let Some(ball) = ball {
        node.add_child(ball);
    }
    if let Some(ribbon) = ribbon {
        node.add_child(ribbon);
    }

    let placement = if let Some(matrix) = precomputed_transform(identity) {
        node.transform.set_matrix(matrix);
        Placement::Precomputed
    } else {
        let radius = estimate_radius(&node, Vec3::ZERO);
        if radius > 0.0 && radius.is_finite() {
            node.transform.set_scale(node.transform.scale() * radius.recip());
        } else {
            log::warn!(
                "{identity}: composite has no measurable extent; leaving it \
                 unscaled"
            );
        }
        node.transform.set_position(FALLBACK_OFFSET);
        Placement::Derived { radius }
    };

    log::info!(
        "{identity}: placed {} child model(s) ({placement:?})",
        node.children().len()
    );

    CompositeModel {
        identity: identity.clone(),
        node,
        placement,
    }
}
