//! Bounding radius of a scene hierarchy about a reference point.

use glam::{Mat4, Vec3};

use crate::error::StageError;
use crate::scene::{Mesh, SceneNode};

/// Furthest vertex distance from `reference` over the whole subtree of
/// `node`.
///
/// `reference` is expressed in `node`'s own frame (its transform is not
/// applied). For each child the reference point is mapped through the
/// inverse of that child's local matrix and distances are measured in the
/// child's local units. A child whose matrix cannot be inverted is measured
/// with the reference point left as is. Mesh leaves without vertices and nodes with neither
/// mesh nor children contribute 0, so an empty subtree yields 0.
///
/// The walk uses an explicit work-list, so hierarchy depth is bounded by
/// heap rather than stack.
#[must_use]
pub fn estimate_radius(node: &SceneNode, reference: Vec3) -> f32 {
    let mut max = 0.0_f32;
    let mut work = vec![(node, reference)];

    while let Some((node, point)) = work.pop() {
        if let Some(mesh) = &node.mesh {
            match mesh_radius(mesh, point) {
                Ok(radius) => max = max.max(radius),
                Err(StageError::EmptyGeometry) => {
                    log::trace!("skipping empty mesh {:?}", node.name);
                }
                Err(e) => log::debug!("mesh radius failed: {e}"),
            }
        }

        for child in node.children() {
            let matrix = child.transform.matrix();
            let det = matrix.determinant();
            let inverse = if det == 0.0 || !det.is_finite() {
                log::warn!(
                    "child {:?} has a singular transform; measuring it \
                     untransformed",
                    child.name
                );
                Mat4::IDENTITY
            } else {
                matrix.inverse()
            };
            work.push((child, inverse.transform_point3(point)));
        }
    }

    max
}

/// Furthest vertex of a single mesh from `point`, in the mesh's frame.
///
/// # Errors
///
/// Returns [`StageError::EmptyGeometry`] when the mesh has no vertices.
pub fn mesh_radius(mesh: &Mesh, point: Vec3) -> Result<f32, StageError> {
    if mesh.vertex_count() == 0 {
        return Err(StageError::EmptyGeometry);
    }
    Ok(mesh
        .vertices()
        .map(|v| v.distance(point))
        .fold(0.0_f32, f32::max))
}
