use glam::{Mat4, Quat, Vec3};

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Local-to-parent transform stored both as a matrix and as its decomposed
/// position/rotation/scale.
///
/// The matrix is authoritative: [`set_matrix`](Self::set_matrix) keeps it
/// bit-exact and re-derives the components from it, while the component
/// setters recompose the matrix as `T * R * S`. Code that reads components
/// directly (instead of the matrix) therefore always sees a consistent view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, rotation or scale.
    pub const IDENTITY: Self = Self {
        matrix: Mat4::IDENTITY,
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Adopt `matrix` verbatim and decompose it.
    #[must_use]
    pub fn from_matrix(matrix: Mat4) -> Self {
        let (scale, rotation, position) = matrix.to_scale_rotation_translation();
        Self {
            matrix,
            position,
            rotation,
            scale,
        }
    }

    /// Compose from translation, rotation and scale.
    #[must_use]
    pub fn from_trs(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            matrix: Mat4::from_scale_rotation_translation(
                scale, rotation, position,
            ),
            position,
            rotation,
            scale,
        }
    }

    /// The local matrix (column-major).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Translation component.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Rotation component.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Replace the matrix and re-derive the components from it.
    pub fn set_matrix(&mut self, matrix: Mat4) {
        *self = Self::from_matrix(matrix);
    }

    /// Reset to identity, re-deriving components from the identity matrix.
    pub fn reset(&mut self) {
        self.set_matrix(Mat4::IDENTITY);
    }

    /// Pre-multiply `matrix` onto the current transform
    /// (`self = matrix * self`).
    pub fn apply_matrix(&mut self, matrix: Mat4) {
        self.set_matrix(matrix * self.matrix);
    }

    /// Set the translation component.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.recompose();
    }

    /// Set the rotation component.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.recompose();
    }

    /// Set the scale component.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.recompose();
    }

    fn recompose(&mut self) {
        self.matrix = Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.position,
        );
    }
}

// ---------------------------------------------------------------------------
// Mesh
// ---------------------------------------------------------------------------

/// Which faces of a mesh are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Front faces only.
    #[default]
    Front,
    /// Both front and back faces.
    Double,
}

/// Surface appearance of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Linear RGB base color.
    pub color: [f32; 3],
    /// Face culling mode.
    pub side: Side,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            side: Side::Front,
        }
    }
}

/// Geometry attached to a scene node: a flat `xyzxyz…` position buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions, three contiguous floats per vertex.
    pub positions: Vec<f32>,
    /// Appearance.
    pub material: Material,
}

impl Mesh {
    /// Mesh from a flat position buffer with the default material.
    #[must_use]
    pub fn from_positions(positions: Vec<f32>) -> Self {
        Self {
            positions,
            material: Material::default(),
        }
    }

    /// Mesh from a list of points.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Self {
        Self::from_positions(
            points.iter().flat_map(|p| p.to_array()).collect(),
        )
    }

    /// Number of whole vertices in the buffer. A trailing partial vertex is
    /// ignored.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Decoded vertex positions.
    pub fn vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
    }
}

// ---------------------------------------------------------------------------
// SceneNode
// ---------------------------------------------------------------------------

/// A node in an owned scene hierarchy.
///
/// Children are owned directly; moving a node into another parent detaches
/// it from wherever it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneNode {
    /// Optional label carried over from the source file.
    pub name: Option<String>,
    /// Local-to-parent transform.
    pub transform: Transform,
    /// Geometry, for mesh-bearing nodes.
    pub mesh: Option<Mesh>,
    children: Vec<SceneNode>,
}

impl SceneNode {
    /// Empty node with an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty node with a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Mesh-bearing node with an identity transform.
    #[must_use]
    pub fn with_mesh(mesh: Mesh) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::default()
        }
    }

    /// Builder-style transform override.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder-style child append.
    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child.
    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Direct children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Mutable access to the direct children.
    pub fn children_mut(&mut self) -> &mut [SceneNode] {
        &mut self.children
    }

    /// Detach and return the child at `index`.
    pub fn take_child(&mut self, index: usize) -> Option<SceneNode> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Visit this node and every descendant (pre-order, iterative).
    pub fn traverse_mut(&mut self, mut f: impl FnMut(&mut SceneNode)) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            f(&mut *node);
            stack.extend(node.children.iter_mut().rev());
        }
    }

    /// Visit this node and every descendant (pre-order, iterative).
    pub fn traverse(&self, mut f: impl FnMut(&SceneNode)) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            f(node);
            stack.extend(node.children.iter().rev());
        }
    }

    /// Total vertex count over the whole subtree.
    #[must_use]
    pub fn total_vertices(&self) -> usize {
        let mut total = 0;
        self.traverse(|node| {
            total += node.mesh.as_ref().map_or(0, Mesh::vertex_count);
        });
        total
    }

    /// Number of mesh-bearing nodes in the subtree.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        let mut count = 0;
        self.traverse(|node| count += usize::from(node.mesh.is_some()));
        count
    }
}
