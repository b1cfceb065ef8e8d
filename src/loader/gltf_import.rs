use std::path::Path;

use glam::Mat4;

use crate::scene::{Material, Mesh, SceneNode, Transform};

/// Nesting deeper than this is treated as a malformed file.
const MAX_NODE_DEPTH: usize = 256;

/// Import the default scene of a glTF file as a [`SceneNode`] tree.
///
/// The returned root stands for the glTF scene itself; its children are the
/// scene's root nodes. Node matrices are adopted as-is. A mesh with a single
/// primitive is attached to its node directly; with several, each primitive
/// becomes its own child node after the node's regular children.
pub(crate) fn import_scene(path: &Path) -> Result<SceneNode, String> {
    let (document, buffers, _images) =
        gltf::import(path).map_err(|e| e.to_string())?;
    let gltf_scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| "file defines no scene".to_owned())?;

    let mut root = SceneNode::new();
    root.name = gltf_scene.name().map(str::to_owned);
    for gltf_node in gltf_scene.nodes() {
        root.add_child(convert_node(&gltf_node, &buffers, 0)?);
    }
    Ok(root)
}

fn convert_node(
    gltf_node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    depth: usize,
) -> Result<SceneNode, String> {
    if depth > MAX_NODE_DEPTH {
        return Err(format!("node nesting exceeds {MAX_NODE_DEPTH} levels"));
    }

    let matrix = Mat4::from_cols_array_2d(&gltf_node.transform().matrix());
    let mut node =
        SceneNode::new().with_transform(Transform::from_matrix(matrix));
    node.name = gltf_node.name().map(str::to_owned);

    for child in gltf_node.children() {
        node.add_child(convert_node(&child, buffers, depth + 1)?);
    }

    if let Some(gltf_mesh) = gltf_node.mesh() {
        let mut meshes = gltf_mesh
            .primitives()
            .map(|primitive| load_primitive(&primitive, buffers))
            .collect::<Result<Vec<_>, _>>()?;
        if meshes.len() == 1 {
            node.mesh = meshes.pop();
        } else {
            for mesh in meshes {
                node.add_child(SceneNode::with_mesh(mesh));
            }
        }
    }
    Ok(node)
}

fn load_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
) -> Result<Mesh, String> {
    let reader = primitive
        .reader(|buffer| buffers.get(buffer.index()).map(|d| d.0.as_slice()));
    let positions = reader
        .read_positions()
        .ok_or_else(|| "primitive missing positions".to_owned())?
        .flatten()
        .collect();

    let [r, g, b, _] = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();
    Ok(Mesh {
        positions,
        material: Material {
            color: [r, g, b],
            ..Material::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    /// Three points (1,0,0), (0,2,0), (0,0,3) as little-endian f32.
    const POINTS_BASE64: &str =
        "AACAPwAAAAAAAAAAAAAAAAAAAEAAAAAAAAAAAAAAAAAAAEBA";

    fn ribbon_gltf() -> String {
        format!(
            r#"{{
  "asset": {{ "version": "2.0" }},
  "scene": 0,
  "scenes": [{{ "name": "import", "nodes": [0] }}],
  "nodes": [
    {{ "name": "wrapper", "children": [1] }},
    {{ "name": "ribbon", "translation": [4.0, 5.0, 6.0], "children": [2, 3] }},
    {{ "name": "chainA", "mesh": 0 }},
    {{ "name": "chainB", "mesh": 0, "scale": [2.0, 2.0, 2.0] }}
  ],
  "meshes": [{{ "primitives": [{{
    "attributes": {{ "POSITION": 0 }},
    "material": 0,
    "mode": 0
  }}] }}],
  "materials": [{{ "pbrMetallicRoughness": {{ "baseColorFactor": [0.5, 0.25, 1.0, 1.0] }} }}],
  "accessors": [{{
    "bufferView": 0,
    "componentType": 5126,
    "count": 3,
    "type": "VEC3",
    "min": [0.0, 0.0, 0.0],
    "max": [1.0, 2.0, 3.0]
  }}],
  "bufferViews": [{{ "buffer": 0, "byteLength": 36 }}],
  "buffers": [{{
    "byteLength": 36,
    "uri": "data:application/octet-stream;base64,{POINTS_BASE64}"
  }}]
}}"#
        )
    }

    #[test]
    fn imports_hierarchy_and_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1CRN.gltf");
        std::fs::write(&path, ribbon_gltf()).unwrap();

        let root = import_scene(&path).unwrap();
        assert_eq!(root.name.as_deref(), Some("import"));
        let ribbon = &root.children()[0].children()[0];
        assert_eq!(ribbon.name.as_deref(), Some("ribbon"));
        assert_eq!(ribbon.transform.position(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(ribbon.children().len(), 2);

        let chain = &ribbon.children()[0];
        let mesh = chain.mesh.as_ref().unwrap();
        assert_eq!(
            mesh.vertices().collect::<Vec<_>>(),
            [Vec3::X, Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, 3.0)]
        );
        assert_eq!(mesh.material.color, [0.5, 0.25, 1.0]);
        assert_eq!(ribbon.children()[1].transform.scale(), Vec3::splat(2.0));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.gltf");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(import_scene(&path).is_err());
    }
}
