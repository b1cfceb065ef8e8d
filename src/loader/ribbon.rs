use crate::error::{AssetKind, StageError};
use crate::identity::StructureIdentity;
use crate::loader::RibbonScene;
use crate::scene::{rgb_from_hex, SceneNode, Side};

/// Chain colors, assigned to the ribbon's direct children by index.
pub const RIBBON_PALETTE: [u32; 10] = [
    0x00d8_04e0, 0x00ce_f615, 0x003e_39fb, 0x00ff_3737, 0x0004_e3d1, 0x002e_8a1c,
    0x00cf_cfcf, 0x00ff_bb18, 0x00ff_b4b4, 0x00b8_b4ff,
];

/// Palette color for the chain at `index`, cycling every
/// [`RIBBON_PALETTE`] length.
#[must_use]
pub fn palette_color(index: usize) -> [f32; 3] {
    rgb_from_hex(RIBBON_PALETTE[index % RIBBON_PALETTE.len()])
}

/// Pull the ribbon out of an imported scene and prepare it for display.
///
/// The ribbon root is the first grandchild of the import root. Its local
/// transform is discarded (reset to identity, components re-derived from the
/// identity matrix) and every mesh under its `i`-th direct child is colored
/// with [`palette_color`]`(i)` and made double-sided.
///
/// # Errors
///
/// Returns [`StageError::AssetFetch`] when the import does not have the
/// expected `scene/0/0` shape.
pub fn adapt_ribbon(
    raw: RibbonScene,
    identity: &StructureIdentity,
) -> Result<SceneNode, StageError> {
    let mut scene = raw.scene;
    let mut ribbon = scene
        .take_child(0)
        .and_then(|mut wrapper| wrapper.take_child(0))
        .ok_or_else(|| {
            StageError::asset_fetch(
                AssetKind::Ribbon,
                identity,
                "imported scene has no ribbon root at children[0].children[0]",
            )
        })?;

    ribbon.transform.reset();

    for (i, chain) in ribbon.children_mut().iter_mut().enumerate() {
        let color = palette_color(i);
        chain.traverse_mut(|node| {
            if let Some(mesh) = &mut node.mesh {
                mesh.material.color = color;
                mesh.material.side = Side::Double;
            }
        });
    }

    log::debug!(
        "{identity}: ribbon has {} chain(s), {} mesh(es)",
        ribbon.children().len(),
        ribbon.mesh_count()
    );
    Ok(ribbon)
}
