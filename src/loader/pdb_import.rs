use std::collections::BTreeMap;
use std::path::Path;

use pdbtbx::{Format, ReadOptions, StrictnessLevel};

use crate::scene::{rgb_from_hex, Material, Mesh, SceneNode};

/// Fallback color for elements outside the table.
const UNKNOWN_ELEMENT: u32 = 0x00ff_1493;

/// CPK color for an element symbol (case-insensitive).
#[must_use]
pub(crate) fn cpk_color(symbol: &str) -> [f32; 3] {
    let hex = match symbol.to_ascii_uppercase().as_str() {
        "H" => 0x00ff_ffff,
        "C" => 0x0090_9090,
        "N" => 0x0030_50f8,
        "O" => 0x00ff_0d0d,
        "F" | "CL" => 0x001f_f01f,
        "P" => 0x00ff_8000,
        "S" => 0x00ff_ff30,
        "FE" => 0x00e0_6633,
        "MG" => 0x008a_ff00,
        "ZN" => 0x007d_80b0,
        "CA" => 0x003d_ff00,
        _ => UNKNOWN_ELEMENT,
    };
    rgb_from_hex(hex)
}

/// Parse a PDB file into a ball model: one point-mesh child per element,
/// in element-symbol order.
pub(crate) fn read_ball(path: &Path) -> Result<SceneNode, String> {
    let path_str = path.to_string_lossy();
    let (pdb, warnings) = ReadOptions::default()
        .set_format(Format::Pdb)
        .set_level(StrictnessLevel::Loose)
        .read(&*path_str)
        .map_err(|errors| {
            errors
                .first()
                .map_or_else(|| "unreadable PDB file".to_owned(), |e| format!("{e:?}"))
        })?;
    if !warnings.is_empty() {
        log::debug!("{}: {} PDB warning(s)", path.display(), warnings.len());
    }

    let mut by_element: BTreeMap<String, Vec<f32>> = BTreeMap::new();
    for atom in pdb.atoms() {
        let symbol = atom
            .element()
            .map_or_else(|| "X".to_owned(), |e| e.symbol().to_owned());
        by_element.entry(symbol).or_default().extend([
            atom.x() as f32,
            atom.y() as f32,
            atom.z() as f32,
        ]);
    }
    if by_element.is_empty() {
        return Err("PDB file contains no atoms".to_owned());
    }

    let mut ball = SceneNode::named("ball");
    for (symbol, positions) in by_element {
        let mesh = Mesh {
            positions,
            material: Material {
                color: cpk_color(&symbol),
                ..Material::default()
            },
        };
        let mut group = SceneNode::with_mesh(mesh);
        group.name = Some(symbol);
        ball.add_child(group);
    }
    Ok(ball)
}
