//! Hand-tuned placements for structures whose automatic fit looks wrong.
//!
//! Each entry is a column-major 4×4 matrix combining a rotation (to stand
//! the molecule upright), a uniform scale and the 0.8 vertical offset. The
//! values are stored as `f32` exactly as the viewer has always used them.

use glam::Mat4;

use crate::identity::StructureIdentity;

#[rustfmt::skip]
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
const PRECOMPUTED: [(&str, [f32; 16]); 4] = [
    (
        "2VAA",
        [
            0.025214113295078278, 0.0, 0.0, 0.0,
            0.0, -5.5986578251406355e-18, 0.025214113295078278, 0.0,
            0.0, -0.025214113295078278, -5.5986578251406355e-18, 0.0,
            0.0, 0.0, 0.800000011920929, 1.0,
        ],
    ),
    (
        "3UTQ",
        [
            0.01705673336982727, 2.6780650619506564e-18, 0.01705673336982727, 0.0,
            -0.01705673336982727, 5.356130123901313e-18, 0.01705673336982727, 0.0,
            0.0, -0.02412186563014984, 8.03419518585197e-18, 0.0,
            0.0, 0.0, 0.800000011920929, 1.0,
        ],
    ),
    (
        "4X5W",
        [
            0.019939063116908073, 0.0, 0.0, 0.0,
            0.0, -0.01633312553167343, -0.011436576955020428, 0.0,
            0.0, 0.011436576955020428, -0.01633312553167343, 0.0,
            0.0, 0.0, 0.800000011920929, 1.0,
        ],
    ),
    (
        "1AQD",
        [
            0.016878578811883926, 0.0, -0.0069913361221551895, 0.0,
            0.0069913361221551895, 1.0141466747652247e-17, 0.016878578811883926, 0.0,
            0.0, -0.018269242718815804, 1.0141466747652247e-17, 0.0,
            0.0, 0.0, 0.800000011920929, 1.0,
        ],
    ),
];

/// The precomputed placement for `identity`, if one exists.
#[must_use]
pub fn precomputed_transform(identity: &StructureIdentity) -> Option<Mat4> {
    PRECOMPUTED
        .iter()
        .find(|(id, _)| *id == identity.as_str())
        .map(|(_, cols)| Mat4::from_cols_array(cols))
}

/// Identities that have a precomputed placement.
pub fn precomputed_identities() -> impl Iterator<Item = &'static str> {
    PRECOMPUTED.iter().map(|(id, _)| *id)
}
