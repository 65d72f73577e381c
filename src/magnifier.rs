//! Magnifier handle placement.
//!
//! Computes where every handle sits on the wheel and how big it should be.
//! These are layout targets only; animating towards them is the host's job.

use crate::constants::{DIAMETER_HARMONY, DIAMETER_PRIMARY, DIAMETER_PRIMARY_DRAGGING};
use crate::color::HsvColor;
use crate::harmony::{harmony_colors, HarmonyMode};
use crate::wheel::{position_for_color, Size, WheelPoint};

/// One handle to draw on the wheel: where, which color, how big.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnifier {
    pub position: WheelPoint,
    pub color: HsvColor,
    /// Diameter in the same units as the bounding box.
    pub diameter: f32,
}

/// Layout targets for all handles of the current palette.
///
/// Harmony handles come first, the primary handle last so it draws on top.
/// The primary handle grows slightly while `dragging`.
pub fn magnifiers(
    base: HsvColor,
    mode: HarmonyMode,
    size: Size,
    dragging: bool,
) -> Vec<Magnifier> {
    let wheel_diameter = size.width.min(size.height);
    let primary_fraction = if dragging {
        DIAMETER_PRIMARY_DRAGGING
    } else {
        DIAMETER_PRIMARY
    };

    let mut handles: Vec<Magnifier> = harmony_colors(base, mode)
        .into_iter()
        .map(|color| Magnifier {
            position: position_for_color(color, size),
            color,
            diameter: wheel_diameter * DIAMETER_HARMONY,
        })
        .collect();

    handles.push(Magnifier {
        position: position_for_color(base, size),
        color: base,
        diameter: wheel_diameter * primary_fraction,
    });

    handles
}
