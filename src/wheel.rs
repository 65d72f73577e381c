//! Disc geometry for the color wheel.
//!
//! The wheel maps hue to the angle around the center and saturation to the
//! distance from it, on a disc inscribed in a square bounding box. Both
//! directions live here: placing a color on the wheel and reading a color
//! back from a pointer position.

use crate::color::{wrap_hue, HsvColor, Rgba};

/// Width and height of the wheel's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square bounding box.
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }
}

/// A point in absolute coordinates within the wheel's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelPoint {
    pub x: f32,
    pub y: f32,
}

impl WheelPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Where a color sits on the wheel.
///
/// Hue is the angle, saturation the radius fraction; value and alpha do not
/// affect position.
pub fn position_for_color(color: HsvColor, size: Size) -> WheelPoint {
    let radians = color.hue.to_radians();
    let radius_fraction = color.saturation;

    // cos/sin land in [-1, 1]; shift and halve to get a [0, 1] box coordinate.
    let x = (radius_fraction * radians.cos() + 1.0) / 2.0;
    let y = (radius_fraction * radians.sin() + 1.0) / 2.0;

    WheelPoint::new(x * size.width, y * size.height)
}

/// The color under a pointer position, or `None` outside the disc.
///
/// `value` is the host's current brightness setting and passes straight
/// through; alpha is fixed at 1. Callers must treat `None` as "ignore this
/// sample", not as a color.
pub fn color_for_position(point: WheelPoint, size: Size, value: f32) -> Option<HsvColor> {
    let center_x = size.width / 2.0;
    let center_y = size.height / 2.0;
    let radius = center_x.min(center_y);
    if radius <= 0.0 {
        return None;
    }

    let dx = point.x - center_x;
    let dy = point.y - center_y;
    let distance = dx.hypot(dy);
    if distance > radius {
        return None;
    }

    Some(HsvColor {
        hue: wrap_hue(dy.atan2(dx).to_degrees()),
        saturation: distance / radius,
        value: value.clamp(0.0, 1.0),
        alpha: 1.0,
    })
}

/// The seven hue stops a host needs to paint the wheel's sweep gradient,
/// at full saturation and the given brightness. First and last stop are the
/// same color so the sweep closes cleanly.
pub fn sweep_gradient_stops(value: f32) -> [Rgba; 7] {
    let mut stops = [Rgba::BLACK; 7];
    for (i, stop) in stops.iter_mut().enumerate() {
        *stop = HsvColor::new(i as f32 * 60.0, 1.0, value, 1.0).to_rgba();
    }
    stops
}
