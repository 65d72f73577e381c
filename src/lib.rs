//! harmony_wheel - core math for a circular harmony color picker
//!
//! This crate provides the pure, stateless pieces behind a touch-driven
//! hue/saturation wheel with harmony handles:
//!
//! - [`HsvColor`] / [`Rgba`]: the HSV working color and its 8-bit RGBA
//!   display form, converted losslessly up to 8-bit quantization.
//! - [`harmony_colors`]: the seven harmony schemes deriving a fixed,
//!   ordered set of related colors from a base color.
//! - [`position_for_color`] / [`color_for_position`]: the polar mapping
//!   between a color and a point on the disc, used both to place handles
//!   and to interpret pointer input.
//! - [`WheelInteraction`] / [`magnifiers`]: the drag state machine and the
//!   handle layout built on top of the three cores.
//!
//! Rendering, animation and gesture recognition stay in the host toolkit;
//! every function here is a plain computation over its inputs.

mod color;
mod constants;
mod harmony;
mod interaction;
mod magnifier;
mod wheel;

pub use color::{ColorParseError, HsvColor, Rgba};
pub use constants::{DIAMETER_HARMONY, DIAMETER_PRIMARY, DIAMETER_PRIMARY_DRAGGING};
pub use harmony::{harmony_colors, HarmonyMode};
pub use interaction::{PointerEvent, WheelDragState, WheelInteraction};
pub use wheel::{color_for_position, position_for_color, sweep_gradient_stops, Size, WheelPoint};
pub use magnifier::{magnifiers, Magnifier};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::{ColorParseError, HsvColor, Rgba};
    pub use crate::harmony::{harmony_colors, HarmonyMode};
    pub use crate::interaction::{PointerEvent, WheelDragState, WheelInteraction};
    pub use crate::magnifier::{magnifiers, Magnifier};
    pub use crate::wheel::{
        color_for_position, position_for_color, sweep_gradient_stops, Size, WheelPoint,
    };
}
