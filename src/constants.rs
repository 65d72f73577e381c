//! Centralized constants for harmony_wheel
//!
//! Handle sizing lives here so hosts and the magnifier layout agree on the
//! same fractions.

/// Harmony handle diameter as a fraction of the wheel diameter.
pub const DIAMETER_HARMONY: f32 = 0.10;

/// Primary handle diameter as a fraction of the wheel diameter.
pub const DIAMETER_PRIMARY: f32 = 0.15;

/// Primary handle diameter while the user is dragging it.
pub const DIAMETER_PRIMARY_DRAGGING: f32 = 0.18;
