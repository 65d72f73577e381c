//! HSV color model and 8-bit RGBA display conversion.
//!
//! `HsvColor` is the picker's working representation: hue as an angle on the
//! wheel, saturation as the distance from its center. `Rgba` is the display
//! color exchanged with the host at the library boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a hex color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("invalid hex color length {0}, expected 3, 6 or 8 digits")]
    InvalidLength(usize),

    #[error("invalid hex digit {0:?} in color string")]
    InvalidDigit(char),
}

/// 8-bit RGBA display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color string.
    ///
    /// Accepts `RGB`, `RRGGBB` and `RRGGBBAA` forms, with or without a
    /// leading `#`. Shorthand digits are doubled (`#F80` == `#FF8800`).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        let mut channels = [0u8; 4];
        channels[3] = 255;

        match digits.len() {
            3 => {
                for (i, c) in digits.chars().enumerate() {
                    let v = hex_digit(c)?;
                    channels[i] = v << 4 | v;
                }
            }
            6 | 8 => {
                let mut chars = digits.chars();
                for channel in channels.iter_mut().take(digits.len() / 2) {
                    // chars() yields exactly len items, checked above
                    let hi = hex_digit(chars.next().unwrap_or('0'))?;
                    let lo = hex_digit(chars.next().unwrap_or('0'))?;
                    *channel = hi << 4 | lo;
                }
            }
            n => return Err(ColorParseError::InvalidLength(n)),
        }

        Ok(Self::new(channels[0], channels[1], channels[2], channels[3]))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn hex_digit(c: char) -> Result<u8, ColorParseError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(ColorParseError::InvalidDigit(c))
}

/// Color in hue/saturation/value form.
///
/// `hue` is in degrees, kept in `[0, 360)`. `saturation`, `value` and
/// `alpha` are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
    pub alpha: f32,
}

impl HsvColor {
    /// Create a color, wrapping hue into `[0, 360)` and clamping the other
    /// channels into `[0, 1]`.
    pub fn new(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
            value: value.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Convert an RGBA display color to HSV.
    ///
    /// Achromatic input (R=G=B) has no defined hue; it is pinned to 0 so
    /// downstream geometry never sees NaN. Alpha passes through unchanged.
    pub fn from_rgba(color: Rgba) -> Self {
        let r = color.r as f32 / 255.0;
        let g = color.g as f32 / 255.0;
        let b = color.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Self {
            hue: wrap_hue(hue),
            saturation,
            value: max,
            alpha: color.a as f32 / 255.0,
        }
    }

    /// Convert to an 8-bit RGBA display color.
    ///
    /// Channels are clamped before quantizing, so colors carrying a slightly
    /// out-of-range saturation from a harmony nudge still display safely.
    pub fn to_rgba(self) -> Rgba {
        let (r, g, b) = hsv_to_rgb(
            wrap_hue(self.hue),
            self.saturation.clamp(0.0, 1.0),
            self.value.clamp(0.0, 1.0),
        );
        Rgba::new(
            quantize(r),
            quantize(g),
            quantize(b),
            quantize(self.alpha.clamp(0.0, 1.0)),
        )
    }
}

/// Wrap a hue angle into `[0, 360)`.
pub(crate) fn wrap_hue(hue: f32) -> f32 {
    hue.rem_euclid(360.0)
}

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
///
/// # Returns
/// RGB tuple with values in range 0.0-1.0
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

fn quantize(channel: f32) -> u8 {
    (channel * 255.0).round() as u8
}
