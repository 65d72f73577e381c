//! Harmony scheme derivation.
//!
//! Each scheme turns a base color into a fixed, ordered set of four related
//! colors by rotating the hue and/or nudging saturation or value. Consumers
//! index the result by position, so the order is part of the contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{wrap_hue, HsvColor};

/// Harmony scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HarmonyMode {
    /// Base color only, no derived handles.
    #[default]
    None,
    Complementary,
    Analogous,
    SplitComplementary,
    Triadic,
    Tetradic,
    Monochromatic,
    Shades,
}

impl HarmonyMode {
    /// All available harmony modes.
    pub const ALL: [HarmonyMode; 8] = [
        Self::None,
        Self::Complementary,
        Self::Analogous,
        Self::SplitComplementary,
        Self::Triadic,
        Self::Tetradic,
        Self::Monochromatic,
        Self::Shades,
    ];

    /// Number of colors this mode derives.
    pub fn color_count(self) -> usize {
        match self {
            Self::None => 0,
            _ => 4,
        }
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "None",
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::SplitComplementary => "Split-Complementary",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
            Self::Monochromatic => "Monochromatic",
            Self::Shades => "Shades",
        };
        f.write_str(label)
    }
}

/// Derive the harmony colors for `base` under `mode`.
///
/// Returns an empty list for [`HarmonyMode::None`] and exactly four colors
/// for every other mode. Pure function: same inputs, same output.
pub fn harmony_colors(base: HsvColor, mode: HarmonyMode) -> Vec<HsvColor> {
    match mode {
        HarmonyMode::None => Vec::new(),
        HarmonyMode::Complementary => complementary(base),
        HarmonyMode::Analogous => analogous(base),
        HarmonyMode::SplitComplementary => split_complementary(base),
        HarmonyMode::Triadic => triadic(base),
        HarmonyMode::Tetradic => tetradic(base),
        HarmonyMode::Monochromatic => monochromatic(base),
        HarmonyMode::Shades => shades(base),
    }
}

// Some saturation nudges clamp only at the upper bound; a low-saturation
// base can dip slightly below zero there. Display conversion guards the low
// end, so the asymmetry is kept as tuned.

fn complementary(base: HsvColor) -> Vec<HsvColor> {
    vec![
        HsvColor {
            saturation: (base.saturation + 0.1).min(1.0),
            value: (base.value + 0.3).clamp(0.0, 1.0),
            ..base
        },
        HsvColor {
            saturation: (base.saturation - 0.1).min(1.0),
            value: (base.value - 0.3).clamp(0.0, 1.0),
            ..base
        },
        // actual complementary
        HsvColor {
            hue: wrap_hue(base.hue + 180.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 180.0),
            saturation: (base.saturation + 0.2).min(1.0),
            value: (base.value - 0.3).clamp(0.0, 1.0),
            ..base
        },
    ]
}

fn split_complementary(base: HsvColor) -> Vec<HsvColor> {
    vec![
        HsvColor {
            hue: wrap_hue(base.hue + 150.0),
            saturation: (base.saturation - 0.05).clamp(0.0, 1.0),
            value: (base.value - 0.3).clamp(0.0, 1.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 210.0),
            saturation: (base.saturation - 0.05).clamp(0.0, 1.0),
            value: (base.value - 0.3).clamp(0.0, 1.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 150.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 210.0),
            ..base
        },
    ]
}

fn triadic(base: HsvColor) -> Vec<HsvColor> {
    vec![
        HsvColor {
            hue: wrap_hue(base.hue + 120.0),
            saturation: (base.saturation - 0.05).clamp(0.0, 1.0),
            value: (base.value - 0.3).clamp(0.0, 1.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 120.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 240.0),
            saturation: (base.saturation - 0.05).clamp(0.0, 1.0),
            value: (base.value - 0.3).clamp(0.0, 1.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 240.0),
            ..base
        },
    ]
}

fn tetradic(base: HsvColor) -> Vec<HsvColor> {
    vec![
        HsvColor {
            saturation: (base.saturation + 0.2).clamp(0.0, 1.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 90.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 180.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 270.0),
            ..base
        },
    ]
}

fn analogous(base: HsvColor) -> Vec<HsvColor> {
    vec![
        HsvColor {
            hue: wrap_hue(base.hue + 30.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 60.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 90.0),
            ..base
        },
        HsvColor {
            hue: wrap_hue(base.hue + 120.0),
            ..base
        },
    ]
}

// The monochromatic and shade families wrap cyclically instead of clamping,
// cycling through the tone spectrum rather than saturating at the edge.

fn monochromatic(base: HsvColor) -> Vec<HsvColor> {
    [0.2, 0.4, 0.6, 0.8]
        .iter()
        .map(|step| HsvColor {
            saturation: (base.saturation + step).rem_euclid(1.0),
            ..base
        })
        .collect()
}

fn shades(base: HsvColor) -> Vec<HsvColor> {
    vec![
        HsvColor {
            value: (base.value - 0.10).rem_euclid(1.0).max(0.2),
            ..base
        },
        HsvColor {
            value: (base.value + 0.55).rem_euclid(1.0).max(0.55),
            ..base
        },
        HsvColor {
            value: (base.value + 0.30).rem_euclid(1.0).max(0.3),
            ..base
        },
        HsvColor {
            value: (base.value + 0.05).rem_euclid(1.0).max(0.2),
            ..base
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn red() -> HsvColor {
        HsvColor::new(0.0, 1.0, 1.0, 1.0)
    }

    #[test]
    fn test_none_is_empty() {
        assert!(harmony_colors(red(), HarmonyMode::None).is_empty());
    }

    #[test]
    fn test_every_other_mode_yields_four() {
        for mode in HarmonyMode::ALL {
            let colors = harmony_colors(red(), mode);
            assert_eq!(colors.len(), mode.color_count(), "{mode}");
        }
    }

    #[test]
    fn test_deterministic() {
        let base = HsvColor::new(123.4, 0.56, 0.78, 0.9);
        for mode in HarmonyMode::ALL {
            assert_eq!(
                harmony_colors(base, mode),
                harmony_colors(base, mode),
                "{mode}"
            );
        }
    }

    #[test]
    fn test_complementary_of_pure_red() {
        let colors = harmony_colors(red(), HarmonyMode::Complementary);
        // Fourth handle: rotated 180, saturation clamped back to 1, value dimmed.
        let fourth = colors[3];
        assert!(approx_eq(fourth.hue, 180.0));
        assert!(approx_eq(fourth.saturation, 1.0));
        assert!(approx_eq(fourth.value, 0.7));
        assert!(approx_eq(fourth.alpha, 1.0));
        // Third handle is the plain complement.
        assert!(approx_eq(colors[2].hue, 180.0));
        assert!(approx_eq(colors[2].saturation, 1.0));
        assert!(approx_eq(colors[2].value, 1.0));
    }

    #[test]
    fn test_complementary_asymmetric_clamp_keeps_negative_saturation() {
        let base = HsvColor::new(0.0, 0.05, 1.0, 1.0);
        let colors = harmony_colors(base, HarmonyMode::Complementary);
        assert!(approx_eq(colors[1].saturation, -0.05));
    }

    #[test]
    fn test_analogous_hue_wraps() {
        let base = HsvColor::new(350.0, 0.5, 0.5, 1.0);
        let colors = harmony_colors(base, HarmonyMode::Analogous);
        let hues: Vec<f32> = colors.iter().map(|c| c.hue).collect();
        assert!(approx_eq(hues[0], 20.0));
        assert!(approx_eq(hues[1], 50.0));
        assert!(approx_eq(hues[2], 80.0));
        assert!(approx_eq(hues[3], 110.0));
        for c in &colors {
            assert!(c.hue >= 0.0 && c.hue < 360.0);
            assert!(approx_eq(c.saturation, 0.5));
            assert!(approx_eq(c.value, 0.5));
        }
    }

    #[test]
    fn test_triadic_order() {
        let base = HsvColor::new(10.0, 0.8, 0.9, 1.0);
        let colors = harmony_colors(base, HarmonyMode::Triadic);
        assert!(approx_eq(colors[0].hue, 130.0));
        assert!(approx_eq(colors[1].hue, 130.0));
        assert!(approx_eq(colors[2].hue, 250.0));
        assert!(approx_eq(colors[3].hue, 250.0));
        // First and third carry the shaded variant, second and fourth do not.
        assert!(approx_eq(colors[0].saturation, 0.75));
        assert!(approx_eq(colors[0].value, 0.6));
        assert!(approx_eq(colors[1].saturation, 0.8));
        assert!(approx_eq(colors[1].value, 0.9));
    }

    #[test]
    fn test_tetradic_offsets() {
        let base = HsvColor::new(40.0, 0.5, 0.5, 1.0);
        let colors = harmony_colors(base, HarmonyMode::Tetradic);
        assert!(approx_eq(colors[0].hue, 40.0));
        assert!(approx_eq(colors[0].saturation, 0.7));
        assert!(approx_eq(colors[1].hue, 130.0));
        assert!(approx_eq(colors[2].hue, 220.0));
        assert!(approx_eq(colors[3].hue, 310.0));
    }

    #[test]
    fn test_monochromatic_wraps_saturation() {
        let base = HsvColor::new(200.0, 0.9, 0.5, 1.0);
        let colors = harmony_colors(base, HarmonyMode::Monochromatic);
        // 0.9 + 0.6 wraps past 1.0 down to 0.5.
        assert!(approx_eq(colors[2].saturation, 0.5));
        // 0.9 + 0.2 likewise wraps to 0.1.
        assert!(approx_eq(colors[0].saturation, 0.1));
        for c in &colors {
            assert!(approx_eq(c.hue, 200.0));
            assert!(c.saturation >= 0.0 && c.saturation < 1.0);
        }
    }

    #[test]
    fn test_shades_wraps_then_floors() {
        // Wrapping dominates: 0.05 - 0.10 wraps to 0.95, above the 0.2 floor.
        let low = HsvColor::new(0.0, 1.0, 0.05, 1.0);
        let colors = harmony_colors(low, HarmonyMode::Shades);
        assert!(approx_eq(colors[0].value, 0.95));

        // Floor dominates: 0.25 - 0.10 = 0.15, raised to 0.2.
        let mid = HsvColor::new(0.0, 1.0, 0.25, 1.0);
        let colors = harmony_colors(mid, HarmonyMode::Shades);
        assert!(approx_eq(colors[0].value, 0.2));
    }

    #[test]
    fn test_shades_keeps_hue_fixed() {
        let base = HsvColor::new(77.0, 0.3, 0.6, 0.8);
        for c in harmony_colors(base, HarmonyMode::Shades) {
            assert!(approx_eq(c.hue, 77.0));
            assert!(approx_eq(c.saturation, 0.3));
            assert!(approx_eq(c.alpha, 0.8));
        }
    }

    #[test]
    fn test_all_hues_stay_normalized() {
        let base = HsvColor::new(359.9, 1.0, 1.0, 1.0);
        for mode in HarmonyMode::ALL {
            for c in harmony_colors(base, mode) {
                assert!(c.hue >= 0.0 && c.hue < 360.0, "{mode}: hue {}", c.hue);
            }
        }
    }
}
