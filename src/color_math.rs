// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure numeric helpers: degree normalization, fixed-decimal rounding, and
//! RGB ↔ HSL conversion. No state, no dependencies on the rest of the crate
//! beyond [`InlineString`].

use crate::InlineString;
use std::fmt::Write as _;

/// Hue, saturation, and lightness, each normalized into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Map a degree value of arbitrary sign and magnitude into `[0, 360)`.
/// Non-finite input maps to 0.
#[must_use]
pub fn normalize_degrees(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.rem_euclid(360.0)
}

/// Round to `digits` decimal places, half away from zero.
#[must_use]
pub fn round_to_fixed(value: f64, digits: usize) -> f64 {
    // Beyond 17 digits f64 has nothing left to round.
    if digits > 17 {
        return value;
    }
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

/// Fixed-decimal rendering without trailing fractional zeros: `84.31`,
/// `100`, `1`.
#[must_use]
pub fn format_fixed(value: f64, digits: usize) -> InlineString {
    let rounded = round_to_fixed(value, digits);
    let mut acc = InlineString::new();
    _ = write!(acc, "{rounded:.digits$}");
    if acc.contains('.') {
        while acc.ends_with('0') {
            acc.pop();
        }
        if acc.ends_with('.') {
            acc.pop();
        }
    }
    acc
}

/// Convert channel values in `[0, 255]` into [`Hsl`] fractions. Hue lands in
/// `[0, 1)`; callers scale by 360 for degrees.
#[must_use]
pub fn rgb_to_hsl(red: f64, green: f64, blue: f64) -> Hsl {
    let r = red / 255.0;
    let g = green / 255.0;
    let b = blue / 255.0;
    let maximum = r.max(g).max(b);
    let minimum = r.min(g).min(b);
    let lightness = (maximum + minimum) / 2.0;

    if maximum == minimum {
        // Achromatic.
        return Hsl {
            hue: 0.0,
            saturation: 0.0,
            lightness,
        };
    }

    let delta = maximum - minimum;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - maximum - minimum)
    } else {
        delta / (maximum + minimum)
    };
    let hue_sixths = if maximum == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if maximum == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl {
        hue: hue_sixths / 6.0,
        saturation,
        lightness,
    }
}

/// Piecewise hue-to-channel function of the HSL → RGB conversion. `t` is the
/// hue fraction shifted by ±1/3 per channel; it is wrapped into `[0, 1)`
/// before evaluation.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert a hue in degrees (any sign or magnitude) plus saturation and
/// lightness fractions into channel values scaled to `[0, 255]`. Saturation
/// or lightness above 1 can push channels out of range; range policy belongs
/// to the caller.
#[must_use]
pub fn hsl_to_rgb(hue_degrees: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let t = normalize_degrees(hue_degrees) / 360.0;

    if saturation == 0.0 {
        // Achromatic.
        let level = lightness * 255.0;
        return (level, level, level);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    (
        hue_to_channel(p, q, t + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, t) * 255.0,
        hue_to_channel(p, q, t - 1.0 / 3.0) * 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    const EPSILON: f64 = 1e-9;

    #[test_case(0.0, 0.0)]
    #[test_case(360.0, 0.0)]
    #[test_case(-90.0, 270.0)]
    #[test_case(750.0, 30.0)]
    #[test_case(-889.9999944053, 190.0000055947)]
    fn test_normalize_degrees(input: f64, expected: f64) {
        assert!((normalize_degrees(input) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_degrees_non_finite() {
        assert_eq2!(normalize_degrees(f64::NAN), 0.0);
        assert_eq2!(normalize_degrees(f64::INFINITY), 0.0);
    }

    #[test_case(100.0, 2, "100")]
    #[test_case(84.31372549019608, 2, "84.31")]
    #[test_case(84.31372549019608, 3, "84.314")]
    #[test_case(84.31372549019608, 6, "84.313725")]
    #[test_case(1.0, 4, "1")]
    #[test_case(0.0, 2, "0")]
    #[test_case(0.5, 0, "1")]
    #[test_case(50.58823529411765, 2, "50.59")]
    fn test_format_fixed(value: f64, digits: usize, expected: &str) {
        assert_eq2!(format_fixed(value, digits).as_str(), expected);
    }

    #[test]
    fn test_rgb_to_hsl_gold() {
        let hsl = rgb_to_hsl(255.0, 215.0, 0.0);
        assert!((hsl.hue * 360.0 - 50.58823529411765).abs() < EPSILON);
        assert!((hsl.saturation - 1.0).abs() < EPSILON);
        assert!((hsl.lightness - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        let hsl = rgb_to_hsl(128.0, 128.0, 128.0);
        assert_eq2!(hsl.hue, 0.0);
        assert_eq2!(hsl.saturation, 0.0);
        assert!((hsl.lightness - 128.0 / 255.0).abs() < EPSILON);
    }

    #[test_case(0.0, 1.0, 0.5, (255.0, 0.0, 0.0); "pure red")]
    #[test_case(120.0, 1.0, 0.5, (0.0, 255.0, 0.0); "pure green")]
    #[test_case(240.0, 1.0, 0.5, (0.0, 0.0, 255.0); "pure blue")]
    fn test_hsl_to_rgb_primaries(
        hue: f64,
        saturation: f64,
        lightness: f64,
        expected: (f64, f64, f64),
    ) {
        let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
        assert!((r - expected.0).abs() < EPSILON);
        assert!((g - expected.1).abs() < EPSILON);
        assert!((b - expected.2).abs() < EPSILON);
    }

    #[test]
    fn test_hsl_to_rgb_rebeccapurple() {
        // hsl(270, 50%, 40%) is #663399.
        let (r, g, b) = hsl_to_rgb(270.0, 0.5, 0.4);
        assert_eq2!(r.round(), 102.0);
        assert_eq2!(g.round(), 51.0);
        assert_eq2!(b.round(), 153.0);
    }

    #[test]
    fn test_hsl_to_rgb_achromatic() {
        let (r, g, b) = hsl_to_rgb(123.0, 0.0, 0.25);
        assert_eq2!(r, g);
        assert_eq2!(g, b);
        assert!((r - 63.75).abs() < EPSILON);
    }

    #[test]
    fn test_hsl_round_trip() {
        let hsl = rgb_to_hsl(212.0, 230.0, 234.0);
        let (r, g, b) = hsl_to_rgb(hsl.hue * 360.0, hsl.saturation, hsl.lightness);
        assert_eq2!(r.round(), 212.0);
        assert_eq2!(g.round(), 230.0);
        assert_eq2!(b.round(), 234.0);
    }
}
