// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Derived metrics on a parsed color: perceptual brightness, WCAG relative
//! luminance, and channel-wise difference.

use crate::ColorValue;

impl ColorValue {
    /// Perceptual brightness in `[0, 255]`, per the W3C accessibility
    /// formula `(r·299 + g·587 + b·114) / 1000`. No gamma correction.
    ///
    /// <https://www.w3.org/TR/AERT#color-contrast>
    #[must_use]
    pub fn brightness(&self) -> f64 {
        (self.red() * 299.0 + self.green() * 587.0 + self.blue() * 114.0) / 1000.0
    }

    /// Gamma-corrected relative luminance in `[0, 1]`, per WCAG 2.0.
    ///
    /// <https://www.w3.org/TR/2008/REC-WCAG20-20081211/#relativeluminancedef>
    #[must_use]
    pub fn luminance(&self) -> f64 {
        let linearize = |channel: f64| {
            let c = channel / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linearize(self.red())
            + 0.7152 * linearize(self.green())
            + 0.0722 * linearize(self.blue())
    }

    /// Sum over r, g, b of the channel-wise absolute difference. Alpha does
    /// not participate.
    #[must_use]
    pub fn difference(&self, other: &ColorValue) -> f64 {
        (self.red().max(other.red()) - self.red().min(other.red()))
            + (self.green().max(other.green()) - self.green().min(other.green()))
            + (self.blue().max(other.blue()) - self.blue().min(other.blue()))
    }

    /// [`difference`](Self::difference) against a color string. An
    /// unparsable string yields the sentinel `-1.0` instead of an error.
    #[must_use]
    pub fn difference_str(&self, other: &str) -> f64 {
        ColorValue::parse(other).map_or(-1.0, |parsed| self.difference(&parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_brightness_extremes() {
        let black = ColorValue::parse("#000").unwrap();
        let white = ColorValue::parse("#fff").unwrap();
        assert_eq2!(black.brightness(), 0.0);
        assert_eq2!(white.brightness(), 255.0);
    }

    #[test]
    fn test_brightness_weighs_green_heaviest() {
        let red = ColorValue::parse("red").unwrap();
        let green = ColorValue::parse("lime").unwrap();
        let blue = ColorValue::parse("blue").unwrap();
        assert!(green.brightness() > red.brightness());
        assert!(red.brightness() > blue.brightness());
    }

    #[test]
    fn test_luminance_extremes() {
        let black = ColorValue::parse("#000").unwrap();
        let white = ColorValue::parse("#fff").unwrap();
        assert_eq2!(black.luminance(), 0.0);
        assert!((white.luminance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_luminance_of_red() {
        let red = ColorValue::parse("red").unwrap();
        assert!((red.luminance() - 0.2126).abs() < 1e-12);
    }

    #[test]
    fn test_difference_with_itself_is_zero() {
        let teal = ColorValue::parse("teal").unwrap();
        assert_eq2!(teal.difference(&teal), 0.0);
        assert_eq2!(teal.difference_str("teal"), 0.0);
        assert_eq2!(teal.difference_str("rgb(0,128,128)"), 0.0);
    }

    #[test]
    fn test_difference_between_primaries() {
        let red = ColorValue::parse("red").unwrap();
        let blue = ColorValue::parse("blue").unwrap();
        assert_eq2!(red.difference(&blue), 510.0);
    }

    #[test]
    fn test_difference_against_non_color_is_sentinel() {
        let red = ColorValue::parse("red").unwrap();
        assert_eq2!(red.difference_str("mortz"), -1.0);
    }
}
