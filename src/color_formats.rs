// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rendering a [`ColorValue`] into the supported textual forms.
//!
//! Percentage and HSL components are rendered at the value's
//! [`precision`](ColorValue::precision); alpha is rendered at twice that.
//! Fixed-decimal output drops trailing fractional zeros, so `gold` renders
//! as `rgba(100%,84.31%,0%,1)` rather than `rgba(100.00%,84.31%,0.00%,1.0000)`.

use crate::{ColorValue, InlineString,
            color_math::{format_fixed, rgb_to_hsl},
            keyword_table::{self, KeywordRegistry, TRANSPARENT_KEY}};
use std::fmt::Write as _;
use strum_macros::{Display, EnumIter, EnumString};

/// The textual forms a parsed color can be rendered into. Parses
/// case-insensitively from the form's name (`"rgb"`, `"PercentageRGBA"`,
/// `"HSLA"`, …) via [`core::str::FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ColorFormat {
    #[strum(serialize = "rgb")]
    Rgb,
    #[strum(serialize = "percentagergb")]
    PercentageRgb,
    #[strum(serialize = "rgba")]
    Rgba,
    #[strum(serialize = "percentagergba")]
    PercentageRgba,
    #[strum(serialize = "hsl")]
    Hsl,
    #[strum(serialize = "hsla")]
    Hsla,
    #[strum(serialize = "hex")]
    Hex,
    #[strum(serialize = "hexa")]
    Hexa,
    #[strum(serialize = "keyword")]
    Keyword,
}

/// Channels are stored in `[0, 255]`, so the rounded value always fits a
/// byte.
fn round_channel(value: f64) -> u8 { value.round() as u8 }

impl ColorValue {
    /// `rgb(r,g,b)` with integer-rounded channels.
    #[must_use]
    pub fn to_rgb(&self) -> InlineString {
        let mut acc = InlineString::new();
        _ = write!(
            acc,
            "rgb({r},{g},{b})",
            r = round_channel(self.red()),
            g = round_channel(self.green()),
            b = round_channel(self.blue()),
        );
        acc
    }

    /// `rgb(p%,p%,p%)` with channels as percentages of 255.
    #[must_use]
    pub fn to_percentage_rgb(&self) -> InlineString {
        let digits = self.precision();
        let mut acc = InlineString::new();
        _ = write!(
            acc,
            "rgb({r}%,{g}%,{b}%)",
            r = format_fixed(self.red() / 255.0 * 100.0, digits).as_str(),
            g = format_fixed(self.green() / 255.0 * 100.0, digits).as_str(),
            b = format_fixed(self.blue() / 255.0 * 100.0, digits).as_str(),
        );
        acc
    }

    /// `rgba(r,g,b,a)` with integer-rounded channels and alpha at
    /// `2 × precision` decimals.
    #[must_use]
    pub fn to_rgba(&self) -> InlineString {
        let mut acc = InlineString::new();
        _ = write!(
            acc,
            "rgba({r},{g},{b},{a})",
            r = round_channel(self.red()),
            g = round_channel(self.green()),
            b = round_channel(self.blue()),
            a = format_fixed(self.alpha(), 2 * self.precision()).as_str(),
        );
        acc
    }

    /// `rgba(p%,p%,p%,a)` with percentage channels and alpha at
    /// `2 × precision` decimals.
    #[must_use]
    pub fn to_percentage_rgba(&self) -> InlineString {
        let digits = self.precision();
        let mut acc = InlineString::new();
        _ = write!(
            acc,
            "rgba({r}%,{g}%,{b}%,{a})",
            r = format_fixed(self.red() / 255.0 * 100.0, digits).as_str(),
            g = format_fixed(self.green() / 255.0 * 100.0, digits).as_str(),
            b = format_fixed(self.blue() / 255.0 * 100.0, digits).as_str(),
            a = format_fixed(self.alpha(), 2 * digits).as_str(),
        );
        acc
    }

    /// `hsl(h,s%,l%)` derived via RGB → HSL conversion.
    #[must_use]
    pub fn to_hsl(&self) -> InlineString {
        let digits = self.precision();
        let hsl = rgb_to_hsl(self.red(), self.green(), self.blue());
        let mut acc = InlineString::new();
        _ = write!(
            acc,
            "hsl({h},{s}%,{l}%)",
            h = format_fixed(hsl.hue * 360.0, digits).as_str(),
            s = format_fixed(hsl.saturation * 100.0, digits).as_str(),
            l = format_fixed(hsl.lightness * 100.0, digits).as_str(),
        );
        acc
    }

    /// `hsla(h,s%,l%,a)` with alpha at `2 × precision` decimals.
    #[must_use]
    pub fn to_hsla(&self) -> InlineString {
        let digits = self.precision();
        let hsl = rgb_to_hsl(self.red(), self.green(), self.blue());
        let mut acc = InlineString::new();
        _ = write!(
            acc,
            "hsla({h},{s}%,{l}%,{a})",
            h = format_fixed(hsl.hue * 360.0, digits).as_str(),
            s = format_fixed(hsl.saturation * 100.0, digits).as_str(),
            l = format_fixed(hsl.lightness * 100.0, digits).as_str(),
            a = format_fixed(self.alpha(), 2 * digits).as_str(),
        );
        acc
    }

    /// `#RRGGBB` uppercase, integer-rounded channels.
    #[must_use]
    pub fn to_hex(&self) -> InlineString {
        let mut acc = InlineString::new();
        _ = write!(
            acc,
            "#{r:02X}{g:02X}{b:02X}",
            r = round_channel(self.red()),
            g = round_channel(self.green()),
            b = round_channel(self.blue()),
        );
        acc
    }

    /// `#RRGGBBAA` uppercase; the alpha byte is `round(alpha × 255)`.
    #[must_use]
    pub fn to_hexa(&self) -> InlineString {
        let mut acc = self.to_hex();
        _ = write!(acc, "{a:02X}", a = round_channel(self.alpha() * 255.0));
        acc
    }

    /// Reverse keyword lookup in the process-wide table. Colors with alpha
    /// exactly zero map to the fully-transparent entry; otherwise the
    /// integer-rounded channels plus full opacity are looked up. No match
    /// renders as the empty string.
    #[must_use]
    pub fn to_keyword(&self) -> InlineString {
        self.to_keyword_with(&keyword_table::global_keywords())
    }

    /// [`to_keyword`](Self::to_keyword) against an injected registry.
    #[must_use]
    pub fn to_keyword_with(&self, registry: &KeywordRegistry) -> InlineString {
        let key = if self.alpha() == 0.0 {
            InlineString::from(TRANSPARENT_KEY)
        } else {
            let mut acc = InlineString::new();
            _ = write!(
                acc,
                "{r:02x}{g:02x}{b:02x}ff",
                r = round_channel(self.red()),
                g = round_channel(self.green()),
                b = round_channel(self.blue()),
            );
            acc
        };
        registry
            .keyword_for(key.as_str())
            .map_or_else(InlineString::new, InlineString::from)
    }

    /// Render in the given form.
    #[must_use]
    pub fn render(&self, format: ColorFormat) -> InlineString {
        match format {
            ColorFormat::Rgb => self.to_rgb(),
            ColorFormat::PercentageRgb => self.to_percentage_rgb(),
            ColorFormat::Rgba => self.to_rgba(),
            ColorFormat::PercentageRgba => self.to_percentage_rgba(),
            ColorFormat::Hsl => self.to_hsl(),
            ColorFormat::Hsla => self.to_hsla(),
            ColorFormat::Hex => self.to_hex(),
            ColorFormat::Hexa => self.to_hexa(),
            ColorFormat::Keyword => self.to_keyword(),
        }
    }

    /// Render by format name, case-insensitively. An absent or unrecognized
    /// name falls back to hex.
    #[must_use]
    pub fn render_named(&self, format_name: Option<&str>) -> InlineString {
        format_name
            .and_then(|name| name.parse::<ColorFormat>().ok())
            .map_or_else(|| self.to_hex(), |format| self.render(format))
    }
}

mod impl_display {
    use super::ColorValue;
    use std::fmt;

    impl fmt::Display for ColorValue {
        /// The default rendering is hex, matching
        /// [`render_named`](ColorValue::render_named) with no name.
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.to_hex().as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test]
    fn test_gold_renders_every_form() {
        let gold = ColorValue::parse("gold").unwrap();
        assert_eq2!(gold.to_hex().as_str(), "#FFD700");
        assert_eq2!(gold.to_hexa().as_str(), "#FFD700FF");
        assert_eq2!(gold.to_rgb().as_str(), "rgb(255,215,0)");
        assert_eq2!(gold.to_rgba().as_str(), "rgba(255,215,0,1)");
        assert_eq2!(gold.to_percentage_rgb().as_str(), "rgb(100%,84.31%,0%)");
        assert_eq2!(gold.to_percentage_rgba().as_str(), "rgba(100%,84.31%,0%,1)");
        assert_eq2!(gold.to_hsl().as_str(), "hsl(50.59,100%,50%)");
        assert_eq2!(gold.to_hsla().as_str(), "hsla(50.59,100%,50%,1)");
        assert_eq2!(gold.to_keyword().as_str(), "gold");
    }

    #[test_case(2, "rgba(100%,84.31%,0%,1)")]
    #[test_case(3, "rgba(100%,84.314%,0%,1)")]
    #[test_case(6, "rgba(100%,84.313725%,0%,1)")]
    fn test_precision_controls_percentage_output(digits: usize, expected: &str) {
        let mut gold = ColorValue::parse("gold").unwrap();
        gold.set_precision(digits);
        assert_eq2!(gold.to_percentage_rgba().as_str(), expected);
    }

    #[test]
    fn test_alpha_renders_at_twice_precision() {
        let mut color = ColorValue::parse("rgba(0,0,0,0.123456789)").unwrap();
        assert_eq2!(color.to_rgba().as_str(), "rgba(0,0,0,0.1235)");
        color.set_precision(1);
        assert_eq2!(color.to_rgba().as_str(), "rgba(0,0,0,0.12)");
    }

    #[test]
    fn test_hex_pads_to_two_digits() {
        let color = ColorValue::parse("rgb(1,2,3)").unwrap();
        assert_eq2!(color.to_hex().as_str(), "#010203");
        assert_eq2!(color.to_hexa().as_str(), "#010203FF");
    }

    #[test]
    fn test_keyword_of_transparent_and_unknown_colors() {
        let transparent = ColorValue::parse("transparent").unwrap();
        assert_eq2!(transparent.to_keyword().as_str(), "transparent");

        // rgba(0,0,0,0) has alpha exactly zero, so it maps to the
        // transparent entry, not to black.
        let zero_alpha = ColorValue::parse("rgba(0,0,0,0)").unwrap();
        assert_eq2!(zero_alpha.to_keyword().as_str(), "transparent");

        let unknown = ColorValue::parse("#123456").unwrap();
        assert_eq2!(unknown.to_keyword().as_str(), "");
    }

    #[test]
    fn test_keyword_lookup_assumes_full_opacity() {
        // Any non-zero alpha keys on the RGB channels plus an ff alpha byte,
        // so translucent gold still reverse-resolves to gold.
        let translucent = ColorValue::parse("rgba(255,215,0,0.5)").unwrap();
        assert_eq2!(translucent.to_keyword().as_str(), "gold");
    }

    #[test]
    fn test_render_dispatches_every_format() {
        let gold = ColorValue::parse("gold").unwrap();
        for format in ColorFormat::iter() {
            let name = format.to_string();
            assert_eq2!(gold.render(format), gold.render_named(Some(name.as_str())));
        }
    }

    #[test_case(Some("RGB"), "rgb(255,215,0)")]
    #[test_case(Some("PercentageRGBA"), "rgba(100%,84.31%,0%,1)")]
    #[test_case(Some("hexa"), "#FFD700FF")]
    #[test_case(Some("Keyword"), "gold")]
    #[test_case(Some("bogus"), "#FFD700")]
    #[test_case(None, "#FFD700")]
    fn test_render_named(format_name: Option<&str>, expected: &str) {
        let gold = ColorValue::parse("gold").unwrap();
        assert_eq2!(gold.render_named(format_name).as_str(), expected);
    }

    #[test]
    fn test_display_is_hex() {
        let gold = ColorValue::parse("gold").unwrap();
        assert_eq2!(gold.to_string(), "#FFD700");
    }

    #[test]
    fn test_format_names_round_trip() {
        for format in ColorFormat::iter() {
            let name = format.to_string();
            assert_eq2!(name.parse::<ColorFormat>(), Ok(format));
        }
    }
}
