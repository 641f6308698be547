// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The parsing pipeline orchestrator, plus the `currentcolor` resolution
//! capability.

use super::{RawChannels,
            parse_hex_scheme::parse_hex_scheme,
            parse_hsl_scheme::parse_hsl_scheme,
            parse_rgb_scheme::parse_rgb_scheme};
use crate::{ColorError, ColorResult, ColorValue, KeywordRegistry, keyword_table};

/// Caller-supplied capability standing behind the `currentcolor` keyword.
/// Typically backed by whatever environment knows the "current" color (a
/// styling context, a theme, a document element); the parser treats it as an
/// opaque synchronous source of a color string.
///
/// Any `Fn() -> String` closure is a resolver:
///
/// ```rust
/// use r3bl_css_color::{ColorValue, KeywordRegistry};
///
/// let resolver = || String::from("gold");
/// let registry = KeywordRegistry::default();
/// let color = ColorValue::parse_with("currentcolor", &registry, Some(&resolver)).unwrap();
/// assert_eq!(color.to_hex().as_str(), "#FFD700");
/// ```
pub trait ResolveCurrentColor {
    /// Produce the color string that `currentcolor` stands for.
    fn current_color(&self) -> String;
}

impl<F: Fn() -> String> ResolveCurrentColor for F {
    fn current_color(&self) -> String { self() }
}

/// The keyword whose value comes from the environment, not from the keyword
/// table.
const CURRENT_COLOR: &str = "currentcolor";

/// Recognition order: HSL(A), then RGB(A), then HEX. The grammars are
/// mutually exclusive, so the order is a documented constant rather than a
/// tie-break.
type SchemeFn = fn(&str) -> nom::IResult<&str, RawChannels>;
const SCHEMES: &[(&str, SchemeFn)] = &[
    ("hsl", parse_hsl_scheme),
    ("rgb", parse_rgb_scheme),
    ("hex", parse_hex_scheme),
];

impl ColorValue {
    /// Parse a color string — keyword, HEX(A), RGB(A), or HSL(A) — against
    /// the process-wide keyword table.
    ///
    /// ```rust
    /// use r3bl_css_color::ColorValue;
    ///
    /// let gold = ColorValue::parse("gold").unwrap();
    /// assert_eq!(gold.to_rgb().as_str(), "rgb(255,215,0)");
    ///
    /// assert!(ColorValue::parse("mortz").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// See [`ColorError`] for the failure taxonomy. `currentcolor` always
    /// fails here; use [`parse_with`](Self::parse_with) to supply a
    /// resolver.
    pub fn parse(input: &str) -> ColorResult<ColorValue> {
        Self::parse_with(input, &keyword_table::global_keywords(), None)
    }

    /// Parse against an explicit keyword registry, optionally with a
    /// [`ResolveCurrentColor`] capability for the `currentcolor` keyword.
    ///
    /// # Errors
    ///
    /// See [`ColorError`]. Without a resolver, `currentcolor` fails with
    /// [`ColorError::CurrentColorWithoutContext`].
    pub fn parse_with(
        input: &str,
        registry: &KeywordRegistry,
        resolver: Option<&dyn ResolveCurrentColor>,
    ) -> ColorResult<ColorValue> {
        let normalized = normalize(input);

        if normalized == CURRENT_COLOR {
            let Some(resolver) = resolver else {
                return Err(ColorError::CurrentColorWithoutContext);
            };
            let resolved = resolver.current_color();
            // The resolved string re-enters the full pipeline. The resolver
            // is stripped so an environment answering `currentcolor`
            // terminates instead of recursing.
            return Self::parse_with(&resolved, registry, None);
        }

        let substituted = match registry.resolve(&normalized) {
            Some(canonical) => {
                tracing::debug!(
                    message = "keyword substitution",
                    keyword = %normalized,
                    canonical = %canonical
                );
                canonical.to_owned()
            }
            None => normalized,
        };

        let expanded = match substituted.strip_prefix('#') {
            Some(digits) => expand_hex_shorthand(digits)?,
            None => substituted,
        };

        let raw = run_schemes(&expanded).ok_or(ColorError::UnparsableColor)?;
        validate_channels(raw)
    }
}

/// Trim surrounding whitespace (including the BOM, which Unicode does not
/// class as whitespace) and lowercase.
fn normalize(input: &str) -> String {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

/// Expand the digits of a `#`-prefixed string to the canonical 8-digit form:
/// 3 and 4 digit shorthands double each digit, 3 and 6 digit forms default
/// the alpha byte to `ff`. Digit validity is not checked here; invalid
/// digits simply fail scheme matching downstream.
fn expand_hex_shorthand(digits: &str) -> ColorResult<String> {
    let mut expanded = String::with_capacity(8);
    match digits.chars().count() {
        3 => {
            for c in digits.chars() {
                expanded.push(c);
                expanded.push(c);
            }
            expanded.push_str("ff");
        }
        4 => {
            for c in digits.chars() {
                expanded.push(c);
                expanded.push(c);
            }
        }
        6 => {
            expanded.push_str(digits);
            expanded.push_str("ff");
        }
        8 => expanded.push_str(digits),
        _ => return Err(ColorError::MalformedHexLength),
    }
    Ok(expanded)
}

/// Try each scheme in the fixed recognition order; the first full match
/// wins.
fn run_schemes(input: &str) -> Option<RawChannels> {
    for (name, scheme) in SCHEMES {
        if let Ok((_, raw)) = scheme(input) {
            tracing::debug!(message = "scheme match", scheme = %name);
            return Some(raw);
        }
    }
    None
}

/// Channels are checked in fixed order r, g, b, a; the first failure names
/// the offending channel. The range checks also exclude NaN and infinities.
fn validate_channels(raw: RawChannels) -> ColorResult<ColorValue> {
    let RawChannels {
        red,
        green,
        blue,
        alpha,
    } = raw;
    if !(0.0..=255.0).contains(&red) {
        return Err(ColorError::InvalidRed);
    }
    if !(0.0..=255.0).contains(&green) {
        return Err(ColorError::InvalidGreen);
    }
    if !(0.0..=255.0).contains(&blue) {
        return Err(ColorError::InvalidBlue);
    }
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ColorError::InvalidAlpha);
    }
    Ok(ColorValue::from_validated(red, green, blue, alpha))
}

mod convert_from_str {
    use super::{ColorError, ColorValue};

    impl core::str::FromStr for ColorValue {
        type Err = ColorError;
        fn from_str(s: &str) -> Result<Self, Self::Err> { ColorValue::parse(s) }
    }

    impl TryFrom<&str> for ColorValue {
        type Error = ColorError;
        fn try_from(value: &str) -> Result<Self, Self::Error> { ColorValue::parse(value) }
    }
}
