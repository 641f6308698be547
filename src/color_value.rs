// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The parsed, validated color value and its identity operations.

/// Count of decimal digits used for percentage and HSL rendering when none
/// is configured.
pub const DEFAULT_PRECISION: usize = 2;

/// A parsed color: red, green, and blue channels in `[0, 255]`, alpha in
/// `[0, 1]`, all finite.
///
/// A `ColorValue` only comes into existence through parsing — see
/// [`ColorValue::parse`] and [`ColorValue::parse_with`]. Validation is a
/// precondition for construction, so every reachable value is in range.
/// Channels are immutable; the only mutable piece of state is the display
/// [`precision`](Self::precision), which affects rendering but never the
/// stored channels.
///
/// Equality is representation-based rather than bit-based: two values are
/// equal iff their [`to_rgba`](Self::to_rgba) renderings are identical
/// (integer-rounded channels, alpha at `2 × precision` decimals). This
/// deliberately tolerates rounding noise from intermediate computations such
/// as HSL round-trips.
#[derive(Debug)]
pub struct ColorValue {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
    precision: usize,
}

impl ColorValue {
    /// Channels must already be range-validated; the parser is the only
    /// caller.
    pub(crate) fn from_validated(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            precision: DEFAULT_PRECISION,
        }
    }

    /// The red channel in `[0, 255]`.
    #[must_use]
    pub fn red(&self) -> f64 { self.red }

    /// The green channel in `[0, 255]`.
    #[must_use]
    pub fn green(&self) -> f64 { self.green }

    /// The blue channel in `[0, 255]`.
    #[must_use]
    pub fn blue(&self) -> f64 { self.blue }

    /// The alpha channel in `[0, 1]`.
    #[must_use]
    pub fn alpha(&self) -> f64 { self.alpha }

    /// Decimal digits used when rendering percentage or HSL components.
    #[must_use]
    pub fn precision(&self) -> usize { self.precision }

    /// Set the display precision. Returns `self` for chaining. The stored
    /// channel values are unaffected.
    pub fn set_precision(&mut self, digits: usize) -> &mut Self {
        self.precision = digits;
        self
    }

    /// Always `true`: a value that failed validation is never constructed,
    /// so there is nothing invalid to observe. Kept for API parity with
    /// environments where construction and validation are separate steps.
    #[must_use]
    pub fn is_valid(&self) -> bool { true }

    /// Representation-based equality, per the type-level contract.
    #[must_use]
    pub fn equals(&self, other: &ColorValue) -> bool { self.to_rgba() == other.to_rgba() }

    /// [`equals`](Self::equals) against a color string. An unparsable string
    /// compares unequal instead of raising an error.
    #[must_use]
    pub fn equals_str(&self, other: &str) -> bool {
        ColorValue::parse(other).is_ok_and(|parsed| self.equals(&parsed))
    }
}

mod impl_clone {
    use super::{ColorValue, DEFAULT_PRECISION};

    impl Clone for ColorValue {
        /// Cloning round-trips through the percentage RGBA rendering, so a
        /// clone is equal by representation rather than bit-for-bit. Its
        /// precision starts back at the default.
        fn clone(&self) -> Self {
            match Self::parse(self.to_percentage_rgba().as_str()) {
                Ok(it) => it,
                // A self-rendered string always parses; plain copy is the
                // unreachable fallback.
                Err(_) => Self {
                    precision: DEFAULT_PRECISION,
                    ..*self
                },
            }
        }
    }
}

mod impl_partial_eq {
    use super::ColorValue;

    impl PartialEq for ColorValue {
        fn eq(&self, other: &Self) -> bool { self.equals(other) }
    }
}
