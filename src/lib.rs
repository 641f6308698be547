// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_css_color
//!
//! Parse [browser color strings] — keywords, `#HEX`/`#HEXA`, `rgb()`/`rgba()`,
//! `hsl()`/`hsla()` — into a validated [`ColorValue`], and render that value
//! back into any of the supported textual forms with browser-consistent
//! output.
//!
//! This is a pure data-transformation library: no I/O, no async, no global
//! side effects beyond the process-wide keyword table (which you can replace
//! with an injected [`KeywordRegistry`]).
//!
//! [browser color strings]: https://developer.mozilla.org/en-US/docs/Web/CSS/color_value
//!
//! # Parse and render
//!
//! ```rust
//! use r3bl_css_color::ColorValue;
//!
//! let gold = ColorValue::parse("gold").unwrap();
//! assert_eq!(gold.to_hex().as_str(), "#FFD700");
//! assert_eq!(gold.to_hexa().as_str(), "#FFD700FF");
//! assert_eq!(gold.to_rgb().as_str(), "rgb(255,215,0)");
//! assert_eq!(gold.to_rgba().as_str(), "rgba(255,215,0,1)");
//! assert_eq!(gold.to_percentage_rgb().as_str(), "rgb(100%,84.31%,0%)");
//! assert_eq!(gold.to_hsl().as_str(), "hsl(50.59,100%,50%)");
//! assert_eq!(gold.to_keyword().as_str(), "gold");
//! ```
//!
//! Unparsable strings fail at the parse call site with a [`ColorError`];
//! there is no half-constructed color value to hold on to afterwards.
//!
//! ```rust
//! use r3bl_css_color::{ColorError, ColorValue};
//!
//! assert_eq!(ColorValue::parse("mortz"), Err(ColorError::UnparsableColor));
//! assert_eq!(ColorValue::parse("#F3"), Err(ColorError::MalformedHexLength));
//! ```
//!
//! # Display precision
//!
//! Percentage and HSL components render at a per-value precision (default
//! 2 decimal digits, alpha at twice that). [`ColorValue::set_precision`]
//! changes rendering only, never the stored channels.
//!
//! ```rust
//! use r3bl_css_color::ColorValue;
//!
//! let mut gold = ColorValue::parse("gold").unwrap();
//! gold.set_precision(6);
//! assert_eq!(gold.to_percentage_rgba().as_str(), "rgba(100%,84.313725%,0%,1)");
//! ```
//!
//! # Metrics and comparison
//!
//! [`ColorValue::brightness`], [`ColorValue::luminance`], and
//! [`ColorValue::difference`] derive accessibility-oriented numbers from a
//! parsed value. Equality is representation-based, which makes it tolerant
//! of rounding noise from HSL round-trips:
//!
//! ```rust
//! use r3bl_css_color::ColorValue;
//!
//! let a = ColorValue::parse("hsl(50.59,100%,50%)").unwrap();
//! let b = ColorValue::parse("gold").unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! # Keywords
//!
//! The keyword table ships with the full browser keyword set and can grow at
//! runtime via [`add_keyword`]. Lookups and additions go through the
//! process-wide table by default; pass an explicit [`KeywordRegistry`] to
//! [`ColorValue::parse_with`] for isolated setups.

// Attach.
pub mod color_error;
pub mod color_formats;
pub mod color_math;
mod color_metrics;
pub mod color_value;
pub mod inline_string;
pub mod keyword_table;
pub mod parse_color;

// Re-export.
pub use color_error::*;
pub use color_formats::*;
pub use color_math::*;
pub use color_value::*;
pub use inline_string::*;
pub use keyword_table::*;
pub use parse_color::*;

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
