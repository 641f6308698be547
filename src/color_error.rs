// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single error kind raised by color parsing and keyword registration.

use miette::Diagnostic;
use thiserror::Error;

/// Result alias for every fallible operation in this crate.
pub type ColorResult<T> = core::result::Result<T, ColorError>;

/// Why a color string could not be turned into a
/// [`ColorValue`](crate::ColorValue), or a keyword could not be registered.
///
/// Every failure is surfaced synchronously at the parse or registration call
/// site; there is no partially-constructed color value to inspect afterwards.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Unable to parse the red value")]
    InvalidRed,

    #[error("Unable to parse the green value")]
    InvalidGreen,

    #[error("Unable to parse the blue value")]
    InvalidBlue,

    #[error("Unable to parse the alpha value")]
    InvalidAlpha,

    /// A `#`-prefixed string whose digit count is not 3, 4, 6, or 8.
    #[error("Unable to parse HEX color")]
    MalformedHexLength,

    /// `currentcolor` was used without a
    /// [`ResolveCurrentColor`](crate::ResolveCurrentColor) capability.
    #[error("'currentColor' cannot be used without a context")]
    CurrentColorWithoutContext,

    /// No grammar scheme recognized the normalized input.
    #[error("Unable to parse the given color string")]
    UnparsableColor,

    #[error("Keyword name must not be empty")]
    InvalidKeywordName,

    /// The color string handed to keyword registration did not parse. The
    /// underlying parse failure is carried as the source.
    #[error("Could not parse the color for the keyword")]
    UnresolvableKeywordColor(#[source] Box<ColorError>),
}
