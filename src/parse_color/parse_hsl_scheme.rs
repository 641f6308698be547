// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Functional HSL(A) scheme: `hsl(270,50%,40%)`, `hsl(4.71238898rad,50%,40%)`,
//! `hsla(270deg,50%,40%,0.5)`. The extraction converts straight to raw RGB
//! channel values, so a scheme match always yields the same channel quadruple
//! shape as the other schemes.

use super::{RawChannels,
            scheme_atoms::{alpha_separator, channel_separator, opt_alpha, percentage,
                           signed_decimal}};
use crate::color_math::hsl_to_rgb;
use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::tag,
          character::complete::{char, multispace0},
          combinator::{eof, opt}};

/// Unit suffixes accepted after the hue number. Bare numbers are degrees.
fn hue_unit(input: &str) -> IResult<&str, &str> {
    alt((tag("deg"), tag("rad"), tag("grad"), tag("turn"))).parse(input)
}

/// Convert a raw hue number plus optional unit into degrees.
fn hue_to_degrees(value: f64, unit: Option<&str>) -> f64 {
    match unit {
        Some("rad") => value * 180.0 / std::f64::consts::PI,
        Some("grad") => value * 0.9,
        Some("turn") => value * 360.0,
        _ => value,
    }
}

/// Recognize a complete `hsl(..)` / `hsla(..)` string and extract raw RGB
/// channel values. Saturation and lightness above 100% are not rejected
/// here; the out-of-range channels they produce are caught by the caller's
/// range validation.
pub fn parse_hsl_scheme(input: &str) -> IResult<&str, RawChannels> {
    let (input, _) = (tag("hsl"), opt(char('a')), char('('), multispace0).parse(input)?;
    let (input, hue) = signed_decimal(input)?;
    let (input, unit) = opt(hue_unit).parse(input)?;
    let (input, ()) = channel_separator(input)?;
    let (input, saturation) = percentage(input)?;
    let (input, ()) = channel_separator(input)?;
    let (input, lightness) = percentage(input)?;
    let (input, ()) = alpha_separator(input)?;
    let (input, alpha) = opt_alpha(input)?;
    let (input, _) = (multispace0, char(')')).parse(input)?;
    let (input, _) = eof(input)?;

    let degrees = hue_to_degrees(hue, unit);
    let (red, green, blue) = hsl_to_rgb(degrees, saturation / 100.0, lightness / 100.0);
    Ok((
        input,
        RawChannels {
            red,
            green,
            blue,
            alpha,
        },
    ))
}
