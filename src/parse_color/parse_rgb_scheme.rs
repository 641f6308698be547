// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Functional RGB(A) scheme: `rgb(255,0,0)`, `rgb(100%,0%,0%)`,
//! `rgba(255 0 0 / 0.5)`, and every separator mix in between.

use super::{RawChannels,
            scheme_atoms::{alpha_separator, channel_separator, opt_alpha, percentage}};
use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::tag,
          character::complete::{char, digit1, multispace0},
          combinator::{eof, map, map_res, opt}};

/// One channel: an integer count of 255ths, or a percentage of 255.
/// Fractional values are only part of the grammar in the percentage form.
fn rgb_channel(input: &str) -> IResult<&str, f64> {
    alt((
        map(percentage, |pct| pct * 255.0 / 100.0),
        map_res(digit1, str::parse::<f64>),
    ))
    .parse(input)
}

/// Recognize a complete `rgb(..)` / `rgba(..)` string and extract raw
/// channel values. Out-of-range channels are reported by the caller's range
/// validation, not here.
pub fn parse_rgb_scheme(input: &str) -> IResult<&str, RawChannels> {
    let (input, _) = (tag("rgb"), opt(char('a')), char('('), multispace0).parse(input)?;
    let (input, red) = rgb_channel(input)?;
    let (input, ()) = channel_separator(input)?;
    let (input, green) = rgb_channel(input)?;
    let (input, ()) = channel_separator(input)?;
    let (input, blue) = rgb_channel(input)?;
    let (input, ()) = alpha_separator(input)?;
    let (input, alpha) = opt_alpha(input)?;
    let (input, _) = (multispace0, char(')')).parse(input)?;
    let (input, _) = eof(input)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("rgb(255,0,0)", (255.0, 0.0, 0.0, 1.0))]
    #[test_case("rgba(255,0,0)", (255.0, 0.0, 0.0, 1.0); "rgba prefix with three channels")]
    #[test_case("rgb(255, 0, 0)", (255.0, 0.0, 0.0, 1.0); "spaces after commas")]
    #[test_case("rgb(255 0 0)", (255.0, 0.0, 0.0, 1.0); "space separated")]
    #[test_case("rgb(100%,0%,0%)", (255.0, 0.0, 0.0, 1.0); "percentages")]
    #[test_case("rgba(255,0,0,0.5)", (255.0, 0.0, 0.0, 0.5); "bare alpha")]
    #[test_case("rgba(255,0,0,50%)", (255.0, 0.0, 0.0, 0.5); "percentage alpha")]
    #[test_case("rgb(255 0 0 / 0.5)", (255.0, 0.0, 0.0, 0.5); "slash alpha")]
    #[test_case("rgba(42.424242%,73.4%,39.8%,20.38%)", (108.18181710000001, 187.17000000000002, 101.49, 0.2038); "fractional percentages")]
    fn test_accepts(input: &str, expected: (f64, f64, f64, f64)) {
        let (remainder, raw) = parse_rgb_scheme(input).unwrap();
        assert_eq2!(remainder, "");
        assert!((raw.red - expected.0).abs() < 1e-9);
        assert!((raw.green - expected.1).abs() < 1e-9);
        assert!((raw.blue - expected.2).abs() < 1e-9);
        assert!((raw.alpha - expected.3).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_channels_still_match() {
        // The grammar is permissive; range policy belongs to the caller.
        let (_, raw) = parse_rgb_scheme("rgb(300,0,0)").unwrap();
        assert_eq2!(raw.red, 300.0);
        let (_, raw) = parse_rgb_scheme("rgba(0,0,0,200%)").unwrap();
        assert_eq2!(raw.alpha, 2.0);
    }

    #[test_case("rgb(1.5,0,0)"; "fractional integer channel")]
    #[test_case("rgb(255,0)"; "two channels")]
    #[test_case("rgb(255,0,0"; "missing close paren")]
    #[test_case("rgb(255,0,0) "; "trailing junk")]
    #[test_case("rgb(-1,0,0)"; "negative channel")]
    #[test_case("hsl(0,0%,0%)"; "wrong prefix")]
    fn test_rejects(input: &str) {
        assert!(parse_rgb_scheme(input).is_err());
    }
}
