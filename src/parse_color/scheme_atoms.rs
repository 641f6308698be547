// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared [`nom`] building blocks for the grammar schemes: number shapes,
//! separators, and the optional alpha component.

use nom::{IResult, Parser,
          branch::alt,
          character::complete::{char, digit1, multispace0},
          combinator::{map, map_res, opt, recognize}};

/// Unsigned decimal number: `42` or `42.5`. A bare `.5` is not part of the
/// grammar.
pub fn unsigned_decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((digit1, opt((char('.'), digit1)))),
        str::parse::<f64>,
    )
    .parse(input)
}

/// Signed decimal number: `-42`, `+42.5`, `42`.
pub fn signed_decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            digit1,
            opt((char('.'), digit1)),
        )),
        str::parse::<f64>,
    )
    .parse(input)
}

/// Percentage such as `82.35%`. Returns the number in front of the `%`.
pub fn percentage(input: &str) -> IResult<&str, f64> {
    let (input, value) = unsigned_decimal(input)?;
    let (input, _) = char('%').parse(input)?;
    Ok((input, value))
}

/// Separator between two channels: an optional comma surrounded by optional
/// whitespace.
pub fn channel_separator(input: &str) -> IResult<&str, ()> {
    let (input, _) = (multispace0, opt(char(',')), multispace0).parse(input)?;
    Ok((input, ()))
}

/// Separator in front of the alpha component: an optional comma or slash
/// surrounded by optional whitespace.
pub fn alpha_separator(input: &str) -> IResult<&str, ()> {
    let (input, _) = (multispace0, opt(alt((char(','), char('/')))), multispace0).parse(input)?;
    Ok((input, ()))
}

/// Optional alpha component: a bare decimal in `[0, 1]` or a percentage of
/// 1. Missing alpha means fully opaque.
pub fn opt_alpha(input: &str) -> IResult<&str, f64> {
    map(
        opt(alt((map(percentage, |pct| pct / 100.0), unsigned_decimal))),
        |maybe_alpha| maybe_alpha.unwrap_or(1.0),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("42", 42.0, "")]
    #[test_case("42.5", 42.5, "")]
    #[test_case("42.5%", 42.5, "%")]
    #[test_case("007", 7.0, "")]
    fn test_unsigned_decimal(input: &str, expected: f64, rest: &str) {
        let (remainder, value) = unsigned_decimal(input).unwrap();
        assert_eq2!(value, expected);
        assert_eq2!(remainder, rest);
    }

    #[test_case(".5")]
    #[test_case("-1")]
    #[test_case("abc")]
    fn test_unsigned_decimal_rejects(input: &str) {
        assert!(unsigned_decimal(input).is_err());
    }

    #[test_case("-42", -42.0)]
    #[test_case("+42.5", 42.5)]
    #[test_case("270", 270.0)]
    #[test_case("-15.5334303", -15.5334303)]
    fn test_signed_decimal(input: &str, expected: f64) {
        let (remainder, value) = signed_decimal(input).unwrap();
        assert_eq2!(value, expected);
        assert_eq2!(remainder, "");
    }

    #[test]
    fn test_percentage_requires_sign() {
        assert_eq2!(percentage("82.35%").unwrap(), ("", 82.35));
        assert!(percentage("82.35").is_err());
    }

    #[test_case("", 1.0; "missing means opaque")]
    #[test_case("0.5", 0.5)]
    #[test_case("50%", 0.5)]
    #[test_case("200%", 2.0; "range policy belongs to the caller")]
    fn test_opt_alpha(input: &str, expected: f64) {
        let (_, value) = opt_alpha(input).unwrap();
        assert_eq2!(value, expected);
    }

    #[test_case(" , ")]
    #[test_case(",")]
    #[test_case(" ")]
    #[test_case("")]
    fn test_channel_separator(input: &str) {
        let (remainder, ()) = channel_separator(input).unwrap();
        assert_eq2!(remainder, "");
    }

    #[test_case(" / ")]
    #[test_case(",")]
    #[test_case("")]
    fn test_alpha_separator(input: &str) {
        let (remainder, ()) = alpha_separator(input).unwrap();
        assert_eq2!(remainder, "");
    }
}
