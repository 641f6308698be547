// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Hexadecimal scheme: exactly 8 hex digits in two-digit channel groups,
//! the last group being the alpha byte. Shorthand expansion happens before
//! this scheme runs, so only the 8-digit form is recognized here.

use super::RawChannels;
use nom::{IResult, Parser,
          bytes::complete::take_while_m_n,
          combinator::{eof, map_res}};

/// This function is used by [`take_while_m_n`] and as long as it returns
/// `true` items will be taken from the input.
fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, match_is_hex_digit), |seg: &str| {
        u8::from_str_radix(seg, 16)
    })
    .parse(input)
}

/// Recognize a complete 8-digit hex string and extract raw channel values.
pub fn parse_hex_scheme(input: &str) -> IResult<&str, RawChannels> {
    let (input, (red, green, blue, alpha)) =
        (parse_hex_seg, parse_hex_seg, parse_hex_seg, parse_hex_seg).parse(input)?;
    let (input, _) = eof(input)?;
    Ok((
        input,
        RawChannels {
            red: f64::from(red),
            green: f64::from(green),
            blue: f64::from(blue),
            alpha: f64::from(alpha) / 255.0,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_parse_opaque_color() {
        let (remainder, raw) = parse_hex_scheme("ffd700ff").unwrap();
        assert_eq2!(remainder, "");
        assert_eq2!(raw.red, 255.0);
        assert_eq2!(raw.green, 215.0);
        assert_eq2!(raw.blue, 0.0);
        assert_eq2!(raw.alpha, 1.0);
    }

    #[test]
    fn test_parse_alpha_byte() {
        let (_, raw) = parse_hex_scheme("00000080").unwrap();
        assert_eq2!(raw.alpha, 128.0 / 255.0);
    }

    #[test_case("ffd700"; "six digits is not a full match")]
    #[test_case("ffd700ff00"; "trailing digits")]
    #[test_case("ffd700fg"; "non hex digit")]
    #[test_case(""; "empty")]
    fn test_rejects(input: &str) {
        assert!(parse_hex_scheme(input).is_err());
    }
}
