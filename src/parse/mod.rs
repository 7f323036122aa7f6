use crate::error::{ParseError, ParseResult};
use crate::scale::Tier;
use tracing::debug;

/// `0b` prefix plus 64 digits.
const MAX_BINARY_LEN: usize = 66;

/// Parses a value token into a 64-bit magnitude.
///
/// Accepted forms:
/// - `0b`/`0B` binary literals of up to 64 digits;
/// - decimal, `0x` hexadecimal and leading-zero octal literals, optionally
///   signed (`-1` wraps to `u64::MAX`);
/// - any of the above (except binary) followed by exactly one scale letter
///   from `kKmMgGtTpPeE`, which multiplies the literal by 1024^n.
///
/// ```rust
/// use xvalues::parse::parse_value;
/// assert_eq!(parse_value("4k").unwrap(), 4096);
/// assert_eq!(parse_value("0x10").unwrap(), 16);
/// assert_eq!(parse_value("0b101").unwrap(), 5);
/// assert!(parse_value("ff").is_err());
/// ```
pub fn parse_value(token: &str) -> ParseResult<u64> {
    let value = if is_binary(token) {
        parse_binary(token)?
    } else {
        parse_scaled(token)?
    };
    debug!(token, value, "parsed value");
    Ok(value)
}

fn is_binary(token: &str) -> bool {
    token.len() > 2 && (token.starts_with("0b") || token.starts_with("0B"))
}

fn parse_binary(token: &str) -> ParseResult<u64> {
    if token.len() > MAX_BINARY_LEN {
        return Err(ParseError::TooLong {
            token: token.to_string(),
        });
    }

    let mut value = 0u64;
    let mut mask = 1u64;
    // Rightmost digit is bit 0; the prefix is never read as a digit.
    for &b in token.as_bytes()[2..].iter().rev() {
        match b {
            b'1' => value |= mask,
            b'0' => {}
            _ => {
                return Err(ParseError::InvalidDigit {
                    token: token.to_string(),
                });
            }
        }
        mask <<= 1;
    }
    Ok(value)
}

fn parse_scaled(token: &str) -> ParseResult<u64> {
    let literal = scan_literal(token.as_bytes());
    let rest = &token[literal.end..];

    let multiplier = if rest.is_empty() {
        1
    } else {
        let mut chars = rest.chars();
        match (chars.next().and_then(Tier::from_suffix), chars.next()) {
            (Some(tier), None) => tier.divisor(),
            _ => {
                return Err(ParseError::InvalidSuffix {
                    token: token.to_string(),
                    offset: literal.end,
                });
            }
        }
    };

    literal
        .value
        .and_then(|v| v.checked_mul(multiplier))
        .ok_or_else(|| ParseError::Overflow {
            token: token.to_string(),
        })
}

/// Longest integer literal at the start of a token.
#[derive(Debug, PartialEq, Eq)]
struct Literal {
    /// `None` when the digits do not fit in 64 bits.
    value: Option<u64>,
    /// Byte offset of the first unconsumed character.
    end: usize,
}

/// Scans an optionally signed integer literal. A `-` negates modulo 2^64;
/// a sign with no digits after it is not a literal.
fn scan_literal(s: &[u8]) -> Literal {
    let (negative, sign_len) = match s.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let digits = scan_unsigned(&s[sign_len..]);
    if digits.end == 0 {
        return Literal {
            value: Some(0),
            end: 0,
        };
    }

    Literal {
        value: digits
            .value
            .map(|v| if negative { v.wrapping_neg() } else { v }),
        end: sign_len + digits.end,
    }
}

/// C-style base detection: `0x` selects hex, a leading `0` selects octal,
/// anything else is decimal. A `0x` not followed by a hex digit is just the
/// literal `0`.
fn scan_unsigned(s: &[u8]) -> Literal {
    let (radix, start) = match s {
        [b'0', b'x' | b'X', d, ..] if d.is_ascii_hexdigit() => (16, 2),
        [b'0', ..] => (8, 1),
        _ => (10, 0),
    };

    let mut value = Some(0u64);
    let mut end = start;
    while let Some(digit) = s.get(end).and_then(|&b| (b as char).to_digit(radix)) {
        value = value
            .and_then(|v| v.checked_mul(u64::from(radix)))
            .and_then(|v| v.checked_add(u64::from(digit)));
        end += 1;
    }

    Literal { value, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("1024", 1024)]
    #[case("0x1F", 31)]
    #[case("0Xff", 255)]
    #[case("017", 15)]
    #[case("4k", 4096)]
    #[case("4K", 4096)]
    #[case("1m", 1 << 20)]
    #[case("3G", 3 << 30)]
    #[case("2t", 2 << 40)]
    #[case("1P", 1 << 50)]
    #[case("1e", 1 << 60)]
    #[case("0x10k", 16 << 10)]
    #[case("0x1e", 30)]
    #[case("0k", 0)]
    #[case("18446744073709551615", u64::MAX)]
    #[case("+5", 5)]
    #[case("+0x10", 16)]
    #[case("-1", u64::MAX)]
    #[case("-5", u64::MAX - 4)]
    #[case("-0", 0)]
    fn test_parse_accepts(#[case] token: &str, #[case] expected: u64) {
        assert_eq!(parse_value(token), Ok(expected));
    }

    #[rstest]
    #[case("0b101", 5)]
    #[case("0B1111", 15)]
    #[case("0b0", 0)]
    #[case("0b00000001", 1)]
    fn test_parse_binary(#[case] token: &str, #[case] expected: u64) {
        assert_eq!(parse_value(token), Ok(expected));
    }

    #[test]
    fn test_parse_binary_full_width() {
        let token = format!("0b{}", "1".repeat(64));
        assert_eq!(parse_value(&token), Ok(u64::MAX));

        let token = format!("0b1{}", "0".repeat(63));
        assert_eq!(parse_value(&token), Ok(1 << 63));
    }

    #[test]
    fn test_parse_binary_too_long() {
        let token = format!("0b{}", "0".repeat(65));
        assert_eq!(
            parse_value(&token),
            Err(ParseError::TooLong { token: token.clone() })
        );
    }

    #[test]
    fn test_parse_binary_invalid_digit() {
        assert_eq!(
            parse_value("0b102"),
            Err(ParseError::InvalidDigit {
                token: "0b102".into()
            })
        );
    }

    #[rstest]
    #[case("ff", 0)]
    #[case("12x", 2)]
    #[case("4kb", 1)]
    #[case("1x2k", 1)]
    #[case("08", 1)]
    #[case("0x", 1)]
    #[case("0b", 1)]
    #[case(" 5", 0)]
    #[case("+ 5", 0)]
    #[case("+", 0)]
    #[case("-k", 0)]
    #[case("--", 0)]
    #[case("5z", 1)]
    fn test_parse_rejects_suffix(#[case] token: &str, #[case] offset: usize) {
        assert_eq!(
            parse_value(token),
            Err(ParseError::InvalidSuffix {
                token: token.to_string(),
                offset,
            })
        );
    }

    #[rstest]
    #[case("18446744073709551616")]
    #[case("0x10000000000000000")]
    #[case("16e")]
    #[case("17179869184g")]
    #[case("-1k")]
    fn test_parse_overflow(#[case] token: &str) {
        assert_eq!(
            parse_value(token),
            Err(ParseError::Overflow {
                token: token.to_string()
            })
        );
    }

    #[test]
    fn test_scan_literal_stops_at_first_foreign_char() {
        let cases: [(&[u8], Option<u64>, usize); 6] = [
            (b"123abc", Some(123), 3),
            (b"0x1g", Some(1), 3),
            (b"0xg", Some(0), 1),
            (b"k", Some(0), 0),
            (b"-7x", Some(7u64.wrapping_neg()), 2),
            (b"+x", Some(0), 0),
        ];
        for (input, value, end) in cases {
            assert_eq!(scan_literal(input), Literal { value, end });
        }
    }
}
