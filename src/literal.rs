//! Parsing of human-entered integer literals.
//!
//! Two grammars are recognised, tried in this order:
//!
//! * sized literals such as `16'd50`, `8'hFF` or `4'b1010`, which also carry a bit width;
//! * prefixed literals such as `0x50`, `-0b1010000`, `0o17` or plain decimal `42`.
//!
//! Radix markers and hex digits are case-insensitive. Only a sized literal yields a width.

use std::sync::OnceLock;

use num_bigint::BigInt;
use regex::{Captures, Regex};

use crate::error::{NumError, NumResult};
use crate::radix::RadixInt;

/// Numeric value plus the bit width stated by the literal, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLiteral {
    pub value: BigInt,
    pub width: Option<u32>,
}

/// Input accepted by the parser: an integer that is already numeric, or text to be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Int(BigInt),
    Text(String),
}

macro_rules! literal_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Literal::Int(BigInt::from(value))
                }
            }
        )*
    };
}

literal_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Literal {
    fn from(value: BigInt) -> Self {
        Literal::Int(value)
    }
}

impl From<&BigInt> for Literal {
    fn from(value: &BigInt) -> Self {
        Literal::Int(value.clone())
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Text(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Text(value)
    }
}

impl From<&String> for Literal {
    fn from(value: &String) -> Self {
        Literal::Text(value.clone())
    }
}

/// A tagged integer is already numeric; its radix and width are not carried over.
impl From<RadixInt> for Literal {
    fn from(value: RadixInt) -> Self {
        Literal::Int(value.into_value())
    }
}

impl From<&RadixInt> for Literal {
    fn from(value: &RadixInt) -> Self {
        Literal::Int(value.value().clone())
    }
}

/// Converts an integer or literal text into its value and inferred width.
pub fn parse(value: impl Into<Literal>) -> NumResult<ParsedLiteral> {
    match value.into() {
        Literal::Int(value) => Ok(ParsedLiteral { value, width: None }),
        Literal::Text(text) => parse_str(&text),
    }
}

pub fn parse_str(text: &str) -> NumResult<ParsedLiteral> {
    if let Some(caps) = sized_pattern().captures(text) {
        return parse_sized(text, &caps);
    }
    if let Some(caps) = prefixed_pattern().captures(text) {
        let negative = caps.get(1).is_some();
        let magnitude = parse_prefixed(text, &caps[2])?;
        return Ok(ParsedLiteral {
            value: apply_sign(magnitude, negative),
            width: None,
        });
    }
    tracing::trace!(text, "literal matches no known grammar");
    Err(NumError::invalid_literal(text, 10))
}

fn sized_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(-)?([0-9]+)'([dD]|[bB]|[oO]|[hH]|[xX])([0-9a-fA-F]+)$")
            .unwrap_or_else(|err| panic!("sized literal grammar is invalid: {err}"))
    })
}

fn prefixed_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(-)?(0[bB][01]+|0[oO][0-7]+|0[xX][0-9a-fA-F]+|[0-9]+)$")
            .unwrap_or_else(|err| panic!("prefixed literal grammar is invalid: {err}"))
    })
}

fn parse_sized(text: &str, caps: &Captures<'_>) -> NumResult<ParsedLiteral> {
    let negative = caps.get(1).is_some();
    let width = caps[2].parse::<u32>().map_err(|_| {
        tracing::trace!(text, "sized literal width exceeds 32 bits");
        NumError::invalid_literal(text, 10)
    })?;
    let base = base_for_marker(&caps[3]);
    let magnitude = parse_digits(text, &caps[4], base)?;
    Ok(ParsedLiteral {
        value: apply_sign(magnitude, negative),
        width: Some(width),
    })
}

fn base_for_marker(marker: &str) -> u32 {
    match marker {
        "b" | "B" => 2,
        "o" | "O" => 8,
        "h" | "H" | "x" | "X" => 16,
        _ => 10,
    }
}

fn parse_prefixed(text: &str, numeral: &str) -> NumResult<BigInt> {
    let (base, digits) = match numeral.get(..2) {
        Some("0x" | "0X") => (16, &numeral[2..]),
        Some("0b" | "0B") => (2, &numeral[2..]),
        Some("0o" | "0O") => (8, &numeral[2..]),
        _ => (10, numeral),
    };
    parse_digits(text, digits, base)
}

fn parse_digits(text: &str, digits: &str, base: u32) -> NumResult<BigInt> {
    BigInt::parse_bytes(digits.as_bytes(), base).ok_or_else(|| {
        tracing::trace!(text, base, "digits do not fit the literal base");
        NumError::invalid_literal(text, base)
    })
}

fn apply_sign(magnitude: BigInt, negative: bool) -> BigInt {
    if negative { -magnitude } else { magnitude }
}
