//! Textual form of tagged integers and its inverse.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use num_bigint::{BigInt, Sign};
use regex::Regex;

use super::{Radix, RadixInt};
use crate::error::{NumError, NumResult};

impl RadixInt {
    /// Renders the value as `[-]0b…` or `[-]0x…`, zero-padding the digits to the current width.
    pub fn render(&self) -> String {
        let mut digits = self.value.magnitude().to_str_radix(self.radix.base());
        if self.radix == Radix::Hexadecimal {
            digits.make_ascii_uppercase();
        }
        let pad = match self.width {
            Some(width) if width > 0 => self.radix.digits_for(width),
            _ => 0,
        };
        let sign = if self.value.sign() == Sign::Minus { "-" } else { "" };
        format!("{sign}{prefix}{digits:0>pad$}", prefix = self.radix.prefix())
    }
}

impl fmt::Display for RadixInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for RadixInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn rendered_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(-)?0([bBxX])([0-9a-fA-F]+)$")
            .unwrap_or_else(|err| panic!("rendered integer grammar is invalid: {err}"))
    })
}

/// Reads back the output of [`RadixInt::render`].
///
/// The prefix picks the radix. Leading zero padding is kept as the width (in bits), so padded
/// text renders identically after a round trip.
impl FromStr for RadixInt {
    type Err = NumError;

    fn from_str(text: &str) -> NumResult<Self> {
        let caps = rendered_pattern()
            .captures(text)
            .ok_or_else(|| NumError::invalid_literal(text, 10))?;
        let radix = match &caps[2] {
            "b" | "B" => Radix::Binary,
            _ => Radix::Hexadecimal,
        };
        let digits = &caps[3];
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix.base())
            .ok_or_else(|| NumError::invalid_literal(text, radix.base()))?;
        let value = if caps.get(1).is_some() {
            -magnitude
        } else {
            magnitude
        };
        let width = if digits.len() > 1 && digits.starts_with('0') {
            let bits_per_digit = if radix == Radix::Binary { 1 } else { 4 };
            u32::try_from(digits.len())
                .ok()
                .and_then(|count| count.checked_mul(bits_per_digit))
        } else {
            None
        };
        Ok(RadixInt::new(value, radix).with_width(width))
    }
}
