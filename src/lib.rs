//! Human-friendly integers.
//!
//! Values built with [`make_binary`] and [`make_hex`] keep their display radix through
//! arithmetic as long as they are the left operand:
//!
//! ```
//! use humannum::{make_binary, make_hex};
//!
//! let value = make_binary(42, None).unwrap();
//! assert_eq!(value.to_string(), "0b101010");
//! assert_eq!((value + 24).to_string(), "0b1000010");
//!
//! assert_eq!(make_hex(42, Some(16)).unwrap().to_string(), "0x002A");
//! assert_eq!(make_hex("16'd50", None).unwrap().to_string(), "0x0032");
//! ```

#[cfg(any(test, feature = "arb"))]
pub mod arb;
pub mod error;
pub mod literal;
pub mod ops;
pub mod radix;

pub use error::{NumError, NumResult};
pub use literal::{Literal, ParsedLiteral};
pub use ops::{BinaryOp, UnaryOp, Value, combine, unary};
pub use radix::{Radix, RadixInt};

/// Integer displayed in binary.
///
/// `value` is an integer or literal text (`42`, `"0x50"`, `"-0b1010000"`, `"16'd50"`). An
/// explicit `width` in bits replaces the width stated by a sized literal; smaller widths do not
/// truncate.
pub fn make_binary(value: impl Into<Literal>, width: Option<u32>) -> NumResult<RadixInt> {
    RadixInt::make(Radix::Binary, value, width)
}

/// Integer displayed in hexadecimal; see [`make_binary`] for the accepted inputs.
pub fn make_hex(value: impl Into<Literal>, width: Option<u32>) -> NumResult<RadixInt> {
    RadixInt::make(Radix::Hexadecimal, value, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_binary_examples() {
        let cases: [(Literal, Option<u32>, &str); 9] = [
            (32.into(), None, "0b100000"),
            ((-32).into(), None, "-0b100000"),
            ("0x50".into(), None, "0b1010000"),
            ("-0b1010000".into(), None, "-0b1010000"),
            ("0o50".into(), None, "0b101000"),
            (32.into(), Some(16), "0b0000000000100000"),
            (42.into(), Some(16), "0b0000000000101010"),
            ("16'd50".into(), None, "0b0000000000110010"),
            ("16'd50".into(), Some(4), "0b110010"),
        ];
        for (input, width, expected) in cases {
            let value = make_binary(input.clone(), width).expect("valid input");
            assert_eq!(value.render(), expected, "make_binary({input:?}, {width:?})");
        }
    }

    #[test]
    fn make_hex_examples() {
        let cases: [(Literal, Option<u32>, &str); 8] = [
            (32.into(), None, "0x20"),
            ((-32).into(), None, "-0x20"),
            ("0x50".into(), None, "0x50"),
            ("-0b1010000".into(), None, "-0x50"),
            ("0o50".into(), None, "0x28"),
            (32.into(), Some(16), "0x0020"),
            ("16'd50".into(), None, "0x0032"),
            ("16'd50".into(), Some(4), "0x32"),
        ];
        for (input, width, expected) in cases {
            let value = make_hex(input.clone(), width).expect("valid input");
            assert_eq!(value.render(), expected, "make_hex({input:?}, {width:?})");
        }
    }

    #[test]
    fn arithmetic_keeps_the_constructor_radix() {
        let value = make_binary(32, None).expect("binary") + 3;
        assert_eq!(value.render(), "0b100011");
        let value = make_hex(32, None).expect("hex") + 3;
        assert_eq!(value.render(), "0x23");
        let value = make_hex(42, None).expect("hex") + 24;
        assert_eq!(value.render(), "0x42");
    }

    #[test]
    fn invalid_text_fails_construction() {
        let err = make_binary("5Z", None).expect_err("5Z");
        assert_eq!(err.to_string(), "invalid literal with base 10: '5Z'");
        assert!(make_hex("5Z", Some(8)).is_err());
    }

    #[test]
    fn zero_width_override_disables_padding() {
        let value = make_hex("16'd50", Some(0)).expect("override");
        assert_eq!(value.width(), Some(0));
        assert_eq!(value.render(), "0x32");
    }
}
