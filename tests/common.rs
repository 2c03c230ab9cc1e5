use humannum::{Radix, RadixInt, literal};
use num_bigint::BigInt;

/// Parses rendered text back into its numeric value through the literal parser.
#[allow(dead_code)]
pub fn reparse(rendered: &str) -> BigInt {
    literal::parse_str(rendered)
        .unwrap_or_else(|err| panic!("rendered text {rendered:?} should parse: {err}"))
        .value
}

/// Builds a tagged integer through the public constructor matching `radix`.
#[allow(dead_code)]
pub fn make(radix: Radix, value: i64, width: Option<u32>) -> RadixInt {
    let made = match radix {
        Radix::Binary => humannum::make_binary(value, width),
        Radix::Hexadecimal => humannum::make_hex(value, width),
    };
    made.expect("integer input always constructs")
}
