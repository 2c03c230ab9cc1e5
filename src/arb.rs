//! `quickcheck` generators for tagged integers.

use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};

use crate::radix::{Radix, RadixInt};

impl Arbitrary for Radix {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Radix::Binary
        } else {
            Radix::Hexadecimal
        }
    }
}

impl Arbitrary for RadixInt {
    fn arbitrary(g: &mut Gen) -> Self {
        // mostly native-sized values, sometimes wider than 128 bits
        let value = if u8::arbitrary(g) % 8 == 0 {
            let high = BigInt::from(i128::arbitrary(g)) << 128usize;
            high + BigInt::from(u128::arbitrary(g))
        } else {
            BigInt::from(i64::arbitrary(g))
        };
        let width = Option::<u8>::arbitrary(g).map(u32::from);
        RadixInt::new(value, Radix::arbitrary(g)).with_width(width)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let radix = self.radix();
        let width = self.width();
        match self.to_i64() {
            Some(value) => Box::new(
                value
                    .shrink()
                    .map(move |value| RadixInt::new(value, radix).with_width(width)),
            ),
            None => Box::new(std::iter::once(RadixInt::new(0, radix).with_width(width))),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn generated_values_render_with_their_prefix(value: RadixInt) -> bool {
            value.render().trim_start_matches('-').starts_with(value.radix().prefix())
        }
    }
}
