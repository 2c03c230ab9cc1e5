//! Integers that remember the radix and bit width they should be displayed with.
//!
//! A [`RadixInt`] compares, orders and hashes as the plain integer it wraps. The radix and width
//! only influence [`RadixInt::render`], and arithmetic keeps the radix of the left operand (see
//! [`crate::ops`]).

mod render;
#[cfg(feature = "serde")]
mod serde_impl;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::NumResult;
use crate::literal::{self, Literal, ParsedLiteral};

/// Numeral base used when displaying a tagged integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Hexadecimal,
}

impl Radix {
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Hexadecimal => 16,
        }
    }

    pub const fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Hexadecimal => "0x",
        }
    }

    /// Kind name reported in operand diagnostics.
    pub const fn kind_name(self) -> &'static str {
        match self {
            Radix::Binary => "Bin",
            Radix::Hexadecimal => "Hex",
        }
    }

    /// Number of digit positions needed to show `width` bits.
    pub const fn digits_for(self, width: u32) -> usize {
        match self {
            Radix::Binary => width as usize,
            Radix::Hexadecimal => width.div_ceil(4) as usize,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Binary => f.write_str("binary"),
            Radix::Hexadecimal => f.write_str("hexadecimal"),
        }
    }
}

/// Signed integer tagged with a display radix and an optional bit width.
///
/// The width only pads the rendered digits; it never truncates or masks the value.
#[derive(Clone)]
pub struct RadixInt {
    value: BigInt,
    radix: Radix,
    width: Option<u32>,
}

impl RadixInt {
    pub fn new(value: impl Into<BigInt>, radix: Radix) -> Self {
        Self {
            value: value.into(),
            radix,
            width: None,
        }
    }

    /// Parses `value` and tags it with `radix`.
    ///
    /// An explicit `width` (including `Some(0)`) replaces whatever width the literal stated;
    /// `None` keeps the inferred one.
    pub fn make(radix: Radix, value: impl Into<Literal>, width: Option<u32>) -> NumResult<Self> {
        let ParsedLiteral {
            value,
            width: inferred,
        } = literal::parse(value)?;
        if let (Some(explicit), Some(inferred)) = (width, inferred) {
            tracing::debug!(explicit, inferred, %radix, "explicit width overrides literal width");
        }
        Ok(Self {
            value,
            radix,
            width: width.or(inferred),
        })
    }

    pub fn with_width(mut self, width: Option<u32>) -> Self {
        self.width = width;
        self
    }

    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn into_value(self) -> BigInt {
        self.value
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Changes the display width; subsequent renders pick it up immediately.
    pub fn set_width(&mut self, width: Option<u32>) {
        self.width = width;
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.value.to_i64()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }

    /// Wraps `value` with this integer's radix. Width is not carried over.
    pub(crate) fn retag(&self, value: BigInt) -> Self {
        Self::new(value, self.radix)
    }
}

impl From<RadixInt> for BigInt {
    fn from(value: RadixInt) -> Self {
        value.value
    }
}

impl From<&RadixInt> for BigInt {
    fn from(value: &RadixInt) -> Self {
        value.value.clone()
    }
}

impl PartialEq for RadixInt {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for RadixInt {}

impl PartialOrd for RadixInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RadixInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for RadixInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

macro_rules! compare_with_plain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for RadixInt {
                fn eq(&self, other: &$ty) -> bool {
                    self.value == BigInt::from(other.clone())
                }
            }

            impl PartialEq<RadixInt> for $ty {
                fn eq(&self, other: &RadixInt) -> bool {
                    other == self
                }
            }

            impl PartialOrd<$ty> for RadixInt {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    Some(self.value.cmp(&BigInt::from(other.clone())))
                }
            }

            impl PartialOrd<RadixInt> for $ty {
                fn partial_cmp(&self, other: &RadixInt) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    };
}

compare_with_plain!(i32, i64, u32, u64, BigInt);
