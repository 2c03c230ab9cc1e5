//! Operator traits for [`RadixInt`].
//!
//! `/` truncates toward zero and `%` takes the sign of the divisor, matching [`BinaryOp::TrueDiv`]
//! and [`BinaryOp::Mod`]. Like primitive integers, the operators panic on a zero divisor or a
//! negative shift count; the `checked*` methods report those as errors instead.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use num_bigint::BigInt;

use super::{BinaryOp, UnaryOp, arith};
use crate::error::NumResult;
use crate::radix::RadixInt;

impl RadixInt {
    /// Applies `op` with `self` as the left operand. For `DivMod` this yields the quotient; use
    /// [`RadixInt::checked_div_mod`] for both halves.
    pub fn checked(&self, op: BinaryOp, rhs: impl Into<BigInt>) -> NumResult<RadixInt> {
        arith::binary(op, self.value(), &rhs.into()).map(|result| self.retag(result))
    }

    pub fn checked_div_mod(&self, rhs: impl Into<BigInt>) -> NumResult<(RadixInt, RadixInt)> {
        let (quotient, remainder) = arith::div_mod(self.value(), &rhs.into())?;
        Ok((self.retag(quotient), self.retag(remainder)))
    }

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    pub fn div_mod(&self, rhs: impl Into<BigInt>) -> (RadixInt, RadixInt) {
        self.checked_div_mod(rhs).unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    pub fn div_floor(&self, rhs: impl Into<BigInt>) -> RadixInt {
        tagged(self, BinaryOp::FloorDiv, rhs.into())
    }

    pub fn pow(&self, exponent: u32) -> RadixInt {
        self.retag(self.value().pow(exponent))
    }

    pub fn abs(&self) -> RadixInt {
        self.retag(arith::unary(UnaryOp::Abs, self.value()))
    }
}

fn tagged(lhs: &RadixInt, op: BinaryOp, rhs: BigInt) -> RadixInt {
    lhs.checked(op, rhs).unwrap_or_else(|err| panic!("{err}"))
}

fn plain(lhs: BigInt, op: BinaryOp, rhs: &RadixInt) -> BigInt {
    arith::binary(op, &lhs, rhs.value()).unwrap_or_else(|err| panic!("{err}"))
}

macro_rules! radix_binop {
    ($($trait:ident::$method:ident => $op:expr),* $(,)?) => {
        $(
            impl<R: Into<BigInt>> $trait<R> for RadixInt {
                type Output = RadixInt;

                fn $method(self, rhs: R) -> RadixInt {
                    tagged(&self, $op, rhs.into())
                }
            }

            impl<R: Into<BigInt>> $trait<R> for &RadixInt {
                type Output = RadixInt;

                fn $method(self, rhs: R) -> RadixInt {
                    tagged(self, $op, rhs.into())
                }
            }

            impl $trait<RadixInt> for BigInt {
                type Output = BigInt;

                fn $method(self, rhs: RadixInt) -> BigInt {
                    plain(self, $op, &rhs)
                }
            }

            impl $trait<RadixInt> for i64 {
                type Output = BigInt;

                fn $method(self, rhs: RadixInt) -> BigInt {
                    plain(BigInt::from(self), $op, &rhs)
                }
            }
        )*
    };
}

radix_binop! {
    Add::add => BinaryOp::Add,
    Sub::sub => BinaryOp::Sub,
    Mul::mul => BinaryOp::Mul,
    Div::div => BinaryOp::TrueDiv,
    Rem::rem => BinaryOp::Mod,
    Shl::shl => BinaryOp::Shl,
    Shr::shr => BinaryOp::Shr,
    BitAnd::bitand => BinaryOp::BitAnd,
    BitOr::bitor => BinaryOp::BitOr,
    BitXor::bitxor => BinaryOp::BitXor,
}

macro_rules! radix_unop {
    ($($trait:ident::$method:ident => $op:expr),* $(,)?) => {
        $(
            impl $trait for RadixInt {
                type Output = RadixInt;

                fn $method(self) -> RadixInt {
                    self.retag(arith::unary($op, self.value()))
                }
            }

            impl $trait for &RadixInt {
                type Output = RadixInt;

                fn $method(self) -> RadixInt {
                    self.retag(arith::unary($op, self.value()))
                }
            }
        )*
    };
}

radix_unop! {
    Neg::neg => UnaryOp::Neg,
    Not::not => UnaryOp::Invert,
}
