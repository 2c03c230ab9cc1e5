//! Integer arithmetic shared by `combine` and the operator trait impls.
//!
//! Division truncates toward zero for `/` and rounds toward negative infinity for `//`, `%` and
//! divmod. Right shifts are arithmetic.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::{BinaryOp, UnaryOp};
use crate::error::{NumError, NumResult};

/// Applies `op` to two plain integers. `DivMod` yields only the floor quotient here; use
/// [`div_mod`] for the pair.
pub(crate) fn binary(op: BinaryOp, lhs: &BigInt, rhs: &BigInt) -> NumResult<BigInt> {
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Sub => Ok(lhs - rhs),
        BinaryOp::Mul => Ok(lhs * rhs),
        BinaryOp::TrueDiv => {
            ensure_nonzero(rhs)?;
            Ok(lhs / rhs)
        }
        BinaryOp::FloorDiv => {
            ensure_nonzero(rhs)?;
            Ok(lhs.div_floor(rhs))
        }
        BinaryOp::Mod => {
            ensure_nonzero(rhs)?;
            Ok(lhs.mod_floor(rhs))
        }
        BinaryOp::DivMod => div_mod(lhs, rhs).map(|(quotient, _)| quotient),
        BinaryOp::Shl => shift_left(lhs, rhs),
        BinaryOp::Shr => shift_right(lhs, rhs),
        BinaryOp::Pow => pow(lhs, rhs),
        BinaryOp::BitAnd => Ok(lhs & rhs),
        BinaryOp::BitOr => Ok(lhs | rhs),
        BinaryOp::BitXor => Ok(lhs ^ rhs),
    }
}

/// Floor quotient and remainder; the remainder takes the sign of the divisor.
pub(crate) fn div_mod(lhs: &BigInt, rhs: &BigInt) -> NumResult<(BigInt, BigInt)> {
    ensure_nonzero(rhs)?;
    Ok(lhs.div_mod_floor(rhs))
}

pub(crate) fn unary(op: UnaryOp, operand: &BigInt) -> BigInt {
    match op {
        UnaryOp::Neg => -operand,
        UnaryOp::Pos => operand.clone(),
        UnaryOp::Abs => operand.abs(),
        UnaryOp::Invert => !operand,
    }
}

fn ensure_nonzero(divisor: &BigInt) -> NumResult<()> {
    if divisor.is_zero() {
        Err(NumError::DivisionByZero)
    } else {
        Ok(())
    }
}

fn shift_count(rhs: &BigInt) -> NumResult<Option<usize>> {
    if rhs.is_negative() {
        Err(NumError::NegativeShift)
    } else {
        Ok(rhs.to_usize())
    }
}

fn shift_left(lhs: &BigInt, rhs: &BigInt) -> NumResult<BigInt> {
    match shift_count(rhs)? {
        Some(count) => Ok(lhs << count),
        None if lhs.is_zero() => Ok(BigInt::zero()),
        None => Err(NumError::Overflow { op: "<<" }),
    }
}

fn shift_right(lhs: &BigInt, rhs: &BigInt) -> NumResult<BigInt> {
    match shift_count(rhs)? {
        Some(count) => Ok(lhs >> count),
        // every bit shifted out
        None if lhs.is_negative() => Ok(-BigInt::one()),
        None => Ok(BigInt::zero()),
    }
}

/// Integer power. A negative exponent keeps the integer part of the fractional result.
fn pow(base: &BigInt, exponent: &BigInt) -> NumResult<BigInt> {
    if base.magnitude().is_one() {
        let negative = base.is_negative() && exponent.is_odd();
        return Ok(if negative { -BigInt::one() } else { BigInt::one() });
    }
    if exponent.is_negative() {
        return if base.is_zero() {
            Err(NumError::DivisionByZero)
        } else {
            Ok(BigInt::zero())
        };
    }
    if base.is_zero() {
        return Ok(if exponent.is_zero() {
            BigInt::one()
        } else {
            BigInt::zero()
        });
    }
    exponent
        .to_u32()
        .map(|exponent| base.pow(exponent))
        .ok_or(NumError::Overflow { op: "**" })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn apply(op: BinaryOp, lhs: i64, rhs: i64) -> NumResult<BigInt> {
        binary(op, &int(lhs), &int(rhs))
    }

    #[test]
    fn true_division_truncates_toward_zero() {
        assert_eq!(apply(BinaryOp::TrueDiv, 8, 3), Ok(int(2)));
        assert_eq!(apply(BinaryOp::TrueDiv, -7, 2), Ok(int(-3)));
        assert_eq!(apply(BinaryOp::TrueDiv, 7, -2), Ok(int(-3)));
    }

    #[test]
    fn floor_division_and_modulo_round_down() {
        assert_eq!(apply(BinaryOp::FloorDiv, -7, 2), Ok(int(-4)));
        assert_eq!(apply(BinaryOp::Mod, -7, 2), Ok(int(1)));
        assert_eq!(apply(BinaryOp::Mod, 7, -2), Ok(int(-1)));
        assert_eq!(div_mod(&int(-7), &int(2)), Ok((int(-4), int(1))));
        assert_eq!(apply(BinaryOp::DivMod, 9, 3), Ok(int(3)));
    }

    #[test]
    fn zero_divisors_fail() {
        for op in [
            BinaryOp::TrueDiv,
            BinaryOp::FloorDiv,
            BinaryOp::Mod,
            BinaryOp::DivMod,
        ] {
            assert_eq!(apply(op, 1, 0), Err(NumError::DivisionByZero), "{op:?}");
        }
    }

    #[test]
    fn shifts_check_their_count() {
        assert_eq!(apply(BinaryOp::Shl, 8, 1), Ok(int(16)));
        assert_eq!(apply(BinaryOp::Shr, 8, 1), Ok(int(4)));
        assert_eq!(apply(BinaryOp::Shr, -9, 1), Ok(int(-5)), "arithmetic shift");
        assert_eq!(apply(BinaryOp::Shl, 1, -1), Err(NumError::NegativeShift));
        assert_eq!(apply(BinaryOp::Shr, 1, -1), Err(NumError::NegativeShift));

        let huge = BigInt::from(1) << 80usize;
        assert_eq!(binary(BinaryOp::Shr, &int(-5), &huge), Ok(int(-1)));
        assert_eq!(binary(BinaryOp::Shr, &int(5), &huge), Ok(int(0)));
        assert_eq!(binary(BinaryOp::Shl, &int(0), &huge), Ok(int(0)));
        assert_eq!(
            binary(BinaryOp::Shl, &int(1), &huge),
            Err(NumError::Overflow { op: "<<" })
        );
    }

    #[test]
    fn powers_follow_integer_rules() {
        assert_eq!(apply(BinaryOp::Pow, 8, 2), Ok(int(64)));
        assert_eq!(apply(BinaryOp::Pow, 0, 0), Ok(int(1)));
        assert_eq!(apply(BinaryOp::Pow, 2, -1), Ok(int(0)));
        assert_eq!(apply(BinaryOp::Pow, -1, -3), Ok(int(-1)));
        assert_eq!(apply(BinaryOp::Pow, 1, -3), Ok(int(1)));
        assert_eq!(apply(BinaryOp::Pow, 0, -1), Err(NumError::DivisionByZero));

        let huge = BigInt::from(1) << 40usize;
        assert_eq!(binary(BinaryOp::Pow, &int(-1), &huge), Ok(int(1)));
        assert_eq!(
            binary(BinaryOp::Pow, &int(2), &huge),
            Err(NumError::Overflow { op: "**" })
        );
    }

    #[test]
    fn bitwise_ops_use_twos_complement() {
        assert_eq!(apply(BinaryOp::BitAnd, 9, 3), Ok(int(1)));
        assert_eq!(apply(BinaryOp::BitOr, 8, 3), Ok(int(11)));
        assert_eq!(apply(BinaryOp::BitXor, 9, 3), Ok(int(10)));
        assert_eq!(apply(BinaryOp::BitAnd, -1, 0xF0), Ok(int(0xF0)));
        assert_eq!(unary(UnaryOp::Invert, &int(9)), int(-10));
        assert_eq!(unary(UnaryOp::Abs, &int(-9)), int(9));
    }
}
