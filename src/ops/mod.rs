//! Tagged arithmetic.
//!
//! [`combine`] and [`unary`] decide what an operation returns from the kinds of its operands:
//!
//! * a tagged left (or sole) operand produces a new tagged value with the same radix and no width;
//! * a plain integer on the left produces a plain integer, even if the right operand is tagged;
//! * a non-integer operand is rejected.
//!
//! The operator traits on [`RadixInt`](crate::RadixInt) in `overload` follow the same rules.

mod arith;
mod overload;
mod value;

use std::fmt;

use num_bigint::BigInt;

use crate::error::{NumError, NumResult};

pub use value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// Division truncating toward zero.
    TrueDiv,
    /// Division rounding toward negative infinity.
    FloorDiv,
    /// Remainder with the sign of the divisor.
    Mod,
    DivMod,
    Shl,
    Shr,
    Pow,
    BitAnd,
    BitOr,
    BitXor,
}

impl BinaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::TrueDiv => "/",
            BinaryOp::FloorDiv => "//",
            BinaryOp::Mod => "%",
            BinaryOp::DivMod => "divmod",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Pow => "**",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Pos,
    Abs,
    Invert,
}

impl UnaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "unary -",
            UnaryOp::Pos => "unary +",
            UnaryOp::Abs => "abs",
            UnaryOp::Invert => "unary ~",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies a binary operation. Only the left operand's radix survives.
///
/// `DivMod` returns a [`Value::Tuple`] of quotient and remainder, both tagged when `left` is.
pub fn combine(op: BinaryOp, left: &Value, right: &Value) -> NumResult<Value> {
    let (lhs, rhs) = match (left.as_integer(), right.as_integer()) {
        (Some(lhs), Some(rhs)) => (lhs, rhs),
        _ => {
            tracing::trace!(
                %op,
                left = left.kind_name(),
                right = right.kind_name(),
                "unsupported operands"
            );
            return Err(NumError::UnsupportedOperand {
                op: op.symbol(),
                left: left.kind_name(),
                right: right.kind_name(),
            });
        }
    };
    let wrap = |result: BigInt| match left {
        Value::Radix(tagged) => Value::Radix(tagged.retag(result)),
        _ => Value::Int(result),
    };
    let outcome = match op {
        BinaryOp::DivMod => arith::div_mod(&lhs, &rhs)
            .map(|(quotient, remainder)| Value::Tuple(vec![wrap(quotient), wrap(remainder)])),
        _ => arith::binary(op, &lhs, &rhs).map(wrap),
    };
    outcome.inspect_err(|err| tracing::debug!(%op, %err, "arithmetic failed"))
}

/// Applies a unary operation, keeping the radix of a tagged operand.
pub fn unary(op: UnaryOp, operand: &Value) -> NumResult<Value> {
    match operand {
        Value::Radix(tagged) => Ok(Value::Radix(
            tagged.retag(arith::unary(op, tagged.value())),
        )),
        _ => match operand.as_integer() {
            Some(value) => Ok(Value::Int(arith::unary(op, &value))),
            None => {
                tracing::trace!(%op, operand = operand.kind_name(), "bad unary operand");
                Err(NumError::BadOperand {
                    op: op.symbol(),
                    operand: operand.kind_name(),
                })
            }
        },
    }
}
