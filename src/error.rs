use thiserror::Error;

pub type NumResult<T> = Result<T, NumError>;

/// Failures raised while parsing literals or combining tagged values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumError {
    /// Text that matches no literal grammar, or whose digits do not fit the base.
    #[error("invalid literal with base {base}: '{text}'")]
    InvalidLiteral { text: String, base: u32 },
    #[error("unsupported operand kinds for {op}: '{left}' and '{right}'")]
    UnsupportedOperand {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("bad operand kind for {op}: '{operand}'")]
    BadOperand {
        op: &'static str,
        operand: &'static str,
    },
    #[error("integer division or modulo by zero")]
    DivisionByZero,
    #[error("negative shift count")]
    NegativeShift,
    #[error("{op} result too large")]
    Overflow { op: &'static str },
}

impl NumError {
    pub(crate) fn invalid_literal(text: impl Into<String>, base: u32) -> Self {
        NumError::InvalidLiteral {
            text: text.into(),
            base,
        }
    }
}
