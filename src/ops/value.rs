use std::fmt;

use num_bigint::BigInt;

use crate::radix::RadixInt;

/// Operand or result of tagged arithmetic.
///
/// `Int`, `Bool` and `Radix` are integer-like; `Text` and `Tuple` only exist so that mixing
/// them into arithmetic can be reported instead of silently coerced.
#[derive(Clone)]
pub enum Value {
    Int(BigInt),
    Bool(bool),
    Radix(RadixInt),
    Text(String),
    Tuple(Vec<Value>),
}

impl Value {
    pub fn int(value: impl Into<BigInt>) -> Self {
        Self::Int(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Radix(tagged) => tagged.radix().kind_name(),
            Value::Text(_) => "text",
            Value::Tuple(_) => "tuple",
        }
    }

    /// Numeric value of an integer-like operand.
    pub fn as_integer(&self) -> Option<BigInt> {
        match self {
            Value::Int(value) => Some(value.clone()),
            Value::Bool(value) => Some(BigInt::from(u8::from(*value))),
            Value::Radix(tagged) => Some(tagged.value().clone()),
            Value::Text(_) | Value::Tuple(_) => None,
        }
    }

    pub fn as_radix(&self) -> Option<&RadixInt> {
        if let Value::Radix(tagged) = self {
            Some(tagged)
        } else {
            None
        }
    }

    pub fn into_radix(self) -> Option<RadixInt> {
        if let Value::Radix(tagged) = self {
            Some(tagged)
        } else {
            None
        }
    }

    /// Splits a two-element tuple, as produced by divmod.
    pub fn into_pair(self) -> Option<(Value, Value)> {
        match self {
            Value::Tuple(items) => {
                let [first, second]: [Value; 2] = items.try_into().ok()?;
                Some((first, second))
            }
            _ => None,
        }
    }
}

/// Integer-like values compare numerically, whatever their kind or radix.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            _ => match (self.as_integer(), other.as_integer()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Radix(tagged) => write!(f, "{tagged}"),
            Value::Text(text) => write!(f, "{text:?}"),
            Value::Tuple(items) => {
                let mut tuple = f.debug_tuple("");
                for item in items {
                    tuple.field(item);
                }
                tuple.finish()
            }
        }
    }
}

impl From<RadixInt> for Value {
    fn from(value: RadixInt) -> Self {
        Value::Radix(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(BigInt::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
