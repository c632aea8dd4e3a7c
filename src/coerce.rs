//! Typed coercion of raw request text.
//!
//! The same rules validate typed captures (`/shares/:id:ulong`) in the
//! router and convert bound field values in [`bind`](crate::bind).

use std::convert::TryFrom;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    UInt,
    Float,
    Bool,
    Str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Str(String),
}

#[derive(Debug, thiserror::Error)]
#[error("{raw:?} is not a valid {kind}")]
pub struct CoerceError {
    kind: ValueKind,
    raw: Box<str>,
}

impl CoerceError {
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl ValueKind {
    /// Maps a pattern type suffix to a kind.
    ///
    /// `long`, `int`, `i64` are signed; `ulong`, `uint`, `u64` unsigned;
    /// `double`, `float`, `f64` floating point; `bool`; `string`, `str` text.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let kind = match suffix {
            "long" | "int" | "i64" => Self::Int,
            "ulong" | "uint" | "u64" => Self::UInt,
            "double" | "float" | "f64" => Self::Float,
            "bool" => Self::Bool,
            "string" | "str" => Self::Str,
            _ => return None,
        };
        Some(kind)
    }

    pub fn coerce(self, raw: &str) -> Result<Value, CoerceError> {
        let value = match self {
            Self::Int => raw.parse().ok().map(Value::Int),
            Self::UInt => raw.parse().ok().map(Value::UInt),
            Self::Float => raw.parse().ok().map(Value::Float),
            Self::Bool => raw.parse().ok().map(Value::Bool),
            Self::Str => Some(Value::Str(raw.to_owned())),
        };
        value.ok_or_else(|| CoerceError {
            kind: self,
            raw: raw.into(),
        })
    }

    /// Checks `raw` without keeping the converted value.
    pub fn accepts(self, raw: &str) -> bool {
        match self {
            Self::Int => raw.parse::<i64>().is_ok(),
            Self::UInt => raw.parse::<u64>().is_ok(),
            Self::Float => raw.parse::<f64>().is_ok(),
            Self::Bool => raw.parse::<bool>().is_ok(),
            Self::Str => true,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "signed integer",
            Self::UInt => "unsigned integer",
            Self::Float => "float",
            Self::Bool => "boolean",
            Self::Str => "string",
        };
        f.write_str(name)
    }
}

/// Rust types a coerced [`Value`] can be stored into.
pub trait FromValue: Sized {
    const KIND: ValueKind;

    /// Returns `None` when the value does not fit, e.g. an `i64` outside `i32`.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! from_int_value {
    ($($ty:ty => $kind:tt),+) => {
        $(
            impl FromValue for $ty {
                const KIND: ValueKind = ValueKind::$kind;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Int(n) => <$ty>::try_from(n).ok(),
                        Value::UInt(n) => <$ty>::try_from(n).ok(),
                        _ => None,
                    }
                }
            }
        )+
    };
}

from_int_value! {
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u16 => UInt,
    u32 => UInt,
    u64 => UInt,
    usize => UInt
}

impl FromValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(x),
            _ => None,
        }
    }
}

impl FromValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FromValue for String {
    const KIND: ValueKind = ValueKind::Str;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn from_value(value: Value) -> Option<Self> {
        T::from_value(value).map(Some)
    }
}
