//! The primitive codec.
//!
//! Converts single scalars of the closed [`RawKind`] set to and from text and
//! a fixed-width big-endian binary form, and coerces loosely typed values into
//! a typed target. Nothing in here knows about enums.

mod binary;
mod convert;
mod scan;
mod text;

pub use binary::{decode_binary, encode_binary, from_binary, to_binary};
pub use convert::{convert, convert_node};
pub use scan::{coerce, scan};
pub use text::{decode_text, encode_text, from_text, parse_bool, to_text};

use crate::error::{EnumforgeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;

/// The closed set of primitive kinds a raw value can have.
///
/// `Timestamp` only appears as a scan target and `Structured` is the explicit
/// fallback for anything outside the scalar set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    String,
    Bytes,
    Timestamp,
    Structured,
}

impl RawKind {
    /// Width of the fixed binary encoding, `None` for variable-width kinds.
    pub fn width(&self) -> Option<usize> {
        match self {
            RawKind::I8 | RawKind::U8 | RawKind::Bool => Some(1),
            RawKind::I16 | RawKind::U16 => Some(2),
            RawKind::I32 | RawKind::U32 | RawKind::F32 => Some(4),
            RawKind::I64 | RawKind::U64 | RawKind::F64 => Some(8),
            RawKind::String | RawKind::Bytes | RawKind::Timestamp | RawKind::Structured => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            RawKind::I8
                | RawKind::I16
                | RawKind::I32
                | RawKind::I64
                | RawKind::U8
                | RawKind::U16
                | RawKind::U32
                | RawKind::U64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, RawKind::F32 | RawKind::F64)
    }

    /// Integer, float and bool kinds encode to bare (unquoted) text.
    pub fn is_numeric_or_bool(&self) -> bool {
        self.is_integer() || self.is_float() || *self == RawKind::Bool
    }

    /// Inclusive value range of an integer kind.
    pub(crate) fn integer_range(&self) -> Option<(i128, i128)> {
        Some(match self {
            RawKind::I8 => (i8::MIN as i128, i8::MAX as i128),
            RawKind::I16 => (i16::MIN as i128, i16::MAX as i128),
            RawKind::I32 => (i32::MIN as i128, i32::MAX as i128),
            RawKind::I64 => (i64::MIN as i128, i64::MAX as i128),
            RawKind::U8 => (0, u8::MAX as i128),
            RawKind::U16 => (0, u16::MAX as i128),
            RawKind::U32 => (0, u32::MAX as i128),
            RawKind::U64 => (0, u64::MAX as i128),
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RawKind::I8 => "i8",
            RawKind::I16 => "i16",
            RawKind::I32 => "i32",
            RawKind::I64 => "i64",
            RawKind::U8 => "u8",
            RawKind::U16 => "u16",
            RawKind::U32 => "u32",
            RawKind::U64 => "u64",
            RawKind::F32 => "f32",
            RawKind::F64 => "f64",
            RawKind::Bool => "bool",
            RawKind::String => "string",
            RawKind::Bytes => "bytes",
            RawKind::Timestamp => "timestamp",
            RawKind::Structured => "structured",
        }
    }
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically typed primitive value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    String(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
    Structured(serde_json::Value),
}

impl RawValue {
    /// The kind of this value, `None` for [`RawValue::Null`].
    pub fn kind(&self) -> Option<RawKind> {
        Some(match self {
            RawValue::Null => return None,
            RawValue::I8(_) => RawKind::I8,
            RawValue::I16(_) => RawKind::I16,
            RawValue::I32(_) => RawKind::I32,
            RawValue::I64(_) => RawKind::I64,
            RawValue::U8(_) => RawKind::U8,
            RawValue::U16(_) => RawKind::U16,
            RawValue::U32(_) => RawKind::U32,
            RawValue::U64(_) => RawKind::U64,
            RawValue::F32(_) => RawKind::F32,
            RawValue::F64(_) => RawKind::F64,
            RawValue::Bool(_) => RawKind::Bool,
            RawValue::String(_) => RawKind::String,
            RawValue::Bytes(_) => RawKind::Bytes,
            RawValue::Timestamp(_) => RawKind::Timestamp,
            RawValue::Structured(_) => RawKind::Structured,
        })
    }

    /// Kind name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        self.kind().map_or("null", |kind| kind.as_str())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Widens any integer variant, `None` for every other variant.
    pub(crate) fn as_i128(&self) -> Option<i128> {
        Some(match self {
            RawValue::I8(v) => *v as i128,
            RawValue::I16(v) => *v as i128,
            RawValue::I32(v) => *v as i128,
            RawValue::I64(v) => *v as i128,
            RawValue::U8(v) => *v as i128,
            RawValue::U16(v) => *v as i128,
            RawValue::U32(v) => *v as i128,
            RawValue::U64(v) => *v as i128,
            _ => return None,
        })
    }

    /// Builds the integer variant for `kind` from a widened value.
    pub(crate) fn from_i128(value: i128, kind: RawKind) -> Result<RawValue> {
        let overflow = || EnumforgeError::overflow(value, kind);
        Ok(match kind {
            RawKind::I8 => RawValue::I8(i8::try_from(value).map_err(|_| overflow())?),
            RawKind::I16 => RawValue::I16(i16::try_from(value).map_err(|_| overflow())?),
            RawKind::I32 => RawValue::I32(i32::try_from(value).map_err(|_| overflow())?),
            RawKind::I64 => RawValue::I64(i64::try_from(value).map_err(|_| overflow())?),
            RawKind::U8 => RawValue::U8(u8::try_from(value).map_err(|_| overflow())?),
            RawKind::U16 => RawValue::U16(u16::try_from(value).map_err(|_| overflow())?),
            RawKind::U32 => RawValue::U32(u32::try_from(value).map_err(|_| overflow())?),
            RawKind::U64 => RawValue::U64(u64::try_from(value).map_err(|_| overflow())?),
            other => return Err(EnumforgeError::UnsupportedTargetKind(other.to_string())),
        })
    }
}

/// Renders the value the way it appears in error messages.
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match encode_text(self) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

/// A Rust scalar that can serve as the raw value of an enum.
pub trait Primitive:
    Clone + PartialEq + fmt::Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: RawKind;

    fn to_raw(&self) -> RawValue;

    fn from_raw(raw: RawValue) -> Result<Self>;
}

fn mismatch(raw: &RawValue, kind: RawKind) -> EnumforgeError {
    EnumforgeError::unsupported_conversion(raw.kind_name(), kind)
}

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const KIND: RawKind = RawKind::$variant;

                fn to_raw(&self) -> RawValue {
                    RawValue::$variant(self.clone())
                }

                fn from_raw(raw: RawValue) -> Result<Self> {
                    match raw {
                        RawValue::$variant(v) => Ok(v),
                        other => Err(mismatch(&other, Self::KIND)),
                    }
                }
            }

            impl From<$ty> for RawValue {
                fn from(value: $ty) -> Self {
                    RawValue::$variant(value)
                }
            }
        )*
    };
}

impl_primitive! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    String => String,
    Vec<u8> => Bytes,
    DateTime<Utc> => Timestamp,
    serde_json::Value => Structured,
}

// Platform-sized integers travel as their 64-bit counterparts.
impl Primitive for isize {
    const KIND: RawKind = RawKind::I64;

    fn to_raw(&self) -> RawValue {
        RawValue::I64(*self as i64)
    }

    fn from_raw(raw: RawValue) -> Result<Self> {
        match raw {
            RawValue::I64(v) => isize::try_from(v).map_err(|_| EnumforgeError::overflow(v, Self::KIND)),
            other => Err(mismatch(&other, Self::KIND)),
        }
    }
}

impl Primitive for usize {
    const KIND: RawKind = RawKind::U64;

    fn to_raw(&self) -> RawValue {
        RawValue::U64(*self as u64)
    }

    fn from_raw(raw: RawValue) -> Result<Self> {
        match raw {
            RawValue::U64(v) => usize::try_from(v).map_err(|_| EnumforgeError::overflow(v, Self::KIND)),
            other => Err(mismatch(&other, Self::KIND)),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<&[u8]> for RawValue {
    fn from(value: &[u8]) -> Self {
        RawValue::Bytes(value.to_vec())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}
