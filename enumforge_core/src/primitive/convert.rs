use super::scan::narrow_float;
use super::text::{encode_text, parse_bool, parse_timestamp};
use super::{Primitive, RawKind, RawValue};
use crate::error::{EnumforgeError, Result};
use serde_value::Value;

/// Converts an opaque decoded value into the given kind.
///
/// Used when a structured node does not decode directly into the target:
/// integers interconvert with overflow checks, floats widen, strings accept
/// any scalar through its text form, bytes accept octet sequences.
pub fn convert(source: &RawValue, target: RawKind) -> Result<RawValue> {
    let unsupported = || EnumforgeError::unsupported_conversion(source.kind_name(), target);

    if source.is_null() {
        return Err(EnumforgeError::NilValue);
    }

    match target {
        kind if kind.is_integer() => {
            let wide = source.as_i128().ok_or_else(unsupported)?;
            RawValue::from_i128(wide, kind)
        }
        RawKind::F32 | RawKind::F64 => match source {
            RawValue::F32(f) => narrow_float(f64::from(*f), target),
            RawValue::F64(f) => narrow_float(*f, target),
            other => {
                let wide = other.as_i128().ok_or_else(unsupported)?;
                narrow_float(wide as f64, target)
            }
        },
        RawKind::Bool => match source {
            RawValue::Bool(b) => Ok(RawValue::Bool(*b)),
            RawValue::String(s) => parse_bool(s)
                .map(RawValue::Bool)
                .ok_or_else(|| EnumforgeError::parse(s.as_str(), target, "invalid syntax")),
            _ => Err(unsupported()),
        },
        RawKind::String => match source {
            RawValue::String(s) => Ok(RawValue::String(s.clone())),
            other => Ok(RawValue::String(encode_text(other)?)),
        },
        RawKind::Bytes => match source {
            RawValue::Bytes(b) => Ok(RawValue::Bytes(b.clone())),
            RawValue::String(s) => Ok(RawValue::Bytes(s.as_bytes().to_vec())),
            RawValue::Structured(serde_json::Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|v| u8::try_from(v).ok())
                        .ok_or_else(unsupported)
                })
                .collect::<Result<Vec<u8>>>()
                .map(RawValue::Bytes),
            _ => Err(unsupported()),
        },
        RawKind::Timestamp => match source {
            RawValue::Timestamp(ts) => Ok(RawValue::Timestamp(*ts)),
            RawValue::String(s) => Ok(RawValue::Timestamp(parse_timestamp(s)?)),
            _ => Err(unsupported()),
        },
        RawKind::Structured => match source {
            RawValue::Structured(v) => Ok(RawValue::Structured(v.clone())),
            _ => Err(unsupported()),
        },
        other => Err(EnumforgeError::UnsupportedTargetKind(other.to_string())),
    }
}

/// Converts an opaque node value straight into a typed primitive.
pub fn convert_node<R: Primitive>(node: Value) -> Result<R> {
    let source = RawValue::try_from(node)?;
    R::from_raw(convert(&source, R::KIND)?)
}

impl TryFrom<Value> for RawValue {
    type Error = EnumforgeError;

    fn try_from(value: Value) -> Result<Self> {
        Ok(match value {
            Value::Unit | Value::Option(None) => RawValue::Null,
            Value::Option(Some(inner)) | Value::Newtype(inner) => RawValue::try_from(*inner)?,
            Value::Bool(v) => RawValue::Bool(v),
            Value::I8(v) => RawValue::I8(v),
            Value::I16(v) => RawValue::I16(v),
            Value::I32(v) => RawValue::I32(v),
            Value::I64(v) => RawValue::I64(v),
            Value::U8(v) => RawValue::U8(v),
            Value::U16(v) => RawValue::U16(v),
            Value::U32(v) => RawValue::U32(v),
            Value::U64(v) => RawValue::U64(v),
            Value::F32(v) => RawValue::F32(v),
            Value::F64(v) => RawValue::F64(v),
            Value::Char(v) => RawValue::String(v.to_string()),
            Value::String(v) => RawValue::String(v),
            Value::Bytes(v) => RawValue::Bytes(v),
            compound @ (Value::Seq(_) | Value::Map(_)) => {
                RawValue::Structured(serde_json::to_value(compound)?)
            }
        })
    }
}

impl TryFrom<RawValue> for Value {
    type Error = EnumforgeError;

    fn try_from(value: RawValue) -> Result<Self> {
        Ok(match value {
            RawValue::Null => return Err(EnumforgeError::NilValue),
            RawValue::I8(v) => Value::I8(v),
            RawValue::I16(v) => Value::I16(v),
            RawValue::I32(v) => Value::I32(v),
            RawValue::I64(v) => Value::I64(v),
            RawValue::U8(v) => Value::U8(v),
            RawValue::U16(v) => Value::U16(v),
            RawValue::U32(v) => Value::U32(v),
            RawValue::U64(v) => Value::U64(v),
            RawValue::F32(v) => Value::F32(v),
            RawValue::F64(v) => Value::F64(v),
            RawValue::Bool(v) => Value::Bool(v),
            RawValue::String(v) => Value::String(v),
            RawValue::Bytes(v) => Value::Bytes(v),
            timestamp @ RawValue::Timestamp(_) => Value::String(encode_text(&timestamp)?),
            RawValue::Structured(v) => serde_value::to_value(v).map_err(EnumforgeError::node)?,
        })
    }
}
