use super::text::{parse_bool, parse_timestamp};
use super::{Primitive, RawKind, RawValue};
use crate::error::{EnumforgeError, Result};
use tracing::trace;

/// Loosely scans a dynamically typed source into a typed target.
///
/// A `Null` source leaves the target untouched and succeeds.
pub fn scan<R: Primitive>(source: &RawValue, target: &mut R) -> Result<()> {
    if source.is_null() {
        trace!("scan: null source, leaving {} target unchanged", R::KIND);
        return Ok(());
    }
    *target = R::from_raw(coerce(source, R::KIND)?)?;
    Ok(())
}

/// Coerces a source value into the given kind using the scan rules.
pub fn coerce(source: &RawValue, target: RawKind) -> Result<RawValue> {
    trace!("coerce {} into {}", source.kind_name(), target);
    let unsupported = || EnumforgeError::unsupported_conversion(source.kind_name(), target);

    match target {
        RawKind::String => match source {
            RawValue::String(s) => Ok(RawValue::String(s.clone())),
            RawValue::Bytes(b) => Ok(RawValue::String(String::from_utf8_lossy(b).into_owned())),
            _ => Err(unsupported()),
        },
        RawKind::Bytes => match source {
            RawValue::Bytes(b) => Ok(RawValue::Bytes(b.clone())),
            RawValue::String(s) => Ok(RawValue::Bytes(s.as_bytes().to_vec())),
            _ => Err(unsupported()),
        },
        kind if kind.is_integer() => coerce_integer(source, kind),
        RawKind::F32 | RawKind::F64 => coerce_float(source, target),
        RawKind::Bool => match source {
            RawValue::Bool(b) => Ok(RawValue::Bool(*b)),
            RawValue::F32(f) => Ok(RawValue::Bool(*f != 0.0)),
            RawValue::F64(f) => Ok(RawValue::Bool(*f != 0.0)),
            RawValue::String(_) | RawValue::Bytes(_) => {
                let text = text_of(source);
                parse_bool(&text)
                    .map(RawValue::Bool)
                    .ok_or_else(|| EnumforgeError::parse(text, target, "invalid syntax"))
            }
            other => other
                .as_i128()
                .map(|v| RawValue::Bool(v != 0))
                .ok_or_else(unsupported),
        },
        RawKind::Timestamp => match source {
            RawValue::Timestamp(ts) => Ok(RawValue::Timestamp(*ts)),
            RawValue::String(_) | RawValue::Bytes(_) => {
                Ok(RawValue::Timestamp(parse_timestamp(&text_of(source))?))
            }
            _ => Err(unsupported()),
        },
        other => Err(EnumforgeError::UnsupportedTargetKind(other.to_string())),
    }
}

fn coerce_integer(source: &RawValue, target: RawKind) -> Result<RawValue> {
    let wide = match source {
        RawValue::Bool(b) => i128::from(*b),
        RawValue::F32(f) => truncate(f64::from(*f), target)?,
        RawValue::F64(f) => truncate(*f, target)?,
        RawValue::String(_) | RawValue::Bytes(_) => {
            let text = text_of(source);
            text.trim()
                .parse::<i128>()
                .map_err(|e| EnumforgeError::parse(text.as_str(), target, e))?
        }
        other => other.as_i128().ok_or_else(|| {
            EnumforgeError::unsupported_conversion(other.kind_name(), target)
        })?,
    };
    RawValue::from_i128(wide, target)
}

fn coerce_float(source: &RawValue, target: RawKind) -> Result<RawValue> {
    let wide = match source {
        RawValue::F32(f) => f64::from(*f),
        RawValue::F64(f) => *f,
        RawValue::String(_) | RawValue::Bytes(_) => {
            let text = text_of(source);
            text.trim()
                .parse::<f64>()
                .map_err(|e| EnumforgeError::parse(text.as_str(), target, e))?
        }
        other => match other.as_i128() {
            Some(v) => v as f64,
            None => {
                return Err(EnumforgeError::unsupported_conversion(
                    other.kind_name(),
                    target,
                ));
            }
        },
    };
    narrow_float(wide, target)
}

pub(crate) fn narrow_float(value: f64, target: RawKind) -> Result<RawValue> {
    if target == RawKind::F64 {
        return Ok(RawValue::F64(value));
    }
    if value.is_finite() && value.abs() > f64::from(f32::MAX) {
        return Err(EnumforgeError::overflow(value, target));
    }
    Ok(RawValue::F32(value as f32))
}

fn truncate(value: f64, target: RawKind) -> Result<i128> {
    let truncated = value.trunc();
    let in_range = target
        .integer_range()
        .is_some_and(|(min, max)| truncated >= min as f64 && truncated <= max as f64);
    if !value.is_finite() || !in_range {
        return Err(EnumforgeError::overflow(value, target));
    }
    Ok(truncated as i128)
}

fn text_of(source: &RawValue) -> String {
    match source {
        RawValue::String(s) => s.clone(),
        RawValue::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        other => other.to_string(),
    }
}
