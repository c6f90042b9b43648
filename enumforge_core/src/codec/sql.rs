use crate::enums::{Enum, SerdeFormat};
use crate::error::{EnumforgeError, Result};
use crate::lookup::{Candidate, resolve};
use crate::primitive::{Primitive, RawKind, RawValue, encode_text, scan as scan_primitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The value types a database driver accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DriverValue {
    Int64(i64),
    Float64(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    String(String),
}

impl From<DriverValue> for RawValue {
    fn from(value: DriverValue) -> Self {
        match value {
            DriverValue::Int64(v) => RawValue::I64(v),
            DriverValue::Float64(v) => RawValue::F64(v),
            DriverValue::Bool(v) => RawValue::Bool(v),
            DriverValue::Bytes(v) => RawValue::Bytes(v),
            DriverValue::String(v) => RawValue::String(v),
        }
    }
}

impl fmt::Display for DriverValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&RawValue::from(self.clone()), f)
    }
}

/// Produces the driver value for a member.
pub fn value<E: Enum>(member: &E) -> Result<DriverValue> {
    match E::serde_format() {
        SerdeFormat::Name => Ok(DriverValue::String(member.name().into_owned())),
        SerdeFormat::Value => driver_value(member.raw_value().to_raw()),
    }
}

/// Scans a driver-supplied value into `target`.
///
/// A `Null` source leaves `target` untouched.
pub fn scan<E: Enum>(target: &mut E, source: &RawValue) -> Result<()> {
    if source.is_null() {
        return Ok(());
    }

    *target = match E::serde_format() {
        SerdeFormat::Name => {
            let mut name = String::new();
            scan_primitive(source, &mut name)?;
            resolve(Candidate::Name(name), source)?
        }
        SerdeFormat::Value => {
            let mut raw = target.raw_value();
            scan_primitive(source, &mut raw)?;
            resolve(Candidate::Value(raw), source)?
        }
    };
    Ok(())
}

fn driver_value(raw: RawValue) -> Result<DriverValue> {
    Ok(match raw {
        RawValue::Null => return Err(EnumforgeError::NilValue),
        RawValue::U64(v) => DriverValue::Int64(
            i64::try_from(v).map_err(|_| EnumforgeError::overflow(v, RawKind::I64))?,
        ),
        RawValue::F32(v) => DriverValue::Float64(f64::from(v)),
        RawValue::F64(v) => DriverValue::Float64(v),
        RawValue::Bool(v) => DriverValue::Bool(v),
        RawValue::String(v) => DriverValue::String(v),
        RawValue::Bytes(v) => DriverValue::Bytes(v),
        RawValue::Timestamp(_) | RawValue::Structured(_) => DriverValue::String(encode_text(&raw)?),
        integer => match integer.as_i128().map(i64::try_from) {
            Some(Ok(v)) => DriverValue::Int64(v),
            _ => return Err(EnumforgeError::overflow(&integer, RawKind::I64)),
        },
    })
}
