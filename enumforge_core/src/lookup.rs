//! Lookup resolution shared by every decode path.

use crate::enums::Enum;
use crate::error::{EnumforgeError, Result};
use crate::primitive::{Primitive, RawValue, coerce};
use tracing::{debug, trace};

/// A decoded lookup key.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate<R> {
    Name(String),
    Value(R),
}

/// Resolves a candidate to a member of `E`.
///
/// `source` is the original input as the caller received it; a miss reports
/// it rather than the coerced candidate.
pub fn resolve<E: Enum>(candidate: Candidate<E::Raw>, source: impl std::fmt::Display) -> Result<E> {
    let found = match &candidate {
        Candidate::Name(name) => E::find_by_name(name),
        Candidate::Value(raw) => E::find_by_value(raw),
    };

    found.ok_or_else(|| {
        let input = source.to_string();
        debug!(
            "{}: no member for {:?} (input {})",
            E::TYPE_NAME,
            candidate,
            input
        );
        EnumforgeError::unknown_constant(input)
    })
}

/// Finds a member from a dynamically typed input.
///
/// Text and bytes are looked up by name. Numbers of any width are converted
/// to the raw kind and looked up by value; a number that does not fit the
/// raw kind, or a fractional number for an integer kind, is a miss. Other
/// inputs are an error.
pub fn find_any<E: Enum>(input: &RawValue) -> Result<Option<E>> {
    match input {
        RawValue::String(name) => Ok(E::find_by_name(name)),
        RawValue::Bytes(bytes) => Ok(E::find_by_name(&String::from_utf8_lossy(bytes))),
        RawValue::Null => Err(EnumforgeError::NilValue),
        RawValue::Bool(_) | RawValue::Timestamp(_) | RawValue::Structured(_) => Err(
            EnumforgeError::unsupported_conversion(input.kind_name(), E::Raw::KIND),
        ),
        number => Ok(number_candidate::<E::Raw>(number).and_then(|raw| E::find_by_value(&raw))),
    }
}

fn number_candidate<R: Primitive>(number: &RawValue) -> Option<R> {
    let fractional = match number {
        RawValue::F32(f) => f.fract() != 0.0,
        RawValue::F64(f) => f.fract() != 0.0,
        _ => false,
    };
    if fractional && R::KIND.is_integer() {
        return None;
    }
    match coerce(number, R::KIND).and_then(R::from_raw) {
        Ok(raw) => Some(raw),
        Err(e) => {
            trace!("{} does not convert to {}: {}", number, R::KIND, e);
            None
        }
    }
}
