use crate::enums::{Enum, SerdeFormat};
use crate::error::{EnumforgeError, Result};
use crate::lookup::{Candidate, resolve};
use crate::primitive::{RawKind, from_binary, to_binary};

/// Encodes a member in binary form: name bytes, or the raw value's fixed-width form.
pub fn encode<E: Enum>(value: &E) -> Result<Vec<u8>> {
    match E::serde_format() {
        SerdeFormat::Name => Ok(value.name().as_bytes().to_vec()),
        SerdeFormat::Value => to_binary(&value.raw_value()),
    }
}

/// Decodes a member from binary form.
pub fn decode<E: Enum>(data: &[u8]) -> Result<E> {
    match E::serde_format() {
        SerdeFormat::Name => {
            let name = std::str::from_utf8(data)
                .map_err(|e| EnumforgeError::parse(String::from_utf8_lossy(data), RawKind::String, e))?;
            resolve(Candidate::Name(name.to_string()), name)
        }
        SerdeFormat::Value => {
            let raw = from_binary::<E::Raw>(data)?;
            resolve(Candidate::Value(raw), format!("{:?}", data))
        }
    }
}
