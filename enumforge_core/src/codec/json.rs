use crate::enums::{Enum, SerdeFormat};
use crate::error::{EnumforgeError, Result};
use crate::lookup::{Candidate, resolve};
use crate::primitive::{Primitive, RawKind, decode_text, encode_text};

/// Encodes a member as JSON.
///
/// Name mode writes the canonical name as a JSON string. Value mode writes
/// numeric and bool raws bare, byte sequences as a string of their text
/// form, and everything else as JSON text.
pub fn encode<E: Enum>(value: &E) -> Result<Vec<u8>> {
    match E::serde_format() {
        SerdeFormat::Name => Ok(serde_json::to_vec(&*value.name())?),
        SerdeFormat::Value => {
            let raw = value.raw_value();
            match E::Raw::KIND {
                kind if kind.is_numeric_or_bool() => Ok(encode_text(&raw.to_raw())?.into_bytes()),
                RawKind::Bytes => Ok(serde_json::to_vec(&encode_text(&raw.to_raw())?)?),
                _ => Ok(serde_json::to_vec(&raw)?),
            }
        }
    }
}

/// Decodes a member from JSON.
pub fn decode<E: Enum>(data: &[u8]) -> Result<E> {
    let source = String::from_utf8_lossy(data);
    let candidate = match E::serde_format() {
        SerdeFormat::Name => Candidate::Name(
            serde_json::from_slice::<String>(data)
                .map_err(|e| EnumforgeError::from(e).context("failed to decode JSON name"))?,
        ),
        SerdeFormat::Value => Candidate::Value(decode_value::<E::Raw>(data)?),
    };
    resolve(candidate, source)
}

fn decode_value<R: Primitive>(data: &[u8]) -> Result<R> {
    let wrap = |e: serde_json::Error| EnumforgeError::from(e).context("failed to decode JSON value");
    if R::KIND == RawKind::Bytes {
        let text = serde_json::from_slice::<String>(data).map_err(wrap)?;
        return R::from_raw(decode_text(&text, R::KIND)?);
    }
    serde_json::from_slice::<R>(data).map_err(wrap)
}
