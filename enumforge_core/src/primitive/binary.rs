use super::{Primitive, RawKind, RawValue};
use crate::error::{EnumforgeError, Result};

/// Encodes a value in its fixed-width big-endian binary form.
///
/// Strings and byte sequences are copied raw with no length prefix.
/// Timestamps and structured values fall back to JSON bytes.
pub fn encode_binary(value: &RawValue) -> Result<Vec<u8>> {
    Ok(match value {
        RawValue::Null => return Err(EnumforgeError::NilValue),
        RawValue::I8(v) => v.to_be_bytes().to_vec(),
        RawValue::I16(v) => v.to_be_bytes().to_vec(),
        RawValue::I32(v) => v.to_be_bytes().to_vec(),
        RawValue::I64(v) => v.to_be_bytes().to_vec(),
        RawValue::U8(v) => vec![*v],
        RawValue::U16(v) => v.to_be_bytes().to_vec(),
        RawValue::U32(v) => v.to_be_bytes().to_vec(),
        RawValue::U64(v) => v.to_be_bytes().to_vec(),
        RawValue::F32(v) => v.to_bits().to_be_bytes().to_vec(),
        RawValue::F64(v) => v.to_bits().to_be_bytes().to_vec(),
        RawValue::Bool(v) => vec![u8::from(*v)],
        RawValue::String(v) => v.as_bytes().to_vec(),
        RawValue::Bytes(v) => v.clone(),
        RawValue::Timestamp(v) => serde_json::to_vec(v)?,
        RawValue::Structured(v) => serde_json::to_vec(v)?,
    })
}

/// Decodes the binary form of a value of the given kind.
///
/// Zero bytes is always an error. Only the leading `width` bytes of a
/// fixed-width kind are read.
pub fn decode_binary(data: &[u8], kind: RawKind) -> Result<RawValue> {
    if data.is_empty() {
        return Err(EnumforgeError::EmptyData { kind });
    }

    Ok(match kind {
        RawKind::I8 => RawValue::I8(i8::from_be_bytes(take(data, kind)?)),
        RawKind::I16 => RawValue::I16(i16::from_be_bytes(take(data, kind)?)),
        RawKind::I32 => RawValue::I32(i32::from_be_bytes(take(data, kind)?)),
        RawKind::I64 => RawValue::I64(i64::from_be_bytes(take(data, kind)?)),
        RawKind::U8 => RawValue::U8(u8::from_be_bytes(take(data, kind)?)),
        RawKind::U16 => RawValue::U16(u16::from_be_bytes(take(data, kind)?)),
        RawKind::U32 => RawValue::U32(u32::from_be_bytes(take(data, kind)?)),
        RawKind::U64 => RawValue::U64(u64::from_be_bytes(take(data, kind)?)),
        RawKind::F32 => RawValue::F32(f32::from_bits(u32::from_be_bytes(take(data, kind)?))),
        RawKind::F64 => RawValue::F64(f64::from_bits(u64::from_be_bytes(take(data, kind)?))),
        RawKind::Bool => RawValue::Bool(data[0] != 0),
        RawKind::String => RawValue::String(
            String::from_utf8(data.to_vec())
                .map_err(|e| EnumforgeError::parse(String::from_utf8_lossy(data), kind, e))?,
        ),
        RawKind::Bytes => RawValue::Bytes(data.to_vec()),
        RawKind::Timestamp => RawValue::Timestamp(serde_json::from_slice(data)?),
        RawKind::Structured => RawValue::Structured(serde_json::from_slice(data)?),
    })
}

/// Encodes a typed primitive in binary form.
pub fn to_binary<R: Primitive>(value: &R) -> Result<Vec<u8>> {
    encode_binary(&value.to_raw())
}

/// Decodes binary data into a typed primitive.
pub fn from_binary<R: Primitive>(data: &[u8]) -> Result<R> {
    R::from_raw(decode_binary(data, R::KIND)?)
}

fn take<const N: usize>(data: &[u8], kind: RawKind) -> Result<[u8; N]> {
    data.get(..N)
        .and_then(|head| <[u8; N]>::try_from(head).ok())
        .ok_or_else(|| EnumforgeError::insufficient_data(kind, N, data.len()))
}
