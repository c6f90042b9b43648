//! Structured-node codec.
//!
//! Decoding only needs a node that can decode itself into a requested
//! type; adapters are provided for `serde_value`, `serde_json` and, with the
//! `yaml` feature, `serde_yaml` values.

use crate::enums::{Enum, SerdeFormat};
use crate::error::{EnumforgeError, Result};
use crate::lookup::{Candidate, resolve};
use crate::primitive::{Primitive, RawValue, convert_node, encode_text};
use serde::de::DeserializeOwned;
use serde_value::Value;
use tracing::trace;

/// A structured document node that can decode itself into a requested type.
pub trait StructuredNode {
    type Error: std::fmt::Display;

    fn decode<T: DeserializeOwned>(&self) -> std::result::Result<T, Self::Error>;
}

impl StructuredNode for Value {
    type Error = serde_value::DeserializerError;

    fn decode<T: DeserializeOwned>(&self) -> std::result::Result<T, Self::Error> {
        self.clone().deserialize_into()
    }
}

impl StructuredNode for serde_json::Value {
    type Error = serde_json::Error;

    fn decode<T: DeserializeOwned>(&self) -> std::result::Result<T, Self::Error> {
        T::deserialize(self)
    }
}

#[cfg(feature = "yaml")]
impl StructuredNode for serde_yaml::Value {
    type Error = serde_yaml::Error;

    fn decode<T: DeserializeOwned>(&self) -> std::result::Result<T, Self::Error> {
        serde_yaml::from_value(self.clone())
    }
}

/// Encodes a member as a node: the name as a string, or the raw value as a
/// scalar of its own kind.
pub fn encode<E: Enum>(value: &E) -> Result<Value> {
    match E::serde_format() {
        SerdeFormat::Name => Ok(Value::String(value.name().into_owned())),
        SerdeFormat::Value => Value::try_from(value.raw_value().to_raw()),
    }
}

/// Decodes a member from a node.
///
/// When the node does not decode directly into the expected type, it is
/// decoded as an opaque value and converted; both fallback failures carry
/// context.
pub fn decode<E: Enum, N: StructuredNode + ?Sized>(node: &N) -> Result<E> {
    match E::serde_format() {
        SerdeFormat::Name => {
            let name = decode_or_convert::<String, N>(node)?;
            resolve(Candidate::Name(name.clone()), name)
        }
        SerdeFormat::Value => {
            let raw = decode_or_convert::<E::Raw, N>(node)?;
            let source = encode_text(&raw.to_raw()).unwrap_or_else(|_| format!("{:?}", raw));
            resolve(Candidate::Value(raw), source)
        }
    }
}

fn decode_or_convert<R: Primitive, N: StructuredNode + ?Sized>(node: &N) -> Result<R> {
    match node.decode::<R>() {
        Ok(value) => Ok(value),
        Err(direct) => {
            trace!("node does not decode as {} ({}), converting", R::KIND, direct);
            let opaque = node.decode::<Value>().map_err(|e| {
                EnumforgeError::node(format!("{direct}; {e}")).context("failed to decode node")
            })?;
            convert_node::<R>(opaque)
                .map_err(|e| e.context("failed to convert node value to target type"))
        }
    }
}

/// Decodes a raw value from a node without resolving it to a member.
pub fn decode_raw<R: Primitive, N: StructuredNode + ?Sized>(node: &N) -> Result<R> {
    decode_or_convert::<R, N>(node)
}

/// Turns an encoded node into a dynamically typed value.
pub fn to_raw_value(node: Value) -> Result<RawValue> {
    RawValue::try_from(node)
}
