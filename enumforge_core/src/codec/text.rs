use crate::enums::{Enum, SerdeFormat};
use crate::error::Result;
use crate::lookup::{Candidate, resolve};
use crate::primitive::{from_text, to_text};

/// Encodes a member as plain text.
pub fn encode<E: Enum>(value: &E) -> Result<String> {
    match E::serde_format() {
        SerdeFormat::Name => Ok(value.name().into_owned()),
        SerdeFormat::Value => to_text(&value.raw_value()),
    }
}

/// Decodes a member from plain text.
pub fn decode<E: Enum>(text: &str) -> Result<E> {
    let candidate = match E::serde_format() {
        SerdeFormat::Name => Candidate::Name(text.to_string()),
        SerdeFormat::Value => Candidate::Value(from_text::<E::Raw>(text)?),
    };
    resolve(candidate, text)
}

/// Decodes a member from text bytes.
pub fn decode_bytes<E: Enum>(data: &[u8]) -> Result<E> {
    decode(&String::from_utf8_lossy(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::fixtures::{Color, Status, StatusValue, Weight};
    use crate::error::EnumforgeError;

    #[test]
    fn test_name_mode() {
        assert_eq!(encode(&Status { raw: 2 }).unwrap(), "Inactive");
        assert_eq!(decode::<Status>("Inactive").unwrap(), Status { raw: 2 });
        assert_eq!(decode::<Status>("On").unwrap(), Status { raw: 1 });
    }

    #[test]
    fn test_value_mode() {
        assert_eq!(encode(&StatusValue { raw: 1 }).unwrap(), "1");
        assert_eq!(decode::<StatusValue>("2").unwrap(), StatusValue { raw: 2 });
        assert_eq!(encode(&Weight { raw: 0.5 }).unwrap(), "0.5");
        assert_eq!(encode(&Color { raw: "#00ff00".into() }).unwrap(), "#00ff00");
    }

    #[test]
    fn test_value_mode_parse_failure() {
        assert!(matches!(
            decode::<StatusValue>("one"),
            Err(EnumforgeError::Parse { .. })
        ));
    }

    #[test]
    fn test_unknown_constant() {
        let err = decode::<StatusValue>("99").unwrap_err();
        assert_eq!(err.to_string(), "unknown constants 99");
        assert!(decode_bytes::<Status>(b"99").unwrap_err().is_unknown_constant());
    }
}
