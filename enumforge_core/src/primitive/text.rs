use super::{Primitive, RawKind, RawValue};
use crate::error::{EnumforgeError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::str::FromStr;

/// Encodes a value as text.
///
/// Integers are base-10, floats use the shortest text that round-trips at
/// their own width, bools are `true`/`false`. Byte sequences map directly to
/// characters and timestamps use RFC 3339. Structured values fall back to JSON.
pub fn encode_text(value: &RawValue) -> Result<String> {
    Ok(match value {
        RawValue::Null => "null".to_string(),
        RawValue::I8(v) => v.to_string(),
        RawValue::I16(v) => v.to_string(),
        RawValue::I32(v) => v.to_string(),
        RawValue::I64(v) => v.to_string(),
        RawValue::U8(v) => v.to_string(),
        RawValue::U16(v) => v.to_string(),
        RawValue::U32(v) => v.to_string(),
        RawValue::U64(v) => v.to_string(),
        RawValue::F32(v) => v.to_string(),
        RawValue::F64(v) => v.to_string(),
        RawValue::Bool(v) => v.to_string(),
        RawValue::String(v) => v.clone(),
        RawValue::Bytes(v) => String::from_utf8_lossy(v).into_owned(),
        RawValue::Timestamp(v) => v.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        RawValue::Structured(v) => serde_json::to_string(v)?,
    })
}

/// Decodes text into a value of the given kind.
pub fn decode_text(text: &str, kind: RawKind) -> Result<RawValue> {
    Ok(match kind {
        RawKind::I8 => RawValue::I8(parse_number(text, kind)?),
        RawKind::I16 => RawValue::I16(parse_number(text, kind)?),
        RawKind::I32 => RawValue::I32(parse_number(text, kind)?),
        RawKind::I64 => RawValue::I64(parse_number(text, kind)?),
        RawKind::U8 => RawValue::U8(parse_number(text, kind)?),
        RawKind::U16 => RawValue::U16(parse_number(text, kind)?),
        RawKind::U32 => RawValue::U32(parse_number(text, kind)?),
        RawKind::U64 => RawValue::U64(parse_number(text, kind)?),
        RawKind::F32 => {
            let v: f32 = parse_number(text, kind)?;
            check_float_range(text, v.is_infinite(), kind)?;
            RawValue::F32(v)
        }
        RawKind::F64 => {
            let v: f64 = parse_number(text, kind)?;
            check_float_range(text, v.is_infinite(), kind)?;
            RawValue::F64(v)
        }
        RawKind::Bool => RawValue::Bool(
            parse_bool(text).ok_or_else(|| EnumforgeError::parse(text, kind, "invalid syntax"))?,
        ),
        RawKind::String => RawValue::String(text.to_string()),
        RawKind::Bytes => RawValue::Bytes(text.as_bytes().to_vec()),
        RawKind::Timestamp => RawValue::Timestamp(parse_timestamp(text)?),
        RawKind::Structured => RawValue::Structured(serde_json::from_str(text)?),
    })
}

/// Encodes a typed primitive as text.
pub fn to_text<R: Primitive>(value: &R) -> Result<String> {
    encode_text(&value.to_raw())
}

/// Decodes text into a typed primitive.
pub fn from_text<R: Primitive>(text: &str) -> Result<R> {
    R::from_raw(decode_text(text, R::KIND)?)
}

/// Parses the canonical boolean spellings.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

pub(crate) fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| EnumforgeError::parse(text, RawKind::Timestamp, e))
}

fn parse_number<T>(text: &str, kind: RawKind) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    text.parse::<T>()
        .map_err(|e| EnumforgeError::parse(text, kind, e))
}

// Rust parses out-of-range floats to infinity where a range error is wanted.
fn check_float_range(text: &str, infinite: bool, kind: RawKind) -> Result<()> {
    let spelled_infinite = text
        .trim_start_matches(['+', '-'])
        .to_ascii_lowercase()
        .starts_with("inf");
    if infinite && !spelled_infinite {
        return Err(EnumforgeError::parse(text, kind, "value out of range"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_floats_keep_their_own_width() {
        assert_eq!(encode_text(&RawValue::F32(0.1)).unwrap(), "0.1");
        assert_eq!(encode_text(&RawValue::F64(0.1)).unwrap(), "0.1");
        assert_eq!(encode_text(&RawValue::F32(1.5)).unwrap(), "1.5");
        assert_eq!(encode_text(&RawValue::F64(-2.0)).unwrap(), "-2");
    }

    #[test]
    fn test_scalars_to_text() {
        assert_eq!(encode_text(&RawValue::I16(-300)).unwrap(), "-300");
        assert_eq!(encode_text(&RawValue::U64(u64::MAX)).unwrap(), "18446744073709551615");
        assert_eq!(encode_text(&RawValue::Bool(true)).unwrap(), "true");
        assert_eq!(encode_text(&RawValue::Bytes(b"raw".to_vec())).unwrap(), "raw");
        assert_eq!(encode_text(&RawValue::Null).unwrap(), "null");
        assert_eq!(
            encode_text(&RawValue::Structured(serde_json::json!({"a": [1, 2]}))).unwrap(),
            r#"{"a":[1,2]}"#
        );
    }

    #[test]
    fn test_integer_overflow_is_parse_error() {
        assert!(matches!(
            decode_text("1000", RawKind::I8),
            Err(EnumforgeError::Parse { .. })
        ));
        assert!(matches!(
            decode_text("256", RawKind::U8),
            Err(EnumforgeError::Parse { .. })
        ));
        assert!(matches!(
            decode_text("-1", RawKind::U32),
            Err(EnumforgeError::Parse { .. })
        ));
        assert_eq!(decode_text("255", RawKind::U8).unwrap(), RawValue::U8(255));
    }

    #[test]
    fn test_float_out_of_range_is_parse_error() {
        assert!(matches!(
            decode_text("1e39", RawKind::F32),
            Err(EnumforgeError::Parse { .. })
        ));
        assert_eq!(decode_text("1e38", RawKind::F64).unwrap(), RawValue::F64(1e38));
        assert_eq!(
            decode_text("inf", RawKind::F64).unwrap(),
            RawValue::F64(f64::INFINITY)
        );
    }

    #[test]
    fn test_bool_spellings() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(decode_text(text, RawKind::Bool).unwrap(), RawValue::Bool(true));
        }
        for text in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(decode_text(text, RawKind::Bool).unwrap(), RawValue::Bool(false));
        }
        assert!(decode_text("yes", RawKind::Bool).is_err());
        assert!(decode_text("tRuE", RawKind::Bool).is_err());
    }

    #[test]
    fn test_strings_and_bytes_are_verbatim() {
        assert_eq!(
            decode_text(" spaced ", RawKind::String).unwrap(),
            RawValue::String(" spaced ".to_string())
        );
        assert_eq!(
            decode_text("abc", RawKind::Bytes).unwrap(),
            RawValue::Bytes(vec![b'a', b'b', b'c'])
        );
    }

    #[test]
    fn test_timestamp_text() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let text = encode_text(&RawValue::Timestamp(ts)).unwrap();
        assert_eq!(text, "2024-03-01T12:30:00Z");
        assert_eq!(
            decode_text(&text, RawKind::Timestamp).unwrap(),
            RawValue::Timestamp(ts)
        );
    }

    #[test]
    fn test_structured_text_surfaces_json_errors() {
        assert!(matches!(
            decode_text("{not json", RawKind::Structured),
            Err(EnumforgeError::Json(_))
        ));
    }

    #[test]
    fn test_typed_helpers() {
        assert_eq!(to_text(&42u16).unwrap(), "42");
        assert_eq!(from_text::<i64>("-9").unwrap(), -9);
        assert_eq!(from_text::<isize>("12").unwrap(), 12);
        assert_eq!(from_text::<String>("x").unwrap(), "x");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        macro_rules! typed_text_round_trips {
            ($($name:ident: $ty:ty),* $(,)?) => {
                proptest! {
                    $(
                        #[test]
                        fn $name(v in any::<$ty>()) {
                            let text = to_text(&v).unwrap();
                            prop_assert_eq!(from_text::<$ty>(&text).unwrap(), v);
                        }
                    )*
                }
            };
        }

        typed_text_round_trips! {
            i8_text_round_trips: i8,
            i16_text_round_trips: i16,
            i32_text_round_trips: i32,
            isize_text_round_trips: isize,
            u8_text_round_trips: u8,
            u16_text_round_trips: u16,
            u32_text_round_trips: u32,
            u64_text_round_trips: u64,
            usize_text_round_trips: usize,
            bool_text_round_trips: bool,
        }

        proptest! {
            #[test]
            fn i64_text_round_trips(v in any::<i64>()) {
                let text = encode_text(&RawValue::I64(v)).unwrap();
                prop_assert_eq!(decode_text(&text, RawKind::I64).unwrap(), RawValue::I64(v));
            }

            #[test]
            fn f32_text_round_trips(v in any::<f32>().prop_filter("finite", |v| v.is_finite())) {
                let text = encode_text(&RawValue::F32(v)).unwrap();
                prop_assert_eq!(decode_text(&text, RawKind::F32).unwrap(), RawValue::F32(v));
            }

            #[test]
            fn f64_text_round_trips(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
                let text = encode_text(&RawValue::F64(v)).unwrap();
                prop_assert_eq!(decode_text(&text, RawKind::F64).unwrap(), RawValue::F64(v));
            }

            #[test]
            fn bytes_text_round_trips(v in "\\PC*") {
                let text = encode_text(&RawValue::Bytes(v.clone().into_bytes())).unwrap();
                prop_assert_eq!(
                    decode_text(&text, RawKind::Bytes).unwrap(),
                    RawValue::Bytes(v.into_bytes())
                );
            }

            #[test]
            fn string_text_round_trips(v in ".*") {
                let text = encode_text(&RawValue::String(v.clone())).unwrap();
                prop_assert_eq!(decode_text(&text, RawKind::String).unwrap(), RawValue::String(v));
            }
        }
    }
}
