use enumforge_core::{DriverValue, Enum, EnumforgeError, RawValue, SerdeFormat};
use enumforge_playground::color::COLORS;
use enumforge_playground::magic::MAGICS;
use enumforge_playground::status::{PRIMITIVE_STATUSES, STRING_STATUSES, TOKEN_REQUEST_STATUSES};
use enumforge_playground::{
    ColorEnum, MagicEnum, PrimitiveStatusEnum, StringStatusEnum, TokenRequestStatusEnum,
};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::thread;

// ==================== surface ====================

#[test]
fn test_container_and_names() {
    let active = STRING_STATUSES.string_active;
    assert_eq!(active.to_string(), "Active");
    assert_eq!(active.raw_value(), 1);
    assert!(active.is_valid());
    assert_eq!(StringStatusEnum::all().len(), 3);
    assert_eq!(
        StringStatusEnum::all()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>(),
        vec!["StringNone", "Active", "Inactive"]
    );
    assert_eq!(StringStatusEnum::TYPE_NAME, "StringStatus");
    assert_eq!(StringStatusEnum::serde_format(), SerdeFormat::Name);
    assert_eq!(TokenRequestStatusEnum::serde_format(), SerdeFormat::Value);
}

#[test]
fn test_invalid_sentinel() {
    let invalid = StringStatusEnum::invalid();
    assert_eq!(invalid, STRING_STATUSES.string_none);
    assert_eq!(invalid.raw_value(), 0);
    assert!(!invalid.is_valid());

    assert_eq!(ColorEnum::invalid().raw_value(), "");
    assert!(!ColorEnum::invalid().is_valid());
}

#[test]
fn test_parse_by_name_and_alias() {
    assert_eq!(StringStatusEnum::parse("On").unwrap(), STRING_STATUSES.string_active);
    assert_eq!(ColorEnum::parse("Crimson").unwrap(), COLORS.RED);
    // Unknown names fall back to the sentinel rather than failing.
    assert_eq!(
        StringStatusEnum::parse("Dormant").unwrap(),
        StringStatusEnum::invalid()
    );
    // Lookups are exact unless generated with --insensitive.
    assert_eq!(ColorEnum::parse("red").unwrap(), ColorEnum::invalid());
}

#[test]
fn test_parse_raw() {
    assert_eq!(
        TokenRequestStatusEnum::parse_raw(9010).unwrap(),
        TOKEN_REQUEST_STATUSES.step_one_canceled
    );
    assert_eq!(
        TokenRequestStatusEnum::parse_raw(99).unwrap(),
        TokenRequestStatusEnum::invalid()
    );
}

#[test]
fn test_name_constants_and_comments() {
    assert_eq!(TokenRequestStatusEnum::STEP_FOUR_SUCCESS_NAME, "Completed");
    assert_eq!(
        TokenRequestStatusEnum::STEP_ONE_INITIALIZED_NAME,
        "StepOneInitialized"
    );
    assert_eq!(
        TOKEN_REQUEST_STATUSES.step_four_success.to_string(),
        "Completed"
    );
}

#[test]
fn test_hashable_members() {
    let set: HashSet<StringStatusEnum> = StringStatusEnum::all().iter().copied().collect();
    assert_eq!(set.len(), 3);
    assert!(set.contains(&STRING_STATUSES.string_inactive));
}

#[test]
fn test_parse_any_input_shape() {
    let success = TOKEN_REQUEST_STATUSES.step_four_success;
    assert_eq!(TokenRequestStatusEnum::parse_any(&RawValue::U16(4000)).unwrap(), success);
    assert_eq!(TokenRequestStatusEnum::parse_any(&RawValue::F64(4000.0)).unwrap(), success);
    assert_eq!(
        TokenRequestStatusEnum::parse_any(&RawValue::String("Completed".into())).unwrap(),
        success
    );
    assert_eq!(
        TokenRequestStatusEnum::parse_any(&RawValue::Bytes(b"StepOneCanceled".to_vec())).unwrap(),
        TOKEN_REQUEST_STATUSES.step_one_canceled
    );
    assert_eq!(
        TokenRequestStatusEnum::parse_any(&RawValue::F64(4000.5)).unwrap(),
        TokenRequestStatusEnum::invalid()
    );
    assert!(matches!(
        TokenRequestStatusEnum::parse_any(&RawValue::Null),
        Err(EnumforgeError::NilValue)
    ));

    assert_eq!(ColorEnum::parse_any(&RawValue::String("Crimson".into())).unwrap(), COLORS.RED);
    assert_eq!(ColorEnum::parse_any(&RawValue::I32(1)).unwrap(), ColorEnum::invalid());
}

// ==================== json ====================

#[test]
fn test_json_name_and_value_modes() {
    assert_eq!(STRING_STATUSES.string_active.to_json().unwrap(), br#""Active""#.to_vec());
    assert_eq!(TOKEN_REQUEST_STATUSES.step_four_success.to_json().unwrap(), b"4000".to_vec());
    assert_eq!(PRIMITIVE_STATUSES.primitive_active.to_json().unwrap(), b"1.5".to_vec());
    assert_eq!(COLORS.RED.to_json().unwrap(), br##""#ff0000""##.to_vec());

    assert_eq!(
        StringStatusEnum::from_json(br#""Off""#).unwrap(),
        STRING_STATUSES.string_inactive
    );
    assert_eq!(
        TokenRequestStatusEnum::from_json(b"1001").unwrap(),
        TOKEN_REQUEST_STATUSES.step_one_mark_allowed
    );
    assert_eq!(ColorEnum::from_json(br##""#0000ff""##).unwrap(), COLORS.BLUE);
}

#[test]
fn test_json_unknown_constant() {
    let err = TokenRequestStatusEnum::from_json(b"99").unwrap_err();
    assert!(err.is_unknown_constant());
    assert_eq!(err.to_string(), "unknown constants 99");

    let err = StringStatusEnum::from_json(br#""Nope""#).unwrap_err();
    assert!(matches!(err, EnumforgeError::UnknownConstant { .. }));
}

#[test]
fn test_json_malformed_input_has_context() {
    let err = TokenRequestStatusEnum::from_json(b"\"abc\"").unwrap_err();
    assert!(err.to_string().starts_with("failed to decode JSON value"));
}

// ==================== text ====================

#[test]
fn test_text() {
    assert_eq!(STRING_STATUSES.string_inactive.to_text().unwrap(), "Inactive");
    assert_eq!(PRIMITIVE_STATUSES.primitive_inactive.to_text().unwrap(), "2.5");
    assert_eq!(COLORS.GREEN.to_text().unwrap(), "#00ff00");

    let parsed: StringStatusEnum = "Active".parse().unwrap();
    assert_eq!(parsed, STRING_STATUSES.string_active);
    let parsed: PrimitiveStatusEnum = "1.5".parse().unwrap();
    assert_eq!(parsed, PRIMITIVE_STATUSES.primitive_active);
    assert_eq!(ColorEnum::from_text("#0000ff").unwrap(), COLORS.BLUE);

    assert!("99".parse::<StringStatusEnum>().unwrap_err().is_unknown_constant());
    assert!(matches!(
        PrimitiveStatusEnum::from_text("fast"),
        Err(EnumforgeError::Parse { .. })
    ));
}

// ==================== binary ====================

#[test]
fn test_binary() {
    assert_eq!(STRING_STATUSES.string_active.to_binary().unwrap(), b"Active".to_vec());
    assert_eq!(
        PRIMITIVE_STATUSES.primitive_active.to_binary().unwrap(),
        1.5f32.to_be_bytes().to_vec()
    );
    assert_eq!(COLORS.RED.to_binary().unwrap(), b"#ff0000".to_vec());

    assert_eq!(
        StringStatusEnum::from_binary(b"Inactive").unwrap(),
        STRING_STATUSES.string_inactive
    );
    assert_eq!(
        PrimitiveStatusEnum::from_binary(&2.5f32.to_be_bytes()).unwrap(),
        PRIMITIVE_STATUSES.primitive_inactive
    );
    assert_eq!(ColorEnum::from_binary(b"#00ff00").unwrap(), COLORS.GREEN);
}

#[test]
fn test_binary_errors() {
    assert!(matches!(
        PrimitiveStatusEnum::from_binary(&[]),
        Err(EnumforgeError::EmptyData { .. })
    ));
    assert!(matches!(
        PrimitiveStatusEnum::from_binary(&[0x3f, 0xc0]),
        Err(EnumforgeError::InsufficientData { needed: 4, got: 2, .. })
    ));
    assert!(
        PrimitiveStatusEnum::from_binary(&99.0f32.to_be_bytes())
            .unwrap_err()
            .is_unknown_constant()
    );
}

// ==================== structured nodes / serde ====================

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Account {
    name: String,
    status: StringStatusEnum,
    history: Vec<StringStatusEnum>,
    weight: PrimitiveStatusEnum,
    color: ColorEnum,
}

fn account() -> Account {
    Account {
        name: "example".to_string(),
        status: STRING_STATUSES.string_active,
        history: vec![STRING_STATUSES.string_active, STRING_STATUSES.string_inactive],
        weight: PRIMITIVE_STATUSES.primitive_inactive,
        color: COLORS.BLUE.clone(),
    }
}

#[test]
fn test_yaml_round_trip() {
    let yaml = serde_yaml::to_string(&STRING_STATUSES.string_active).unwrap();
    assert_eq!(yaml, "Active\n");
    let back: StringStatusEnum = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, STRING_STATUSES.string_active);

    let document = serde_yaml::to_string(&account()).unwrap();
    assert!(document.contains("status: Active"));
    assert!(document.contains("weight: 2.5"));
    let parsed: Account = serde_yaml::from_str(&document).unwrap();
    assert_eq!(parsed, account());
}

#[test]
fn test_json_through_serde() {
    let json = serde_json::to_value(account()).unwrap();
    assert_eq!(json["status"], "Active");
    assert_eq!(json["weight"], 2.5);
    assert_eq!(json["color"], "#0000ff");
    let parsed: Account = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, account());
}

#[test]
fn test_yaml_unknown_member() {
    let err = serde_yaml::from_str::<StringStatusEnum>("Dormant").unwrap_err();
    assert!(err.to_string().contains("unknown constants Dormant"));
}

#[test]
fn test_from_node_adapters() {
    let yaml: serde_yaml::Value = serde_yaml::from_str("'#ff0000'").unwrap();
    assert_eq!(ColorEnum::from_node(&yaml).unwrap(), COLORS.RED);

    let json = serde_json::json!("Inactive");
    assert_eq!(
        StringStatusEnum::from_node(&json).unwrap(),
        STRING_STATUSES.string_inactive
    );

    let node = PRIMITIVE_STATUSES.primitive_active.to_node().unwrap();
    assert_eq!(node, enumforge_core::serde_value::Value::F32(1.5));
    assert_eq!(
        PrimitiveStatusEnum::from_node(&node).unwrap(),
        PRIMITIVE_STATUSES.primitive_active
    );

    // A number is converted to its text and looked up as a name.
    let err = StringStatusEnum::from_node(&serde_json::json!(1)).unwrap_err();
    assert!(err.is_unknown_constant());
}

// ==================== sql ====================

#[test]
fn test_driver_values() {
    assert_eq!(
        TOKEN_REQUEST_STATUSES.step_one_initialized.to_driver_value().unwrap(),
        DriverValue::Int64(1000)
    );
    assert_eq!(
        COLORS.RED.to_driver_value().unwrap(),
        DriverValue::String("#ff0000".to_string())
    );
}

#[test]
fn test_scan() {
    let mut status = TOKEN_REQUEST_STATUSES.step_one_initialized;

    status.scan(&RawValue::I64(1001)).unwrap();
    assert_eq!(status, TOKEN_REQUEST_STATUSES.step_one_mark_allowed);

    status.scan(&RawValue::Null).unwrap();
    assert_eq!(status, TOKEN_REQUEST_STATUSES.step_one_mark_allowed);

    status.scan(&RawValue::String("9010".to_string())).unwrap();
    assert_eq!(status, TOKEN_REQUEST_STATUSES.step_one_canceled);

    let err = status.scan(&RawValue::I64(99)).unwrap_err();
    assert!(err.is_unknown_constant());
    assert_eq!(status, TOKEN_REQUEST_STATUSES.step_one_canceled);

    assert!(matches!(
        status.scan(&RawValue::String("not_a_number".to_string())),
        Err(EnumforgeError::Parse { .. })
    ));
}

#[test]
fn test_scan_string_values() {
    let mut color = ColorEnum::invalid();
    color.scan(&RawValue::Bytes(b"#0000ff".to_vec())).unwrap();
    assert_eq!(color, COLORS.BLUE);
}

// ==================== byte sequences ====================

#[test]
fn test_byte_family_surface() {
    assert_eq!(MagicEnum::all().len(), 3);
    assert_eq!(MAGICS.magic_png.raw_value(), b"\x89PNG".to_vec());
    assert_eq!(MAGICS.magic_png.to_string(), "Png");
    assert_eq!(MagicEnum::parse("PNG").unwrap(), MAGICS.magic_png);
    assert_eq!(MagicEnum::parse_raw(b"%PDF".to_vec()).unwrap(), MAGICS.magic_pdf);
    assert_eq!(
        MagicEnum::parse_any(&RawValue::String("Gif".into())).unwrap(),
        MAGICS.magic_gif
    );

    let invalid = MagicEnum::invalid();
    assert!(invalid.raw_value().is_empty());
    assert!(!invalid.is_valid());
    assert_eq!(invalid.to_string(), "magic()");
}

#[test]
fn test_byte_family_codecs() {
    assert_eq!(MAGICS.magic_png.to_binary().unwrap(), b"\x89PNG".to_vec());
    assert_eq!(MagicEnum::from_binary(b"\x89PNG").unwrap(), MAGICS.magic_png);
    assert!(matches!(
        MagicEnum::from_binary(&[]),
        Err(EnumforgeError::EmptyData { .. })
    ));
    assert!(MagicEnum::from_binary(b"PK\x03\x04").unwrap_err().is_unknown_constant());

    assert_eq!(MAGICS.magic_gif.to_json().unwrap(), br#""GIF8""#.to_vec());
    assert_eq!(MagicEnum::from_json(br#""%PDF""#).unwrap(), MAGICS.magic_pdf);

    assert_eq!(MAGICS.magic_gif.to_text().unwrap(), "GIF8");
    let parsed: MagicEnum = "%PDF".parse().unwrap();
    assert_eq!(parsed, MAGICS.magic_pdf);
}

#[test]
fn test_byte_family_sql() {
    assert_eq!(
        MAGICS.magic_pdf.to_driver_value().unwrap(),
        DriverValue::Bytes(b"%PDF".to_vec())
    );

    let mut magic = MagicEnum::invalid();
    magic.scan(&RawValue::Bytes(b"\x89PNG".to_vec())).unwrap();
    assert_eq!(magic, MAGICS.magic_png);
    magic.scan(&RawValue::String("GIF8".into())).unwrap();
    assert_eq!(magic, MAGICS.magic_gif);
    magic.scan(&RawValue::Null).unwrap();
    assert_eq!(magic, MAGICS.magic_gif);
}

// ==================== concurrency ====================

#[test]
fn test_concurrent_lookups() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let name = if i % 2 == 0 { "Active" } else { "Inactive" };
                let status = StringStatusEnum::from_text(name).unwrap();
                assert_eq!(status.to_string(), name);
                ColorEnum::all().len()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}
