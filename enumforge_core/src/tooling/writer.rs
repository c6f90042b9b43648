//! Companion file emission.
//!
//! The emitted text is meant to be pulled in with `include!` right next to the
//! constants it wraps, so it never contains `use` items and refers to the
//! runtime exclusively through `::enumforge_core::` paths.

use super::model::{EnumType, GenerationRequest};
use crate::enums::SerdeFormat;

const LAZY: &str = "::enumforge_core::once_cell::sync::Lazy";
const CORE: &str = "::enumforge_core";

/// Renders the complete companion file for `request`.
pub fn generate_companion_string(request: &GenerationRequest) -> String {
    tracing::info!(
        source = %request.source_filename,
        enum_count = request.enums.len(),
        "Generating enum companion file"
    );

    let mut output = String::new();
    output.push_str(&header(request));

    for enum_type in &request.enums {
        output.push('\n');
        output.push_str(&generate_enum_string(enum_type, request));
    }

    output
}

/// The command line that reproduces the file.
pub fn command_line(request: &GenerationRequest) -> String {
    let mut command = String::from("enumforge generate");
    if request.failfast {
        command.push_str(" --failfast");
    }
    if request.insensitive {
        command.push_str(" --insensitive");
    }
    command.push(' ');
    command.push_str(&request.source_filename);
    command
}

fn header(request: &GenerationRequest) -> String {
    format!(
        "// Code generated by enumforge {}. DO NOT EDIT.\n// Source: {}\n// Command: {}\n",
        request.version,
        request.source_filename,
        command_line(request)
    )
}

/// Renders every item generated for one enum type.
pub fn generate_enum_string(enum_type: &EnumType, request: &GenerationRequest) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "// ==================== {} ====================\n\n",
        enum_type.type_name
    ));
    output.push_str(&wrapper_definition(enum_type));
    output.push_str(&container_definition(enum_type));
    output.push_str(&index_definition(enum_type, request.insensitive));
    output.push_str(&inherent_methods(enum_type, request.failfast));
    output.push_str(&display_impl(enum_type));
    output.push_str(&enum_impl(enum_type));

    let handlers = &enum_type.config.handlers;
    if handlers.json {
        output.push_str(&json_methods(enum_type));
    }
    if handlers.text {
        output.push_str(&text_methods(enum_type));
    }
    if handlers.binary {
        output.push_str(&binary_methods(enum_type));
    }
    if handlers.yaml {
        output.push_str(&node_methods(enum_type));
    }
    if handlers.sql {
        output.push_str(&sql_methods(enum_type));
    }

    output
}

fn derives(enum_type: &EnumType) -> String {
    let mut derives = vec!["Debug", "Clone"];
    if enum_type.is_copy() {
        derives.push("Copy");
    }
    derives.extend(["Default", "PartialEq"]);
    if enum_type.is_hashable() {
        derives.extend(["Eq", "Hash"]);
    }
    format!("#[derive({})]", derives.join(", "))
}

/// `.copied()` or `.cloned()` for an `Option<&Wrapper>`.
fn owned_option(enum_type: &EnumType) -> &'static str {
    if enum_type.is_copy() {
        ".copied()"
    } else {
        ".cloned()"
    }
}

fn member_value(enum_type: &EnumType, ident: &str) -> String {
    format!(
        "{} {{ raw: {} }}",
        enum_type.wrapper_name(),
        enum_type.raw_expr(ident)
    )
}

fn wrapper_definition(enum_type: &EnumType) -> String {
    format!(
        "/// Type-safe wrapper around the [`{alias}`] constants.\n{derives}\npub struct {wrapper} {{\n    raw: {raw},\n}}\n\n",
        alias = enum_type.type_name,
        derives = derives(enum_type),
        wrapper = enum_type.wrapper_name(),
        raw = enum_type.raw_type,
    )
}

fn container_definition(enum_type: &EnumType) -> String {
    let uppercase = enum_type.config.uppercase_fields;
    let wrapper = enum_type.wrapper_name();
    let container = enum_type.container_type();
    let mut output = String::new();

    output.push_str(&format!("/// Every declared [`{wrapper}`] member.\n"));
    if uppercase {
        output.push_str("#[allow(non_snake_case)]\n");
    }
    output.push_str(&format!("pub struct {container} {{\n"));
    for member in &enum_type.members {
        if let Some(comment) = &member.comment {
            output.push_str(&format!("    /// {comment}\n"));
        }
        output.push_str(&format!(
            "    pub {}: {wrapper},\n",
            member.field_name(uppercase)
        ));
    }
    output.push_str("}\n\n");

    output.push_str(&format!(
        "pub static {}: {LAZY}<{container}> = {LAZY}::new(|| {container} {{\n",
        enum_type.container_static()
    ));
    for member in &enum_type.members {
        output.push_str(&format!(
            "    {}: {},\n",
            member.field_name(uppercase),
            member_value(enum_type, &member.ident)
        ));
    }
    output.push_str("});\n\n");

    output
}

fn index_definition(enum_type: &EnumType, insensitive: bool) -> String {
    let constructor = if insensitive { "case_insensitive" } else { "new" };
    let mut output = format!(
        "static {}: {LAZY}<{CORE}::EnumIndex<{}>> = {LAZY}::new(|| {{\n    {CORE}::EnumIndex::{constructor}(vec![\n",
        enum_type.index_static(),
        enum_type.wrapper_name()
    );

    for member in &enum_type.members {
        let mut entry = format!(
            "        {CORE}::IndexEntry::new({}, {:?})",
            member_value(enum_type, &member.ident),
            member.name()
        );
        let aliases: Vec<String> = member
            .lookup_names()
            .into_iter()
            .skip(1)
            .map(|alias| format!("{alias:?}"))
            .collect();
        if !aliases.is_empty() {
            entry.push_str(&format!(".with_aliases(&[{}])", aliases.join(", ")));
        }
        if !member.valid {
            entry.push_str(".invalid()");
        }
        output.push_str(&entry);
        output.push_str(",\n");
    }

    output.push_str("    ])\n});\n\n");
    output
}

fn inherent_methods(enum_type: &EnumType, failfast: bool) -> String {
    let wrapper = enum_type.wrapper_name();
    let index = enum_type.index_static();
    let raw = &enum_type.raw_type;
    let owned = owned_option(enum_type);
    let mut output = format!("impl {wrapper} {{\n");

    if enum_type.config.generate_name_constants {
        for member in &enum_type.members {
            output.push_str(&format!(
                "    pub const {}_NAME: &str = {:?};\n",
                member.ident,
                member.name()
            ));
        }
        output.push('\n');
    }

    let (missing_name, missing_raw, missing_any) = if failfast {
        (
            format!("Err({CORE}::EnumforgeError::unknown_constant(name))"),
            format!("Err({CORE}::EnumforgeError::unknown_constant(format!(\"{{raw:?}}\")))"),
            format!("Err({CORE}::EnumforgeError::unknown_constant(input.to_string()))"),
        )
    } else {
        let invalid = "Ok(Self::invalid())".to_string();
        (invalid.clone(), invalid.clone(), invalid)
    };
    let miss_doc = if failfast {
        "Unknown input is an error."
    } else {
        "Unknown input yields the invalid sentinel."
    };

    output.push_str(&format!(
        r#"    /// The invalid sentinel: the zero raw value.
    pub fn invalid() -> Self {{
        Self::default()
    }}

    /// Every declared member in declaration order.
    pub fn all() -> &'static [Self] {{
        {index}.values()
    }}

    pub fn is_valid(&self) -> bool {{
        {index}.is_valid(&self.raw)
    }}

    /// Looks a member up by name or alias. {miss_doc}
    pub fn parse(name: &str) -> {CORE}::Result<Self> {{
        match {index}.find_by_name(name){owned} {{
            Some(found) => Ok(found),
            None => {missing_name},
        }}
    }}

    /// Looks a member up by raw value. {miss_doc}
    pub fn parse_raw(raw: {raw}) -> {CORE}::Result<Self> {{
        match {index}.find_by_value(&raw){owned} {{
            Some(found) => Ok(found),
            None => {missing_raw},
        }}
    }}

    /// Looks a member up by name from text or bytes, or by value from a
    /// number of any width. {miss_doc}
    pub fn parse_any(input: &{CORE}::RawValue) -> {CORE}::Result<Self> {{
        match {CORE}::lookup::find_any::<Self>(input)? {{
            Some(found) => Ok(found),
            None => {missing_any},
        }}
    }}
}}

"#
    ));

    output
}

fn display_impl(enum_type: &EnumType) -> String {
    format!(
        r#"impl ::std::fmt::Display for {wrapper} {{
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {{
        f.write_str(&<Self as {CORE}::Enum>::name(self))
    }}
}}

"#,
        wrapper = enum_type.wrapper_name()
    )
}

fn enum_impl(enum_type: &EnumType) -> String {
    let wrapper = enum_type.wrapper_name();
    let index = enum_type.index_static();
    let raw = &enum_type.raw_type;
    let owned = owned_option(enum_type);
    let raw_read = if enum_type.is_copy() {
        "self.raw"
    } else {
        "self.raw.clone()"
    };
    let format = match enum_type.config.serde_format {
        SerdeFormat::Name => "Name",
        SerdeFormat::Value => "Value",
    };

    format!(
        r#"impl {CORE}::Enum for {wrapper} {{
    type Raw = {raw};
    const TYPE_NAME: &'static str = {type_name:?};

    fn raw_value(&self) -> {raw} {{
        {raw_read}
    }}

    fn name(&self) -> ::std::borrow::Cow<'static, str> {{
        match {index}.name_of(&self.raw) {{
            Some(name) => ::std::borrow::Cow::Borrowed(name),
            None => ::std::borrow::Cow::Owned(<Self as {CORE}::Enum>::fallback_name(self)),
        }}
    }}

    fn is_valid(&self) -> bool {{
        {index}.is_valid(&self.raw)
    }}

    fn find_by_name(name: &str) -> Option<Self> {{
        {index}.find_by_name(name){owned}
    }}

    fn find_by_value(value: &{raw}) -> Option<Self> {{
        {index}.find_by_value(value){owned}
    }}

    fn serde_format() -> {CORE}::SerdeFormat {{
        {CORE}::SerdeFormat::{format}
    }}

    fn all() -> &'static [Self] {{
        {index}.values()
    }}
}}

"#,
        type_name = enum_type.type_name,
    )
}

fn json_methods(enum_type: &EnumType) -> String {
    format!(
        r#"impl {wrapper} {{
    pub fn to_json(&self) -> {CORE}::Result<Vec<u8>> {{
        {CORE}::codec::json::encode(self)
    }}

    pub fn from_json(data: &[u8]) -> {CORE}::Result<Self> {{
        {CORE}::codec::json::decode(data)
    }}
}}

"#,
        wrapper = enum_type.wrapper_name()
    )
}

fn text_methods(enum_type: &EnumType) -> String {
    format!(
        r#"impl {wrapper} {{
    pub fn to_text(&self) -> {CORE}::Result<String> {{
        {CORE}::codec::text::encode(self)
    }}

    pub fn from_text(text: &str) -> {CORE}::Result<Self> {{
        {CORE}::codec::text::decode(text)
    }}
}}

impl ::std::str::FromStr for {wrapper} {{
    type Err = {CORE}::EnumforgeError;

    fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {{
        Self::from_text(text)
    }}
}}

"#,
        wrapper = enum_type.wrapper_name()
    )
}

fn binary_methods(enum_type: &EnumType) -> String {
    format!(
        r#"impl {wrapper} {{
    pub fn to_binary(&self) -> {CORE}::Result<Vec<u8>> {{
        {CORE}::codec::binary::encode(self)
    }}

    pub fn from_binary(data: &[u8]) -> {CORE}::Result<Self> {{
        {CORE}::codec::binary::decode(data)
    }}
}}

"#,
        wrapper = enum_type.wrapper_name()
    )
}

fn node_methods(enum_type: &EnumType) -> String {
    format!(
        r#"impl {wrapper} {{
    pub fn to_node(&self) -> {CORE}::Result<{CORE}::serde_value::Value> {{
        {CORE}::codec::node::encode(self)
    }}

    pub fn from_node<N: {CORE}::StructuredNode + ?Sized>(node: &N) -> {CORE}::Result<Self> {{
        {CORE}::codec::node::decode(node)
    }}
}}

impl {CORE}::serde::Serialize for {wrapper} {{
    fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
    where
        S: {CORE}::serde::Serializer,
    {{
        let node = self
            .to_node()
            .map_err(<S::Error as {CORE}::serde::ser::Error>::custom)?;
        {CORE}::serde::Serialize::serialize(&node, serializer)
    }}
}}

impl<'de> {CORE}::serde::Deserialize<'de> for {wrapper} {{
    fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
    where
        D: {CORE}::serde::Deserializer<'de>,
    {{
        let node = <{CORE}::serde_value::Value as {CORE}::serde::Deserialize>::deserialize(deserializer)?;
        Self::from_node(&node).map_err(<D::Error as {CORE}::serde::de::Error>::custom)
    }}
}}

"#,
        wrapper = enum_type.wrapper_name()
    )
}

fn sql_methods(enum_type: &EnumType) -> String {
    format!(
        r#"impl {wrapper} {{
    pub fn to_driver_value(&self) -> {CORE}::Result<{CORE}::DriverValue> {{
        {CORE}::codec::sql::value(self)
    }}

    /// Scans a driver value into `self`. A null source leaves `self` unchanged.
    pub fn scan(&mut self, source: &{CORE}::RawValue) -> {CORE}::Result<()> {{
        {CORE}::codec::sql::scan(self, source)
    }}
}}

"#,
        wrapper = enum_type.wrapper_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::RawKind;
    use crate::tooling::config::{EnumTypeConfig, Handlers};
    use crate::tooling::model::EnumMember;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn member(ident: &str, literal: &str, aliases: &[&str], valid: bool) -> EnumMember {
        EnumMember {
            ident: ident.to_string(),
            literal: literal.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            valid,
            comment: None,
        }
    }

    fn status() -> EnumType {
        EnumType {
            type_name: "Status".to_string(),
            underlying: "i32".to_string(),
            kind: RawKind::I32,
            raw_type: "i32".to_string(),
            members: vec![
                member("UNKNOWN", "0", &[], false),
                member("ACTIVE", "1", &["Active", "On"], true),
                member("INACTIVE", "2", &[], true),
            ],
            config: EnumTypeConfig {
                type_name: "Status".to_string(),
                handlers: Handlers::all(),
                generate_name_constants: true,
                ..EnumTypeConfig::default()
            },
        }
    }

    fn request(enums: Vec<EnumType>, failfast: bool) -> GenerationRequest {
        GenerationRequest {
            source_filename: "status.rs".to_string(),
            output_path: PathBuf::from("status_enums.rs"),
            enums,
            failfast,
            insensitive: false,
            version: "0.1.0",
        }
    }

    #[test]
    fn test_header() {
        let output = generate_companion_string(&request(vec![status()], false));
        assert!(output.starts_with(
            "// Code generated by enumforge 0.1.0. DO NOT EDIT.\n// Source: status.rs\n// Command: enumforge generate status.rs\n"
        ));
    }

    #[test]
    fn test_command_line_flags() {
        let mut req = request(vec![], true);
        req.insensitive = true;
        assert_eq!(
            command_line(&req),
            "enumforge generate --failfast --insensitive status.rs"
        );
    }

    #[test]
    fn test_wrapper_and_container() {
        let output = generate_enum_string(&status(), &request(vec![], false));
        assert!(output.contains(
            "#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]\npub struct StatusEnum {\n    raw: i32,\n}"
        ));
        assert!(output.contains("pub struct StatusContainer {\n    pub unknown: StatusEnum,"));
        assert!(output.contains("pub static STATUSES: ::enumforge_core::once_cell::sync::Lazy<StatusContainer>"));
        assert!(output.contains("    active: StatusEnum { raw: ACTIVE },\n"));
    }

    #[test]
    fn test_index_entries() {
        let output = generate_enum_string(&status(), &request(vec![], false));
        assert!(output.contains(
            "::enumforge_core::IndexEntry::new(StatusEnum { raw: UNKNOWN }, \"Unknown\").invalid(),"
        ));
        assert!(output.contains(
            "::enumforge_core::IndexEntry::new(StatusEnum { raw: ACTIVE }, \"Active\").with_aliases(&[\"On\"]),"
        ));
        assert!(output.contains("::enumforge_core::EnumIndex::new(vec!["));
    }

    #[test]
    fn test_insensitive_index() {
        let mut req = request(vec![], false);
        req.insensitive = true;
        let output = generate_enum_string(&status(), &req);
        assert!(output.contains("::enumforge_core::EnumIndex::case_insensitive(vec!["));
    }

    #[test]
    fn test_parse_miss_policy() {
        let lenient = generate_enum_string(&status(), &request(vec![], false));
        assert!(lenient.contains("None => Ok(Self::invalid()),"));
        assert!(!lenient.contains("unknown_constant"));

        let strict = generate_enum_string(&status(), &request(vec![], true));
        assert!(strict.contains(
            "None => Err(::enumforge_core::EnumforgeError::unknown_constant(name)),"
        ));
        assert!(strict.contains(
            "None => Err(::enumforge_core::EnumforgeError::unknown_constant(input.to_string())),"
        ));
    }

    #[test]
    fn test_parse_any_routes_through_lookup() {
        let output = generate_enum_string(&status(), &request(vec![], false));
        assert!(output.contains(
            "    pub fn parse_any(input: &::enumforge_core::RawValue) -> ::enumforge_core::Result<Self> {\n        match ::enumforge_core::lookup::find_any::<Self>(input)? {\n"
        ));
    }

    #[test]
    fn test_name_constants() {
        let output = generate_enum_string(&status(), &request(vec![], false));
        assert!(output.contains("    pub const ACTIVE_NAME: &str = \"Active\";\n"));
        assert!(output.contains("    pub const INACTIVE_NAME: &str = \"Inactive\";\n"));
    }

    #[test]
    fn test_handlers_are_optional() {
        let mut plain = status();
        plain.config.handlers = Handlers::default();
        let output = generate_enum_string(&plain, &request(vec![], false));
        assert!(output.contains("impl ::enumforge_core::Enum for StatusEnum {"));
        assert!(!output.contains("to_json"));
        assert!(!output.contains("serde::Serialize"));
        assert!(!output.contains("to_driver_value"));
    }

    #[test]
    fn test_all_handlers() {
        let output = generate_enum_string(&status(), &request(vec![], false));
        for needle in [
            "pub fn to_json(&self)",
            "impl ::std::str::FromStr for StatusEnum",
            "pub fn from_binary(data: &[u8])",
            "impl<'de> ::enumforge_core::serde::Deserialize<'de> for StatusEnum",
            "pub fn scan(&mut self, source: &::enumforge_core::RawValue)",
        ] {
            assert!(output.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_string_kind_is_not_copy() {
        let color = EnumType {
            type_name: "Color".to_string(),
            underlying: "&'static str".to_string(),
            kind: RawKind::String,
            raw_type: "String".to_string(),
            members: vec![member("RED", "\"#ff0000\"", &[], true)],
            config: EnumTypeConfig {
                serde_format: SerdeFormat::Value,
                uppercase_fields: true,
                ..EnumTypeConfig::default()
            },
        };
        let output = generate_enum_string(&color, &request(vec![], false));
        assert!(output.contains("#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]"));
        assert!(output.contains("#[allow(non_snake_case)]\npub struct ColorContainer {\n    pub RED: ColorEnum,"));
        assert!(output.contains("ColorEnum { raw: RED.to_string() }"));
        assert!(output.contains("self.raw.clone()"));
        assert!(output.contains(".cloned()"));
        assert!(output.contains("::enumforge_core::SerdeFormat::Value"));
    }

    #[test]
    fn test_float_kind_is_not_hashable() {
        let weight = EnumType {
            type_name: "Weight".to_string(),
            underlying: "f32".to_string(),
            kind: RawKind::F32,
            raw_type: "f32".to_string(),
            members: vec![member("HALF", "0.5", &[], true)],
            config: EnumTypeConfig::default(),
        };
        let output = generate_enum_string(&weight, &request(vec![], false));
        assert!(output.contains("#[derive(Debug, Clone, Copy, Default, PartialEq)]"));
    }

    #[test]
    fn test_member_comment_documents_field() {
        let mut documented = status();
        documented.members[1].comment = Some("currently serving".to_string());
        let output = generate_enum_string(&documented, &request(vec![], false));
        assert!(output.contains("    /// currently serving\n    pub active: StatusEnum,"));
    }
}
