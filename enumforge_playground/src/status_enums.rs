// Code generated by enumforge 0.1.0. DO NOT EDIT.
// Source: status.rs
// Command: enumforge generate status.rs

// ==================== StringStatus ====================

/// Type-safe wrapper around the [`StringStatus`] constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StringStatusEnum {
    raw: i32,
}

/// Every declared [`StringStatusEnum`] member.
pub struct StringStatusContainer {
    pub string_none: StringStatusEnum,
    pub string_active: StringStatusEnum,
    pub string_inactive: StringStatusEnum,
}

pub static STRING_STATUSES: ::enumforge_core::once_cell::sync::Lazy<StringStatusContainer> = ::enumforge_core::once_cell::sync::Lazy::new(|| StringStatusContainer {
    string_none: StringStatusEnum { raw: STRING_NONE },
    string_active: StringStatusEnum { raw: STRING_ACTIVE },
    string_inactive: StringStatusEnum { raw: STRING_INACTIVE },
});

static STRING_STATUS_INDEX: ::enumforge_core::once_cell::sync::Lazy<::enumforge_core::EnumIndex<StringStatusEnum>> = ::enumforge_core::once_cell::sync::Lazy::new(|| {
    ::enumforge_core::EnumIndex::new(vec![
        ::enumforge_core::IndexEntry::new(StringStatusEnum { raw: STRING_NONE }, "StringNone").invalid(),
        ::enumforge_core::IndexEntry::new(StringStatusEnum { raw: STRING_ACTIVE }, "Active").with_aliases(&["On"]),
        ::enumforge_core::IndexEntry::new(StringStatusEnum { raw: STRING_INACTIVE }, "Inactive").with_aliases(&["Off"]),
    ])
});

impl StringStatusEnum {
    /// The invalid sentinel: the zero raw value.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Every declared member in declaration order.
    pub fn all() -> &'static [Self] {
        STRING_STATUS_INDEX.values()
    }

    pub fn is_valid(&self) -> bool {
        STRING_STATUS_INDEX.is_valid(&self.raw)
    }

    /// Looks a member up by name or alias. Unknown input yields the invalid sentinel.
    pub fn parse(name: &str) -> ::enumforge_core::Result<Self> {
        match STRING_STATUS_INDEX.find_by_name(name).copied() {
            Some(found) => Ok(found),
            None => Ok(Self::invalid()),
        }
    }

    /// Looks a member up by raw value. Unknown input yields the invalid sentinel.
    pub fn parse_raw(raw: i32) -> ::enumforge_core::Result<Self> {
        match STRING_STATUS_INDEX.find_by_value(&raw).copied() {
            Some(found) => Ok(found),
            None => Ok(Self::invalid()),
        }
    }

    /// Looks a member up by name from text or bytes, or by value from a
    /// number of any width. Unknown input yields the invalid sentinel.
    pub fn parse_any(input: &::enumforge_core::RawValue) -> ::enumforge_core::Result<Self> {
        match ::enumforge_core::lookup::find_any::<Self>(input)? {
            Some(found) => Ok(found),
            None => Ok(Self::invalid()),
        }
    }
}

impl ::std::fmt::Display for StringStatusEnum {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&<Self as ::enumforge_core::Enum>::name(self))
    }
}

impl ::enumforge_core::Enum for StringStatusEnum {
    type Raw = i32;
    const TYPE_NAME: &'static str = "StringStatus";

    fn raw_value(&self) -> i32 {
        self.raw
    }

    fn name(&self) -> ::std::borrow::Cow<'static, str> {
        match STRING_STATUS_INDEX.name_of(&self.raw) {
            Some(name) => ::std::borrow::Cow::Borrowed(name),
            None => ::std::borrow::Cow::Owned(<Self as ::enumforge_core::Enum>::fallback_name(self)),
        }
    }

    fn is_valid(&self) -> bool {
        STRING_STATUS_INDEX.is_valid(&self.raw)
    }

    fn find_by_name(name: &str) -> Option<Self> {
        STRING_STATUS_INDEX.find_by_name(name).copied()
    }

    fn find_by_value(value: &i32) -> Option<Self> {
        STRING_STATUS_INDEX.find_by_value(value).copied()
    }

    fn serde_format() -> ::enumforge_core::SerdeFormat {
        ::enumforge_core::SerdeFormat::Name
    }

    fn all() -> &'static [Self] {
        STRING_STATUS_INDEX.values()
    }
}

impl StringStatusEnum {
    pub fn to_json(&self) -> ::enumforge_core::Result<Vec<u8>> {
        ::enumforge_core::codec::json::encode(self)
    }

    pub fn from_json(data: &[u8]) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::json::decode(data)
    }
}

impl StringStatusEnum {
    pub fn to_text(&self) -> ::enumforge_core::Result<String> {
        ::enumforge_core::codec::text::encode(self)
    }

    pub fn from_text(text: &str) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::text::decode(text)
    }
}

impl ::std::str::FromStr for StringStatusEnum {
    type Err = ::enumforge_core::EnumforgeError;

    fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

impl StringStatusEnum {
    pub fn to_binary(&self) -> ::enumforge_core::Result<Vec<u8>> {
        ::enumforge_core::codec::binary::encode(self)
    }

    pub fn from_binary(data: &[u8]) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::binary::decode(data)
    }
}

impl StringStatusEnum {
    pub fn to_node(&self) -> ::enumforge_core::Result<::enumforge_core::serde_value::Value> {
        ::enumforge_core::codec::node::encode(self)
    }

    pub fn from_node<N: ::enumforge_core::StructuredNode + ?Sized>(node: &N) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::node::decode(node)
    }
}

impl ::enumforge_core::serde::Serialize for StringStatusEnum {
    fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
    where
        S: ::enumforge_core::serde::Serializer,
    {
        let node = self
            .to_node()
            .map_err(<S::Error as ::enumforge_core::serde::ser::Error>::custom)?;
        ::enumforge_core::serde::Serialize::serialize(&node, serializer)
    }
}

impl<'de> ::enumforge_core::serde::Deserialize<'de> for StringStatusEnum {
    fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
    where
        D: ::enumforge_core::serde::Deserializer<'de>,
    {
        let node = <::enumforge_core::serde_value::Value as ::enumforge_core::serde::Deserialize>::deserialize(deserializer)?;
        Self::from_node(&node).map_err(<D::Error as ::enumforge_core::serde::de::Error>::custom)
    }
}


// ==================== PrimitiveStatus ====================

/// Type-safe wrapper around the [`PrimitiveStatus`] constants.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PrimitiveStatusEnum {
    raw: f32,
}

/// Every declared [`PrimitiveStatusEnum`] member.
pub struct PrimitiveStatusContainer {
    pub primitive_active: PrimitiveStatusEnum,
    pub primitive_inactive: PrimitiveStatusEnum,
}

pub static PRIMITIVE_STATUSES: ::enumforge_core::once_cell::sync::Lazy<PrimitiveStatusContainer> = ::enumforge_core::once_cell::sync::Lazy::new(|| PrimitiveStatusContainer {
    primitive_active: PrimitiveStatusEnum { raw: PRIMITIVE_ACTIVE },
    primitive_inactive: PrimitiveStatusEnum { raw: PRIMITIVE_INACTIVE },
});

static PRIMITIVE_STATUS_INDEX: ::enumforge_core::once_cell::sync::Lazy<::enumforge_core::EnumIndex<PrimitiveStatusEnum>> = ::enumforge_core::once_cell::sync::Lazy::new(|| {
    ::enumforge_core::EnumIndex::new(vec![
        ::enumforge_core::IndexEntry::new(PrimitiveStatusEnum { raw: PRIMITIVE_ACTIVE }, "Active"),
        ::enumforge_core::IndexEntry::new(PrimitiveStatusEnum { raw: PRIMITIVE_INACTIVE }, "Inactive"),
    ])
});

impl PrimitiveStatusEnum {
    /// The invalid sentinel: the zero raw value.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Every declared member in declaration order.
    pub fn all() -> &'static [Self] {
        PRIMITIVE_STATUS_INDEX.values()
    }

    pub fn is_valid(&self) -> bool {
        PRIMITIVE_STATUS_INDEX.is_valid(&self.raw)
    }

    /// Looks a member up by name or alias. Unknown input yields the invalid sentinel.
    pub fn parse(name: &str) -> ::enumforge_core::Result<Self> {
        match PRIMITIVE_STATUS_INDEX.find_by_name(name).copied() {
            Some(found) => Ok(found),
            None => Ok(Self::invalid()),
        }
    }

    /// Looks a member up by raw value. Unknown input yields the invalid sentinel.
    pub fn parse_raw(raw: f32) -> ::enumforge_core::Result<Self> {
        match PRIMITIVE_STATUS_INDEX.find_by_value(&raw).copied() {
            Some(found) => Ok(found),
            None => Ok(Self::invalid()),
        }
    }

    /// Looks a member up by name from text or bytes, or by value from a
    /// number of any width. Unknown input yields the invalid sentinel.
    pub fn parse_any(input: &::enumforge_core::RawValue) -> ::enumforge_core::Result<Self> {
        match ::enumforge_core::lookup::find_any::<Self>(input)? {
            Some(found) => Ok(found),
            None => Ok(Self::invalid()),
        }
    }
}

impl ::std::fmt::Display for PrimitiveStatusEnum {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&<Self as ::enumforge_core::Enum>::name(self))
    }
}

impl ::enumforge_core::Enum for PrimitiveStatusEnum {
    type Raw = f32;
    const TYPE_NAME: &'static str = "PrimitiveStatus";

    fn raw_value(&self) -> f32 {
        self.raw
    }

    fn name(&self) -> ::std::borrow::Cow<'static, str> {
        match PRIMITIVE_STATUS_INDEX.name_of(&self.raw) {
            Some(name) => ::std::borrow::Cow::Borrowed(name),
            None => ::std::borrow::Cow::Owned(<Self as ::enumforge_core::Enum>::fallback_name(self)),
        }
    }

    fn is_valid(&self) -> bool {
        PRIMITIVE_STATUS_INDEX.is_valid(&self.raw)
    }

    fn find_by_name(name: &str) -> Option<Self> {
        PRIMITIVE_STATUS_INDEX.find_by_name(name).copied()
    }

    fn find_by_value(value: &f32) -> Option<Self> {
        PRIMITIVE_STATUS_INDEX.find_by_value(value).copied()
    }

    fn serde_format() -> ::enumforge_core::SerdeFormat {
        ::enumforge_core::SerdeFormat::Value
    }

    fn all() -> &'static [Self] {
        PRIMITIVE_STATUS_INDEX.values()
    }
}

impl PrimitiveStatusEnum {
    pub fn to_json(&self) -> ::enumforge_core::Result<Vec<u8>> {
        ::enumforge_core::codec::json::encode(self)
    }

    pub fn from_json(data: &[u8]) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::json::decode(data)
    }
}

impl PrimitiveStatusEnum {
    pub fn to_text(&self) -> ::enumforge_core::Result<String> {
        ::enumforge_core::codec::text::encode(self)
    }

    pub fn from_text(text: &str) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::text::decode(text)
    }
}

impl ::std::str::FromStr for PrimitiveStatusEnum {
    type Err = ::enumforge_core::EnumforgeError;

    fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

impl PrimitiveStatusEnum {
    pub fn to_binary(&self) -> ::enumforge_core::Result<Vec<u8>> {
        ::enumforge_core::codec::binary::encode(self)
    }

    pub fn from_binary(data: &[u8]) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::binary::decode(data)
    }
}

impl PrimitiveStatusEnum {
    pub fn to_node(&self) -> ::enumforge_core::Result<::enumforge_core::serde_value::Value> {
        ::enumforge_core::codec::node::encode(self)
    }

    pub fn from_node<N: ::enumforge_core::StructuredNode + ?Sized>(node: &N) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::node::decode(node)
    }
}

impl ::enumforge_core::serde::Serialize for PrimitiveStatusEnum {
    fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
    where
        S: ::enumforge_core::serde::Serializer,
    {
        let node = self
            .to_node()
            .map_err(<S::Error as ::enumforge_core::serde::ser::Error>::custom)?;
        ::enumforge_core::serde::Serialize::serialize(&node, serializer)
    }
}

impl<'de> ::enumforge_core::serde::Deserialize<'de> for PrimitiveStatusEnum {
    fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
    where
        D: ::enumforge_core::serde::Deserializer<'de>,
    {
        let node = <::enumforge_core::serde_value::Value as ::enumforge_core::serde::Deserialize>::deserialize(deserializer)?;
        Self::from_node(&node).map_err(<D::Error as ::enumforge_core::serde::de::Error>::custom)
    }
}


// ==================== TokenRequestStatus ====================

/// Type-safe wrapper around the [`TokenRequestStatus`] constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TokenRequestStatusEnum {
    raw: i64,
}

/// Every declared [`TokenRequestStatusEnum`] member.
pub struct TokenRequestStatusContainer {
    /// step one started (PENDING)
    pub step_one_initialized: TokenRequestStatusEnum,
    /// marked as approved (PENDING)
    pub step_one_mark_allowed: TokenRequestStatusEnum,
    /// user canceled, process ended (CANCELED)
    pub step_one_canceled: TokenRequestStatusEnum,
    /// process finished
    pub step_four_success: TokenRequestStatusEnum,
}

pub static TOKEN_REQUEST_STATUSES: ::enumforge_core::once_cell::sync::Lazy<TokenRequestStatusContainer> = ::enumforge_core::once_cell::sync::Lazy::new(|| TokenRequestStatusContainer {
    step_one_initialized: TokenRequestStatusEnum { raw: STEP_ONE_INITIALIZED },
    step_one_mark_allowed: TokenRequestStatusEnum { raw: STEP_ONE_MARK_ALLOWED },
    step_one_canceled: TokenRequestStatusEnum { raw: STEP_ONE_CANCELED },
    step_four_success: TokenRequestStatusEnum { raw: STEP_FOUR_SUCCESS },
});

static TOKEN_REQUEST_STATUS_INDEX: ::enumforge_core::once_cell::sync::Lazy<::enumforge_core::EnumIndex<TokenRequestStatusEnum>> = ::enumforge_core::once_cell::sync::Lazy::new(|| {
    ::enumforge_core::EnumIndex::new(vec![
        ::enumforge_core::IndexEntry::new(TokenRequestStatusEnum { raw: STEP_ONE_INITIALIZED }, "StepOneInitialized"),
        ::enumforge_core::IndexEntry::new(TokenRequestStatusEnum { raw: STEP_ONE_MARK_ALLOWED }, "StepOneMarkAllowed"),
        ::enumforge_core::IndexEntry::new(TokenRequestStatusEnum { raw: STEP_ONE_CANCELED }, "StepOneCanceled"),
        ::enumforge_core::IndexEntry::new(TokenRequestStatusEnum { raw: STEP_FOUR_SUCCESS }, "Completed"),
    ])
});

impl TokenRequestStatusEnum {
    pub const STEP_ONE_INITIALIZED_NAME: &str = "StepOneInitialized";
    pub const STEP_ONE_MARK_ALLOWED_NAME: &str = "StepOneMarkAllowed";
    pub const STEP_ONE_CANCELED_NAME: &str = "StepOneCanceled";
    pub const STEP_FOUR_SUCCESS_NAME: &str = "Completed";

    /// The invalid sentinel: the zero raw value.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Every declared member in declaration order.
    pub fn all() -> &'static [Self] {
        TOKEN_REQUEST_STATUS_INDEX.values()
    }

    pub fn is_valid(&self) -> bool {
        TOKEN_REQUEST_STATUS_INDEX.is_valid(&self.raw)
    }

    /// Looks a member up by name or alias. Unknown input yields the invalid sentinel.
    pub fn parse(name: &str) -> ::enumforge_core::Result<Self> {
        match TOKEN_REQUEST_STATUS_INDEX.find_by_name(name).copied() {
            Some(found) => Ok(found),
            None => Ok(Self::invalid()),
        }
    }

    /// Looks a member up by raw value. Unknown input yields the invalid sentinel.
    pub fn parse_raw(raw: i64) -> ::enumforge_core::Result<Self> {
        match TOKEN_REQUEST_STATUS_INDEX.find_by_value(&raw).copied() {
            Some(found) => Ok(found),
            None => Ok(Self::invalid()),
        }
    }

    /// Looks a member up by name from text or bytes, or by value from a
    /// number of any width. Unknown input yields the invalid sentinel.
    pub fn parse_any(input: &::enumforge_core::RawValue) -> ::enumforge_core::Result<Self> {
        match ::enumforge_core::lookup::find_any::<Self>(input)? {
            Some(found) => Ok(found),
            None => Ok(Self::invalid()),
        }
    }
}

impl ::std::fmt::Display for TokenRequestStatusEnum {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&<Self as ::enumforge_core::Enum>::name(self))
    }
}

impl ::enumforge_core::Enum for TokenRequestStatusEnum {
    type Raw = i64;
    const TYPE_NAME: &'static str = "TokenRequestStatus";

    fn raw_value(&self) -> i64 {
        self.raw
    }

    fn name(&self) -> ::std::borrow::Cow<'static, str> {
        match TOKEN_REQUEST_STATUS_INDEX.name_of(&self.raw) {
            Some(name) => ::std::borrow::Cow::Borrowed(name),
            None => ::std::borrow::Cow::Owned(<Self as ::enumforge_core::Enum>::fallback_name(self)),
        }
    }

    fn is_valid(&self) -> bool {
        TOKEN_REQUEST_STATUS_INDEX.is_valid(&self.raw)
    }

    fn find_by_name(name: &str) -> Option<Self> {
        TOKEN_REQUEST_STATUS_INDEX.find_by_name(name).copied()
    }

    fn find_by_value(value: &i64) -> Option<Self> {
        TOKEN_REQUEST_STATUS_INDEX.find_by_value(value).copied()
    }

    fn serde_format() -> ::enumforge_core::SerdeFormat {
        ::enumforge_core::SerdeFormat::Value
    }

    fn all() -> &'static [Self] {
        TOKEN_REQUEST_STATUS_INDEX.values()
    }
}

impl TokenRequestStatusEnum {
    pub fn to_json(&self) -> ::enumforge_core::Result<Vec<u8>> {
        ::enumforge_core::codec::json::encode(self)
    }

    pub fn from_json(data: &[u8]) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::json::decode(data)
    }
}

impl TokenRequestStatusEnum {
    pub fn to_driver_value(&self) -> ::enumforge_core::Result<::enumforge_core::DriverValue> {
        ::enumforge_core::codec::sql::value(self)
    }

    /// Scans a driver value into `self`. A null source leaves `self` unchanged.
    pub fn scan(&mut self, source: &::enumforge_core::RawValue) -> ::enumforge_core::Result<()> {
        ::enumforge_core::codec::sql::scan(self, source)
    }
}

