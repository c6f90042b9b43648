// Code generated by enumforge 0.1.0. DO NOT EDIT.
// Source: color.rs
// Command: enumforge generate color.rs

// ==================== Color ====================

/// Type-safe wrapper around the [`Color`] constants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColorEnum {
    raw: String,
}

/// Every declared [`ColorEnum`] member.
#[allow(non_snake_case)]
pub struct ColorContainer {
    pub RED: ColorEnum,
    pub GREEN: ColorEnum,
    /// primary accent
    pub BLUE: ColorEnum,
}

pub static COLORS: ::enumforge_core::once_cell::sync::Lazy<ColorContainer> = ::enumforge_core::once_cell::sync::Lazy::new(|| ColorContainer {
    RED: ColorEnum { raw: RED.to_string() },
    GREEN: ColorEnum { raw: GREEN.to_string() },
    BLUE: ColorEnum { raw: BLUE.to_string() },
});

static COLOR_INDEX: ::enumforge_core::once_cell::sync::Lazy<::enumforge_core::EnumIndex<ColorEnum>> = ::enumforge_core::once_cell::sync::Lazy::new(|| {
    ::enumforge_core::EnumIndex::new(vec![
        ::enumforge_core::IndexEntry::new(ColorEnum { raw: RED.to_string() }, "Red").with_aliases(&["Crimson"]),
        ::enumforge_core::IndexEntry::new(ColorEnum { raw: GREEN.to_string() }, "Green"),
        ::enumforge_core::IndexEntry::new(ColorEnum { raw: BLUE.to_string() }, "Blue"),
    ])
});

impl ColorEnum {
    /// The invalid sentinel: the zero raw value.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Every declared member in declaration order.
    pub fn all() -> &'static [Self] {
        COLOR_INDEX.values()
    }

    pub fn is_valid(&self) -> bool {
        COLOR_INDEX.is_valid(&self.raw)
    }

    /// Looks a member up by name or alias. Unknown input yields the invalid sentinel.
    pub fn parse(name: &str) -> ::enumforge_core::Result<Self> {
        match COLOR_INDEX.find_by_name(name).cloned() {
            Some(found) => Ok(found),
            None => Ok(Self::invalid()),
        }
    }

    /// Looks a member up by raw value. Unknown input yields the invalid sentinel.
    pub fn parse_raw(raw: String) -> ::enumforge_core::Result<Self> {
        match COLOR_INDEX.find_by_value(&raw).cloned() {
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

impl ::std::fmt::Display for ColorEnum {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&<Self as ::enumforge_core::Enum>::name(self))
    }
}

impl ::enumforge_core::Enum for ColorEnum {
    type Raw = String;
    const TYPE_NAME: &'static str = "Color";

    fn raw_value(&self) -> String {
        self.raw.clone()
    }

    fn name(&self) -> ::std::borrow::Cow<'static, str> {
        match COLOR_INDEX.name_of(&self.raw) {
            Some(name) => ::std::borrow::Cow::Borrowed(name),
            None => ::std::borrow::Cow::Owned(<Self as ::enumforge_core::Enum>::fallback_name(self)),
        }
    }

    fn is_valid(&self) -> bool {
        COLOR_INDEX.is_valid(&self.raw)
    }

    fn find_by_name(name: &str) -> Option<Self> {
        COLOR_INDEX.find_by_name(name).cloned()
    }

    fn find_by_value(value: &String) -> Option<Self> {
        COLOR_INDEX.find_by_value(value).cloned()
    }

    fn serde_format() -> ::enumforge_core::SerdeFormat {
        ::enumforge_core::SerdeFormat::Value
    }

    fn all() -> &'static [Self] {
        COLOR_INDEX.values()
    }
}

impl ColorEnum {
    pub fn to_json(&self) -> ::enumforge_core::Result<Vec<u8>> {
        ::enumforge_core::codec::json::encode(self)
    }

    pub fn from_json(data: &[u8]) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::json::decode(data)
    }
}

impl ColorEnum {
    pub fn to_text(&self) -> ::enumforge_core::Result<String> {
        ::enumforge_core::codec::text::encode(self)
    }

    pub fn from_text(text: &str) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::text::decode(text)
    }
}

impl ::std::str::FromStr for ColorEnum {
    type Err = ::enumforge_core::EnumforgeError;

    fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

impl ColorEnum {
    pub fn to_binary(&self) -> ::enumforge_core::Result<Vec<u8>> {
        ::enumforge_core::codec::binary::encode(self)
    }

    pub fn from_binary(data: &[u8]) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::binary::decode(data)
    }
}

impl ColorEnum {
    pub fn to_node(&self) -> ::enumforge_core::Result<::enumforge_core::serde_value::Value> {
        ::enumforge_core::codec::node::encode(self)
    }

    pub fn from_node<N: ::enumforge_core::StructuredNode + ?Sized>(node: &N) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::node::decode(node)
    }
}

impl ::enumforge_core::serde::Serialize for ColorEnum {
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

impl<'de> ::enumforge_core::serde::Deserialize<'de> for ColorEnum {
    fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
    where
        D: ::enumforge_core::serde::Deserializer<'de>,
    {
        let node = <::enumforge_core::serde_value::Value as ::enumforge_core::serde::Deserialize>::deserialize(deserializer)?;
        Self::from_node(&node).map_err(<D::Error as ::enumforge_core::serde::de::Error>::custom)
    }
}

impl ColorEnum {
    pub fn to_driver_value(&self) -> ::enumforge_core::Result<::enumforge_core::DriverValue> {
        ::enumforge_core::codec::sql::value(self)
    }

    /// Scans a driver value into `self`. A null source leaves `self` unchanged.
    pub fn scan(&mut self, source: &::enumforge_core::RawValue) -> ::enumforge_core::Result<()> {
        ::enumforge_core::codec::sql::scan(self, source)
    }
}

