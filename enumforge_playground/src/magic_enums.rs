// Code generated by enumforge 0.1.0. DO NOT EDIT.
// Source: magic.rs
// Command: enumforge generate magic.rs

// ==================== Magic ====================

/// Type-safe wrapper around the [`Magic`] constants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MagicEnum {
    raw: Vec<u8>,
}

/// Every declared [`MagicEnum`] member.
pub struct MagicContainer {
    pub magic_png: MagicEnum,
    /// GIF87a and GIF89a share this prefix
    pub magic_gif: MagicEnum,
    pub magic_pdf: MagicEnum,
}

pub static MAGICS: ::enumforge_core::once_cell::sync::Lazy<MagicContainer> = ::enumforge_core::once_cell::sync::Lazy::new(|| MagicContainer {
    magic_png: MagicEnum { raw: MAGIC_PNG.to_vec() },
    magic_gif: MagicEnum { raw: MAGIC_GIF.to_vec() },
    magic_pdf: MagicEnum { raw: MAGIC_PDF.to_vec() },
});

static MAGIC_INDEX: ::enumforge_core::once_cell::sync::Lazy<::enumforge_core::EnumIndex<MagicEnum>> = ::enumforge_core::once_cell::sync::Lazy::new(|| {
    ::enumforge_core::EnumIndex::new(vec![
        ::enumforge_core::IndexEntry::new(MagicEnum { raw: MAGIC_PNG.to_vec() }, "Png").with_aliases(&["PNG"]),
        ::enumforge_core::IndexEntry::new(MagicEnum { raw: MAGIC_GIF.to_vec() }, "Gif"),
        ::enumforge_core::IndexEntry::new(MagicEnum { raw: MAGIC_PDF.to_vec() }, "Pdf"),
    ])
});

impl MagicEnum {
    /// The invalid sentinel: the zero raw value.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Every declared member in declaration order.
    pub fn all() -> &'static [Self] {
        MAGIC_INDEX.values()
    }

    pub fn is_valid(&self) -> bool {
        MAGIC_INDEX.is_valid(&self.raw)
    }

    /// Looks a member up by name or alias. Unknown input yields the invalid sentinel.
    pub fn parse(name: &str) -> ::enumforge_core::Result<Self> {
        match MAGIC_INDEX.find_by_name(name).cloned() {
            Some(found) => Ok(found),
            None => Ok(Self::invalid()),
        }
    }

    /// Looks a member up by raw value. Unknown input yields the invalid sentinel.
    pub fn parse_raw(raw: Vec<u8>) -> ::enumforge_core::Result<Self> {
        match MAGIC_INDEX.find_by_value(&raw).cloned() {
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

impl ::std::fmt::Display for MagicEnum {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&<Self as ::enumforge_core::Enum>::name(self))
    }
}

impl ::enumforge_core::Enum for MagicEnum {
    type Raw = Vec<u8>;
    const TYPE_NAME: &'static str = "Magic";

    fn raw_value(&self) -> Vec<u8> {
        self.raw.clone()
    }

    fn name(&self) -> ::std::borrow::Cow<'static, str> {
        match MAGIC_INDEX.name_of(&self.raw) {
            Some(name) => ::std::borrow::Cow::Borrowed(name),
            None => ::std::borrow::Cow::Owned(<Self as ::enumforge_core::Enum>::fallback_name(self)),
        }
    }

    fn is_valid(&self) -> bool {
        MAGIC_INDEX.is_valid(&self.raw)
    }

    fn find_by_name(name: &str) -> Option<Self> {
        MAGIC_INDEX.find_by_name(name).cloned()
    }

    fn find_by_value(value: &Vec<u8>) -> Option<Self> {
        MAGIC_INDEX.find_by_value(value).cloned()
    }

    fn serde_format() -> ::enumforge_core::SerdeFormat {
        ::enumforge_core::SerdeFormat::Value
    }

    fn all() -> &'static [Self] {
        MAGIC_INDEX.values()
    }
}

impl MagicEnum {
    pub fn to_json(&self) -> ::enumforge_core::Result<Vec<u8>> {
        ::enumforge_core::codec::json::encode(self)
    }

    pub fn from_json(data: &[u8]) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::json::decode(data)
    }
}

impl MagicEnum {
    pub fn to_text(&self) -> ::enumforge_core::Result<String> {
        ::enumforge_core::codec::text::encode(self)
    }

    pub fn from_text(text: &str) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::text::decode(text)
    }
}

impl ::std::str::FromStr for MagicEnum {
    type Err = ::enumforge_core::EnumforgeError;

    fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

impl MagicEnum {
    pub fn to_binary(&self) -> ::enumforge_core::Result<Vec<u8>> {
        ::enumforge_core::codec::binary::encode(self)
    }

    pub fn from_binary(data: &[u8]) -> ::enumforge_core::Result<Self> {
        ::enumforge_core::codec::binary::decode(data)
    }
}

impl MagicEnum {
    pub fn to_driver_value(&self) -> ::enumforge_core::Result<::enumforge_core::DriverValue> {
        ::enumforge_core::codec::sql::value(self)
    }

    /// Scans a driver value into `self`. A null source leaves `self` unchanged.
    pub fn scan(&mut self, source: &::enumforge_core::RawValue) -> ::enumforge_core::Result<()> {
        ::enumforge_core::codec::sql::scan(self, source)
    }
}

