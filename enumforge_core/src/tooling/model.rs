//! What the scanner extracts and the emitter consumes.

use super::config::EnumTypeConfig;
use crate::primitive::RawKind;
use convert_case::{Case, Casing};
use std::path::PathBuf;

/// One declared constant of an enum family.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    /// The constant's identifier, e.g. `STRING_ACTIVE`.
    pub ident: String,
    /// The literal as written, ready to be re-emitted.
    pub literal: String,
    /// Canonical name first, then extra aliases.
    pub aliases: Vec<String>,
    pub valid: bool,
    pub comment: Option<String>,
}

impl EnumMember {
    /// The canonical name: the first alias, or the identifier in PascalCase.
    pub fn name(&self) -> String {
        self.aliases
            .first()
            .cloned()
            .unwrap_or_else(|| self.ident.to_case(Case::Pascal))
    }

    /// Every name the member answers to, canonical name first, without duplicates.
    ///
    /// Case folding is left to the runtime index.
    pub fn lookup_names(&self) -> Vec<String> {
        let mut names = vec![self.name()];
        for alias in self.aliases.iter().skip(1) {
            if !names.contains(alias) {
                names.push(alias.clone());
            }
        }
        names
    }

    /// Field name in the generated container.
    pub fn field_name(&self, uppercase: bool) -> String {
        if uppercase {
            self.ident.to_case(Case::UpperSnake)
        } else {
            self.ident.to_case(Case::Snake)
        }
    }
}

/// An enum family: the raw type alias plus its constants.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    /// The alias name, e.g. `StringStatus`.
    pub type_name: String,
    /// The alias target as written, e.g. `i32` or `&'static str`.
    pub underlying: String,
    pub kind: RawKind,
    /// The owned Rust type the wrapper stores.
    pub raw_type: String,
    pub members: Vec<EnumMember>,
    pub config: EnumTypeConfig,
}

impl EnumType {
    /// `StringStatusEnum`
    pub fn wrapper_name(&self) -> String {
        format!("{}Enum", self.type_name.to_case(Case::Pascal))
    }

    /// `StringStatusContainer`
    pub fn container_type(&self) -> String {
        format!("{}Container", self.type_name.to_case(Case::Pascal))
    }

    /// `STRING_STATUSES`
    pub fn container_static(&self) -> String {
        pluralise(&self.type_name.to_case(Case::UpperSnake))
    }

    /// `STRING_STATUS_INDEX`
    pub fn index_static(&self) -> String {
        format!("{}_INDEX", self.type_name.to_case(Case::UpperSnake))
    }

    /// Expression turning the constant `ident` into the stored raw value.
    pub fn raw_expr(&self, ident: &str) -> String {
        match self.kind {
            RawKind::String => format!("{ident}.to_string()"),
            RawKind::Bytes => format!("{ident}.to_vec()"),
            _ => ident.to_string(),
        }
    }

    /// Whether the stored raw type is `Copy`.
    pub fn is_copy(&self) -> bool {
        !matches!(self.kind, RawKind::String | RawKind::Bytes)
    }

    /// Whether the stored raw type is `Eq + Hash`.
    pub fn is_hashable(&self) -> bool {
        !self.kind.is_float()
    }
}

/// Everything needed to emit one companion file.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub source_filename: String,
    pub output_path: PathBuf,
    pub enums: Vec<EnumType>,
    pub failfast: bool,
    pub insensitive: bool,
    pub version: &'static str,
}

/// Maps an alias target type to its raw kind and the owned type stored by the wrapper.
pub fn classify_underlying(underlying: &str) -> Option<(RawKind, &'static str)> {
    let compact: String = underlying.chars().filter(|c| !c.is_whitespace()).collect();
    Some(match compact.as_str() {
        "i8" => (RawKind::I8, "i8"),
        "i16" => (RawKind::I16, "i16"),
        "i32" => (RawKind::I32, "i32"),
        "i64" => (RawKind::I64, "i64"),
        "isize" => (RawKind::I64, "isize"),
        "u8" => (RawKind::U8, "u8"),
        "u16" => (RawKind::U16, "u16"),
        "u32" => (RawKind::U32, "u32"),
        "u64" => (RawKind::U64, "u64"),
        "usize" => (RawKind::U64, "usize"),
        "f32" => (RawKind::F32, "f32"),
        "f64" => (RawKind::F64, "f64"),
        "bool" => (RawKind::Bool, "bool"),
        "&str" | "&'staticstr" => (RawKind::String, "String"),
        "&[u8]" | "&'static[u8]" => (RawKind::Bytes, "Vec<u8>"),
        _ => return None,
    })
}

/// English plural of an UPPER_SNAKE identifier's last word.
pub fn pluralise(word: &str) -> String {
    fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
        suffixes.iter().any(|suffix| word.ends_with(suffix))
    }

    let upper = word.to_uppercase();
    if ends_with_any(&upper, &["S", "X", "Z", "CH", "SH"]) {
        format!("{word}ES")
    } else if upper.ends_with('Y')
        && !ends_with_any(&upper, &["AY", "EY", "IY", "OY", "UY"])
        && word.len() > 1
    {
        format!("{}IES", &word[..word.len() - 1])
    } else {
        format!("{word}S")
    }
}
