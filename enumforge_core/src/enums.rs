//! The enum capability contract and the per-type name/value index.

use crate::primitive::{Primitive, RawValue, encode_binary, encode_text};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// How an enum is represented by the serialization codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerdeFormat {
    /// Serialize the canonical name.
    #[default]
    Name,
    /// Serialize the raw value.
    Value,
}

impl fmt::Display for SerdeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerdeFormat::Name => f.write_str("name"),
            SerdeFormat::Value => f.write_str("value"),
        }
    }
}

/// Capabilities every generated enum type provides.
///
/// Codecs are free functions generic over this trait; nothing inherits from
/// anything.
pub trait Enum: Sized + Clone + fmt::Debug + Send + Sync + 'static {
    /// The primitive the constants are declared with.
    type Raw: Primitive;

    /// Name of the declaring type, used to synthesize names for unregistered values.
    const TYPE_NAME: &'static str;

    fn raw_value(&self) -> Self::Raw;

    /// The canonical name, or `"<lowercasetypename>(<raw>)"` when unregistered.
    fn name(&self) -> Cow<'static, str>;

    fn is_valid(&self) -> bool;

    /// Finds a member by canonical name or alias.
    fn find_by_name(name: &str) -> Option<Self>;

    fn find_by_value(value: &Self::Raw) -> Option<Self>;

    fn serde_format() -> SerdeFormat;

    /// Every declared member in declaration order.
    fn all() -> &'static [Self];

    /// Fallback name for a raw value that has no registered member.
    fn fallback_name(&self) -> String {
        let raw = encode_text(&self.raw_value().to_raw()).unwrap_or_default();
        format!("{}({})", Self::TYPE_NAME.to_lowercase(), raw)
    }
}

/// One row of the static member table.
#[derive(Debug, Clone)]
pub struct IndexEntry<E: Enum> {
    pub value: E,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub valid: bool,
}

impl<E: Enum> IndexEntry<E> {
    pub fn new(value: E, name: &'static str) -> Self {
        Self {
            value,
            name,
            aliases: &[],
            valid: true,
        }
    }

    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Marks the member as declared but not valid.
    pub fn invalid(mut self) -> Self {
        self.valid = false;
        self
    }
}

/// Name and value lookup tables for one enum type.
///
/// Built once from the generated member table and read-only afterwards, so
/// a shared reference can be used from any number of threads.
#[derive(Debug)]
pub struct EnumIndex<E: Enum> {
    values: Vec<E>,
    raws: Vec<E::Raw>,
    names: Vec<&'static str>,
    valid: Vec<bool>,
    by_name: HashMap<String, usize>,
    by_raw: HashMap<Vec<u8>, usize>,
    case_insensitive: bool,
}

impl<E: Enum> EnumIndex<E> {
    pub fn new(entries: Vec<IndexEntry<E>>) -> Self {
        Self::build(entries, false)
    }

    /// Builds an index that also accepts lower-cased names and aliases.
    pub fn case_insensitive(entries: Vec<IndexEntry<E>>) -> Self {
        Self::build(entries, true)
    }

    fn build(entries: Vec<IndexEntry<E>>, case_insensitive: bool) -> Self {
        let mut index = Self {
            values: Vec::with_capacity(entries.len()),
            raws: Vec::with_capacity(entries.len()),
            names: Vec::with_capacity(entries.len()),
            valid: Vec::with_capacity(entries.len()),
            by_name: HashMap::new(),
            by_raw: HashMap::new(),
            case_insensitive,
        };

        for (position, entry) in entries.into_iter().enumerate() {
            let keys = std::iter::once(entry.name).chain(entry.aliases.iter().copied());
            for key in keys {
                // First declaration wins for duplicated names.
                index.by_name.entry(key.to_string()).or_insert(position);
                if case_insensitive {
                    index.by_name.entry(key.to_lowercase()).or_insert(position);
                }
            }
            let raw = entry.value.raw_value();
            if let Some(key) = raw_key(&raw) {
                index.by_raw.entry(key).or_insert(position);
            }
            index.raws.push(raw);
            index.names.push(entry.name);
            index.valid.push(entry.valid);
            index.values.push(entry.value);
        }

        index
    }

    pub fn find_by_name(&self, name: &str) -> Option<&E> {
        let position = match self.by_name.get(name) {
            Some(position) => Some(*position),
            None if self.case_insensitive => self.by_name.get(&name.to_lowercase()).copied(),
            None => None,
        }?;
        self.values.get(position)
    }

    pub fn find_by_value(&self, raw: &E::Raw) -> Option<&E> {
        self.position_of(raw).and_then(|position| self.values.get(position))
    }

    /// Canonical name registered for a raw value.
    pub fn name_of(&self, raw: &E::Raw) -> Option<&'static str> {
        self.position_of(raw).map(|position| self.names[position])
    }

    /// Whether a raw value belongs to a member that is not marked invalid.
    pub fn is_valid(&self, raw: &E::Raw) -> bool {
        self.position_of(raw)
            .is_some_and(|position| self.valid[position])
    }

    pub fn values(&self) -> &[E] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn position_of(&self, raw: &E::Raw) -> Option<usize> {
        match raw_key(raw) {
            Some(key) => self.by_raw.get(&key).copied(),
            None => self.raws.iter().position(|candidate| candidate == raw),
        }
    }
}

/// Hash key for a raw value: its binary encoding, with signed zeros folded
/// together so float keys agree with `==`.
fn raw_key<R: Primitive>(raw: &R) -> Option<Vec<u8>> {
    match raw.to_raw() {
        RawValue::F32(f) if f == 0.0 => Some(0f32.to_be_bytes().to_vec()),
        RawValue::F64(f) if f == 0.0 => Some(0f64.to_be_bytes().to_vec()),
        RawValue::F32(f) if f.is_nan() => None,
        RawValue::F64(f) if f.is_nan() => None,
        other => encode_binary(&other).ok(),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_name_and_fallback_name() {
        assert_eq!(Status { raw: 1 }.name(), "Active");
        assert_eq!(Status { raw: 42 }.name(), "status(42)");
        assert_eq!(Weight { raw: 0.25 }.name(), "weight(0.25)");
    }

    #[test]
    fn test_validity() {
        assert!(Status { raw: 1 }.is_valid());
        assert!(!Status { raw: 0 }.is_valid());
        assert!(!Status { raw: 42 }.is_valid());
    }

    #[test]
    fn test_find_by_name_uses_aliases() {
        assert_eq!(Status::find_by_name("Active"), Some(Status { raw: 1 }));
        assert_eq!(Status::find_by_name("On"), Some(Status { raw: 1 }));
        assert_eq!(Status::find_by_name("active"), None);
        assert_eq!(Status::find_by_name("Nope"), None);
    }

    #[test]
    fn test_case_insensitive_index() {
        assert_eq!(Color::find_by_name("red").map(|c| c.raw), Some("#ff0000".into()));
        assert_eq!(Color::find_by_name("GREEN").map(|c| c.raw), Some("#00ff00".into()));
    }

    #[test]
    fn test_invalid_members_are_still_findable() {
        assert_eq!(Status::find_by_value(&0), Some(Status { raw: 0 }));
        assert_eq!(Status::find_by_name("Unknown"), Some(Status { raw: 0 }));
    }

    #[test]
    fn test_all_preserves_declaration_order() {
        let raws: Vec<i32> = Status::all().iter().map(|s| s.raw).collect();
        assert_eq!(raws, vec![0, 1, 2]);
        assert_eq!(STATUS_INDEX.len(), 3);
    }

    #[test]
    fn test_first_duplicate_name_wins() {
        let index = EnumIndex::new(vec![
            IndexEntry::new(Status { raw: 1 }, "Same"),
            IndexEntry::new(Status { raw: 2 }, "Same"),
        ]);
        assert_eq!(index.find_by_name("Same"), Some(&Status { raw: 1 }));
    }

    #[test]
    fn test_first_duplicate_value_wins() {
        let index = EnumIndex::new(vec![
            IndexEntry::new(Status { raw: 1 }, "First"),
            IndexEntry::new(Status { raw: 1 }, "Second"),
        ]);
        assert_eq!(index.name_of(&1), Some("First"));
        assert_eq!(index.find_by_value(&3), None);
    }

    #[test]
    fn test_float_values_follow_equality() {
        let index = EnumIndex::new(vec![
            IndexEntry::new(Weight { raw: 0.0 }, "Zero"),
            IndexEntry::new(Weight { raw: 0.1 }, "Tenth"),
        ]);
        assert_eq!(index.name_of(&-0.0), Some("Zero"));
        assert_eq!(index.name_of(&0.1), Some("Tenth"));
        assert_eq!(index.name_of(&f32::NAN), None);
    }

    #[test]
    fn test_byte_values_are_indexed() {
        assert_eq!(Magic::find_by_value(&b"GIF".to_vec()).map(|m| m.name()), Some("Gif".into()));
        assert!(Magic::find_by_value(&b"GI".to_vec()).is_none());
        assert!(Magic { raw: b"PNG".to_vec() }.is_valid());
    }

    #[test]
    fn test_index_is_shareable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| Status::find_by_value(&2).map(|s| s.raw)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(2));
        }
    }

    #[test]
    fn test_serde_format_text() {
        assert_eq!(SerdeFormat::default(), SerdeFormat::Name);
        assert_eq!(SerdeFormat::Value.to_string(), "value");
    }
}
