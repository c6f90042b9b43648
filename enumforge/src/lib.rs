pub mod cli;
pub mod commands;

pub use enumforge_core::{
    DriverValue, Enum, EnumIndex, EnumforgeError, IndexEntry, Primitive, RawKind, RawValue,
    Result, SerdeFormat, StructuredNode, codec, tooling,
};
