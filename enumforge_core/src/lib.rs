// enumforge - type-safe enums generated from typed constants, with a generic serialization core

pub mod codec;
pub mod enums;
pub mod error;
pub mod log;
pub mod lookup;
pub mod primitive;

// Source scanning, configuration and companion file emission
#[cfg(feature = "tooling")]
pub mod tooling;

// Re-export commonly used items for convenience
pub use codec::{DriverValue, StructuredNode};
pub use enums::{Enum, EnumIndex, IndexEntry, SerdeFormat};
pub use error::{EnumforgeError, Result};
pub use lookup::{Candidate, resolve};
pub use primitive::{Primitive, RawKind, RawValue};

// Generated companion files refer to these through `enumforge_core::`.
pub use once_cell;
pub use serde;
pub use serde_value;
