//! Format codecs.
//!
//! Each codec is an `encode`/`decode` pair of free functions generic over
//! [`Enum`](crate::enums::Enum). They only decide between the name and the raw
//! value according to the type's [`SerdeFormat`](crate::enums::SerdeFormat)
//! and delegate the conversion itself to [`crate::primitive`]. Every decode
//! funnels through [`crate::lookup::resolve`].

pub mod binary;
pub mod json;
pub mod node;
pub mod sql;
pub mod text;

pub use node::StructuredNode;
pub use sql::DriverValue;
