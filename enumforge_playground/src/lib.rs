//! Annotated constants together with their checked-in companions.
//!
//! Regenerate with `enumforge generate enumforge_playground/src`.

pub mod color;
pub mod magic;
pub mod status;

pub use color::ColorEnum;
pub use magic::MagicEnum;
pub use status::{PrimitiveStatusEnum, StringStatusEnum, TokenRequestStatusEnum};
