//! File signatures keyed by their leading bytes.

/// enumforge: -json -text -binary -sql -serde/value
pub type Magic = &'static [u8];

/// Png, PNG
pub const MAGIC_PNG: Magic = b"\x89PNG";
/// Gif; GIF87a and GIF89a share this prefix
pub const MAGIC_GIF: Magic = b"GIF8";
/// Pdf
pub const MAGIC_PDF: Magic = b"%PDF";

include!("magic_enums.rs");
