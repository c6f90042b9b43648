//! Palette colors stored as hex strings.

/// enumforge: -json -text -binary -yaml -sql -serde/value -uppercaseFields
pub type Color = &'static str;

/// Red, Crimson
pub const RED: Color = "#ff0000";
/// Green
pub const GREEN: Color = "#00ff00";
/// Blue; primary accent
pub const BLUE: Color = "#0000ff";

include!("color_enums.rs");
