//! Request and account statuses.

/// enumforge: -json -text -binary -yaml -serde/name
pub type StringStatus = i32;

/// invalid
pub const STRING_NONE: StringStatus = 0;
/// Active, On
pub const STRING_ACTIVE: StringStatus = 1;
/// Inactive, Off
pub const STRING_INACTIVE: StringStatus = 2;

/// enumforge: -json -text -binary -yaml -serde/value
pub type PrimitiveStatus = f32;

/// Active
pub const PRIMITIVE_ACTIVE: PrimitiveStatus = 1.5;
/// Inactive
pub const PRIMITIVE_INACTIVE: PrimitiveStatus = 2.5;

/// enumforge: -sql -json -serde/value -genName
pub type TokenRequestStatus = i64;

/// ; step one started (PENDING)
pub const STEP_ONE_INITIALIZED: TokenRequestStatus = 1000;
/// ; marked as approved (PENDING)
pub const STEP_ONE_MARK_ALLOWED: TokenRequestStatus = 1001;
/// ; user canceled, process ended (CANCELED)
pub const STEP_ONE_CANCELED: TokenRequestStatus = 9010;
/// Completed; process finished
pub const STEP_FOUR_SUCCESS: TokenRequestStatus = 4000;

include!("status_enums.rs");
