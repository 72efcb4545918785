//! Stable error codes exposed at the boundary.

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const DEPENDENCY_FAILURE: &str = "DEPENDENCY_FAILURE";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Maps an error to its stable code string.
pub trait ScribeErrorCode {
    fn error_code(&self) -> &'static str;
}
