//! Nullable-value dispatch.
//!
//! Absence is a normal case here, not a failure: an empty value collapses
//! to a default instead of producing an error.

/// Value returned for an empty nullable integer.
pub const DEFAULT_VALUE: i32 = 0;

/// Returns the contained value, or [`DEFAULT_VALUE`] when empty.
pub fn process_optional(value: Option<i32>) -> i32 {
    process_optional_or(value, DEFAULT_VALUE)
}

/// Returns the contained value, or `default` when empty.
pub fn process_optional_or(value: Option<i32>, default: i32) -> i32 {
    value.unwrap_or(default)
}
