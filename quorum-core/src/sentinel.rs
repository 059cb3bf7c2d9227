//! The explicit missing-value sentinel.
//!
//! Connectors model missing upstream fields as `None`; presentation code
//! renders them with [`SENTINEL`] so partial results stay readable instead of
//! failing the whole action.

/// Placeholder rendered in place of a missing or unobtainable field.
pub const SENTINEL: &str = "N/A";

/// Render an optional field, substituting the sentinel when absent.
#[must_use]
pub fn or_sentinel(value: Option<&str>) -> &str {
    value.unwrap_or(SENTINEL)
}
