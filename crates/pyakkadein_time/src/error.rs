//! Error types for civil date handling.

/// Errors from civil date construction and parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month number outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },
    /// Day number outside the length of the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        max_day: u32,
    },
    /// Text did not match `YYYY-MM-DD`.
    #[error("expected YYYY-MM-DD, got {0:?}")]
    Parse(String),
}
