//! Error types for day search.

use pyakkadein_core::CalendarError;

/// Errors from building or running a day search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// End of the range precedes its start.
    #[error("invalid search range: end JDN {end} is before start JDN {start}")]
    InvalidRange { start: i64, end: i64 },
    /// Range longer than the configured limit.
    #[error("search span of {days} days exceeds the limit of {max} days")]
    SpanTooLarge { days: i64, max: i64 },
    /// Invalid calendar value in the criteria.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
