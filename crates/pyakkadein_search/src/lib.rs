//! Day search over the Myanmar calendar.
//!
//! This crate provides:
//! - Criteria on year, month, moon phase, fortnight day and weekday
//! - Criteria on sabbath, sabbath eve, yatyaza, pyathada and thamanyo
//! - AND/OR combination and a bounded linear scan over a JDN range

pub mod error;
pub mod search;
pub mod search_types;

pub use error::SearchError;
pub use search::{DEFAULT_MAX_SPAN_DAYS, match_day, search_days};
pub use search_types::{CriterionKind, LogicMode, SearchCriteria, SearchHit};
