//! Civil calendar collaborator for the Myanmar calendar engine.
//!
//! This crate provides:
//! - Proleptic Gregorian date validation and `YYYY-MM-DD` parsing
//! - Civil date ⇄ Julian Day Number conversion

pub mod civil;
pub mod error;

pub use civil::{CivilDate, J2000_JDN, days_in_month, is_leap_year};
pub use error::TimeError;
