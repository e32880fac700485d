//! Error types for the Myanmar calendar engine.

/// Invalid caller input to the calendar engine.
///
/// The conversions themselves never fail: a watat consistency problem is
/// reported through [`crate::YearInfo::watat_error`], not through this type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Month number outside the traditional 0..=14 numbering.
    #[error("invalid month number: {month} (must be 0..=14)")]
    InvalidMonth { month: u8 },
    /// Only Tagu and Kason have late (year-end) counterparts.
    #[error("{month} has no late counterpart")]
    InvalidLateMonth { month: &'static str },
    /// Month name that does not match any Myanmar month.
    #[error("unknown month name: {0:?}")]
    UnknownMonth(String),
    /// First Waso only exists in watat years.
    #[error("{month} does not occur in ME {year}")]
    MonthNotInYear { year: i32, month: &'static str },
    /// Day that falls outside the year, before its new year's day or on
    /// or after the next one.
    #[error("{month} {day} does not fall within ME {year}")]
    DateNotInYear {
        year: i32,
        month: &'static str,
        day: u8,
    },
    /// Day outside 1..=month length.
    #[error("invalid day: {day} for {month} (max {max_day})")]
    InvalidDay {
        day: u8,
        month: &'static str,
        max_day: u8,
    },
    /// Weekday index outside 0..=6.
    #[error("invalid weekday index: {weekday} (must be 0..=6, 0 = Saturday)")]
    InvalidWeekday { weekday: u8 },
    /// Moon phase index outside 0..=3.
    #[error("invalid moon phase index: {phase} (must be 0..=3)")]
    InvalidMoonPhase { phase: u8 },
    /// Fortnight day outside 1..=15.
    #[error("invalid fortnight day: {day} (must be 1..=15)")]
    InvalidFortnightDay { day: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: "Tagu",
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for Tagu (max 29)");
    }

    #[test]
    fn display_month_not_in_year() {
        let err = CalendarError::MonthNotInYear {
            year: 1386,
            month: "First Waso",
        };
        assert_eq!(err.to_string(), "First Waso does not occur in ME 1386");
    }

    #[test]
    fn display_invalid_late_month() {
        let err = CalendarError::InvalidLateMonth { month: "Waso" };
        assert_eq!(err.to_string(), "Waso has no late counterpart");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
