//! Validated Myanmar calendar date.

use std::fmt::{Display, Formatter};

use crate::convert::{date_to_jdn, validate};
use crate::error::CalendarError;
use crate::month::{MonthOfYear, MyanmarMonth};
use crate::props::{MoonPhase, fortnight_day, month_length, moon_phase};
use crate::year::YearType;

/// A day of the Myanmar calendar.
///
/// The year type is carried with the date because month lengths and the
/// existence of First Waso depend on it. Dates order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MyanmarDate {
    year: i32,
    month: MonthOfYear,
    day: u8,
    year_type: YearType,
}

impl MyanmarDate {
    /// Create a validated date.
    ///
    /// Fails if First Waso is requested in a common year, if `day` is outside
    /// the month's length, or if the day lies outside the year that runs
    /// from new year's day of `year` to the next one. Tagu 1 of ME 1386
    /// is therefore rejected: that day is ME 1385 Late Tagu 1.
    pub fn new(year: i32, month: MonthOfYear, day: u8) -> Result<Self, CalendarError> {
        validate(year, month, day).map(|(date, _)| date)
    }

    /// Create a validated date when the year type is already known.
    pub(crate) fn with_year_type(
        year: i32,
        month: MonthOfYear,
        day: u8,
        year_type: YearType,
    ) -> Result<Self, CalendarError> {
        if !month.occurs_in(year_type) {
            return Err(CalendarError::MonthNotInYear {
                year,
                month: month.name(),
            });
        }
        let max_day = month_length(month, year_type);
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.name(),
                max_day,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            year_type,
        })
    }

    /// Construct without validation; used by the forward conversion whose
    /// output is valid by construction.
    pub(crate) const fn from_parts(
        year: i32,
        month: MonthOfYear,
        day: u8,
        year_type: YearType,
    ) -> Self {
        Self {
            year,
            month,
            day,
            year_type,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> MonthOfYear {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn year_type(&self) -> YearType {
        self.year_type
    }

    /// Number of days in this date's month.
    pub fn month_length(&self) -> u8 {
        month_length(self.month, self.year_type)
    }

    pub fn moon_phase(&self) -> MoonPhase {
        moon_phase(self.day, self.month, self.year_type)
    }

    pub fn fortnight_day(&self) -> u8 {
        fortnight_day(self.day)
    }

    /// Julian Day Number of this date.
    pub fn to_jdn(&self) -> i64 {
        date_to_jdn(self)
    }

    /// Whether this is the (second) Waso of a watat year.
    pub fn is_second_waso(&self) -> bool {
        self.month.month() == MyanmarMonth::Waso && self.year_type.is_watat()
    }
}

impl Display for MyanmarDate {
    /// `ME 1386 Kason 15`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ME {} {} {}",
            self.year,
            self.month.name_in(self.year_type),
            self.day
        )
    }
}
