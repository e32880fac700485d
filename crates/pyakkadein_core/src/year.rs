//! Myanmar year analysis: year type, first day, and year length.
//!
//! A year's type follows from the gap between its own Waso full moon and
//! that of the closest earlier watat year: a 30-day gap makes a little
//! watat (intercalary month), a 31-day gap a big watat (intercalary month
//! plus an extra day in Nayon).

use std::ops::{Range, RangeInclusive};

use tracing::warn;

use crate::era::{MYANMAR_EPOCH, SOLAR_YEAR};
use crate::watat::{watat_info, watat_info_at};

/// Maximum distance searched backward for the previous watat year.
pub const MAX_WATAT_LOOKBACK: i32 = 3;

/// Kind of Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum YearType {
    /// 12 months, 354 days.
    Common,
    /// 13 months (second Waso), 384 days.
    LittleWatat,
    /// 13 months and a 30-day Nayon, 385 days.
    BigWatat,
}

/// All year types in index order.
pub const ALL_YEAR_TYPES: [YearType; 3] =
    [YearType::Common, YearType::LittleWatat, YearType::BigWatat];

impl YearType {
    /// 0 = common, 1 = little watat, 2 = big watat.
    pub const fn index(self) -> u8 {
        match self {
            Self::Common => 0,
            Self::LittleWatat => 1,
            Self::BigWatat => 2,
        }
    }

    /// Year type for an index; anything above 2 saturates to big watat.
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Common,
            1 => Self::LittleWatat,
            _ => Self::BigWatat,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::LittleWatat => "little watat",
            Self::BigWatat => "big watat",
        }
    }

    /// Whether the year has an intercalary month.
    pub const fn is_watat(self) -> bool {
        !matches!(self, Self::Common)
    }

    /// Number of days in a year of this type.
    pub const fn length(self) -> i64 {
        year_length(self)
    }
}

/// Number of days in a year of the given type: 354, 384 or 385.
pub const fn year_length(year_type: YearType) -> i64 {
    match year_type {
        YearType::Common => 354,
        YearType::LittleWatat => 384,
        YearType::BigWatat => 385,
    }
}

/// Analysis of one Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearInfo {
    /// The Myanmar Era year.
    pub year: i32,
    /// Common, little watat or big watat.
    pub year_type: YearType,
    /// JDN of the first day of Tagu ("tagu1"). The new year itself may begin
    /// a few days later, during the previous year's late Tagu.
    pub first_day_jdn: i64,
    /// JDN of the (second) Waso full moon.
    pub full_moon_jdn: i64,
    /// Whether the gap to the previous watat year was neither 30 nor 31 days.
    pub watat_error: bool,
    /// Distance in years to the previous watat year (1..=3).
    pub years_back: i32,
    /// Whether the backward search stopped at its bound without finding a
    /// watat year.
    pub search_exhausted: bool,
}

impl YearInfo {
    /// Number of days from Tagu 1 to the end of the year.
    pub fn length(&self) -> i64 {
        year_length(self.year_type)
    }
}

/// Analyse a Myanmar year.
///
/// Never fails. Inconsistencies are reported through
/// [`YearInfo::watat_error`] and [`YearInfo::search_exhausted`] and logged
/// at `warn` level.
pub fn year_info(year: i32) -> YearInfo {
    let this_year = watat_info(year);

    let mut years_back = 0;
    let mut previous = this_year;
    while years_back < MAX_WATAT_LOOKBACK {
        years_back += 1;
        previous = watat_info_at(i64::from(year) - i64::from(years_back));
        if previous.is_watat {
            break;
        }
    }
    let search_exhausted = !previous.is_watat;
    if search_exhausted {
        warn!(
            year,
            lookback = MAX_WATAT_LOOKBACK,
            "no watat year found within lookback bound"
        );
    }

    let mut watat_error = false;
    let (year_type, full_moon_jdn) = if this_year.is_watat {
        let gap_days = (this_year.full_moon_jdn - previous.full_moon_jdn).rem_euclid(354);
        if gap_days != 30 && gap_days != 31 {
            watat_error = true;
            warn!(year, gap_days, "watat full-moon gap is not 30 or 31 days");
        }
        let index = (gap_days / 31 + 1).clamp(1, 2) as u8;
        (YearType::from_index(index), this_year.full_moon_jdn)
    } else {
        (
            YearType::Common,
            previous.full_moon_jdn + 354 * i64::from(years_back),
        )
    };

    YearInfo {
        year,
        year_type,
        first_day_jdn: previous.full_moon_jdn + 354 * i64::from(years_back) - 102,
        full_moon_jdn,
        watat_error,
        years_back,
        search_exhausted,
    }
}

/// First JDN of the Myanmar year (the day after Thingyan Atat).
pub fn new_year_day(year: i32) -> i64 {
    new_year_day_at(f64::from(year))
}

fn new_year_day_at(year: f64) -> i64 {
    (MYANMAR_EPOCH + SOLAR_YEAR * year + 0.5).ceil() as i64
}

/// JDNs belonging to Myanmar year `year`: from its new year's day up to the
/// next one.
pub fn year_span(year: i32) -> Range<i64> {
    new_year_day(year)..new_year_day_at(f64::from(year) + 1.0)
}

/// JDNs whose Myanmar year fits in an `i32`.
pub fn supported_jdn_range() -> RangeInclusive<i64> {
    year_span(i32::MIN).start..=year_span(i32::MAX).end - 1
}

/// Myanmar year containing a JDN, by the solar-year count from the epoch.
///
/// Saturates at the `i32` bounds outside [`supported_jdn_range`].
pub fn year_of_jdn(jdn: i64) -> i32 {
    ((jdn as f64 - 0.5 - MYANMAR_EPOCH) / SOLAR_YEAR).floor() as i32
}
