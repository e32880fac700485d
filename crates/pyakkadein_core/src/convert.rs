//! Julian Day Number ⇄ Myanmar date conversion.
//!
//! Month boundaries inside a year are recovered from the day count since
//! Tagu 1 with the mean month length 29.544, adjusted for the extra month
//! of watat years and the extra Nayon day of big watat years. Days past the
//! end of the year belong to Late Tagu and Late Kason. A Myanmar year runs
//! from one new year's day to the next, so the Tagu days before the new
//! year and the late-month days after the next one belong to neighbouring
//! years.
//!
//! Clean-room: day-count formulas of the published Myanmar calendar
//! algorithm, public domain.

use crate::date::MyanmarDate;
use crate::error::CalendarError;
use crate::month::MonthOfYear;
use crate::year::{YearInfo, supported_jdn_range, year_info, year_of_jdn, year_span};

/// Day number of a Julian Date: `floor(jd)`.
///
/// Civil dates carry the JD of their noon, so `2460418.0` and `2460418.9`
/// both name 2024-04-17.
pub fn day_number(jd: f64) -> i64 {
    jd.floor() as i64
}

/// Myanmar date of a Julian Day Number.
///
/// JDNs outside [`supported_jdn_range`] are clamped to its nearest end.
pub fn jdn_to_myanmar(jdn: i64) -> MyanmarDate {
    let jdn = clamp_to_supported(jdn);
    let info = year_info(year_of_jdn(jdn));
    jdn_in_year(jdn, &info)
}

pub(crate) fn clamp_to_supported(jdn: i64) -> i64 {
    let range = supported_jdn_range();
    jdn.clamp(*range.start(), *range.end())
}

/// Myanmar date of a real Julian Date, using [`day_number`].
pub fn julian_to_myanmar(jd: f64) -> MyanmarDate {
    jdn_to_myanmar(day_number(jd))
}

/// Julian Day Number of a Myanmar date given as year, month and day.
///
/// Fails if the month does not occur in the year, the day is outside the
/// month's length, or the day falls outside the year's span (e.g. Tagu 1 of
/// a year whose new year's day comes later in Tagu).
pub fn myanmar_to_julian(year: i32, month: MonthOfYear, day: u8) -> Result<i64, CalendarError> {
    validate(year, month, day).map(|(_, jdn)| jdn)
}

/// Validate a date and resolve its JDN.
pub(crate) fn validate(
    year: i32,
    month: MonthOfYear,
    day: u8,
) -> Result<(MyanmarDate, i64), CalendarError> {
    let info = year_info(year);
    let date = MyanmarDate::with_year_type(year, month, day, info.year_type)?;
    let jdn = jdn_of(month, day, &info);
    if !year_span(year).contains(&jdn) {
        return Err(CalendarError::DateNotInYear {
            year,
            month: month.name(),
            day,
        });
    }
    Ok((date, jdn))
}

/// Julian Day Number of a validated date.
pub(crate) fn date_to_jdn(date: &MyanmarDate) -> i64 {
    jdn_of(date.month(), date.day(), &year_info(date.year()))
}

/// JDN of day 1 of `month`, whichever year that day belongs to.
pub(crate) fn month_start_jdn(month: MonthOfYear, info: &YearInfo) -> i64 {
    jdn_of(month, 1, info)
}

fn jdn_in_year(jdn: i64, info: &YearInfo) -> MyanmarDate {
    let year_type = info.year_type;
    let b = i64::from(year_type.index() / 2);
    let c = i64::from(!year_type.is_watat());
    let year_length = info.length();

    let mut dd = jdn - info.first_day_jdn + 1;
    let late = (dd - 1).div_euclid(year_length);
    dd -= late * year_length;

    let a = (dd + 423).div_euclid(512);
    let mm = (((dd - b * a + c * a * 30) as f64 + 29.26) / 29.544).floor() as i64;
    let e = (mm + 12).div_euclid(16);
    let f = (mm + 11).div_euclid(16);
    let md = dd - (29.544 * mm as f64 - 29.26).floor() as i64 - b * e + c * f * 30;
    let number = mm + f * 3 - e * 4 + 12 * late;

    debug_assert!((0..=14).contains(&number), "month number {number} for JDN {jdn}");
    debug_assert!((1..=30).contains(&md), "day {md} for JDN {jdn}");
    MyanmarDate::from_parts(
        info.year,
        MonthOfYear::from_day_count(number as u8),
        md as u8,
        year_type,
    )
}

fn jdn_of(month: MonthOfYear, day: u8, info: &YearInfo) -> i64 {
    let year_type = info.year_type;
    let b = i64::from(year_type.index() / 2);
    let c = i64::from(!year_type.is_watat());

    let number = i64::from(month.number());
    let late = number / 13;
    let mut mm = number % 13 + late;
    mm += 4 - ((mm + 15) / 16) * 4 + (mm + 12) / 16;

    let dd = i64::from(day) + (29.544 * mm as f64 - 29.26).floor() as i64
        - c * ((mm + 11) / 16) * 30
        + b * ((mm + 12) / 16)
        + late * info.length();
    dd + info.first_day_jdn - 1
}
