//! Fully resolved calendar day.
//!
//! [`CalendarDay`] carries the date and the cheap derived properties.
//! Astrological attributes and observances are separate queries so callers
//! that need only the date do not pay for them.

use crate::astro::astrological_attributes;
use crate::astro_types::AstrologicalFlags;
use crate::convert::{clamp_to_supported, day_number, jdn_to_myanmar, month_start_jdn};
use crate::date::MyanmarDate;
use crate::error::CalendarError;
use crate::month::MonthOfYear;
use crate::props::{MoonPhase, SasanaReckoning, month_length, sasana_year};
use crate::weekday::{Weekday, weekday_from_jdn};
use crate::year::year_info;

/// One day of the Myanmar calendar with its derived properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// Julian Day Number.
    pub jdn: i64,
    /// Myanmar date.
    pub date: MyanmarDate,
    /// Weekday, 0 = Saturday.
    pub weekday: Weekday,
    pub moon_phase: MoonPhase,
    /// Day within the half-month (1..=15).
    pub fortnight_day: u8,
    /// Days in this month.
    pub month_length: u8,
    /// Sasana year, advancing with the Myanmar new year.
    pub sasana_year: i32,
}

/// Resolve the calendar day of a Julian Day Number.
///
/// JDNs beyond [`supported_jdn_range`](crate::year::supported_jdn_range)
/// resolve to its nearest end.
pub fn calendar_day_from_jdn(jdn: i64) -> CalendarDay {
    let jdn = clamp_to_supported(jdn);
    let date = jdn_to_myanmar(jdn);
    CalendarDay {
        jdn,
        date,
        weekday: weekday_from_jdn(jdn),
        moon_phase: date.moon_phase(),
        fortnight_day: date.fortnight_day(),
        month_length: date.month_length(),
        sasana_year: sasana_year(
            date.year(),
            date.month(),
            date.day(),
            SasanaReckoning::NewYear,
        ),
    }
}

/// Resolve the calendar day of a real Julian Date (`floor(jd)`).
pub fn calendar_day(jd: f64) -> CalendarDay {
    calendar_day_from_jdn(day_number(jd))
}

/// Astrological attributes of a resolved day.
pub fn astrological_flags(day: &CalendarDay) -> AstrologicalFlags {
    astrological_attributes(
        day.date.year(),
        day.date.month(),
        day.date.day(),
        day.date.year_type(),
        day.weekday,
    )
}

/// Every day of `month` in Myanmar year `year`, in order.
///
/// Days are resolved from their JDN, so Tagu days that fall before the new
/// year come back dated in the previous year's Late Tagu.
pub fn month_days(year: i32, month: MonthOfYear) -> Result<Vec<CalendarDay>, CalendarError> {
    let info = year_info(year);
    if !month.occurs_in(info.year_type) {
        return Err(CalendarError::MonthNotInYear {
            year,
            month: month.name(),
        });
    }
    let first = month_start_jdn(month, &info);
    let length = i64::from(month_length(month, info.year_type));
    Ok((first..first + length).map(calendar_day_from_jdn).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::MyanmarMonth;
    use crate::year::YearType;

    #[test]
    fn new_year_day_2024() {
        let day = calendar_day(2_460_418.0);
        assert_eq!(day.date.year(), 1386);
        assert_eq!(day.date.month().month(), MyanmarMonth::Tagu);
        assert_eq!(day.date.day(), 9);
        assert_eq!(day.weekday, Weekday::Wednesday);
        assert_eq!(day.moon_phase, MoonPhase::Waxing);
        assert_eq!(day.fortnight_day, 9);
        assert_eq!(day.month_length, 29);
        assert_eq!(day.sasana_year, 2568);
    }

    #[test]
    fn j2000() {
        let day = calendar_day_from_jdn(2_451_545);
        assert_eq!(day.date.year(), 1361);
        assert_eq!(day.date.month().month(), MyanmarMonth::Nadaw);
        assert_eq!(day.date.day(), 25);
        assert_eq!(day.date.year_type(), YearType::LittleWatat);
        assert_eq!(day.moon_phase, MoonPhase::Waning);
        assert_eq!(day.fortnight_day, 10);
        assert_eq!(day.weekday, Weekday::Saturday);
        let flags = astrological_flags(&day);
        assert!(flags.thamanyo);
        assert!(flags.is_pyathada());
    }

    #[test]
    fn month_view_of_kason_1386() {
        let kason = MonthOfYear::regular(MyanmarMonth::Kason);
        let days = month_days(1386, kason).unwrap();
        assert_eq!(days.len(), 30);
        assert!(days.windows(2).all(|w| w[1].jdn == w[0].jdn + 1));
        assert_eq!(days[14].jdn, 2_460_453);
        assert_eq!(days[14].moon_phase, MoonPhase::FullMoon);
        assert_eq!(days[29].moon_phase, MoonPhase::NewMoon);
    }

    #[test]
    fn month_view_tagu_before_new_year() {
        let tagu = MonthOfYear::regular(MyanmarMonth::Tagu);
        let days = month_days(1386, tagu).unwrap();
        assert_eq!(days.len(), 29);
        // Tagu 1-8 of 1386 precede the new year and read as 1385 Late Tagu.
        assert_eq!(days[0].date.year(), 1385);
        assert!(days[0].date.month().is_late());
        assert_eq!(days[8].date.year(), 1386);
        assert_eq!(days[8].date.day(), 9);
    }

    #[test]
    fn month_view_rejects_first_waso_in_common_year() {
        let first = MonthOfYear::regular(MyanmarMonth::FirstWaso);
        assert!(matches!(
            month_days(1386, first),
            Err(CalendarError::MonthNotInYear { year: 1386, .. })
        ));
        assert_eq!(month_days(1385, first).unwrap().len(), 30);
    }

    #[test]
    fn month_view_of_late_kason_spans_next_year() {
        // 1385 has no Late Kason day of its own; the month is all 1386 Kason.
        let days = month_days(1385, MonthOfYear::from_number(14).unwrap()).unwrap();
        assert_eq!(days.len(), 30);
        assert!(days.iter().all(|d| d.date.year() == 1386));
        assert_eq!(days[14].jdn, 2_460_453);
        assert_eq!(days[14].moon_phase, MoonPhase::FullMoon);
    }

    #[test]
    fn huge_julian_dates_resolve_at_range_ends() {
        let high = calendar_day(1e15);
        assert_eq!(high.date.year(), i32::MAX);
        assert_eq!(high.weekday, weekday_from_jdn(high.jdn));
        assert_eq!(high.date, jdn_to_myanmar(high.jdn));
        let low = calendar_day(-1e15);
        assert_eq!(low.date.year(), i32::MIN);
        assert_eq!(low.date, jdn_to_myanmar(low.jdn));
    }
}
