//! Watat (intercalary month) determination for a single Myanmar year.
//!
//! Later eras compare the year's excess days (solar year minus twelve lunar
//! months, accumulated since the epoch) against an era threshold. The
//! Makaranta and Thandeikta systems use the 19-year Metonic cycle instead.
//!
//! Clean-room: excess-day method of the published Myanmar calendar
//! algorithm, public domain.

use crate::era::{LUNAR_MONTH, MYANMAR_EPOCH, SOLAR_YEAR, era_constants};

/// Watat status and second-Waso full moon of one Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatatInfo {
    /// Whether the year carries an intercalary month.
    pub is_watat: bool,
    /// Julian Day Number of the full moon of (second) Waso.
    pub full_moon_jdn: i64,
}

/// Years between the Myanmar epoch and the Kali Yuga reference of the
/// excess-day count.
const EXCESS_DAY_YEAR_OFFSET: f64 = 3739.0;

/// Accumulated excess days at the start of `year`, shifted into
/// `[threshold, threshold + LUNAR_MONTH)`.
fn excess_days(year: i64, threshold: f64) -> f64 {
    let ed = (SOLAR_YEAR * (year as f64 + EXCESS_DAY_YEAR_OFFSET)) % LUNAR_MONTH;
    if ed < threshold { ed + LUNAR_MONTH } else { ed }
}

/// Metonic-cycle watat rule of the first era.
fn metonic_watat(year: i64) -> bool {
    let cycle = (i64::from(year) * 7 + 2).rem_euclid(19);
    cycle / 12 != 0
}

/// Determine whether `year` is a watat year and anchor its Waso full moon.
pub fn watat_info(year: i32) -> WatatInfo {
    watat_info_at(i64::from(year))
}

/// [`watat_info`] for any year, including the look-back years just outside
/// the `i32` range. Those resolve with the constants of the nearest `i32`
/// year, which carries no corrections.
pub(crate) fn watat_info_at(year: i64) -> WatatInfo {
    let era = era_constants(year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32);
    let nm = era.month_number_for_excess;
    let monthly_excess = SOLAR_YEAR / 12.0 - LUNAR_MONTH;

    let threshold = monthly_excess * (12.0 - nm);
    let ed = excess_days(year, threshold);

    let full_moon = SOLAR_YEAR * year as f64 + MYANMAR_EPOCH - ed
        + 4.5 * LUNAR_MONTH
        + era.full_moon_offset;
    let full_moon_jdn = (full_moon + 0.5).floor() as i64;

    let computed = if era.era_index >= 2 {
        let watat_threshold = LUNAR_MONTH - monthly_excess * nm;
        ed >= watat_threshold
    } else {
        metonic_watat(year)
    };

    WatatInfo {
        is_watat: computed ^ era.watat_exception,
        full_moon_jdn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_watat_years() {
        // 1385 and 1388 carry a second Waso; 1384, 1386, 1387 do not.
        assert!(watat_info(1385).is_watat);
        assert!(watat_info(1388).is_watat);
        assert!(!watat_info(1384).is_watat);
        assert!(!watat_info(1386).is_watat);
        assert!(!watat_info(1387).is_watat);
    }

    #[test]
    fn waso_full_moon_anchors() {
        assert_eq!(watat_info(1385).full_moon_jdn, 2_460_158);
        assert_eq!(watat_info(1388).full_moon_jdn, 2_461_251);
        assert_eq!(watat_info(1312).full_moon_jdn, 2_433_492);
    }

    #[test]
    fn exception_years_flip_status() {
        assert!(watat_info(1344).is_watat);
        assert!(watat_info(1217).is_watat);
    }

    #[test]
    fn metonic_cycle_pattern() {
        // Seven watat years in every 19.
        let count = (0..19).filter(|&y| metonic_watat(y)).count();
        assert_eq!(count, 7);
        assert!(metonic_watat(-5) == metonic_watat(14));
    }

    #[test]
    fn excess_days_stay_in_window() {
        let threshold = (SOLAR_YEAR / 12.0 - LUNAR_MONTH) * 4.0;
        for year in 1217..1312i64 {
            let ed = excess_days(year, threshold);
            assert!(ed >= threshold && ed < threshold + LUNAR_MONTH, "ME {year}");
        }
    }

    #[test]
    fn total_over_i32_years() {
        for year in [i32::MIN, i32::MIN + 1, -1, 0, i32::MAX - 1, i32::MAX] {
            let info = watat_info(year);
            let expected = SOLAR_YEAR * f64::from(year) + MYANMAR_EPOCH;
            assert!((info.full_moon_jdn as f64 - expected).abs() < 200.0, "ME {year}");
        }
        let below = i64::from(i32::MIN) - 3;
        assert_eq!(watat_info_at(below).is_watat, metonic_watat(below));
    }
}
