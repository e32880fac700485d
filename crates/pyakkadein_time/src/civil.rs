//! Proleptic Gregorian calendar dates and their Julian Day Numbers.
//!
//! A Julian Day Number (JDN) names the civil day whose noon falls at that
//! integer Julian Date, so JDN 2451545 is 2000-01-01.
//!
//! Clean-room: Fliegel & Van Flandern (1968) forward formula and
//! Richards' inverse, integer arithmetic only.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;

/// Julian Day Number of 2000-01-01 (J2000.0 noon).
pub const J2000_JDN: i64 = 2_451_545;

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

impl CivilDate {
    /// Create a validated civil date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let max_day = days_in_month(year, month).ok_or(TimeError::InvalidMonth { month })?;
        if day == 0 || day > max_day {
            return Err(TimeError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn to_jdn(self) -> i64 {
        let a = (14 - self.month as i64) / 12;
        let y = self.year as i64 + 4800 - a;
        let m = self.month as i64 + 12 * a - 3;
        self.day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045
    }

    /// Julian Date at noon of this date.
    pub fn to_jd(self) -> f64 {
        self.to_jdn() as f64
    }

    /// Civil date of a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let a = jdn + 32044;
        let b = (4 * a + 3).div_euclid(146_097);
        let c = a - (146_097 * b).div_euclid(4);
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);
        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = 100 * b + d - 4800 + m.div_euclid(10);
        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Civil date containing a Julian Date, using `floor(jd)` as the day number.
    pub fn from_jd(jd: f64) -> Self {
        Self::from_jdn(jd.floor() as i64)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` (a leading `-` is allowed on the year).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || TimeError::Parse(s.to_string());
        let (sign, rest) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let mut parts = rest.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_err());
        };
        let year: i32 = y.parse().map_err(|_| parse_err())?;
        let month: u32 = m.parse().map_err(|_| parse_err())?;
        let day: u32 = d.parse().map_err(|_| parse_err())?;
        Self::new(sign * year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let d = CivilDate::new(2000, 1, 1).unwrap();
        assert_eq!(d.to_jdn(), J2000_JDN);
        assert_eq!(CivilDate::from_jdn(J2000_JDN), d);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn rejects_feb_29_in_common_year() {
        assert_eq!(
            CivilDate::new(2023, 2, 29),
            Err(TimeError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29,
                max_day: 28
            })
        );
    }

    #[test]
    fn rejects_month_zero() {
        assert_eq!(
            CivilDate::new(2024, 0, 1),
            Err(TimeError::InvalidMonth { month: 0 })
        );
    }

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "2024-04-17".parse().unwrap();
        assert_eq!(d.to_string(), "2024-04-17");
        assert_eq!(d.to_jdn(), 2_460_418);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("2024/04/17".parse::<CivilDate>().is_err());
        assert!("2024-04".parse::<CivilDate>().is_err());
        assert!("2024-04-17-01".parse::<CivilDate>().is_err());
    }

    #[test]
    fn from_jd_floors() {
        let d = CivilDate::from_jd(2_460_418.9);
        assert_eq!(d.to_string(), "2024-04-17");
    }
}
