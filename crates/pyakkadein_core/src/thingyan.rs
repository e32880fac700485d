//! Thingyan, the water festival that ends the Myanmar year.
//!
//! Atat is the moment the sun re-enters the sidereal year (the start of the
//! Myanmar year); Akya precedes it by a little over two days. The days
//! strictly between them are Akyat, the day before Akya is Akyo, and the
//! day after Atat is New Year's Day.

use std::ops::Range;

use crate::era::{MYANMAR_EPOCH, SOLAR_YEAR, THIRD_ERA_START};
use crate::year::year_of_jdn;

/// Akya precedes Atat by this many days once the outgoing year is ME 1312
/// or later.
const AKYA_LEAD_THIRD_ERA: f64 = 2.169918982;
/// Akya lead while the outgoing year is before ME 1312.
const AKYA_LEAD_EARLIER: f64 = 2.1675;

/// First new year for which the Thingyan days themselves are named.
pub const THINGYAN_NAMED_FROM: i32 = 1100;

/// Kind of Thingyan day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThingyanDay {
    Akyo,
    Akya,
    Akyat,
    Atat,
    NewYear,
}

impl ThingyanDay {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Akyo => "Thingyan Akyo",
            Self::Akya => "Thingyan Akya",
            Self::Akyat => "Thingyan Akyat",
            Self::Atat => "Thingyan Atat",
            Self::NewYear => "Myanmar New Year's Day",
        }
    }
}

/// Thingyan leading into a Myanmar new year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thingyan {
    /// The Myanmar year that begins.
    pub year: i32,
    /// Julian Date of the Akya moment.
    pub akya_time: f64,
    /// Julian Date of the Atat moment (start of the year).
    pub atat_time: f64,
    pub akyo_day: i64,
    pub akya_day: i64,
    pub atat_day: i64,
    pub new_year_day: i64,
}

impl Thingyan {
    /// Akyat days, strictly between Akya and Atat.
    pub fn akyat_days(&self) -> Range<i64> {
        (self.akya_day + 1)..self.atat_day
    }

    /// Kind of Thingyan day `jdn` is for this new year, if any.
    ///
    /// Before ME 1100 only New Year's Day is recognised.
    pub fn classify(&self, jdn: i64) -> Option<ThingyanDay> {
        if jdn == self.new_year_day {
            return Some(ThingyanDay::NewYear);
        }
        if self.year < THINGYAN_NAMED_FROM {
            return None;
        }
        if jdn == self.atat_day {
            Some(ThingyanDay::Atat)
        } else if self.akyat_days().contains(&jdn) {
            Some(ThingyanDay::Akyat)
        } else if jdn == self.akya_day {
            Some(ThingyanDay::Akya)
        } else if jdn == self.akyo_day {
            Some(ThingyanDay::Akyo)
        } else {
            None
        }
    }
}

/// Thingyan before the start of Myanmar year `year`.
///
/// The Akya lead is chosen by the outgoing year `year - 1`, whose late
/// months the Thingyan days fall in.
pub fn thingyan(year: i32) -> Thingyan {
    let atat_time = SOLAR_YEAR * f64::from(year) + MYANMAR_EPOCH;
    let lead = if year > THIRD_ERA_START {
        AKYA_LEAD_THIRD_ERA
    } else {
        AKYA_LEAD_EARLIER
    };
    let akya_time = atat_time - lead;
    let akya_day = (akya_time + 0.5).floor() as i64;
    let atat_day = (atat_time + 0.5).floor() as i64;
    Thingyan {
        year,
        akya_time,
        atat_time,
        akyo_day: akya_day - 1,
        akya_day,
        atat_day,
        new_year_day: atat_day + 1,
    }
}

/// Thingyan day kind of a JDN, checking the new years on either side.
pub fn thingyan_day(jdn: i64) -> Option<ThingyanDay> {
    let year = year_of_jdn(jdn);
    thingyan(year).classify(jdn).or_else(|| {
        year.checked_add(1)
            .and_then(|next| thingyan(next).classify(jdn))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year::new_year_day;

    #[test]
    fn thingyan_2024() {
        let t = thingyan(1386);
        assert_eq!(t.akyo_day, 2_460_414);
        assert_eq!(t.akya_day, 2_460_415);
        assert_eq!(t.akyat_days(), 2_460_416..2_460_417);
        assert_eq!(t.atat_day, 2_460_417);
        assert_eq!(t.new_year_day, 2_460_418);
    }

    #[test]
    fn new_year_matches_year_module() {
        for year in [1100, 1311, 1312, 1385, 1386, 1387, 1500] {
            assert_eq!(thingyan(year).new_year_day, new_year_day(year), "ME {year}");
        }
    }

    #[test]
    fn classify_2024_days() {
        assert_eq!(thingyan_day(2_460_413), None);
        assert_eq!(thingyan_day(2_460_414), Some(ThingyanDay::Akyo));
        assert_eq!(thingyan_day(2_460_415), Some(ThingyanDay::Akya));
        assert_eq!(thingyan_day(2_460_416), Some(ThingyanDay::Akyat));
        assert_eq!(thingyan_day(2_460_417), Some(ThingyanDay::Atat));
        assert_eq!(thingyan_day(2_460_418), Some(ThingyanDay::NewYear));
        assert_eq!(thingyan_day(2_460_419), None);
    }

    #[test]
    fn early_years_only_name_new_year() {
        let t = thingyan(1000);
        assert_eq!(t.classify(t.atat_day), None);
        assert_eq!(t.classify(t.new_year_day), Some(ThingyanDay::NewYear));
    }

    #[test]
    fn akya_lead_follows_outgoing_year() {
        // New year 1312 is entered from ME 1311, still on the earlier lead.
        let t = thingyan(1313);
        assert!((t.atat_time - t.akya_time - AKYA_LEAD_THIRD_ERA).abs() < 1e-9);
        let t = thingyan(1312);
        assert!((t.atat_time - t.akya_time - AKYA_LEAD_EARLIER).abs() < 1e-9);
        let t = thingyan(1311);
        assert!((t.atat_time - t.akya_time - AKYA_LEAD_EARLIER).abs() < 1e-9);
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        assert_eq!(thingyan(i32::MAX).year, i32::MAX);
        let t = thingyan(i32::MIN);
        assert!(t.akya_day < t.atat_day);
        let _ = thingyan_day(t.new_year_day);
        let _ = thingyan_day(thingyan(i32::MAX).new_year_day);
    }
}
