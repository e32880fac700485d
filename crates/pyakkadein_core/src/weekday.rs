//! Weekdays in Myanmar numbering (0 = Saturday).

use crate::error::CalendarError;

/// Day of the week. Astrological rule tables are indexed by [`Weekday::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// All weekdays in index order (index 0 = Saturday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Saturday,
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

impl Weekday {
    /// 0 = Saturday, 1 = Sunday, ... 6 = Friday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        ALL_WEEKDAYS
            .get(usize::from(index))
            .copied()
            .ok_or(CalendarError::InvalidWeekday { weekday: index })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

/// Weekday of a Julian Day Number: `(jdn + 2) mod 7`.
pub fn weekday_from_jdn(jdn: i64) -> Weekday {
    ALL_WEEKDAYS[(jdn + 2).rem_euclid(7) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_was_saturday() {
        assert_eq!(weekday_from_jdn(2_451_545), Weekday::Saturday);
    }

    #[test]
    fn myanmar_new_year_2024_was_wednesday() {
        assert_eq!(weekday_from_jdn(2_460_418), Weekday::Wednesday);
    }

    #[test]
    fn negative_jdn_wraps() {
        assert_eq!(weekday_from_jdn(-2), Weekday::Saturday);
        assert_eq!(weekday_from_jdn(-3), Weekday::Friday);
    }

    #[test]
    fn index_roundtrip() {
        for w in ALL_WEEKDAYS {
            assert_eq!(Weekday::from_index(w.index()).unwrap(), w);
        }
        assert_eq!(
            Weekday::from_index(7),
            Err(CalendarError::InvalidWeekday { weekday: 7 })
        );
    }
}
