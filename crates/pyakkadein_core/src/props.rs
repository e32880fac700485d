//! Month length, moon phase, fortnight day, and Sasana year.
//!
//! Odd-numbered months have 29 days and even-numbered months 30, except
//! that Nayon gains a 30th day in big watat years. First Waso has 30 days.
//! Days 1-14 wax, day 15 is the full moon, and the last day of the month
//! is the new moon.

use crate::error::CalendarError;
use crate::month::{MonthOfYear, MyanmarMonth};
use crate::year::YearType;

/// Offset between the Myanmar Era and the Sasana (Buddhist) Era.
pub const SASANA_YEAR_OFFSET: i32 = 1182;

/// Phase of the moon on a Myanmar calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    Waxing,
    FullMoon,
    Waning,
    NewMoon,
}

/// All moon phases in index order.
pub const ALL_MOON_PHASES: [MoonPhase; 4] = [
    MoonPhase::Waxing,
    MoonPhase::FullMoon,
    MoonPhase::Waning,
    MoonPhase::NewMoon,
];

impl MoonPhase {
    /// 0 = waxing, 1 = full moon, 2 = waning, 3 = new moon.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        ALL_MOON_PHASES
            .get(usize::from(index))
            .copied()
            .ok_or(CalendarError::InvalidMoonPhase { phase: index })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Waxing => "Waxing",
            Self::FullMoon => "Full Moon",
            Self::Waning => "Waning",
            Self::NewMoon => "New Moon",
        }
    }

    /// Whether the day falls in the waxing half of the month (including full moon).
    pub const fn is_waxing_half(self) -> bool {
        matches!(self, Self::Waxing | Self::FullMoon)
    }
}

/// Number of days in `month` of a year of the given type.
pub fn month_length(month: MonthOfYear, year_type: YearType) -> u8 {
    let number = month.number();
    let base = 30 - number % 2;
    if number == MyanmarMonth::Nayon.number() {
        base + year_type.index() / 2
    } else {
        base
    }
}

/// Day within the current half-month (1..=15).
pub const fn fortnight_day(day: u8) -> u8 {
    day - 15 * (day / 16)
}

/// Moon phase of `day` in `month`.
pub fn moon_phase(day: u8, month: MonthOfYear, year_type: YearType) -> MoonPhase {
    let length = month_length(month, year_type);
    let index = (day + 1) / 16 + day / 16 + day / length;
    ALL_MOON_PHASES[usize::from(index.min(3))]
}

/// Day of month for a fortnight day and moon phase.
///
/// The full moon is always day 15 and the new moon is the last day of the
/// month; `fortnight_day` is ignored for those two phases.
pub fn day_from_fortnight(
    fortnight_day: u8,
    phase: MoonPhase,
    month: MonthOfYear,
    year_type: YearType,
) -> Result<u8, CalendarError> {
    let length = month_length(month, year_type);
    let day = match phase {
        MoonPhase::FullMoon => 15,
        MoonPhase::NewMoon => length,
        MoonPhase::Waxing | MoonPhase::Waning => {
            if !(1..=15).contains(&fortnight_day) {
                return Err(CalendarError::InvalidFortnightDay { day: fortnight_day });
            }
            if phase == MoonPhase::Waning {
                fortnight_day + 15
            } else {
                fortnight_day
            }
        }
    };
    if day > length {
        return Err(CalendarError::InvalidDay {
            day,
            month: month.name(),
            max_day: length,
        });
    }
    Ok(day)
}

/// When the Sasana year number advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SasanaReckoning {
    /// Advances with the Myanmar new year: always ME + 1182.
    #[default]
    NewYear,
    /// Advances the day after the Kason full moon.
    KasonFullMoon,
}

/// Sasana (Buddhist Era) year of a Myanmar date.
pub fn sasana_year(year: i32, month: MonthOfYear, day: u8, reckoning: SasanaReckoning) -> i32 {
    let base = year.saturating_add(SASANA_YEAR_OFFSET);
    match reckoning {
        SasanaReckoning::NewYear => base,
        SasanaReckoning::KasonFullMoon => match (month.month(), month.is_late()) {
            (MyanmarMonth::Tagu, false) => base.saturating_sub(1),
            (MyanmarMonth::Kason, false) if day <= 15 => base.saturating_sub(1),
            (MyanmarMonth::Kason, true) if day > 15 => base.saturating_add(1),
            _ => base,
        },
    }
}
