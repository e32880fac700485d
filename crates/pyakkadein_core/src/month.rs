//! Myanmar months and their traditional numbering.
//!
//! Months are numbered 1 (Tagu) through 12 (Tabaung), with 0 for the
//! intercalary First Waso of watat years. The days of Tagu and Kason that
//! fall after Tabaung, before the next new year, form Late Tagu (13) and
//! Late Kason (14) of the same Myanmar year.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::CalendarError;
use crate::year::YearType;

/// The thirteen named Myanmar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MyanmarMonth {
    /// Intercalary month of watat years, between Nayon and Waso.
    FirstWaso,
    Tagu,
    Kason,
    Nayon,
    Waso,
    Wagaung,
    Tawthalin,
    Thadingyut,
    Tazaungmon,
    Nadaw,
    Pyatho,
    Tabodwe,
    Tabaung,
}

/// All months in traditional number order (index 0 = First Waso).
pub const ALL_MONTHS: [MyanmarMonth; 13] = [
    MyanmarMonth::FirstWaso,
    MyanmarMonth::Tagu,
    MyanmarMonth::Kason,
    MyanmarMonth::Nayon,
    MyanmarMonth::Waso,
    MyanmarMonth::Wagaung,
    MyanmarMonth::Tawthalin,
    MyanmarMonth::Thadingyut,
    MyanmarMonth::Tazaungmon,
    MyanmarMonth::Nadaw,
    MyanmarMonth::Pyatho,
    MyanmarMonth::Tabodwe,
    MyanmarMonth::Tabaung,
];

impl MyanmarMonth {
    /// Traditional month number (0 = First Waso, 1 = Tagu, ... 12 = Tabaung).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Month for a number in 0..=12.
    pub fn from_number(number: u8) -> Option<Self> {
        ALL_MONTHS.get(usize::from(number)).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstWaso => "First Waso",
            Self::Tagu => "Tagu",
            Self::Kason => "Kason",
            Self::Nayon => "Nayon",
            Self::Waso => "Waso",
            Self::Wagaung => "Wagaung",
            Self::Tawthalin => "Tawthalin",
            Self::Thadingyut => "Thadingyut",
            Self::Tazaungmon => "Tazaungmon",
            Self::Nadaw => "Nadaw",
            Self::Pyatho => "Pyatho",
            Self::Tabodwe => "Tabodwe",
            Self::Tabaung => "Tabaung",
        }
    }

    /// Whether the month can recur after Tabaung as a late month.
    pub const fn has_late_form(self) -> bool {
        matches!(self, Self::Tagu | Self::Kason)
    }
}

/// A month as it occurs within a Myanmar year: a named month plus whether
/// it is the late (year-end) occurrence of Tagu or Kason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthOfYear {
    month: MyanmarMonth,
    late: bool,
}

impl MonthOfYear {
    /// Regular (non-late) occurrence of a month.
    pub const fn regular(month: MyanmarMonth) -> Self {
        Self { month, late: false }
    }

    /// Create a month occurrence. Only Tagu and Kason may be late.
    pub fn new(month: MyanmarMonth, late: bool) -> Result<Self, CalendarError> {
        if late && !month.has_late_form() {
            return Err(CalendarError::InvalidLateMonth { month: month.name() });
        }
        Ok(Self { month, late })
    }

    /// Month for a traditional number in 0..=14 (13 = Late Tagu, 14 = Late Kason).
    pub fn from_number(number: u8) -> Result<Self, CalendarError> {
        match number {
            13 => Ok(Self {
                month: MyanmarMonth::Tagu,
                late: true,
            }),
            14 => Ok(Self {
                month: MyanmarMonth::Kason,
                late: true,
            }),
            n => MyanmarMonth::from_number(n)
                .map(Self::regular)
                .ok_or(CalendarError::InvalidMonth { month: n }),
        }
    }

    /// Month for a number produced by the day-count conversion, which keeps
    /// it in 0..=14.
    pub(crate) fn from_day_count(number: u8) -> Self {
        match number {
            13 => Self::late(MyanmarMonth::Tagu),
            14 => Self::late(MyanmarMonth::Kason),
            n => Self::regular(ALL_MONTHS[usize::from(n % 13)]),
        }
    }

    const fn late(month: MyanmarMonth) -> Self {
        Self { month, late: true }
    }

    pub const fn month(self) -> MyanmarMonth {
        self.month
    }

    pub const fn is_late(self) -> bool {
        self.late
    }

    /// Traditional number in 0..=14.
    pub const fn number(self) -> u8 {
        if self.late {
            self.month.number() + 12
        } else {
            self.month.number()
        }
    }

    /// Month index used by the astrological rule tables (1..=12).
    ///
    /// First Waso counts as Waso and late months as their base month.
    pub const fn rule_index(self) -> u8 {
        match self.month {
            MyanmarMonth::FirstWaso => 4,
            m => m.number(),
        }
    }

    /// Position within the year, increasing from Tagu to Late Kason with
    /// First Waso between Nayon and Waso.
    pub const fn position(self) -> u8 {
        match self.month {
            MyanmarMonth::FirstWaso => 7,
            m => m.number() * 2 + if self.late { 24 } else { 0 },
        }
    }

    pub const fn name(self) -> &'static str {
        match (self.month, self.late) {
            (MyanmarMonth::Tagu, true) => "Late Tagu",
            (MyanmarMonth::Kason, true) => "Late Kason",
            (m, _) => m.name(),
        }
    }

    /// Display name within a year of the given type: Waso of a watat year
    /// is the second Waso.
    pub const fn name_in(self, year_type: YearType) -> &'static str {
        match self.month {
            MyanmarMonth::Waso if year_type.is_watat() => "Second Waso",
            _ => self.name(),
        }
    }

    /// Whether this month exists in a year of the given type.
    pub const fn occurs_in(self, year_type: YearType) -> bool {
        !matches!(self.month, MyanmarMonth::FirstWaso) || year_type.is_watat()
    }
}

impl From<MyanmarMonth> for MonthOfYear {
    fn from(month: MyanmarMonth) -> Self {
        Self::regular(month)
    }
}

impl PartialOrd for MonthOfYear {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthOfYear {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position().cmp(&other.position())
    }
}

impl Display for MonthOfYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MonthOfYear {
    type Err = CalendarError;

    /// Parse a month number (`0`..=`14`) or name. Names are matched
    /// case-insensitively with spaces, `-` and `_` ignored, so `late-tagu`,
    /// `Late Tagu` and `latetagu` are equivalent. `second-waso` is Waso.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_number(number);
        }
        let key: String = trimmed
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let (base, late) = match key.strip_prefix("late") {
            Some(rest) => (rest, true),
            None => (key.as_str(), false),
        };
        let month = match base {
            "firstwaso" => MyanmarMonth::FirstWaso,
            "secondwaso" => MyanmarMonth::Waso,
            _ => ALL_MONTHS
                .iter()
                .copied()
                .find(|m| m.name().eq_ignore_ascii_case(base))
                .ok_or_else(|| CalendarError::UnknownMonth(trimmed.to_string()))?,
        };
        Self::new(month, late)
    }
}
