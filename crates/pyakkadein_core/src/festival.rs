//! Named observances: Buddhist festivals, traditional days, national
//! holidays, and Thingyan.
//!
//! Observances are purely additive: they are looked up from a resolved
//! [`CalendarDay`] and never feed back into the date.

use crate::day::CalendarDay;
use crate::month::MyanmarMonth;
use crate::props::MoonPhase;
use crate::thingyan::thingyan_day;

/// Category of an observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservanceKind {
    Buddhist,
    Traditional,
    National,
    Thingyan,
}

impl ObservanceKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Buddhist => "Buddhist",
            Self::Traditional => "Traditional",
            Self::National => "National",
            Self::Thingyan => "Thingyan",
        }
    }
}

/// A named observance falling on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Observance {
    pub name: &'static str,
    pub kind: ObservanceKind,
}

const FULL_MOON_OBSERVANCES: [(MyanmarMonth, &str, ObservanceKind); 6] = [
    (MyanmarMonth::Kason, "Buddha Day", ObservanceKind::Buddhist),
    (MyanmarMonth::Waso, "Start of Buddhist Lent", ObservanceKind::Buddhist),
    (MyanmarMonth::Wagaung, "Metta Day", ObservanceKind::Buddhist),
    (MyanmarMonth::Thadingyut, "End of Buddhist Lent", ObservanceKind::Buddhist),
    (MyanmarMonth::Tazaungmon, "Tazaungdaing", ObservanceKind::Traditional),
    (MyanmarMonth::Tabaung, "Tabaung Pwe", ObservanceKind::Traditional),
];

const DAY_OF_MONTH_OBSERVANCES: [(MyanmarMonth, u8, &str); 4] = [
    (MyanmarMonth::Wagaung, 10, "Taungpyone Pwe"),
    (MyanmarMonth::Wagaung, 23, "Yadanagu Pwe"),
    (MyanmarMonth::Nadaw, 1, "Shan New Year Day"),
    (MyanmarMonth::Pyatho, 1, "Karen New Year Day"),
];

/// National holidays `(first year, month, day, name)`.
const NATIONAL_OBSERVANCES: [(i32, MyanmarMonth, u8, &str); 6] = [
    (1282, MyanmarMonth::Tazaungmon, 25, "National Day"),
    (1306, MyanmarMonth::Nadaw, 1, "Authors Day"),
    (1309, MyanmarMonth::Tabodwe, 16, "Mon National Day"),
    (1379, MyanmarMonth::Thadingyut, 14, "Thadingyut Holiday"),
    (1379, MyanmarMonth::Thadingyut, 16, "Thadingyut Holiday"),
    (1379, MyanmarMonth::Tazaungmon, 14, "Tazaungdaing Holiday"),
];

/// Observances falling on a resolved day, Thingyan first.
pub fn observances(day: &CalendarDay) -> Vec<Observance> {
    let mut found = Vec::new();

    if let Some(kind) = thingyan_day(day.jdn) {
        found.push(Observance {
            name: kind.name(),
            kind: ObservanceKind::Thingyan,
        });
    }

    let date = &day.date;
    if date.month().is_late() {
        return found;
    }
    let month = date.month().month();

    if day.moon_phase == MoonPhase::FullMoon {
        found.extend(
            FULL_MOON_OBSERVANCES
                .iter()
                .filter(|(m, _, _)| *m == month)
                .map(|&(_, name, kind)| Observance { name, kind }),
        );
    }

    found.extend(
        DAY_OF_MONTH_OBSERVANCES
            .iter()
            .filter(|&&(m, d, _)| m == month && d == date.day())
            .map(|&(_, _, name)| Observance {
                name,
                kind: ObservanceKind::Traditional,
            }),
    );

    found.extend(
        NATIONAL_OBSERVANCES
            .iter()
            .filter(|&&(from, m, d, _)| date.year() >= from && m == month && d == date.day())
            .map(|&(_, _, _, name)| Observance {
                name,
                kind: ObservanceKind::National,
            }),
    );

    found
}
