//! Types for day search: criteria, logic mode, and hits.

use std::ops::RangeInclusive;

use pyakkadein_core::{
    AstrologicalFlags, CalendarDay, CalendarError, MonthOfYear, MoonPhase, Weekday,
};

/// How individual criteria combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicMode {
    /// Every set criterion must match.
    #[default]
    And,
    /// At least one set criterion must match.
    Or,
}

impl LogicMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// One kind of search criterion, reported in [`SearchHit::matched`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionKind {
    Year,
    Month,
    MoonPhase,
    FortnightDay,
    Weekday,
    Sabbath,
    SabbathEve,
    Yatyaza,
    Pyathada,
    Thamanyo,
}

impl CriterionKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::MoonPhase => "moon phase",
            Self::FortnightDay => "fortnight day",
            Self::Weekday => "weekday",
            Self::Sabbath => "sabbath",
            Self::SabbathEve => "sabbath eve",
            Self::Yatyaza => "yatyaza",
            Self::Pyathada => "pyathada",
            Self::Thamanyo => "thamanyo",
        }
    }
}

/// Day search criteria. Unset criteria are ignored; with none set, every
/// day matches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchCriteria {
    /// Myanmar year range (inclusive).
    pub year: Option<RangeInclusive<i32>>,
    pub month: Option<MonthOfYear>,
    pub moon_phase: Option<MoonPhase>,
    /// Fortnight day range (inclusive, 1..=15).
    pub fortnight_day: Option<RangeInclusive<u8>>,
    pub weekday: Option<Weekday>,
    pub sabbath: Option<bool>,
    pub sabbath_eve: Option<bool>,
    pub yatyaza: Option<bool>,
    pub pyathada: Option<bool>,
    pub thamanyo: Option<bool>,
    pub logic: LogicMode,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year..=year);
        self
    }

    pub fn year_range(mut self, from: i32, to: i32) -> Self {
        self.year = Some(from..=to);
        self
    }

    pub fn month(mut self, month: MonthOfYear) -> Self {
        self.month = Some(month);
        self
    }

    /// Month by traditional number (0..=14).
    pub fn month_number(self, number: u8) -> Result<Self, CalendarError> {
        Ok(self.month(MonthOfYear::from_number(number)?))
    }

    pub fn moon_phase(mut self, phase: MoonPhase) -> Self {
        self.moon_phase = Some(phase);
        self
    }

    pub fn fortnight_day(mut self, day: u8) -> Self {
        self.fortnight_day = Some(day..=day);
        self
    }

    pub fn fortnight_day_range(mut self, from: u8, to: u8) -> Self {
        self.fortnight_day = Some(from..=to);
        self
    }

    pub fn weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = Some(weekday);
        self
    }

    pub fn sabbath(mut self, value: bool) -> Self {
        self.sabbath = Some(value);
        self
    }

    pub fn sabbath_eve(mut self, value: bool) -> Self {
        self.sabbath_eve = Some(value);
        self
    }

    pub fn yatyaza(mut self, value: bool) -> Self {
        self.yatyaza = Some(value);
        self
    }

    pub fn pyathada(mut self, value: bool) -> Self {
        self.pyathada = Some(value);
        self
    }

    pub fn thamanyo(mut self, value: bool) -> Self {
        self.thamanyo = Some(value);
        self
    }

    pub fn logic(mut self, logic: LogicMode) -> Self {
        self.logic = logic;
        self
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.month.is_none()
            && self.moon_phase.is_none()
            && self.fortnight_day.is_none()
            && self.weekday.is_none()
            && self.sabbath.is_none()
            && self.sabbath_eve.is_none()
            && self.yatyaza.is_none()
            && self.pyathada.is_none()
            && self.thamanyo.is_none()
    }
}

/// A day matched by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub day: CalendarDay,
    pub flags: AstrologicalFlags,
    /// Criteria this day satisfied, in declaration order.
    pub matched: Vec<CriterionKind>,
}
