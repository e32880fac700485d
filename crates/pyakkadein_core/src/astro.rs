//! Traditional Myanmar astrological day attributes.
//!
//! Every rule is a small table lookup keyed by weekday (0 = Saturday),
//! by the fortnight day, or by the month taken modulo 4 or 12. First Waso
//! follows Waso and the late months follow their base month, which
//! [`MonthOfYear::rule_index`] already encodes.
//!
//! Clean-room: rule tables from the published Myanmar calendar algorithm
//! (Yan Naing Aye), public domain.

use crate::astro_types::{
    ALL_MAHABOTES, ALL_NAGAHLES, ALL_NAKHATS, AstrologicalFlags, Mahabote, Nagahle, Nakhat,
    Pyathada, Sabbath,
};
use crate::month::MonthOfYear;
use crate::props::{MoonPhase, fortnight_day, month_length};
use crate::weekday::Weekday;
use crate::year::YearType;

/// Sabbath or sabbath eve for `day` of a month of `month_length` days.
pub fn sabbath(day: u8, month_length: u8) -> Option<Sabbath> {
    if day == 8 || day == 15 || day == 23 || day == month_length {
        Some(Sabbath::Sabbath)
    } else if day == 7 || day == 14 || day == 22 || day + 1 == month_length {
        Some(Sabbath::Eve)
    } else {
        None
    }
}

/// Yatyaza: two weekdays per month, cycling every four months.
pub fn yatyaza(month: MonthOfYear, weekday: Weekday) -> bool {
    let m1 = month.rule_index() % 4;
    let wd = weekday.index();
    let wd1 = m1 / 2 + 4;
    let wd2 = ((1 - m1 / 2) + m1 % 2) * (1 + 2 * (m1 % 2));
    wd == wd1 || wd == wd2
}

const PYATHADA_MONTH_CLASS: [u8; 7] = [1, 3, 3, 0, 2, 1, 2];

/// Pyathada: one weekday per month class; Wednesday afternoon in the
/// fourth class.
pub fn pyathada(month: MonthOfYear, weekday: Weekday) -> Option<Pyathada> {
    let m1 = month.rule_index() % 4;
    if m1 == 0 && weekday == Weekday::Wednesday {
        Some(Pyathada::Afternoon)
    } else if m1 == PYATHADA_MONTH_CLASS[usize::from(weekday.index())] {
        Some(Pyathada::FullDay)
    } else {
        None
    }
}

/// Thamanyo: a pair of consecutive weekdays that advances two days each
/// month.
pub fn thamanyo(month: MonthOfYear, weekday: Weekday) -> bool {
    let mm = month.rule_index();
    let m1 = mm - 1 - mm / 9;
    let wd1 = (m1 * 2 - m1 / 8) % 7;
    (weekday.index() + 7 - wd1) % 7 <= 1
}

const AMYEITTASOTE: [u8; 7] = [5, 8, 3, 7, 2, 4, 1];
const WARAMEITTUGYI: [u8; 7] = [7, 1, 4, 8, 9, 6, 3];
const YATPOTE: [u8; 7] = [8, 1, 4, 6, 9, 8, 7];
const THAMAPHYU: [u8; 7] = [1, 2, 6, 6, 5, 6, 7];
const THAMAPHYU_EXTRA: [u8; 7] = [0, 1, 0, 0, 0, 3, 3];
const NAGAPOR: [u8; 7] = [26, 21, 2, 10, 18, 2, 21];
const SHANYAT: [u8; 12] = [8, 8, 2, 2, 9, 3, 3, 5, 1, 4, 7, 4];

fn by_weekday(table: &[u8; 7], weekday: Weekday) -> u8 {
    table[usize::from(weekday.index())]
}

pub fn amyeittasote(day: u8, weekday: Weekday) -> bool {
    fortnight_day(day) == by_weekday(&AMYEITTASOTE, weekday)
}

pub fn warameittugyi(day: u8, weekday: Weekday) -> bool {
    fortnight_day(day) == by_weekday(&WARAMEITTUGYI, weekday)
}

/// Warameittunge: fortnight day `12 − ((weekday + 6) mod 7)`.
pub fn warameittunge(day: u8, weekday: Weekday) -> bool {
    let wn = (weekday.index() + 6) % 7;
    12u8.checked_sub(fortnight_day(day)) == Some(wn)
}

pub fn yatpote(day: u8, weekday: Weekday) -> bool {
    fortnight_day(day) == by_weekday(&YATPOTE, weekday)
}

pub fn thamaphyu(day: u8, weekday: Weekday) -> bool {
    let fd = fortnight_day(day);
    fd == by_weekday(&THAMAPHYU, weekday)
        || fd == by_weekday(&THAMAPHYU_EXTRA, weekday)
        || (fd == 4 && weekday == Weekday::Thursday)
}

/// Nagapor is keyed by the day of the month, not the fortnight day.
pub fn nagapor(day: u8, weekday: Weekday) -> bool {
    day == by_weekday(&NAGAPOR, weekday)
        || matches!(
            (day, weekday),
            (19, Weekday::Monday)
                | (1, Weekday::Wednesday)
                | (12, Weekday::Thursday)
                | (20, Weekday::Friday)
        )
}

pub fn yatyotema(month: MonthOfYear, day: u8) -> bool {
    let mm = month.rule_index();
    let m1 = if mm % 2 == 1 { mm } else { (mm + 9) % 12 };
    fortnight_day(day) == (m1 + 4) % 12 + 1
}

pub fn mahayatkyan(month: MonthOfYear, day: u8) -> bool {
    let mm = month.rule_index();
    fortnight_day(day) == ((mm % 12) / 2 + 4) % 6 + 1
}

pub fn shanyat(month: MonthOfYear, day: u8) -> bool {
    let mm = month.rule_index();
    fortnight_day(day) == SHANYAT[usize::from(mm - 1)]
}

/// Mahabote house: `(year − weekday) mod 7`.
pub fn mahabote(year: i32, weekday: Weekday) -> Mahabote {
    let index = (i64::from(year) - i64::from(weekday.index())).rem_euclid(7);
    ALL_MAHABOTES[index as usize]
}

/// Nakhat: `year mod 3`.
pub fn nakhat(year: i32) -> Nakhat {
    ALL_NAKHATS[year.rem_euclid(3) as usize]
}

/// Nagahle direction: `(month mod 12) / 3`.
pub fn nagahle(month: MonthOfYear) -> Nagahle {
    ALL_NAGAHLES[usize::from((month.rule_index() % 12) / 3)]
}

/// All astrological attributes of a Myanmar day.
pub fn astrological_attributes(
    year: i32,
    month: MonthOfYear,
    day: u8,
    year_type: YearType,
    weekday: Weekday,
) -> AstrologicalFlags {
    AstrologicalFlags {
        sabbath: sabbath(day, month_length(month, year_type)),
        yatyaza: yatyaza(month, weekday),
        pyathada: pyathada(month, weekday),
        thamanyo: thamanyo(month, weekday),
        amyeittasote: amyeittasote(day, weekday),
        warameittugyi: warameittugyi(day, weekday),
        warameittunge: warameittunge(day, weekday),
        yatpote: yatpote(day, weekday),
        thamaphyu: thamaphyu(day, weekday),
        nagapor: nagapor(day, weekday),
        yatyotema: yatyotema(month, day),
        mahayatkyan: mahayatkyan(month, day),
        shanyat: shanyat(month, day),
        mahabote: mahabote(year, weekday),
        nakhat: nakhat(year),
        nagahle: nagahle(month),
    }
}

/// Summary label for a day's astrological character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AstrologicalEvent {
    /// Thamanyo or warameittugyi.
    AuspiciousDay,
    /// Pyathada or yatyaza.
    InauspiciousDay,
    BuddhistSabbath,
    FullMoonDay,
    NewMoonDay,
}

impl AstrologicalEvent {
    pub const fn name(self) -> &'static str {
        match self {
            Self::AuspiciousDay => "Auspicious Day",
            Self::InauspiciousDay => "Inauspicious Day",
            Self::BuddhistSabbath => "Buddhist Sabbath",
            Self::FullMoonDay => "Full Moon Day",
            Self::NewMoonDay => "New Moon Day",
        }
    }
}

/// Summary events for a day, in a fixed order.
pub fn astrological_events(flags: &AstrologicalFlags, phase: MoonPhase) -> Vec<AstrologicalEvent> {
    let mut events = Vec::new();
    if flags.thamanyo || flags.warameittugyi {
        events.push(AstrologicalEvent::AuspiciousDay);
    }
    if flags.is_pyathada() || flags.yatyaza {
        events.push(AstrologicalEvent::InauspiciousDay);
    }
    if flags.is_sabbath() {
        events.push(AstrologicalEvent::BuddhistSabbath);
    }
    match phase {
        MoonPhase::FullMoon => events.push(AstrologicalEvent::FullMoonDay),
        MoonPhase::NewMoon => events.push(AstrologicalEvent::NewMoonDay),
        MoonPhase::Waxing | MoonPhase::Waning => {}
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::MyanmarMonth;

    fn m(n: u8) -> MonthOfYear {
        MonthOfYear::from_number(n).unwrap()
    }

    fn wd(i: u8) -> Weekday {
        Weekday::from_index(i).unwrap()
    }

    // ---- sabbath ----

    #[test]
    fn sabbath_days() {
        for day in [8, 15, 23, 30] {
            assert_eq!(sabbath(day, 30), Some(Sabbath::Sabbath), "day {day}");
        }
        for day in [7, 14, 22, 29] {
            assert_eq!(sabbath(day, 30), Some(Sabbath::Eve), "day {day}");
        }
        assert_eq!(sabbath(29, 29), Some(Sabbath::Sabbath));
        assert_eq!(sabbath(28, 29), Some(Sabbath::Eve));
        assert_eq!(sabbath(1, 29), None);
    }

    // ---- month-keyed weekday rules ----

    #[test]
    fn yatyaza_pairs() {
        // Tagu: m1 = 1, so Wednesday (4) and Friday (6).
        let tagu = m(1);
        let days: Vec<u8> = (0..7).filter(|&i| yatyaza(tagu, wd(i))).collect();
        assert_eq!(days, [4, 6]);
        // Waso and First Waso share a rule.
        for i in 0..7 {
            assert_eq!(yatyaza(m(0), wd(i)), yatyaza(m(4), wd(i)));
        }
    }

    #[test]
    fn pyathada_afternoon() {
        assert_eq!(pyathada(m(4), Weekday::Wednesday), Some(Pyathada::Afternoon));
        assert_eq!(pyathada(m(4), Weekday::Tuesday), Some(Pyathada::FullDay));
        assert_eq!(pyathada(m(2), Weekday::Wednesday), Some(Pyathada::FullDay));
        assert_eq!(pyathada(m(2), Weekday::Saturday), None);
    }

    #[test]
    fn thamanyo_two_days_per_month() {
        for n in 1..=12 {
            let count = (0..7).filter(|&i| thamanyo(m(n), wd(i))).count();
            assert_eq!(count, 2, "month {n}");
        }
    }

    #[test]
    fn late_months_follow_base_month() {
        for i in 0..7 {
            assert_eq!(thamanyo(m(13), wd(i)), thamanyo(m(1), wd(i)));
            assert_eq!(pyathada(m(14), wd(i)), pyathada(m(2), wd(i)));
        }
    }

    // ---- day-keyed rules ----

    #[test]
    fn fortnight_rules_repeat_in_waning_half() {
        for i in 0..7 {
            let w = wd(i);
            for day in 1..=14 {
                assert_eq!(amyeittasote(day, w), amyeittasote(day + 15, w));
                assert_eq!(warameittugyi(day, w), warameittugyi(day + 15, w));
                assert_eq!(yatpote(day, w), yatpote(day + 15, w));
            }
        }
    }

    #[test]
    fn warameittunge_saturday() {
        // Saturday: wn = 6, fortnight day 6.
        assert!(warameittunge(6, Weekday::Saturday));
        assert!(warameittunge(21, Weekday::Saturday));
        assert!(!warameittunge(13, Weekday::Saturday));
    }

    #[test]
    fn thamaphyu_extras() {
        assert!(thamaphyu(1, Weekday::Saturday));
        assert!(thamaphyu(1, Weekday::Sunday));
        assert!(thamaphyu(4, Weekday::Thursday));
        assert!(thamaphyu(3, Weekday::Friday));
        assert!(!thamaphyu(3, Weekday::Saturday));
    }

    #[test]
    fn nagapor_uses_day_of_month() {
        assert!(nagapor(26, Weekday::Saturday));
        assert!(!nagapor(11, Weekday::Saturday));
        assert!(nagapor(1, Weekday::Wednesday));
        assert!(nagapor(19, Weekday::Monday));
    }

    #[test]
    fn month_keyed_day_rules() {
        // Tagu (odd): m1 = 1 -> (1 + 4) % 12 + 1 = 6.
        assert!(yatyotema(m(1), 6));
        assert!(yatyotema(m(1), 21));
        // Kason: ((2 % 12) / 2 + 4) % 6 + 1 = 6.
        assert!(mahayatkyan(m(2), 6));
        assert!(shanyat(m(1), 8));
        assert!(shanyat(m(12), 4));
        assert!(shanyat(m(0), 2));
    }

    // ---- cycles ----

    #[test]
    fn cyclic_attributes() {
        assert_eq!(mahabote(1386, Weekday::Wednesday), Mahabote::Adipati);
        assert_eq!(mahabote(0, Weekday::Friday), Mahabote::Atun);
        assert_eq!(nakhat(1386), Nakhat::Ogre);
        assert_eq!(nakhat(1386).name(), "Ogre");
        assert_eq!(nakhat(1385), Nakhat::Human);
        assert_eq!(nakhat(-1), Nakhat::Human);
        assert_eq!(nagahle(m(1)), Nagahle::West);
        assert_eq!(nagahle(m(0)), Nagahle::North);
        assert_eq!(nagahle(m(7)), Nagahle::East);
        assert_eq!(nagahle(m(9)), Nagahle::South);
        assert_eq!(nagahle(m(12)), Nagahle::West);
        assert_eq!(nagahle(MonthOfYear::regular(MyanmarMonth::Waso)), Nagahle::North);
    }

    #[test]
    fn cycles_at_year_extremes() {
        assert_eq!(mahabote(i32::MIN, Weekday::Friday), Mahabote::Puti);
        assert_eq!(mahabote(i32::MAX, Weekday::Saturday), Mahabote::Atun);
        assert_eq!(nakhat(i32::MIN), Nakhat::Elf);
    }

    // ---- summary ----

    #[test]
    fn new_year_2024_attributes() {
        let flags = astrological_attributes(1386, m(1), 9, YearType::Common, Weekday::Wednesday);
        assert!(flags.yatyaza);
        assert!(flags.warameittugyi);
        assert!(flags.warameittunge);
        assert!(flags.yatpote);
        assert!(!flags.thamanyo);
        assert!(!flags.is_pyathada());
        assert_eq!(flags.sabbath, None);
        assert_eq!(
            astrological_events(&flags, MoonPhase::Waxing),
            [AstrologicalEvent::AuspiciousDay, AstrologicalEvent::InauspiciousDay]
        );
    }

    #[test]
    fn full_moon_events() {
        let flags = astrological_attributes(1386, m(4), 15, YearType::Common, Weekday::Saturday);
        assert!(flags.thamanyo);
        assert_eq!(
            astrological_events(&flags, MoonPhase::FullMoon),
            [
                AstrologicalEvent::AuspiciousDay,
                AstrologicalEvent::BuddhistSabbath,
                AstrologicalEvent::FullMoonDay
            ]
        );
    }
}
