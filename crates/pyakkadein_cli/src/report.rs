//! Plain-text rendering of calendar days, years and search hits.

use pyakkadein_core::{
    AstrologicalFlags, CalendarDay, Thingyan, YearInfo, astrological_events, astrological_flags,
    observances,
};
use pyakkadein_search::SearchHit;
use pyakkadein_time::CivilDate;

use crate::config::DisplayConfig;

/// Names of the attributes set on a day, in a fixed order.
pub fn flag_names(flags: &AstrologicalFlags) -> Vec<&'static str> {
    let mut names = Vec::new();
    if flags.is_sabbath() {
        names.push("Sabbath");
    }
    if flags.is_sabbath_eve() {
        names.push("Sabbath Eve");
    }
    if flags.yatyaza {
        names.push("Yatyaza");
    }
    if flags.is_afternoon_pyathada() {
        names.push("Afternoon Pyathada");
    } else if flags.is_pyathada() {
        names.push("Pyathada");
    }
    let rest = [
        (flags.thamanyo, "Thamanyo"),
        (flags.amyeittasote, "Amyeittasote"),
        (flags.warameittugyi, "Warameittugyi"),
        (flags.warameittunge, "Warameittunge"),
        (flags.yatpote, "Yatpote"),
        (flags.thamaphyu, "Thamaphyu"),
        (flags.nagapor, "Nagapor"),
        (flags.yatyotema, "Yatyotema"),
        (flags.mahayatkyan, "Mahayatkyan"),
        (flags.shanyat, "Shanyat"),
    ];
    names.extend(rest.iter().filter(|(set, _)| *set).map(|&(_, name)| name));
    names
}

fn list_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Full description of one day.
pub fn describe_day(day: &CalendarDay, display: &DisplayConfig) -> String {
    let date = &day.date;
    let mut lines = vec![
        format!(
            "{} (JDN {}, {})",
            CivilDate::from_jdn(day.jdn),
            day.jdn,
            day.weekday.name()
        ),
        format!(
            "{} ({}, fortnight day {}, month of {} days)",
            date,
            day.moon_phase.name(),
            day.fortnight_day,
            day.month_length
        ),
        format!(
            "Year type: {} | Sasana year: {}",
            date.year_type().name(),
            day.sasana_year
        ),
    ];

    if display.observances {
        let names: Vec<&str> = observances(day).iter().map(|o| o.name).collect();
        lines.push(format!("Observances: {}", list_or_none(&names)));
    }

    if display.astrology {
        let flags = astrological_flags(day);
        lines.push(format!("Attributes: {}", list_or_none(&flag_names(&flags))));
        lines.push(format!(
            "Mahabote: {} | Nakhat: {} | Nagahle: {}",
            flags.mahabote.name(),
            flags.nakhat.name(),
            flags.nagahle.name()
        ));
        let events: Vec<&str> = astrological_events(&flags, day.moon_phase)
            .iter()
            .map(|e| e.name())
            .collect();
        lines.push(format!("Events: {}", list_or_none(&events)));
    }

    lines.join("\n")
}

/// Summary of a Myanmar year and the Thingyan that opens it.
pub fn describe_year(info: &YearInfo, thingyan: &Thingyan) -> String {
    let mut lines = vec![
        format!("ME {}: {} year, {} days", info.year, info.year_type.name(), info.length()),
        format!(
            "Tagu 1: JDN {} ({})",
            info.first_day_jdn,
            CivilDate::from_jdn(info.first_day_jdn)
        ),
        format!(
            "Waso full moon: JDN {} ({})",
            info.full_moon_jdn,
            CivilDate::from_jdn(info.full_moon_jdn)
        ),
        format!(
            "Thingyan: Akya {}, Atat {}, New Year's Day {}",
            CivilDate::from_jdn(thingyan.akya_day),
            CivilDate::from_jdn(thingyan.atat_day),
            CivilDate::from_jdn(thingyan.new_year_day)
        ),
    ];
    if info.watat_error {
        lines.push("Warning: watat consistency check failed for this year".to_string());
    }
    lines.join("\n")
}

/// One line per day of a month view.
pub fn month_row(day: &CalendarDay, display: &DisplayConfig) -> String {
    let mut row = format!(
        "{:>2}  {}  {:<9}  {:<9}",
        day.date.day(),
        CivilDate::from_jdn(day.jdn),
        day.weekday.name(),
        day.moon_phase.name()
    );
    if display.astrology {
        let names = flag_names(&astrological_flags(day));
        if !names.is_empty() {
            row.push_str("  ");
            row.push_str(&names.join(", "));
        }
    }
    if display.observances {
        let names: Vec<&str> = observances(day).iter().map(|o| o.name).collect();
        if !names.is_empty() {
            row.push_str("  [");
            row.push_str(&names.join(", "));
            row.push(']');
        }
    }
    row
}

/// One line per search hit.
pub fn hit_row(hit: &SearchHit) -> String {
    let matched: Vec<&str> = hit.matched.iter().map(|c| c.name()).collect();
    let mut row = format!(
        "{}  {:<9}  {}",
        CivilDate::from_jdn(hit.day.jdn),
        hit.day.weekday.name(),
        hit.day.date
    );
    if !matched.is_empty() {
        row.push_str("  matched: ");
        row.push_str(&matched.join(", "));
    }
    row
}
