//! Linear day search over a JDN range.

use pyakkadein_core::{AstrologicalFlags, CalendarDay, astrological_flags, calendar_day_from_jdn};
use tracing::{debug, debug_span, trace};

use crate::error::SearchError;
use crate::search_types::{CriterionKind, LogicMode, SearchCriteria, SearchHit};

/// Default upper bound on the number of days scanned (about a century).
pub const DEFAULT_MAX_SPAN_DAYS: i64 = 36_600;

/// Outcome of each set criterion for one day, in declaration order.
fn evaluate(
    criteria: &SearchCriteria,
    day: &CalendarDay,
    flags: &AstrologicalFlags,
) -> Vec<(CriterionKind, bool)> {
    let mut results = Vec::new();
    if let Some(years) = &criteria.year {
        results.push((CriterionKind::Year, years.contains(&day.date.year())));
    }
    if let Some(month) = criteria.month {
        results.push((CriterionKind::Month, day.date.month() == month));
    }
    if let Some(phase) = criteria.moon_phase {
        results.push((CriterionKind::MoonPhase, day.moon_phase == phase));
    }
    if let Some(days) = &criteria.fortnight_day {
        results.push((CriterionKind::FortnightDay, days.contains(&day.fortnight_day)));
    }
    if let Some(weekday) = criteria.weekday {
        results.push((CriterionKind::Weekday, day.weekday == weekday));
    }
    let flag_checks = [
        (CriterionKind::Sabbath, criteria.sabbath, flags.is_sabbath()),
        (CriterionKind::SabbathEve, criteria.sabbath_eve, flags.is_sabbath_eve()),
        (CriterionKind::Yatyaza, criteria.yatyaza, flags.yatyaza),
        (CriterionKind::Pyathada, criteria.pyathada, flags.is_pyathada()),
        (CriterionKind::Thamanyo, criteria.thamanyo, flags.thamanyo),
    ];
    for (kind, wanted, actual) in flag_checks {
        if let Some(wanted) = wanted {
            results.push((kind, wanted == actual));
        }
    }
    results
}

/// Match one day against the criteria.
///
/// Returns the satisfied criteria when the day matches under the
/// criteria's logic mode.
pub fn match_day(
    criteria: &SearchCriteria,
    day: &CalendarDay,
    flags: &AstrologicalFlags,
) -> Option<Vec<CriterionKind>> {
    let results = evaluate(criteria, day, flags);
    if results.is_empty() {
        return Some(Vec::new());
    }
    let is_match = match criteria.logic {
        LogicMode::And => results.iter().all(|&(_, ok)| ok),
        LogicMode::Or => results.iter().any(|&(_, ok)| ok),
    };
    is_match.then(|| {
        results
            .into_iter()
            .filter_map(|(kind, ok)| ok.then_some(kind))
            .collect()
    })
}

/// Scan `start_jdn..=end_jdn` and return every day matching `criteria`.
///
/// Fails if the range is reversed or longer than `max_span_days`.
pub fn search_days(
    start_jdn: i64,
    end_jdn: i64,
    criteria: &SearchCriteria,
    max_span_days: i64,
) -> Result<Vec<SearchHit>, SearchError> {
    if end_jdn < start_jdn {
        return Err(SearchError::InvalidRange {
            start: start_jdn,
            end: end_jdn,
        });
    }
    let days = end_jdn - start_jdn + 1;
    if days > max_span_days {
        return Err(SearchError::SpanTooLarge {
            days,
            max: max_span_days,
        });
    }

    let _span = debug_span!("search_days", start_jdn, end_jdn, logic = criteria.logic.name())
        .entered();
    let mut hits = Vec::new();
    for jdn in start_jdn..=end_jdn {
        let day = calendar_day_from_jdn(jdn);
        let flags = astrological_flags(&day);
        if let Some(matched) = match_day(criteria, &day, &flags) {
            trace!(jdn, date = %day.date, "day matched");
            hits.push(SearchHit {
                day,
                flags,
                matched,
            });
        }
    }
    debug!(scanned = days, hits = hits.len(), "search complete");
    Ok(hits)
}
