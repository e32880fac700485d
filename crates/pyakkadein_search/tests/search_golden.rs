//! Integration tests for day search over published calendar years.

use pyakkadein_core::{MonthOfYear, MoonPhase, MyanmarMonth, Weekday, new_year_day};
use pyakkadein_search::{
    CriterionKind, DEFAULT_MAX_SPAN_DAYS, LogicMode, SearchCriteria, SearchError, search_days,
};

/// JDN span of Myanmar year 1386 (2024-04-17 ..= 2025-04-16).
fn year_1386() -> (i64, i64) {
    (new_year_day(1386), new_year_day(1387) - 1)
}

#[test]
fn kason_full_moons_2020_to_2025() {
    let criteria = SearchCriteria::new()
        .month(MonthOfYear::regular(MyanmarMonth::Kason))
        .moon_phase(MoonPhase::FullMoon);
    let hits = search_days(2_458_850, 2_461_041, &criteria, DEFAULT_MAX_SPAN_DAYS).unwrap();
    let jdns: Vec<i64> = hits.iter().map(|h| h.day.jdn).collect();
    assert_eq!(
        jdns,
        [2_458_976, 2_459_360, 2_459_714, 2_460_068, 2_460_453, 2_460_807]
    );
    let years: Vec<i32> = hits.iter().map(|h| h.day.date.year()).collect();
    assert_eq!(years, [1382, 1383, 1384, 1385, 1386, 1387]);
}

#[test]
fn full_moons_in_a_common_year() {
    let (start, end) = year_1386();
    let criteria = SearchCriteria::new().moon_phase(MoonPhase::FullMoon);
    let hits = search_days(start, end, &criteria, DEFAULT_MAX_SPAN_DAYS).unwrap();
    assert_eq!(hits.len(), 13);
    assert!(hits.iter().all(|h| h.day.date.day() == 15));
    assert!(hits.iter().all(|h| h.flags.is_sabbath()));
}

#[test]
fn sabbath_saturdays_and_or() {
    let (start, end) = year_1386();
    let both = SearchCriteria::new()
        .sabbath(true)
        .weekday(Weekday::Saturday);
    let hits = search_days(start, end, &both, DEFAULT_MAX_SPAN_DAYS).unwrap();
    assert_eq!(hits.len(), 7);
    assert!(
        hits.iter()
            .all(|h| h.matched == [CriterionKind::Weekday, CriterionKind::Sabbath])
    );

    let either = both.logic(LogicMode::Or);
    let hits = search_days(start, end, &either, DEFAULT_MAX_SPAN_DAYS).unwrap();
    assert_eq!(hits.len(), 94);
}

#[test]
fn year_criterion_filters_late_months() {
    let (start, end) = year_1386();
    let criteria = SearchCriteria::new().year(1386);
    let hits = search_days(start, end, &criteria, DEFAULT_MAX_SPAN_DAYS).unwrap();
    assert_eq!(hits.len() as i64, end - start + 1);
    let criteria = SearchCriteria::new().year(1385);
    assert!(
        search_days(start, end, &criteria, DEFAULT_MAX_SPAN_DAYS)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn invalid_month_number_is_a_calendar_error() {
    let err: SearchError = SearchCriteria::new().month_number(15).unwrap_err().into();
    assert!(matches!(err, SearchError::Calendar(_)));
}

#[test]
fn default_span_limit() {
    let err = search_days(0, DEFAULT_MAX_SPAN_DAYS, &SearchCriteria::new(), DEFAULT_MAX_SPAN_DAYS)
        .unwrap_err();
    assert_eq!(
        err,
        SearchError::SpanTooLarge {
            days: DEFAULT_MAX_SPAN_DAYS + 1,
            max: DEFAULT_MAX_SPAN_DAYS
        }
    );
}
