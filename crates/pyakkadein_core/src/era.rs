//! Calendar eras and their calibration constants.
//!
//! The Myanmar calendar was reformed several times. Each era fixes the
//! full-moon offset used to anchor the second Waso full moon and the
//! month count used to decide when excess days force an intercalary month.
//! Two sparse tables of historical corrections refine individual years.
//!
//! Clean-room: era boundaries and corrections follow the published
//! Myanmar calendar algorithm (Yan Naing Aye, "Modern Myanmar Calendrical
//! Calculations"), public domain.

/// Length of the Myanmar solar year in days (about 365.2587565).
pub const SOLAR_YEAR: f64 = 1_577_917_828.0 / 4_320_000.0;

/// Length of the Myanmar lunar month in days (about 29.53058795).
pub const LUNAR_MONTH: f64 = 1_577_917_828.0 / 53_433_336.0;

/// Julian Date at the beginning of ME 0.
pub const MYANMAR_EPOCH: f64 = 1_954_168.050623;

/// First year of the British colonial era.
pub const SECOND_ERA_START: i32 = 1217;

/// First year of the post-independence era.
pub const THIRD_ERA_START: i32 = 1312;

/// Calendar era (and first-era sub-system) in force for a Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Makaranta system, ME 0..=797.
    MakarantaI,
    /// Makaranta system, ME 798..=1099.
    MakarantaII,
    /// Thandeikta system of the kings, ME 1100..=1216.
    Thandeikta,
    /// British colonial era, ME 1217..=1311.
    Colonial,
    /// Post-independence era, ME 1312 onwards.
    Independence,
}

impl Era {
    /// Era in force for `year`. Years before ME 0 extrapolate as Makaranta I.
    pub const fn for_year(year: i32) -> Self {
        if year >= THIRD_ERA_START {
            Self::Independence
        } else if year >= SECOND_ERA_START {
            Self::Colonial
        } else if year >= 1100 {
            Self::Thandeikta
        } else if year >= 798 {
            Self::MakarantaII
        } else {
            Self::MakarantaI
        }
    }

    /// Major era number: 1 (kings), 2 (colonial), 3 (independence).
    pub const fn index(self) -> u8 {
        match self {
            Self::MakarantaI | Self::MakarantaII | Self::Thandeikta => 1,
            Self::Colonial => 2,
            Self::Independence => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::MakarantaI => "Makaranta I",
            Self::MakarantaII => "Makaranta II",
            Self::Thandeikta => "Thandeikta",
            Self::Colonial => "Colonial",
            Self::Independence => "Independence",
        }
    }

    const fn base_full_moon_offset(self) -> f64 {
        match self {
            Self::MakarantaI | Self::MakarantaII => -1.1,
            Self::Thandeikta => -0.85,
            Self::Colonial => -1.0,
            Self::Independence => -0.5,
        }
    }

    const fn month_number_for_excess(self) -> f64 {
        match self {
            Self::MakarantaI | Self::MakarantaII | Self::Thandeikta => -1.0,
            Self::Colonial => 4.0,
            Self::Independence => 8.0,
        }
    }
}

/// Constants resolved for a single Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraConstants {
    /// Era (sub-system) in force.
    pub era: Era,
    /// Major era number (1, 2 or 3).
    pub era_index: u8,
    /// Offset in days applied to the second Waso full moon.
    pub full_moon_offset: f64,
    /// Month number used to scale the excess-day thresholds.
    pub month_number_for_excess: f64,
    /// Whether the computed watat status of this year is flipped.
    pub watat_exception: bool,
}

/// Full-moon day corrections `(year, days)`, sorted by year.
static FULL_MOON_OFFSET_EXCEPTIONS: [(i32, i8); 31] = [
    (205, 1),
    (246, 1),
    (471, 1),
    (572, -1),
    (651, 1),
    (653, 2),
    (656, 1),
    (672, 1),
    (729, 1),
    (767, -1),
    (813, -1),
    (849, -1),
    (851, -1),
    (854, -1),
    (927, -1),
    (933, -1),
    (936, -1),
    (938, -1),
    (949, -1),
    (952, -1),
    (963, -1),
    (968, -1),
    (1039, -1),
    (1120, 1),
    (1126, -1),
    (1150, 1),
    (1172, -1),
    (1207, 1),
    (1234, 1),
    (1261, -1),
    (1377, 1),
];

/// Years whose computed watat status is flipped, sorted.
static WATAT_EXCEPTIONS: [i32; 6] = [1201, 1202, 1263, 1264, 1344, 1345];

/// Full-moon offset correction for `year`, if one is tabulated.
pub fn full_moon_offset_exception(year: i32) -> Option<i8> {
    FULL_MOON_OFFSET_EXCEPTIONS
        .binary_search_by_key(&year, |&(y, _)| y)
        .ok()
        .map(|i| FULL_MOON_OFFSET_EXCEPTIONS[i].1)
}

/// Whether `year` is in the watat exception list.
pub fn is_watat_exception(year: i32) -> bool {
    WATAT_EXCEPTIONS.binary_search(&year).is_ok()
}

/// Resolve the era constants for a Myanmar year.
///
/// Total over all integers; years outside the calibrated history
/// extrapolate with the nearest era's constants.
pub fn era_constants(year: i32) -> EraConstants {
    let era = Era::for_year(year);
    let correction = full_moon_offset_exception(year).map_or(0.0, f64::from);
    EraConstants {
        era,
        era_index: era.index(),
        full_moon_offset: era.base_full_moon_offset() + correction,
        month_number_for_excess: era.month_number_for_excess(),
        watat_exception: is_watat_exception(year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_published_values() {
        // Exact ratios of the mahayuga counts, close to the rounded values.
        assert_eq!(SOLAR_YEAR, 1_577_917_828.0 / 4_320_000.0);
        assert_eq!(LUNAR_MONTH, 1_577_917_828.0 / 53_433_336.0);
        assert!((SOLAR_YEAR - 365.2587565).abs() < 1e-7);
        assert!((LUNAR_MONTH - 29.53058795).abs() < 1e-7);
    }

    #[test]
    fn era_boundaries() {
        assert_eq!(Era::for_year(1216).index(), 1);
        assert_eq!(Era::for_year(1217).index(), 2);
        assert_eq!(Era::for_year(1311).index(), 2);
        assert_eq!(Era::for_year(1312).index(), 3);
        assert_eq!(Era::for_year(1099), Era::MakarantaII);
        assert_eq!(Era::for_year(1100), Era::Thandeikta);
        assert_eq!(Era::for_year(797), Era::MakarantaI);
        assert_eq!(Era::for_year(-50), Era::MakarantaI);
    }

    #[test]
    fn tables_are_sorted() {
        assert!(
            FULL_MOON_OFFSET_EXCEPTIONS
                .windows(2)
                .all(|w| w[0].0 < w[1].0)
        );
        assert!(WATAT_EXCEPTIONS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn offset_exception_lookup() {
        assert_eq!(full_moon_offset_exception(653), Some(2));
        assert_eq!(full_moon_offset_exception(1261), Some(-1));
        assert_eq!(full_moon_offset_exception(1377), Some(1));
        assert_eq!(full_moon_offset_exception(1386), None);
    }

    #[test]
    fn independence_year_with_correction() {
        let c = era_constants(1377);
        assert_eq!(c.era, Era::Independence);
        assert_eq!(c.era_index, 3);
        assert!((c.full_moon_offset - 0.5).abs() < 1e-12);
        assert_eq!(c.month_number_for_excess, 8.0);
        assert!(!c.watat_exception);
    }

    #[test]
    fn colonial_year_constants() {
        let c = era_constants(1250);
        assert_eq!(c.era_index, 2);
        assert_eq!(c.full_moon_offset, -1.0);
        assert_eq!(c.month_number_for_excess, 4.0);
    }

    #[test]
    fn watat_exception_years() {
        for year in [1201, 1202, 1263, 1264, 1344, 1345] {
            assert!(era_constants(year).watat_exception, "ME {year}");
        }
        assert!(!era_constants(1343).watat_exception);
    }
}
