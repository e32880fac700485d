//! Myanmar lunisolar calendar engine.
//!
//! This crate provides:
//! - Era constants and watat (intercalary month) determination
//! - Year analysis: common, little watat and big watat years
//! - Julian Day Number ⇄ Myanmar date conversion
//! - Month length, moon phase, fortnight day and Sasana year
//! - Traditional astrological day attributes
//! - Thingyan timing and named observances
//!
//! Everything is pure arithmetic over immutable tables and is safe to call
//! from any number of threads.

pub mod astro;
pub mod astro_types;
pub mod convert;
pub mod date;
pub mod day;
pub mod era;
pub mod error;
pub mod festival;
pub mod month;
pub mod props;
pub mod thingyan;
pub mod watat;
pub mod weekday;
pub mod year;

pub use astro::{
    AstrologicalEvent, amyeittasote, astrological_attributes, astrological_events, mahabote,
    mahayatkyan, nagahle, nagapor, nakhat, pyathada, sabbath, shanyat, thamanyo, thamaphyu,
    warameittugyi, warameittunge, yatpote, yatyaza, yatyotema,
};
pub use astro_types::{
    ALL_MAHABOTES, ALL_NAGAHLES, ALL_NAKHATS, AstrologicalFlags, Mahabote, Nagahle, Nakhat,
    Pyathada, Sabbath,
};
pub use convert::{day_number, jdn_to_myanmar, julian_to_myanmar, myanmar_to_julian};
pub use date::MyanmarDate;
pub use day::{CalendarDay, astrological_flags, calendar_day, calendar_day_from_jdn, month_days};
pub use era::{
    Era, EraConstants, LUNAR_MONTH, MYANMAR_EPOCH, SOLAR_YEAR, era_constants,
    full_moon_offset_exception, is_watat_exception,
};
pub use error::CalendarError;
pub use festival::{Observance, ObservanceKind, observances};
pub use month::{ALL_MONTHS, MonthOfYear, MyanmarMonth};
pub use props::{
    ALL_MOON_PHASES, MoonPhase, SASANA_YEAR_OFFSET, SasanaReckoning, day_from_fortnight,
    fortnight_day, month_length, moon_phase, sasana_year,
};
pub use thingyan::{Thingyan, ThingyanDay, thingyan, thingyan_day};
pub use watat::{WatatInfo, watat_info};
pub use weekday::{ALL_WEEKDAYS, Weekday, weekday_from_jdn};
pub use year::{
    ALL_YEAR_TYPES, MAX_WATAT_LOOKBACK, YearInfo, YearType, new_year_day, supported_jdn_range,
    year_info, year_length, year_of_jdn, year_span,
};
