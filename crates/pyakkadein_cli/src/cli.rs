use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pyakkadein_core::{MonthOfYear, MoonPhase, Weekday};
use pyakkadein_time::CivilDate;

/// Myanmar lunisolar calendar.
#[derive(Parser)]
#[command(
    name = "pyakkadein",
    version,
    about = "Myanmar calendar conversion, year and month views, and day search"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./pyakkadein.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Hide astrological attributes and observances.
    #[arg(long, global = true)]
    pub brief: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Describe one day (default: today).
    Date(DateArgs),
    /// Julian Day Number of a Myanmar date.
    ToJd(ToJdArgs),
    /// Year type, key days and Thingyan of a Myanmar year.
    Year(YearArgs),
    /// Every day of a Myanmar month.
    Month(MonthArgs),
    /// Find days matching calendar and astrological criteria.
    Search(SearchArgs),
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Gregorian date (YYYY-MM-DD).
    #[arg(conflicts_with = "jd")]
    pub date: Option<CivilDate>,

    /// Julian Date instead of a Gregorian date.
    #[arg(long, allow_negative_numbers = true)]
    pub jd: Option<f64>,
}

/// Arguments for the `to-jd` subcommand.
#[derive(clap::Args)]
pub struct ToJdArgs {
    /// Myanmar year (ME).
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
    /// Month number (0-14) or name, e.g. `kason`, `first-waso`, `late-tagu`.
    pub month: MonthOfYear,
    /// Day of month (1-30).
    pub day: u8,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Myanmar year (ME).
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Myanmar year (ME).
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
    /// Month number (0-14) or name.
    pub month: MonthOfYear,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
pub struct SearchArgs {
    /// First Gregorian date of the range.
    #[arg(long)]
    pub from: CivilDate,

    /// Last Gregorian date of the range (inclusive).
    #[arg(long)]
    pub to: CivilDate,

    /// Myanmar year.
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Month number (0-14) or name.
    #[arg(long)]
    pub month: Option<MonthOfYear>,

    /// Moon phase.
    #[arg(long, value_enum)]
    pub phase: Option<PhaseArg>,

    /// Weekday.
    #[arg(long, value_enum)]
    pub weekday: Option<WeekdayArg>,

    /// Fortnight day (1-15).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=15))]
    pub fortnight_day: Option<u8>,

    /// Sabbath days only.
    #[arg(long)]
    pub sabbath: bool,

    /// Sabbath eves only.
    #[arg(long)]
    pub sabbath_eve: bool,

    /// Yatyaza days only.
    #[arg(long)]
    pub yatyaza: bool,

    /// Pyathada days (full or afternoon) only.
    #[arg(long)]
    pub pyathada: bool,

    /// Thamanyo days only.
    #[arg(long)]
    pub thamanyo: bool,

    /// Match days meeting any criterion instead of all.
    #[arg(long)]
    pub or: bool,

    /// Override the configured maximum number of printed hits.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Override the configured maximum range in days.
    #[arg(long)]
    pub max_span: Option<i64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PhaseArg {
    Waxing,
    FullMoon,
    Waning,
    NewMoon,
}

impl From<PhaseArg> for MoonPhase {
    fn from(value: PhaseArg) -> Self {
        match value {
            PhaseArg::Waxing => MoonPhase::Waxing,
            PhaseArg::FullMoon => MoonPhase::FullMoon,
            PhaseArg::Waning => MoonPhase::Waning,
            PhaseArg::NewMoon => MoonPhase::NewMoon,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum WeekdayArg {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl From<WeekdayArg> for Weekday {
    fn from(value: WeekdayArg) -> Self {
        match value {
            WeekdayArg::Saturday => Weekday::Saturday,
            WeekdayArg::Sunday => Weekday::Sunday,
            WeekdayArg::Monday => Weekday::Monday,
            WeekdayArg::Tuesday => Weekday::Tuesday,
            WeekdayArg::Wednesday => Weekday::Wednesday,
            WeekdayArg::Thursday => Weekday::Thursday,
            WeekdayArg::Friday => Weekday::Friday,
        }
    }
}
