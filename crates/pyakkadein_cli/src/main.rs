mod cli;
mod config;
mod logging;
mod report;

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;
use pyakkadein_core::{
    CalendarDay, calendar_day, calendar_day_from_jdn, month_days, myanmar_to_julian, thingyan,
    year_info,
};
use pyakkadein_search::{LogicMode, SearchCriteria, search_days};
use pyakkadein_time::CivilDate;
use tracing::{debug, info};

use crate::cli::{Cli, Command, DateArgs, MonthArgs, SearchArgs, ToJdArgs, YearArgs};
use crate::config::{AppConfig, DisplayConfig};

/// JDN of 1970-01-01.
const UNIX_EPOCH_JDN: i64 = 2_440_588;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = config::load(cli.config.as_deref())?;
    if cli.brief {
        config.display = DisplayConfig {
            astrology: false,
            observances: false,
        };
    }
    debug!(?config, "effective configuration");

    match cli.command {
        Command::Date(args) => date_cmd(args, &config),
        Command::ToJd(args) => to_jd_cmd(args),
        Command::Year(args) => year_cmd(args),
        Command::Month(args) => month_cmd(args, &config),
        Command::Search(args) => search_cmd(args, &config),
    }
}

fn today_jdn() -> Result<i64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before 1970")?;
    Ok(UNIX_EPOCH_JDN + (elapsed.as_secs() / 86_400) as i64)
}

fn date_cmd(args: DateArgs, config: &AppConfig) -> Result<()> {
    let day: CalendarDay = match (args.jd, args.date) {
        (Some(jd), _) => {
            if !jd.is_finite() {
                bail!("Julian Date must be finite, got {jd}");
            }
            calendar_day(jd)
        }
        (None, Some(date)) => calendar_day_from_jdn(date.to_jdn()),
        (None, None) => calendar_day_from_jdn(today_jdn()?),
    };
    println!("{}", report::describe_day(&day, &config.display));
    Ok(())
}

fn to_jd_cmd(args: ToJdArgs) -> Result<()> {
    let jdn = myanmar_to_julian(args.year, args.month, args.day)?;
    println!("{jdn} ({})", CivilDate::from_jdn(jdn));
    Ok(())
}

fn year_cmd(args: YearArgs) -> Result<()> {
    let info = year_info(args.year);
    println!("{}", report::describe_year(&info, &thingyan(args.year)));
    Ok(())
}

fn month_cmd(args: MonthArgs, config: &AppConfig) -> Result<()> {
    let days = month_days(args.year, args.month)?;
    println!(
        "ME {} {} ({} days)",
        args.year,
        args.month.name_in(year_info(args.year).year_type),
        days.len()
    );
    for day in &days {
        println!("{}", report::month_row(day, &config.display));
    }
    Ok(())
}

fn criteria_from_args(args: &SearchArgs, config: &AppConfig) -> SearchCriteria {
    let mut criteria = SearchCriteria::new().logic(if args.or {
        LogicMode::Or
    } else {
        config.search.logic.into()
    });
    if let Some(year) = args.year {
        criteria = criteria.year(year);
    }
    if let Some(month) = args.month {
        criteria = criteria.month(month);
    }
    if let Some(phase) = args.phase {
        criteria = criteria.moon_phase(phase.into());
    }
    if let Some(weekday) = args.weekday {
        criteria = criteria.weekday(weekday.into());
    }
    if let Some(fd) = args.fortnight_day {
        criteria = criteria.fortnight_day(fd);
    }
    if args.sabbath {
        criteria = criteria.sabbath(true);
    }
    if args.sabbath_eve {
        criteria = criteria.sabbath_eve(true);
    }
    if args.yatyaza {
        criteria = criteria.yatyaza(true);
    }
    if args.pyathada {
        criteria = criteria.pyathada(true);
    }
    if args.thamanyo {
        criteria = criteria.thamanyo(true);
    }
    criteria
}

fn search_cmd(args: SearchArgs, config: &AppConfig) -> Result<()> {
    let criteria = criteria_from_args(&args, config);
    let max_span = args.max_span.unwrap_or(config.search.max_span_days);
    let limit = args.limit.or(config.search.limit);

    let hits = search_days(args.from.to_jdn(), args.to.to_jdn(), &criteria, max_span)
        .with_context(|| format!("search from {} to {}", args.from, args.to))?;
    info!(hits = hits.len(), "search complete");

    let shown = limit.unwrap_or(hits.len()).min(hits.len());
    for hit in &hits[..shown] {
        println!("{}", report::hit_row(hit));
    }
    if shown < hits.len() {
        println!("... {} more", hits.len() - shown);
    }
    println!("{} matching day(s)", hits.len());
    Ok(())
}
