//! sunclock: approximate local sunrise and sunset clock times.
//!
//! Loads the configuration, applies command-line overrides and prints the
//! sun times for one or more consecutive days.

use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate};
use std::path::PathBuf;

use sunclock::args::{self, CliAction, ComputeOptions, ParsedArgs};
use sunclock::calculator::{CalculationContext, SunTimes};
use sunclock::config::Config;
use sunclock::constants::*;
use sunclock::geo;
use sunclock::logger::Log;
use sunclock::utils::{path_for_display, split_fractional_hours};

fn main() -> Result<()> {
    let parsed = ParsedArgs::from_env();

    let result = match parsed.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            return Ok(());
        }
        CliAction::ShowHelp(text) => {
            print!("{}", text);
            return Ok(());
        }
        CliAction::ShowHelpDueToError(text) => {
            eprint!("{}", text);
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::FindCity {
            query,
            debug_enabled,
        } => {
            Log::set_debug(debug_enabled);
            run_find_city(&query)
        }
        CliAction::InitConfig {
            path,
            debug_enabled,
        } => {
            Log::set_debug(debug_enabled);
            run_init_config(path)
        }
        CliAction::Compute(options) => {
            Log::set_debug(options.debug_enabled);
            Log::set_enabled(!options.quiet);
            run_compute(&options)
        }
    };

    if let Err(e) = result {
        // Errors are reported even in quiet mode
        Log::set_enabled(true);
        Log::log_error(&format!("{:#}", e));
        std::process::exit(EXIT_FAILURE);
    }

    Ok(())
}

fn run_find_city(query: &str) -> Result<()> {
    Log::log_version();

    let cities = geo::search_cities(query, MAX_CITY_RESULTS);
    if cities.is_empty() {
        anyhow::bail!("No cities match '{}'", query);
    }

    Log::log_decorated(&format!("Cities matching '{}':", query));
    for city in &cities {
        Log::log_indented(&format!(
            "{} ({})",
            city.display_name(),
            geo::format_coordinates(city.latitude, city.west_longitude())
        ));
    }
    Log::log_end();
    Ok(())
}

fn run_init_config(path: Option<PathBuf>) -> Result<()> {
    Log::log_version();

    let path = match path {
        Some(path) => path,
        None => Config::get_config_path()?,
    };

    if path.exists() {
        anyhow::bail!(
            "Configuration file already exists at {}",
            path_for_display(&path)
        );
    }

    Config::create_default_config(&path)?;
    Log::log_decorated(&format!(
        "Created default configuration: {}",
        path_for_display(&path)
    ));
    Log::log_end();
    Ok(())
}

fn run_compute(options: &ComputeOptions) -> Result<()> {
    Log::log_version();

    let (mut config, source) = match options.config_path {
        Some(ref path) => (Config::load_from_path(path)?, path.clone()),
        None => (Config::load()?, Config::get_config_path()?),
    };

    config.apply_overrides(options)?;

    if Log::is_debug() {
        config.log_config(Some(&source));
        log_nearest_city(&config);
        Log::log_pipe();
    }

    let start = match options.date {
        Some(date) => date,
        None => chrono::Local::now().date_naive(),
    };

    warn_outside_weekday_range(&config, start, options.days);

    let mut date = start;
    for index in 0..options.days {
        if index > 0 {
            date = date
                .succ_opt()
                .with_context(|| format!("Date out of range after {}", date))?;
        }

        let context = config.to_context(date)?;
        report_day(date, &context, options.quiet, index == 0);
    }

    Log::log_end();
    Ok(())
}

/// The DST rule depends on the weekday formula, which is only exact from
/// 1977 through 2099.
fn warn_outside_weekday_range(config: &Config, start: NaiveDate, days: u32) {
    if !config.adjust_for_dst.unwrap_or(DEFAULT_ADJUST_FOR_DST) {
        return;
    }

    let Some(end) = start.checked_add_days(Days::new(u64::from(days.saturating_sub(1)))) else {
        return;
    };
    if start.year() < WEEKDAY_REFERENCE_YEAR || end.year() > LAST_EXACT_WEEKDAY_YEAR {
        Log::log_warning(&format!(
            "Daylight saving dates are approximate outside {}-{}",
            WEEKDAY_REFERENCE_YEAR, LAST_EXACT_WEEKDAY_YEAR
        ));
    }
}

/// Name the database city closest to the configured coordinates.
fn log_nearest_city(config: &Config) {
    if let Some(city) = config.nearest_city() {
        Log::log_debug(&format!(
            "Nearest city: {} ({})",
            city.display_name(),
            geo::format_coordinates(city.latitude, city.west_longitude())
        ));
    }
}

fn report_day(date: NaiveDate, context: &CalculationContext, quiet: bool, first: bool) {
    let result = context.compute_sun_times();

    if quiet {
        match result {
            Ok(times) => println!(
                "{} {} {}",
                date.format("%Y-%m-%d"),
                times.sunrise.normalized(),
                times.sunset.normalized()
            ),
            Err(_) => println!("{} --:-- --:--", date.format("%Y-%m-%d")),
        }
        return;
    }

    let heading = format!(
        "Sun times for {} ({}, UTC{:+}{})",
        date.format("%Y-%m-%d"),
        geo::format_coordinates(context.latitude(), context.longitude()),
        context.timezone(),
        if context.is_dst_active() { ", DST" } else { "" }
    );
    if first {
        Log::log_decorated(&heading);
    } else {
        Log::log_block_start(&heading);
    }

    Log::log_debug(&format!(
        "Day {} of year, weekday {}, local noon {:.4} h",
        context.day_of_year(),
        context.day_of_week(),
        context.local_noon()
    ));

    match result {
        Ok(times) => log_sun_times(&times),
        Err(e) => {
            let kind = if e.is_polar_day() {
                "Polar day: the sun does not set"
            } else if e.is_polar_night() {
                "Polar night: the sun does not rise"
            } else {
                "No sunrise or sunset"
            };
            Log::log_indented(kind);
            Log::log_debug(&e.to_string());
        }
    }
}

fn log_sun_times(times: &SunTimes) {
    Log::log_indented(&format!(
        "Sunrise: {}{}",
        times.sunrise.normalized(),
        day_shift_note(times.sunrise.total_minutes())
    ));
    Log::log_indented(&format!(
        "Sunset:  {}{}",
        times.sunset.normalized(),
        day_shift_note(times.sunset.total_minutes())
    ));

    let (hours, minutes) = split_fractional_hours(times.day_length_hours);
    Log::log_indented(&format!("Day length: {}h {:02}m", hours, minutes));
}

/// Note for times that fall outside the calendar day once wrapped.
fn day_shift_note(total_minutes: i32) -> &'static str {
    if total_minutes < 0 {
        " (previous day)"
    } else if total_minutes >= MINUTES_PER_DAY {
        " (next day)"
    } else {
        ""
    }
}
