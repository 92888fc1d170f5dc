//! Command-line argument parsing and processing.
//!
//! Arguments are declared with clap's derive API and then reduced to a
//! [`CliAction`] so that the main loop only has to dispatch on one value.
//! Help, version and parse errors are turned into actions as well instead of
//! letting clap exit the process.

use chrono::NaiveDate;
use clap::{Parser, error::ErrorKind};
use std::path::PathBuf;

use crate::constants::*;
use crate::logger::Log;

#[derive(Parser, Debug)]
#[command(
    name = "sunclock",
    version,
    about = "Approximate local sunrise and sunset clock times"
)]
struct Cli {
    /// Date to compute (YYYY-MM-DD, default: today)
    #[arg(short = 'D', long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Number of consecutive days to compute
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_DAYS,
        value_parser = clap::value_parser!(u32).range(MINIMUM_DAYS as i64..=MAXIMUM_DAYS as i64)
    )]
    days: u32,

    /// Latitude in degrees, positive north
    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Longitude in degrees, positive WEST
    #[arg(long, allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// Standard UTC offset in hours, negative west
    #[arg(long, allow_negative_numbers = true)]
    timezone: Option<i32>,

    /// Detect the standard offset from the coordinates
    #[arg(long, conflicts_with = "timezone")]
    auto_timezone: bool,

    /// Do not apply the US daylight saving shift
    #[arg(long)]
    no_dst: bool,

    /// Take coordinates from the city database ("Name" or "Name, Country")
    #[arg(long)]
    city: Option<String>,

    /// List cities matching a name and exit
    #[arg(long, value_name = "NAME")]
    find_city: Option<String>,

    /// Load this configuration file instead of the default one
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    init_config: bool,

    /// Enable detailed debug output
    #[arg(short, long)]
    debug: bool,

    /// Print only the times, one line per day
    #[arg(short, long)]
    quiet: bool,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD ({})", e))
}

/// Settings for a sun time computation collected from the command line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComputeOptions {
    pub date: Option<NaiveDate>,
    pub days: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<i32>,
    pub auto_timezone: bool,
    pub no_dst: bool,
    pub city: Option<String>,
    pub config_path: Option<PathBuf>,
    pub debug_enabled: bool,
    pub quiet: bool,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Compute sunrise and sunset for one or more days
    Compute(ComputeOptions),
    /// Search the city database and print the matches
    FindCity { query: String, debug_enabled: bool },
    /// Write a default configuration file
    InitConfig {
        path: Option<PathBuf>,
        debug_enabled: bool,
    },
    /// Display help information and exit
    ShowHelp(String),
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit
    ShowHelpDueToError(String),
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments, program name first
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) => {
                let action = match e.kind() {
                    ErrorKind::DisplayHelp => CliAction::ShowHelp(e.to_string()),
                    ErrorKind::DisplayVersion => CliAction::ShowVersion,
                    _ => CliAction::ShowHelpDueToError(e.to_string()),
                };
                return ParsedArgs { action };
            }
        };

        // Listing cities and writing the config take precedence over computing
        let action = if let Some(query) = cli.find_city {
            CliAction::FindCity {
                query,
                debug_enabled: cli.debug,
            }
        } else if cli.init_config {
            CliAction::InitConfig {
                path: cli.config,
                debug_enabled: cli.debug,
            }
        } else {
            CliAction::Compute(ComputeOptions {
                date: cli.date,
                days: cli.days,
                latitude: cli.latitude,
                longitude: cli.longitude,
                timezone: cli.timezone,
                auto_timezone: cli.auto_timezone,
                no_dst: cli.no_dst,
                city: cli.city,
                config_path: cli.config,
                debug_enabled: cli.debug,
                quiet: cli.quiet,
            })
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args_os()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args_os())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    Log::log_version();
    Log::log_pipe();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}
