//! Configuration system for sunclock with validation and city lookup.
//!
//! The configuration lives in `sunclock.toml` under the user's config directory
//! (`$XDG_CONFIG_HOME/sunclock/sunclock.toml` on Linux). A default file is
//! created on first use.
//!
//! ```toml
//! latitude = 39.9611       # positive north
//! longitude = 82.9989      # positive WEST
//! timezone = -5            # standard UTC offset in hours
//! auto_timezone = false    # detect the standard offset from the coordinates
//! adjust_for_dst = true    # apply the US daylight saving rule
//! city = "Columbus"        # optional, fills coordinates that are not set
//! ```
//!
//! ## Private coordinates
//!
//! A `geo.toml` next to the main file may hold `latitude` and `longitude`.
//! When present it overrides the main file, so the main configuration can be
//! shared without revealing a location. A malformed `geo.toml` is reported and
//! ignored.
//!
//! ## Validation
//!
//! The solar model itself accepts anything. This layer checks that latitude
//! is within ±90°, longitude within ±180° and the timezone within -12..=14
//! hours, and warns when the latitude is close enough to a pole for polar day
//! or night to occur.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::args::ComputeOptions;
use crate::calculator::CalculationContext;
use crate::constants::*;
use crate::geo::{self, CityInfo};
use crate::logger::Log;

/// Geographic override stored in `geo.toml`.
#[derive(Debug, Deserialize, Clone)]
struct GeoConfig {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Configuration structure for sunclock settings.
///
/// Every field is optional in the file; [`Config::load_from_path`] fills the
/// reference location defaults for anything left out.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Latitude in degrees, positive north.
    pub latitude: Option<f64>,
    /// Longitude in degrees, positive WEST.
    pub longitude: Option<f64>,
    /// Standard UTC offset in hours, negative west.
    pub timezone: Option<i32>,
    /// Detect the standard offset from the coordinates instead of `timezone`.
    pub auto_timezone: Option<bool>,
    /// Add an hour while US daylight saving time is in effect.
    pub adjust_for_dst: Option<bool>,
    /// City name ("Name" or "Name, Country") used when coordinates are absent.
    pub city: Option<String>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Path of the private coordinates file next to `config_path`.
    pub fn geo_path_for(config_path: &Path) -> Option<PathBuf> {
        config_path.parent().map(|parent| parent.join(GEO_FILE_NAME))
    }

    /// Write a default configuration file, creating parent directories.
    pub fn create_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_content = ConfigBuilder::new()
            .add_section("Sunclock configuration")
            .add_setting(
                "latitude",
                &format!("{:.4}", DEFAULT_LATITUDE),
                &format!(
                    "Latitude in degrees, positive north ({} to {})",
                    MINIMUM_LATITUDE, MAXIMUM_LATITUDE
                ),
            )
            .add_setting(
                "longitude",
                &format!("{:.4}", DEFAULT_LONGITUDE),
                &format!(
                    "Longitude in degrees, positive WEST ({} to {})",
                    MINIMUM_LONGITUDE, MAXIMUM_LONGITUDE
                ),
            )
            .add_setting(
                "timezone",
                &DEFAULT_TIMEZONE.to_string(),
                &format!(
                    "Standard UTC offset in hours, negative west ({} to {})",
                    MINIMUM_TIMEZONE, MAXIMUM_TIMEZONE
                ),
            )
            .add_setting(
                "auto_timezone",
                &DEFAULT_AUTO_TIMEZONE.to_string(),
                "Detect the standard offset from the coordinates",
            )
            .add_setting(
                "adjust_for_dst",
                &DEFAULT_ADJUST_FOR_DST.to_string(),
                "Add an hour during US daylight saving time",
            )
            .add_section("City lookup")
            .add_note("Set city = \"Name\" or \"Name, Country\" and remove latitude/longitude")
            .add_note("to take coordinates from the city database (see sunclock --find-city)")
            .build();

        fs::write(path, config_content).context("Failed to write default config file")?;
        Ok(())
    }

    /// Load and validate a configuration file.
    ///
    /// Does NOT create the file if it is missing.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Self::apply_defaults_and_validate_fields(&mut config)?;
        Self::load_geo_override_from_path(&mut config, path)?;
        validate_config(&config)?;
        config.warn_on_polar_latitude();

        Ok(config)
    }

    /// Load the configuration from the default location, creating it first
    /// if it does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)
                .context("Failed to create default config during load")?;
            Log::log_indented(&format!(
                "Created default configuration: {}",
                crate::utils::path_for_display(&config_path)
            ));
        }

        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    fn apply_defaults_and_validate_fields(config: &mut Config) -> Result<()> {
        // A city only fills coordinates the file leaves out
        if config.latitude.is_none() || config.longitude.is_none() {
            if let Some(query) = config.city.clone() {
                let latitude = config.latitude;
                let longitude = config.longitude;
                config.apply_city(&query)?;
                if latitude.is_some() {
                    config.latitude = latitude;
                }
                if longitude.is_some() {
                    config.longitude = longitude;
                }
            }
        }

        if config.latitude.is_none() {
            config.latitude = Some(DEFAULT_LATITUDE);
        }

        if config.longitude.is_none() {
            config.longitude = Some(DEFAULT_LONGITUDE);
        }

        if config.timezone.is_none() {
            config.timezone = Some(DEFAULT_TIMEZONE);
        }

        if config.auto_timezone.is_none() {
            config.auto_timezone = Some(DEFAULT_AUTO_TIMEZONE);
        }

        if config.adjust_for_dst.is_none() {
            config.adjust_for_dst = Some(DEFAULT_ADJUST_FOR_DST);
        }

        Ok(())
    }

    /// Apply `geo.toml` next to `config_path`, if there is one.
    fn load_geo_override_from_path(config: &mut Config, config_path: &Path) -> Result<()> {
        let Some(geo_path) = Self::geo_path_for(config_path) else {
            return Ok(());
        };

        if !geo_path.exists() {
            return Ok(());
        }

        match fs::read_to_string(&geo_path) {
            Ok(content) => match toml::from_str::<GeoConfig>(&content) {
                Ok(geo_config) => {
                    if let Some(lat) = geo_config.latitude {
                        config.latitude = Some(lat);
                    }
                    if let Some(lon) = geo_config.longitude {
                        config.longitude = Some(lon);
                    }

                    Log::log_debug(&format!(
                        "Loaded geographic overrides from {}",
                        crate::utils::path_for_display(&geo_path)
                    ));
                }
                Err(e) => {
                    Log::log_warning(&format!(
                        "Failed to parse {}: {}. Using coordinates from main config.",
                        GEO_FILE_NAME, e
                    ));
                }
            },
            Err(e) => {
                Log::log_warning(&format!(
                    "Failed to read {}: {}. Using coordinates from main config.",
                    GEO_FILE_NAME, e
                ));
            }
        }

        Ok(())
    }

    /// Replace the coordinates with those of a city from the database.
    pub fn apply_city(&mut self, query: &str) -> Result<CityInfo> {
        let city = geo::find_city(query)
            .with_context(|| format!("City '{}' not found in the city database", query))?;

        self.latitude = Some(city.latitude);
        self.longitude = Some(city.west_longitude());
        self.city = Some(city.display_name());

        Log::log_debug(&format!(
            "Using coordinates of {} ({})",
            city.display_name(),
            geo::format_coordinates(city.latitude, city.west_longitude())
        ));

        Ok(city)
    }

    /// Apply command-line settings on top of the loaded configuration.
    ///
    /// A city replaces the configured coordinates; explicit latitude and
    /// longitude win over both. An explicit timezone turns off detection.
    pub fn apply_overrides(&mut self, options: &ComputeOptions) -> Result<()> {
        if let Some(ref query) = options.city {
            self.apply_city(query)?;
        }

        if let Some(lat) = options.latitude {
            self.latitude = Some(lat);
        }
        if let Some(lon) = options.longitude {
            self.longitude = Some(lon);
        }

        if let Some(tz) = options.timezone {
            self.timezone = Some(tz);
            self.auto_timezone = Some(false);
        }
        if options.auto_timezone {
            self.auto_timezone = Some(true);
        }
        if options.no_dst {
            self.adjust_for_dst = Some(false);
        }

        validate_config(self).context("Invalid command-line override")?;
        self.warn_on_polar_latitude();
        Ok(())
    }

    /// Database city closest to the configured coordinates.
    pub fn nearest_city(&self) -> Option<CityInfo> {
        geo::city::find_cities_near_coordinate(
            self.latitude(),
            geo::west_to_east_longitude(self.longitude()),
            1,
        )
        .into_iter()
        .next()
    }

    pub fn latitude(&self) -> f64 {
        self.latitude.unwrap_or(DEFAULT_LATITUDE)
    }

    pub fn longitude(&self) -> f64 {
        self.longitude.unwrap_or(DEFAULT_LONGITUDE)
    }

    /// Standard UTC offset to use on `date`.
    ///
    /// With `auto_timezone` the zone is looked up from the coordinates;
    /// otherwise the configured `timezone` is returned.
    pub fn standard_timezone(&self, date: NaiveDate) -> Result<i32> {
        if !self.auto_timezone.unwrap_or(DEFAULT_AUTO_TIMEZONE) {
            return Ok(self.timezone.unwrap_or(DEFAULT_TIMEZONE));
        }

        let (tz, hours) = geo::detect_standard_offset(
            self.latitude(),
            geo::west_to_east_longitude(self.longitude()),
            date,
        )
        .context("Failed to detect timezone from coordinates")?;

        Log::log_debug(&format!("Detected timezone {} (UTC{:+})", tz.name(), hours));
        Ok(hours)
    }

    /// Build the calculation context for `date`.
    pub fn to_context(&self, date: NaiveDate) -> Result<CalculationContext> {
        Ok(CalculationContext::default()
            .with_naive_date(date)
            .with_latitude(self.latitude())
            .with_longitude(self.longitude())
            .with_timezone(self.standard_timezone(date)?)
            .with_adjust_for_dst(self.adjust_for_dst.unwrap_or(DEFAULT_ADJUST_FOR_DST)))
    }

    fn warn_on_polar_latitude(&self) {
        let lat = self.latitude();
        if lat.abs() > POLAR_WARNING_LATITUDE {
            Log::log_warning(&format!(
                "Latitude {:.4}°{} is beyond {}°: polar day or night may leave no sunrise or sunset",
                lat.abs(),
                if lat >= 0.0 { "N" } else { "S" },
                POLAR_WARNING_LATITUDE
            ));
        }
    }

    pub fn log_config(&self, source: Option<&Path>) {
        match source {
            Some(path) => Log::log_decorated(&format!(
                "Loaded configuration from {}",
                crate::utils::path_for_display(path)
            )),
            None => Log::log_decorated("Using built-in configuration"),
        }

        if let Some(ref city) = self.city {
            Log::log_indented(&format!("City: {}", city));
        }
        Log::log_indented(&format!(
            "Location: {}",
            geo::format_coordinates(self.latitude(), self.longitude())
        ));
        if self.auto_timezone.unwrap_or(DEFAULT_AUTO_TIMEZONE) {
            Log::log_indented("Timezone: detected from coordinates");
        } else {
            Log::log_indented(&format!(
                "Timezone: UTC{:+}",
                self.timezone.unwrap_or(DEFAULT_TIMEZONE)
            ));
        }
        Log::log_indented(&format!(
            "US daylight saving: {}",
            if self.adjust_for_dst.unwrap_or(DEFAULT_ADJUST_FOR_DST) {
                "on"
            } else {
                "off"
            }
        ));
    }
}

/// Check that every configured value is within its valid range.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(lat) = config.latitude {
        if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&lat) {
            anyhow::bail!(
                "Latitude must be between {} and {} degrees (got {})",
                MINIMUM_LATITUDE,
                MAXIMUM_LATITUDE,
                lat
            );
        }
    }

    if let Some(lon) = config.longitude {
        if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&lon) {
            anyhow::bail!(
                "Longitude must be between {} and {} degrees (got {})",
                MINIMUM_LONGITUDE,
                MAXIMUM_LONGITUDE,
                lon
            );
        }
    }

    if let Some(tz) = config.timezone {
        if !(MINIMUM_TIMEZONE..=MAXIMUM_TIMEZONE).contains(&tz) {
            anyhow::bail!(
                "Timezone must be between {} and {} hours (got {})",
                MINIMUM_TIMEZONE,
                MAXIMUM_TIMEZONE,
                tz
            );
        }
    }

    Ok(())
}

/// Builds a TOML file with comments aligned in one column.
struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

#[derive(Clone)]
struct ConfigEntry {
    content: String,
    entry_type: EntryType,
}

#[derive(Clone)]
enum EntryType {
    Section,
    Note,
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("#[{}]", title),
            entry_type: EntryType::Section,
        });
        self
    }

    fn add_note(mut self, text: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("# {}", text),
            entry_type: EntryType::Note,
        });
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        let line = format!("{} = {}", key, value);
        self.entries.push(ConfigEntry {
            content: line.clone(),
            entry_type: EntryType::Setting {
                line,
                comment: format!("# {}", comment),
            },
        });
        self
    }

    fn build(self) -> String {
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match &entry.entry_type {
                EntryType::Setting { line, .. } => Some(line.len()),
                EntryType::Section | EntryType::Note => None,
            })
            .max()
            .unwrap_or(0)
            + 1; // one space between setting and comment

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry.entry_type {
                EntryType::Section => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(entry.content);
                    first_section = false;
                }
                EntryType::Note => result.push(entry.content),
                EntryType::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{}{}{}", line, padding, comment));
                }
            }
        }

        let mut content = result.join("\n");
        content.push('\n');
        content
    }
}
