//! Application constants and default values for sunclock.
//!
//! This module contains the reference location used when nothing is configured,
//! the fixed coefficients of the solar model, validation limits applied to user
//! input, and operational constants used by the binary.

// ═══ Calculation Context Defaults ═══
// Reference location: Columbus, Ohio (US Eastern time)

pub const DEFAULT_MONTH: i32 = 1;
pub const DEFAULT_DAY: i32 = 1;
pub const DEFAULT_YEAR: i32 = 2015;
pub const DEFAULT_LATITUDE: f64 = 39.9611; // degrees, positive north
pub const DEFAULT_LONGITUDE: f64 = 82.9989; // degrees, positive WEST
pub const DEFAULT_TIMEZONE: i32 = -5; // hours, standard time
pub const DEFAULT_ADJUST_FOR_DST: bool = true;
pub const DEFAULT_AUTO_TIMEZONE: bool = false;
pub const DEFAULT_DAYS: u32 = 1;

// ═══ Solar Model Coefficients ═══

pub const AXIAL_TILT_DEGREES: f64 = 23.44;
pub const TROPICAL_YEAR_DAYS: f64 = 365.24; // used by the equation of time
pub const CALENDAR_YEAR_DAYS: f64 = 365.0; // used by the declination proxy
pub const ORBIT_ECCENTRICITY_DEGREES: f64 = 1.914;
pub const SOLSTICE_OFFSET_DAYS: f64 = 10.0; // December solstice to January 1
pub const PERIHELION_OFFSET_DAYS: f64 = 2.0; // January 1 to perihelion
pub const DECLINATION_PHASE_DAYS: f64 = 284.0;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MINUTES_PER_HALF_DAY: f64 = 720.0;
pub const MINUTES_PER_DAY: i32 = 24 * 60;
pub const SOLAR_NOON_HOUR: f64 = 12.0;

// ═══ Calendar Model ═══
// The weekday formula is anchored on Sunday, January 2, 1977 and counts one
// leap day every four years, which holds until the 2100 century exception.

pub const WEEKDAY_REFERENCE_YEAR: i32 = 1977;
pub const WEEKDAY_REFERENCE_DAY_OF_YEAR: i32 = 2;
pub const LAST_EXACT_WEEKDAY_YEAR: i32 = 2099;
pub const DST_START_MONTH: i32 = 3; // second Sunday of March
pub const DST_END_MONTH: i32 = 11; // first Sunday of November
pub const DST_SECOND_SUNDAY_EARLIEST_DAY: i32 = 8;

// ═══ Validation Limits ═══
// The library itself accepts anything; these apply to config files and flags

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;
pub const MINIMUM_TIMEZONE: i32 = -12;
pub const MAXIMUM_TIMEZONE: i32 = 14;
pub const MINIMUM_DAYS: u32 = 1;
pub const MAXIMUM_DAYS: u32 = 366;

// Beyond this latitude polar day or night is possible for part of the year
pub const POLAR_WARNING_LATITUDE: f64 = 65.0;

// ═══ Files ═══

pub const CONFIG_DIR_NAME: &str = "sunclock";
pub const CONFIG_FILE_NAME: &str = "sunclock.toml";
pub const GEO_FILE_NAME: &str = "geo.toml";

// ═══ City Search ═══

pub const MAX_CITY_RESULTS: usize = 10;

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1;

// ═══ Test Constants ═══
// Common values used in tests for consistency
#[cfg(test)]
pub mod test_constants {
    use super::*;

    pub const TEST_COLUMBUS_LATITUDE: f64 = DEFAULT_LATITUDE;
    pub const TEST_COLUMBUS_LONGITUDE: f64 = DEFAULT_LONGITUDE;
    pub const TEST_COLUMBUS_TIMEZONE: i32 = DEFAULT_TIMEZONE;
    pub const TEST_ARCTIC_LATITUDE: f64 = 70.0;
}
