//! Geographic side of the calculation.
//!
//! This module provides:
//! - The closed-form solar model (equation of time, hour angle, local noon)
//! - City database lookup for coordinates
//! - Standard timezone offset detection from coordinates
//!
//! The solar model works with longitudes positive WEST. The city database and
//! timezone lookup use the usual geographic convention (positive EAST); the
//! helpers here convert between the two.

pub mod city;
pub mod solar;
pub mod timezone;

pub use city::{CityInfo, find_city, search_cities};
pub use timezone::{detect_standard_offset, determine_timezone_from_coordinates};

/// Convert a west-positive longitude to the geographic east-positive one.
pub fn west_to_east_longitude(west_longitude: f64) -> f64 {
    -west_longitude
}

/// Format coordinates for display, e.g. "39.9611°N, 82.9989°W".
///
/// # Arguments
/// * `latitude` - Degrees, positive north
/// * `west_longitude` - Degrees, positive WEST
pub fn format_coordinates(latitude: f64, west_longitude: f64) -> String {
    format!(
        "{:.4}°{}, {:.4}°{}",
        latitude.abs(),
        if latitude >= 0.0 { "N" } else { "S" },
        west_longitude.abs(),
        if west_longitude >= 0.0 { "W" } else { "E" }
    )
}
