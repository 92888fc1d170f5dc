//! Closed-form solar model for sunrise and sunset clock times.
//!
//! This module implements a low-order approximation rather than a full
//! ephemeris: the equation of time from the sun's mean anomaly with a single
//! eccentricity term, and the sunrise hour angle from a sine proxy of the
//! solar declination. Results are typically within a few minutes of almanac
//! values outside the polar circles.
//!
//! Longitudes here are positive WEST and timezones are standard offsets in
//! hours, negative for the western hemisphere (e.g. -5 for US Eastern).

use crate::constants::*;
use crate::error::SolarError;
use crate::utils::{to_degrees, to_radians};

/// Equation of time for the given day of the year, in minutes.
///
/// Positive values mean the sundial runs ahead of the clock.
///
/// # Arguments
/// * `day_of_year` - Day number within the year, January 1 = 1
///
/// # Examples
/// ```
/// use sunclock::geo::solar::equation_of_time;
/// let eot = equation_of_time(306); // early November maximum
/// assert!(eot > 16.0 && eot < 16.5);
/// ```
pub fn equation_of_time(day_of_year: i32) -> f64 {
    let d = day_of_year as f64;
    let w = 360.0 / TROPICAL_YEAR_DAYS;
    let a = w * (d + SOLSTICE_OFFSET_DAYS);
    let b = a + ORBIT_ECCENTRICITY_DEGREES * to_radians(w * (d - PERIHELION_OFFSET_DAYS)).sin();
    let c = (a
        - to_degrees(
            (to_radians(b).tan() / to_radians(AXIAL_TILT_DEGREES).cos()).atan(),
        ))
        / 180.0;
    // Truncation of c + 0.5, not round(): the two differ for negative c
    let c_int = (c + 0.5).trunc();
    MINUTES_PER_HALF_DAY * (c - c_int)
}

/// Sine factor standing in for the solar declination on the given day.
///
/// Ranges over [-1, 1]; multiplied by the axial tilt it approximates the
/// declination in degrees.
pub fn solar_declination_factor(day_of_year: i32) -> f64 {
    let d = day_of_year as f64;
    to_radians((360.0 * (d + DECLINATION_PHASE_DAYS)) / CALENDAR_YEAR_DAYS).sin()
}

/// Half the length of the daylight period, in hours.
///
/// # Arguments
/// * `day_of_year` - Day number within the year, January 1 = 1
/// * `latitude` - Latitude in degrees, positive north
///
/// # Returns
/// * `Ok(hours)` - Hours between local noon and sunrise (or sunset), never negative
/// * `Err(SolarError::AngleDomain)` - The sun does not cross the horizon that day
pub fn hours_around_local_noon(day_of_year: i32, latitude: f64) -> Result<f64, SolarError> {
    let declination = AXIAL_TILT_DEGREES * solar_declination_factor(day_of_year);
    let argument = -to_radians(latitude).tan() * to_radians(declination).tan();

    if !(-1.0..=1.0).contains(&argument) {
        return Err(SolarError::AngleDomain {
            argument,
            latitude,
            day_of_year,
        });
    }

    Ok((to_degrees(argument.acos()) / DEGREES_PER_HOUR).abs())
}

/// Central meridian of a standard timezone, in degrees west.
///
/// # Examples
/// ```
/// use sunclock::geo::solar::standard_meridian;
/// assert_eq!(standard_meridian(-5), 75.0);
/// assert_eq!(standard_meridian(1), -15.0);
/// ```
pub fn standard_meridian(timezone: i32) -> f64 {
    -(timezone as f64) * DEGREES_PER_HOUR
}

/// Clock time of solar noon as fractional hours in local standard time.
///
/// # Arguments
/// * `day_of_year` - Day number within the year, January 1 = 1
/// * `longitude` - Longitude in degrees, positive WEST
/// * `timezone` - Standard offset in hours, negative west
pub fn local_noon(day_of_year: i32, longitude: f64, timezone: i32) -> f64 {
    let longitude_deviation_time = (longitude - standard_meridian(timezone)) / DEGREES_PER_HOUR;
    let correction = longitude_deviation_time - equation_of_time(day_of_year) / 60.0;
    SOLAR_NOON_HOUR + correction
}
