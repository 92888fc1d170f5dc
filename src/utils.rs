//! Utility functions shared across the codebase.
//!
//! Angle conversions used by the solar model, the fractional-hour split used
//! to turn model output into clock readings, and a small path helper for
//! log output.

use std::f64::consts::PI;
use std::path::Path;

/// Convert an angle from radians to degrees.
///
/// # Examples
/// ```
/// use sunclock::utils::to_degrees;
/// assert_eq!(to_degrees(std::f64::consts::PI), 180.0);
/// ```
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Convert an angle from degrees to radians.
///
/// # Examples
/// ```
/// use sunclock::utils::to_radians;
/// assert_eq!(to_radians(180.0), std::f64::consts::PI);
/// ```
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Split a fractional hour value into whole hours and whole minutes.
///
/// Both parts are truncated toward zero, so negative values yield a negative
/// hour and a negative (or zero) minute. The casts saturate: NaN becomes
/// `(0, 0)`, so callers must reject non-finite input first.
///
/// # Examples
/// ```
/// use sunclock::utils::split_fractional_hours;
/// assert_eq!(split_fractional_hours(6.5), (6, 30));
/// assert_eq!(split_fractional_hours(-0.5), (0, -30));
/// ```
pub fn split_fractional_hours(value: f64) -> (i32, i32) {
    let hour = value.trunc() as i32;
    let minute = ((value - hour as f64) * 60.0).trunc() as i32;
    (hour, minute)
}

/// Format a path for display, replacing the home directory with `~`.
pub fn path_for_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
