//! Standard timezone offset detection from geographic coordinates.
//!
//! The solar model wants the standard (non-DST) UTC offset in whole hours.
//! This module finds the IANA zone containing a coordinate and reads that
//! zone's base offset for a given date.

use anyhow::Result;
use chrono::{NaiveDate, TimeZone};
use chrono_tz::{OffsetComponents, Tz};

/// Determine the timezone for given coordinates using timezone boundary data.
///
/// Uses the tzf-rs crate for timezone detection based on geographic boundaries.
/// Falls back to `TZ` from the environment, then UTC, when the zone name
/// cannot be parsed.
///
/// # Arguments
/// * `latitude` - Latitude in degrees, positive north
/// * `east_longitude` - Longitude in degrees, positive EAST (geographic convention)
pub fn determine_timezone_from_coordinates(latitude: f64, east_longitude: f64) -> Tz {
    use std::sync::OnceLock;
    use tzf_rs::DefaultFinder;

    static FINDER: OnceLock<DefaultFinder> = OnceLock::new();
    let finder = FINDER.get_or_init(DefaultFinder::new);

    // tzf-rs uses (longitude, latitude) order
    let tz_name = finder.get_tz_name(east_longitude, latitude);

    match tz_name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => match std::env::var("TZ") {
            Ok(tz_str) => tz_str.parse().unwrap_or(Tz::UTC),
            Err(_) => Tz::UTC,
        },
    }
}

/// Standard UTC offset of `tz` on `date`, in whole hours.
///
/// Daylight saving is stripped, so a zone reports the same value all year
/// unless its base offset itself changed.
///
/// # Returns
/// * `Ok(hours)` - Base offset, negative west of Greenwich
/// * `Err(_)` - The zone's standard offset is not a whole number of hours
pub fn standard_offset_hours(tz: &Tz, date: NaiveDate) -> Result<i32> {
    let offset = tz.offset_from_utc_date(&date);
    let seconds = offset.base_utc_offset().num_seconds();

    if seconds % 3600 != 0 {
        anyhow::bail!(
            "Timezone {} has a standard offset of {}h{:02}m; only whole-hour offsets are supported",
            tz.name(),
            seconds / 3600,
            (seconds.abs() % 3600) / 60
        );
    }

    Ok((seconds / 3600) as i32)
}

/// Detect the zone and its standard offset for a coordinate in one step.
pub fn detect_standard_offset(
    latitude: f64,
    east_longitude: f64,
    date: NaiveDate,
) -> Result<(Tz, i32)> {
    let tz = determine_timezone_from_coordinates(latitude, east_longitude);
    let hours = standard_offset_hours(&tz, date)?;
    Ok((tz, hours))
}
