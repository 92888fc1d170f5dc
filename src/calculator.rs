//! Sunrise and sunset calculation for a date and location.
//!
//! [`CalculationContext`] is an immutable value holding everything one
//! calculation needs. Build it once per request with the `with_*` methods and
//! call [`CalculationContext::compute_sunrise`] /
//! [`CalculationContext::compute_sunset`]; every call recomputes from the
//! stored values.
//!
//! ```
//! use sunclock::CalculationContext;
//!
//! let context = CalculationContext::default().with_date(2015, 6, 21);
//! let sunrise = context.compute_sunrise().unwrap();
//! let sunset = context.compute_sunset().unwrap();
//! assert_eq!((sunrise.hour, sunrise.minute), (6, 8));
//! assert_eq!((sunset.hour, sunset.minute), (20, 58));
//! ```

use chrono::{Datelike, NaiveDate, NaiveTime};
use std::fmt;

use crate::calendar::{day_of_week, day_of_year, is_us_dst};
use crate::constants::*;
use crate::error::SolarError;
use crate::geo::solar;
use crate::utils::split_fractional_hours;

/// A clock reading produced by the model.
///
/// Values are raw: the hour is not wrapped into 0..24 and for negative
/// fractional hours both fields carry the sign (e.g. -5:-16). Use
/// [`ClockTime::normalized`] to wrap into a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: i32,
    pub minute: i32,
}

impl ClockTime {
    pub fn new(hour: i32, minute: i32) -> Self {
        Self { hour, minute }
    }

    /// Build from fractional hours by truncating toward zero.
    pub fn from_fractional_hours(value: f64) -> Self {
        let (hour, minute) = split_fractional_hours(value);
        Self { hour, minute }
    }

    /// Signed minutes since midnight of the calculation day.
    pub fn total_minutes(&self) -> i32 {
        self.hour * 60 + self.minute
    }

    /// Wrap into `00:00..=23:59`, carrying negative minutes into the hour.
    pub fn normalized(&self) -> Self {
        let minutes = self.total_minutes().rem_euclid(MINUTES_PER_DAY);
        Self {
            hour: minutes / 60,
            minute: minutes % 60,
        }
    }

    /// The normalized reading as a `NaiveTime`.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let normalized = self.normalized();
        NaiveTime::from_hms_opt(normalized.hour as u32, normalized.minute as u32, 0)
    }

    fn shifted_by_hours(self, hours: i32) -> Self {
        Self {
            hour: self.hour + hours,
            minute: self.minute,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Sunrise and sunset for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
    /// Hours between sunrise and sunset
    pub day_length_hours: f64,
    /// Whether the DST hour was added to both readings
    pub dst_applied: bool,
}

/// Everything needed to compute sunrise and sunset for one day.
///
/// No field is validated. An impossible date (April 31) is counted through
/// and coordinates are used as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationContext {
    month: i32,
    day: i32,
    year: i32,
    latitude: f64,
    longitude: f64,
    timezone: i32,
    adjust_for_dst: bool,
}

impl Default for CalculationContext {
    /// January 1, 2015 in Columbus, Ohio (US Eastern time, DST on).
    fn default() -> Self {
        Self {
            month: DEFAULT_MONTH,
            day: DEFAULT_DAY,
            year: DEFAULT_YEAR,
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            timezone: DEFAULT_TIMEZONE,
            adjust_for_dst: DEFAULT_ADJUST_FOR_DST,
        }
    }
}

impl CalculationContext {
    /// Create a context for a date at the default location.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self::default().with_date(year, month, day)
    }

    pub fn with_month(self, month: i32) -> Self {
        Self { month, ..self }
    }

    pub fn with_day(self, day: i32) -> Self {
        Self { day, ..self }
    }

    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    pub fn with_date(self, year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            day,
            ..self
        }
    }

    pub fn with_naive_date(self, date: NaiveDate) -> Self {
        self.with_date(date.year(), date.month() as i32, date.day() as i32)
    }

    /// Latitude in degrees, positive north.
    pub fn with_latitude(self, latitude: f64) -> Self {
        Self { latitude, ..self }
    }

    /// Longitude in degrees, positive WEST.
    pub fn with_longitude(self, longitude: f64) -> Self {
        Self { longitude, ..self }
    }

    /// Standard offset in hours, negative west (e.g. -5 for US Eastern).
    pub fn with_timezone(self, timezone: i32) -> Self {
        Self { timezone, ..self }
    }

    pub fn with_adjust_for_dst(self, adjust_for_dst: bool) -> Self {
        Self {
            adjust_for_dst,
            ..self
        }
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn timezone(&self) -> i32 {
        self.timezone
    }

    pub fn adjust_for_dst(&self) -> bool {
        self.adjust_for_dst
    }

    pub fn day_of_year(&self) -> i32 {
        day_of_year(self.year, self.month, self.day)
    }

    /// 1 = Sunday through 7 = Saturday.
    pub fn day_of_week(&self) -> i32 {
        day_of_week(self.year, self.month, self.day)
    }

    /// Whether the DST hour will be added to the results.
    pub fn is_dst_active(&self) -> bool {
        self.adjust_for_dst && is_us_dst(self.day, self.month, self.day_of_week())
    }

    /// Solar noon as fractional hours of local standard time.
    pub fn local_noon(&self) -> f64 {
        solar::local_noon(self.day_of_year(), self.longitude, self.timezone)
    }

    /// Half the day length in hours.
    pub fn hours_around_local_noon(&self) -> Result<f64, SolarError> {
        solar::hours_around_local_noon(self.day_of_year(), self.latitude)
    }

    /// Approximate local clock time of sunrise.
    pub fn compute_sunrise(&self) -> Result<ClockTime, SolarError> {
        let sunrise = self.checked_local_noon()? - self.hours_around_local_noon()?;
        Ok(self.to_clock_time(sunrise))
    }

    /// Approximate local clock time of sunset.
    pub fn compute_sunset(&self) -> Result<ClockTime, SolarError> {
        let sunset = self.checked_local_noon()? + self.hours_around_local_noon()?;
        Ok(self.to_clock_time(sunset))
    }

    /// Sunrise, sunset and day length in one pass.
    pub fn compute_sun_times(&self) -> Result<SunTimes, SolarError> {
        let noon = self.checked_local_noon()?;
        let half_day = self.hours_around_local_noon()?;

        Ok(SunTimes {
            sunrise: self.to_clock_time(noon - half_day),
            sunset: self.to_clock_time(noon + half_day),
            day_length_hours: 2.0 * half_day,
            dst_applied: self.is_dst_active(),
        })
    }

    // A NaN noon would otherwise truncate to a plausible 00:00
    fn checked_local_noon(&self) -> Result<f64, SolarError> {
        let noon = self.local_noon();
        if !noon.is_finite() {
            return Err(SolarError::NonFiniteNoon {
                longitude: self.longitude,
                day_of_year: self.day_of_year(),
            });
        }
        Ok(noon)
    }

    fn to_clock_time(&self, fractional_hours: f64) -> ClockTime {
        let time = ClockTime::from_fractional_hours(fractional_hours);
        if self.is_dst_active() {
            time.shifted_by_hours(1)
        } else {
            time
        }
    }
}
