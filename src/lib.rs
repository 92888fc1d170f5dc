//! # Sunclock
//!
//! Approximate local sunrise and sunset clock times for a calendar date,
//! a location and a whole-hour standard timezone.
//!
//! The model is a small closed-form approximation (equation of time, a
//! sinusoidal declination proxy and the sunrise hour-angle equation) accurate
//! to a few minutes at mid latitudes. United States daylight saving time can
//! optionally be applied.
//!
//! ## Architecture
//!
//! - **calculator**: `CalculationContext` and the sunrise/sunset facade
//! - **calendar**: Leap years, day of year, weekday and the US DST rule
//! - **geo**: Solar model, city database and timezone detection
//! - **config**: Configuration loading, validation, and default generation
//! - **args**: Command-line parsing for the `sunclock` binary
//! - **constants**: Model coefficients, defaults and limits
//! - **error**: Typed errors of the solar model
//! - **logger**: Structured logging with visual formatting
//! - **utils**: Angle conversion and formatting helpers

pub mod args;
pub mod calculator;
pub mod calendar;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod logger;
pub mod utils;

// Re-export important types for easier access
pub use calculator::{CalculationContext, ClockTime, SunTimes};
pub use config::Config;
pub use error::SolarError;
pub use logger::{Log, LogLevel};
