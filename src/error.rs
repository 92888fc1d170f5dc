//! Error types for the solar model.

/// Error type for the fallible parts of the sunrise/sunset model.
///
/// The model accepts any date and coordinates without validation. It fails
/// when the hour-angle arccos leaves its domain, which happens when the sun
/// never crosses the horizon on the given day, and when a non-finite
/// longitude makes local noon undefined.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolarError {
    /// Returned when the arccos argument of the hour angle is outside [-1, 1]
    /// (or NaN).
    #[error(
        "no sunrise or sunset at latitude {latitude} on day {day_of_year}: \
         hour angle cosine {argument} is outside [-1, 1]"
    )]
    AngleDomain {
        /// The arccos argument that was computed.
        argument: f64,
        /// Latitude in degrees, positive north.
        latitude: f64,
        /// Day of the year the calculation was made for.
        day_of_year: i32,
    },

    /// Returned when local noon is NaN or infinite.
    #[error("local noon is undefined for longitude {longitude} on day {day_of_year}")]
    NonFiniteNoon {
        /// Longitude in degrees, positive WEST.
        longitude: f64,
        /// Day of the year the calculation was made for.
        day_of_year: i32,
    },
}

impl SolarError {
    /// True when the sun stays above the horizon all day.
    pub fn is_polar_day(&self) -> bool {
        match self {
            SolarError::AngleDomain { argument, .. } => *argument < -1.0,
            SolarError::NonFiniteNoon { .. } => false,
        }
    }

    /// True when the sun stays below the horizon all day.
    pub fn is_polar_night(&self) -> bool {
        match self {
            SolarError::AngleDomain { argument, .. } => *argument > 1.0,
            SolarError::NonFiniteNoon { .. } => false,
        }
    }
}
