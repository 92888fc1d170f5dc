use chrono::NaiveDate;
use chrono_tz::Tz;
use proptest::prelude::*;
use sunclock::CalculationContext;
use sunclock::geo::solar::{equation_of_time, hours_around_local_noon, local_noon};
use sunclock::geo::timezone::{determine_timezone_from_coordinates, standard_offset_hours};

/// Generate valid latitude values
fn latitude_strategy() -> impl Strategy<Value = f64> {
    -90.0..=90.0
}

/// Generate valid longitude values
fn longitude_strategy() -> impl Strategy<Value = f64> {
    -180.0..=180.0
}

/// Latitudes where the sun rises and sets every day of the year
fn temperate_latitude_strategy() -> impl Strategy<Value = f64> {
    -60.0..=60.0
}

fn day_of_year_strategy() -> impl Strategy<Value = i32> {
    1..=366
}

/// Property tests for the closed-form solar model
#[cfg(test)]
mod solar_model_tests {
    use super::*;

    proptest! {
        /// Outside the polar regions every day has a sunrise and a sunset
        #[test]
        fn test_half_day_within_bounds(
            day in day_of_year_strategy(),
            lat in temperate_latitude_strategy()
        ) {
            let hours = hours_around_local_noon(day, lat).unwrap();
            prop_assert!(hours > 0.0 && hours < 12.0,
                "half day {} out of range at lat {} day {}", hours, lat, day);
        }

        /// Opposite hemispheres share the 24 hours of the day
        #[test]
        fn test_hemispheres_are_complementary(
            day in day_of_year_strategy(),
            lat in temperate_latitude_strategy()
        ) {
            let north = hours_around_local_noon(day, lat).unwrap();
            let south = hours_around_local_noon(day, -lat).unwrap();
            prop_assert!((north + south - 12.0).abs() < 1e-9);
        }

        /// The hour angle either succeeds or reports which pole case applies
        #[test]
        fn test_hour_angle_never_panics(
            day in day_of_year_strategy(),
            lat in latitude_strategy()
        ) {
            match hours_around_local_noon(day, lat) {
                Ok(hours) => prop_assert!((0.0..=12.0).contains(&hours)),
                Err(e) => prop_assert!(e.is_polar_day() || e.is_polar_night() || lat.abs() == 90.0),
            }
        }

        #[test]
        fn test_equation_of_time_bounded(day in day_of_year_strategy()) {
            let eot = equation_of_time(day);
            prop_assert!((-15.0..=17.0).contains(&eot), "EoT {} on day {}", eot, day);
        }

        /// Moving one timezone width west delays local noon by one hour
        #[test]
        fn test_local_noon_tracks_longitude(
            day in day_of_year_strategy(),
            lon in -150.0..150.0f64,
            tz in -12i32..=14
        ) {
            let here = local_noon(day, lon, tz);
            let west = local_noon(day, lon + 15.0, tz);
            prop_assert!((west - here - 1.0).abs() < 1e-9);
        }

        #[test]
        fn test_sunrise_before_sunset(
            date in (2000i32..=2099, 1i32..=12, 1i32..=28),
            lat in temperate_latitude_strategy(),
            lon in longitude_strategy(),
            tz in -12i32..=14,
            dst in prop::bool::ANY
        ) {
            let (y, m, d) = date;
            let context = CalculationContext::new(y, m, d)
                .with_latitude(lat)
                .with_longitude(lon)
                .with_timezone(tz)
                .with_adjust_for_dst(dst);

            let times = context.compute_sun_times().unwrap();
            prop_assert!(times.sunrise.total_minutes() < times.sunset.total_minutes());
            prop_assert!(times.day_length_hours > 0.0 && times.day_length_hours < 24.0);
        }

        /// The US shift moves both events by exactly one hour
        #[test]
        fn test_dst_shift_is_one_hour(
            day in 1i32..=28,
            month in 4i32..=10,
            lat in temperate_latitude_strategy()
        ) {
            let context = CalculationContext::new(2015, month, day).with_latitude(lat);
            prop_assert!(context.is_dst_active());

            let shifted = context.compute_sunrise().unwrap();
            let standard = context.with_adjust_for_dst(false).compute_sunrise().unwrap();
            prop_assert_eq!(shifted.total_minutes() - standard.total_minutes(), 60);
        }

        /// A context is a value: computing twice gives the same answer
        #[test]
        fn test_computation_is_repeatable(
            day in 1i32..=28,
            month in 1i32..=12,
            lat in temperate_latitude_strategy(),
            lon in longitude_strategy()
        ) {
            let context = CalculationContext::new(2020, month, day)
                .with_latitude(lat)
                .with_longitude(lon);
            prop_assert_eq!(context.compute_sun_times(), context.compute_sun_times());
        }
    }
}

/// Property tests for timezone detection functionality
#[cfg(test)]
mod timezone_detection_tests {
    use super::*;

    /// Generate coordinates that are likely to be on land (not in oceans)
    fn land_coordinates_strategy() -> impl Strategy<Value = (f64, f64)> {
        prop_oneof![
            // North America
            (25.0..50.0, -130.0..-65.0),
            // South America
            (-55.0..15.0, -85.0..-35.0),
            // Europe
            (35.0..70.0, -10.0..40.0),
            // Africa
            (-35.0..35.0, -20.0..50.0),
            // Asia
            (0.0..75.0, 25.0..180.0),
            // Australia
            (-45.0..-10.0, 110.0..155.0),
        ]
    }

    proptest! {
        /// Any coordinate resolves to some zone without panicking
        #[test]
        fn test_valid_coordinates_return_timezone(
            lat in latitude_strategy(),
            lon in longitude_strategy()
        ) {
            let tz = determine_timezone_from_coordinates(lat, lon);
            prop_assert!(!tz.name().is_empty());
        }

        /// Known cities resolve to their zone and standard offset
        #[test]
        fn test_major_cities_standard_offsets(city_index in 0..9usize) {
            let cities = [
                (40.7128, -74.0060, "America/New_York", -5),
                (51.5074, -0.1278, "Europe/London", 0),
                (35.6762, 139.6503, "Asia/Tokyo", 9),
                (-33.8688, 151.2093, "Australia/Sydney", 10),
                (34.0522, -118.2437, "America/Los_Angeles", -8),
                (41.8781, -87.6298, "America/Chicago", -6),
                (48.8566, 2.3522, "Europe/Paris", 1),
                (55.7558, 37.6173, "Europe/Moscow", 3),
                (-23.5505, -46.6333, "America/Sao_Paulo", -3),
            ];

            let (lat, lon, expected_tz_str, expected_offset) = cities[city_index];
            let tz = determine_timezone_from_coordinates(lat, lon);
            prop_assert_eq!(tz, expected_tz_str.parse::<Tz>().unwrap());

            // The standard offset ignores summer time in either hemisphere
            for month in [1, 7] {
                let date = NaiveDate::from_ymd_opt(2015, month, 15).unwrap();
                prop_assert_eq!(standard_offset_hours(&tz, date).unwrap(), expected_offset);
            }
        }

        /// Whole-hour standard offsets stay within the accepted timezone range
        #[test]
        fn test_standard_offset_bounds(
            (lat, lon) in land_coordinates_strategy(),
            month in 1u32..=12
        ) {
            let tz = determine_timezone_from_coordinates(lat, lon);
            let date = NaiveDate::from_ymd_opt(2015, month, 1).unwrap();

            // Half-hour zones such as Asia/Kolkata are rejected, not rounded
            if let Ok(hours) = standard_offset_hours(&tz, date) {
                prop_assert!((-12..=14).contains(&hours),
                    "offset {} for {} at ({}, {})", hours, tz.name(), lat, lon);
            }
        }

        /// Test that the function handles extreme coordinates gracefully
        #[test]
        fn test_extreme_coordinates(
            lat_sign in prop::bool::ANY,
            lon_sign in prop::bool::ANY
        ) {
            let lat = if lat_sign { 90.0 } else { -90.0 };
            let lon = if lon_sign { 180.0 } else { -180.0 };
            let _ = determine_timezone_from_coordinates(lat, lon);
        }
    }
}
