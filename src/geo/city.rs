//! City database lookup for geographic coordinates.
//!
//! Uses the `cities` crate for a database of world cities. Coordinates are
//! kept in the database's convention (longitude positive EAST); use
//! [`CityInfo::west_longitude`] for the solar model.

/// Represents a city with its geographic information
#[derive(Debug, Clone, PartialEq)]
pub struct CityInfo {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    /// Longitude in degrees, positive EAST
    pub longitude: f64,
}

impl CityInfo {
    /// Longitude in the solar model's convention (positive WEST).
    pub fn west_longitude(&self) -> f64 {
        -self.longitude
    }

    /// "Name, Country"
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// Get all named cities sorted by name
pub fn all_cities() -> Vec<CityInfo> {
    let iter = IntoIterator::into_iter(cities::all());
    let mut all_cities: Vec<CityInfo> = iter
        .filter_map(|city| {
            if city.city.trim().is_empty() {
                return None;
            }

            Some(CityInfo {
                name: city.city.to_string(),
                country: city.country.to_string(),
                latitude: city.latitude,
                longitude: city.longitude,
            })
        })
        .collect();

    all_cities.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.country.cmp(&b.country)));

    all_cities
}

/// Split "Name, Country" into its lowercase parts.
fn parse_query(query: &str) -> (String, Option<String>) {
    match query.split_once(',') {
        Some((name, country)) if !country.trim().is_empty() => (
            name.trim().to_lowercase(),
            Some(country.trim().to_lowercase()),
        ),
        Some((name, _)) => (name.trim().to_lowercase(), None),
        None => (query.trim().to_lowercase(), None),
    }
}

fn country_matches(city: &CityInfo, country: &Option<String>) -> bool {
    country
        .as_ref()
        .is_none_or(|c| city.country.to_lowercase().contains(c.as_str()))
}

/// Case-insensitive substring search on city name or country.
///
/// A query of the form "Name, Country" restricts matches to countries
/// containing the part after the comma.
pub fn search_cities(query: &str, limit: usize) -> Vec<CityInfo> {
    let (name, country) = parse_query(query);
    if name.is_empty() {
        return Vec::new();
    }

    all_cities()
        .into_iter()
        .filter(|city| {
            let matches_name = city.name.to_lowercase().contains(&name)
                || (country.is_none() && city.country.to_lowercase().contains(&name));
            matches_name && country_matches(city, &country)
        })
        .take(limit)
        .collect()
}

/// Find the best match for a city query.
///
/// Prefers an exact (case-insensitive) name match, otherwise the first
/// substring match in name order.
///
/// # Returns
/// * `Some(city)` - The best matching city
/// * `None` - Nothing in the database matches
pub fn find_city(query: &str) -> Option<CityInfo> {
    let (name, country) = parse_query(query);
    if name.is_empty() {
        return None;
    }

    let candidates: Vec<CityInfo> = all_cities()
        .into_iter()
        .filter(|city| country_matches(city, &country))
        .collect();

    if let Some(exact) = candidates
        .iter()
        .find(|city| city.name.to_lowercase() == name)
    {
        return Some(exact.clone());
    }

    candidates
        .into_iter()
        .find(|city| city.name.to_lowercase().contains(&name))
}

/// Find cities near a given coordinate
///
/// # Arguments
/// * `target_lat` - Target latitude
/// * `target_lon` - Target longitude, positive EAST
/// * `max_results` - Maximum number of cities to return
///
/// # Returns
/// Vector of closest cities sorted by distance
pub fn find_cities_near_coordinate(
    target_lat: f64,
    target_lon: f64,
    max_results: usize,
) -> Vec<CityInfo> {
    let mut cities_with_distance: Vec<(CityInfo, f64)> = all_cities()
        .into_iter()
        .map(|city| {
            let distance =
                calculate_distance(target_lat, target_lon, city.latitude, city.longitude);
            (city, distance)
        })
        .collect();

    cities_with_distance.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    cities_with_distance
        .into_iter()
        .take(max_results)
        .map(|(city, _)| city)
        .collect()
}

/// Approximate distance between two coordinates (plain Euclidean in degrees)
///
/// Good enough to rank nearby cities; not a geodesic distance.
fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat_diff = lat1 - lat2;
    let lon_diff = lon1 - lon2;
    (lat_diff * lat_diff + lon_diff * lon_diff).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_city() -> CityInfo {
        CityInfo {
            name: "Columbus".to_string(),
            country: "United States".to_string(),
            latitude: 39.9611,
            longitude: -82.9989,
        }
    }

    #[test]
    fn test_west_longitude_flips_sign() {
        assert_eq!(sample_city().west_longitude(), 82.9989);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(sample_city().display_name(), "Columbus, United States");
    }

    #[test]
    fn test_parse_query() {
        assert_eq!(parse_query("  Paris "), ("paris".to_string(), None));
        assert_eq!(
            parse_query("Paris, France"),
            ("paris".to_string(), Some("france".to_string()))
        );
        assert_eq!(parse_query("Paris,"), ("paris".to_string(), None));
    }

    #[test]
    fn test_calculate_distance() {
        assert_eq!(calculate_distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(calculate_distance(1.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_all_cities_sorted_and_named() {
        let cities = all_cities();
        assert!(!cities.is_empty());
        assert!(cities.iter().all(|c| !c.name.trim().is_empty()));
        assert!(cities.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn test_find_city_empty_query() {
        assert!(find_city("").is_none());
        assert!(find_city("   ").is_none());
    }

    #[test]
    fn test_find_city_no_match() {
        assert!(find_city("Qxzqxzqxz Nowhere").is_none());
    }

    /// First city at or after `start` with a plain ASCII name and country.
    fn pick_plain_city(cities: &[CityInfo], start: usize) -> &CityInfo {
        cities[start..]
            .iter()
            .chain(cities[..start].iter())
            .find(|c| {
                c.name.is_ascii()
                    && c.country.is_ascii()
                    && c.name.trim() == c.name
                    && !c.name.contains(',')
                    && !c.country.trim().is_empty()
            })
            .unwrap()
    }

    #[test]
    fn test_find_city_exact_name_roundtrip() {
        let cities = all_cities();
        let target = pick_plain_city(&cities, cities.len() / 2);
        let found = find_city(&target.name).unwrap();
        assert_eq!(found.name.to_lowercase(), target.name.to_lowercase());
    }

    #[test]
    fn test_find_city_with_country() {
        let cities = all_cities();
        let target = pick_plain_city(&cities, 0);
        let query = format!("{}, {}", target.name, target.country.trim());
        let found = find_city(&query).unwrap();
        assert_eq!(found.name.to_lowercase(), target.name.to_lowercase());
        assert!(
            found
                .country
                .to_lowercase()
                .contains(&target.country.trim().to_lowercase())
        );
    }

    #[test]
    fn test_search_cities_respects_limit() {
        let results = search_cities("a", 3);
        assert!(results.len() <= 3);
        assert!(search_cities("", 10).is_empty());
    }

    #[test]
    fn test_find_cities_near_coordinate_exact_hit() {
        let cities = all_cities();
        let target = &cities[cities.len() / 3];
        let nearest = find_cities_near_coordinate(target.latitude, target.longitude, 1);
        assert_eq!(nearest.len(), 1);
        assert_eq!(nearest[0].latitude, target.latitude);
        assert_eq!(nearest[0].longitude, target.longitude);
    }
}
