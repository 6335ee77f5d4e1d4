//! Simulated weather for the station network
//!
//! Nothing here talks to a real weather provider. Readings are
//! synthesized from each station's elevation and the current season,
//! with bounded randomness so repeated calls stay plausible: higher
//! stations are colder, winter is colder than summer, and mountain
//! stations draw conditions from a mountain-appropriate pool.

use chrono::{Datelike, Utc};
use rand::RngExt;
use serde::Serialize;
use tracing::instrument;

use crate::catalog::{Catalog, WeatherStation};
use crate::error::MapMindError;
use crate::ranking::round1;

const ALL_CONDITIONS: [&str; 10] = [
    "clear",
    "partly_cloudy",
    "cloudy",
    "light_rain",
    "rain",
    "thunderstorm",
    "fog",
    "windy",
    "humid",
    "dry",
];

const MOUNTAIN_CONDITIONS: [&str; 4] = ["clear", "cloudy", "light_rain", "fog"];
const COASTAL_CONDITIONS: [&str; 4] = ["clear", "partly_cloudy", "humid", "windy"];

const WIND_DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

const SKI_RESORTS: [&str; 2] = ["faraya", "cedars"];

/// Meteorological season bucket by calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Summer,
    Shoulder,
}

impl Season {
    pub fn for_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 | 3 => Season::Winter,
            6 | 7 | 8 | 9 => Season::Summer,
            _ => Season::Shoulder,
        }
    }
}

/// Seasonal base temperature before random variation, lapsed by
/// elevation
pub fn base_temperature(season: Season, elevation_m: i32) -> f64 {
    let elevation = f64::from(elevation_m);
    match season {
        Season::Winter => 12.0 - elevation / 100.0,
        Season::Summer => 28.0 - elevation / 150.0,
        Season::Shoulder => 20.0 - elevation / 120.0,
    }
}

/// Condition pool for a station: mountain above 1000 m, coastal below
/// 100 m, everything otherwise
pub fn condition_pool(elevation_m: i32) -> &'static [&'static str] {
    if elevation_m > 1000 {
        &MOUNTAIN_CONDITIONS
    } else if elevation_m < 100 {
        &COASTAL_CONDITIONS
    } else {
        &ALL_CONDITIONS
    }
}

fn pick(pool: &[&'static str]) -> &'static str {
    let mut rng = rand::rng();
    pool[rng.random_range(0..pool.len())]
}

fn station_not_found(catalog: &Catalog, query: &str) -> MapMindError {
    MapMindError::location_not_found_with_hint(
        query,
        catalog.station_keys(),
        "Try: beirut, faraya, tripoli, zahle, aub, cedars, baalbek, byblos, sidon, or tyre",
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct StationCoordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One synthesized current-weather reading
#[derive(Debug, Clone, Serialize)]
pub struct CurrentWeather {
    pub location: String,
    pub coordinates: StationCoordinates,
    pub temperature: f64,
    pub condition: String,
    pub humidity: i64,
    pub wind_speed: i64,
    pub wind_direction: &'static str,
    pub pressure: i64,
    pub visibility: i64,
    pub uv_index: i64,
    pub timestamp: String,
    pub elevation: i32,
    pub climate_zone: String,
}

fn synthesize_current(station: &WeatherStation, month: u32) -> CurrentWeather {
    let season = Season::for_month(month);
    let mut rng = rand::rng();

    let temperature = round1(
        base_temperature(season, station.elevation_m) + rng.random_range(-3.0..3.0),
    );
    let condition = pick(condition_pool(station.elevation_m)).to_string();
    let uv_index = if season == Season::Winter {
        rng.random_range(1..=5)
    } else {
        rng.random_range(1..=10)
    };

    CurrentWeather {
        location: station.name.clone(),
        coordinates: StationCoordinates {
            lat: station.latitude,
            lon: station.longitude,
        },
        temperature,
        condition,
        humidity: rng.random_range(40..=85),
        wind_speed: rng.random_range(5..=25),
        wind_direction: WIND_DIRECTIONS[rng.random_range(0..WIND_DIRECTIONS.len())],
        pressure: rng.random_range(1005..=1025),
        visibility: rng.random_range(5..=20),
        uv_index,
        timestamp: Utc::now().to_rfc3339(),
        elevation: station.elevation_m,
        climate_zone: station.climate.clone(),
    }
}

/// Response for the current weather operation
#[derive(Debug, Clone, Serialize)]
pub struct CurrentWeatherResponse {
    pub current_weather: CurrentWeather,
}

/// Current conditions for one station
#[instrument(skip(catalog))]
pub fn current_weather(
    catalog: &Catalog,
    location: &str,
) -> Result<CurrentWeatherResponse, MapMindError> {
    let station = catalog
        .station(location)
        .ok_or_else(|| station_not_found(catalog, location))?;

    Ok(CurrentWeatherResponse {
        current_weather: synthesize_current(station, Utc::now().month()),
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastDay {
    pub date: String,
    pub day_name: String,
    pub temp_high: f64,
    pub temp_low: f64,
    pub condition: String,
    pub precipitation_chance: i64,
    pub wind_speed: i64,
}

/// Response for the forecast operation
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub location: String,
    pub coordinates: StationCoordinates,
    pub forecast_days: i64,
    pub forecast: Vec<ForecastDay>,
}

/// Multi-day forecast for one station; the day count is clamped to 1-5
#[instrument(skip(catalog))]
pub fn weather_forecast(
    catalog: &Catalog,
    location: &str,
    days: Option<i64>,
) -> Result<ForecastResponse, MapMindError> {
    let station = catalog
        .station(location)
        .ok_or_else(|| station_not_found(catalog, location))?;
    let days = days.unwrap_or(5).clamp(1, 5);

    let mut rng = rand::rng();
    let forecast: Vec<ForecastDay> = (0..days)
        .map(|offset| {
            let date = Utc::now() + chrono::Duration::days(offset);
            let season = Season::for_month(date.month());
            let elevation = f64::from(station.elevation_m);

            let (high_base, low_base) = match season {
                Season::Winter => (15.0 - elevation / 100.0, 8.0 - elevation / 100.0),
                Season::Summer => (32.0 - elevation / 150.0, 22.0 - elevation / 150.0),
                Season::Shoulder => (22.0 - elevation / 120.0, 14.0 - elevation / 120.0),
            };

            ForecastDay {
                date: date.format("%Y-%m-%d").to_string(),
                day_name: date.format("%A").to_string(),
                temp_high: round1(high_base + rng.random_range(-2.0..2.0)),
                temp_low: round1(low_base + rng.random_range(-2.0..2.0)),
                condition: pick(&ALL_CONDITIONS).to_string(),
                precipitation_chance: rng.random_range(0..=80),
                wind_speed: rng.random_range(5..=30),
            }
        })
        .collect();

    Ok(ForecastResponse {
        location: station.name.clone(),
        coordinates: StationCoordinates {
            lat: station.latitude,
            lon: station.longitude,
        },
        forecast_days: days,
        forecast,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct SkiConditions {
    pub resort: String,
    pub elevation: i32,
    pub coordinates: StationCoordinates,
    pub snow_depth_cm: i64,
    pub new_snow_24h_cm: i64,
    pub conditions_rating: String,
    pub temperature: f64,
    pub lifts_open: i64,
    pub total_lifts: i64,
    pub runs_open: String,
    pub season_status: &'static str,
    pub visibility: &'static str,
    pub timestamp: String,
}

/// Response for the ski conditions operation
#[derive(Debug, Clone, Serialize)]
pub struct SkiConditionsResponse {
    pub ski_conditions: SkiConditions,
}

fn synthesize_ski(station: &WeatherStation, month: u32) -> SkiConditions {
    let in_season = Season::for_month(month) == Season::Winter;
    let mut rng = rand::rng();

    let (snow_depth_cm, new_snow_24h_cm, conditions_rating, lifts_open, runs_open, visibility) =
        if in_season {
            (
                rng.random_range(50..=200),
                rng.random_range(0..=30),
                pick(&["Excellent", "Good", "Fair"]).to_string(),
                rng.random_range(4..=8),
                format!("{}/25", rng.random_range(10..=25)),
                pick(&["Excellent", "Good", "Moderate", "Poor"]),
            )
        } else {
            (
                0,
                0,
                "Closed - Off Season".to_string(),
                0,
                "0/25".to_string(),
                "N/A",
            )
        };

    let temperature = if in_season {
        round1(-2.0 + rng.random_range(-5.0..8.0))
    } else {
        round1(15.0 + rng.random_range(-5.0..10.0))
    };

    SkiConditions {
        resort: station.name.clone(),
        elevation: station.elevation_m,
        coordinates: StationCoordinates {
            lat: station.latitude,
            lon: station.longitude,
        },
        snow_depth_cm,
        new_snow_24h_cm,
        conditions_rating,
        temperature,
        lifts_open,
        total_lifts: 8,
        runs_open,
        season_status: if in_season { "Open" } else { "Closed" },
        visibility: if in_season { visibility } else { "N/A" },
        timestamp: Utc::now().to_rfc3339(),
    }
}

/// Snow and lift status for a mountain resort; off-season months report
/// everything closed
#[instrument(skip(catalog))]
pub fn ski_conditions(
    catalog: &Catalog,
    resort: &str,
) -> Result<SkiConditionsResponse, MapMindError> {
    let resort_key = resort.trim().to_lowercase();
    if !SKI_RESORTS.contains(&resort_key.as_str()) {
        return Err(MapMindError::invalid_parameter(
            "resort",
            resort,
            SKI_RESORTS.iter().map(|r| (*r).to_string()).collect(),
        ));
    }

    let station = catalog
        .station(&resort_key)
        .ok_or_else(|| station_not_found(catalog, resort))?;

    Ok(SkiConditionsResponse {
        ski_conditions: synthesize_ski(station, Utc::now().month()),
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherDifferences {
    pub temperature_diff: f64,
    pub elevation_diff: i32,
    pub humidity_diff: i64,
    pub wind_speed_diff: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherComparison {
    pub location1: CurrentWeather,
    pub location2: CurrentWeather,
    pub differences: WeatherDifferences,
    pub recommendation: String,
}

/// Response for the two-station comparison operation
#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub comparison: WeatherComparison,
}

fn comparison_recommendation(weather1: &CurrentWeather, weather2: &CurrentWeather) -> String {
    if weather1.temperature > weather2.temperature + 5.0 {
        format!("{} is significantly warmer", weather1.location)
    } else if weather2.temperature > weather1.temperature + 5.0 {
        format!("{} is significantly warmer", weather2.location)
    } else if weather1.elevation > 1000 && weather2.elevation < 500 {
        format!(
            "{} offers cooler mountain climate, {} has coastal conditions",
            weather1.location, weather2.location
        )
    } else {
        "Both locations have similar weather conditions".to_string()
    }
}

/// Side-by-side current weather for two stations
#[instrument(skip(catalog))]
pub fn compare_locations(
    catalog: &Catalog,
    location1: &str,
    location2: &str,
) -> Result<CompareResponse, MapMindError> {
    let station1 = catalog
        .station(location1)
        .ok_or_else(|| station_not_found(catalog, location1))?;
    let station2 = catalog
        .station(location2)
        .ok_or_else(|| station_not_found(catalog, location2))?;

    let month = Utc::now().month();
    let weather1 = synthesize_current(station1, month);
    let weather2 = synthesize_current(station2, month);

    let differences = WeatherDifferences {
        temperature_diff: round1((weather1.temperature - weather2.temperature).abs()),
        elevation_diff: (weather1.elevation - weather2.elevation).abs(),
        humidity_diff: (weather1.humidity - weather2.humidity).abs(),
        wind_speed_diff: (weather1.wind_speed - weather2.wind_speed).abs(),
    };
    let recommendation = comparison_recommendation(&weather1, &weather2);

    Ok(CompareResponse {
        comparison: WeatherComparison {
            location1: weather1,
            location2: weather2,
            differences,
            recommendation,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(12, Season::Winter)]
    #[case(1, Season::Winter)]
    #[case(3, Season::Winter)]
    #[case(4, Season::Shoulder)]
    #[case(6, Season::Summer)]
    #[case(9, Season::Summer)]
    #[case(10, Season::Shoulder)]
    fn test_season_buckets(#[case] month: u32, #[case] expected: Season) {
        assert_eq!(Season::for_month(month), expected);
    }

    #[test]
    fn test_elevation_lapses_temperature() {
        for season in [Season::Winter, Season::Summer, Season::Shoulder] {
            assert!(base_temperature(season, 2000) < base_temperature(season, 0));
        }
        // Sea level in winter sits at the 12 degree base.
        assert_eq!(base_temperature(Season::Winter, 0), 12.0);
        assert_eq!(base_temperature(Season::Summer, 1500), 18.0);
    }

    #[test]
    fn test_condition_pools() {
        assert_eq!(condition_pool(2000), &MOUNTAIN_CONDITIONS);
        assert_eq!(condition_pool(34), &COASTAL_CONDITIONS);
        assert_eq!(condition_pool(945), &ALL_CONDITIONS);
    }

    #[test]
    fn test_current_weather_bounds() {
        let catalog = Catalog::builtin();
        let response = current_weather(&catalog, "cedars").unwrap();
        let weather = response.current_weather;
        assert_eq!(weather.elevation, 2000);
        assert!(MOUNTAIN_CONDITIONS.contains(&weather.condition.as_str()));
        assert!((40..=85).contains(&weather.humidity));
        assert!((5..=25).contains(&weather.wind_speed));
        assert!((1005..=1025).contains(&weather.pressure));
        assert!((1..=10).contains(&weather.uv_index));
        assert!(WIND_DIRECTIONS.contains(&weather.wind_direction));
        // Variation is bounded to 3 degrees around the seasonal base.
        let bases = [
            base_temperature(Season::Winter, 2000),
            base_temperature(Season::Summer, 2000),
            base_temperature(Season::Shoulder, 2000),
        ];
        assert!(bases.iter().any(|b| (weather.temperature - b).abs() <= 3.05));
    }

    #[test]
    fn test_station_lookup_normalizes_input() {
        let catalog = Catalog::builtin();
        let response = current_weather(&catalog, "  BEIRUT ").unwrap();
        assert_eq!(response.current_weather.location, "Beirut");
    }

    #[test]
    fn test_unknown_station_lists_keys_and_hint() {
        let catalog = Catalog::builtin();
        let err = current_weather(&catalog, "damascus").unwrap_err();
        match err {
            MapMindError::LocationNotFound {
                available,
                suggestion,
                ..
            } => {
                assert_eq!(available.len(), 10);
                assert!(suggestion.unwrap().contains("faraya"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    #[case(Some(3), 3)]
    #[case(Some(0), 1)]
    #[case(Some(99), 5)]
    #[case(None, 5)]
    fn test_forecast_day_clamp(#[case] days: Option<i64>, #[case] expected: i64) {
        let catalog = Catalog::builtin();
        let response = weather_forecast(&catalog, "byblos", days).unwrap();
        assert_eq!(response.forecast_days, expected);
        assert_eq!(response.forecast.len() as i64, expected);
        for day in &response.forecast {
            assert!((0..=80).contains(&day.precipitation_chance));
            assert!((5..=30).contains(&day.wind_speed));
        }
    }

    #[test]
    fn test_ski_conditions_valid_resorts_only() {
        let catalog = Catalog::builtin();
        let response = ski_conditions(&catalog, "Faraya").unwrap();
        let ski = response.ski_conditions;
        assert_eq!(ski.total_lifts, 8);
        match ski.season_status {
            "Open" => {
                assert!((50..=200).contains(&ski.snow_depth_cm));
                assert!((4..=8).contains(&ski.lifts_open));
            }
            _ => {
                assert_eq!(ski.snow_depth_cm, 0);
                assert_eq!(ski.lifts_open, 0);
                assert_eq!(ski.runs_open, "0/25");
                assert_eq!(ski.conditions_rating, "Closed - Off Season");
            }
        }

        let err = ski_conditions(&catalog, "beirut").unwrap_err();
        match err {
            MapMindError::InvalidParameter { valid, .. } => {
                assert_eq!(valid, vec!["faraya", "cedars"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_compare_locations_differences_are_absolute() {
        let catalog = Catalog::builtin();
        let response = compare_locations(&catalog, "beirut", "cedars").unwrap();
        let comparison = response.comparison;
        assert_eq!(comparison.differences.elevation_diff, 1966);
        assert!(comparison.differences.temperature_diff >= 0.0);
        assert!(comparison.differences.humidity_diff >= 0);
        assert!(!comparison.recommendation.is_empty());
    }
}
