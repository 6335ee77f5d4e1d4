//! Tool registry and dispatch
//!
//! The single entry point agents talk to: every operation is a named
//! tool taking JSON parameters and returning the uniform envelope.
//! Success responses are the operation payload with `success: true`
//! merged in; every error is converted to `{success: false, error,
//! ...hints}` here, at the boundary, so nothing propagates out.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument};

use crate::catalog::Catalog;
use crate::config::MapMindConfig;
use crate::error::MapMindError;
use crate::servers::{emotions, fetch, history, navigation, weather};

/// All tool names the registry dispatches, in listing order
pub const TOOL_NAMES: [&str; 15] = [
    "geocode_historical",
    "get_location_timeline",
    "compare_eras",
    "get_location_emotions",
    "find_places_by_emotion",
    "get_emotional_heatmap",
    "calculate_routes",
    "evaluate_route_confidence",
    "adaptive_reroute",
    "get_current_weather",
    "get_weather_forecast",
    "get_ski_conditions",
    "compare_weather",
    "fetch_web_content",
    "fetch_multiple",
];

#[derive(Debug, Deserialize)]
struct GeocodeParams {
    location: String,
    year: i32,
}

#[derive(Debug, Deserialize)]
struct TimelineParams {
    location: String,
    start_year: Option<i32>,
    end_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct CompareErasParams {
    location: String,
    year1: i32,
    year2: i32,
}

#[derive(Debug, Deserialize)]
struct LocationEmotionsParams {
    location: String,
}

#[derive(Debug, Deserialize)]
struct FindByEmotionParams {
    emotion: String,
    min_intensity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct HeatmapParams {
    locations: Vec<String>,
    emotion_filter: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CalculateRoutesParams {
    origin: String,
    destination: String,
    mode: Option<String>,
    risk_tolerance: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RouteConfidenceParams {
    origin: String,
    destination: String,
    route_name: String,
}

#[derive(Debug, Deserialize)]
struct RerouteParams {
    current_location: String,
    destination: String,
    conditions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WeatherLocationParams {
    location: String,
}

#[derive(Debug, Deserialize)]
struct ForecastParams {
    location: String,
    days: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct SkiParams {
    resort: String,
}

#[derive(Debug, Deserialize)]
struct CompareWeatherParams {
    location1: String,
    location2: String,
}

#[derive(Debug, Deserialize)]
struct FetchParams {
    url: String,
    max_length: Option<usize>,
    start_index: Option<usize>,
    raw: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct FetchMultipleParams {
    urls: Vec<String>,
    max_length: Option<usize>,
}

/// Merge `success: true` into a serialized payload
fn ok<T: serde::Serialize>(payload: &T) -> Value {
    let mut body = serde_json::to_value(payload).unwrap_or_else(|_| json!({}));
    if let Some(map) = body.as_object_mut() {
        map.insert("success".to_string(), json!(true));
    }
    body
}

fn parse<T: for<'de> Deserialize<'de>>(tool: &str, params: Value) -> Result<T, MapMindError> {
    serde_json::from_value(params)
        .map_err(|e| MapMindError::general(format!("Invalid parameters for '{tool}': {e}")))
}

/// Shared state and dispatcher for all tool operations
pub struct ToolRegistry {
    catalog: Arc<Catalog>,
    client: reqwest::Client,
    config: MapMindConfig,
}

impl ToolRegistry {
    pub fn new(config: MapMindConfig) -> Result<Self, MapMindError> {
        let client = fetch::build_client(config.fetch.timeout_seconds, &config.fetch.user_agent)?;
        Ok(Self {
            catalog: Arc::new(Catalog::builtin()),
            client,
            config,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Tool definitions in function-calling format for agent
    /// integration
    #[must_use]
    pub fn definitions(&self) -> Value {
        json!([
            {
                "type": "function",
                "function": {
                    "name": "geocode_historical",
                    "description": "Get geographic information about a location at a specific point in history",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "location": {"type": "string", "description": "The location name"},
                            "year": {"type": "integer", "description": "The year in history, negative for BCE"}
                        },
                        "required": ["location", "year"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "get_location_timeline",
                    "description": "Get the historical timeline of events for a location",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "location": {"type": "string", "description": "The location name"},
                            "start_year": {"type": "integer", "description": "Inclusive lower bound"},
                            "end_year": {"type": "integer", "description": "Inclusive upper bound"}
                        },
                        "required": ["location"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "compare_eras",
                    "description": "Compare a location between two points in history",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "location": {"type": "string", "description": "The location name"},
                            "year1": {"type": "integer", "description": "First year"},
                            "year2": {"type": "integer", "description": "Second year"}
                        },
                        "required": ["location", "year1", "year2"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "get_location_emotions",
                    "description": "Get the emotional profile and sentiment data for a location",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "location": {"type": "string", "description": "The location name"}
                        },
                        "required": ["location"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "find_places_by_emotion",
                    "description": "Find places that strongly evoke a specific emotion",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "emotion": {"type": "string", "description": "Target emotion (joy, peace, excitement, inspiration, nostalgia, stress, fear, sadness)"},
                            "min_intensity": {"type": "number", "description": "Minimum emotion score (0-100)", "default": 70}
                        },
                        "required": ["emotion"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "get_emotional_heatmap",
                    "description": "Generate emotional intensity data for multiple locations for comparison",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "locations": {"type": "array", "items": {"type": "string"}, "description": "Location names to analyze"},
                            "emotion_filter": {"type": "string", "description": "Optional single emotion to focus on"}
                        },
                        "required": ["locations"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "calculate_routes",
                    "description": "Calculate and rank route options with probability scores between two locations",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "origin": {"type": "string", "description": "Starting location"},
                            "destination": {"type": "string", "description": "Destination location"},
                            "mode": {"type": "string", "enum": ["fastest", "scenic", "safest", "adventurous", "efficient"], "default": "efficient"},
                            "risk_tolerance": {"type": "number", "description": "Advisory risk tolerance (0-1), echoed in the response", "default": 0.5}
                        },
                        "required": ["origin", "destination"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "evaluate_route_confidence",
                    "description": "Deep reliability analysis of one named route option",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "origin": {"type": "string", "description": "Starting location"},
                            "destination": {"type": "string", "description": "Destination location"},
                            "route_name": {"type": "string", "description": "Name of the route option"}
                        },
                        "required": ["origin", "destination", "route_name"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "adaptive_reroute",
                    "description": "Re-score routes against live conditions and rank by adjusted confidence",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "current_location": {"type": "string", "description": "Current position"},
                            "destination": {"type": "string", "description": "Destination location"},
                            "conditions": {"type": "array", "items": {"type": "string"}, "description": "Reported conditions, e.g. 'heavy traffic'"}
                        },
                        "required": ["current_location", "destination", "conditions"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "get_current_weather",
                    "description": "Get current weather conditions for a station",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "location": {"type": "string", "description": "Station key (e.g. beirut, faraya, zahle, aub)"}
                        },
                        "required": ["location"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "get_weather_forecast",
                    "description": "Get a 1-5 day weather forecast for a station",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "location": {"type": "string", "description": "Station key"},
                            "days": {"type": "integer", "description": "Number of days (1-5)", "default": 5}
                        },
                        "required": ["location"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "get_ski_conditions",
                    "description": "Get skiing conditions for the mountain resorts",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "resort": {"type": "string", "description": "Resort key (faraya, cedars)"}
                        },
                        "required": ["resort"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "compare_weather",
                    "description": "Compare current weather between two stations",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "location1": {"type": "string", "description": "First station key"},
                            "location2": {"type": "string", "description": "Second station key"}
                        },
                        "required": ["location1", "location2"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "fetch_web_content",
                    "description": "Fetch a URL and extract its contents as markdown",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "url": {"type": "string", "description": "The URL to fetch"},
                            "max_length": {"type": "integer", "description": "Maximum characters to return", "default": 5000},
                            "start_index": {"type": "integer", "description": "Start reading from this character index", "default": 0},
                            "raw": {"type": "boolean", "description": "Return cleaned plain text instead of markdown", "default": false}
                        },
                        "required": ["url"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "fetch_multiple",
                    "description": "Fetch multiple URLs concurrently and return their contents",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "urls": {"type": "array", "items": {"type": "string"}, "description": "URLs to fetch"},
                            "max_length": {"type": "integer", "description": "Maximum characters per URL", "default": 5000}
                        },
                        "required": ["urls"]
                    }
                }
            }
        ])
    }

    /// Dispatch one tool call; the result is always an envelope
    #[instrument(skip(self, params))]
    pub async fn dispatch(&self, tool: &str, params: Value) -> Value {
        info!("Dispatching tool '{}'", tool);
        match self.try_dispatch(tool, params).await {
            Ok(body) => body,
            Err(error) => error.envelope(),
        }
    }

    async fn try_dispatch(&self, tool: &str, params: Value) -> Result<Value, MapMindError> {
        let catalog = &self.catalog;
        match tool {
            "geocode_historical" => {
                let p: GeocodeParams = parse(tool, params)?;
                history::geocode_historical(catalog, &p.location, p.year).map(|r| ok(&r))
            }
            "get_location_timeline" => {
                let p: TimelineParams = parse(tool, params)?;
                history::location_timeline(catalog, &p.location, p.start_year, p.end_year)
                    .map(|r| ok(&r))
            }
            "compare_eras" => {
                let p: CompareErasParams = parse(tool, params)?;
                history::compare_eras(catalog, &p.location, p.year1, p.year2).map(|r| ok(&r))
            }
            "get_location_emotions" => {
                let p: LocationEmotionsParams = parse(tool, params)?;
                emotions::location_emotions(catalog, &p.location).map(|r| ok(&r))
            }
            "find_places_by_emotion" => {
                let p: FindByEmotionParams = parse(tool, params)?;
                let min_intensity =
                    Some(p.min_intensity.unwrap_or(self.config.defaults.min_intensity));
                emotions::find_places_by_emotion(catalog, &p.emotion, min_intensity)
                    .map(|r| ok(&r))
            }
            "get_emotional_heatmap" => {
                let p: HeatmapParams = parse(tool, params)?;
                emotions::emotional_heatmap(catalog, &p.locations, p.emotion_filter.as_deref())
                    .map(|r| ok(&r))
            }
            "calculate_routes" => {
                let p: CalculateRoutesParams = parse(tool, params)?;
                navigation::calculate_routes(
                    catalog,
                    &p.origin,
                    &p.destination,
                    p.mode.as_deref().unwrap_or("efficient"),
                    p.risk_tolerance
                        .unwrap_or(self.config.defaults.risk_tolerance),
                )
                .map(|r| ok(&r))
            }
            "evaluate_route_confidence" => {
                let p: RouteConfidenceParams = parse(tool, params)?;
                navigation::evaluate_route_confidence(
                    catalog,
                    &p.origin,
                    &p.destination,
                    &p.route_name,
                )
                .map(|r| ok(&r))
            }
            "adaptive_reroute" => {
                let p: RerouteParams = parse(tool, params)?;
                navigation::adaptive_reroute(
                    catalog,
                    &p.current_location,
                    &p.destination,
                    &p.conditions,
                )
                .map(|r| ok(&r))
            }
            "get_current_weather" => {
                let p: WeatherLocationParams = parse(tool, params)?;
                weather::current_weather(catalog, &p.location).map(|r| ok(&r))
            }
            "get_weather_forecast" => {
                let p: ForecastParams = parse(tool, params)?;
                weather::weather_forecast(catalog, &p.location, p.days).map(|r| ok(&r))
            }
            "get_ski_conditions" => {
                let p: SkiParams = parse(tool, params)?;
                weather::ski_conditions(catalog, &p.resort).map(|r| ok(&r))
            }
            "compare_weather" => {
                let p: CompareWeatherParams = parse(tool, params)?;
                weather::compare_locations(catalog, &p.location1, &p.location2).map(|r| ok(&r))
            }
            "fetch_web_content" => {
                let p: FetchParams = parse(tool, params)?;
                let options = fetch::FetchOptions {
                    max_length: p.max_length.unwrap_or(self.config.fetch.max_content_length),
                    start_index: p.start_index.unwrap_or(0),
                    raw: p.raw.unwrap_or(false),
                };
                fetch::fetch(&self.client, &p.url, options)
                    .await
                    .map(|r| ok(&r))
            }
            "fetch_multiple" => {
                let p: FetchMultipleParams = parse(tool, params)?;
                fetch::fetch_multiple(
                    &self.client,
                    &p.urls,
                    p.max_length.unwrap_or(self.config.fetch.max_content_length),
                )
                .await
                .map(|r| ok(&r))
            }
            unknown => Err(MapMindError::invalid_parameter(
                "tool",
                unknown,
                TOOL_NAMES.iter().map(|n| (*n).to_string()).collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(MapMindConfig::default()).expect("registry should build")
    }

    #[tokio::test]
    async fn test_dispatch_success_envelope() {
        let body = registry()
            .dispatch(
                "geocode_historical",
                json!({"location": "Constantinople", "year": 1453}),
            )
            .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["temporal_accuracy"], "exact");
        assert_eq!(body["location"]["closest_documented_year"], 1453);
    }

    #[tokio::test]
    async fn test_dispatch_error_envelope_with_hints() {
        let body = registry()
            .dispatch("get_location_emotions", json!({"location": "Atlantis"}))
            .await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Atlantis"));
        assert!(body["available_locations"].as_array().unwrap().len() > 5);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_lists_registry() {
        let body = registry().dispatch("teleport", json!({})).await;
        assert_eq!(body["success"], false);
        let valid = body["valid_tools"].as_array().unwrap();
        assert_eq!(valid.len(), TOOL_NAMES.len());
    }

    #[tokio::test]
    async fn test_dispatch_invalid_params() {
        let body = registry()
            .dispatch("geocode_historical", json!({"location": "Berlin"}))
            .await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Invalid parameters"));
    }

    #[tokio::test]
    async fn test_find_places_defaults_min_intensity() {
        let body = registry()
            .dispatch("find_places_by_emotion", json!({"emotion": "peace"}))
            .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["min_intensity"], 70.0);
    }

    #[tokio::test]
    async fn test_calculate_routes_defaults() {
        let body = registry()
            .dispatch(
                "calculate_routes",
                json!({"origin": "New York", "destination": "Boston"}),
            )
            .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["routing_mode"], "efficient");
        assert_eq!(body["risk_tolerance"], 0.5);
    }

    #[test]
    fn test_definitions_cover_all_tools() {
        let definitions = registry().definitions();
        let names: Vec<&str> = definitions
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["function"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, TOOL_NAMES);
    }
}
