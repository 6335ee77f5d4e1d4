//! End-to-end tests through the tool dispatch boundary
//!
//! Every call goes through `ToolRegistry::dispatch` with JSON params,
//! exactly as an agent integration would, and asserts on the returned
//! envelopes.

use rstest::rstest;
use serde_json::json;

use mapmind::{MapMindConfig, ToolRegistry};

fn registry() -> ToolRegistry {
    ToolRegistry::new(MapMindConfig::default()).expect("registry should build")
}

#[tokio::test]
async fn geocode_exact_year_is_exact() {
    let body = registry()
        .dispatch(
            "geocode_historical",
            json!({"location": "Constantinople", "year": 1453}),
        )
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["temporal_accuracy"], "exact");
    assert_eq!(body["year_difference"], 0);
    assert_eq!(body["location"]["existed"], true);
}

#[tokio::test]
async fn geocode_between_years_interpolates() {
    let body = registry()
        .dispatch("geocode_historical", json!({"location": "Berlin", "year": 1970}))
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["temporal_accuracy"], "interpolated");
    assert_eq!(body["location"]["closest_documented_year"], 1961);
}

#[tokio::test]
async fn geocode_unknown_location_carries_hints() {
    let body = registry()
        .dispatch("geocode_historical", json!({"location": "Mars", "year": 2000}))
        .await;
    assert_eq!(body["success"], false);
    assert!(body["available_locations"].as_array().unwrap().len() >= 3);
    assert!(
        body["suggestion"]
            .as_str()
            .unwrap()
            .contains("Constantinople")
    );
}

#[tokio::test]
async fn inverted_timeline_range_is_empty_success() {
    let body = registry()
        .dispatch(
            "get_location_timeline",
            json!({"location": "Byblos", "start_year": 2000, "end_year": 1000}),
        )
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_events"], 0);
    assert!(body["time_span"]["earliest"].is_null());
}

#[tokio::test]
async fn compare_eras_reports_rename() {
    let body = registry()
        .dispatch(
            "compare_eras",
            json!({"location": "New York", "year1": 1640, "year2": 1700}),
        )
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["changes"]["name_changed"], true);
    assert!(body["summary"].as_str().unwrap().contains("renamed"));
}

#[tokio::test]
async fn fuzzy_location_resolution_through_dispatch() {
    let body = registry()
        .dispatch("get_location_emotions", json!({"location": "Paris"}))
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["location"]["name"], "Paris, France");
}

#[tokio::test]
async fn find_peaceful_places_above_threshold() {
    let body = registry()
        .dispatch(
            "find_places_by_emotion",
            json!({"emotion": "peace", "min_intensity": 80}),
        )
        .await;
    assert_eq!(body["success"], true);
    let locations = body["locations"].as_array().unwrap();
    assert!(!locations.is_empty());
    let mut previous = f64::MAX;
    for location in locations {
        let score = location["emotion_score"].as_f64().unwrap();
        assert!(score >= 80.0);
        assert!(score <= previous);
        previous = score;
    }
}

#[rstest]
#[case(0.0, false)]
#[case(100.0, true)]
#[tokio::test]
async fn emotion_threshold_extremes(#[case] min_intensity: f64, #[case] may_be_empty: bool) {
    let body = registry()
        .dispatch(
            "find_places_by_emotion",
            json!({"emotion": "joy", "min_intensity": min_intensity}),
        )
        .await;
    assert_eq!(body["success"], true);
    let total = body["total_matches"].as_u64().unwrap();
    if may_be_empty {
        // Only perfect scores survive a threshold of 100.
        assert!(total <= 2);
    } else {
        // Threshold 0 admits the whole catalog.
        assert_eq!(total, 11);
    }
}

#[tokio::test]
async fn invalid_emotion_lists_valid_set() {
    let body = registry()
        .dispatch("find_places_by_emotion", json!({"emotion": "anger"}))
        .await;
    assert_eq!(body["success"], false);
    assert_eq!(body["valid_emotions"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn heatmap_skips_unknown_and_reports_stats() {
    let body = registry()
        .dispatch(
            "get_emotional_heatmap",
            json!({"locations": ["Beirut", "Nowhere", "Hamra"]}),
        )
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["heatmap_points"].as_array().unwrap().len(), 2);
    assert!(body["statistics"]["average"].is_number());
    assert_eq!(body["visualization_ready"], true);
}

#[rstest]
#[case("fastest")]
#[case("scenic")]
#[case("safest")]
#[case("adventurous")]
#[case("efficient")]
#[tokio::test]
async fn routes_rank_descending_in_every_mode(#[case] mode: &str) {
    let body = registry()
        .dispatch(
            "calculate_routes",
            json!({"origin": "San Francisco", "destination": "Los Angeles", "mode": mode}),
        )
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["routing_mode"], mode);
    let routes = body["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 3);
    let mut previous = f64::MAX;
    for route in routes {
        let score = route["suitability_score"].as_f64().unwrap();
        assert!(score <= previous);
        previous = score;
    }
    assert!(body["recommendation"].as_str().unwrap().contains("mode"));
}

#[tokio::test]
async fn route_confidence_breakdown_is_bounded() {
    let body = registry()
        .dispatch(
            "evaluate_route_confidence",
            json!({"origin": "New York", "destination": "Boston", "route_name": "I-95 Express"}),
        )
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["overall_confidence"], 0.85);
    assert_eq!(body["success_probability"], 0.799);
    assert_eq!(body["risk_assessment"]["level"], "LOW");
    let breakdown = body["confidence_breakdown"].as_object().unwrap();
    assert_eq!(breakdown.len(), 4);
    let infra = breakdown["route_infrastructure"].as_f64().unwrap();
    assert!((0.79..=0.91).contains(&infra));
}

#[tokio::test]
async fn unknown_route_name_lists_options() {
    let body = registry()
        .dispatch(
            "evaluate_route_confidence",
            json!({"origin": "New York", "destination": "Boston", "route_name": "Maglev"}),
        )
        .await;
    assert_eq!(body["success"], false);
    assert_eq!(body["available_routes"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn reroute_under_heavy_conditions() {
    let body = registry()
        .dispatch(
            "adaptive_reroute",
            json!({
                "current_location": "New York",
                "destination": "Boston",
                "conditions": ["heavy traffic", "construction", "rain"]
            }),
        )
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["condition_severity"], "HIGH");
    let routes = body["adapted_routes"].as_array().unwrap();
    let mut previous = f64::MAX;
    for route in routes {
        let adjusted = route["adjusted_confidence"].as_f64().unwrap();
        assert!(adjusted >= 0.4);
        assert!(adjusted <= previous);
        previous = adjusted;
    }
    assert_eq!(body["best_option"]["route_name"], routes[0]["route_name"]);
}

#[tokio::test]
async fn no_route_between_unknown_places() {
    let body = registry()
        .dispatch(
            "calculate_routes",
            json!({"origin": "Mars", "destination": "Venus"}),
        )
        .await;
    assert_eq!(body["success"], false);
    assert!(!body["available_routes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn current_weather_within_simulated_bounds() {
    let body = registry()
        .dispatch("get_current_weather", json!({"location": "faraya"}))
        .await;
    assert_eq!(body["success"], true);
    let weather = &body["current_weather"];
    assert_eq!(weather["elevation"], 1850);
    let humidity = weather["humidity"].as_i64().unwrap();
    assert!((40..=85).contains(&humidity));
    let conditions = ["clear", "cloudy", "light_rain", "fog"];
    assert!(conditions.contains(&weather["condition"].as_str().unwrap()));
}

#[tokio::test]
async fn forecast_clamps_day_count() {
    let body = registry()
        .dispatch(
            "get_weather_forecast",
            json!({"location": "beirut", "days": 99}),
        )
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["forecast_days"], 5);
    assert_eq!(body["forecast"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn ski_conditions_rejects_lowland_station() {
    let body = registry()
        .dispatch("get_ski_conditions", json!({"resort": "beirut"}))
        .await;
    assert_eq!(body["success"], false);
    assert_eq!(body["valid_resorts"], json!(["faraya", "cedars"]));
}

#[tokio::test]
async fn weather_comparison_between_coast_and_mountain() {
    let body = registry()
        .dispatch(
            "compare_weather",
            json!({"location1": "beirut", "location2": "cedars"}),
        )
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["comparison"]["differences"]["elevation_diff"], 1966);
    assert!(
        !body["comparison"]["recommendation"]
            .as_str()
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn fetch_invalid_url_is_enveloped() {
    let body = registry()
        .dispatch("fetch_web_content", json!({"url": "not-a-url"}))
        .await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Invalid URL"));
    assert_eq!(body["url"], "not-a-url");
}

#[tokio::test]
async fn fetch_multiple_counts_failures() {
    let body = registry()
        .dispatch(
            "fetch_multiple",
            json!({"urls": ["bad-one", "bad-two", "bad-three"]}),
        )
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_urls"], 3);
    assert_eq!(body["failed"], 3);
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_tool_reports_registry() {
    let body = registry().dispatch("summon_dragon", json!({})).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["valid_tools"].as_array().unwrap().len(),
        mapmind::tools::TOOL_NAMES.len()
    );
}
