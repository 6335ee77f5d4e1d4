//! HTTP API endpoints
//!
//! Every endpoint maps one-to-one onto a tool operation and returns the
//! same envelope the dispatcher produces, always with HTTP 200; callers
//! branch on the `success` field, not on status codes. A generic
//! `/tools/call` endpoint accepts `{tool, params}` for agent-style
//! dispatch.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::tools::ToolRegistry;

type Registry = Arc<ToolRegistry>;

pub fn router(registry: Registry) -> Router {
    Router::new()
        .route("/history/geocode", post(history_geocode))
        .route("/history/timeline", post(history_timeline))
        .route("/history/compare", post(history_compare))
        .route("/emotions/location", post(emotions_location))
        .route("/emotions/find", post(emotions_find))
        .route("/emotions/heatmap", post(emotions_heatmap))
        .route("/routes/calculate", post(routes_calculate))
        .route("/routes/confidence", post(routes_confidence))
        .route("/routes/reroute", post(routes_reroute))
        .route("/weather/current", post(weather_current))
        .route("/weather/forecast", post(weather_forecast))
        .route("/weather/ski", post(weather_ski))
        .route("/weather/compare", post(weather_compare))
        .route("/fetch", post(fetch_content))
        .route("/fetch/multiple", post(fetch_multiple))
        .route("/tools", get(list_tools))
        .route("/tools/call", post(call_tool))
        .with_state(registry)
}

macro_rules! tool_endpoint {
    ($handler:ident, $tool:literal) => {
        async fn $handler(
            State(registry): State<Registry>,
            Json(params): Json<Value>,
        ) -> Json<Value> {
            Json(registry.dispatch($tool, params).await)
        }
    };
}

tool_endpoint!(history_geocode, "geocode_historical");
tool_endpoint!(history_timeline, "get_location_timeline");
tool_endpoint!(history_compare, "compare_eras");
tool_endpoint!(emotions_location, "get_location_emotions");
tool_endpoint!(emotions_find, "find_places_by_emotion");
tool_endpoint!(emotions_heatmap, "get_emotional_heatmap");
tool_endpoint!(routes_calculate, "calculate_routes");
tool_endpoint!(routes_confidence, "evaluate_route_confidence");
tool_endpoint!(routes_reroute, "adaptive_reroute");
tool_endpoint!(weather_current, "get_current_weather");
tool_endpoint!(weather_forecast, "get_weather_forecast");
tool_endpoint!(weather_ski, "get_ski_conditions");
tool_endpoint!(weather_compare, "compare_weather");
tool_endpoint!(fetch_content, "fetch_web_content");
tool_endpoint!(fetch_multiple, "fetch_multiple");

async fn list_tools(State(registry): State<Registry>) -> Json<Value> {
    Json(json!({
        "success": true,
        "tools": registry.definitions(),
    }))
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    tool: String,
    #[serde(default)]
    params: Value,
}

async fn call_tool(State(registry): State<Registry>, Json(call): Json<ToolCall>) -> Json<Value> {
    Json(registry.dispatch(&call.tool, call.params).await)
}
