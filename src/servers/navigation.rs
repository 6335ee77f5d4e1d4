//! Probabilistic route scoring and adaptive rerouting
//!
//! Routes are never computed from a road graph; every option is a
//! catalog entry with a fixed distance, base time, and confidence. The
//! value of this module is the scoring layer: mode-specific weighted
//! suitability, time uncertainty derived from confidence, and
//! condition-driven confidence adjustment. The formulas are
//! compatibility-critical and must not be "improved".

use rand::RngExt;
use serde::Serialize;
use tracing::instrument;

use crate::catalog::{Catalog, RouteOption};
use crate::error::MapMindError;
use crate::ranking::{rank_descending, round2, round3};
use crate::resolve::resolve_route_pair;

/// Routing optimization preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteMode {
    Fastest,
    Scenic,
    Safest,
    Adventurous,
    Efficient,
}

impl RouteMode {
    pub const ALL: [RouteMode; 5] = [
        RouteMode::Fastest,
        RouteMode::Scenic,
        RouteMode::Safest,
        RouteMode::Adventurous,
        RouteMode::Efficient,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RouteMode::Fastest => "fastest",
            RouteMode::Scenic => "scenic",
            RouteMode::Safest => "safest",
            RouteMode::Adventurous => "adventurous",
            RouteMode::Efficient => "efficient",
        }
    }

    /// Parse a mode string, rejecting anything outside the enumerated set
    pub fn parse(value: &str) -> Result<Self, MapMindError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value.to_lowercase())
            .ok_or_else(|| {
                MapMindError::invalid_parameter(
                    "mode",
                    value,
                    Self::ALL.iter().map(|m| m.as_str().to_string()).collect(),
                )
            })
    }
}

/// Mode-specific weighted suitability score
///
/// The caller-supplied risk tolerance is advisory: it is echoed in
/// responses but does not enter any formula.
pub fn suitability_score(option: &RouteOption, mode: RouteMode) -> f64 {
    let base_score = option.confidence * 100.0;
    let base_time = option.base_time_min as f64;

    match mode {
        RouteMode::Fastest => {
            let time_score = 100.0 / (1.0 + base_time / 100.0);
            base_score * 0.4 + time_score * 0.6
        }
        RouteMode::Scenic => {
            let scenic_bonus = if option.advantages.iter().any(|adv| {
                let adv = adv.to_lowercase();
                adv.contains("scenic") || adv.contains("view")
            }) {
                20.0
            } else {
                0.0
            };
            base_score * 0.5 + scenic_bonus + option.distance_km / 10.0
        }
        RouteMode::Safest => option.confidence * 120.0,
        RouteMode::Adventurous => {
            (1.0 - option.confidence) * 80.0 + option.risk_factors.len() as f64 * 10.0
        }
        RouteMode::Efficient => {
            option.confidence * 50.0 + 100.0 / (1.0 + base_time / 200.0)
        }
    }
}

/// Time variance in minutes: 15% base, widened by low confidence,
/// truncated to whole minutes
pub fn time_uncertainty(option: &RouteOption) -> i64 {
    let base_variance = option.base_time_min as f64 * 0.15;
    let confidence_factor = 1.0 - option.confidence;
    (base_variance * (1.0 + confidence_factor * 2.0)) as i64
}

/// Four-tier reliability bucket on confidence
pub fn reliability_state(confidence: f64) -> &'static str {
    if confidence >= 0.9 {
        "fully reliable"
    } else if confidence >= 0.8 {
        "80% reliable / 20% uncertain"
    } else if confidence >= 0.7 {
        "70% reliable / 30% uncertain"
    } else {
        "60% reliable / 40% uncertain"
    }
}

/// Risk bucket on confidence
pub fn risk_level(confidence: f64) -> &'static str {
    if confidence >= 0.85 {
        "LOW"
    } else if confidence >= 0.75 {
        "MODERATE"
    } else {
        "ELEVATED"
    }
}

/// Probability of an on-plan journey, penalized per risk factor
pub fn success_probability(option: &RouteOption) -> f64 {
    option.confidence * (1.0 - option.risk_factors.len() as f64 * 0.03)
}

/// Lower route confidence for each condition token found inside a risk
/// factor. The penalty is cumulative with no dedup: a condition whose
/// tokens hit several factors subtracts 0.1 each time. Result clamped
/// to [0.4, 1.0].
pub fn adjust_confidence(option: &RouteOption, conditions: &[String]) -> f64 {
    let mut adjusted = option.confidence;

    for condition in conditions {
        let tokens: Vec<String> = condition
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        for factor in &option.risk_factors {
            let factor_lower = factor.to_lowercase();
            if tokens.iter().any(|token| factor_lower.contains(token)) {
                adjusted -= 0.1;
            }
        }
    }

    adjusted.clamp(0.4, 1.0)
}

/// Time impact of live conditions on a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionImpact {
    /// Added minutes on top of the base time
    pub time_delta_min: i64,
    /// "significant" / "moderate" / "minimal"
    pub severity: &'static str,
    /// How many conditions textually matched a risk factor
    pub affected_factors: usize,
}

/// Count conditions whose full text appears inside a risk factor and
/// derive the schedule impact. Note the matching direction differs
/// from [`adjust_confidence`] (whole condition in factor, not token in
/// factor); both rules are preserved independently.
pub fn condition_impact(option: &RouteOption, conditions: &[String]) -> ConditionImpact {
    let matching = conditions
        .iter()
        .filter(|condition| {
            let condition_lower = condition.to_lowercase();
            option
                .risk_factors
                .iter()
                .any(|factor| factor.to_lowercase().contains(&condition_lower))
        })
        .count();

    let (time_delta_min, severity) = if matching >= 2 {
        ((option.base_time_min as f64 * 0.25) as i64, "significant")
    } else if matching == 1 {
        ((option.base_time_min as f64 * 0.1) as i64, "moderate")
    } else {
        (0, "minimal")
    };

    ConditionImpact {
        time_delta_min,
        severity,
        affected_factors: matching,
    }
}

/// Severity bucket on the raw number of reported conditions
pub fn condition_severity(conditions: &[String]) -> &'static str {
    if conditions.len() >= 3 {
        "HIGH"
    } else if conditions.len() >= 2 {
        "MODERATE"
    } else {
        "LOW"
    }
}

fn suggest_mitigations(factors: &[String]) -> Vec<String> {
    let mut mitigations = Vec::new();
    for factor in factors {
        let factor = factor.to_lowercase();
        if factor.contains("traffic") {
            mitigations.push("Check live traffic before departure and during journey".to_string());
        }
        if factor.contains("weather") {
            mitigations.push("Monitor weather forecasts and have backup timing".to_string());
        }
        if factor.contains("construction") {
            mitigations.push("Use real-time navigation apps for construction updates".to_string());
        }
    }
    if mitigations.is_empty() {
        mitigations = vec![
            "Monitor conditions regularly".to_string(),
            "Allow extra time".to_string(),
        ];
    }
    mitigations
}

/// Optimistic/expected/pessimistic travel time window
#[derive(Debug, Clone, Serialize)]
pub struct TimeRange {
    pub optimistic: i64,
    pub expected: i64,
    pub pessimistic: i64,
}

/// A route option with its per-request derived scoring fields
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRoute {
    pub route_name: String,
    pub distance_km: f64,
    pub estimated_time_min: i64,
    pub time_range: TimeRange,
    pub confidence_score: f64,
    pub suitability_score: f64,
    pub risk_factors: Vec<String>,
    pub advantages: Vec<String>,
    pub reliability_state: &'static str,
}

/// Response for the route calculation operation
#[derive(Debug, Clone, Serialize)]
pub struct RoutesResponse {
    pub origin: String,
    pub destination: String,
    pub routing_mode: &'static str,
    pub risk_tolerance: f64,
    pub total_routes_analyzed: usize,
    pub routes: Vec<ScoredRoute>,
    pub recommendation: String,
}

/// Score and rank every route option between two places
#[instrument(skip(catalog))]
pub fn calculate_routes(
    catalog: &Catalog,
    origin: &str,
    destination: &str,
    mode: &str,
    risk_tolerance: f64,
) -> Result<RoutesResponse, MapMindError> {
    let mode = RouteMode::parse(mode)?;
    let edge = resolve_route_pair(origin, destination, catalog)?;

    let mut routes: Vec<ScoredRoute> = edge
        .options
        .iter()
        .map(|option| {
            let variance = time_uncertainty(option);
            ScoredRoute {
                route_name: option.name.clone(),
                distance_km: option.distance_km,
                estimated_time_min: option.base_time_min,
                time_range: TimeRange {
                    optimistic: option.base_time_min - variance,
                    expected: option.base_time_min,
                    pessimistic: option.base_time_min + variance,
                },
                confidence_score: option.confidence,
                suitability_score: round2(suitability_score(option, mode)),
                risk_factors: option.risk_factors.clone(),
                advantages: option.advantages.clone(),
                reliability_state: reliability_state(option.confidence),
            }
        })
        .collect();

    rank_descending(&mut routes, |r| r.suitability_score);

    let best = &routes[0];
    let recommendation = format!(
        "Based on {} mode, '{}' is your best option with a suitability of {:.0} and {:.0}% confidence.",
        mode.as_str(),
        best.route_name,
        best.suitability_score,
        best.confidence_score * 100.0
    );

    Ok(RoutesResponse {
        origin: origin.to_string(),
        destination: destination.to_string(),
        routing_mode: mode.as_str(),
        risk_tolerance,
        total_routes_analyzed: routes.len(),
        routes,
        recommendation,
    })
}

/// Component-level confidence estimates with bounded jitter
#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceBreakdown {
    pub route_infrastructure: f64,
    pub historical_reliability: f64,
    pub weather_independence: f64,
    pub navigation_clarity: f64,
}

fn confidence_breakdown(option: &RouteOption) -> ConfidenceBreakdown {
    let mut rng = rand::rng();
    ConfidenceBreakdown {
        route_infrastructure: round2(option.confidence + rng.random_range(-0.05..0.05)),
        historical_reliability: round2(option.confidence + rng.random_range(-0.08..0.02)),
        weather_independence: round2(
            option.confidence - option.risk_factors.len() as f64 * 0.05,
        ),
        navigation_clarity: round2(0.85 + rng.random_range(-0.1..0.1)),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteRef {
    pub name: String,
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub level: &'static str,
    pub factors: Vec<String>,
    pub mitigation_strategies: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimingReliability {
    pub on_time_probability: f64,
    pub delay_likelihood: f64,
    pub expected_variance_min: i64,
}

/// Response for the per-route confidence analysis operation
#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceResponse {
    pub route: RouteRef,
    pub overall_confidence: f64,
    pub success_probability: f64,
    pub confidence_breakdown: ConfidenceBreakdown,
    pub risk_assessment: RiskAssessment,
    pub timing_reliability: TimingReliability,
}

/// Deep reliability analysis of one named route option
#[instrument(skip(catalog))]
pub fn evaluate_route_confidence(
    catalog: &Catalog,
    origin: &str,
    destination: &str,
    route_name: &str,
) -> Result<ConfidenceResponse, MapMindError> {
    let edge = resolve_route_pair(origin, destination, catalog)?;

    let option = edge
        .options
        .iter()
        .find(|o| o.name.to_lowercase() == route_name.to_lowercase())
        .ok_or_else(|| MapMindError::RouteOptionNotFound {
            name: route_name.to_string(),
            available: edge.options.iter().map(|o| o.name.clone()).collect(),
        })?;

    Ok(ConfidenceResponse {
        route: RouteRef {
            name: option.name.clone(),
            origin: origin.to_string(),
            destination: destination.to_string(),
        },
        overall_confidence: option.confidence,
        success_probability: round3(success_probability(option)),
        confidence_breakdown: confidence_breakdown(option),
        risk_assessment: RiskAssessment {
            level: risk_level(option.confidence),
            factors: option.risk_factors.clone(),
            mitigation_strategies: suggest_mitigations(&option.risk_factors),
        },
        timing_reliability: TimingReliability {
            on_time_probability: round2(option.confidence * 0.9),
            delay_likelihood: round2(1.0 - option.confidence),
            expected_variance_min: time_uncertainty(option),
        },
    })
}

/// One route re-scored against live conditions
#[derive(Debug, Clone, Serialize)]
pub struct AdaptedRoute {
    pub route_name: String,
    pub original_confidence: f64,
    pub adjusted_confidence: f64,
    pub confidence_change: f64,
    pub estimated_time_min: i64,
    pub condition_impact: ConditionImpact,
    pub recommendation: String,
}

/// Response for the adaptive reroute operation
#[derive(Debug, Clone, Serialize)]
pub struct RerouteResponse {
    pub current_location: String,
    pub destination: String,
    pub current_conditions: Vec<String>,
    pub condition_severity: &'static str,
    pub adapted_routes: Vec<AdaptedRoute>,
    pub best_option: AdaptedRoute,
    pub max_confidence_shift: f64,
}

fn adaptation_recommendation(
    option: &RouteOption,
    adjusted_confidence: f64,
    impact: &ConditionImpact,
) -> String {
    if adjusted_confidence >= 0.8 {
        format!(
            "Continue with {} - still reliable despite conditions",
            option.name
        )
    } else if adjusted_confidence >= 0.65 {
        format!(
            "{} usable but expect delays of ~{} minutes",
            option.name, impact.time_delta_min
        )
    } else {
        format!(
            "Consider alternative to {} due to current conditions",
            option.name
        )
    }
}

/// Re-score all routes between two places against live conditions and
/// rank by adjusted confidence
#[instrument(skip(catalog))]
pub fn adaptive_reroute(
    catalog: &Catalog,
    current_location: &str,
    destination: &str,
    conditions: &[String],
) -> Result<RerouteResponse, MapMindError> {
    let edge = resolve_route_pair(current_location, destination, catalog)?;

    let mut adapted: Vec<AdaptedRoute> = edge
        .options
        .iter()
        .map(|option| {
            let adjusted = adjust_confidence(option, conditions);
            let impact = condition_impact(option, conditions);
            let recommendation = adaptation_recommendation(option, adjusted, &impact);
            AdaptedRoute {
                route_name: option.name.clone(),
                original_confidence: option.confidence,
                adjusted_confidence: round2(adjusted),
                confidence_change: round2(adjusted - option.confidence),
                estimated_time_min: option.base_time_min + impact.time_delta_min,
                condition_impact: impact,
                recommendation,
            }
        })
        .collect();

    rank_descending(&mut adapted, |r| r.adjusted_confidence);

    let max_confidence_shift = adapted
        .iter()
        .map(|r| r.confidence_change.abs())
        .fold(0.0, f64::max);
    let best_option = adapted[0].clone();

    Ok(RerouteResponse {
        current_location: current_location.to_string(),
        destination: destination.to_string(),
        current_conditions: conditions.to_vec(),
        condition_severity: condition_severity(conditions),
        adapted_routes: adapted,
        best_option,
        max_confidence_shift,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn option(confidence: f64, base_time_min: i64, factors: &[&str]) -> RouteOption {
        RouteOption {
            name: "Test Route".to_string(),
            distance_km: 100.0,
            base_time_min,
            confidence,
            risk_factors: factors.iter().map(|f| f.to_string()).collect(),
            advantages: vec!["Scenic views".to_string()],
        }
    }

    #[test]
    fn test_safest_score_is_confidence_times_120() {
        let route = option(0.85, 240, &["Highway traffic", "Construction zones"]);
        assert_eq!(suitability_score(&route, RouteMode::Safest), 102.0);
    }

    #[test]
    fn test_fastest_prefers_shorter_times() {
        let quick = option(0.8, 60, &[]);
        let slow = option(0.8, 300, &[]);
        assert!(
            suitability_score(&quick, RouteMode::Fastest)
                > suitability_score(&slow, RouteMode::Fastest)
        );
    }

    #[test]
    fn test_scenic_bonus_requires_scenic_or_view_advantage() {
        let mut route = option(0.8, 60, &[]);
        let with_bonus = suitability_score(&route, RouteMode::Scenic);
        route.advantages = vec!["Good services".to_string()];
        let without_bonus = suitability_score(&route, RouteMode::Scenic);
        assert_eq!(with_bonus - without_bonus, 20.0);
    }

    #[test]
    fn test_adventurous_rewards_uncertainty() {
        let risky = option(0.6, 60, &["Fog risk", "Winding roads"]);
        let safe = option(0.95, 60, &[]);
        assert!(
            suitability_score(&risky, RouteMode::Adventurous)
                > suitability_score(&safe, RouteMode::Adventurous)
        );
    }

    #[test]
    fn test_mode_parse_rejects_unknown() {
        assert_eq!(RouteMode::parse("SAFEST").unwrap(), RouteMode::Safest);
        let err = RouteMode::parse("teleport").unwrap_err();
        match err {
            MapMindError::InvalidParameter { valid, .. } => assert_eq!(valid.len(), 5),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_time_uncertainty_truncates() {
        // 240 * 0.15 * (1 + 0.15*2) = 46.8 -> 46
        let route = option(0.85, 240, &[]);
        assert_eq!(time_uncertainty(&route), 46);
        // Higher confidence narrows the window.
        let reliable = option(1.0, 240, &[]);
        assert_eq!(time_uncertainty(&reliable), 36);
    }

    #[rstest]
    #[case(0.95, "fully reliable")]
    #[case(0.9, "fully reliable")]
    #[case(0.85, "80% reliable / 20% uncertain")]
    #[case(0.75, "70% reliable / 30% uncertain")]
    #[case(0.6, "60% reliable / 40% uncertain")]
    fn test_reliability_state(#[case] confidence: f64, #[case] expected: &str) {
        assert_eq!(reliability_state(confidence), expected);
    }

    #[rstest]
    #[case(0.9, "LOW")]
    #[case(0.85, "LOW")]
    #[case(0.8, "MODERATE")]
    #[case(0.75, "MODERATE")]
    #[case(0.6, "ELEVATED")]
    fn test_risk_level(#[case] confidence: f64, #[case] expected: &str) {
        assert_eq!(risk_level(confidence), expected);
    }

    #[test]
    fn test_success_probability_penalizes_factors() {
        let route = option(0.85, 240, &["Highway traffic", "Construction zones"]);
        let p = success_probability(&route);
        assert!((p - 0.85 * 0.94).abs() < 1e-9);
    }

    #[test]
    fn test_adjust_confidence_penalizes_matching_conditions() {
        let route = option(0.85, 240, &["Heavy traffic", "Construction zones"]);
        let conditions = vec!["heavy traffic".to_string(), "construction".to_string()];
        let adjusted = adjust_confidence(&route, &conditions);
        // "heavy"/"traffic" tokens hit "Heavy traffic" (-0.1) and
        // "construction" hits "Construction zones" (-0.1).
        assert!((adjusted - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_adjust_confidence_is_cumulative_without_dedup() {
        // Both tokens of one condition land in two factors.
        let route = option(0.9, 60, &["Heavy traffic", "Beach traffic"]);
        let conditions = vec!["traffic jam".to_string()];
        let adjusted = adjust_confidence(&route, &conditions);
        assert!((adjusted - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_adjust_confidence_clamps_at_floor() {
        let route = option(
            0.6,
            60,
            &["Heavy traffic", "Beach traffic", "Coastal traffic"],
        );
        let conditions = vec![
            "traffic".to_string(),
            "heavy traffic".to_string(),
            "coastal traffic".to_string(),
        ];
        assert_eq!(adjust_confidence(&route, &conditions), 0.4);
    }

    #[test]
    fn test_condition_impact_uses_whole_condition_matching() {
        let route = option(0.85, 240, &["Highway traffic", "Construction zones"]);

        // Whole condition "construction" appears inside a factor; the
        // tokenized direction is irrelevant here.
        let one = condition_impact(&route, &["construction".to_string()]);
        assert_eq!(one.affected_factors, 1);
        assert_eq!(one.time_delta_min, 24);
        assert_eq!(one.severity, "moderate");

        let two = condition_impact(
            &route,
            &["construction".to_string(), "traffic".to_string()],
        );
        assert_eq!(two.affected_factors, 2);
        assert_eq!(two.time_delta_min, 60);
        assert_eq!(two.severity, "significant");

        // "heavy traffic" is not a substring of any factor even though
        // its tokens are; this direction must stay strict.
        let none = condition_impact(&route, &["heavy traffic jam".to_string()]);
        assert_eq!(none.affected_factors, 0);
        assert_eq!(none.severity, "minimal");
    }

    #[rstest]
    #[case(0, "LOW")]
    #[case(1, "LOW")]
    #[case(2, "MODERATE")]
    #[case(3, "HIGH")]
    fn test_condition_severity(#[case] count: usize, #[case] expected: &str) {
        let conditions: Vec<String> = (0..count).map(|i| format!("condition {i}")).collect();
        assert_eq!(condition_severity(&conditions), expected);
    }

    #[test]
    fn test_calculate_routes_ranks_descending() {
        let catalog = Catalog::builtin();
        let response = calculate_routes(&catalog, "New York", "Boston", "efficient", 0.5).unwrap();
        assert_eq!(response.total_routes_analyzed, 3);
        let scores: Vec<f64> = response
            .routes
            .iter()
            .map(|r| r.suitability_score)
            .collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(scores, sorted);

        for route in &response.routes {
            assert!(route.time_range.optimistic <= route.time_range.expected);
            assert!(route.time_range.expected <= route.time_range.pessimistic);
        }
    }

    #[test]
    fn test_calculate_routes_echoes_risk_tolerance() {
        let catalog = Catalog::builtin();
        let low = calculate_routes(&catalog, "New York", "Boston", "efficient", 0.2).unwrap();
        let high = calculate_routes(&catalog, "New York", "Boston", "efficient", 0.8).unwrap();
        assert_eq!(low.risk_tolerance, 0.2);
        assert_eq!(high.risk_tolerance, 0.8);
        // Advisory parameter: scores are unaffected.
        for (a, b) in low.routes.iter().zip(&high.routes) {
            assert_eq!(a.suitability_score, b.suitability_score);
        }
    }

    #[test]
    fn test_evaluate_route_confidence() {
        let catalog = Catalog::builtin();
        let response =
            evaluate_route_confidence(&catalog, "New York", "Boston", "I-95 Express").unwrap();
        assert_eq!(response.overall_confidence, 0.85);
        assert_eq!(response.success_probability, 0.799);
        assert_eq!(response.risk_assessment.level, "LOW");
        assert!(!response.risk_assessment.mitigation_strategies.is_empty());
        assert_eq!(response.timing_reliability.on_time_probability, 0.77);
        assert_eq!(response.timing_reliability.delay_likelihood, 0.15);
    }

    #[test]
    fn test_evaluate_unknown_route_lists_options() {
        let catalog = Catalog::builtin();
        let err = evaluate_route_confidence(&catalog, "New York", "Boston", "Imaginary Highway")
            .unwrap_err();
        match err {
            MapMindError::RouteOptionNotFound { available, .. } => {
                assert_eq!(available.len(), 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_adaptive_reroute_ranks_by_adjusted_confidence() {
        let catalog = Catalog::builtin();
        let conditions = vec!["heavy traffic".to_string(), "construction".to_string()];
        let response = adaptive_reroute(&catalog, "New York", "Boston", &conditions).unwrap();

        assert_eq!(response.condition_severity, "MODERATE");
        let confidences: Vec<f64> = response
            .adapted_routes
            .iter()
            .map(|r| r.adjusted_confidence)
            .collect();
        let mut sorted = confidences.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(confidences, sorted);
        assert_eq!(
            response.best_option.route_name,
            response.adapted_routes[0].route_name
        );
        for route in &response.adapted_routes {
            assert!(route.adjusted_confidence >= 0.4);
        }
    }
}
