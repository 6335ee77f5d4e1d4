//! Emotional sentiment profiles for places
//!
//! Every place in the catalog carries an eight-dimension emotion
//! profile scored 0-100. The operations here read those profiles:
//! a single-place breakdown with derived insights, an emotion-first
//! search across the catalog, and a multi-place intensity comparison.

use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::instrument;

use crate::catalog::{Catalog, LocationRecord};
use crate::error::MapMindError;
use crate::ranking::{Stats, rank_descending, round2, stats};
use crate::resolve::resolve_location;

/// The eight emotion dimensions every profile scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Excitement,
    Fear,
    Peace,
    Nostalgia,
    Inspiration,
    Stress,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Excitement,
        Emotion::Fear,
        Emotion::Peace,
        Emotion::Nostalgia,
        Emotion::Inspiration,
        Emotion::Stress,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Excitement => "excitement",
            Emotion::Fear => "fear",
            Emotion::Peace => "peace",
            Emotion::Nostalgia => "nostalgia",
            Emotion::Inspiration => "inspiration",
            Emotion::Stress => "stress",
        }
    }

    /// Parse an emotion label, rejecting anything outside the set
    pub fn parse(value: &str) -> Result<Self, MapMindError> {
        let lower = value.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == lower)
            .ok_or_else(|| {
                MapMindError::invalid_parameter(
                    "emotion",
                    value,
                    Self::ALL.iter().map(|e| e.as_str().to_string()).collect(),
                )
            })
    }
}

fn emotions_object(record: &LocationRecord) -> Value {
    let map: Map<String, Value> = record
        .emotions
        .iter()
        .map(|(name, score)| (name.clone(), json!(score)))
        .collect();
    Value::Object(map)
}

/// Derive human-readable observations from an emotion profile
fn emotional_insights(record: &LocationRecord) -> Vec<String> {
    let mut insights = Vec::new();

    // Strict > keeps the first label on tied scores.
    let top_positive = ["joy", "excitement", "inspiration", "peace"]
        .iter()
        .map(|label| (*label, record.emotion_score(label)))
        .filter(|(_, score)| *score >= 70.0)
        .fold(None::<(&str, f64)>, |best, candidate| match best {
            Some((_, score)) if candidate.1 > score => Some(candidate),
            Some(_) => best,
            None => Some(candidate),
        });
    if let Some((label, score)) = top_positive {
        insights.push(format!(
            "This location is particularly known for evoking {label} (score: {score})"
        ));
    }

    if record.emotion_score("stress") >= 60.0 {
        insights.push(
            "This is a high-energy location that can be stimulating but sometimes overwhelming"
                .to_string(),
        );
    }

    let max = record
        .emotions
        .iter()
        .map(|(_, s)| *s)
        .fold(f64::MIN, f64::max);
    let min = record
        .emotions
        .iter()
        .map(|(_, s)| *s)
        .fold(f64::MAX, f64::min);
    if max - min < 30.0 {
        insights.push(
            "Visitors report a balanced emotional experience across different dimensions"
                .to_string(),
        );
    }

    if record.emotion_score("peace") >= 80.0 {
        insights.push("Ideal destination for those seeking tranquility and relaxation".to_string());
    }

    insights
}

#[derive(Debug, Clone, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationRef {
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmotionalProfile {
    pub dominant_emotion: String,
    pub dominant_score: f64,
    pub all_emotions: Value,
    pub overall_intensity: f64,
}

/// Response for the single-place emotion profile operation
#[derive(Debug, Clone, Serialize)]
pub struct LocationEmotionsResponse {
    pub location: LocationRef,
    pub emotional_profile: EmotionalProfile,
    pub insights: Vec<String>,
    pub sample_sentiments: Vec<String>,
    pub emotion_categories: Value,
}

/// Emotion profile and derived insights for one place
#[instrument(skip(catalog))]
pub fn location_emotions(
    catalog: &Catalog,
    location_name: &str,
) -> Result<LocationEmotionsResponse, MapMindError> {
    let record = resolve_location(location_name, catalog)?;
    let (dominant, score) = record.dominant_emotion();

    Ok(LocationEmotionsResponse {
        location: LocationRef {
            name: record.key.clone(),
            coordinates: Coordinates {
                latitude: record.latitude,
                longitude: record.longitude,
            },
        },
        emotional_profile: EmotionalProfile {
            dominant_emotion: dominant.to_string(),
            dominant_score: score,
            all_emotions: emotions_object(record),
            overall_intensity: round2(record.mean_intensity()),
        },
        insights: emotional_insights(record),
        sample_sentiments: record.descriptions.clone(),
        emotion_categories: json!({
            "positive": ["joy", "excitement", "inspiration", "peace"],
            "challenging": ["stress", "fear", "sadness"],
            "reflective": ["nostalgia", "peace"],
        }),
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct EmotionMatch {
    pub location: String,
    pub coordinates: Coordinates,
    pub emotion_score: f64,
    pub sample_description: String,
}

/// Response for the emotion-first search operation
#[derive(Debug, Clone, Serialize)]
pub struct FindByEmotionResponse {
    pub emotion_query: &'static str,
    pub min_intensity: f64,
    pub total_matches: usize,
    pub locations: Vec<EmotionMatch>,
    pub recommendation: String,
}

/// Find catalog places whose score for one emotion meets a threshold,
/// strongest first
#[instrument(skip(catalog))]
pub fn find_places_by_emotion(
    catalog: &Catalog,
    emotion: &str,
    min_intensity: Option<f64>,
) -> Result<FindByEmotionResponse, MapMindError> {
    let emotion = Emotion::parse(emotion)?;
    let min_intensity = min_intensity.unwrap_or(70.0);

    let mut matches: Vec<EmotionMatch> = catalog
        .locations
        .iter()
        .filter_map(|record| {
            let score = record.emotion_score(emotion.as_str());
            (score >= min_intensity).then(|| EmotionMatch {
                location: record.key.clone(),
                coordinates: Coordinates {
                    latitude: record.latitude,
                    longitude: record.longitude,
                },
                emotion_score: score,
                sample_description: record.descriptions.first().cloned().unwrap_or_default(),
            })
        })
        .collect();

    rank_descending(&mut matches, |m| m.emotion_score);

    let recommendation = match matches.first() {
        Some(top) => format!(
            "For the strongest {} experience, consider visiting {} (emotion score: {})",
            emotion.as_str(),
            top.location,
            top.emotion_score
        ),
        None => format!(
            "No locations found with strong {} ratings. Try lowering the minimum intensity.",
            emotion.as_str()
        ),
    };

    Ok(FindByEmotionResponse {
        emotion_query: emotion.as_str(),
        min_intensity,
        total_matches: matches.len(),
        locations: matches,
        recommendation,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapPoint {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub intensity: f64,
    pub emotions: Value,
}

/// Response for the multi-place comparison operation
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapResponse {
    pub emotion_filter: String,
    pub heatmap_points: Vec<HeatmapPoint>,
    pub statistics: Option<Stats>,
    pub visualization_ready: bool,
}

/// Intensity comparison across caller-chosen places
///
/// Lookup is exact by catalog key; unknown names are silently skipped
/// so the comparison degrades instead of failing. The filter label is
/// not validated: an unrecognized emotion simply scores 0 everywhere.
#[instrument(skip(catalog))]
pub fn emotional_heatmap(
    catalog: &Catalog,
    locations: &[String],
    emotion_filter: Option<&str>,
) -> Result<HeatmapResponse, MapMindError> {
    let heatmap_points: Vec<HeatmapPoint> = locations
        .iter()
        .filter_map(|name| catalog.location(name))
        .map(|record| {
            let (intensity, emotions) = match emotion_filter {
                Some(filter) => {
                    let score = record.emotion_score(&filter.to_lowercase());
                    (score, json!({ filter: score }))
                }
                None => (record.mean_intensity(), emotions_object(record)),
            };
            HeatmapPoint {
                location: record.key.clone(),
                latitude: record.latitude,
                longitude: record.longitude,
                intensity: round2(intensity),
                emotions,
            }
        })
        .collect();

    let intensities: Vec<f64> = heatmap_points.iter().map(|p| p.intensity).collect();

    Ok(HeatmapResponse {
        emotion_filter: emotion_filter.unwrap_or("overall").to_string(),
        statistics: stats(&intensities),
        heatmap_points,
        visualization_ready: true,
    })
}
