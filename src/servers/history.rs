//! Historical geocoding over documented eras
//!
//! Each place in the catalog carries a small timeline of documented
//! eras. Geocoding a year snaps it to the closest documented entry
//! rather than interpolating coordinates; the response says whether the
//! hit was exact and how far off it was.

use serde::Serialize;
use tracing::instrument;

use crate::catalog::Catalog;
use crate::error::MapMindError;
use crate::resolve::resolve_history;

#[derive(Debug, Clone, Serialize)]
pub struct HistoricalPlace {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub query_year: i32,
    pub closest_documented_year: i32,
    /// Whether any documented era predates or equals the query year
    pub existed: bool,
    pub historical_context: String,
}

/// Response for the historical geocode operation
#[derive(Debug, Clone, Serialize)]
pub struct GeocodeResponse {
    pub location: HistoricalPlace,
    /// "exact" when a documented era matches the year, else "interpolated"
    pub temporal_accuracy: &'static str,
    pub year_difference: i32,
}

/// Snap a year to the closest documented era of a place
///
/// Ties on distance resolve to the earlier entry because timelines are
/// stored ascending and the first minimum wins.
#[instrument(skip(catalog))]
pub fn geocode_historical(
    catalog: &Catalog,
    location_name: &str,
    year: i32,
) -> Result<GeocodeResponse, MapMindError> {
    let record = resolve_history(location_name, catalog)?;

    // min_by_key alone would keep the last entry on equal distances;
    // the index tiebreak pins ties to the earlier era.
    let closest = record
        .entries
        .iter()
        .enumerate()
        .min_by_key(|(index, entry)| ((entry.year - year).abs(), *index))
        .map(|(_, entry)| entry)
        .ok_or_else(|| MapMindError::general(format!("Empty timeline for '{}'", record.key)))?;

    let existed = record.entries.iter().any(|entry| entry.year <= year);

    Ok(GeocodeResponse {
        location: HistoricalPlace {
            name: closest.name.clone(),
            latitude: closest.latitude,
            longitude: closest.longitude,
            query_year: year,
            closest_documented_year: closest.year,
            existed,
            historical_context: closest.context.clone(),
        },
        temporal_accuracy: if closest.year == year {
            "exact"
        } else {
            "interpolated"
        },
        year_difference: (year - closest.year).abs(),
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEvent {
    pub year: i32,
    pub name: String,
    pub coordinates: TimelineCoordinates,
    pub event: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineCoordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeSpan {
    pub earliest: Option<i32>,
    pub latest: Option<i32>,
}

/// Response for the timeline operation
#[derive(Debug, Clone, Serialize)]
pub struct TimelineResponse {
    pub location: String,
    pub timeline: Vec<TimelineEvent>,
    pub total_events: usize,
    pub time_span: TimeSpan,
}

/// Documented eras of a place, optionally bounded by an inclusive year
/// range
///
/// An inverted or non-overlapping range is not an error: it yields an
/// empty timeline with zero events and a null time span.
#[instrument(skip(catalog))]
pub fn location_timeline(
    catalog: &Catalog,
    location_name: &str,
    start_year: Option<i32>,
    end_year: Option<i32>,
) -> Result<TimelineResponse, MapMindError> {
    let record = resolve_history(location_name, catalog)?;

    let timeline: Vec<TimelineEvent> = record
        .entries
        .iter()
        .filter(|entry| {
            start_year.is_none_or(|start| entry.year >= start)
                && end_year.is_none_or(|end| entry.year <= end)
        })
        .map(|entry| TimelineEvent {
            year: entry.year,
            name: entry.name.clone(),
            coordinates: TimelineCoordinates {
                lat: entry.latitude,
                lon: entry.longitude,
            },
            event: entry.context.clone(),
        })
        .collect();

    let time_span = TimeSpan {
        earliest: timeline.iter().map(|e| e.year).min(),
        latest: timeline.iter().map(|e| e.year).max(),
    };

    Ok(TimelineResponse {
        location: record.key.clone(),
        total_events: timeline.len(),
        timeline,
        time_span,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct EraSnapshot {
    pub year: i32,
    pub name: String,
    pub coordinates: TimelineCoordinates,
    pub context: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EraChanges {
    pub name_changed: bool,
    pub coordinates_changed: bool,
    pub years_between: i32,
}

/// Response for the era comparison operation
#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub location: String,
    pub era1: EraSnapshot,
    pub era2: EraSnapshot,
    pub changes: EraChanges,
    pub summary: String,
}

/// Compare one place between two years via two geocode lookups
#[instrument(skip(catalog))]
pub fn compare_eras(
    catalog: &Catalog,
    location_name: &str,
    year1: i32,
    year2: i32,
) -> Result<CompareResponse, MapMindError> {
    let era1 = geocode_historical(catalog, location_name, year1)?;
    let era2 = geocode_historical(catalog, location_name, year2)?;

    let loc1 = &era1.location;
    let loc2 = &era2.location;

    let name_changed = loc1.name != loc2.name;
    let coordinates_changed =
        loc1.latitude != loc2.latitude || loc1.longitude != loc2.longitude;

    let summary = if name_changed {
        format!(
            "Between {year1} and {year2}, '{}' was renamed to '{}'. This reflects significant political or cultural changes.",
            loc1.name, loc2.name
        )
    } else {
        format!(
            "Between {year1} and {year2}, '{}' maintained its name but underwent historical developments.",
            loc1.name
        )
    };

    Ok(CompareResponse {
        location: location_name.to_string(),
        era1: EraSnapshot {
            year: year1,
            name: loc1.name.clone(),
            coordinates: TimelineCoordinates {
                lat: loc1.latitude,
                lon: loc1.longitude,
            },
            context: loc1.historical_context.clone(),
        },
        era2: EraSnapshot {
            year: year2,
            name: loc2.name.clone(),
            coordinates: TimelineCoordinates {
                lat: loc2.latitude,
                lon: loc2.longitude,
            },
            context: loc2.historical_context.clone(),
        },
        changes: EraChanges {
            name_changed,
            coordinates_changed,
            years_between: (year2 - year1).abs(),
        },
        summary,
    })
}
