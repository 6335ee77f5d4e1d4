//! Free-text resolution of location names and route pairs
//!
//! Resolution is exact-first, fuzzy-second: a case-insensitive exact
//! key match wins outright, otherwise substring containment in either
//! direction is accepted and the first match in catalog order is
//! returned. There is deliberately no similarity ranking among
//! multiple fuzzy candidates.

use tracing::debug;

use crate::catalog::{Catalog, HistoricalRecord, LocationRecord, RouteEdge};
use crate::error::MapMindError;

/// Resolve a free-text query to a location record
///
/// Exact case-insensitive match first, then substring containment
/// (query in key, or key in query). First catalog entry wins.
pub fn resolve_location<'a>(
    query: &str,
    catalog: &'a Catalog,
) -> Result<&'a LocationRecord, MapMindError> {
    let query_lower = query.to_lowercase();

    if let Some(record) = catalog
        .locations
        .iter()
        .find(|l| l.key.to_lowercase() == query_lower)
    {
        return Ok(record);
    }

    for record in &catalog.locations {
        let key_lower = record.key.to_lowercase();
        if key_lower.contains(&query_lower) || query_lower.contains(&key_lower) {
            debug!("Fuzzy-matched '{}' to catalog key '{}'", query, record.key);
            return Ok(record);
        }
    }

    Err(MapMindError::location_not_found(
        query,
        catalog.location_keys(),
    ))
}

/// Resolve a free-text query to a historical record
///
/// Matches the canonical key case-insensitively, or any era display
/// name exactly (case-insensitive), in catalog order.
pub fn resolve_history<'a>(
    query: &str,
    catalog: &'a Catalog,
) -> Result<&'a HistoricalRecord, MapMindError> {
    let query_lower = query.to_lowercase();

    for record in &catalog.histories {
        if record.key.to_lowercase() == query_lower
            || record
                .entries
                .iter()
                .any(|e| e.name.to_lowercase() == query_lower)
        {
            return Ok(record);
        }
    }

    Err(MapMindError::location_not_found_with_hint(
        query,
        catalog.history_keys(),
        "Try 'Constantinople', 'Berlin', or 'New York'",
    ))
}

/// Resolve an origin/destination pair to a route edge
///
/// An edge matches when its first endpoint (lowercased) is contained in
/// the lowercased origin and its second in the destination, or the
/// reverse. First edge in catalog order wins.
pub fn resolve_route_pair<'a>(
    origin: &str,
    destination: &str,
    catalog: &'a Catalog,
) -> Result<&'a RouteEdge, MapMindError> {
    let origin_lower = origin.to_lowercase();
    let destination_lower = destination.to_lowercase();

    for edge in &catalog.routes {
        let a = edge.endpoints.0.to_lowercase();
        let b = edge.endpoints.1.to_lowercase();
        let forward = origin_lower.contains(&a) && destination_lower.contains(&b);
        let reverse = origin_lower.contains(&b) && destination_lower.contains(&a);
        if forward || reverse {
            debug!(
                "Matched '{}' -> '{}' to edge '{}'",
                origin,
                destination,
                edge.pair_label()
            );
            return Ok(edge);
        }
    }

    Err(MapMindError::NoRouteAvailable {
        origin: origin.to_string(),
        destination: destination.to_string(),
        available: catalog.route_pair_labels(),
    })
}
