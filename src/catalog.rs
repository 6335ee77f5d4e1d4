//! Static catalog backing all `MapMind` services
//!
//! The catalog is the only data source in the system: location sentiment
//! profiles, historical timelines, route options, and weather stations.
//! It is built once at startup and shared read-only; requests never
//! mutate it. All collections are `Vec`s so iteration order is the
//! declaration order, which the fuzzy resolver depends on.

use serde::Serialize;

/// A location with an emotional sentiment profile
#[derive(Debug, Clone, Serialize)]
pub struct LocationRecord {
    /// Canonical catalog key, e.g. "Paris, France"
    pub key: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Emotion label to intensity score (0-100), declaration order preserved
    pub emotions: Vec<(String, f64)>,
    /// Sample sentiment descriptions aggregated for this place
    pub descriptions: Vec<String>,
}

impl LocationRecord {
    /// Score for an emotion label, 0 when the label is absent
    pub fn emotion_score(&self, label: &str) -> f64 {
        self.emotions
            .iter()
            .find(|(name, _)| name == label)
            .map_or(0.0, |(_, score)| *score)
    }

    /// Highest-scoring emotion; first entry wins on equal scores
    pub fn dominant_emotion(&self) -> (&str, f64) {
        let mut best = (self.emotions[0].0.as_str(), self.emotions[0].1);
        for (name, score) in &self.emotions[1..] {
            if *score > best.1 {
                best = (name.as_str(), *score);
            }
        }
        best
    }

    /// Mean of all emotion scores
    pub fn mean_intensity(&self) -> f64 {
        let total: f64 = self.emotions.iter().map(|(_, s)| s).sum();
        total / self.emotions.len() as f64
    }
}

/// One documented era of a location's history
#[derive(Debug, Clone, Serialize)]
pub struct HistoricalEntry {
    /// Year of the record; negative means BCE
    pub year: i32,
    /// Name of the place in that era
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Short historical context for the era
    pub context: String,
}

/// Timeline of a location, entries ascending by year
#[derive(Debug, Clone, Serialize)]
pub struct HistoricalRecord {
    pub key: String,
    pub entries: Vec<HistoricalEntry>,
}

/// A single route alternative between two places
#[derive(Debug, Clone, Serialize)]
pub struct RouteOption {
    pub name: String,
    /// Distance in kilometers, always positive
    pub distance_km: f64,
    /// Base travel time in minutes, always positive
    pub base_time_min: i64,
    /// Modeled reliability in [0, 1]
    pub confidence: f64,
    /// Qualitative risk-factor labels
    pub risk_factors: Vec<String>,
    /// Qualitative advantage labels
    pub advantages: Vec<String>,
}

/// Route options keyed by an unordered pair of place names
#[derive(Debug, Clone, Serialize)]
pub struct RouteEdge {
    pub endpoints: (String, String),
    pub options: Vec<RouteOption>,
}

impl RouteEdge {
    /// Display form used in availability hints
    pub fn pair_label(&self) -> String {
        format!("{} ↔ {}", self.endpoints.0, self.endpoints.1)
    }
}

/// A weather station with its climate characteristics
#[derive(Debug, Clone, Serialize)]
pub struct WeatherStation {
    /// Lowercase lookup key, e.g. "beirut"
    pub key: String,
    /// Display name, e.g. "Beirut"
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Elevation in meters above sea level
    pub elevation_m: i32,
    /// Climate zone label
    pub climate: String,
    /// Typical winter temperature range, display only
    pub winter_range: String,
    /// Typical summer temperature range, display only
    pub summer_range: String,
}

/// The immutable in-memory data source for all services
#[derive(Debug, Clone)]
pub struct Catalog {
    pub locations: Vec<LocationRecord>,
    pub histories: Vec<HistoricalRecord>,
    pub routes: Vec<RouteEdge>,
    pub stations: Vec<WeatherStation>,
}

impl Catalog {
    /// All location keys in catalog order
    pub fn location_keys(&self) -> Vec<String> {
        self.locations.iter().map(|l| l.key.clone()).collect()
    }

    /// All historical location keys in catalog order
    pub fn history_keys(&self) -> Vec<String> {
        self.histories.iter().map(|h| h.key.clone()).collect()
    }

    /// All route pair labels in catalog order
    pub fn route_pair_labels(&self) -> Vec<String> {
        self.routes.iter().map(RouteEdge::pair_label).collect()
    }

    /// All weather station keys in catalog order
    pub fn station_keys(&self) -> Vec<String> {
        self.stations.iter().map(|s| s.key.clone()).collect()
    }

    /// Exact-key location lookup (case-sensitive, used by the heatmap)
    pub fn location(&self, key: &str) -> Option<&LocationRecord> {
        self.locations.iter().find(|l| l.key == key)
    }

    /// Exact-key historical record lookup
    pub fn history(&self, key: &str) -> Option<&HistoricalRecord> {
        self.histories.iter().find(|h| h.key == key)
    }

    /// Station lookup; keys are stored lowercase, input is normalized
    pub fn station(&self, key: &str) -> Option<&WeatherStation> {
        let key = key.trim().to_lowercase();
        self.stations.iter().find(|s| s.key == key)
    }

    /// The full built-in dataset
    pub fn builtin() -> Self {
        Self {
            locations: builtin_locations(),
            histories: builtin_histories(),
            routes: builtin_routes(),
            stations: builtin_stations(),
        }
    }
}

fn loc(
    key: &str,
    latitude: f64,
    longitude: f64,
    emotions: &[(&str, f64)],
    descriptions: &[&str],
) -> LocationRecord {
    LocationRecord {
        key: key.to_string(),
        latitude,
        longitude,
        emotions: emotions
            .iter()
            .map(|(name, score)| (name.to_string(), *score))
            .collect(),
        descriptions: descriptions.iter().map(|d| d.to_string()).collect(),
    }
}

fn era(year: i32, name: &str, latitude: f64, longitude: f64, context: &str) -> HistoricalEntry {
    HistoricalEntry {
        year,
        name: name.to_string(),
        latitude,
        longitude,
        context: context.to_string(),
    }
}

fn timeline(key: &str, entries: Vec<HistoricalEntry>) -> HistoricalRecord {
    HistoricalRecord {
        key: key.to_string(),
        entries,
    }
}

fn route(
    name: &str,
    distance_km: f64,
    base_time_min: i64,
    confidence: f64,
    risk_factors: &[&str],
    advantages: &[&str],
) -> RouteOption {
    RouteOption {
        name: name.to_string(),
        distance_km,
        base_time_min,
        confidence,
        risk_factors: risk_factors.iter().map(|f| f.to_string()).collect(),
        advantages: advantages.iter().map(|a| a.to_string()).collect(),
    }
}

fn edge(a: &str, b: &str, options: Vec<RouteOption>) -> RouteEdge {
    RouteEdge {
        endpoints: (a.to_string(), b.to_string()),
        options,
    }
}

#[allow(clippy::too_many_arguments)]
fn station(
    key: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    elevation_m: i32,
    climate: &str,
    winter_range: &str,
    summer_range: &str,
) -> WeatherStation {
    WeatherStation {
        key: key.to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        elevation_m,
        climate: climate.to_string(),
        winter_range: winter_range.to_string(),
        summer_range: summer_range.to_string(),
    }
}

fn builtin_locations() -> Vec<LocationRecord> {
    vec![
        loc(
            "Beirut",
            33.8886,
            35.4955,
            &[
                ("nostalgia", 85.0),
                ("resilience", 90.0),
                ("joy", 70.0),
                ("hope", 75.0),
                ("melancholy", 60.0),
                ("inspiration", 80.0),
            ],
            &[
                "The city that rises from the ashes with unbreakable spirit",
                "Corniche sunsets bring bittersweet memories",
                "Every street corner tells a story of survival and beauty",
            ],
        ),
        loc(
            "Gemmayzeh",
            33.8947,
            35.5189,
            &[
                ("nostalgia", 90.0),
                ("joy", 75.0),
                ("creativity", 85.0),
                ("sadness", 65.0),
                ("hope", 70.0),
                ("community", 80.0),
            ],
            &[
                "Historic streets filled with art and resilience",
                "The heartbeat of Beirut's creative renaissance",
                "Where tradition meets contemporary Lebanese culture",
                "Rebuilding with beauty and determination",
            ],
        ),
        loc(
            "AUB Campus",
            33.8972,
            35.4795,
            &[
                ("inspiration", 90.0),
                ("peace", 85.0),
                ("ambition", 80.0),
                ("joy", 75.0),
                ("nostalgia", 70.0),
                ("stress", 40.0),
            ],
            &[
                "Green sanctuary in the heart of Beirut",
                "Where generations of leaders found their calling",
                "The ancient trees whisper wisdom to students",
                "A bubble of academic excellence and natural beauty",
            ],
        ),
        loc(
            "Hamra",
            33.8978,
            35.4828,
            &[
                ("excitement", 85.0),
                ("nostalgia", 75.0),
                ("energy", 90.0),
                ("joy", 80.0),
                ("chaos", 70.0),
                ("inspiration", 65.0),
            ],
            &[
                "The intellectual and cultural heart of Beirut",
                "Bustling street life from dawn to midnight",
                "Where students, artists, and thinkers converge",
            ],
        ),
        loc(
            "AUB Main Gate",
            33.8975,
            35.4790,
            &[
                ("anticipation", 85.0),
                ("pride", 90.0),
                ("nostalgia", 80.0),
                ("inspiration", 75.0),
                ("belonging", 88.0),
                ("excitement", 70.0),
            ],
            &[
                "The threshold where journeys begin",
                "Generations have passed through these gates to knowledge",
                "Every return brings waves of memories",
                "The iconic gateway to academic excellence",
            ],
        ),
        loc(
            "Byblos",
            34.1208,
            35.6481,
            &[
                ("wonder", 90.0),
                ("peace", 85.0),
                ("nostalgia", 95.0),
                ("inspiration", 88.0),
                ("joy", 75.0),
                ("awe", 92.0),
            ],
            &[
                "Walking through 7,000 years of history",
                "Ancient harbor where civilizations were born",
                "The old souk whispers tales of Phoenician traders",
                "UNESCO heritage site with timeless Mediterranean charm",
            ],
        ),
        loc(
            "Paris, France",
            48.8566,
            2.3522,
            &[
                ("joy", 75.0),
                ("inspiration", 85.0),
                ("nostalgia", 60.0),
                ("excitement", 70.0),
                ("peace", 45.0),
                ("stress", 40.0),
            ],
            &[
                "The city lights filled me with wonder",
                "Walking along the Seine brought such peace",
                "The art scene is incredibly inspiring",
            ],
        ),
        loc(
            "Tokyo, Japan",
            35.6762,
            139.6503,
            &[
                ("excitement", 90.0),
                ("inspiration", 80.0),
                ("stress", 55.0),
                ("joy", 70.0),
                ("peace", 50.0),
                ("nostalgia", 45.0),
            ],
            &[
                "The energy of Shibuya is electrifying",
                "Found unexpected tranquility in traditional gardens",
                "Technology and tradition create constant amazement",
            ],
        ),
        loc(
            "Reykjavik, Iceland",
            64.1466,
            -21.9426,
            &[
                ("peace", 95.0),
                ("inspiration", 85.0),
                ("joy", 65.0),
                ("excitement", 60.0),
                ("nostalgia", 40.0),
                ("stress", 15.0),
            ],
            &[
                "The vast landscapes bring incredible calm",
                "Northern lights stirred something deep within",
                "Nature's raw beauty is overwhelming",
            ],
        ),
        loc(
            "New York City, USA",
            40.7128,
            -74.0060,
            &[
                ("excitement", 95.0),
                ("stress", 75.0),
                ("inspiration", 80.0),
                ("joy", 70.0),
                ("peace", 25.0),
                ("nostalgia", 50.0),
            ],
            &[
                "The city that never sleeps keeps you energized",
                "Constant stimulus can be overwhelming",
                "Every corner holds creative possibility",
            ],
        ),
        loc(
            "Kyoto, Japan",
            35.0116,
            135.7681,
            &[
                ("peace", 90.0),
                ("nostalgia", 85.0),
                ("inspiration", 75.0),
                ("joy", 70.0),
                ("excitement", 45.0),
                ("stress", 20.0),
            ],
            &[
                "Ancient temples radiate serenity",
                "Feels like stepping back in time",
                "Traditional gardens promote deep reflection",
            ],
        ),
    ]
}

fn builtin_histories() -> Vec<HistoricalRecord> {
    vec![
        timeline(
            "Beirut",
            vec![
                era(
                    -3000,
                    "Berytus (Phoenician)",
                    33.8886,
                    35.4955,
                    "Ancient Phoenician port city, center of maritime trade",
                ),
                era(
                    64,
                    "Berytus (Roman)",
                    33.8886,
                    35.4955,
                    "Roman colony, famous law school established",
                ),
                era(
                    1866,
                    "Beirut",
                    33.8886,
                    35.4955,
                    "American University of Beirut founded",
                ),
                era(
                    1920,
                    "Beirut (French Mandate)",
                    33.8886,
                    35.4955,
                    "Under French Mandate after WWI",
                ),
                era(
                    1943,
                    "Beirut",
                    33.8886,
                    35.4955,
                    "Lebanon gains independence, Beirut becomes capital",
                ),
                era(
                    2024,
                    "Beirut",
                    33.8886,
                    35.4955,
                    "Modern capital, resilient cultural hub of Lebanon",
                ),
            ],
        ),
        timeline(
            "Gemmayzeh",
            vec![
                era(
                    1880,
                    "Gemmayzeh Quarter",
                    33.8947,
                    35.5189,
                    "Historic Armenian and Greek Orthodox district established",
                ),
                era(
                    1975,
                    "Gemmayzeh (Green Line)",
                    33.8947,
                    35.5189,
                    "Near the Green Line during Lebanese civil war",
                ),
                era(
                    2000,
                    "Gemmayzeh Arts District",
                    33.8947,
                    35.5189,
                    "Post-war cultural renaissance, galleries and cafes flourish",
                ),
                era(
                    2020,
                    "Gemmayzeh",
                    33.8947,
                    35.5189,
                    "Devastating port blast damage, ongoing community rebuilding",
                ),
            ],
        ),
        timeline(
            "AUB Campus",
            vec![
                era(
                    1866,
                    "Syrian Protestant College",
                    33.8972,
                    35.4795,
                    "Founded by American missionaries, 16 students",
                ),
                era(
                    1920,
                    "American University of Beirut",
                    33.8972,
                    35.4795,
                    "Renamed AUB, expanded programs and campus",
                ),
                era(
                    1975,
                    "AUB Campus (War Era)",
                    33.8972,
                    35.4795,
                    "Continued operation during civil war, sanctuary for students",
                ),
                era(
                    2024,
                    "AUB Campus",
                    33.8972,
                    35.4795,
                    "Leading regional university, 158 years of excellence",
                ),
            ],
        ),
        timeline(
            "AUB Main Gate",
            vec![
                era(
                    1866,
                    "College Entrance",
                    33.8975,
                    35.4790,
                    "Original entrance to Syrian Protestant College",
                ),
                era(
                    1920,
                    "AUB Main Gate",
                    33.8975,
                    35.4790,
                    "Iconic campus entrance on Bliss Street",
                ),
                era(
                    2024,
                    "AUB Main Gate",
                    33.8975,
                    35.4790,
                    "Historic gateway welcoming generations of students",
                ),
            ],
        ),
        timeline(
            "Byblos",
            vec![
                era(
                    -5000,
                    "Gebal (Phoenician)",
                    34.1208,
                    35.6481,
                    "Ancient Phoenician city, one of oldest continuously inhabited",
                ),
                era(
                    64,
                    "Byblos (Roman)",
                    34.1208,
                    35.6481,
                    "Roman colony, thriving port city",
                ),
                era(
                    1104,
                    "Gibelet (Crusader)",
                    34.1208,
                    35.6481,
                    "Crusader castle built overlooking the port",
                ),
                era(
                    1920,
                    "Jbeil",
                    34.1208,
                    35.6481,
                    "Lebanese town under French Mandate",
                ),
                era(
                    2024,
                    "Byblos (Jbeil)",
                    34.1208,
                    35.6481,
                    "UNESCO World Heritage Site, tourist destination",
                ),
            ],
        ),
        timeline(
            "Constantinople",
            vec![
                era(
                    330,
                    "Constantinople",
                    41.0082,
                    28.9784,
                    "Founded by Constantine as the new capital of Roman Empire",
                ),
                era(
                    1453,
                    "Constantinople",
                    41.0082,
                    28.9784,
                    "Fell to Ottoman Empire, marking end of Byzantine Empire",
                ),
                era(
                    1930,
                    "Istanbul",
                    41.0082,
                    28.9784,
                    "Officially renamed to Istanbul by Turkish Republic",
                ),
            ],
        ),
        timeline(
            "Berlin",
            vec![
                era(
                    1237,
                    "Berlin",
                    52.5200,
                    13.4050,
                    "First documented mention of Berlin",
                ),
                era(
                    1961,
                    "Berlin (Divided)",
                    52.5200,
                    13.4050,
                    "Berlin Wall constructed, dividing East and West",
                ),
                era(
                    1989,
                    "Berlin",
                    52.5200,
                    13.4050,
                    "Berlin Wall fell, reunification began",
                ),
            ],
        ),
        timeline(
            "New York",
            vec![
                era(
                    1624,
                    "New Amsterdam",
                    40.7128,
                    -74.0060,
                    "Dutch settlement established on Manhattan",
                ),
                era(
                    1664,
                    "New York",
                    40.7128,
                    -74.0060,
                    "English captured and renamed the city",
                ),
                era(
                    1898,
                    "New York City",
                    40.7128,
                    -74.0060,
                    "Five boroughs consolidated into modern NYC",
                ),
            ],
        ),
    ]
}

fn builtin_routes() -> Vec<RouteEdge> {
    vec![
        edge(
            "Beirut",
            "Byblos",
            vec![
                route(
                    "Coastal Highway",
                    37.0,
                    45,
                    0.75,
                    &[
                        "Beach traffic",
                        "Power cuts possible",
                        "Coastal congestion",
                    ],
                    &["Scenic Mediterranean views", "Multiple stops available"],
                ),
                route(
                    "Mountain Route",
                    42.0,
                    55,
                    0.85,
                    &["Winding roads", "Weather dependent"],
                    &["Avoids coastal traffic", "Beautiful mountain scenery"],
                ),
            ],
        ),
        edge(
            "AUB Campus",
            "Downtown Beirut",
            vec![
                route(
                    "Hamra-Bliss Route",
                    3.0,
                    15,
                    0.60,
                    &[
                        "Heavy traffic",
                        "Demonstrations possible",
                        "Power cuts affect lights",
                    ],
                    &["Most direct", "Many alternative paths"],
                ),
                route(
                    "Corniche Route",
                    4.0,
                    20,
                    0.80,
                    &["Pedestrian traffic", "Weather dependent"],
                    &["Scenic sea views", "Walkable", "Less congested"],
                ),
            ],
        ),
        edge(
            "AUB Main Gate",
            "Downtown Beirut",
            vec![
                route(
                    "Hamra-Bliss Route",
                    3.0,
                    15,
                    0.60,
                    &[
                        "Heavy traffic",
                        "Demonstrations possible",
                        "Power cuts affect lights",
                    ],
                    &["Most direct", "Many alternative paths"],
                ),
                route(
                    "Corniche Route",
                    4.0,
                    20,
                    0.80,
                    &["Pedestrian traffic", "Weather dependent"],
                    &["Scenic sea views", "Walkable", "Less congested"],
                ),
            ],
        ),
        edge(
            "Hamra",
            "Downtown Beirut",
            vec![
                route(
                    "Hamra Street Direct",
                    2.0,
                    12,
                    0.65,
                    &["Heavy traffic", "Street vendors", "Power cuts"],
                    &["Shortest route", "Many shops"],
                ),
                route(
                    "Verdun Route",
                    3.0,
                    18,
                    0.75,
                    &["Shopping traffic", "One-way streets"],
                    &["Less congested", "Better road quality"],
                ),
            ],
        ),
        edge(
            "Beirut",
            "Tripoli",
            vec![
                route(
                    "Coastal Highway North",
                    85.0,
                    90,
                    0.70,
                    &[
                        "Traffic checkpoints",
                        "Road quality varies",
                        "Power cuts",
                    ],
                    &["Direct route", "Coastal scenery"],
                ),
                route(
                    "Mountain Highway",
                    95.0,
                    110,
                    0.75,
                    &["Mountain weather", "Winding roads"],
                    &["Cooler in summer", "Less traffic"],
                ),
            ],
        ),
        edge(
            "Beirut",
            "Zahle",
            vec![route(
                "Damascus Road",
                54.0,
                65,
                0.82,
                &["Mountain pass", "Checkpoint delays"],
                &["Scenic Bekaa Valley", "Good road condition"],
            )],
        ),
        edge(
            "New York",
            "Boston",
            vec![
                route(
                    "I-95 Express",
                    346.0,
                    240,
                    0.85,
                    &["Highway traffic", "Construction zones"],
                    &["Fastest under normal conditions", "Multiple service areas"],
                ),
                route(
                    "Coastal Route 1",
                    412.0,
                    320,
                    0.92,
                    &["Weather dependent", "Seasonal traffic"],
                    &["Scenic views", "Charming coastal towns"],
                ),
                route(
                    "Inland Alternate",
                    368.0,
                    280,
                    0.78,
                    &["Less direct", "Variable conditions"],
                    &["Avoids major highways", "Lower traffic"],
                ),
            ],
        ),
        edge(
            "San Francisco",
            "Los Angeles",
            vec![
                route(
                    "I-5 Direct",
                    615.0,
                    360,
                    0.90,
                    &["Monotonous", "High truck traffic"],
                    &["Fastest route", "Straightforward navigation"],
                ),
                route(
                    "Highway 1 Pacific Coast",
                    750.0,
                    600,
                    0.75,
                    &["Weather closures", "Winding roads", "Fog risk"],
                    &["Breathtaking scenery", "Tourist attractions", "Beach access"],
                ),
                route(
                    "Highway 101 Moderate",
                    680.0,
                    450,
                    0.88,
                    &["Small town traffic", "Variable speed limits"],
                    &["Balanced route", "Wine country", "Good services"],
                ),
            ],
        ),
        edge(
            "London",
            "Edinburgh",
            vec![
                route(
                    "M1/A1(M) Motorway",
                    665.0,
                    420,
                    0.82,
                    &["Roadworks common", "Weather in North"],
                    &["Most direct", "Good infrastructure"],
                ),
                route(
                    "A1 Scenic",
                    685.0,
                    480,
                    0.88,
                    &["Smaller roads", "Village traffic"],
                    &["Historic sites", "Traditional villages", "Varied scenery"],
                ),
            ],
        ),
    ]
}

fn builtin_stations() -> Vec<WeatherStation> {
    vec![
        station(
            "beirut",
            "Beirut",
            33.8886,
            35.4955,
            34,
            "Mediterranean",
            "10-18°C",
            "24-32°C",
        ),
        station(
            "faraya",
            "Faraya (Ski Resort)",
            33.9833,
            35.8167,
            1850,
            "Mountain Mediterranean",
            "-5-5°C",
            "15-25°C",
        ),
        station(
            "tripoli",
            "Tripoli",
            34.4367,
            35.8497,
            0,
            "Mediterranean",
            "8-16°C",
            "22-30°C",
        ),
        station(
            "zahle",
            "Zahle (Bekaa Valley)",
            33.8469,
            35.9019,
            945,
            "Continental Mediterranean",
            "2-12°C",
            "18-32°C",
        ),
        station(
            "byblos",
            "Byblos (Jbeil)",
            34.1208,
            35.6481,
            20,
            "Mediterranean",
            "9-17°C",
            "23-30°C",
        ),
        station(
            "sidon",
            "Sidon (Saida)",
            33.5633,
            35.3714,
            25,
            "Mediterranean",
            "10-18°C",
            "24-31°C",
        ),
        station(
            "tyre",
            "Tyre (Sour)",
            33.2733,
            35.2039,
            15,
            "Mediterranean",
            "11-18°C",
            "24-30°C",
        ),
        station(
            "baalbek",
            "Baalbek",
            34.0067,
            36.2183,
            1150,
            "Continental",
            "0-10°C",
            "20-35°C",
        ),
        station(
            "cedars",
            "The Cedars (Bcharre)",
            34.2833,
            36.0167,
            2000,
            "Alpine Mediterranean",
            "-8-2°C",
            "12-22°C",
        ),
        station(
            "aub",
            "AUB Campus (Hamra)",
            33.8972,
            35.4795,
            50,
            "Mediterranean",
            "10-18°C",
            "24-32°C",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_populated() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.locations.len(), 11);
        assert_eq!(catalog.histories.len(), 8);
        assert_eq!(catalog.routes.len(), 9);
        assert_eq!(catalog.stations.len(), 10);
    }

    #[test]
    fn test_invariants_hold_for_builtin_data() {
        let catalog = Catalog::builtin();
        for location in &catalog.locations {
            assert!(!location.emotions.is_empty(), "{}", location.key);
            for (label, score) in &location.emotions {
                assert!(
                    (0.0..=100.0).contains(score),
                    "{}: {label} out of range",
                    location.key
                );
            }
        }
        for history in &catalog.histories {
            assert!(!history.entries.is_empty(), "{}", history.key);
            let years: Vec<i32> = history.entries.iter().map(|e| e.year).collect();
            let mut sorted = years.clone();
            sorted.sort_unstable();
            assert_eq!(years, sorted, "{} timeline not ascending", history.key);
        }
        for edge in &catalog.routes {
            assert!(!edge.options.is_empty());
            for option in &edge.options {
                assert!(option.distance_km > 0.0, "{}", option.name);
                assert!(option.base_time_min > 0, "{}", option.name);
                assert!(
                    (0.0..=1.0).contains(&option.confidence),
                    "{}",
                    option.name
                );
            }
        }
    }

    #[test]
    fn test_dominant_emotion_first_wins_on_tie() {
        let record = loc(
            "Test",
            0.0,
            0.0,
            &[("joy", 80.0), ("peace", 80.0), ("stress", 10.0)],
            &[],
        );
        assert_eq!(record.dominant_emotion(), ("joy", 80.0));
    }

    #[test]
    fn test_emotion_score_defaults_to_zero() {
        let catalog = Catalog::builtin();
        let beirut = catalog.location("Beirut").unwrap();
        assert_eq!(beirut.emotion_score("nostalgia"), 85.0);
        assert_eq!(beirut.emotion_score("fear"), 0.0);
    }

    #[test]
    fn test_station_lookup_normalizes_key() {
        let catalog = Catalog::builtin();
        assert!(catalog.station(" Beirut ").is_some());
        assert!(catalog.station("FARAYA").is_some());
        assert!(catalog.station("atlantis").is_none());
    }
}
