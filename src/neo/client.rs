//! NASA NEO feed client.
//!
//! Fetches the daily near-Earth-object feed and reduces each object to the
//! handful of scalars the simulator needs: mean estimated diameter, relative
//! velocity, and miss distance. The HTTP call is blocking (ureq) and is run
//! from the async task pool by the plugin in [`super`].

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Feed endpoint. Date range and API key are appended as query parameters.
pub const NEO_FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Rate-limited public key used when `NASA_API_KEY` is unset.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Errors from fetching or decoding the NEO feed.
///
/// None of these reach the calculator; the plugin converts them into a
/// user-visible notification and leaves simulator parameters untouched.
#[derive(Debug, Error)]
pub enum NeoError {
    #[error("feed request failed: {0}")]
    Request(#[from] Box<ureq::Error>),

    #[error("failed to read feed response body: {0}")]
    Body(#[from] std::io::Error),

    #[error("malformed feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no near-Earth objects listed for {0}")]
    EmptyFeed(String),

    #[error("object {0} carries no close-approach data")]
    MissingApproach(String),

    #[error("unparseable numeric field {field}: {value:?}")]
    BadNumber { field: &'static str, value: String },
}

/// One near-Earth object reduced to simulator-relevant scalars.
#[derive(Clone, Debug, PartialEq)]
pub struct NeoSummary {
    pub name: String,
    /// Mean of the min/max estimated diameter, kilometers.
    pub diameter_km: f64,
    /// Relative velocity at closest approach, km/s.
    pub velocity_km_s: f64,
    /// Miss distance in astronomical units.
    pub distance_au: f64,
    /// Miss distance in kilometers, for display.
    pub distance_km: f64,
    /// NASA's potentially-hazardous-asteroid classification.
    pub hazardous: bool,
}

// Wire format of the feed, limited to the fields we extract. NASA encodes
// the numeric approach fields as strings.

#[derive(Debug, Deserialize)]
struct NeoFeed {
    near_earth_objects: HashMap<String, Vec<NeoObject>>,
}

#[derive(Debug, Deserialize)]
struct NeoObject {
    name: String,
    #[serde(default)]
    is_potentially_hazardous_asteroid: bool,
    estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Deserialize)]
struct EstimatedDiameter {
    kilometers: DiameterRange,
}

#[derive(Debug, Deserialize)]
struct DiameterRange {
    estimated_diameter_min: f64,
    estimated_diameter_max: f64,
}

#[derive(Debug, Deserialize)]
struct CloseApproach {
    relative_velocity: RelativeVelocity,
    miss_distance: MissDistance,
}

#[derive(Debug, Deserialize)]
struct RelativeVelocity {
    kilometers_per_second: String,
}

#[derive(Debug, Deserialize)]
struct MissDistance {
    astronomical: String,
    kilometers: String,
}

/// Fetch today's feed and return its objects, closest approach first.
pub fn fetch_today() -> Result<Vec<NeoSummary>, NeoError> {
    let date = current_date_string();
    let api_key =
        std::env::var("NASA_API_KEY").unwrap_or_else(|_| DEMO_API_KEY.to_string());
    let url = format!("{NEO_FEED_URL}?start_date={date}&end_date={date}&api_key={api_key}");

    let body = ureq::get(&url)
        .call()
        .map_err(Box::new)?
        .into_string()?;

    parse_feed(&body, &date)
}

/// Decode a feed response and summarize the objects listed under `date`.
pub fn parse_feed(json: &str, date: &str) -> Result<Vec<NeoSummary>, NeoError> {
    let feed: NeoFeed = serde_json::from_str(json)?;

    let objects = feed
        .near_earth_objects
        .get(date)
        .filter(|objects| !objects.is_empty())
        .ok_or_else(|| NeoError::EmptyFeed(date.to_string()))?;

    let mut summaries = objects
        .iter()
        .map(summarize)
        .collect::<Result<Vec<_>, _>>()?;

    summaries.sort_by(|a, b| a.distance_au.total_cmp(&b.distance_au));
    Ok(summaries)
}

/// Reduce one feed object to its simulator scalars.
fn summarize(object: &NeoObject) -> Result<NeoSummary, NeoError> {
    let approach = object
        .close_approach_data
        .first()
        .ok_or_else(|| NeoError::MissingApproach(object.name.clone()))?;

    let range = &object.estimated_diameter.kilometers;
    let diameter_km = (range.estimated_diameter_min + range.estimated_diameter_max) / 2.0;

    Ok(NeoSummary {
        name: object.name.clone(),
        diameter_km,
        velocity_km_s: parse_number(
            "relative_velocity.kilometers_per_second",
            &approach.relative_velocity.kilometers_per_second,
        )?,
        distance_au: parse_number("miss_distance.astronomical", &approach.miss_distance.astronomical)?,
        distance_km: parse_number("miss_distance.kilometers", &approach.miss_distance.kilometers)?,
        hazardous: object.is_potentially_hazardous_asteroid,
    })
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, NeoError> {
    value.parse().map_err(|_| NeoError::BadNumber {
        field,
        value: value.to_string(),
    })
}

/// Today's date as `YYYY-MM-DD` (UTC), the format the feed keys on.
pub fn current_date_string() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let unix_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    let (year, month, day) = days_to_ymd(unix_secs / 86400);
    format!("{year:04}-{month:02}-{day:02}")
}

/// Convert days since the Unix epoch to a Gregorian year, month, day.
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    let remaining_days = days + 719468; // Days from year 0 to 1970

    let era = if remaining_days >= 0 {
        remaining_days / 146097
    } else {
        (remaining_days - 146096) / 146097
    };

    let day_of_era = (remaining_days - era * 146097) as u32;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let year = (year_of_era as i64 + era * 400) as i32;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"{
        "element_count": 2,
        "near_earth_objects": {
            "2026-08-24": [
                {
                    "name": "(2019 GT3)",
                    "is_potentially_hazardous_asteroid": true,
                    "estimated_diameter": {
                        "kilometers": {
                            "estimated_diameter_min": 0.3,
                            "estimated_diameter_max": 0.7
                        }
                    },
                    "close_approach_data": [
                        {
                            "relative_velocity": {
                                "kilometers_per_second": "17.4"
                            },
                            "miss_distance": {
                                "astronomical": "0.21",
                                "kilometers": "31415926.5"
                            }
                        }
                    ]
                },
                {
                    "name": "(2021 XY)",
                    "is_potentially_hazardous_asteroid": false,
                    "estimated_diameter": {
                        "kilometers": {
                            "estimated_diameter_min": 0.01,
                            "estimated_diameter_max": 0.03
                        }
                    },
                    "close_approach_data": [
                        {
                            "relative_velocity": {
                                "kilometers_per_second": "8.25"
                            },
                            "miss_distance": {
                                "astronomical": "0.05",
                                "kilometers": "7479893.5"
                            }
                        }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_feed_extracts_scalars() {
        let summaries = parse_feed(SAMPLE_FEED, "2026-08-24").expect("sample feed parses");
        assert_eq!(summaries.len(), 2);

        // Sorted by miss distance, closest first
        assert_eq!(summaries[0].name, "(2021 XY)");
        assert!((summaries[0].diameter_km - 0.02).abs() < 1e-12);
        assert!((summaries[0].velocity_km_s - 8.25).abs() < 1e-12);
        assert!(!summaries[0].hazardous);

        assert_eq!(summaries[1].name, "(2019 GT3)");
        assert!(
            (summaries[1].diameter_km - 0.5).abs() < 1e-12,
            "Diameter must be the min/max mean, got {}",
            summaries[1].diameter_km
        );
        assert!((summaries[1].distance_au - 0.21).abs() < 1e-12);
        assert!(summaries[1].hazardous);
    }

    #[test]
    fn test_parse_feed_wrong_date_is_empty() {
        let err = parse_feed(SAMPLE_FEED, "1999-01-01").unwrap_err();
        assert!(matches!(err, NeoError::EmptyFeed(_)), "got {err:?}");
    }

    #[test]
    fn test_parse_feed_missing_approach() {
        let json = r#"{
            "near_earth_objects": {
                "2026-08-24": [
                    {
                        "name": "(lonely rock)",
                        "estimated_diameter": {
                            "kilometers": {
                                "estimated_diameter_min": 0.1,
                                "estimated_diameter_max": 0.2
                            }
                        },
                        "close_approach_data": []
                    }
                ]
            }
        }"#;
        let err = parse_feed(json, "2026-08-24").unwrap_err();
        assert!(matches!(err, NeoError::MissingApproach(_)), "got {err:?}");
    }

    #[test]
    fn test_parse_feed_bad_number() {
        let json = SAMPLE_FEED.replace("\"17.4\"", "\"not a number\"");
        let err = parse_feed(&json, "2026-08-24").unwrap_err();
        assert!(matches!(err, NeoError::BadNumber { .. }), "got {err:?}");
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_feed("{", "2026-08-24").unwrap_err();
        assert!(matches!(err, NeoError::Json(_)), "got {err:?}");
    }

    #[test]
    fn test_days_to_ymd_known_dates() {
        // Unix epoch
        assert_eq!(days_to_ymd(0), (1970, 1, 1));
        // 2000-03-01 is day 11017 (leap-year boundary)
        assert_eq!(days_to_ymd(11017), (2000, 3, 1));
        // 2026-08-24 is day 20689
        assert_eq!(days_to_ymd(20689), (2026, 8, 24));
    }

    #[test]
    fn test_current_date_string_shape() {
        let date = current_date_string();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }
}
