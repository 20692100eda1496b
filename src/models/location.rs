use serde::{Deserialize, Serialize};

/// A US zip code with its place name, as returned by `POST /locations`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Location {
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    /// Two-letter state abbreviation
    pub state: String,
    pub county: String,
}

impl Location {
    /// "City, ST" label for compact display.
    pub fn short_label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Bounding box for location search. The service accepts either the four
/// edges, or two opposite corners.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct GeoBoundingBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_right: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left: Option<Coordinates>,
}

/// Body of `POST /locations/search`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationSearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_bounding_box: Option<GeoBoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<usize>,
}

/// Response of `POST /locations/search`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LocationSearchResponse {
    pub results: Vec<Location>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_short_label() {
        let location = Location {
            zip_code: "02139".to_string(),
            latitude: 42.36,
            longitude: -71.1,
            city: "Cambridge".to_string(),
            state: "MA".to_string(),
            county: "Middlesex".to_string(),
        };
        assert_eq!(location.short_label(), "Cambridge, MA");
    }

    #[test]
    fn test_location_search_query_skips_unset_fields() {
        let query = LocationSearchQuery {
            city: Some("Chicago".to_string()),
            states: Some(vec!["IL".to_string()]),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"city": "Chicago", "states": ["IL"]})
        );
    }

    #[test]
    fn test_geo_bounding_box_uses_snake_case_corners() {
        let query = LocationSearchQuery {
            geo_bounding_box: Some(GeoBoundingBox {
                bottom_left: Some(Coordinates { lat: 40.0, lon: -75.0 }),
                top_right: Some(Coordinates { lat: 41.0, lon: -73.0 }),
                ..Default::default()
            }),
            size: Some(10),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "geoBoundingBox": {
                    "bottom_left": {"lat": 40.0, "lon": -75.0},
                    "top_right": {"lat": 41.0, "lon": -73.0}
                },
                "size": 10
            })
        );
    }
}
