//! Overpass API response types.
//!
//! Only the subset of the `[out:json]` format that `out center;` produces for
//! tagged features is modelled. Unknown top-level fields (`version`,
//! `generator`, `osm3s`) are ignored.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level Overpass JSON document.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<OverpassElement>,
}

/// OSM primitive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Node,
    Way,
    Relation,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementType::Node => write!(f, "node"),
            ElementType::Way => write!(f, "way"),
            ElementType::Relation => write!(f, "relation"),
        }
    }
}

/// A single feature from the `elements` array.
///
/// Nodes carry `lat`/`lon` directly; ways and relations carry a `center`
/// when the query asked for `out center`.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: ElementType,
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Centroid of an area feature.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

impl OverpassElement {
    /// `"node/123"` style reference, unique across element kinds.
    #[must_use]
    pub fn osm_ref(&self) -> String {
        format!("{}/{}", self.kind, self.id)
    }

    /// Returns the tag value, treating empty or whitespace-only values as absent.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_node_and_way() {
        let body = serde_json::json!({
            "version": 0.6,
            "generator": "Overpass API",
            "elements": [
                { "type": "node", "id": 1, "lat": 40.7, "lon": -74.0, "tags": { "name": "A" } },
                { "type": "way", "id": 2, "center": { "lat": 40.8, "lon": -73.9 } }
            ]
        });
        let parsed: OverpassResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.elements.len(), 2);
        assert_eq!(parsed.elements[0].kind, ElementType::Node);
        assert_eq!(parsed.elements[0].tag("name"), Some("A"));
        assert_eq!(parsed.elements[1].kind, ElementType::Way);
        assert!(parsed.elements[1].tags.is_empty());
        assert_eq!(parsed.elements[1].osm_ref(), "way/2");
    }

    #[test]
    fn rejects_unknown_element_type() {
        let body = serde_json::json!({
            "elements": [ { "type": "area", "id": 3 } ]
        });
        assert!(serde_json::from_value::<OverpassResponse>(body).is_err());
    }

    #[test]
    fn rejects_missing_elements_array() {
        let body = serde_json::json!({ "remark": "runtime error: timeout" });
        assert!(serde_json::from_value::<OverpassResponse>(body).is_err());
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let body = serde_json::json!({
            "elements": [ { "type": "node", "id": 1, "lat": "north", "lon": 0.0 } ]
        });
        assert!(serde_json::from_value::<OverpassResponse>(body).is_err());
    }

    #[test]
    fn blank_tags_read_as_absent() {
        let body = serde_json::json!({
            "type": "node", "id": 9, "lat": 0.0, "lon": 0.0,
            "tags": { "name": "  ", "phone": "+1 555 0100" }
        });
        let el: OverpassElement = serde_json::from_value(body).unwrap();
        assert_eq!(el.tag("name"), None);
        assert_eq!(el.tag("phone"), Some("+1 555 0100"));
        assert_eq!(el.tag("missing"), None);
    }
}
