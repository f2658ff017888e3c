//! Normalization of Overpass elements into [`HospitalRecord`]s.

use medroute_core::{Coordinate, HospitalRecord, UNNAMED_HOSPITAL};

use crate::error::OverpassError;
use crate::types::{ElementType, OverpassElement};

/// Picks the coordinate for an element: direct position for nodes, centroid
/// for ways and relations.
///
/// # Errors
///
/// Returns [`OverpassError::InvalidElement`] when the expected position is
/// missing or outside the valid latitude/longitude range.
pub fn element_coordinate(element: &OverpassElement) -> Result<Coordinate, OverpassError> {
    let (lat, lon) = match element.kind {
        ElementType::Node => match (element.lat, element.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(invalid(element, "node without lat/lon")),
        },
        ElementType::Way | ElementType::Relation => match element.center {
            Some(center) => (center.lat, center.lon),
            None => return Err(invalid(element, "area feature without center")),
        },
    };

    Coordinate::new(lat, lon).map_err(|e| invalid(element, &e.to_string()))
}

/// Builds a postal address from the `address` tag, or from `addr:*` parts
/// when only those are present.
#[must_use]
pub fn element_address(element: &OverpassElement) -> Option<String> {
    if let Some(address) = element.tag("address") {
        return Some(address.to_owned());
    }

    let street = match (element.tag("addr:housenumber"), element.tag("addr:street")) {
        (Some(number), Some(street)) => Some(format!("{number} {street}")),
        (None, Some(street)) => Some(street.to_owned()),
        _ => None,
    };
    let parts: Vec<String> = [
        street,
        element.tag("addr:city").map(str::to_owned),
        element.tag("addr:postcode").map(str::to_owned),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Converts an element into a hospital measured from `reference`.
///
/// # Errors
///
/// Returns [`OverpassError::InvalidElement`] if no usable coordinate exists.
pub fn normalize_element(
    element: &OverpassElement,
    reference: Coordinate,
) -> Result<HospitalRecord, OverpassError> {
    let location = element_coordinate(element)?;

    let record = HospitalRecord {
        id: element.osm_ref(),
        name: element
            .tag("name")
            .unwrap_or(UNNAMED_HOSPITAL)
            .to_owned(),
        location,
        distance_km: None,
        address: element_address(element),
        phone: element
            .tag("phone")
            .or_else(|| element.tag("contact:phone"))
            .map(str::to_owned),
        emergency: Some(element.tags.get("emergency").map(String::as_str) == Some("yes")),
    };

    Ok(record.measured_from(reference))
}

/// Normalizes every element, failing on the first invalid one.
///
/// # Errors
///
/// Returns the first [`OverpassError::InvalidElement`] encountered.
pub fn normalize_elements(
    elements: &[OverpassElement],
    reference: Coordinate,
) -> Result<Vec<HospitalRecord>, OverpassError> {
    elements
        .iter()
        .map(|el| normalize_element(el, reference))
        .collect()
}

fn invalid(element: &OverpassElement, reason: &str) -> OverpassError {
    OverpassError::InvalidElement {
        element: element.osm_ref(),
        reason: reason.to_owned(),
    }
}
