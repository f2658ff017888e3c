//! Hospital records and the built-in fallback table.

use serde::{Deserialize, Serialize};

use crate::geo::{distance_km, Coordinate};

/// Display name used when a data source has no `name` for a hospital.
pub const UNNAMED_HOSPITAL: &str = "Unnamed Hospital";

/// A hospital known to the resolver.
///
/// `distance_km` is optional so that static tables can omit it, but every
/// record handed out by a resolver carries a freshly computed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency: Option<bool>,
}

impl HospitalRecord {
    /// Returns a copy of this record with its distance measured from `reference`.
    #[must_use]
    pub fn measured_from(mut self, reference: Coordinate) -> Self {
        self.distance_km = Some(distance_km(reference, self.location));
        self
    }

    /// `true` only when the source explicitly flagged an emergency department.
    #[must_use]
    pub fn has_emergency(&self) -> bool {
        self.emergency == Some(true)
    }
}

/// A static fallback entry. Kept separate from [`HospitalRecord`] so the
/// table can live in a `const`.
#[derive(Debug, Clone, Copy)]
pub struct FallbackHospital {
    pub id: &'static str,
    pub name: &'static str,
    pub location: Coordinate,
}

impl FallbackHospital {
    fn to_record(self) -> HospitalRecord {
        HospitalRecord {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            location: self.location,
            distance_km: None,
            address: None,
            phone: None,
            emergency: None,
        }
    }
}

/// Built-in hospitals around lower Manhattan, used when the live query fails.
pub const FALLBACK_HOSPITALS: [FallbackHospital; 5] = [
    FallbackHospital {
        id: "1",
        name: "Central Hospital",
        location: Coordinate::from_degrees(40.712_8, -74.006_0),
    },
    FallbackHospital {
        id: "2",
        name: "Emergency Medical Center",
        location: Coordinate::from_degrees(40.720_0, -74.010_0),
    },
    FallbackHospital {
        id: "3",
        name: "North Community Hospital",
        location: Coordinate::from_degrees(40.730_0, -74.000_0),
    },
    FallbackHospital {
        id: "4",
        name: "South Medical Complex",
        location: Coordinate::from_degrees(40.700_0, -74.020_0),
    },
    FallbackHospital {
        id: "5",
        name: "West Emergency Care",
        location: Coordinate::from_degrees(40.715_0, -74.030_0),
    },
];

/// The fallback table ranked by distance from `reference`.
///
/// Distances are always recomputed; the table stores none.
#[must_use]
pub fn ranked_fallback(reference: Coordinate) -> Vec<HospitalRecord> {
    let mut records: Vec<HospitalRecord> = FALLBACK_HOSPITALS
        .iter()
        .map(|h| h.to_record().measured_from(reference))
        .collect();
    sort_by_distance(&mut records);
    records
}

/// Stable ascending sort on `distance_km`. Records without a distance sort last.
pub fn sort_by_distance(records: &mut [HospitalRecord]) {
    records.sort_by(|a, b| {
        let da = a.distance_km.unwrap_or(f64::INFINITY);
        let db = b.distance_km.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
}

/// Formats a distance the way hospital lists display it, e.g. `"2.3 km"`.
#[must_use]
pub fn format_distance_km(distance_km: f64) -> String {
    format!("{distance_km:.1} km")
}
