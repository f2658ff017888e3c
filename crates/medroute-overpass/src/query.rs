//! Overpass QL query construction.

use medroute_core::Coordinate;

/// Server-side timeout requested in the query header, in seconds.
pub const QUERY_TIMEOUT_SECS: u32 = 25;

/// Builds a query for `amenity=hospital` nodes, ways and relations within
/// `radius_m` metres of `reference`.
///
/// `out center;` makes the server attach a centroid to area features.
#[must_use]
pub fn hospital_query(reference: Coordinate, radius_m: u32) -> String {
    let around = format!("(around:{radius_m},{},{})", reference.lat, reference.lon);
    format!(
        "[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n\
         (\n\
         \x20 node[\"amenity\"=\"hospital\"]{around};\n\
         \x20 way[\"amenity\"=\"hospital\"]{around};\n\
         \x20 relation[\"amenity\"=\"hospital\"]{around};\n\
         );\n\
         out center;\n"
    )
}
