//! End-to-end resolver behaviour against a mocked Overpass endpoint.
//!
//! Every failure mode must degrade to the built-in hospital list; no test
//! here expects an error to surface.

use std::time::Duration;

use medroute_core::{Coordinate, LimitPolicy, FALLBACK_HOSPITALS};
use medroute_overpass::{
    find_nearest_hospitals, HospitalResolver, OverpassClient, ResolutionRequest, ResolutionSource,
};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const CENTRAL: Coordinate = Coordinate::from_degrees(40.7128, -74.0060);

fn resolver_for(endpoint: &str, timeout_secs: u64) -> HospitalResolver {
    let client = OverpassClient::with_endpoint(endpoint, timeout_secs, "medroute-test/0.1")
        .expect("client construction should not fail");
    HospitalResolver::new(client)
}

async fn mock_server(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn assert_ascending(distances: &[f64]) {
    assert!(
        distances.windows(2).all(|w| w[0] <= w[1]),
        "distances not ascending: {distances:?}"
    );
}

fn assert_is_full_fallback(result: &medroute_overpass::ResolutionResult) {
    assert_eq!(result.source, ResolutionSource::Fallback);
    assert_eq!(result.hospitals.len(), FALLBACK_HOSPITALS.len());
    let distances: Vec<f64> = result
        .hospitals
        .iter()
        .map(|h| h.distance_km.expect("fallback distance must be computed"))
        .collect();
    assert_ascending(&distances);
}

#[tokio::test]
async fn success_is_sorted_and_truncated_to_limit() {
    let server = mock_server(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "elements": [
            { "type": "node", "id": 1, "lat": 40.7600, "lon": -73.9800, "tags": { "name": "Far" } },
            { "type": "way", "id": 2, "center": { "lat": 40.7130, "lon": -74.0070 }, "tags": { "name": "Near" } },
            { "type": "relation", "id": 3, "center": { "lat": 40.7300, "lon": -74.0000 }, "tags": {} }
        ]
    })))
    .await;

    let resolver = resolver_for(&server.uri(), 5);
    let result = resolver
        .resolve(&ResolutionRequest::new(CENTRAL).with_limit(2))
        .await;

    assert_eq!(result.source, ResolutionSource::Live);
    assert_eq!(result.hospitals.len(), 2);
    assert_eq!(result.hospitals[0].name, "Near");
    assert_eq!(result.hospitals[1].name, "Unnamed Hospital");
    let distances: Vec<f64> = result
        .hospitals
        .iter()
        .map(|h| h.distance_km.expect("distance must be computed"))
        .collect();
    assert_ascending(&distances);
}

#[tokio::test]
async fn empty_success_is_returned_as_is() {
    let server = mock_server(
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "elements": [] })),
    )
    .await;

    let result = resolver_for(&server.uri(), 5)
        .resolve(&ResolutionRequest::new(CENTRAL))
        .await;

    assert_eq!(result.source, ResolutionSource::Live);
    assert!(result.hospitals.is_empty());
}

#[tokio::test]
async fn server_error_falls_back_without_limit() {
    let server = mock_server(ResponseTemplate::new(500)).await;

    let result = resolver_for(&server.uri(), 5)
        .resolve(&ResolutionRequest::new(CENTRAL).with_limit(2))
        .await;

    assert_is_full_fallback(&result);
    assert_eq!(result.hospitals[0].name, "Central Hospital");
    assert_eq!(result.hospitals[0].distance_km, Some(0.0));
}

#[tokio::test]
async fn malformed_payload_falls_back() {
    let server = mock_server(ResponseTemplate::new(200).set_body_string("{\"elements\": [")).await;

    let result = resolver_for(&server.uri(), 5)
        .resolve(&ResolutionRequest::new(CENTRAL))
        .await;

    assert_is_full_fallback(&result);
}

#[tokio::test]
async fn structurally_invalid_element_falls_back() {
    let server = mock_server(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "elements": [
            { "type": "node", "id": 1, "lat": 40.72, "lon": -74.01, "tags": { "name": "Fine" } },
            { "type": "way", "id": 2, "tags": { "name": "Missing center" } }
        ]
    })))
    .await;

    let result = resolver_for(&server.uri(), 5)
        .resolve(&ResolutionRequest::new(CENTRAL))
        .await;

    assert_is_full_fallback(&result);
}

#[tokio::test]
async fn transport_failure_falls_back_without_limit() {
    // Nothing listens on port 1.
    let resolver = resolver_for("http://127.0.0.1:1/api/interpreter", 2);
    let result = resolver
        .resolve(&ResolutionRequest::new(CENTRAL).with_limit(2))
        .await;

    assert_is_full_fallback(&result);
}

#[tokio::test]
async fn slow_server_times_out_into_fallback() {
    let server = mock_server(
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({ "elements": [] }))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let result = resolver_for(&server.uri(), 1)
        .resolve(&ResolutionRequest::new(CENTRAL))
        .await;

    assert_is_full_fallback(&result);
}

#[tokio::test]
async fn uniform_limit_policy_truncates_fallback() {
    let server = mock_server(ResponseTemplate::new(503)).await;

    let resolver = resolver_for(&server.uri(), 5).with_limit_policy(LimitPolicy::Uniform);
    let result = resolver
        .resolve(&ResolutionRequest::new(CENTRAL).with_limit(2))
        .await;

    assert_eq!(result.source, ResolutionSource::Fallback);
    assert_eq!(result.hospitals.len(), 2);
    assert_eq!(result.hospitals[0].name, "Central Hospital");
}

#[tokio::test]
async fn find_nearest_hospitals_never_errors() {
    let server = mock_server(ResponseTemplate::new(429)).await;

    let resolver = resolver_for(&server.uri(), 5);
    let hospitals = find_nearest_hospitals(&resolver, CENTRAL, Some(1000), Some(1)).await;

    assert_eq!(hospitals.len(), FALLBACK_HOSPITALS.len());
    assert_eq!(hospitals[0].name, "Central Hospital");
}
