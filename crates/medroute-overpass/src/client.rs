//! HTTP client for the Overpass API.
//!
//! Wraps `reqwest` with Overpass-specific request shaping and typed response
//! deserialization. A query is POSTed as the raw request body; the response
//! is expected to be the `[out:json]` document.

use std::time::Duration;

use medroute_core::{
    AppConfig, Coordinate, HospitalRecord, DEFAULT_OVERPASS_URL, DEFAULT_USER_AGENT,
};
use reqwest::{Client, Url};

use crate::error::OverpassError;
use crate::normalize::normalize_elements;
use crate::query::hospital_query;
use crate::types::{OverpassElement, OverpassResponse};

/// Client for an Overpass API interpreter endpoint.
///
/// Use [`OverpassClient::new`] for the public endpoint or
/// [`OverpassClient::with_endpoint`] to point at a mirror or a mock server.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    endpoint: Url,
}

impl OverpassClient {
    /// Creates a client for the public `overpass-api.de` interpreter.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, OverpassError> {
        Self::with_endpoint(DEFAULT_OVERPASS_URL, timeout_secs, DEFAULT_USER_AGENT)
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// See [`OverpassClient::with_endpoint`].
    pub fn from_config(config: &AppConfig) -> Result<Self, OverpassError> {
        Self::with_endpoint(
            &config.overpass_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for an arbitrary interpreter URL.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`OverpassError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn with_endpoint(
        endpoint: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| OverpassError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, endpoint })
    }

    /// The interpreter URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Runs an Overpass QL query and returns the raw `elements` array.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::Http`] on network failure, timeout or non-2xx status.
    /// - [`OverpassError::Deserialize`] if the body is not the expected JSON.
    pub async fn run_query(&self, query: &str) -> Result<Vec<OverpassElement>, OverpassError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(query.to_owned())
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OverpassError::Deserialize {
                context: self.endpoint.to_string(),
                source: e,
            })?;

        Ok(parsed.elements)
    }

    /// Fetches hospitals within `radius_m` metres of `reference`, measured
    /// from `reference` and in response order.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::Http`] on network failure, timeout or non-2xx status.
    /// - [`OverpassError::Deserialize`] if the body is not the expected JSON.
    /// - [`OverpassError::InvalidElement`] if any element lacks a usable position.
    pub async fn fetch_hospitals(
        &self,
        reference: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<HospitalRecord>, OverpassError> {
        let query = hospital_query(reference, radius_m);
        tracing::debug!(%reference, radius_m, endpoint = %self.endpoint, "querying Overpass");

        let elements = self.run_query(&query).await?;
        tracing::debug!(count = elements.len(), "Overpass returned elements");

        normalize_elements(&elements, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_endpoint_rejects_invalid_url() {
        let err = OverpassClient::with_endpoint("not a url", 5, "test").unwrap_err();
        assert!(
            matches!(err, OverpassError::InvalidEndpoint { ref url, .. } if url == "not a url"),
            "got {err:?}"
        );
    }

    #[test]
    fn new_points_at_public_interpreter() {
        let client = OverpassClient::new(30).expect("client construction should not fail");
        assert_eq!(
            client.endpoint().as_str(),
            "https://overpass-api.de/api/interpreter"
        );
    }
}
