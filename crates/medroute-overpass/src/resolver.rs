//! Nearest-hospital resolution with a built-in fallback.
//!
//! [`HospitalResolver::resolve`] is total: every failure of the live source
//! (transport, status, malformed payload, invalid element) is logged and
//! answered with the built-in hospital table ranked from the reference point.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use medroute_core::{
    ranked_fallback, sort_by_distance, Coordinate, HospitalRecord, LimitPolicy,
    DEFAULT_RESULT_LIMIT, DEFAULT_SEARCH_RADIUS_M,
};

use crate::client::OverpassClient;
use crate::error::OverpassError;

/// A live source of hospitals around a point.
pub trait HospitalSource {
    /// Returns hospitals within `radius_m` metres of `reference`, each with a
    /// distance measured from `reference`. Order is unspecified.
    fn nearby_hospitals(
        &self,
        reference: Coordinate,
        radius_m: u32,
    ) -> impl Future<Output = Result<Vec<HospitalRecord>, OverpassError>> + Send;
}

impl HospitalSource for OverpassClient {
    fn nearby_hospitals(
        &self,
        reference: Coordinate,
        radius_m: u32,
    ) -> impl Future<Output = Result<Vec<HospitalRecord>, OverpassError>> + Send {
        self.fetch_hospitals(reference, radius_m)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionRequest {
    pub reference: Coordinate,
    pub radius_m: u32,
    pub limit: usize,
}

impl ResolutionRequest {
    /// A request with the default 5 km radius and 5-result limit.
    #[must_use]
    pub fn new(reference: Coordinate) -> Self {
        Self {
            reference,
            radius_m: DEFAULT_SEARCH_RADIUS_M,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius_m: u32) -> Self {
        self.radius_m = radius_m;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Where a result set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ResolutionResult {
    /// Ascending by `distance_km`; every record has a distance.
    pub hospitals: Vec<HospitalRecord>,
    pub source: ResolutionSource,
    pub resolved_at: DateTime<Utc>,
}

/// Resolves the hospitals nearest to a point.
///
/// Holds no per-call state; concurrent and repeated calls are independent.
#[derive(Debug, Clone)]
pub struct HospitalResolver<S = OverpassClient> {
    source: S,
    limit_policy: LimitPolicy,
}

impl<S: HospitalSource> HospitalResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            limit_policy: LimitPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_limit_policy(mut self, limit_policy: LimitPolicy) -> Self {
        self.limit_policy = limit_policy;
        self
    }

    /// Issues one live query and ranks the result; never fails.
    ///
    /// On success the hospitals are sorted and truncated to `request.limit`.
    /// On any failure the built-in table is returned, ranked from
    /// `request.reference`, and truncated only under
    /// [`LimitPolicy::Uniform`].
    pub async fn resolve(&self, request: &ResolutionRequest) -> ResolutionResult {
        match self
            .source
            .nearby_hospitals(request.reference, request.radius_m)
            .await
        {
            Ok(mut hospitals) => {
                sort_by_distance(&mut hospitals);
                hospitals.truncate(request.limit);
                tracing::debug!(
                    reference = %request.reference,
                    count = hospitals.len(),
                    "resolved hospitals from live source"
                );
                ResolutionResult {
                    hospitals,
                    source: ResolutionSource::Live,
                    resolved_at: Utc::now(),
                }
            }
            Err(err) => {
                tracing::warn!(
                    reference = %request.reference,
                    error = %err,
                    "hospital lookup failed; using built-in list"
                );
                let mut hospitals = ranked_fallback(request.reference);
                if self.limit_policy == LimitPolicy::Uniform {
                    hospitals.truncate(request.limit);
                }
                ResolutionResult {
                    hospitals,
                    source: ResolutionSource::Fallback,
                    resolved_at: Utc::now(),
                }
            }
        }
    }
}

/// Convenience entry point: resolves with optional radius and limit and
/// returns only the ranked hospitals.
///
/// A panic inside the hospital source is caught and reported as an empty
/// list.
pub async fn find_nearest_hospitals<S: HospitalSource>(
    resolver: &HospitalResolver<S>,
    reference: Coordinate,
    radius_m: Option<u32>,
    limit: Option<usize>,
) -> Vec<HospitalRecord> {
    let mut request = ResolutionRequest::new(reference);
    if let Some(radius_m) = radius_m {
        request = request.with_radius(radius_m);
    }
    if let Some(limit) = limit {
        request = request.with_limit(limit);
    }

    match AssertUnwindSafe(resolver.resolve(&request))
        .catch_unwind()
        .await
    {
        Ok(result) => result.hospitals,
        Err(_) => {
            tracing::error!(%reference, "hospital resolver panicked; returning no hospitals");
            Vec::new()
        }
    }
}
