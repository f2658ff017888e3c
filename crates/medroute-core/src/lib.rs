pub mod app_config;
pub mod config;
pub mod geo;
pub mod hospital;
pub mod location;

pub use app_config::{AppConfig, Environment, LimitPolicy};
pub use config::{
    load_app_config, load_app_config_from_env, DEFAULT_OVERPASS_URL, DEFAULT_RESULT_LIMIT,
    DEFAULT_SEARCH_RADIUS_M, DEFAULT_USER_AGENT,
};
pub use geo::{distance_km, haversine_km, Coordinate, CoordinateError, EARTH_RADIUS_KM};
pub use hospital::{
    format_distance_km, ranked_fallback, sort_by_distance, FallbackHospital, HospitalRecord,
    FALLBACK_HOSPITALS, UNNAMED_HOSPITAL,
};
pub use location::{
    resolve_location, LocationError, LocationProvider, ManualLocation, DEFAULT_LOCATION,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
