use std::str::FromStr;

use crate::app_config::{AppConfig, Environment, LimitPolicy};
use crate::geo::Coordinate;
use crate::location::DEFAULT_LOCATION;
use crate::ConfigError;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_USER_AGENT: &str = "medroute/0.1 (hospital-lookup)";
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 5000;
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("MEDROUTE_ENV", "development"))?;
    let log_level = or_default("MEDROUTE_LOG_LEVEL", "info");
    let overpass_url = or_default("MEDROUTE_OVERPASS_URL", DEFAULT_OVERPASS_URL);
    let user_agent = or_default("MEDROUTE_USER_AGENT", DEFAULT_USER_AGENT);

    let request_timeout_secs: u64 = parse_var(
        "MEDROUTE_REQUEST_TIMEOUT_SECS",
        &or_default("MEDROUTE_REQUEST_TIMEOUT_SECS", "30"),
    )?;
    let search_radius_m: u32 = parse_var(
        "MEDROUTE_SEARCH_RADIUS_M",
        &or_default("MEDROUTE_SEARCH_RADIUS_M", &DEFAULT_SEARCH_RADIUS_M.to_string()),
    )?;
    let result_limit: usize = parse_var(
        "MEDROUTE_RESULT_LIMIT",
        &or_default("MEDROUTE_RESULT_LIMIT", &DEFAULT_RESULT_LIMIT.to_string()),
    )?;
    let limit_policy = parse_limit_policy(&or_default("MEDROUTE_LIMIT_POLICY", "success-only"))?;

    let default_lat: f64 = parse_var(
        "MEDROUTE_DEFAULT_LAT",
        &or_default("MEDROUTE_DEFAULT_LAT", &DEFAULT_LOCATION.lat.to_string()),
    )?;
    let default_lon: f64 = parse_var(
        "MEDROUTE_DEFAULT_LON",
        &or_default("MEDROUTE_DEFAULT_LON", &DEFAULT_LOCATION.lon.to_string()),
    )?;
    let default_location =
        Coordinate::new(default_lat, default_lon).map_err(|e| ConfigError::InvalidEnvVar {
            var: "MEDROUTE_DEFAULT_LAT/MEDROUTE_DEFAULT_LON".to_string(),
            reason: e.to_string(),
        })?;

    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MEDROUTE_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        overpass_url,
        request_timeout_secs,
        user_agent,
        search_radius_m,
        result_limit,
        limit_policy,
        default_location,
    })
}

fn parse_var<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MEDROUTE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_limit_policy(s: &str) -> Result<LimitPolicy, ConfigError> {
    match s {
        "success-only" => Ok(LimitPolicy::SuccessOnly),
        "uniform" => Ok(LimitPolicy::Uniform),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MEDROUTE_LIMIT_POLICY".to_string(),
            reason: format!("expected 'success-only' or 'uniform', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
