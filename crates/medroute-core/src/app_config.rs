use crate::geo::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which resolution paths honour the caller's result limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LimitPolicy {
    /// Only live results are truncated; the fallback list is returned whole.
    #[default]
    SuccessOnly,
    /// Both live and fallback results are truncated.
    Uniform,
}

impl std::fmt::Display for LimitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitPolicy::SuccessOnly => write!(f, "success-only"),
            LimitPolicy::Uniform => write!(f, "uniform"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub overpass_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub search_radius_m: u32,
    pub result_limit: usize,
    pub limit_policy: LimitPolicy,
    pub default_location: Coordinate,
}
