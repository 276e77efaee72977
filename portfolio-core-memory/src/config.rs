use portfolio_core_api::{PortfolioError, PortfolioResult};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const ENV_ITEMS_PER_PAGE: &str = "PORTFOLIO_ITEMS_PER_PAGE";
pub const ENV_MAX_VISIBLE_PAGES: &str = "PORTFOLIO_MAX_VISIBLE_PAGES";
pub const ENV_CACHE_TTL_SECS: &str = "PORTFOLIO_CACHE_TTL_SECS";
pub const ENV_DATASET_PATH: &str = "PORTFOLIO_DATASET_PATH";

/// Longest accepted snapshot lifetime
pub const MAX_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Runtime settings for the portfolio services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioConfig {
    /// Experiences shown per page
    pub items_per_page: usize,
    /// Page tokens shown before the control elides pages
    pub max_visible_pages: usize,
    /// How long a content snapshot is served before it is refetched
    pub cache_ttl: Duration,
    /// Dataset file to load instead of the embedded one
    pub dataset_path: Option<PathBuf>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            items_per_page: 3,
            max_visible_pages: 5,
            cache_ttl: Duration::from_secs(5 * 60),
            dataset_path: None,
        }
    }
}

impl PortfolioConfig {
    /// Reads `PORTFOLIO_*` environment variables, falling back to the defaults.
    pub fn from_env() -> PortfolioResult<Self> {
        let defaults = Self::default();
        let config = Self {
            items_per_page: env_or(ENV_ITEMS_PER_PAGE, defaults.items_per_page)?,
            max_visible_pages: env_or(ENV_MAX_VISIBLE_PAGES, defaults.max_visible_pages)?,
            cache_ttl: Duration::from_secs(env_or(ENV_CACHE_TTL_SECS, defaults.cache_ttl.as_secs())?),
            dataset_path: std::env::var_os(ENV_DATASET_PATH)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PortfolioResult<()> {
        if self.items_per_page == 0 {
            return Err(PortfolioError::validation(format!(
                "{ENV_ITEMS_PER_PAGE} must be at least 1"
            )));
        }
        if self.max_visible_pages == 0 {
            return Err(PortfolioError::validation(format!(
                "{ENV_MAX_VISIBLE_PAGES} must be at least 1"
            )));
        }
        if self.cache_ttl > MAX_CACHE_TTL {
            warn!(ttl_secs = self.cache_ttl.as_secs(), "Rejected cache time-to-live");
            return Err(PortfolioError::validation(format!(
                "{ENV_CACHE_TTL_SECS} must be at most {} seconds",
                MAX_CACHE_TTL.as_secs()
            )));
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> PortfolioResult<T> {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            warn!(key, value = %raw, "Rejected configuration value");
            PortfolioError::validation(format!("{key} has an invalid value: {raw}"))
        }),
        Err(_) => Ok(default),
    }
}
