use portfolio_core_api::{PortfolioResult, PortfolioService};
use std::sync::Arc;
use tracing::debug;

use crate::config::PortfolioConfig;
use crate::dataset::PortfolioDataset;
use crate::listing::ExperienceListing;
use crate::repository::InMemoryPortfolioRepository;
use crate::service::{CachedPortfolioService, PortfolioServiceImpl};

pub type DirectPortfolioService = PortfolioServiceImpl<InMemoryPortfolioRepository>;

/// Composition root for the portfolio services
///
/// Build one per application and pass the pieces it hands out to whoever needs them.
pub struct PortfolioFactory {
    config: PortfolioConfig,
    repository: Arc<InMemoryPortfolioRepository>,
    service: Arc<CachedPortfolioService<DirectPortfolioService>>,
}

impl PortfolioFactory {
    pub fn new(config: PortfolioConfig) -> PortfolioResult<Self> {
        config.validate()?;
        let dataset = match &config.dataset_path {
            Some(path) => {
                debug!(path = %path.display(), "Loading portfolio dataset from file");
                PortfolioDataset::from_path(path)?
            }
            None => PortfolioDataset::embedded()?,
        };
        let repository = Arc::new(InMemoryPortfolioRepository::new(dataset.validate()?));
        let direct = Arc::new(PortfolioServiceImpl::new(repository.clone()));
        let service = Arc::new(CachedPortfolioService::new(direct, config.cache_ttl));
        debug!("Portfolio services initialized");

        Ok(Self {
            config,
            repository,
            service,
        })
    }

    pub fn from_env() -> PortfolioResult<Self> {
        Self::new(PortfolioConfig::from_env()?)
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn repository(&self) -> Arc<InMemoryPortfolioRepository> {
        self.repository.clone()
    }

    /// The cached service, for callers that also need revisions or invalidation
    pub fn cached_service(&self) -> Arc<CachedPortfolioService<DirectPortfolioService>> {
        self.service.clone()
    }

    pub fn service(&self) -> Arc<dyn PortfolioService> {
        self.service.clone()
    }

    pub fn experience_listing(&self) -> PortfolioResult<ExperienceListing<dyn PortfolioService>> {
        Ok(ExperienceListing::from_config(self.service(), &self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core_api::PortfolioError;
    use std::path::PathBuf;
    use std::time::Duration;

    #[tokio::test]
    async fn test_builds_from_embedded_dataset() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let factory = PortfolioFactory::new(PortfolioConfig::default())?;
        let summary = factory.service().summary().await?;
        assert_eq!(summary.experience_count, 7);

        let page = factory.experience_listing()?.page(1).await?;
        assert_eq!(page.items.len(), factory.config().items_per_page);
        Ok(())
    }

    #[test]
    fn test_missing_dataset_file() {
        let config = PortfolioConfig {
            dataset_path: Some(PathBuf::from("/nonexistent/portfolio.json")),
            ..PortfolioConfig::default()
        };
        let err = PortfolioFactory::new(config).err().unwrap();
        assert!(matches!(err, PortfolioError::RepositoryError { .. }));
    }

    #[test]
    fn test_invalid_config() {
        let config = PortfolioConfig {
            items_per_page: 0,
            ..PortfolioConfig::default()
        };
        assert!(PortfolioFactory::new(config).is_err());
    }

    #[test]
    fn test_oversized_ttl_is_rejected_before_building_cache() {
        let config = PortfolioConfig {
            cache_ttl: Duration::from_secs(99_999_999_999),
            ..PortfolioConfig::default()
        };
        assert!(matches!(
            PortfolioFactory::new(config),
            Err(PortfolioError::ValidationError { .. })
        ));
    }
}
