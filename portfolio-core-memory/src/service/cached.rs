use async_trait::async_trait;
use moka::future::Cache;
use portfolio_core_api::{
    Certification, Education, Experience, Language, PersonalInfo, PortfolioDto, PortfolioError,
    PortfolioResult, PortfolioService, Project, Reference, Skill,
};
use portfolio_core_db::utils::{content_revision, Revision};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const SNAPSHOT_KEY: &str = "portfolio";

/// Portfolio content captured at one point in time
#[derive(Debug, Clone)]
pub struct PortfolioSnapshot {
    pub content: PortfolioDto,
    pub revision: Revision,
}

/// Serves every read from one cached snapshot of the wrapped service
///
/// The snapshot is refreshed from the inner service once it is older than the
/// configured time-to-live. Concurrent misses share a single refresh.
pub struct CachedPortfolioService<S: ?Sized> {
    inner: Arc<S>,
    cache: Cache<&'static str, Arc<PortfolioSnapshot>>,
}

impl<S: PortfolioService + ?Sized + 'static> CachedPortfolioService<S> {
    pub fn new(inner: Arc<S>, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(ttl)
            .build();
        Self { inner, cache }
    }

    pub async fn snapshot(&self) -> PortfolioResult<Arc<PortfolioSnapshot>> {
        let inner = self.inner.clone();
        self.cache
            .try_get_with(SNAPSHOT_KEY, async move {
                debug!("Refreshing portfolio snapshot");
                let content = inner.portfolio().await?;
                let revision = content_revision(&content).map_err(|e| {
                    PortfolioError::repository("Failed to compute portfolio revision", e)
                })?;
                Ok::<_, PortfolioError>(Arc::new(PortfolioSnapshot { content, revision }))
            })
            .await
            .map_err(|e| (*e).clone())
    }

    /// Revision of the content currently served
    pub async fn revision(&self) -> PortfolioResult<Revision> {
        Ok(self.snapshot().await?.revision)
    }

    /// Drops the snapshot so the next read refetches
    pub async fn invalidate(&self) {
        self.cache.invalidate(SNAPSHOT_KEY).await;
    }
}

#[async_trait]
impl<S: PortfolioService + ?Sized + 'static> PortfolioService for CachedPortfolioService<S> {
    async fn personal_info(&self) -> PortfolioResult<PersonalInfo> {
        Ok(self.snapshot().await?.content.personal_info.clone())
    }

    async fn experiences(&self) -> PortfolioResult<Vec<Experience>> {
        Ok(self.snapshot().await?.content.experiences.clone())
    }

    async fn experience(&self, id: i64) -> PortfolioResult<Experience> {
        self.snapshot()
            .await?
            .content
            .experiences
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| PortfolioError::not_found("Experience", Some(id)))
    }

    async fn education(&self) -> PortfolioResult<Vec<Education>> {
        Ok(self.snapshot().await?.content.education.clone())
    }

    async fn certifications(&self) -> PortfolioResult<Vec<Certification>> {
        Ok(self.snapshot().await?.content.certifications.clone())
    }

    async fn references(&self) -> PortfolioResult<Vec<Reference>> {
        Ok(self.snapshot().await?.content.references.clone())
    }

    async fn skills(&self) -> PortfolioResult<Vec<Skill>> {
        Ok(self.snapshot().await?.content.skills.clone())
    }

    async fn soft_skills(&self) -> PortfolioResult<Vec<Skill>> {
        Ok(self.snapshot().await?.content.soft_skills.clone())
    }

    async fn languages(&self) -> PortfolioResult<Vec<Language>> {
        Ok(self.snapshot().await?.content.languages.clone())
    }

    async fn projects(&self) -> PortfolioResult<Vec<Project>> {
        Ok(self.snapshot().await?.content.projects.clone())
    }

    async fn featured_projects(&self) -> PortfolioResult<Vec<Project>> {
        Ok(self.snapshot().await?.content.featured_projects())
    }

    async fn project(&self, id: i64) -> PortfolioResult<Project> {
        self.snapshot()
            .await?
            .content
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| PortfolioError::not_found("Project", Some(id)))
    }

    async fn portfolio(&self) -> PortfolioResult<PortfolioDto> {
        Ok(self.snapshot().await?.content.clone())
    }
}
