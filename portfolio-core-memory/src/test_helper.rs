//! Shared fixtures for unit tests
//!
//! Contexts are built from the embedded dataset, so every test sees the same
//! content without touching the filesystem.

use async_trait::async_trait;
use portfolio_core_api::{
    Certification, Education, Experience, Language, PersonalInfo, PortfolioDto, PortfolioResult,
    PortfolioService, Project, Reference, Skill,
};
use portfolio_core_db::repository::{Load, LoadAll};
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::dataset::PortfolioDataset;
use crate::repository::InMemoryPortfolioRepository;
use crate::service::PortfolioServiceImpl;

pub struct TestContext {
    content: PortfolioDto,
    repository: Arc<InMemoryPortfolioRepository>,
    service: Arc<PortfolioServiceImpl<InMemoryPortfolioRepository>>,
}

impl TestContext {
    /// The validated content the repository was built from
    pub fn content(&self) -> &PortfolioDto {
        &self.content
    }

    pub fn repository(&self) -> &InMemoryPortfolioRepository {
        &self.repository
    }

    pub fn repository_arc(&self) -> Arc<InMemoryPortfolioRepository> {
        self.repository.clone()
    }

    pub fn service(&self) -> Arc<PortfolioServiceImpl<InMemoryPortfolioRepository>> {
        self.service.clone()
    }
}

pub fn setup_test_context() -> Result<TestContext, Box<dyn Error + Send + Sync>> {
    let content = PortfolioDataset::embedded()?.validate()?;
    let repository = Arc::new(InMemoryPortfolioRepository::new(content.clone()));
    let service = Arc::new(PortfolioServiceImpl::new(repository.clone()));
    Ok(TestContext {
        content,
        repository,
        service,
    })
}

/// Repository whose every read fails
pub struct FailingRepository;

#[async_trait]
impl Load<PersonalInfo> for FailingRepository {
    async fn load(&self) -> Result<PersonalInfo, Box<dyn Error + Send + Sync>> {
        Err("storage offline".into())
    }
}

macro_rules! failing_load_all {
    ($($ty:ty),+) => {
        $(
            #[async_trait]
            impl LoadAll<$ty> for FailingRepository {
                async fn load_all(&self) -> Result<Vec<$ty>, Box<dyn Error + Send + Sync>> {
                    Err("storage offline".into())
                }
            }
        )+
    };
}

failing_load_all!(Experience, Education, Certification, Reference, Skill, Language, Project);

/// Delegating service that counts full-portfolio fetches
pub struct CountingService<S: ?Sized> {
    inner: Arc<S>,
    pub calls: AtomicUsize,
}

impl<S: ?Sized> CountingService<S> {
    pub fn new(inner: Arc<S>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl<S: PortfolioService + ?Sized + 'static> PortfolioService for CountingService<S> {
    async fn personal_info(&self) -> PortfolioResult<PersonalInfo> {
        self.inner.personal_info().await
    }

    async fn experiences(&self) -> PortfolioResult<Vec<Experience>> {
        self.inner.experiences().await
    }

    async fn experience(&self, id: i64) -> PortfolioResult<Experience> {
        self.inner.experience(id).await
    }

    async fn education(&self) -> PortfolioResult<Vec<Education>> {
        self.inner.education().await
    }

    async fn certifications(&self) -> PortfolioResult<Vec<Certification>> {
        self.inner.certifications().await
    }

    async fn references(&self) -> PortfolioResult<Vec<Reference>> {
        self.inner.references().await
    }

    async fn skills(&self) -> PortfolioResult<Vec<Skill>> {
        self.inner.skills().await
    }

    async fn soft_skills(&self) -> PortfolioResult<Vec<Skill>> {
        self.inner.soft_skills().await
    }

    async fn languages(&self) -> PortfolioResult<Vec<Language>> {
        self.inner.languages().await
    }

    async fn projects(&self) -> PortfolioResult<Vec<Project>> {
        self.inner.projects().await
    }

    async fn featured_projects(&self) -> PortfolioResult<Vec<Project>> {
        self.inner.featured_projects().await
    }

    async fn project(&self, id: i64) -> PortfolioResult<Project> {
        self.inner.project(id).await
    }

    async fn portfolio(&self) -> PortfolioResult<PortfolioDto> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.portfolio().await
    }
}
