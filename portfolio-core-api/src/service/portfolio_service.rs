use async_trait::async_trait;

use crate::domain::{
    Certification, Education, Experience, Language, PersonalInfo, PortfolioDto,
    PortfolioSummaryDto, Project, Reference, Skill,
};
use crate::error::PortfolioResult;

/// Read-side contract for portfolio content
///
/// Implementations wrap their storage failures into
/// [`PortfolioError::RepositoryError`](crate::PortfolioError::RepositoryError)
/// and report unknown ids as [`PortfolioError::NotFound`](crate::PortfolioError::NotFound).
///
/// # Example
/// ```ignore
/// let experiences = service.experiences().await?;
/// let featured = service.featured_projects().await?;
/// ```
#[async_trait]
pub trait PortfolioService: Send + Sync {
    async fn personal_info(&self) -> PortfolioResult<PersonalInfo>;

    async fn experiences(&self) -> PortfolioResult<Vec<Experience>>;

    /// Load a single experience, e.g. for a detail dialog
    async fn experience(&self, id: i64) -> PortfolioResult<Experience>;

    async fn education(&self) -> PortfolioResult<Vec<Education>>;

    async fn certifications(&self) -> PortfolioResult<Vec<Certification>>;

    async fn references(&self) -> PortfolioResult<Vec<Reference>>;

    /// Technical skills only; see [`PortfolioService::soft_skills`]
    async fn skills(&self) -> PortfolioResult<Vec<Skill>>;

    async fn soft_skills(&self) -> PortfolioResult<Vec<Skill>>;

    async fn languages(&self) -> PortfolioResult<Vec<Language>>;

    async fn projects(&self) -> PortfolioResult<Vec<Project>>;

    async fn featured_projects(&self) -> PortfolioResult<Vec<Project>>;

    async fn project(&self, id: i64) -> PortfolioResult<Project>;

    /// Everything at once
    async fn portfolio(&self) -> PortfolioResult<PortfolioDto>;

    async fn summary(&self) -> PortfolioResult<PortfolioSummaryDto> {
        Ok(self.portfolio().await?.summary())
    }
}
