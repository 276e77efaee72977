use async_trait::async_trait;
use portfolio_core_api::{
    Certification, Education, Experience, Language, PersonalInfo, PortfolioDto, PortfolioError,
    PortfolioResult, PortfolioService, Project, Reference, Skill,
};
use portfolio_core_db::repository::{FindById, Load, LoadAll, PortfolioRepository};
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, error};

/// [`PortfolioService`] over any [`PortfolioRepository`]
pub struct PortfolioServiceImpl<R> {
    repository: Arc<R>,
}

impl<R: PortfolioRepository> PortfolioServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

/// Logs a repository failure and wraps it with the operation that failed
fn wrap(message: &'static str) -> impl FnOnce(Box<dyn Error + Send + Sync>) -> PortfolioError {
    move |cause| {
        error!(error = %cause, "{message}");
        PortfolioError::repository(message, cause)
    }
}

impl<R: PortfolioRepository> PortfolioServiceImpl<R> {
    async fn skills_where(
        &self,
        soft: bool,
        message: &'static str,
    ) -> PortfolioResult<Vec<Skill>> {
        let skills = LoadAll::<Skill>::load_all(self.repository.as_ref())
            .await
            .map_err(wrap(message))?;
        Ok(skills
            .into_iter()
            .filter(|s| s.category.is_soft() == soft)
            .collect())
    }
}

#[async_trait]
impl<R: PortfolioRepository + 'static> PortfolioService for PortfolioServiceImpl<R> {
    async fn personal_info(&self) -> PortfolioResult<PersonalInfo> {
        debug!("Fetching personal information");
        Load::<PersonalInfo>::load(self.repository.as_ref())
            .await
            .map_err(wrap("Failed to fetch personal information"))
    }

    async fn experiences(&self) -> PortfolioResult<Vec<Experience>> {
        LoadAll::<Experience>::load_all(self.repository.as_ref())
            .await
            .map_err(wrap("Failed to fetch experiences"))
    }

    async fn experience(&self, id: i64) -> PortfolioResult<Experience> {
        FindById::<Experience>::find_by_id(self.repository.as_ref(), id)
            .await
            .map_err(wrap("Failed to fetch experience"))?
            .ok_or_else(|| PortfolioError::not_found("Experience", Some(id)))
    }

    async fn education(&self) -> PortfolioResult<Vec<Education>> {
        LoadAll::<Education>::load_all(self.repository.as_ref())
            .await
            .map_err(wrap("Failed to fetch education"))
    }

    async fn certifications(&self) -> PortfolioResult<Vec<Certification>> {
        LoadAll::<Certification>::load_all(self.repository.as_ref())
            .await
            .map_err(wrap("Failed to fetch certifications"))
    }

    async fn references(&self) -> PortfolioResult<Vec<Reference>> {
        LoadAll::<Reference>::load_all(self.repository.as_ref())
            .await
            .map_err(wrap("Failed to fetch references"))
    }

    async fn skills(&self) -> PortfolioResult<Vec<Skill>> {
        self.skills_where(false, "Failed to fetch skills").await
    }

    async fn soft_skills(&self) -> PortfolioResult<Vec<Skill>> {
        self.skills_where(true, "Failed to fetch soft skills").await
    }

    async fn languages(&self) -> PortfolioResult<Vec<Language>> {
        LoadAll::<Language>::load_all(self.repository.as_ref())
            .await
            .map_err(wrap("Failed to fetch languages"))
    }

    async fn projects(&self) -> PortfolioResult<Vec<Project>> {
        LoadAll::<Project>::load_all(self.repository.as_ref())
            .await
            .map_err(wrap("Failed to fetch projects"))
    }

    async fn featured_projects(&self) -> PortfolioResult<Vec<Project>> {
        let projects = LoadAll::<Project>::load_all(self.repository.as_ref())
            .await
            .map_err(wrap("Failed to fetch featured projects"))?;
        Ok(projects.into_iter().filter(|p| p.featured).collect())
    }

    async fn project(&self, id: i64) -> PortfolioResult<Project> {
        FindById::<Project>::find_by_id(self.repository.as_ref(), id)
            .await
            .map_err(wrap("Failed to fetch project"))?
            .ok_or_else(|| PortfolioError::not_found("Project", Some(id)))
    }

    async fn portfolio(&self) -> PortfolioResult<PortfolioDto> {
        debug!("Fetching complete portfolio");
        Ok(PortfolioDto {
            personal_info: self.personal_info().await?,
            experiences: self.experiences().await?,
            education: self.education().await?,
            certifications: self.certifications().await?,
            references: self.references().await?,
            skills: self.skills().await?,
            soft_skills: self.soft_skills().await?,
            languages: self.languages().await?,
            projects: self.projects().await?,
        })
    }
}
