use async_trait::async_trait;
use portfolio_core_api::{
    Certification, Education, Experience, Language, PersonalInfo, PortfolioDto, Project,
    Reference, Skill,
};
use portfolio_core_db::repository::{Load, LoadAll};
use std::error::Error;
use std::sync::Arc;
use tracing::debug;

/// Repository over validated content held in memory
///
/// Every read hands out a copy of the stored records; nothing is ever written.
#[derive(Debug, Clone)]
pub struct InMemoryPortfolioRepository {
    content: Arc<PortfolioDto>,
}

impl InMemoryPortfolioRepository {
    pub fn new(content: PortfolioDto) -> Self {
        Self {
            content: Arc::new(content),
        }
    }
}

#[async_trait]
impl Load<PersonalInfo> for InMemoryPortfolioRepository {
    async fn load(&self) -> Result<PersonalInfo, Box<dyn Error + Send + Sync>> {
        debug!("Fetching personal information");
        Ok(self.content.personal_info.clone())
    }
}

/// `LoadAll` for a collection field of the stored content
macro_rules! impl_load_all {
    ($ty:ty, $field:ident) => {
        #[async_trait]
        impl LoadAll<$ty> for InMemoryPortfolioRepository {
            async fn load_all(&self) -> Result<Vec<$ty>, Box<dyn Error + Send + Sync>> {
                debug!(collection = stringify!($field), count = self.content.$field.len(), "Fetching collection");
                Ok(self.content.$field.clone())
            }
        }
    };
}

impl_load_all!(Experience, experiences);
impl_load_all!(Education, education);
impl_load_all!(Certification, certifications);
impl_load_all!(Reference, references);
impl_load_all!(Language, languages);
impl_load_all!(Project, projects);

#[async_trait]
impl LoadAll<Skill> for InMemoryPortfolioRepository {
    async fn load_all(&self) -> Result<Vec<Skill>, Box<dyn Error + Send + Sync>> {
        debug!("Fetching skills");
        Ok(self
            .content
            .skills
            .iter()
            .chain(self.content.soft_skills.iter())
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::setup_test_context;
    use portfolio_core_db::repository::FindById;

    #[tokio::test]
    async fn test_load_personal_info() -> Result<(), Box<dyn Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let info = Load::<PersonalInfo>::load(ctx.repository()).await?;
        assert_eq!(info, ctx.content().personal_info);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_all_keeps_dataset_order() -> Result<(), Box<dyn Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let experiences = LoadAll::<Experience>::load_all(ctx.repository()).await?;
        let ids: Vec<i64> = experiences.iter().map(|e| e.id).collect();
        let expected: Vec<i64> = ctx.content().experiences.iter().map(|e| e.id).collect();
        assert_eq!(ids, expected);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_all_skills_includes_soft_skills() -> Result<(), Box<dyn Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let skills = LoadAll::<Skill>::load_all(ctx.repository()).await?;
        let content = ctx.content();
        assert_eq!(skills.len(), content.skills.len() + content.soft_skills.len());
        assert!(skills.iter().any(|s| s.category.is_soft()));
        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_id() -> Result<(), Box<dyn Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let project = FindById::<Project>::find_by_id(ctx.repository(), 2).await?;
        assert_eq!(project.map(|p| p.id), Some(2));

        let missing = FindById::<Experience>::find_by_id(ctx.repository(), 999).await?;
        assert!(missing.is_none());
        Ok(())
    }
}
