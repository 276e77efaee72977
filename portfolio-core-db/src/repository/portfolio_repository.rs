use portfolio_core_api::{
    Certification, Education, Experience, Language, PersonalInfo, Project, Reference, Skill,
};

use super::find_by_id::FindById;
use super::load::Load;
use super::load_all::LoadAll;

/// Every read the portfolio needs, bundled for a single data source
///
/// `LoadAll<Skill>` yields technical and soft skills alike; callers split them by category.
pub trait PortfolioRepository:
    Load<PersonalInfo>
    + LoadAll<Experience>
    + FindById<Experience>
    + LoadAll<Education>
    + LoadAll<Certification>
    + LoadAll<Reference>
    + LoadAll<Skill>
    + LoadAll<Language>
    + LoadAll<Project>
    + FindById<Project>
{
}

impl<R> PortfolioRepository for R where
    R: Load<PersonalInfo>
        + LoadAll<Experience>
        + FindById<Experience>
        + LoadAll<Education>
        + LoadAll<Certification>
        + LoadAll<Reference>
        + LoadAll<Skill>
        + LoadAll<Language>
        + LoadAll<Project>
        + FindById<Project>
{
}
