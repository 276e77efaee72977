use serde::{Deserialize, Serialize};

use super::{
    Certification, Education, Experience, Language, PersonalInfo, Project, Reference, Skill,
};

/// Complete portfolio content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDto {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub references: Vec<Reference>,
    pub skills: Vec<Skill>,
    pub soft_skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
}

impl PortfolioDto {
    pub fn featured_projects(&self) -> Vec<Project> {
        self.projects.iter().filter(|p| p.featured).cloned().collect()
    }

    pub fn summary(&self) -> PortfolioSummaryDto {
        PortfolioSummaryDto {
            personal_info: self.personal_info.clone(),
            experience_count: self.experiences.len(),
            certification_count: self.certifications.len(),
            skill_count: self.skills.len(),
            featured_projects: self.featured_projects(),
        }
    }
}

/// Lightweight view for landing pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummaryDto {
    pub personal_info: PersonalInfo,
    pub experience_count: usize,
    pub certification_count: usize,
    pub skill_count: usize,
    pub featured_projects: Vec<Project>,
}
