use portfolio_core_api::{
    Certification, Education, Experience, Language, PersonalInfo, PortfolioDto, PortfolioError,
    Project, Reference, Skill, SkillCategory, SkillLevel,
};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

const EMBEDDED_DATASET: &str = include_str!("../data/portfolio.json");

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {record}: {source}")]
    InvalidRecord {
        record: String,
        #[source]
        source: validator::ValidationErrors,
    },
}

impl From<DatasetError> for PortfolioError {
    fn from(error: DatasetError) -> Self {
        match error {
            DatasetError::InvalidRecord { ref source, .. } => {
                PortfolioError::invalid_fields(error.to_string(), source)
            }
            other => PortfolioError::repository("Failed to load portfolio dataset", other),
        }
    }
}

/// A skill entry is either a bare name or a name with a 0-100 score
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawSkill {
    Name(String),
    Scored { name: String, level: Option<u8> },
}

impl RawSkill {
    fn into_skill(self, category: SkillCategory) -> Skill {
        match self {
            RawSkill::Name(name) => Skill::new(name, category, None),
            RawSkill::Scored { name, level } => {
                Skill::new(name, category, level.map(SkillLevel::from_score))
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSkills {
    frontend: Vec<RawSkill>,
    backend: Vec<RawSkill>,
    mobile: Vec<RawSkill>,
    database: Vec<RawSkill>,
    tools: Vec<RawSkill>,
    methodologies: Vec<RawSkill>,
}

impl RawSkills {
    fn into_skills(self) -> Vec<Skill> {
        [
            (SkillCategory::Frontend, self.frontend),
            (SkillCategory::Backend, self.backend),
            (SkillCategory::Mobile, self.mobile),
            (SkillCategory::Database, self.database),
            (SkillCategory::Tools, self.tools),
            (SkillCategory::Methodologies, self.methodologies),
        ]
        .into_iter()
        .flat_map(|(category, raw)| raw.into_iter().map(move |s| s.into_skill(category)))
        .collect()
    }
}

/// The portfolio content as stored on disk, before validation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDataset {
    personal_info: PersonalInfo,
    #[serde(default)]
    experiences: Vec<Experience>,
    #[serde(default)]
    education: Vec<Education>,
    #[serde(default)]
    certifications: Vec<Certification>,
    #[serde(default)]
    references: Vec<Reference>,
    #[serde(default)]
    skills: RawSkills,
    #[serde(default)]
    soft_skills: Vec<String>,
    #[serde(default)]
    languages: Vec<Language>,
    #[serde(default)]
    projects: Vec<Project>,
}

impl PortfolioDataset {
    /// The dataset compiled into the crate
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validates every record and returns the content in display order.
    ///
    /// Fails on the first invalid record, naming it.
    pub fn validate(self) -> Result<PortfolioDto, DatasetError> {
        check("personal info", &self.personal_info)?;
        check_all("experience", &self.experiences, |e| e.id.to_string())?;
        check_all("education", &self.education, |e| e.id.to_string())?;
        check_all("certification", &self.certifications, |c| c.id.to_string())?;
        check_all("reference", &self.references, |r| r.id.to_string())?;

        let skills = self.skills.into_skills();
        check_all("skill", &skills, |s| s.name.clone())?;

        let soft_skills: Vec<Skill> = self
            .soft_skills
            .into_iter()
            .map(|name| Skill::new(name, SkillCategory::Soft, None))
            .collect();
        check_all("soft skill", &soft_skills, |s| s.name.clone())?;

        check_all("language", &self.languages, |l| l.name.clone())?;
        check_all("project", &self.projects, |p| p.id.to_string())?;

        Ok(PortfolioDto {
            personal_info: self.personal_info,
            experiences: self.experiences,
            education: self.education,
            certifications: self.certifications,
            references: self.references,
            skills,
            soft_skills,
            languages: self.languages,
            projects: self.projects,
        })
    }
}

fn check<T: Validate>(record: &str, item: &T) -> Result<(), DatasetError> {
    item.validate().map_err(|source| DatasetError::InvalidRecord {
        record: record.to_string(),
        source,
    })
}

fn check_all<T: Validate>(
    kind: &str,
    items: &[T],
    label: impl Fn(&T) -> String,
) -> Result<(), DatasetError> {
    for item in items {
        check(&format!("{kind} {}", label(item)), item)?;
    }
    Ok(())
}
