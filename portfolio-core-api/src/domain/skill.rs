use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use super::validation::not_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Mobile,
    Database,
    Tools,
    Methodologies,
    Soft,
}

impl SkillCategory {
    pub fn is_soft(&self) -> bool {
        matches!(self, SkillCategory::Soft)
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillCategory::Frontend => write!(f, "frontend"),
            SkillCategory::Backend => write!(f, "backend"),
            SkillCategory::Mobile => write!(f, "mobile"),
            SkillCategory::Database => write!(f, "database"),
            SkillCategory::Tools => write!(f, "tools"),
            SkillCategory::Methodologies => write!(f, "methodologies"),
            SkillCategory::Soft => write!(f, "soft"),
        }
    }
}

impl FromStr for SkillCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "mobile" => Ok(SkillCategory::Mobile),
            "database" => Ok(SkillCategory::Database),
            "tools" => Ok(SkillCategory::Tools),
            "methodologies" => Ok(SkillCategory::Methodologies),
            "soft" => Ok(SkillCategory::Soft),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Maps a 0-100 proficiency score onto a level
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => SkillLevel::Expert,
            70..=84 => SkillLevel::Advanced,
            50..=69 => SkillLevel::Intermediate,
            _ => SkillLevel::Beginner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Skill {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub category: SkillCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: SkillCategory, level: Option<SkillLevel>) -> Self {
        Self {
            name: name.into(),
            category,
            level,
        }
    }
}
