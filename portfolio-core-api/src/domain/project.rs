use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::identifiable::Identifiable;
use super::validation::not_blank;

/// # Documentation
/// - A showcased project; `featured` projects appear on the landing page
/// - Dates use the `YYYY-MM` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(length(min = 1, message = "Project must have at least one technology"))]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Project {
    pub fn is_live(&self) -> bool {
        self.live_url.is_some()
    }

    pub fn has_code(&self) -> bool {
        self.github_url.is_some()
    }

    /// Number of calendar months the project spanned, both ends inclusive.
    ///
    /// `None` when either date is missing, malformed, or the end precedes the start.
    pub fn period_months(&self) -> Option<u32> {
        let start = parse_year_month(self.start_date.as_deref()?)?;
        let end = parse_year_month(self.end_date.as_deref()?)?;
        let months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
        u32::try_from(months + 1).ok().filter(|m| *m > 0)
    }
}

fn parse_year_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").ok()
}

impl Identifiable for Project {
    fn get_id(&self) -> i64 {
        self.id
    }
}
