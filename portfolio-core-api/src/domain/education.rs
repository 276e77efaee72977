use serde::{Deserialize, Serialize};
use validator::Validate;

use super::identifiable::Identifiable;
use super::validation::not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: i64,
    #[validate(custom(function = "not_blank"))]
    pub degree: String,
    #[validate(custom(function = "not_blank"))]
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Education {
    pub fn duration(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

impl Identifiable for Education {
    fn get_id(&self) -> i64 {
        self.id
    }
}
