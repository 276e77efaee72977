use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Language {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// Free-text proficiency, e.g. "Native" or "B2"
    #[validate(custom(function = "not_blank"))]
    pub level: String,
}
