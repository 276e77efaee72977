use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{initials, not_blank};

/// # Documentation
/// - Owner of the portfolio, shown in the hero and about sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub title: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub location: String,
    #[validate(custom(function = "not_blank"))]
    pub summary: String,
}

impl PersonalInfo {
    pub fn initials(&self) -> HeaplessString<8> {
        initials(&self.name)
    }
}
