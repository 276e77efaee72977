use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::identifiable::Identifiable;
use super::validation::{initials, not_blank};

/// # Documentation
/// - A professional reference with an optional testimonial quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: i64,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub position: String,
    pub company: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

impl Reference {
    pub fn initials(&self) -> HeaplessString<8> {
        initials(&self.name)
    }
}

impl Identifiable for Reference {
    fn get_id(&self) -> i64 {
        self.id
    }
}
