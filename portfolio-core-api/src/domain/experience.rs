use serde::{Deserialize, Serialize};
use validator::Validate;

use super::identifiable::Identifiable;
use super::validation::not_blank;

/// # Documentation
/// - A position held, listed newest first on the experience page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i64,
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[validate(length(min = 1, message = "Experience must have at least one responsibility"))]
    pub responsibilities: Vec<String>,
}

impl Experience {
    pub fn duration(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }

    /// Whether the position is still held
    pub fn is_current(&self) -> bool {
        let end = self.end_date.trim();
        end.eq_ignore_ascii_case("present") || end.eq_ignore_ascii_case("actual")
    }
}

impl Identifiable for Experience {
    fn get_id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::test_utils::create_test_experience;
    use validator::Validate;

    #[test]
    fn test_duration_and_current() {
        let exp = create_test_experience(1, "Engineer", "Present");
        assert_eq!(exp.duration(), "2021-03 - Present");
        assert!(exp.is_current());

        let exp = create_test_experience(2, "Engineer", "ACTUAL");
        assert!(exp.is_current());

        let exp = create_test_experience(3, "Engineer", "2023-01");
        assert!(!exp.is_current());
    }

    #[test]
    fn test_requires_responsibilities() {
        let mut exp = create_test_experience(1, "Engineer", "Present");
        exp.responsibilities.clear();
        let errors = exp.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("responsibilities"));
    }

    #[test]
    fn test_requires_title_and_company() {
        let mut exp = create_test_experience(1, " ", "Present");
        exp.company = String::new();
        let errors = exp.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("company"));
    }
}
