use serde::{Deserialize, Serialize};
use validator::Validate;

use super::identifiable::Identifiable;
use super::validation::not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: i64,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Path of the certificate scan, either an image or a PDF
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Certification {
    pub fn is_pdf(&self) -> bool {
        self.image
            .as_deref()
            .is_some_and(|image| image.ends_with(".pdf"))
    }

    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|image| !image.is_empty())
    }
}

impl Identifiable for Certification {
    fn get_id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_kind() {
        let mut cert = Certification {
            id: 1,
            name: "Rust Fundamentals".to_string(),
            issuer: None,
            image: Some("/certs/rust.pdf".to_string()),
        };
        assert!(cert.is_pdf());
        assert!(cert.has_image());

        cert.image = Some("/certs/rust.png".to_string());
        assert!(!cert.is_pdf());

        cert.image = None;
        assert!(!cert.is_pdf());
        assert!(!cert.has_image());
    }

    #[test]
    fn test_blank_name() {
        let cert = Certification {
            id: 1,
            name: String::new(),
            issuer: Some("Nobody".to_string()),
            image: None,
        };
        assert!(cert.validate().is_err());
    }
}
