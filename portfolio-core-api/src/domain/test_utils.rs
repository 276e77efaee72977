//! Record fixtures shared by the domain tests

use super::{Experience, PersonalInfo, Project};

pub fn create_test_personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Ada Lovelace".to_string(),
        title: "Software Engineer".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 0000 0000".to_string(),
        location: "London, UK".to_string(),
        summary: "Engineer with a taste for analytical engines.".to_string(),
    }
}

pub fn create_test_experience(id: i64, title: &str, end_date: &str) -> Experience {
    Experience {
        id,
        title: title.to_string(),
        company: "Analytical Engines Ltd".to_string(),
        location: "London".to_string(),
        start_date: "2021-03".to_string(),
        end_date: end_date.to_string(),
        responsibilities: vec!["Designed the difference engine".to_string()],
    }
}

pub fn create_test_project(id: i64, name: &str, featured: bool) -> Project {
    Project {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        technologies: vec!["Rust".to_string()],
        long_description: None,
        image: None,
        github_url: Some(format!("https://github.com/example/{id}")),
        live_url: None,
        featured,
        start_date: Some("2023-08".to_string()),
        end_date: Some("2024-02".to_string()),
    }
}
