pub mod experience_listing;

pub use experience_listing::{ExperienceListing, ExperiencePage};
