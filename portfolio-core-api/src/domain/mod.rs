pub mod certification;
pub mod dto;
pub mod education;
pub mod experience;
pub mod identifiable;
pub mod language;
pub mod personal_info;
pub mod project;
pub mod reference;
pub mod skill;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

// Re-exports
pub use certification::*;
pub use dto::*;
pub use education::*;
pub use experience::*;
pub use identifiable::*;
pub use language::*;
pub use personal_info::*;
pub use project::*;
pub use reference::*;
pub use skill::*;
