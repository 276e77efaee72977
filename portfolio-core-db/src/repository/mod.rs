pub mod find_by_id;
pub mod load;
pub mod load_all;
pub mod pagination;
pub mod portfolio_repository;

// Re-exports
pub use find_by_id::*;
pub use load::*;
pub use load_all::*;
pub use pagination::*;
pub use portfolio_repository::*;
