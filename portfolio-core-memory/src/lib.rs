pub mod config;
pub mod dataset;
pub mod factory;
pub mod listing;
pub mod repository;
pub mod service;

pub use config::PortfolioConfig;
pub use dataset::{DatasetError, PortfolioDataset};
pub use factory::PortfolioFactory;
pub use listing::{ExperienceListing, ExperiencePage};
pub use repository::InMemoryPortfolioRepository;
pub use service::{CachedPortfolioService, PortfolioServiceImpl};

#[cfg(test)]
pub mod test_helper;
