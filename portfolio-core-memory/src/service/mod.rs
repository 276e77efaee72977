pub mod cached;
pub mod portfolio_service_impl;

pub use cached::CachedPortfolioService;
pub use portfolio_service_impl::PortfolioServiceImpl;
