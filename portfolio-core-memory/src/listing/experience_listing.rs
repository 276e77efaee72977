use portfolio_core_api::{
    Experience, PaginationError, PaginationResult, PortfolioResult, PortfolioService,
};
use portfolio_core_db::repository::pagination::{
    advance, clamp_page, Page, PageReport, PageToken, PageWindow,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::config::PortfolioConfig;

/// One rendered page of the experience list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePage {
    pub items: Vec<Experience>,
    pub window: PageWindow,
    pub report: PageReport,
    pub tokens: Vec<PageToken>,
    /// A page control is only shown when there is more than one page
    pub show_pagination: bool,
}

impl ExperiencePage {
    /// Target of a click on a page token.
    ///
    /// `None` means no transition: the page does not exist or is already shown.
    pub fn go_to(&self, requested: usize) -> Option<usize> {
        let page = clamp_page(requested, self.window.total_pages).ok()?;
        (page != self.window.current_page).then_some(page)
    }

    pub fn next(&self) -> Option<usize> {
        advance(self.window.current_page, self.window.total_pages, 1).ok()
    }

    pub fn previous(&self) -> Option<usize> {
        advance(self.window.current_page, self.window.total_pages, -1).ok()
    }
}

/// Paged view over the portfolio's experiences
pub struct ExperienceListing<S: ?Sized> {
    service: Arc<S>,
    items_per_page: usize,
    max_visible: usize,
}

impl<S: PortfolioService + ?Sized> ExperienceListing<S> {
    /// Fails with `InvalidArgument` when `items_per_page` is zero.
    pub fn new(service: Arc<S>, items_per_page: usize, max_visible: usize) -> PaginationResult<Self> {
        if items_per_page == 0 {
            return Err(PaginationError::InvalidArgument { items_per_page });
        }
        Ok(Self {
            service,
            items_per_page,
            max_visible,
        })
    }

    pub fn from_config(service: Arc<S>, config: &PortfolioConfig) -> PaginationResult<Self> {
        Self::new(service, config.items_per_page, config.max_visible_pages)
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Loads `page` (1-based). Pages past the end are rejected, not clamped.
    pub async fn page(&self, page: usize) -> PortfolioResult<ExperiencePage> {
        let experiences = self.service.experiences().await?;
        let window = PageWindow::new(page, self.items_per_page, experiences.len())?;
        let items = Page::slice(&experiences, window.request()).items;
        let report = window.report();
        debug!(
            page = window.current_page,
            total_pages = window.total_pages,
            start_item = report.start_item,
            end_item = report.end_item,
            "Experience page computed"
        );
        Ok(ExperiencePage {
            items,
            report,
            tokens: window.tokens(self.max_visible),
            show_pagination: window.is_paginated(),
            window,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::setup_test_context;
    use portfolio_core_api::PortfolioError;
    use portfolio_core_db::repository::pagination::{PageToken::Ellipsis, PageToken::Page as P};

    #[tokio::test]
    async fn test_first_page() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let listing = ExperienceListing::new(ctx.service(), 3, 5)?;
        let all = &ctx.content().experiences;

        let page = listing.page(1).await?;
        assert_eq!(page.items, all[..3].to_vec());
        assert_eq!(page.report, PageReport { start_item: 1, end_item: 3, start_index: 0 });
        assert_eq!(page.tokens, vec![P(1), P(2), P(3)]);
        assert!(page.show_pagination);
        assert_eq!(page.next(), Some(2));
        assert_eq!(page.previous(), None);
        Ok(())
    }

    #[tokio::test]
    async fn test_last_partial_page() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let listing = ExperienceListing::new(ctx.service(), 3, 5)?;
        let all = &ctx.content().experiences;
        assert_eq!(all.len(), 7);

        let page = listing.page(3).await?;
        assert_eq!(page.items, vec![all[6].clone()]);
        assert_eq!(page.report, PageReport { start_item: 7, end_item: 7, start_index: 6 });
        assert_eq!(page.next(), None);
        assert_eq!(page.previous(), Some(2));
        Ok(())
    }

    #[tokio::test]
    async fn test_navigation_ignores_invalid_requests() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let listing = ExperienceListing::new(ctx.service(), 3, 5)?;

        let page = listing.page(2).await?;
        assert_eq!(page.go_to(2), None);
        assert_eq!(page.go_to(0), None);
        assert_eq!(page.go_to(4), None);
        assert_eq!(page.go_to(3), Some(3));
        Ok(())
    }

    #[tokio::test]
    async fn test_elided_tokens_with_one_item_per_page() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let listing = ExperienceListing::new(ctx.service(), 1, 5)?;

        let page = listing.page(4).await?;
        assert_eq!(page.window.total_pages, 7);
        assert_eq!(page.tokens, vec![P(1), Ellipsis, P(3), P(4), P(5), Ellipsis, P(7)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_rejected() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let listing = ExperienceListing::new(ctx.service(), 3, 5)?;

        assert!(matches!(listing.page(4).await, Err(PortfolioError::ValidationError { .. })));
        assert!(matches!(listing.page(0).await, Err(PortfolioError::ValidationError { .. })));
        Ok(())
    }

    #[test]
    fn test_zero_page_size_is_invalid() {
        let ctx = setup_test_context().unwrap();
        assert!(ExperienceListing::new(ctx.service(), 0, 5).is_err());

        let config = PortfolioConfig {
            items_per_page: 0,
            ..PortfolioConfig::default()
        };
        assert!(matches!(
            ExperienceListing::from_config(ctx.service(), &config),
            Err(PaginationError::InvalidArgument { items_per_page: 0 })
        ));
    }

    #[test]
    fn test_single_page_hides_control() {
        let ctx = setup_test_context().unwrap();
        let listing = ExperienceListing::new(ctx.service(), 10, 5).unwrap();
        let page = tokio_test::block_on(listing.page(1)).unwrap();
        assert!(!page.show_pagination);
        assert_eq!(page.items.len(), 7);
        assert_eq!(page.next(), None);
    }
}
