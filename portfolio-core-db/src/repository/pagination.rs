use portfolio_core_api::{PaginationError, PaginationResult};
use serde::{Serialize, Serializer};

/// Number of page tokens shown before the control switches to an elided layout
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Smallest page count the elided layouts are laid out for (4 numbers plus first/last)
const MIN_WINDOWED_PAGES: usize = 6;

/// Offset-based slice of a collection
///
/// # Example
/// ```
/// use portfolio_core_db::repository::pagination::PageRequest;
///
/// let page_1 = PageRequest::for_page(3, 1); // offset: 0
/// let page_3 = PageRequest::for_page(3, 3); // offset: 6
/// assert_eq!(page_3.offset, 6);
/// assert_eq!(page_3.page_number(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Create a page request for a 1-based page number; page 0 is treated as page 1
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1) * page_size,
        }
    }

    /// Get the page number (1-based) for this request
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }
}

/// Items of one page together with the totals they were cut from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T: Clone> Page<T> {
    /// Cut the requested page out of an in-memory collection
    pub fn slice(all: &[T], request: PageRequest) -> Self {
        let items = all
            .iter()
            .skip(request.offset)
            .take(request.limit)
            .cloned()
            .collect();
        Self {
            items,
            total: all.len(),
            limit: request.limit,
            offset: request.offset,
        }
    }
}

impl<T> Page<T> {
    /// Check if there are more pages after this one
    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }
}

/// Display range of the current page
///
/// `start_item` and `end_item` are 1-based and inclusive; `start_item` is 0 for an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub start_item: usize,
    pub end_item: usize,
    pub start_index: usize,
}

/// One entry of the page-number control, read left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }
}

impl std::fmt::Display for PageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => write!(f, "..."),
        }
    }
}

/// Pages serialize as numbers, the elision marker as the string `"..."`
impl Serialize for PageToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageToken::Page(n) => serializer.serialize_u64(*n as u64),
            PageToken::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// `ceil(total_items / items_per_page)`; zero items give zero pages.
pub fn total_pages(total_items: usize, items_per_page: usize) -> PaginationResult<usize> {
    if items_per_page == 0 {
        return Err(PaginationError::InvalidArgument { items_per_page });
    }
    Ok(total_items.div_ceil(items_per_page))
}

/// Item range shown on `current_page`. The page is taken as given, not clamped.
pub fn report(current_page: usize, items_per_page: usize, total_items: usize) -> PageReport {
    let start_index = current_page.saturating_sub(1).saturating_mul(items_per_page);
    let start_item = if total_items == 0 { 0 } else { start_index.saturating_add(1) };
    let end_item = current_page.saturating_mul(items_per_page).min(total_items);
    PageReport {
        start_item,
        end_item,
        start_index,
    }
}

/// Accepts `requested` only when it names an existing page.
pub fn clamp_page(requested: usize, total_pages: usize) -> PaginationResult<usize> {
    if (1..=total_pages).contains(&requested) {
        Ok(requested)
    } else {
        Err(PaginationError::OutOfRange {
            requested: i64::try_from(requested).unwrap_or(i64::MAX),
            total_pages,
        })
    }
}

/// Moves `delta` pages away from `current_page`, e.g. `+1` for "next".
pub fn advance(current_page: usize, total_pages: usize, delta: isize) -> PaginationResult<usize> {
    let target = i64::try_from(current_page)
        .ok()
        .and_then(|current| current.checked_add(delta as i64))
        .unwrap_or(i64::MAX);
    match usize::try_from(target) {
        Ok(page) if (1..=total_pages).contains(&page) => Ok(page),
        _ => Err(PaginationError::OutOfRange {
            requested: target,
            total_pages,
        }),
    }
}

/// Page numbers and elision markers to render, at most 7 tokens.
///
/// # Example
/// ```
/// use portfolio_core_db::repository::pagination::{page_tokens, PageToken::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_tokens(5, 10, 5),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// ```
pub fn page_tokens(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<PageToken> {
    // The elided layouts always place 4 numbers next to the first or last page.
    if total_pages <= max_visible || total_pages < MIN_WINDOWED_PAGES {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let mut tokens = Vec::with_capacity(7);
    if current_page <= 3 {
        tokens.extend((1..=4).map(PageToken::Page));
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
        tokens.extend((total_pages - 3..=total_pages).map(PageToken::Page));
    } else {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
        tokens.extend((current_page - 1..=current_page + 1).map(PageToken::Page));
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    }
    tokens
}

/// Validated pagination state of one list
///
/// Holds `current_page <= max(total_pages, 1)`; an empty list sits on page 1 of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl PageWindow {
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> PaginationResult<Self> {
        let total_pages = total_pages(total_items, items_per_page)?;
        let current_page = clamp_page(current_page, total_pages.max(1))?;
        Ok(Self {
            current_page,
            total_pages,
            items_per_page,
            total_items,
        })
    }

    pub fn report(&self) -> PageReport {
        report(self.current_page, self.items_per_page, self.total_items)
    }

    pub fn tokens(&self, max_visible: usize) -> Vec<PageToken> {
        page_tokens(self.current_page, self.total_pages, max_visible)
    }

    /// Offset request for the items of the current page
    pub fn request(&self) -> PageRequest {
        PageRequest::for_page(self.items_per_page, self.current_page)
    }

    /// Whether a page control is worth rendering at all
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    /// Same list, moved to another existing page
    pub fn go_to(&self, page: usize) -> PaginationResult<Self> {
        Ok(Self {
            current_page: clamp_page(page, self.total_pages)?,
            ..*self
        })
    }

    pub fn next(&self) -> PaginationResult<Self> {
        self.go_to(advance(self.current_page, self.total_pages, 1)?)
    }

    pub fn previous(&self) -> PaginationResult<Self> {
        self.go_to(advance(self.current_page, self.total_pages, -1)?)
    }
}
