//! Page arithmetic.

use crate::assets::Asset;
use crate::pipeline::filter::filter_assets;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// `ceil(count / page_size)`; zero rows means zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamps a 1-based page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Rows of the 1-based `page`. Out-of-range pages yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page count of the current filter, handed to the view reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageBounds {
    pub total_pages: usize,
}

impl PageBounds {
    pub fn new(total_pages: usize) -> Self {
        Self { total_pages }
    }

    pub fn for_assets(assets: &[Asset], search_term: &str, page_size: usize) -> Self {
        Self::new(total_pages(filter_assets(assets, search_term).len(), page_size))
    }
}
