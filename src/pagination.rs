//! Pagination - bounded windows over a filtered, sorted result set.

use serde::Serialize;

/// Compute the `[from, to)` index window for a zero-based page over a
/// sequence of `total` items.
///
/// Both bounds clamp to `total`, so an out-of-range page yields an empty
/// window rather than an error; `from <= to` always holds.
pub fn page_bounds(page: usize, size: usize, total: usize) -> (usize, usize) {
    let from = page.saturating_mul(size).min(total);
    let to = from.saturating_add(size).min(total);
    (from, to)
}

/// One page of results plus the metadata needed to navigate the whole set.
///
/// `total_items` counts everything that matched the filter before
/// pagination, not the catalog size and not the page length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_items: usize,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, page: usize, size: usize, total_items: usize) -> Self {
        PageResult {
            items,
            page,
            size,
            total_items,
        }
    }

    /// Number of pages needed to cover `total_items`; 0 when size is 0.
    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            self.total_items.div_ceil(self.size)
        }
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page + 1 >= self.total_pages()
    }

    /// Convert the items while keeping the page metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
        }
    }
}
