//! Client-side pagination over an in-memory row set.
//!
//! [`paginate`] is a pure function of `(rows, page_size, page_index)`: an
//! index past the last page yields an empty page instead of an error.
//! [`PaginationState`] is the cursor a table keeps between renders; it
//! re-clamps the index whenever the page size or the row count changes.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page size must be positive")]
    ZeroPageSize,
}

/// Positive number of rows per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Sizes offered by the page-size selector.
    pub const OPTIONS: [usize; 4] = [10, 25, 50, 100];

    pub fn new(size: usize) -> Result<Self, PaginationError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(PaginationError::ZeroPageSize)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// All selector options as page sizes.
    pub fn options() -> Vec<PageSize> {
        Self::OPTIONS
            .iter()
            .filter_map(|size| PageSize::new(*size).ok())
            .collect()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(9))
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PaginationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// One page of rows plus navigation flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub rows: &'a [T],
    pub page_index: usize,
    pub page_count: usize,
    pub can_go_next: bool,
    pub can_go_previous: bool,
    /// Index of the first row of the page in the full row set.
    pub start: usize,
    /// One past the last row of the page (clamped to `total`).
    pub end: usize,
    pub total: usize,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Navigation part of the page, detached from the borrowed rows.
    pub fn info(&self) -> PageInfo {
        PageInfo {
            page_index: self.page_index,
            page_count: self.page_count,
            can_go_next: self.can_go_next,
            can_go_previous: self.can_go_previous,
            total: self.total,
        }
    }
}

/// What a pager footer needs to render: position, count and button states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_count: usize,
    pub can_go_next: bool,
    pub can_go_previous: bool,
    pub total: usize,
}

impl PageInfo {
    /// Zero-based index of the last page.
    pub fn last_index(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    /// Footer label, e.g. `2 / 5 (47)`.
    pub fn label(&self) -> String {
        format!("{} / {} ({})", self.page_index + 1, self.page_count, self.total)
    }
}

/// `ceil(total / page_size)`, at least 1 so an empty table still shows "1 / 1".
pub fn page_count(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get()).max(1)
}

pub fn paginate<T>(rows: &[T], page_size: PageSize, page_index: usize) -> Page<'_, T> {
    let total = rows.len();
    let size = page_size.get();
    let start = size.saturating_mul(page_index);
    let end = start.saturating_add(size);

    let visible = if start < total {
        &rows[start..end.min(total)]
    } else {
        &rows[total..]
    };

    Page {
        rows: visible,
        page_index,
        page_count: page_count(total, page_size),
        can_go_next: end < total,
        can_go_previous: page_index > 0 && total > 0,
        start: start.min(total),
        end: end.min(total),
        total,
    }
}

/// Page cursor held by a table component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationState {
    pub page_size: PageSize,
    pub page_index: usize,
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            page_index: 0,
        }
    }

    pub fn page<'a, T>(&self, rows: &'a [T]) -> Page<'a, T> {
        paginate(rows, self.page_size, self.page_index)
    }

    pub fn next(&mut self, total: usize) {
        if self.page_size.get().saturating_mul(self.page_index + 1) < total {
            self.page_index += 1;
        }
    }

    pub fn previous(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Changes the page size and keeps the index on an existing page.
    pub fn set_page_size(&mut self, page_size: PageSize, total: usize) {
        self.page_size = page_size;
        self.clamp(total);
    }

    /// Pulls the index back onto the last page after the row set shrank.
    pub fn clamp(&mut self, total: usize) {
        let last = page_count(total, self.page_size) - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }

    pub fn reset(&mut self) {
        self.page_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert_eq!(PageSize::new(0), Err(PaginationError::ZeroPageSize));
        assert!(serde_json::from_str::<PageSize>("0").is_err());
        assert_eq!(serde_json::from_str::<PageSize>("25").unwrap(), size(25));
        assert_eq!(PageSize::default().get(), 10);
        assert_eq!(
            PageSize::options().iter().map(|s| s.get()).collect::<Vec<_>>(),
            vec![10, 25, 50, 100]
        );
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, size(10)), 1);
        assert_eq!(page_count(1, size(10)), 1);
        assert_eq!(page_count(10, size(10)), 1);
        assert_eq!(page_count(11, size(10)), 2);
        assert_eq!(page_count(100, size(25)), 4);
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<u32> = vec![];
        let page = paginate(&rows, size(10), 0);
        assert_eq!(page.page_count, 1);
        assert!(page.is_empty());
        assert!(!page.can_go_next);
        assert!(!page.can_go_previous);
    }

    #[test]
    fn test_last_partial_page() {
        let rows: Vec<u32> = (0..25).collect();
        let page = paginate(&rows, size(10), 2);
        assert_eq!(page.rows, &[20, 21, 22, 23, 24]);
        assert_eq!(page.page_count, 3);
        assert!(!page.can_go_next);
        assert!(page.can_go_previous);
        assert_eq!((page.start, page.end), (20, 25));
    }

    #[test]
    fn test_first_page() {
        let rows: Vec<u32> = (0..25).collect();
        let page = paginate(&rows, size(10), 0);
        assert_eq!(page.rows.len(), 10);
        assert!(page.can_go_next);
        assert!(!page.can_go_previous);
    }

    #[test]
    fn test_exact_multiple_has_no_next() {
        let rows: Vec<u32> = (0..20).collect();
        let page = paginate(&rows, size(10), 1);
        assert_eq!(page.rows.len(), 10);
        assert!(!page.can_go_next);
    }

    #[test]
    fn test_out_of_range_index_is_empty() {
        let rows: Vec<u32> = (0..25).collect();
        let page = paginate(&rows, size(10), 7);
        assert!(page.is_empty());
        assert!(!page.can_go_next);
        assert!(page.can_go_previous);
        assert_eq!(page.page_count, 3);
    }

    #[test]
    fn test_page_info_matches_page_flags() {
        let rows: Vec<u32> = (0..47).collect();
        let middle = paginate(&rows, size(10), 1).info();
        assert!(middle.can_go_next);
        assert!(middle.can_go_previous);
        assert_eq!(middle.last_index(), 4);
        assert_eq!(middle.label(), "2 / 5 (47)");

        let past_end = paginate(&rows, size(10), 7).info();
        assert!(!past_end.can_go_next);
        assert!(past_end.can_go_previous);

        let empty: Vec<u32> = vec![];
        let info = paginate(&empty, size(10), 0).info();
        assert!(!info.can_go_next && !info.can_go_previous);
        assert_eq!(info.label(), "1 / 1 (0)");
    }

    #[test]
    fn test_idempotent() {
        let rows: Vec<u32> = (0..57).collect();
        assert_eq!(paginate(&rows, size(25), 1), paginate(&rows, size(25), 1));
    }

    #[test]
    fn test_pages_cover_rows_exactly_once() {
        for total in [0usize, 1, 9, 10, 11, 99, 100, 101] {
            let rows: Vec<usize> = (0..total).collect();
            for page_size in PageSize::options() {
                let pages = page_count(total, page_size);
                let joined: Vec<usize> = (0..pages)
                    .flat_map(|index| paginate(&rows, page_size, index).rows.to_vec())
                    .collect();
                assert_eq!(joined, rows);
            }
        }
    }

    #[test]
    fn test_state_navigation() {
        let mut state = PaginationState::new(size(10));
        state.previous();
        assert_eq!(state.page_index, 0);

        state.next(25);
        state.next(25);
        assert_eq!(state.page_index, 2);
        state.next(25);
        assert_eq!(state.page_index, 2);
        let rows: Vec<u32> = (0..25).collect();
        assert_eq!(state.page(&rows).info().label(), "3 / 3 (25)");

        state.previous();
        assert_eq!(state.page_index, 1);
    }

    #[test]
    fn test_page_size_change_clamps_index() {
        let mut state = PaginationState::new(size(10));
        state.page_index = 9;
        state.set_page_size(size(50), 95);
        assert_eq!(state.page_index, 1);
        assert_eq!(state.page(&(0..95).collect::<Vec<_>>()).rows.len(), 45);

        state.set_page_size(size(100), 0);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_clamp_after_filter() {
        let mut state = PaginationState::new(size(25));
        state.page_index = 3;
        state.clamp(30);
        assert_eq!(state.page_index, 1);
        state.clamp(500);
        assert_eq!(state.page_index, 1);
        state.reset();
        assert_eq!(state.page_index, 0);
    }
}
