//! # Page windows
//!
//! A page window is derived, never stored: `(items, page, page_size)` picks a
//! contiguous slice. The page index itself lives in the URL (`?page=N`).
//!
//! Two offsets exist:
//!
//! - [`compute_window`] is the plain slice `[page*size, page*size+size)`,
//!   clamped to the collection. A page past the end is empty. Deletion uses it
//!   to decide whether the current page just emptied.
//! - [`wrapped_offset`] is what list views render from:
//!   `(page * size) mod max(len, 1)`. A page past the end wraps around into
//!   the collection instead of rendering nothing. This keeps old shared links
//!   showing something, at the cost of occasionally showing a partial page
//!   that does not line up with page boundaries.

/// Items shown for `page` without wrap-around. Never panics.
pub fn compute_window<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn wrapped_offset(len: usize, page: usize, page_size: usize) -> usize {
    page.saturating_mul(page_size) % len.max(1)
}

pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Page to show after an item was removed from `items` (already without the
/// removed item). Steps back one page when the current one became empty.
pub fn page_after_delete<T>(items: &[T], page: usize, page_size: usize) -> usize {
    if page > 0 && compute_window(items, page, page_size).is_empty() {
        page - 1
    } else {
        page
    }
}

/// The visible part of one list, as rendered by a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub len: usize,
}

impl PageWindow {
    pub fn new(len: usize, page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            len,
        }
    }

    pub fn offset(&self) -> usize {
        wrapped_offset(self.len, self.page, self.page_size)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn page_count(&self) -> usize {
        page_count(self.len, self.page_size)
    }

    /// The page control is only rendered when there is more than one page.
    pub fn needs_paginator(&self) -> bool {
        self.len > self.page_size
    }
}

/// One entry of the page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// Page buttons to render: the first and last page, up to `range` pages
/// around `current`, and a gap wherever pages are skipped.
pub fn page_items(current: usize, page_count: usize, range: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut last_shown: Option<usize> = None;
    let half = range / 2;
    for page in 0..page_count {
        let near = page + half >= current && page <= current + half;
        if page == 0 || page + 1 == page_count || near {
            if let Some(prev) = last_shown {
                if page > prev + 1 {
                    items.push(PageItem::Gap);
                }
            }
            items.push(PageItem::Page(page));
            last_shown = Some(page);
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_last_partial_page() {
        let posts = numbers(21);
        let window = PageWindow::new(posts.len(), 2, 9);
        assert_eq!(window.slice(&posts), &posts[18..21]);
        assert_eq!(compute_window(&posts, 2, 9), &posts[18..21]);
    }

    #[test]
    fn test_page_past_end_wraps_around() {
        let posts = numbers(21);
        let window = PageWindow::new(posts.len(), 3, 9);
        assert_eq!(window.offset(), 6);
        assert_eq!(window.slice(&posts), &posts[6..15]);
    }

    #[test]
    fn test_compute_window_past_end_is_empty() {
        let posts = numbers(21);
        assert!(compute_window(&posts, 3, 9).is_empty());
        assert!(compute_window(&posts, usize::MAX, 9).is_empty());
        assert!(compute_window::<usize>(&[], 0, 9).is_empty());
    }

    #[test]
    fn test_window_never_exceeds_page_size() {
        for len in [0, 1, 9, 10, 21, 37] {
            let items = numbers(len);
            for page in [0, 1, 2, 5, 100, usize::MAX] {
                for size in [1, 9, 10] {
                    assert!(compute_window(&items, page, size).len() <= size);
                    assert!(PageWindow::new(len, page, size).slice(&items).len() <= size);
                }
            }
        }
    }

    #[test]
    fn test_empty_collection_has_offset_zero() {
        assert_eq!(wrapped_offset(0, 4, 10), 0);
        let window = PageWindow::new(0, 4, 10);
        assert!(window.slice::<u8>(&[]).is_empty());
        assert_eq!(window.page_count(), 0);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(21, 9), 3);
        assert_eq!(page_count(18, 9), 2);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_paginator_only_with_more_than_one_page() {
        assert!(!PageWindow::new(10, 0, 10).needs_paginator());
        assert!(PageWindow::new(11, 0, 10).needs_paginator());
    }

    #[test]
    fn test_deleting_sole_item_steps_back() {
        // page 2 held only the 19th item; 18 remain
        let remaining = numbers(18);
        assert_eq!(page_after_delete(&remaining, 2, 9), 1);
    }

    #[test]
    fn test_deleting_one_of_several_keeps_page() {
        let remaining = numbers(20);
        assert_eq!(page_after_delete(&remaining, 2, 9), 2);
    }

    #[test]
    fn test_first_page_never_steps_back() {
        assert_eq!(page_after_delete::<usize>(&[], 0, 9), 0);
    }

    #[test]
    fn test_page_items_with_gaps() {
        use PageItem::{Gap, Page};
        assert_eq!(page_items(0, 1, 3), [Page(0)]);
        assert_eq!(page_items(1, 3, 3), [Page(0), Page(1), Page(2)]);
        assert_eq!(
            page_items(5, 10, 3),
            [Page(0), Gap, Page(4), Page(5), Page(6), Gap, Page(9)]
        );
        assert_eq!(page_items(0, 6, 3), [Page(0), Page(1), Gap, Page(5)]);
        assert!(page_items(0, 0, 3).is_empty());
    }
}
