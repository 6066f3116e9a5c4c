//! Client-side pagination over the filtered users list.

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Numbered buttons shown in the page window.
const WINDOW: usize = 5;

/// One slot in the pagination footer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// 1-based page cursor with a fixed page size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, page_size: PAGE_SIZE }
    }
}

impl Pagination {
    /// `ceil(len / page_size)`; zero for an empty list.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Last page the cursor may point at. Page 1 stays valid for an empty list.
    pub fn last_page(&self, len: usize) -> usize {
        self.total_pages(len).max(1)
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize, len: usize) {
        self.page = page.clamp(1, self.last_page(len));
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.page + 1, len);
    }

    pub fn prev(&mut self, len: usize) {
        self.go_to(self.page.saturating_sub(1), len);
    }

    pub fn first(&mut self) {
        self.page = 1;
    }

    pub fn last(&mut self, len: usize) {
        self.page = self.last_page(len);
    }

    /// Keep the cursor in range after the list changed size.
    pub fn clamp(&mut self, len: usize) {
        self.go_to(self.page, len);
    }

    /// Index range of the current page within a list of `len` items.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = (self.page.saturating_sub(1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// `(first, last, total)` for the "Showing a to b of n results" line, 1-based.
    pub fn showing(&self, len: usize) -> (usize, usize, usize) {
        let r = self.range(len);
        (r.start + 1, r.end, len)
    }

    /// Numbered pages around the current one, plus first/last pages and gaps
    /// when the window does not reach them.
    pub fn window(&self, len: usize) -> Vec<PageItem> {
        let total = self.total_pages(len);
        if total == 0 {
            return Vec::new();
        }
        let current = self.page.min(total);
        let mut start = current.saturating_sub(WINDOW / 2).max(1);
        let end = (start + WINDOW - 1).min(total);
        if end + 1 - start < WINDOW {
            start = (end + 1).saturating_sub(WINDOW).max(1);
        }

        let mut items = Vec::with_capacity(WINDOW + 4);
        if start > 1 {
            items.push(PageItem::Page(1));
            if start > 2 {
                items.push(PageItem::Gap);
            }
        }
        items.extend((start..=end).map(PageItem::Page));
        if end < total {
            if end < total - 1 {
                items.push(PageItem::Gap);
            }
            items.push(PageItem::Page(total));
        }
        items
    }
}
