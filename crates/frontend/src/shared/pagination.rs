//! Client-side pagination over an already fetched list.
//!
//! Pages are 1-based. `page_count` is `ceil(total / page_size)`, so an empty
//! list has zero pages while `page` stays at 1.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page * self.page_size < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Advance one page. Returns false (and changes nothing) on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page. Returns false (and changes nothing) on page 1.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Jump to a page; out-of-range requests are ignored
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.page_count().max(1) || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// New page size; always returns to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Fresh data set, start over on page 1
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.page = 1;
    }

    /// Replace the total and keep the current page if it still exists,
    /// otherwise land on the last page
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.min(self.page_count()).max(1);
    }

    /// Items of the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// "Page 2 of 3"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.page_count())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_total(total: usize, page_size: usize) -> Pagination {
        let mut p = Pagination::new(page_size);
        p.reset(total);
        p
    }

    #[test]
    fn twenty_five_items_make_three_pages() {
        let mut p = with_total(25, 10);
        assert_eq!(p.page_count(), 3);

        assert!(!p.previous_page());
        assert_eq!(p.page(), 1);

        assert!(p.next_page());
        assert!(p.next_page());
        assert_eq!(p.page(), 3);
        assert!(!p.next_page());
        assert_eq!(p.page(), 3);
    }

    #[test]
    fn slice_returns_current_page_items() {
        let items: Vec<usize> = (0..25).collect();
        let mut p = with_total(items.len(), 10);
        assert_eq!(p.slice(&items), &items[0..10]);
        p.next_page();
        p.next_page();
        assert_eq!(p.slice(&items), &items[20..25]);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let mut p = with_total(0, 10);
        assert_eq!(p.page_count(), 0);
        assert!(!p.next_page());
        assert!(!p.previous_page());
        assert!(p.slice::<u8>(&[]).is_empty());
        assert_eq!(p.label(), "Page 1 of 0");
    }

    #[test]
    fn shrinking_total_clamps_page() {
        let mut p = with_total(25, 10);
        p.next_page();
        p.next_page();
        p.set_total(12);
        assert_eq!(p.page(), 2);
        p.set_total(1);
        assert_eq!(p.page(), 1);
        p.set_total(0);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let mut p = with_total(25, 10);
        p.next_page();
        p.set_page_size(25);
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_count(), 1);
        assert!(!p.go_to(2));
    }
}
