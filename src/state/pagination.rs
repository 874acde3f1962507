/// Client-side paging over the default catalog. `page` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u32,
    count: u64,
}

impl Pagination {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            count: 0,
        }
    }

    /// A result set already in memory, shown whole on a single page.
    pub fn for_results(len: usize) -> Self {
        let limit = u32::try_from(len).unwrap_or(u32::MAX);
        Self::new(limit).with_count(len as u64)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn with_count(self, count: u64) -> Self {
        Self { count, ..self }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.limit) * (self.page - 1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page * u64::from(self.limit) < self.count
    }

    /// Next page. Callers only offer it when `has_next` holds, but paging
    /// is not clamped against `count` since the count may be stale.
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            page: (self.page - 1).max(1),
            ..self
        }
    }

    /// First and last 1-based positions on screen, `(0, 0)` when empty.
    pub fn visible_range(&self) -> (u64, u64) {
        if self.count == 0 {
            return (0, 0);
        }
        let offset = self.offset();
        let last = (offset + u64::from(self.limit)).min(self.count);
        (offset + 1, last)
    }

    /// "Showing 201-400 of 450"
    pub fn label(&self) -> String {
        let (first, last) = self.visible_range();
        format!("Showing {}-{} of {}", first, last, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_a_450_item_catalog() {
        let page1 = Pagination::new(200).with_count(450);
        assert_eq!(page1.offset(), 0);
        assert!(!page1.has_previous());
        assert!(page1.has_next());
        assert_eq!(page1.label(), "Showing 1-200 of 450");

        let page2 = page1.next();
        assert_eq!(page2.page(), 2);
        assert_eq!(page2.offset(), 200);
        assert!(page2.has_previous());
        assert!(page2.has_next());

        let page3 = page2.next();
        assert_eq!(page3.offset(), 400);
        assert!(!page3.has_next());
        assert_eq!(page3.label(), "Showing 401-450 of 450");

        assert_eq!(page3.previous().previous(), page1);
        assert_eq!(page1.previous(), page1);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let last = Pagination::new(200).with_count(400).next();
        assert!(!last.has_next());
    }

    #[test]
    fn empty_catalog() {
        let empty = Pagination::new(200);
        assert_eq!(empty.visible_range(), (0, 0));
        assert_eq!(empty.label(), "Showing 0-0 of 0");
        assert!(!empty.has_next());
    }

    #[test]
    fn zero_limit_is_clamped() {
        assert_eq!(Pagination::new(0).limit(), 1);
    }

    #[test]
    fn results_fit_on_one_page() {
        let two = Pagination::for_results(2);
        assert_eq!(two.count(), 2);
        assert_eq!(two.label(), "Showing 1-2 of 2");
        assert!(!two.has_next());
        assert!(!two.has_previous());

        let none = Pagination::for_results(0);
        assert_eq!(none.count(), 0);
        assert_eq!(none.label(), "Showing 0-0 of 0");
        assert!(!none.has_next());
    }
}
