pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Status facet of a catalog search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// Wire value of the `status` query parameter; `All` stays off the wire.
    pub fn as_param(self) -> Option<u8> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(1),
            StatusFilter::Inactive => Some(0),
        }
    }

    /// Value attribute for a `<select>` binding.
    pub fn as_value(self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Active => "1",
            StatusFilter::Inactive => "0",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "1" => StatusFilter::Active,
            "0" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }
}

/// Client-held search state: keyword, status facet, 1-indexed page, page
/// size. Never persisted; a fresh default is created on navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub keyword: String,
    pub status: StatusFilter,
    pub page: usize,
    pub page_size: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            status: StatusFilter::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    /// Any filter change restarts paging from the first page.
    pub fn set_keyword(&mut self, keyword: String) {
        self.keyword = keyword;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    /// Navigate to `page`, clamped to `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// The backend pages from 0.
    pub fn wire_page(&self) -> usize {
        self.page.saturating_sub(1)
    }

    pub fn keyword_param(&self) -> Option<&str> {
        let keyword = self.keyword.trim();
        (!keyword.is_empty()).then_some(keyword)
    }

    /// How many facets are narrowing the result set (for the filter badge).
    pub fn active_filter_count(&self) -> usize {
        usize::from(self.keyword_param().is_some())
            + usize::from(self.status != StatusFilter::All)
    }
}

/// `max(1, ceil(total / size))`; an empty result set still has one page.
pub fn total_pages(total: usize, size: usize) -> usize {
    if total == 0 {
        1
    } else {
        (total + size - 1) / size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_clamped_to_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(100, 20), 5);
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut q = SearchQuery::default();
        q.page = 5;
        q.set_keyword("xe".to_string());
        assert_eq!(q.page, 1);

        q.page = 3;
        q.set_status(StatusFilter::Inactive);
        assert_eq!(q.page, 1);

        q.page = 3;
        q.set_page_size(50);
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 50);
    }

    #[test]
    fn page_navigation_clamps() {
        let mut q = SearchQuery::default();
        q.go_to_page(7, 4);
        assert_eq!(q.page, 4);
        q.go_to_page(0, 4);
        assert_eq!(q.page, 1);
        // zero total pages still leaves a valid page
        q.go_to_page(9, 0);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn wire_page_is_zero_indexed() {
        let q = SearchQuery::default();
        assert_eq!(q.wire_page(), 0);
        let mut q = q;
        q.go_to_page(3, 10);
        assert_eq!(q.wire_page(), 2);
    }

    #[test]
    fn keyword_param_trims_and_skips_empty() {
        let mut q = SearchQuery::default();
        assert_eq!(q.keyword_param(), None);
        q.keyword = "  ".to_string();
        assert_eq!(q.keyword_param(), None);
        q.keyword = " xe 7 ".to_string();
        assert_eq!(q.keyword_param(), Some("xe 7"));
    }

    #[test]
    fn counts_active_filters() {
        let mut q = SearchQuery::default();
        assert_eq!(q.active_filter_count(), 0);
        q.keyword = "suv".to_string();
        q.status = StatusFilter::Active;
        assert_eq!(q.active_filter_count(), 2);
    }
}
