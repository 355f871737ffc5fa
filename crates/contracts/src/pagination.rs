use serde::{Deserialize, Serialize};

/// Offset pagination window requested by a caller.
///
/// Page numbers are 1-based. Out-of-range input (0) is clamped rather than
/// rejected so that both API surfaces behave the same for sloppy clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    pub page_number: u64,
    pub page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 10,
        }
    }
}

impl PageRequest {
    pub fn new(page_number: u64, page_size: u64) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page_number(&self) -> u64 {
        self.page_number.max(1)
    }

    pub fn page_size(&self) -> u64 {
        self.page_size.max(1)
    }

    /// Rows to skip before the window: `(page_number - 1) * page_size`.
    pub fn skip(&self) -> u64 {
        (self.page_number() - 1) * self.page_size()
    }

    pub fn take(&self) -> u64 {
        self.page_size()
    }
}

/// One page of results plus the derived page metadata.
///
/// The derived fields are computed here, once, and both the REST envelope and
/// the GraphQL paginated object carry them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, page_number: u64, page_size: u64) -> Self {
        let page_number = page_number.max(1);
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size);
        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
            has_next_page: page_number < total_pages,
            has_previous_page: page_number > 1,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_next_page: self.has_next_page,
            has_previous_page: self.has_previous_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_and_take() {
        assert_eq!(PageRequest::new(1, 10).skip(), 0);
        assert_eq!(PageRequest::new(3, 25).skip(), 50);
        assert_eq!(PageRequest::new(3, 25).take(), 25);
        // zero values are clamped to 1
        assert_eq!(PageRequest::new(0, 0).skip(), 0);
        assert_eq!(PageRequest::new(0, 0).take(), 1);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let page: PaginatedResult<i32> = PaginatedResult::new(vec![], 0, 1, 10);
        assert_eq!(page.total_pages, 0);
        let page: PaginatedResult<i32> = PaginatedResult::new(vec![], 1, 1, 10);
        assert_eq!(page.total_pages, 1);
        let page: PaginatedResult<i32> = PaginatedResult::new(vec![], 10, 1, 10);
        assert_eq!(page.total_pages, 1);
        let page: PaginatedResult<i32> = PaginatedResult::new(vec![], 11, 1, 10);
        assert_eq!(page.total_pages, 2);
        let page: PaginatedResult<i32> = PaginatedResult::new(vec![], 101, 2, 25);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn test_page_flags() {
        let first: PaginatedResult<i32> = PaginatedResult::new(vec![], 30, 1, 10);
        assert!(first.has_next_page);
        assert!(!first.has_previous_page);

        let middle: PaginatedResult<i32> = PaginatedResult::new(vec![], 30, 2, 10);
        assert!(middle.has_next_page);
        assert!(middle.has_previous_page);

        let last: PaginatedResult<i32> = PaginatedResult::new(vec![], 30, 3, 10);
        assert!(!last.has_next_page);
        assert!(last.has_previous_page);

        // a page past the end has no next page
        let beyond: PaginatedResult<i32> = PaginatedResult::new(vec![], 30, 9, 10);
        assert!(!beyond.has_next_page);
        assert!(beyond.has_previous_page);
    }

    #[test]
    fn test_wire_field_names() {
        let page: PaginatedResult<i32> = PaginatedResult::new(vec![1, 2], 2, 1, 10);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalCount"], 2);
        assert_eq!(json["pageNumber"], 1);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["hasNextPage"], false);
        assert_eq!(json["hasPreviousPage"], false);
    }
}
