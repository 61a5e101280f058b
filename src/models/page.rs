//! Pagination types shared by every collection / 分页类型
//!
//! `Pagination` is what a caller asks for (raw, possibly missing or out of
//! range). `PageLimits` turns it into a `PageRequest`, which is always valid
//! and is the only thing repositories ever see.

use serde::{Deserialize, Serialize};

/// Raw page/size parameters as received from a caller
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl Pagination {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }
}

/// Normalized page request: `page >= 0`, `size >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    pub fn first(size: i64) -> Self {
        Self { page: 0, size: size.max(1) }
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

/// Defaults and upper bounds applied to caller-supplied paging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: i64,
    pub max_size: i64,
    pub default_count: i64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 100,
            default_count: 10,
        }
    }
}

impl PageLimits {
    /// Negative pages become 0, size is clamped to `[1, max_size]`.
    pub fn request(&self, pagination: Pagination) -> PageRequest {
        let page = pagination.page.unwrap_or(0).max(0);
        let size = pagination
            .size
            .unwrap_or(self.default_size)
            .clamp(1, self.max_size.max(1));
        PageRequest { page, size }
    }

    /// Random sample size, clamped to `[0, max_size]`. Zero means an empty sample.
    pub fn count(&self, count: Option<i64>) -> i64 {
        count
            .unwrap_or(self.default_count)
            .clamp(0, self.max_size.max(0))
    }
}

/// Page envelope returned by every paginated endpoint / 分页响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number: i64,
    pub size: i64,
    pub number_of_elements: i64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: i64, request: PageRequest) -> Self {
        let size = request.size.max(1);
        let total_pages = (total_elements + size - 1) / size;
        Self {
            number_of_elements: content.len() as i64,
            empty: content.is_empty(),
            first: request.page == 0,
            last: request.page.saturating_add(1) >= total_pages,
            content,
            total_elements,
            total_pages,
            number: request.page,
            size,
        }
    }

    /// Convert the items while keeping the paging metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let limits = PageLimits::default();
        let request = limits.request(Pagination::default());
        assert_eq!(request, PageRequest { page: 0, size: 20 });
        assert_eq!(limits.count(None), 10);
    }

    #[test]
    fn test_request_clamping() {
        let limits = PageLimits::default();
        assert_eq!(limits.request(Pagination::new(-3, 5)), PageRequest { page: 0, size: 5 });
        assert_eq!(limits.request(Pagination::new(2, 0)), PageRequest { page: 2, size: 1 });
        assert_eq!(limits.request(Pagination::new(2, -7)), PageRequest { page: 2, size: 1 });
        assert_eq!(limits.request(Pagination::new(1, 5000)), PageRequest { page: 1, size: 100 });

        assert_eq!(limits.count(Some(0)), 0);
        assert_eq!(limits.count(Some(-4)), 0);
        assert_eq!(limits.count(Some(1000)), 100);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest { page: 3, size: 20 }.offset(), 60);
        assert_eq!(PageRequest::first(7).offset(), 0);
        assert_eq!(PageRequest { page: i64::MAX, size: 20 }.offset(), i64::MAX);
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![1, 2], 5, PageRequest { page: 2, size: 2 });
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number_of_elements, 2);
        assert!(!page.first);
        assert!(page.last);
        assert!(!page.empty);

        let beyond: Page<i32> = Page::new(vec![], 5, PageRequest { page: i64::MAX, size: 2 });
        assert_eq!(beyond.number, i64::MAX);
        assert!(beyond.last);
        assert!(beyond.empty);

        let empty: Page<i32> = Page::new(vec![], 0, PageRequest::first(20));
        assert_eq!(empty.total_pages, 0);
        assert!(empty.first);
        assert!(empty.last);
        assert!(empty.empty);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page::new(vec!["azul"], 1, PageRequest::first(20)).map(str::to_uppercase);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["content"][0], "AZUL");
        assert_eq!(value["totalElements"], 1);
        assert_eq!(value["number"], 0);
        assert_eq!(value["size"], 20);
        assert_eq!(value["numberOfElements"], 1);
    }
}
