//! Paginated list responses

use serde::{Deserialize, Serialize};

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}

/// Page selection plus an optional search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub search: Option<String>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            search: None,
        }
    }

    /// Blank search terms are dropped.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.trim().is_empty()).then_some(search);
        self
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }

    /// Never goes below the first page.
    pub fn previous(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..self.clone()
        }
    }

    /// Query parameters, naming the search term `search_param`.
    pub fn query(&self, search_param: &str) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        if let Some(search) = &self.search {
            params.push((search_param.to_string(), search.clone()));
        }
        params
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}
