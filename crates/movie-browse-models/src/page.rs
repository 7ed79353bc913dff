use serde::{Deserialize, Serialize};

/// One page of a paginated listing response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    #[serde(default = "default_page")]
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default = "default_page")]
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
