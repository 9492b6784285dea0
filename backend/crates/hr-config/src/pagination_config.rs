use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE, MAX_MAX_PAGE_SIZE,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when a request omits `size`
    pub default_page_size: i64,
    /// Largest `size` a request may ask for
    pub max_page_size: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_page_size < 1 || self.max_page_size > MAX_MAX_PAGE_SIZE {
            return Err(ConfigError::pagination(format!(
                "pagination.max_page_size must be 1-{}, got {}",
                MAX_MAX_PAGE_SIZE, self.max_page_size
            )));
        }

        if self.default_page_size < 1 || self.default_page_size > self.max_page_size {
            return Err(ConfigError::pagination(format!(
                "pagination.default_page_size must be 1-{} (max_page_size), got {}",
                self.max_page_size, self.default_page_size
            )));
        }

        Ok(())
    }
}
