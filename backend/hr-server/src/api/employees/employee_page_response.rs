use crate::EmployeeDto;

use hr_core::{Employee, Page};

use serde::Serialize;

/// One page of employees plus the totals needed to page through the rest
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePageResponse {
    pub items: Vec<EmployeeDto>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl From<Page<Employee>> for EmployeePageResponse {
    fn from(page: Page<Employee>) -> Self {
        let total_pages = page.total_pages();
        let page = page.map(EmployeeDto::from);
        Self {
            items: page.items,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
        }
    }
}
