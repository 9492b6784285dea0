use crate::EmployeeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeDto>,
}
