use hr_core::Employee;

use serde::Serialize;

/// Employee DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: String,
    pub employee_name: String,
    pub phone_number: String,
    pub email: String,
    pub reports_to: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Employee> for EmployeeDto {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            employee_name: e.employee_name,
            phone_number: e.phone_number,
            email: e.email,
            reports_to: e.reports_to,
            profile_image_url: e.profile_image_url,
            created_at: e.created_at.timestamp(),
            updated_at: e.updated_at.timestamp(),
        }
    }
}
