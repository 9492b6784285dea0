mod models;
mod validation;

use crate::Employee;

use chrono::Utc;

/// Create a valid employee with a given id and optional manager.
pub(crate) fn test_employee(id: &str, reports_to: Option<&str>) -> Employee {
    let now = Utc::now();
    Employee {
        id: id.to_string(),
        employee_name: format!("Employee {}", id),
        phone_number: "+15551234567".to_string(),
        email: format!("{}@example.com", id),
        profile_image_url: None,
        reports_to: reports_to.map(String::from),
        created_at: now,
        updated_at: now,
    }
}
