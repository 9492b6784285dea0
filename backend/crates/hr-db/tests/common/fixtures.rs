use hr_core::Employee;

use chrono::{Duration, SubsecRound, Utc};

/// Creates a valid employee whose email is derived from `id`
pub fn create_test_employee(id: &str, reports_to: Option<&str>) -> Employee {
    let now = Utc::now().trunc_subsecs(0);
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

/// Creates an employee with an explicit name, created `age_secs` seconds ago
pub fn create_named_employee(id: &str, name: &str, age_secs: i64) -> Employee {
    let mut employee = create_test_employee(id, None);
    employee.employee_name = name.to_string();
    employee.created_at = employee.created_at - Duration::seconds(age_secs);
    employee.updated_at = employee.created_at;
    employee
}
