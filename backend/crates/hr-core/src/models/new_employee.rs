use crate::Employee;

use chrono::{SubsecRound, Utc};
use uuid::Uuid;

/// Input for creating an employee. The id is optional and generated when absent.
#[derive(Debug, Clone, Default)]
pub struct NewEmployee {
    pub id: Option<String>,
    pub employee_name: String,
    pub phone_number: String,
    pub email: String,
    pub reports_to: Option<String>,
    pub profile_image_url: Option<String>,
}

impl NewEmployee {
    pub fn into_employee(self) -> Employee {
        let now = Utc::now().trunc_subsecs(0);
        Employee {
            id: non_blank(self.id).unwrap_or_else(|| Uuid::new_v4().to_string()),
            employee_name: self.employee_name,
            phone_number: self.phone_number,
            email: self.email.trim().to_string(),
            profile_image_url: non_blank(self.profile_image_url),
            reports_to: non_blank(self.reports_to),
            created_at: now,
            updated_at: now,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
