use hr_core::NewEmployee;

use serde::Deserialize;

/// Request body for creating an employee.
///
/// Required fields are optional here so that a missing field is reported
/// by record validation alongside every other violation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub reports_to: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            id: req.id,
            employee_name: req.employee_name.unwrap_or_default(),
            phone_number: req.phone_number.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            reports_to: req.reports_to,
            profile_image_url: req.profile_image_url,
        }
    }
}
