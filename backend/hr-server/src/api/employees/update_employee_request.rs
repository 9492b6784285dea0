use hr_core::{EmployeePatch, Patch};

use serde::Deserialize;

/// Partial update body. A missing key leaves the field alone, `null` clears it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[serde(default)]
    pub employee_name: Patch<String>,
    #[serde(default)]
    pub phone_number: Patch<String>,
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub reports_to: Patch<String>,
    #[serde(default)]
    pub profile_image_url: Patch<String>,
}

impl From<UpdateEmployeeRequest> for EmployeePatch {
    fn from(req: UpdateEmployeeRequest) -> Self {
        Self {
            employee_name: req.employee_name,
            phone_number: req.phone_number,
            email: req.email,
            reports_to: req.reports_to,
            profile_image_url: req.profile_image_url,
        }
    }
}
