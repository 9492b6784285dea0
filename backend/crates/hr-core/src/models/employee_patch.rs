use crate::Patch;

/// Partial update for an employee. `Unset` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
    pub employee_name: Patch<String>,
    pub phone_number: Patch<String>,
    pub email: Patch<String>,
    pub reports_to: Patch<String>,
    pub profile_image_url: Patch<String>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.employee_name.is_unset()
            && self.phone_number.is_unset()
            && self.email.is_unset()
            && self.reports_to.is_unset()
            && self.profile_image_url.is_unset()
    }
}
