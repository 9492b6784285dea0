use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,

    // Profile
    pub employee_name: String,
    pub phone_number: String,
    pub email: String,
    pub profile_image_url: Option<String>,

    // Hierarchy
    pub reports_to: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Direct manager id, treating a blank reference as no manager.
    pub fn manager_id(&self) -> Option<&str> {
        self.reports_to
            .as_deref()
            .filter(|manager_id| !manager_id.trim().is_empty())
    }

    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}

/// Key used by the email uniqueness index.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
