//! Structural and uniqueness checks for a single employee record.
//!
//! All checks run; every failure is collected so the caller can report the
//! full list in one response instead of one field per round trip.

use crate::{CoreError, Employee, FieldViolation, Result as CoreErrorResult, normalize_email};

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$").expect("valid email pattern")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("valid phone pattern"));

/// Validate `employee` against the rest of the directory.
///
/// `all_employees` may contain a stored copy of `employee` itself; records
/// with the same id are ignored for the uniqueness check.
#[track_caller]
pub fn validate_record(employee: &Employee, all_employees: &[Employee]) -> CoreErrorResult<()> {
    let mut violations = Vec::new();

    if employee.employee_name.trim().is_empty() {
        violations.push(FieldViolation::new(
            "employeeName",
            "Employee name cannot be empty",
        ));
    }

    if !is_valid_email(&employee.email) {
        violations.push(FieldViolation::new("email", "Invalid email format"));
    } else {
        let normalized = employee.normalized_email();
        let taken = all_employees
            .iter()
            .any(|other| other.id != employee.id && normalize_email(&other.email) == normalized);
        if taken {
            violations.push(FieldViolation::new(
                "email",
                format!("Email already exists: {}", employee.email),
            ));
        }
    }

    if !is_valid_phone(&employee.phone_number) {
        violations.push(FieldViolation::new(
            "phoneNumber",
            "Invalid phone number format",
        ));
    }

    if let Some(manager_id) = employee.manager_id() {
        if manager_id == employee.id {
            violations.push(FieldViolation::new(
                "reportsTo",
                "Employee cannot report to themselves",
            ));
        } else if !all_employees.iter().any(|e| e.id == manager_id) {
            violations.push(FieldViolation::new(
                "reportsTo",
                format!("Manager with ID {} does not exist", manager_id),
            ));
        }
    }

    if let Some(url) = employee
        .profile_image_url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        && Url::parse(url).is_err()
    {
        violations.push(FieldViolation::new(
            "profileImageUrl",
            "Invalid profile image URL",
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CoreError::validation(violations))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone_number: &str) -> bool {
    PHONE_PATTERN.is_match(phone_number)
}
