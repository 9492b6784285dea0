use crate::tests::test_employee;
use crate::validation::record_validator::{is_valid_email, is_valid_phone};
use crate::{CoreError, validate_record};

use googletest::prelude::*;

fn violated_fields(err: CoreError) -> Vec<String> {
    match err {
        CoreError::Validation { violations, .. } => {
            violations.into_iter().map(|v| v.field).collect()
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_valid_record_when_validating_then_ok() {
    // Given
    let manager = test_employee("mgr", None);
    let employee = test_employee("emp", Some("mgr"));

    // When
    let result = validate_record(&employee, &[manager]);

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_several_bad_fields_when_validating_then_all_are_reported() {
    // Given
    let mut employee = test_employee("emp", Some("ghost"));
    employee.employee_name = "  ".to_string();
    employee.email = "not-an-email".to_string();
    employee.phone_number = "12345".to_string();

    // When
    let err = validate_record(&employee, &[]).unwrap_err();

    // Then
    assert_eq!(
        violated_fields(err),
        vec!["employeeName", "email", "phoneNumber", "reportsTo"]
    );
}

#[test]
fn given_self_reference_when_validating_then_rejected() {
    let employee = test_employee("emp", Some("emp"));

    let err = validate_record(&employee, &[employee.clone()]).unwrap_err();

    assert_that!(
        err.to_string(),
        contains_substring("Employee cannot report to themselves")
    );
}

#[test]
fn given_missing_manager_when_validating_then_message_names_manager() {
    let employee = test_employee("emp", Some("ghost"));

    let err = validate_record(&employee, &[]).unwrap_err();

    assert_that!(
        err.to_string(),
        contains_substring("Manager with ID ghost does not exist")
    );
}

#[test]
fn given_email_differing_only_in_case_when_validating_then_duplicate() {
    // Given
    let existing = test_employee("a", None);
    let mut employee = test_employee("b", None);
    employee.email = "A@EXAMPLE.COM".to_string();

    // When
    let err = validate_record(&employee, &[existing]).unwrap_err();

    // Then
    assert_that!(
        err.to_string(),
        contains_substring("Email already exists: A@EXAMPLE.COM")
    );
}

#[test]
fn given_stored_copy_of_same_record_when_validating_then_email_not_duplicate() {
    let employee = test_employee("a", None);

    let result = validate_record(&employee, &[employee.clone()]);

    assert_that!(result, ok(anything()));
}

#[test]
fn given_malformed_profile_url_when_validating_then_rejected() {
    let mut employee = test_employee("a", None);
    employee.profile_image_url = Some("not a url".to_string());

    let err = validate_record(&employee, &[]).unwrap_err();

    assert_eq!(violated_fields(err), vec!["profileImageUrl"]);
}

#[test]
fn test_email_and_phone_patterns() {
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(!is_valid_email("a@b.c"));
    assert!(!is_valid_email("no-at-sign.com"));

    assert!(is_valid_phone("+4915112345678"));
    assert!(is_valid_phone("5551234567"));
    assert!(!is_valid_phone("555-123-4567"));
    assert!(!is_valid_phone("+1234567890123456"));
}
