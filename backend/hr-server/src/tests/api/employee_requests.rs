use crate::{CreateEmployeeRequest, EmployeePageResponse, UpdateEmployeeRequest};

use hr_core::{EmployeePatch, NewEmployee, Page, Patch};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_create_body_without_required_fields_when_converted_then_fields_are_blank() {
    // Given
    let request: CreateEmployeeRequest =
        serde_json::from_value(json!({ "reportsTo": "m1" })).unwrap();

    // When
    let new_employee = NewEmployee::from(request);

    // Then
    assert_that!(new_employee.employee_name, eq(""));
    assert_that!(new_employee.phone_number, eq(""));
    assert_that!(new_employee.email, eq(""));
    assert_that!(new_employee.reports_to, some(eq("m1")));
    assert_that!(new_employee.id, none());
}

#[test]
fn given_update_body_when_deserialized_then_absent_null_and_value_are_distinct() {
    // Given
    let body = json!({
        "employeeName": "Ada",
        "reportsTo": null,
    });

    // When
    let request: UpdateEmployeeRequest = serde_json::from_value(body).unwrap();
    let patch = EmployeePatch::from(request);

    // Then
    assert_that!(patch.employee_name, eq(&Patch::Set("Ada".to_string())));
    assert_that!(patch.reports_to, eq(&Patch::Clear));
    assert_that!(patch.email, eq(&Patch::Unset));
    assert_that!(patch.profile_image_url, eq(&Patch::Unset));
}

#[test]
fn given_empty_update_body_when_converted_then_patch_is_empty() {
    // Given
    let request: UpdateEmployeeRequest = serde_json::from_value(json!({})).unwrap();

    // When
    let patch = EmployeePatch::from(request);

    // Then
    assert_that!(patch.is_empty(), eq(true));
}

#[test]
fn given_page_when_rendered_then_totals_use_camel_case() {
    // Given
    let employee = NewEmployee {
        employee_name: "Ada Lovelace".into(),
        phone_number: "+15551234567".into(),
        email: "ada@example.com".into(),
        ..NewEmployee::default()
    }
    .into_employee();
    let page = Page {
        items: vec![employee],
        page: 1,
        size: 10,
        total_elements: 11,
    };

    // When
    let json = serde_json::to_value(EmployeePageResponse::from(page)).unwrap();

    // Then
    assert_eq!(json["totalElements"], 11);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["items"][0]["employeeName"], "Ada Lovelace");
    assert_eq!(json["items"][0]["reportsTo"], serde_json::Value::Null);
}
