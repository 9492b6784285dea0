use crate::NewEmployee;

use uuid::Uuid;

fn input() -> NewEmployee {
    NewEmployee {
        id: None,
        employee_name: "Ada".to_string(),
        phone_number: "+15551234567".to_string(),
        email: "  ada@example.com ".to_string(),
        reports_to: Some("".to_string()),
        profile_image_url: Some("   ".to_string()),
    }
}

#[test]
fn given_no_id_when_converting_then_generates_uuid() {
    let employee = input().into_employee();

    assert!(Uuid::parse_str(&employee.id).is_ok());
}

#[test]
fn given_blank_id_when_converting_then_generates_uuid() {
    let employee = NewEmployee {
        id: Some(" ".to_string()),
        ..input()
    }
    .into_employee();

    assert!(Uuid::parse_str(&employee.id).is_ok());
}

#[test]
fn given_explicit_id_when_converting_then_keeps_it() {
    let employee = NewEmployee {
        id: Some("emp-7".to_string()),
        ..input()
    }
    .into_employee();

    assert_eq!(employee.id, "emp-7");
}

#[test]
fn given_blank_optionals_when_converting_then_none_and_email_trimmed() {
    let employee = input().into_employee();

    assert_eq!(employee.reports_to, None);
    assert_eq!(employee.profile_image_url, None);
    assert_eq!(employee.email, "ada@example.com");
    assert_eq!(employee.created_at, employee.updated_at);
}
