use crate::{CoreError, Page, PageRequest, SortField};

use googletest::prelude::*;

#[test]
fn given_negative_page_when_creating_request_then_invalid_argument() {
    let result = PageRequest::new(-1, 10, SortField::EmployeeName, 100);

    assert!(matches!(result, Err(CoreError::InvalidArgument { .. })));
}

#[test]
fn given_zero_size_when_creating_request_then_invalid_argument() {
    let result = PageRequest::new(0, 0, SortField::EmployeeName, 100);

    assert!(matches!(result, Err(CoreError::InvalidArgument { .. })));
}

#[test]
fn given_size_over_maximum_when_creating_request_then_invalid_argument() {
    let result = PageRequest::new(0, 101, SortField::EmployeeName, 100);

    assert!(matches!(result, Err(CoreError::InvalidArgument { .. })));
}

#[test]
fn given_page_past_end_when_checking_bounds_then_error_names_last_page() {
    // 12 records, 10 per page: pages 0 and 1 exist
    let request = PageRequest::new(5, 10, SortField::EmployeeName, 100).unwrap();

    let err = request.ensure_within(12).unwrap_err();

    assert_that!(
        err.to_string(),
        contains_substring("Requested page 5 exceeds the maximum available page 1")
    );
}

#[test]
fn given_empty_store_when_checking_bounds_then_ok() {
    let request = PageRequest::new(3, 10, SortField::EmployeeName, 100).unwrap();

    assert_that!(request.ensure_within(0), ok(anything()));
}

#[test]
fn test_offset_and_total_pages() {
    let request = PageRequest::new(2, 25, SortField::Id, 100).unwrap();
    assert_eq!(request.offset(), 50);

    let page: Page<i32> = Page {
        items: vec![],
        page: 0,
        size: 10,
        total_elements: 21,
    };
    assert_eq!(page.total_pages(), 3);

    let empty: Page<i32> = Page {
        items: vec![],
        page: 0,
        size: 10,
        total_elements: 0,
    };
    assert_eq!(empty.total_pages(), 0);
}
