pub mod employee;
pub mod employee_patch;
pub mod new_employee;
pub mod page;
pub mod page_request;
pub mod patch;
pub mod sort_field;
