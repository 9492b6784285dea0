pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::employee::{Employee, normalize_email};
pub use models::employee_patch::EmployeePatch;
pub use models::new_employee::NewEmployee;
pub use models::page::Page;
pub use models::page_request::PageRequest;
pub use models::patch::Patch;
pub use models::sort_field::SortField;
pub use validation::field_violation::FieldViolation;
pub use validation::hierarchy_validator::validate_chain_acyclic;
pub use validation::record_validator::{is_valid_email, validate_record};
