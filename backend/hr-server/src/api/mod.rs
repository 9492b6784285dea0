pub mod delete_response;
pub mod employees;
pub mod error;
