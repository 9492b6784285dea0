mod employee_requests;
mod error;
