pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    employees::{
        create_employee_request::CreateEmployeeRequest,
        employee_dto::EmployeeDto,
        employee_list_response::EmployeeListResponse,
        employee_page_response::EmployeePageResponse,
        employee_response::EmployeeResponse,
        employees::{
            create_employee, delete_employee, get_employee, get_nth_manager, list_employees,
            list_employees_paginated, update_employee,
        },
        manager_level_query::ManagerLevelQuery,
        pagination_query::PaginationQuery,
        update_employee_request::UpdateEmployeeRequest,
    },
    error::{ApiError, ApiErrorBody, ApiErrorResponse, Result as ApiResult},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
