//! Employee REST API handlers

use crate::{
    ApiResult, AppState, CreateEmployeeRequest, DeleteResponse, EmployeeDto,
    EmployeeListResponse, EmployeePageResponse, EmployeeResponse, ManagerLevelQuery,
    PaginationQuery, UpdateEmployeeRequest,
};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> ApiResult<Json<EmployeeResponse>> {
    let Json(request) = payload?;

    let employee = state.directory.create(request.into()).await?;

    Ok(Json(EmployeeResponse {
        employee: employee.into(),
    }))
}

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> ApiResult<Json<EmployeeListResponse>> {
    let employees = state.directory.list().await?;

    Ok(Json(EmployeeListResponse {
        employees: employees.into_iter().map(EmployeeDto::from).collect(),
    }))
}

/// GET /api/employees/paginated?page&size&sortBy
pub async fn list_employees_paginated(
    State(state): State<AppState>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> ApiResult<Json<EmployeePageResponse>> {
    let Query(query) = query?;

    let page = state
        .directory
        .list_page(
            query.page.unwrap_or(0),
            query.size.unwrap_or(state.default_page_size),
            query.sort_by.as_deref(),
        )
        .await?;

    Ok(Json(page.into()))
}

/// GET /api/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state.directory.get(&id).await?;

    Ok(Json(EmployeeResponse {
        employee: employee.into(),
    }))
}

/// PUT /api/employees/{id}
///
/// Partial update; see [`UpdateEmployeeRequest`] for the absent/null rules.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> ApiResult<Json<EmployeeResponse>> {
    let Json(request) = payload?;

    let employee = state.directory.update(&id, request.into()).await?;

    Ok(Json(EmployeeResponse {
        employee: employee.into(),
    }))
}

/// DELETE /api/employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let message = state.directory.delete(&id).await?;

    Ok(Json(DeleteResponse { message }))
}

/// GET /api/employees/{employee_id}/manager?level=N
pub async fn get_nth_manager(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<ManagerLevelQuery>, QueryRejection>,
) -> ApiResult<Json<EmployeeResponse>> {
    let Query(query) = query?;

    let manager = state
        .directory
        .find_nth_manager(&employee_id, query.level)
        .await?;

    Ok(Json(EmployeeResponse {
        employee: manager.into(),
    }))
}
