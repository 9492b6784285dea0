pub mod create_employee_request;
pub mod employee_dto;
pub mod employee_list_response;
pub mod employee_page_response;
pub mod employee_response;
pub mod employees;
pub mod manager_level_query;
pub mod pagination_query;
pub mod update_employee_request;
