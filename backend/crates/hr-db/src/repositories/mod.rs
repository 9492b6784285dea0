pub mod employee_repository;
pub mod manager_index_repository;
