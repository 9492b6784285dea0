use hr_directory::EmployeeDirectory;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub directory: EmployeeDirectory,
    pub pool: SqlitePool,
    pub default_page_size: i64,
}

impl AppState {
    pub fn new(directory: EmployeeDirectory, default_page_size: i64) -> Self {
        Self {
            pool: directory.pool().clone(),
            directory,
            default_page_size,
        }
    }
}
