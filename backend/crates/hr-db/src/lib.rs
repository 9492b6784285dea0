pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::sqlite_pool::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::employee_repository::EmployeeRepository;
pub use repositories::manager_index_repository::ManagerIndexRepository;
