use hr_core::Employee;
use hr_db::EmployeeRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts every employee in order
pub async fn insert_all(pool: &SqlitePool, employees: &[Employee]) {
    for employee in employees {
        EmployeeRepository::create(pool, employee)
            .await
            .expect("Failed to insert employee");
    }
}
