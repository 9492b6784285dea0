//! Authoritative store for employee records.
//!
//! Timestamps are stored as Unix seconds. `email_normalized` carries the
//! unique index used for duplicate-email detection; it is always derived from
//! `email` on write and never read back into the model.

use crate::{DbError, Result as DbErrorResult};

use hr_core::{Employee, ErrorLocation, SortField};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

const EMPLOYEE_COLUMNS: &str = r#"
    id, employee_name, phone_number, email, reports_to, profile_image_url,
    created_at, updated_at
"#;

pub struct EmployeeRepository;

impl EmployeeRepository {
    pub async fn create<'e, E>(executor: E, employee: &Employee) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO hr_employees (
                    id, employee_name, phone_number, email, email_normalized,
                    reports_to, profile_image_url, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.id)
        .bind(&employee.employee_name)
        .bind(&employee.phone_number)
        .bind(&employee.email)
        .bind(employee.normalized_email())
        .bind(&employee.reports_to)
        .bind(&employee.profile_image_url)
        .bind(employee.created_at.timestamp())
        .bind(employee.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Overwrite every mutable column. Returns false when no row has this id.
    pub async fn update<'e, E>(executor: E, employee: &Employee) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE hr_employees
                SET employee_name = ?,
                    phone_number = ?,
                    email = ?,
                    email_normalized = ?,
                    reports_to = ?,
                    profile_image_url = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&employee.employee_name)
        .bind(&employee.phone_number)
        .bind(&employee.email)
        .bind(employee.normalized_email())
        .bind(&employee.reports_to)
        .bind(&employee.profile_image_url)
        .bind(employee.updated_at.timestamp())
        .bind(&employee.id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id<'e, E>(executor: E, id: &str) -> DbErrorResult<Option<Employee>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {} FROM hr_employees WHERE id = ?", EMPLOYEE_COLUMNS);

        let row = sqlx::query(&sql).bind(id).fetch_optional(executor).await?;

        row.as_ref().map(employee_from_row).transpose()
    }

    /// All employees in insertion order.
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Employee>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {} FROM hr_employees ORDER BY rowid", EMPLOYEE_COLUMNS);

        let rows = sqlx::query(&sql).fetch_all(executor).await?;

        rows.iter().map(employee_from_row).collect()
    }

    /// One page ordered ascending by `sort`, with `id` breaking ties.
    pub async fn find_page<'e, E>(
        executor: E,
        sort: SortField,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<Vec<Employee>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        // Column names come from a closed enum, never from the caller.
        let sql = format!(
            "SELECT {} FROM hr_employees ORDER BY {} ASC, id ASC LIMIT ? OFFSET ?",
            EMPLOYEE_COLUMNS,
            sort.column()
        );

        let rows = sqlx::query(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(executor)
            .await?;

        rows.iter().map(employee_from_row).collect()
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hr_employees")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    pub async fn exists_by_id<'e, E>(executor: E, id: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM hr_employees WHERE id = ?)")
                .bind(id)
                .fetch_one(executor)
                .await?;

        Ok(exists)
    }

    /// Number of employees whose `reports_to` names `manager_id`.
    pub async fn count_subordinates<'e, E>(executor: E, manager_id: &str) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hr_employees WHERE reports_to = ?")
            .bind(manager_id)
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    /// `(employee_id, manager_id)` for every employee with a non-blank manager.
    pub async fn find_manager_assignments<'e, E>(executor: E) -> DbErrorResult<Vec<(String, String)>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
                SELECT id, reports_to
                FROM hr_employees
                WHERE reports_to IS NOT NULL AND TRIM(reports_to) <> ''
                ORDER BY rowid
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    /// Returns false when no row had this id.
    pub async fn delete_by_id<'e, E>(executor: E, id: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM hr_employees WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn employee_from_row(row: &SqliteRow) -> DbErrorResult<Employee> {
    Ok(Employee {
        id: row.try_get("id")?,
        employee_name: row.try_get("employee_name")?,
        phone_number: row.try_get("phone_number")?,
        email: row.try_get("email")?,
        reports_to: row.try_get("reports_to")?,
        profile_image_url: row.try_get("profile_image_url")?,
        created_at: timestamp(row.try_get("created_at")?, "created_at")?,
        updated_at: timestamp(row.try_get("updated_at")?, "updated_at")?,
    })
}

#[track_caller]
fn timestamp(seconds: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in hr_employees.{}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
