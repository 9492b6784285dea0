//! Manager Index: employee id -> direct manager id.
//!
//! A derived lookup kept beside `hr_employees.reports_to` so an ascent touches
//! one row per hop. Callers write it in the same transaction as the record.

use crate::Result as DbErrorResult;

use sqlx::SqliteConnection;

pub struct ManagerIndexRepository;

impl ManagerIndexRepository {
    /// Upsert the direct manager for `employee_id`. Idempotent.
    pub async fn set<'e, E>(executor: E, employee_id: &str, manager_id: &str) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO hr_manager_index (employee_id, manager_id)
                VALUES (?, ?)
                ON CONFLICT(employee_id) DO UPDATE SET manager_id = excluded.manager_id
            "#,
        )
        .bind(employee_id)
        .bind(manager_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn get<'e, E>(executor: E, employee_id: &str) -> DbErrorResult<Option<String>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let manager_id: Option<String> =
            sqlx::query_scalar("SELECT manager_id FROM hr_manager_index WHERE employee_id = ?")
                .bind(employee_id)
                .fetch_optional(executor)
                .await?;

        Ok(manager_id)
    }

    /// Remove the entry if present. Returns whether a row was removed.
    pub async fn delete<'e, E>(executor: E, employee_id: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM hr_manager_index WHERE employee_id = ?")
            .bind(employee_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All entries ordered by employee id.
    pub async fn entries<'e, E>(executor: E) -> DbErrorResult<Vec<(String, String)>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT employee_id, manager_id FROM hr_manager_index ORDER BY employee_id",
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    /// Replace the whole index with `entries`.
    ///
    /// Takes a connection rather than an executor because it issues several
    /// statements; pass `&mut *tx` so the rebuild is atomic.
    pub async fn replace_all(
        conn: &mut SqliteConnection,
        entries: &[(String, String)],
    ) -> DbErrorResult<u64> {
        sqlx::query("DELETE FROM hr_manager_index")
            .execute(&mut *conn)
            .await?;

        let mut written = 0;
        for (employee_id, manager_id) in entries {
            Self::set(&mut *conn, employee_id, manager_id).await?;
            written += 1;
        }

        Ok(written)
    }
}
