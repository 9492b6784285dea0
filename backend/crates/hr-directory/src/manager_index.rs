use crate::{DirectoryError, Result as DirectoryErrorResult};

use hr_core::ErrorLocation;
use hr_db::ManagerIndexRepository;

use std::panic::Location;

use sqlx::SqlitePool;

/// Follow the Manager Index exactly `levels` hops up from `employee_id`.
///
/// Fails with `ManagerNotFound` (naming the starting employee and the
/// requested level) at the first hop with no entry. Bounded by `levels`.
pub async fn ascend(
    pool: &SqlitePool,
    employee_id: &str,
    levels: i64,
) -> DirectoryErrorResult<String> {
    if employee_id.trim().is_empty() {
        return Err(DirectoryError::invalid_data("Employee ID cannot be empty"));
    }
    if levels < 1 {
        return Err(DirectoryError::invalid_data("Level must be at least 1"));
    }

    let mut current = employee_id.to_string();
    for _ in 0..levels {
        current = ManagerIndexRepository::get(pool, &current)
            .await?
            .ok_or_else(|| DirectoryError::ManagerNotFound {
                employee_id: employee_id.to_string(),
                level: levels,
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    Ok(current)
}
