//! Employee directory operations.
//!
//! Every write runs in one SQLite transaction covering the employee row and
//! its Manager Index entry. Manager notifications go out only after the
//! transaction commits; a failed notification is logged and never fails the
//! write.

use crate::{DirectoryError, Notifier, Result as DirectoryErrorResult, manager_index};

use hr_core::{
    CoreError, Employee, EmployeePatch, ErrorLocation, FieldViolation, NewEmployee, Page,
    PageRequest, Patch, SortField, validate_chain_acyclic, validate_record,
};
use hr_db::{EmployeeRepository, ManagerIndexRepository};

use std::collections::HashMap;
use std::panic::Location;

use chrono::{SubsecRound, Utc};
use log::{debug, info, warn};
use sqlx::{Sqlite, SqlitePool, Transaction};

#[derive(Clone)]
pub struct EmployeeDirectory {
    pool: SqlitePool,
    notifier: Notifier,
    max_page_size: i64,
}

impl EmployeeDirectory {
    pub fn new(pool: SqlitePool, notifier: Notifier, max_page_size: i64) -> Self {
        Self {
            pool,
            notifier,
            max_page_size,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Validate and persist a new employee, generating an id when none is given.
    pub async fn create(&self, input: NewEmployee) -> DirectoryErrorResult<Employee> {
        let employee = input.into_employee();

        let mut tx = self.begin_write().await?;

        if EmployeeRepository::exists_by_id(&mut *tx, &employee.id).await? {
            let message = format!("Employee with ID {} already exists", employee.id);
            return Err(DirectoryError::InvalidData {
                violations: vec![FieldViolation::new("id", message.clone())],
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let all_employees = EmployeeRepository::find_all(&mut *tx).await?;
        let manager = Self::check_record(&employee, &all_employees, Vec::new())?;

        EmployeeRepository::create(&mut *tx, &employee).await?;
        if let Some(manager_id) = employee.manager_id() {
            ManagerIndexRepository::set(&mut *tx, &employee.id, manager_id).await?;
        }

        tx.commit().await?;

        info!(
            "Created employee {} (reports to {})",
            employee.id,
            employee.manager_id().unwrap_or("nobody")
        );

        if let Some(manager) = manager {
            self.notify_manager(&manager, &employee).await;
        }

        Ok(employee)
    }

    /// Every employee in insertion order.
    pub async fn list(&self) -> DirectoryErrorResult<Vec<Employee>> {
        Ok(EmployeeRepository::find_all(&self.pool).await?)
    }

    /// One page sorted ascending by `sort_by` (default `employeeName`).
    pub async fn list_page(
        &self,
        page: i64,
        size: i64,
        sort_by: Option<&str>,
    ) -> DirectoryErrorResult<Page<Employee>> {
        let sort = SortField::parse_or_default(sort_by)?;
        let request = PageRequest::new(page, size, sort, self.max_page_size)?;

        let mut tx = self.pool.begin().await?;

        let total = EmployeeRepository::count(&mut *tx).await?;
        request.ensure_within(total)?;

        let items =
            EmployeeRepository::find_page(&mut *tx, request.sort, request.size, request.offset())
                .await?;

        tx.commit().await?;

        Ok(Page {
            items,
            page: request.page,
            size: request.size,
            total_elements: total,
        })
    }

    pub async fn get(&self, id: &str) -> DirectoryErrorResult<Employee> {
        EmployeeRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(id))
    }

    /// Apply a partial update. Unset fields keep their stored value.
    pub async fn update(&self, id: &str, patch: EmployeePatch) -> DirectoryErrorResult<Employee> {
        let mut tx = self.begin_write().await?;

        let existing = EmployeeRepository::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(id))?;

        if patch.is_empty() {
            debug!("Empty update for employee {}, nothing to do", id);
            return Ok(existing);
        }

        let (updated, violations) = merge(&existing, patch);

        let all_employees = EmployeeRepository::find_all(&mut *tx).await?;
        let manager = Self::check_record(&updated, &all_employees, violations)?;

        EmployeeRepository::update(&mut *tx, &updated).await?;
        match updated.manager_id() {
            Some(manager_id) => {
                ManagerIndexRepository::set(&mut *tx, &updated.id, manager_id).await?;
            }
            None => {
                ManagerIndexRepository::delete(&mut *tx, &updated.id).await?;
            }
        }

        tx.commit().await?;

        info!("Updated employee {}", updated.id);

        let manager_changed = existing.manager_id() != updated.manager_id();
        if manager_changed && let Some(manager) = manager {
            self.notify_manager(&manager, &updated).await;
        }

        Ok(updated)
    }

    /// Remove an employee nobody reports to. Returns the confirmation message.
    pub async fn delete(&self, id: &str) -> DirectoryErrorResult<String> {
        let mut tx = self.begin_write().await?;

        if !EmployeeRepository::exists_by_id(&mut *tx, id).await? {
            return Err(DirectoryError::not_found(id));
        }

        let subordinates = EmployeeRepository::count_subordinates(&mut *tx, id).await?;
        if subordinates > 0 {
            return Err(DirectoryError::invalid_data(format!(
                "Cannot delete employee as they have {} subordinates reporting to them",
                subordinates
            )));
        }

        EmployeeRepository::delete_by_id(&mut *tx, id).await?;
        ManagerIndexRepository::delete(&mut *tx, id).await?;

        tx.commit().await?;

        info!("Deleted employee {}", id);

        Ok(format!("Employee with ID {} deleted successfully.", id))
    }

    /// The manager exactly `level` hops above `employee_id`.
    pub async fn find_nth_manager(
        &self,
        employee_id: &str,
        level: i64,
    ) -> DirectoryErrorResult<Employee> {
        if employee_id.trim().is_empty() {
            return Err(DirectoryError::invalid_data("Employee ID cannot be empty"));
        }
        if level < 1 {
            return Err(DirectoryError::invalid_data("Level must be at least 1"));
        }

        if !EmployeeRepository::exists_by_id(&self.pool, employee_id).await? {
            return Err(DirectoryError::not_found(employee_id));
        }

        let manager_id = manager_index::ascend(&self.pool, employee_id, level).await?;

        EmployeeRepository::find_by_id(&self.pool, &manager_id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(manager_id))
    }

    /// Rebuild the Manager Index from `reports_to`. Returns the number of entries written.
    pub async fn reconcile_manager_index(&self) -> DirectoryErrorResult<u64> {
        let mut tx = self.begin_write().await?;

        let assignments = EmployeeRepository::find_manager_assignments(&mut *tx).await?;
        let written = ManagerIndexRepository::replace_all(&mut *tx, &assignments).await?;

        tx.commit().await?;

        info!("Manager index reconciled: {} entries", written);

        Ok(written)
    }

    /// Write transaction that takes the SQLite write lock at `BEGIN`.
    ///
    /// A deferred transaction upgrading after a read fails with `SQLITE_BUSY`
    /// without waiting on the busy timeout.
    async fn begin_write(&self) -> DirectoryErrorResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    /// Structural, uniqueness and cycle checks against the current records.
    ///
    /// `violations` found earlier (e.g. while merging a patch) are reported
    /// together with the structural ones. Returns the direct manager's record
    /// when one is assigned.
    fn check_record(
        employee: &Employee,
        all_employees: &[Employee],
        mut violations: Vec<FieldViolation>,
    ) -> DirectoryErrorResult<Option<Employee>> {
        match validate_record(employee, all_employees) {
            Ok(()) => {}
            Err(CoreError::Validation {
                violations: found, ..
            }) => violations.extend(found),
            Err(other) => return Err(other.into()),
        }
        if !violations.is_empty() {
            return Err(CoreError::validation(violations).into());
        }

        let by_id: HashMap<&str, &Employee> = all_employees
            .iter()
            .map(|e| (e.id.as_str(), e))
            .collect();
        validate_chain_acyclic(employee, |id| by_id.get(id).copied())?;

        Ok(employee
            .manager_id()
            .and_then(|manager_id| by_id.get(manager_id))
            .map(|manager| (*manager).clone()))
    }

    async fn notify_manager(&self, manager: &Employee, employee: &Employee) {
        if let Err(e) = self.notifier.notify_new_report(manager, employee).await {
            warn!(
                "Failed to notify manager {} about employee {}: {}",
                manager.id, employee.id, e
            );
        }
    }
}

/// Apply `patch` on top of `existing`.
///
/// Cleared required fields keep their stored value and come back as violations.
fn merge(existing: &Employee, patch: EmployeePatch) -> (Employee, Vec<FieldViolation>) {
    let mut updated = existing.clone();
    let mut violations = Vec::new();

    apply_required(
        &mut updated.employee_name,
        patch.employee_name,
        FieldViolation::new("employeeName", "Employee name cannot be empty"),
        &mut violations,
    );
    apply_required(
        &mut updated.phone_number,
        patch.phone_number,
        FieldViolation::new("phoneNumber", "Phone number is required"),
        &mut violations,
    );
    apply_required(
        &mut updated.email,
        patch.email.map(|email| email.trim().to_string()),
        FieldViolation::new("email", "Email is required"),
        &mut violations,
    );
    apply_optional(&mut updated.reports_to, patch.reports_to);
    apply_optional(&mut updated.profile_image_url, patch.profile_image_url);

    updated.updated_at = Utc::now().trunc_subsecs(0);
    (updated, violations)
}

/// `on_clear` is recorded when the patch tries to remove the value.
fn apply_required(
    target: &mut String,
    patch: Patch<String>,
    on_clear: FieldViolation,
    violations: &mut Vec<FieldViolation>,
) {
    match patch {
        Patch::Unset => {}
        Patch::Clear => violations.push(on_clear),
        Patch::Set(value) => *target = value,
    }
}

fn apply_optional(target: &mut Option<String>, patch: Patch<String>) {
    match patch.blank_as_clear() {
        Patch::Unset => {}
        Patch::Clear => *target = None,
        Patch::Set(value) => *target = Some(value),
    }
}
