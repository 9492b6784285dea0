//! Reporting chain cycle detection.
//!
//! Walks `reports_to` upward from a candidate record. A walk that comes back
//! to the candidate, or visits any manager twice, is a cycle. A manager that
//! cannot be found ends the walk without error: a dangling tail is not a cycle.

use crate::{CoreError, Employee, Result as CoreErrorResult};

use std::collections::HashSet;
use std::panic::Location;

use error_location::ErrorLocation;

/// Reject `employee` if its reporting chain loops.
///
/// `lookup` resolves an employee id to the stored record. The candidate's own
/// stored copy (if any) is never consulted because the walk stops as soon as
/// it reaches the candidate's id. Runs in O(depth) time and memory.
#[track_caller]
pub fn validate_chain_acyclic<'a, F>(employee: &Employee, lookup: F) -> CoreErrorResult<()>
where
    F: Fn(&str) -> Option<&'a Employee>,
{
    let Some(first) = employee.manager_id() else {
        return Ok(());
    };

    let mut chain: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut current = first.to_string();

    loop {
        if current == employee.id || seen.contains(&current) {
            let mut path = Vec::with_capacity(chain.len() + 2);
            path.push(employee.id.as_str());
            path.extend(chain.iter().map(String::as_str));
            path.push(current.as_str());

            return Err(CoreError::CycleDetected {
                employee_id: employee.id.clone(),
                path: path.join(" -> "),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        seen.insert(current.clone());
        chain.push(current.clone());

        match lookup(&current).and_then(Employee::manager_id) {
            Some(next) => current = next.to_string(),
            None => break,
        }
    }

    Ok(())
}
