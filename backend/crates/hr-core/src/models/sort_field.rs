use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Columns a page of employees may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    #[default]
    EmployeeName,
    Email,
    PhoneNumber,
    Id,
    ReportsTo,
    CreatedAt,
}

impl SortField {
    /// Wire (JSON) name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmployeeName => "employeeName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Id => "id",
            Self::ReportsTo => "reportsTo",
            Self::CreatedAt => "createdAt",
        }
    }

    /// Database column backing the field
    pub fn column(&self) -> &'static str {
        match self {
            Self::EmployeeName => "employee_name",
            Self::Email => "email_normalized",
            Self::PhoneNumber => "phone_number",
            Self::Id => "id",
            Self::ReportsTo => "reports_to",
            Self::CreatedAt => "created_at",
        }
    }

    /// Parse an optional sort parameter. Blank or missing falls back to the default.
    #[track_caller]
    pub fn parse_or_default(value: Option<&str>) -> CoreErrorResult<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(s) => Self::from_str(s),
        }
    }
}

impl FromStr for SortField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "employeeName" | "employee_name" => Ok(Self::EmployeeName),
            "email" => Ok(Self::Email),
            "phoneNumber" | "phone_number" => Ok(Self::PhoneNumber),
            "id" => Ok(Self::Id),
            "reportsTo" | "reports_to" => Ok(Self::ReportsTo),
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            _ => Err(CoreError::InvalidSortField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
