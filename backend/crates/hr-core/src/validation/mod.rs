pub mod field_violation;
pub mod hierarchy_validator;
pub mod record_validator;
