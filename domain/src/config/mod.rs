//! Configuration value objects for the domain layer
//!
//! Validation results shared by the settings model and the file
//! configuration loaded by the infrastructure layer.

mod validation;

pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
