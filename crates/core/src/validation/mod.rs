//! Validation failure reporting.
//!
//! Collects entity-level validation failures (from the persistence layer or
//! from `validator` derives) and renders them into a single indented report
//! suitable for logs and error messages.

pub mod adapter;
pub mod report;

pub use report::{render_report, EntityValidationFailures, ValidationFailure, ValidationReport};
