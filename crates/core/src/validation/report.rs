//! Validation report types and rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Line separator used between report lines.
pub const NEWLINE: &str = "\n";

/// Header line placed between the summary and the entity blocks.
pub const REPORT_HEADER: &str = "Validation errors:";

/// Prefix of every indented failure line.
pub const FAILURE_INDENT: &str = "\t - ";

/// A single field-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub field_name: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }

    /// Build a failure from possibly-absent parts; absent parts become empty.
    pub fn from_parts(field_name: Option<&str>, message: Option<&str>) -> Self {
        Self::new(field_name.unwrap_or_default(), message.unwrap_or_default())
    }
}

/// All failures reported for one invalid entity instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityValidationFailures {
    pub entity_type_name: String,
    /// Failures in the order the validator produced them.
    pub failures: Vec<ValidationFailure>,
}

impl EntityValidationFailures {
    pub fn new(entity_type_name: impl Into<String>, failures: Vec<ValidationFailure>) -> Self {
        Self {
            entity_type_name: entity_type_name.into(),
            failures,
        }
    }

    /// Render this entity's block.
    ///
    /// Format: `[Type]` followed by one `\n\t - [field - message]` line per
    /// failure. An entity without failures renders as `[Type]` only.
    pub fn render(&self) -> String {
        let mut out = format!("[{}]", self.entity_type_name);
        for failure in &self.failures {
            out.push_str(NEWLINE);
            out.push_str(FAILURE_INDENT);
            out.push_str(&format!("[{} - {}]", failure.field_name, failure.message));
        }
        out
    }
}

/// Render the entity blocks, each preceded by a newline.
///
/// Returns the empty string when there are no entities.
pub fn render_entities(entities: &[EntityValidationFailures]) -> String {
    entities.iter().fold(String::new(), |mut acc, entity| {
        acc.push_str(NEWLINE);
        acc.push_str(&entity.render());
        acc
    })
}

/// Render a full report: summary, header line, then the entity blocks.
pub fn render_report(summary: &str, entities: &[EntityValidationFailures]) -> String {
    format!(
        "{summary}{NEWLINE}{REPORT_HEADER}{NEWLINE}{}",
        render_entities(entities)
    )
}

/// A caught validation failure event, rendered once and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Description of the failure that triggered the report.
    pub summary: String,
    pub entities: Vec<EntityValidationFailures>,
}

impl ValidationReport {
    pub fn new(summary: impl Into<String>, entities: Vec<EntityValidationFailures>) -> Self {
        Self {
            summary: summary.into(),
            entities,
        }
    }

    pub fn render(&self) -> String {
        render_report(&self.summary, &self.entities)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<ValidationReport> for CoreError {
    fn from(report: ValidationReport) -> Self {
        CoreError::Validation(report.render())
    }
}
