//! Integration tests for the public helper surface.
//!
//! Exercises the pieces the web layer combines: `validator` derives feeding a
//! validation report, a process-wide enum catalog, and date strings that are
//! shown on screen and later read back from uploads.

use std::sync::LazyLock;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use extkit_core::formatting::{date_time_to_string, date_to_string, DatePattern};
use extkit_core::validation::{EntityValidationFailures, ValidationReport};
use extkit_core::{display_enum, display_name, CoreError, EnumCatalog};
use validator::Validate;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Validate)]
struct Customer {
    #[validate(length(min = 1, message = "required"))]
    name: String,
    #[validate(range(min = 1, message = "must be positive"))]
    age: i32,
    #[validate(email)]
    email: String,
}

display_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum OrderStatus {
        Draft = 0,
        Submitted = 1 => "Awaiting Approval",
        Shipped = 2,
    }
}

display_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Weekday {
        Monday = 1 => "Mon",
        Tuesday = 2 => "Tue",
    }
}

static CATALOG: LazyLock<EnumCatalog> = LazyLock::new(|| {
    EnumCatalog::new()
        .register::<OrderStatus>()
        .register::<Weekday>()
});

// ---------------------------------------------------------------------------
// Test: validator errors rendered as a report
// ---------------------------------------------------------------------------

/// A failing `validator` derive produces one failure per rule, with the
/// message when one is set and the rule code otherwise.
#[test]
fn validator_errors_render_into_report() {
    let customer = Customer {
        name: String::new(),
        age: 0,
        email: "not-an-email".into(),
    };
    let errors = customer.validate().expect_err("customer should be invalid");

    let entity = EntityValidationFailures::from_validation_errors("Customer", &errors);
    let report = ValidationReport::new("Failed to save customer", vec![entity]);

    assert_eq!(
        report.render(),
        "Failed to save customer\nValidation errors:\n\n[Customer]\n\t - [age - must be positive]\n\t - [email - email]\n\t - [name - required]"
    );
}

/// A report converts into the crate error with the rendered text.
#[test]
fn report_becomes_validation_error() {
    let report = ValidationReport::new("Failed", vec![EntityValidationFailures::new("Order", vec![])]);
    let err = CoreError::from(report);
    assert_matches!(&err, CoreError::Validation(msg) if msg.ends_with("\n[Order]"));
    assert!(err.to_string().starts_with("Validation failed: Failed"));
}

// ---------------------------------------------------------------------------
// Test: enum display names
// ---------------------------------------------------------------------------

#[test]
fn typed_and_catalog_resolution_agree() {
    for status in [OrderStatus::Draft, OrderStatus::Submitted, OrderStatus::Shipped] {
        assert_eq!(CATALOG.display_name(&status).unwrap(), display_name(status));
    }
    assert_eq!(display_name(OrderStatus::Submitted), "Awaiting Approval");
    assert_eq!(CATALOG.display_name(&Weekday::Tuesday).unwrap(), "Tue");
}

#[test]
fn catalog_rejects_plain_values() {
    assert_matches!(
        CATALOG.display_name(&String::from("Draft")),
        Err(CoreError::InvalidArgument(_))
    );
    assert_matches!(CATALOG.display_name(&3_u8), Err(CoreError::InvalidArgument(_)));
}

// ---------------------------------------------------------------------------
// Test: date strings read back with the same pattern
// ---------------------------------------------------------------------------

#[test]
fn date_string_round_trips_through_pattern() {
    let value = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(17, 45, 12)
        .unwrap();

    let shown = date_to_string(Some(&value));
    let parsed = DatePattern::parse("dd/MM/yyyy")
        .unwrap()
        .parse_exact(&shown)
        .unwrap();
    assert_eq!(parsed.date(), value.date());

    let shown = date_time_to_string(Some(&value));
    let parsed = DatePattern::parse("dd/MM/yyyy hh:mm:ss tt")
        .unwrap()
        .parse_exact(&shown)
        .unwrap();
    assert_eq!(parsed, value);
}
