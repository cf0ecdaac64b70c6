//! Conversion from `validator` error trees into entity failures.

use validator::{ValidationErrors, ValidationErrorsKind};

use super::report::{EntityValidationFailures, ValidationFailure};

impl EntityValidationFailures {
    /// Flatten a `validator` error tree into failures for `entity_type_name`.
    ///
    /// Nested struct errors are reported under dotted paths (`address.city`)
    /// and list errors under indexed paths (`items[2].sku`). The source is
    /// unordered, so failures are sorted by path, field names alphabetically
    /// and list indices numerically (`items[2]` before `items[10]`);
    /// failures on the same path keep the validator's order. When a rule has
    /// no message its code is used instead.
    pub fn from_validation_errors(
        entity_type_name: impl Into<String>,
        errors: &ValidationErrors,
    ) -> Self {
        let mut failures = Vec::new();
        collect(errors, "", &mut failures);
        failures.sort_by(|a, b| path_key(&a.field_name).cmp(&path_key(&b.field_name)));
        Self::new(entity_type_name, failures)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum PathSegment<'a> {
    Field(&'a str),
    Index(usize),
}

/// Split `items[10].sku` into `[Field("items"), Index(10), Field("sku")]`.
fn path_key(path: &str) -> Vec<PathSegment<'_>> {
    let mut key = Vec::new();
    for part in path.split('.') {
        let mut pieces = part.split('[');
        if let Some(name) = pieces.next().filter(|n| !n.is_empty()) {
            key.push(PathSegment::Field(name));
        }
        for piece in pieces {
            let inner = piece.trim_end_matches(']');
            match inner.parse() {
                Ok(index) => key.push(PathSegment::Index(index)),
                Err(_) => key.push(PathSegment::Field(inner)),
            }
        }
    }
    key
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<ValidationFailure>) {
    for (field, kind) in errors.errors() {
        let path = join_path(prefix, &field.to_string());
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    ValidationFailure::new(path.clone(), message)
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}
