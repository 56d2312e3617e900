//! Validation errors for record input.
//!
//! A [`ValidationError`] always lists every offending field, never just the first.

use thiserror::Error;

/// What is wrong with one field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// A required field is absent.
    #[error("field required")]
    Missing,
    /// The field is present but holds the wrong JSON type.
    #[error("input should be {expected}")]
    WrongType { expected: &'static str },
    /// The field is not a syntactically valid email address.
    #[error("value is not a valid email address")]
    InvalidEmail,
    /// A number falls outside its inclusive bounds.
    #[error("{}", describe_range(.min, .max))]
    OutOfRange { min: Option<f64>, max: Option<f64> },
    /// Any other constraint reported by the validator.
    #[error("value failed the {code} check")]
    Constraint { code: String },
}

impl Violation {
    /// A short machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Missing => "missing",
            Violation::WrongType { .. } => "type_error",
            Violation::InvalidEmail => "value_error.email",
            Violation::OutOfRange { .. } => "value_error.range",
            Violation::Constraint { .. } => "value_error",
        }
    }
}

fn describe_range(min: &Option<f64>, max: &Option<f64>) -> String {
    match (*min, *max) {
        (Some(min), Some(max)) => format!("value must be between {min} and {max}"),
        (Some(min), None) => format!("value must be at least {min}"),
        (None, Some(max)) => format!("value must be at most {max}"),
        (None, None) => "value is out of range".to_string(),
    }
}

/// One offending field.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {violation}")]
pub struct FieldError {
    pub field: String,
    pub violation: Violation,
}

/// Raw input failed validation; nothing was written anywhere.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{} field(s) failed validation: {}", .errors.len(), summarize(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub(crate) fn single(field: &str, violation: Violation) -> Self {
        Self::new(vec![FieldError { field: field.to_string(), violation }])
    }

    /// Every offending field, in the order they were found.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The violation recorded for `field`, if any.
    pub fn violation(&self, field: &str) -> Option<&Violation> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| &error.violation)
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut collected = constraint_errors(&errors);
        collected.sort_by(|a, b| a.field.cmp(&b.field));
        Self::new(collected)
    }
}

/// Flattens the derive-generated constraint errors into [`FieldError`]s.
pub(crate) fn constraint_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut collected = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let violation = match &*error.code {
                "email" => Violation::InvalidEmail,
                "range" => Violation::OutOfRange {
                    min: error.params.get("min").and_then(|v| v.as_f64()),
                    max: error.params.get("max").and_then(|v| v.as_f64()),
                },
                code => Violation::Constraint { code: code.to_string() },
            };

            collected.push(FieldError { field: field.to_string(), violation });
        }
    }

    collected
}
