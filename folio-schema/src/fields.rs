use serde_json::{Map, Value};
use validator::{Validate, ValidateEmail};

use crate::error::{FieldError, ValidationError, Violation, constraint_errors};

/// Reads typed fields out of a JSON object, collecting every violation instead of
/// stopping at the first.
///
/// Each accessor returns a placeholder when the field is unusable, so a record can still
/// be assembled and its derive constraints checked in [`FieldReader::finish`].
pub(crate) struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(raw: &'a Value) -> Result<Self, ValidationError> {
        match raw.as_object() {
            Some(object) => Ok(Self { object, errors: Vec::new() }),
            None => Err(ValidationError::single(
                "body",
                Violation::WrongType { expected: "an object" },
            )),
        }
    }

    fn fail(&mut self, field: &str, violation: Violation) {
        self.errors.push(FieldError { field: field.to_string(), violation });
    }

    /// The field's value; explicit `null` reads as absent.
    fn value(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    pub(crate) fn required_string(&mut self, field: &str) -> String {
        match self.object.get(field) {
            None => {
                self.fail(field, Violation::Missing);
                String::new()
            }
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.fail(field, Violation::WrongType { expected: "a string" });
                String::new()
            }
        }
    }

    pub(crate) fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.value(field)? {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.fail(field, Violation::WrongType { expected: "a string" });
                None
            }
        }
    }

    pub(crate) fn string_or(&mut self, field: &str, default: &str) -> String {
        self.optional_string(field)
            .unwrap_or_else(|| default.to_string())
    }

    pub(crate) fn string_list(&mut self, field: &str) -> Vec<String> {
        let Some(value) = self.value(field) else {
            return Vec::new();
        };

        let strings = value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        });

        match strings {
            Some(strings) => strings,
            None => {
                self.fail(field, Violation::WrongType { expected: "a list of strings" });
                Vec::new()
            }
        }
    }

    pub(crate) fn bool_or(&mut self, field: &str, default: bool) -> bool {
        match self.value(field) {
            None => default,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.fail(field, Violation::WrongType { expected: "a boolean" });
                default
            }
        }
    }

    pub(crate) fn optional_integer(&mut self, field: &str) -> Option<i64> {
        let value = self.value(field)?;

        match value.as_i64().or_else(|| integral(value)) {
            Some(n) => Some(n),
            None => {
                self.fail(field, Violation::WrongType { expected: "an integer" });
                None
            }
        }
    }

    pub(crate) fn integer_or(&mut self, field: &str, default: i64) -> i64 {
        self.optional_integer(field).unwrap_or(default)
    }

    pub(crate) fn required_number(&mut self, field: &str) -> f64 {
        match self.object.get(field) {
            None => {
                self.fail(field, Violation::Missing);
                0.0
            }
            Some(value) => match value.as_f64() {
                Some(n) => n,
                None => {
                    self.fail(field, Violation::WrongType { expected: "a number" });
                    0.0
                }
            },
        }
    }

    /// Runs the record's derive constraints and returns it if nothing was violated.
    ///
    /// Constraint failures on fields that already failed to read are dropped: the
    /// placeholder value would only repeat the same problem.
    pub(crate) fn finish<T: Validate>(mut self, record: T) -> Result<T, ValidationError> {
        if let Err(errors) = record.validate() {
            let mut constraints = constraint_errors(&errors)
                .into_iter()
                .filter(|error| !self.errors.iter().any(|e| e.field == error.field))
                .collect::<Vec<_>>();

            constraints.sort_by(|a, b| a.field.cmp(&b.field));
            self.errors.extend(constraints);
        }

        if self.errors.is_empty() {
            Ok(record)
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}

/// Email syntax check for record fields.
///
/// On top of the validator's syntax rule the domain must be a dotted host name, so
/// `ana@localhost` and address literals such as `ana@[127.0.0.1]` are rejected.
pub(crate) fn email_address(value: &str) -> Result<(), validator::ValidationError> {
    let dotted_host = value
        .rsplit_once('@')
        .is_some_and(|(_, domain)| !domain.starts_with('[') && domain.contains('.'));

    if dotted_host && value.validate_email() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("email"))
    }
}

/// Accepts floats with no fractional part, e.g. `5.0`.
fn integral(value: &Value) -> Option<i64> {
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64)
        .map(|n| n as i64)
}
