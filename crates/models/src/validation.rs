//! Presence/type checks shared by the record schemas.
//!
//! The schemas walk an untrusted `serde_json::Value` and collect every failing
//! field instead of stopping at the first one.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FieldIssue {
    Missing,
    WrongType { expected: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path, e.g. `jobPreferences.location` or `skills.2`. Empty for the payload itself.
    pub field: String,
    #[serde(flatten)]
    pub issue: FieldIssue,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.issue, self.field.is_empty()) {
            (FieldIssue::WrongType { expected }, true) => write!(f, "payload must be a JSON {expected}"),
            (FieldIssue::Missing, true) => write!(f, "payload is required"),
            (FieldIssue::Missing, false) => write!(f, "`{}` is required", self.field),
            (FieldIssue::WrongType { expected }, false) => {
                write!(f, "`{}` must be {}", self.field, expected)
            }
        }
    }
}

/// All field failures of one payload, tagged with the record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub entity: &'static str,
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether `field` is among the failures.
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: ", self.entity)?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Accumulates field errors while reading a payload.
pub(crate) struct Checker {
    entity: &'static str,
    errors: Vec<FieldError>,
}

impl Checker {
    pub(crate) fn new(entity: &'static str) -> Self {
        Self { entity, errors: Vec::new() }
    }

    fn push(&mut self, field: String, issue: FieldIssue) {
        self.errors.push(FieldError { field, issue });
    }

    /// The payload root must be an object.
    pub(crate) fn root<'a>(&mut self, payload: &'a Value) -> Option<&'a Map<String, Value>> {
        match payload {
            Value::Object(map) => Some(map),
            _ => {
                self.push(String::new(), FieldIssue::WrongType { expected: "object" });
                None
            }
        }
    }

    /// Required string; `null` and `""` count as absent.
    pub(crate) fn string(&mut self, obj: Option<&Map<String, Value>>, prefix: &str, key: &str) -> Option<String> {
        match obj.and_then(|o| o.get(key)) {
            None | Some(Value::Null) => {
                self.push(path(prefix, key), FieldIssue::Missing);
                None
            }
            Some(Value::String(s)) if s.is_empty() => {
                self.push(path(prefix, key), FieldIssue::Missing);
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(path(prefix, key), FieldIssue::WrongType { expected: "a string" });
                None
            }
        }
    }

    /// Required array whose every element is a string. An empty array is accepted.
    pub(crate) fn string_list(&mut self, obj: Option<&Map<String, Value>>, prefix: &str, key: &str) -> Option<Vec<String>> {
        let field = path(prefix, key);
        match obj.and_then(|o| o.get(key)) {
            None | Some(Value::Null) => {
                self.push(field, FieldIssue::Missing);
                None
            }
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                let before = self.errors.len();
                for (i, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => out.push(s.clone()),
                        _ => self.push(format!("{field}.{i}"), FieldIssue::WrongType { expected: "a string" }),
                    }
                }
                (self.errors.len() == before).then_some(out)
            }
            Some(_) => {
                self.push(field, FieldIssue::WrongType { expected: "an array of strings" });
                None
            }
        }
    }

    /// Nested object. Absent yields `Ok(None)` so the caller still reports each sub-field;
    /// a non-object value is reported here and yields `Err(())`.
    pub(crate) fn object<'a>(
        &mut self,
        obj: Option<&'a Map<String, Value>>,
        prefix: &str,
        key: &str,
    ) -> Result<Option<&'a Map<String, Value>>, ()> {
        match obj.and_then(|o| o.get(key)) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(inner)) => Ok(Some(inner)),
            Some(_) => {
                self.push(path(prefix, key), FieldIssue::WrongType { expected: "an object" });
                Err(())
            }
        }
    }

    pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(v) if self.errors.is_empty() => Ok(v),
            _ => Err(ValidationErrors { entity: self.entity, errors: self.errors }),
        }
    }
}

fn path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() { key.to_string() } else { format!("{prefix}.{key}") }
}
