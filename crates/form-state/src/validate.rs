//! Schema validation contract and per-field errors.
//!
//! The store does not know any validation rules. It hands the whole data
//! tree to a [`Validator`] and files the returned issues under their paths.

use std::collections::BTreeMap;

use form_path::Path;
use serde::{de, Deserialize, Serialize};
use serde_json::Value;

/// One complaint from a validator, bound to the field it is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub path: Path,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<Path>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating a data tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Valid; carries the (possibly coerced) data.
    Success(Value),
    Failure(Vec<Issue>),
}

#[derive(Deserialize)]
struct Report {
    success: bool,
    data: Option<Value>,
    #[serde(default)]
    issues: Vec<Issue>,
}

impl Validation {
    /// Read a validator report of the shape
    /// `{"success": true, "data": ...}` or
    /// `{"success": false, "issues": [{"path": ..., "message": ...}]}`.
    ///
    /// Issue paths may be strings (`"a.b[0]"`) or key lists
    /// (`["a", "b", 0]`).
    ///
    /// A successful report must carry `data`; an explicit `null` is kept.
    pub fn from_report(report: Value) -> Result<Self, serde_json::Error> {
        let report: Report = serde_json::from_value(report)?;
        if !report.success {
            return Ok(Validation::Failure(report.issues));
        }
        match report.data {
            Some(data) => Ok(Validation::Success(data)),
            None => Err(de::Error::missing_field("data")),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }
}

/// The schema collaborator.
pub trait Validator {
    fn validate(&self, value: &Value) -> Validation;
}

impl<F> Validator for F
where
    F: Fn(&Value) -> Validation,
{
    fn validate(&self, value: &Value) -> Validation {
        self(value)
    }
}

/// Accepts everything unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoValidation;

impl Validator for NoValidation {
    fn validate(&self, value: &Value) -> Validation {
        Validation::Success(value.clone())
    }
}

/// Error messages filed by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    by_path: BTreeMap<Path, Vec<String>>,
}

impl FieldErrors {
    pub fn from_issues(issues: impl IntoIterator<Item = Issue>) -> Self {
        let mut errors = Self::default();
        for issue in issues {
            errors.by_path.entry(issue.path).or_default().push(issue.message);
        }
        errors
    }

    /// Messages filed exactly under `path`.
    pub fn get(&self, path: &Path) -> &[String] {
        self.by_path.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `path` or anything below it has errors.
    pub fn has_errors_under(&self, path: &Path) -> bool {
        self.by_path.keys().any(|p| path.is_prefix_of(p))
    }

    /// Drop the errors of `path` and everything below it.
    pub fn clear_under(&mut self, path: &Path) {
        self.by_path.retain(|p, _| !path.is_prefix_of(p));
    }

    pub fn clear(&mut self) {
        self.by_path.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[String])> {
        self.by_path.iter().map(|(p, m)| (p, m.as_slice()))
    }
}
