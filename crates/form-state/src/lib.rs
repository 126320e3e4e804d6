//! Form state on top of path addressing.
//!
//! A [`FormStore`] owns a form's data tree and the snapshot it started
//! from. It tracks which fields are dirty (differ from the snapshot) and
//! touched (were edited), runs a caller-supplied [`Validator`] and files its
//! issues as per-field errors.
//!
//! # Example
//!
//! ```
//! use form_state::{FormStore, Issue, Validation};
//! use serde_json::{json, Value};
//!
//! let require_email = |data: &Value| match data.get("email").and_then(Value::as_str) {
//!     Some(email) if email.contains('@') => Validation::Success(data.clone()),
//!     _ => Validation::Failure(vec![Issue::new("email", "Invalid email")]),
//! };
//!
//! let mut form = FormStore::new(json!({"email": ""})).with_validator(require_email);
//! assert!(form.submit().is_err());
//! assert_eq!(form.errors("email"), ["Invalid email"]);
//!
//! form.set_value("email", json!("ann@example.com")).unwrap();
//! assert!(form.errors("email").is_empty());
//! assert_eq!(form.submit().unwrap(), json!({"email": "ann@example.com"}));
//! ```

use form_path::PathError;
use thiserror::Error;

pub mod dirty;
pub mod options;
pub mod store;
pub mod validate;

pub use dirty::dirty_paths;
pub use options::{FormOptions, ValidateOn};
pub use store::FormStore;
pub use validate::{FieldErrors, Issue, NoValidation, Validation, Validator};

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("form has {} invalid field(s)", .issues.len())]
    Invalid { issues: Vec<Issue> },
    #[error("invalid form options: {0}")]
    Options(#[from] serde_json::Error),
}
