//! Path addressing for form data.
//!
//! Form values live in a `serde_json::Value` tree. A path locates a value
//! in that tree and is written either as a string (`user.tags[0]` or
//! `user.tags.0`) or as an explicit list of [`Key`]s.
//!
//! # Example
//!
//! ```
//! use form_path::{read, set, Path};
//! use serde_json::json;
//!
//! // Canonicalize a string path into keys
//! let path = Path::parse("user.tags.0");
//! assert_eq!(path, Path::root().key("user").key("tags").index(0));
//!
//! // Write on a copy, creating the sequence because the next key is numeric
//! let doc = set(Some(&json!({})), &path, json!("admin")).unwrap();
//! assert_eq!(doc, json!({"user": {"tags": ["admin"]}}));
//!
//! // Read back, with a default for anything missing
//! assert_eq!(read(Some(&doc), "user.tags[0]", json!(null)), json!("admin"));
//! assert_eq!(read(Some(&doc), "user.name", json!("anon")), json!("anon"));
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod get;
pub mod set;
pub mod types;
pub mod util;

pub use get::{get, get_mut, read};
pub use set::{ensure_container, set, set_mut, MAX_INDEX_GAP};
pub use types::{ContainerKind, Key, Path, ToPath};
pub use util::{format_path, is_child, is_index_key, parse_path};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The write target is a leaf and cannot hold keys.
    #[error("cannot write into {found} root")]
    NonContainerRoot { found: &'static str },
    /// A sequence write would pad more than [`MAX_INDEX_GAP`] `null`s.
    #[error("index {index} is too far past the end of a sequence of length {len}")]
    IndexTooFar { index: usize, len: usize },
}

/// Human readable name of a value's type.
pub fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_type_name() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(1)), "number");
        assert_eq!(value_type_name(&json!([])), "array");
        assert_eq!(value_type_name(&json!({})), "object");
    }

    #[test]
    fn test_error_display() {
        let err = PathError::NonContainerRoot { found: "number" };
        assert_eq!(err.to_string(), "cannot write into number root");
        let err = PathError::IndexTooFar { index: 9, len: 2 };
        assert_eq!(
            err.to_string(),
            "index 9 is too far past the end of a sequence of length 2"
        );
    }
}
