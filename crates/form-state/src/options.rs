//! Store configuration.

use serde::{Deserialize, Serialize};

use crate::FormError;

/// When the store runs its validator on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidateOn {
    /// After every field change.
    Change,
    /// Only on explicit `validate()` / `submit()`.
    #[default]
    Submit,
}

/// Options controlling a [`FormStore`](crate::FormStore).
///
/// Every field has a default, so persisted configuration only needs to name
/// what it overrides:
///
/// ```
/// use form_state::{FormOptions, ValidateOn};
///
/// let options = FormOptions::from_json(r#"{"validateOn": "change"}"#).unwrap();
/// assert_eq!(options.validate_on, ValidateOn::Change);
/// assert!(options.clear_errors_on_change);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormOptions {
    pub validate_on: ValidateOn,
    /// Drop the errors of a field (and its children) when it changes.
    pub clear_errors_on_change: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            validate_on: ValidateOn::Submit,
            clear_errors_on_change: true,
        }
    }
}

impl FormOptions {
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormOptions::default();
        assert_eq!(options.validate_on, ValidateOn::Submit);
        assert!(options.clear_errors_on_change);
        assert_eq!(FormOptions::from_json("{}").unwrap(), options);
    }

    #[test]
    fn test_from_json_overrides() {
        let options =
            FormOptions::from_json(r#"{"validateOn": "change", "clearErrorsOnChange": false}"#)
                .unwrap();
        assert_eq!(
            options,
            FormOptions {
                validate_on: ValidateOn::Change,
                clear_errors_on_change: false,
            }
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_mode() {
        let err = FormOptions::from_json(r#"{"validateOn": "blur"}"#).unwrap_err();
        assert!(matches!(err, FormError::Options(_)));
    }
}
