use std::collections::BTreeSet;

use form_capture::{capture, BoundCapture, KeyCapture};
use form_path::{get, get_mut, read, set, set_mut, Key, Path, ToPath};
use serde_json::Value;

use crate::dirty::dirty_paths;
use crate::options::{FormOptions, ValidateOn};
use crate::validate::{FieldErrors, NoValidation, Validation, Validator};
use crate::FormError;

/// State of one form: its data, the snapshot it started from, which
/// fields were touched and the errors reported by the validator.
///
/// # Example
///
/// ```
/// use form_state::FormStore;
/// use serde_json::json;
///
/// let mut form = FormStore::new(json!({"user": {"name": "Ann"}}));
/// assert!(!form.is_dirty());
///
/// form.set_value("user.name", json!("Bo")).unwrap();
/// assert!(form.is_field_dirty("user.name"));
/// assert_eq!(form.value("user.name"), Some(&json!("Bo")));
///
/// form.reset();
/// assert_eq!(form.value("user.name"), Some(&json!("Ann")));
/// ```
#[derive(Debug, Clone)]
pub struct FormStore<V = NoValidation> {
    initial: Value,
    data: Value,
    touched: BTreeSet<Path>,
    errors: FieldErrors,
    validator: V,
    options: FormOptions,
}

impl FormStore<NoValidation> {
    pub fn new(initial: Value) -> Self {
        Self {
            data: initial.clone(),
            initial,
            touched: BTreeSet::new(),
            errors: FieldErrors::default(),
            validator: NoValidation,
            options: FormOptions::default(),
        }
    }
}

impl<V: Validator> FormStore<V> {
    /// Replace the validator, keeping data and tracking state.
    pub fn with_validator<W: Validator>(self, validator: W) -> FormStore<W> {
        FormStore {
            initial: self.initial,
            data: self.data,
            touched: self.touched,
            errors: self.errors,
            validator,
            options: self.options,
        }
    }

    pub fn with_options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn initial(&self) -> &Value {
        &self.initial
    }

    // ── Values ──────────────────────────────────────────────────────────

    pub fn value<P: ToPath + ?Sized>(&self, path: &P) -> Option<&Value> {
        get(&self.data, path)
    }

    pub fn value_or<P: ToPath + ?Sized>(&self, path: &P, default: Value) -> Value {
        read(Some(&self.data), path, default)
    }

    /// Read a field located with a key capture.
    pub fn field_value<F>(&self, select: F) -> Option<&Value>
    where
        F: FnOnce(KeyCapture) -> KeyCapture,
    {
        get(&self.data, &capture(select))
    }

    /// Set a field value.
    ///
    /// The next data tree is built as a copy, so a failed write leaves the
    /// store unchanged.
    pub fn set_value<P: ToPath + ?Sized>(
        &mut self,
        path: &P,
        value: Value,
    ) -> Result<(), FormError> {
        let path = path.to_path().into_owned();
        self.data = set(Some(&self.data), &path, value)?;
        self.changed(path);
        Ok(())
    }

    /// Set a field located with a read-write capture over the data.
    ///
    /// Returns the captured path.
    pub fn update<F>(&mut self, select: F, value: Value) -> Result<Path, FormError>
    where
        F: for<'t> FnOnce(BoundCapture<'t>) -> BoundCapture<'t>,
    {
        let path = select(BoundCapture::bind(&mut self.data)?).set(value)?;
        self.changed(path.clone());
        Ok(path)
    }

    fn changed(&mut self, path: Path) {
        tracing::trace!(%path, "field changed");
        if self.options.clear_errors_on_change {
            self.errors.clear_under(&path);
        }
        self.touched.insert(path);
        if self.options.validate_on == ValidateOn::Change {
            self.validate();
        }
    }

    // ── Dirty / touched ─────────────────────────────────────────────────

    pub fn is_dirty(&self) -> bool {
        self.data != self.initial
    }

    /// Whether the value at `path` differs from the initial value there.
    /// A value present on only one side counts as dirty.
    pub fn is_field_dirty<P: ToPath + ?Sized>(&self, path: &P) -> bool {
        let path = path.to_path();
        if path.is_empty() {
            return self.is_dirty();
        }
        get(&self.data, &*path) != get(&self.initial, &*path)
    }

    pub fn dirty_fields(&self) -> Vec<Path> {
        dirty_paths(&self.initial, &self.data)
    }

    pub fn touch<P: ToPath + ?Sized>(&mut self, path: &P) {
        self.touched.insert(path.to_path().into_owned());
    }

    /// Whether `path` or a field below it was touched.
    pub fn is_touched<P: ToPath + ?Sized>(&self, path: &P) -> bool {
        let path = path.to_path();
        self.touched.iter().any(|t| path.is_prefix_of(t))
    }

    pub fn touched_fields(&self) -> impl Iterator<Item = &Path> {
        self.touched.iter()
    }

    // ── Validation ──────────────────────────────────────────────────────

    /// Run the validator and replace the field errors with its issues.
    /// Returns whether the data is valid.
    pub fn validate(&mut self) -> bool {
        match self.validator.validate(&self.data) {
            Validation::Success(_) => {
                tracing::debug!("form valid");
                self.errors.clear();
                true
            }
            Validation::Failure(issues) => {
                tracing::debug!(issues = issues.len(), "form invalid");
                self.errors = FieldErrors::from_issues(issues);
                false
            }
        }
    }

    pub fn errors<P: ToPath + ?Sized>(&self, path: &P) -> &[String] {
        self.errors.get(&path.to_path())
    }

    pub fn all_errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the last validation left no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Validate and hand out the validated data.
    ///
    /// # Errors
    ///
    /// `FormError::Invalid` with the validator's issues; they are also
    /// filed as field errors.
    pub fn submit(&mut self) -> Result<Value, FormError> {
        match self.validator.validate(&self.data) {
            Validation::Success(data) => {
                tracing::debug!("form submitted");
                self.errors.clear();
                Ok(data)
            }
            Validation::Failure(issues) => {
                tracing::debug!(issues = issues.len(), "form submit rejected");
                self.errors = FieldErrors::from_issues(issues.iter().cloned());
                Err(FormError::Invalid { issues })
            }
        }
    }

    // ── Reset ───────────────────────────────────────────────────────────

    /// Restore data to the initial snapshot and forget touched fields and
    /// errors.
    pub fn reset(&mut self) {
        tracing::debug!("form reset");
        self.data = self.initial.clone();
        self.touched.clear();
        self.errors.clear();
    }

    /// Make `initial` the new snapshot and reset to it.
    pub fn reset_to(&mut self, initial: Value) {
        self.initial = initial;
        self.reset();
    }

    /// Restore one field to its initial value, in place.
    ///
    /// A field the initial snapshot does not have is removed from its
    /// mapping; a sequence slot is set to `null` instead so that later
    /// indices keep their position. The empty path resets the whole form.
    pub fn reset_field<P: ToPath + ?Sized>(&mut self, path: &P) -> Result<(), FormError> {
        let path = path.to_path().into_owned();
        if path.is_empty() {
            self.reset();
            return Ok(());
        }
        match get(&self.initial, &path) {
            Some(initial) => set_mut(&mut self.data, &path, initial.clone())?,
            None => remove(&mut self.data, &path),
        }
        self.touched.retain(|t| !path.is_prefix_of(t));
        self.errors.clear_under(&path);
        tracing::trace!(%path, "field reset");
        Ok(())
    }
}

fn remove(data: &mut Value, path: &Path) {
    let (Some(last), Some(parent)) = (path.last(), path.parent()) else {
        return;
    };
    let container = if parent.is_empty() {
        Some(data)
    } else {
        get_mut(data, &parent)
    };
    match (container, last) {
        (Some(Value::Object(map)), key) => {
            map.remove(&*key.member_name());
        }
        (Some(Value::Array(arr)), Key::Index(i)) => {
            if let Some(slot) = arr.get_mut(*i) {
                *slot = Value::Null;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Issue;
    use serde_json::json;

    #[test]
    fn test_set_value_marks_touched_and_dirty() {
        let mut form = FormStore::new(json!({"a": 1}));
        form.set_value("b.c", json!(2)).unwrap();
        assert!(form.is_touched("b"));
        assert!(form.is_touched("b.c"));
        assert!(!form.is_touched("a"));
        assert!(form.is_field_dirty("b.c"));
        assert!(!form.is_field_dirty("a"));
        assert_eq!(form.dirty_fields(), vec![Path::parse("b")]);
    }

    #[test]
    fn test_set_value_rejects_leaf_root() {
        let mut form = FormStore::new(json!("scalar"));
        let err = form.set_value("a", json!(1)).unwrap_err();
        assert!(matches!(err, FormError::Path(_)));
        assert_eq!(form.data(), &json!("scalar"));
        assert_eq!(form.touched_fields().count(), 0);
    }

    #[test]
    fn test_update_through_capture() {
        use form_capture::Accessor;

        let mut form = FormStore::new(json!({}));
        let path = form
            .update(|f| f.field("items").index(0).field("qty"), json!(3))
            .unwrap();
        assert_eq!(path.to_string(), "items[0].qty");
        assert_eq!(form.data(), &json!({"items": [{"qty": 3}]}));
        assert_eq!(
            form.field_value(|f| f.field("items").index(0).field("qty")),
            Some(&json!(3))
        );
    }

    #[test]
    fn test_reset_field_restores_or_removes() {
        let mut form = FormStore::new(json!({"a": 1, "list": [1, 2]}));
        form.set_value("a", json!(5)).unwrap();
        form.set_value("b", json!(6)).unwrap();
        form.set_value("list[1]", json!(9)).unwrap();
        form.set_value("list[2]", json!(10)).unwrap();

        form.reset_field("a").unwrap();
        form.reset_field("b").unwrap();
        form.reset_field("list[1]").unwrap();
        form.reset_field("list[2]").unwrap();

        assert_eq!(form.data(), &json!({"a": 1, "list": [1, 2, null]}));
        assert!(!form.is_touched("a"));
        assert!(!form.is_touched("b"));
    }

    #[test]
    fn test_reset_field_on_empty_path_resets_form() {
        let validator = |_: &Value| Validation::Failure(vec![Issue::new("a", "bad")]);
        let mut form = FormStore::new(json!({"a": 1})).with_validator(validator);
        form.set_value("a", json!(2)).unwrap();
        assert!(!form.validate());

        form.reset_field("").unwrap();
        assert_eq!(form.data(), &json!({"a": 1}));
        assert_eq!(form.touched_fields().count(), 0);
        assert!(form.is_valid());
    }

    #[test]
    fn test_reset_to_new_snapshot() {
        let mut form = FormStore::new(json!({"a": 1}));
        form.set_value("a", json!(2)).unwrap();
        form.reset_to(json!({"a": 3}));
        assert_eq!(form.value("a"), Some(&json!(3)));
        assert!(!form.is_dirty());
        assert_eq!(form.touched_fields().count(), 0);
    }
}
