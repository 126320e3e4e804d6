use form_path::{
    ensure_container, get, set_mut, value_type_name, ContainerKind, Key, Path, PathError,
};
use serde_json::{Map, Value};

use crate::accessor::Accessor;

/// Read-write capture bound to a form data tree.
///
/// Each step makes sure the tree has a container where the chain so far
/// points, so a deep path can be probed before it exists. The container
/// is a sequence when the new key is an index and a mapping otherwise;
/// this is the same rule [`form_path::set_mut`] applies. Existing
/// containers are never changed by stepping: below a sequence reached
/// with a member name no placeholders are created.
///
/// # Example
///
/// ```
/// use form_capture::{Accessor, BoundCapture};
/// use serde_json::json;
///
/// let mut data = json!({});
/// let keys = BoundCapture::bind(&mut data)
///     .unwrap()
///     .field("user")
///     .field("name")
///     .field("first")
///     .set(json!("Ann"))
///     .unwrap();
/// assert_eq!(keys.to_string(), "user.name.first");
/// assert_eq!(data, json!({"user": {"name": {"first": "Ann"}}}));
/// ```
#[derive(Debug)]
pub struct BoundCapture<'t> {
    target: &'t mut Value,
    path: Path,
    error: Option<PathError>,
}

impl<'t> BoundCapture<'t> {
    /// Bind a capture to `target`.
    ///
    /// A `null` target becomes an empty mapping.
    ///
    /// # Errors
    ///
    /// `PathError::NonContainerRoot` if `target` is a string, number or
    /// boolean.
    pub fn bind(target: &'t mut Value) -> Result<Self, PathError> {
        if target.is_null() {
            *target = Value::Object(Map::new());
        }
        if ContainerKind::of(target).is_none() {
            return Err(PathError::NonContainerRoot {
                found: value_type_name(target),
            });
        }
        Ok(Self {
            target,
            path: Path::root(),
            error: None,
        })
    }

    /// The chain recorded so far.
    pub fn peek(&self) -> &Path {
        &self.path
    }

    /// Finish without writing and return the recorded chain.
    pub fn keys(self) -> Path {
        self.path
    }

    /// Finish by reading the current value at the chain.
    ///
    /// Returns `None` for the empty chain or a missing value. Nothing is
    /// written beyond the placeholders created while stepping.
    pub fn get(self) -> Option<&'t Value> {
        let target: &'t Value = self.target;
        get(target, &self.path)
    }

    /// Finish by writing `value` at the chain and return the chain.
    ///
    /// Writing on the empty chain is a no-op.
    ///
    /// # Errors
    ///
    /// The first error met while creating placeholders, such as an index
    /// too far past the end of a sequence, or the error of the write.
    pub fn set(self, value: Value) -> Result<Path, PathError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        set_mut(self.target, &self.path, value)?;
        Ok(self.path)
    }
}

impl Accessor for BoundCapture<'_> {
    fn step(mut self, key: Key) -> Self {
        if self.error.is_none() {
            let kind = ContainerKind::for_key(&key);
            match ensure_container(&mut *self.target, &self.path, kind) {
                Ok(Some(_)) => {}
                Ok(None) => {
                    tracing::trace!(path = %self.path, %key, "no placeholder below sequence");
                }
                Err(err) => {
                    tracing::debug!(path = %self.path, %err, "placeholder creation failed");
                    self.error = Some(err);
                }
            }
        }
        self.path.push(key);
        self
    }
}
