use form_path::{Key, Path};

use crate::accessor::Accessor;

/// Key-only capture: records which path the caller meant without
/// touching any data.
///
/// # Example
///
/// ```
/// use form_capture::{Accessor, KeyCapture};
/// use form_path::Path;
///
/// let keys = KeyCapture::new().field("user").field("name").field("first").keys();
/// assert_eq!(keys, Path::root().key("user").key("name").key("first"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyCapture {
    path: Path,
}

impl KeyCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain recorded so far, without finishing the capture.
    pub fn peek(&self) -> &Path {
        &self.path
    }

    /// Finish the capture and return the recorded chain.
    pub fn keys(self) -> Path {
        self.path
    }
}

impl Accessor for KeyCapture {
    fn step(mut self, key: Key) -> Self {
        self.path.push(key);
        self
    }
}

/// Capture a path from an accessor chain.
///
/// ```
/// use form_capture::{capture, Accessor};
///
/// let path = capture(|f| f.field("items").index(2).field("qty"));
/// assert_eq!(path.to_string(), "items[2].qty");
/// ```
pub fn capture<F>(f: F) -> Path
where
    F: FnOnce(KeyCapture) -> KeyCapture,
{
    f(KeyCapture::new()).keys()
}
