use form_path::Key;

/// A path expression under construction.
///
/// Every step consumes the accessor and returns the child accessor, so a
/// chain reads like nested property access. Terminal operations also
/// consume it; a finished accessor cannot be extended or finished again.
pub trait Accessor: Sized {
    /// Extend the recorded chain by `key`.
    fn step(self, key: Key) -> Self;

    /// Access a mapping member.
    fn field(self, name: impl Into<String>) -> Self {
        self.step(Key::Field(name.into()))
    }

    /// Access a sequence element.
    fn index(self, i: usize) -> Self {
        self.step(Key::Index(i))
    }

    /// Access by raw property name. Numeric-looking names (`"0"`, `"12"`)
    /// become indices, the same way string paths are canonicalized.
    fn key(self, raw: &str) -> Self {
        self.step(Key::parse(raw))
    }
}
