//! Type definitions for form paths.

use std::borrow::Cow;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::util::{is_index_key, parse_path};

/// A step in a form path.
///
/// Either a member name of a mapping or an index into a sequence.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Mapping member access: `user.name`
    Field(String),
    /// Sequence index access: `items[0]` or `items.0`
    Index(usize),
}

impl Key {
    /// Create a field key.
    #[inline]
    pub fn field(name: impl Into<String>) -> Self {
        Key::Field(name.into())
    }

    /// Classify a raw segment: numeric-looking segments become indices,
    /// everything else is a field name.
    ///
    /// # Example
    ///
    /// ```
    /// use form_path::Key;
    ///
    /// assert_eq!(Key::parse("0"), Key::Index(0));
    /// assert_eq!(Key::parse("01"), Key::field("01"));
    /// assert_eq!(Key::parse("a1"), Key::field("a1"));
    /// ```
    pub fn parse(segment: &str) -> Self {
        if is_index_key(segment) {
            if let Ok(index) = segment.parse() {
                return Key::Index(index);
            }
        }
        Key::Field(segment.to_string())
    }

    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    #[inline]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Key::Field(name) => Some(name),
            Key::Index(_) => None,
        }
    }

    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Field(_) => None,
            Key::Index(i) => Some(*i),
        }
    }

    /// The member name this key addresses inside a mapping.
    ///
    /// Indices address the member named by their decimal form.
    pub fn member_name(&self) -> Cow<'_, str> {
        match self {
            Key::Field(name) => Cow::Borrowed(name),
            Key::Index(i) => Cow::Owned(i.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Field(name) => f.write_str(name),
            Key::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Field(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Field(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

/// Kind of empty container created for a missing intermediate node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Mapping,
    Sequence,
}

impl ContainerKind {
    /// The container a node must be to hold `next`.
    ///
    /// Both the resolver and the read-write capture decide through this
    /// function, so they never disagree.
    #[inline]
    pub fn for_key(next: &Key) -> Self {
        match next {
            Key::Index(_) => ContainerKind::Sequence,
            Key::Field(_) => ContainerKind::Mapping,
        }
    }

    /// Create an empty container of this kind.
    pub fn empty(self) -> Value {
        match self {
            ContainerKind::Mapping => Value::Object(Map::new()),
            ContainerKind::Sequence => Value::Array(Vec::new()),
        }
    }

    /// Kind of `value`, or `None` if it is a leaf.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) => Some(ContainerKind::Mapping),
            Value::Array(_) => Some(ContainerKind::Sequence),
            _ => None,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Mapping => f.write_str("mapping"),
            ContainerKind::Sequence => f.write_str("sequence"),
        }
    }
}

/// An ordered list of keys locating a value inside form data.
///
/// # Example
///
/// ```
/// use form_path::{Key, Path};
///
/// let path = Path::root().key("users").index(0).key("name");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "users[0].name");
/// assert_eq!(Path::parse("users.0.name"), path);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<Key>);

impl Path {
    /// Create an empty path.
    #[inline]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Canonicalize a dot/bracket string path.
    #[inline]
    pub fn parse(path: &str) -> Self {
        parse_path(path)
    }

    #[inline]
    pub fn from_keys(keys: Vec<Key>) -> Self {
        Self(keys)
    }

    /// Append a field key (builder).
    #[inline]
    pub fn key(mut self, name: impl Into<String>) -> Self {
        self.0.push(Key::Field(name.into()));
        self
    }

    /// Append an index key (builder).
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Key::Index(i));
        self
    }

    #[inline]
    pub fn push(&mut self, key: Key) {
        self.0.push(key);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Key> {
        self.0.pop()
    }

    #[inline]
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    #[inline]
    pub fn into_keys(self) -> Vec<Key> {
        self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn last(&self) -> Option<&Key> {
        self.0.last()
    }

    /// Path without its last key, or `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        if self.0.is_empty() {
            return None;
        }
        Some(Path(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Append `key`, returning a new path.
    pub fn child(&self, key: Key) -> Path {
        let mut out = self.clone();
        out.0.push(key);
        out
    }

    pub fn join(&self, other: &Path) -> Path {
        let mut out = self.clone();
        out.0.extend(other.0.iter().cloned());
        out
    }

    /// A path is a prefix of itself.
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        other.0.starts_with(&self.0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            match key {
                Key::Index(idx) => write!(f, "[{}]", idx)?,
                Key::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
            }
        }
        Ok(())
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Path(keys)
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        parse_path(path)
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Key;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PathVisitor;

        impl<'de> Visitor<'de> for PathVisitor {
            type Value = Path;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a dot/bracket path string or a list of keys")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Path, E> {
                Ok(parse_path(v))
            }

            // Explicit key lists: strings are member names, non-negative
            // integers are indices.
            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Path, A::Error> {
                let mut path = Path::root();
                while let Some(step) = seq.next_element::<Value>()? {
                    let key = match step {
                        Value::String(name) => Key::Field(name),
                        Value::Number(n) => match n.as_u64().and_then(|i| usize::try_from(i).ok()) {
                            Some(i) => Key::Index(i),
                            None => {
                                return Err(de::Error::invalid_value(
                                    de::Unexpected::Other("non-index number"),
                                    &self,
                                ))
                            }
                        },
                        other => {
                            return Err(de::Error::invalid_type(
                                de::Unexpected::Other(crate::value_type_name(&other)),
                                &self,
                            ))
                        }
                    };
                    path.push(key);
                }
                Ok(path)
            }
        }

        deserializer.deserialize_any(PathVisitor)
    }
}

/// Anything that can be canonicalized into a [`Path`].
///
/// String forms are parsed; key lists are borrowed as-is.
pub trait ToPath {
    fn to_path(&self) -> Cow<'_, Path>;
}

impl ToPath for str {
    fn to_path(&self) -> Cow<'_, Path> {
        Cow::Owned(parse_path(self))
    }
}

impl ToPath for String {
    fn to_path(&self) -> Cow<'_, Path> {
        Cow::Owned(parse_path(self))
    }
}

impl ToPath for Path {
    fn to_path(&self) -> Cow<'_, Path> {
        Cow::Borrowed(self)
    }
}

impl ToPath for [Key] {
    fn to_path(&self) -> Cow<'_, Path> {
        Cow::Owned(Path(self.to_vec()))
    }
}

impl ToPath for Vec<Key> {
    fn to_path(&self) -> Cow<'_, Path> {
        self.as_slice().to_path()
    }
}

impl<T: ToPath + ?Sized> ToPath for &T {
    fn to_path(&self) -> Cow<'_, Path> {
        (**self).to_path()
    }
}
