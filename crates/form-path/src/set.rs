use serde_json::{Map, Value};

use crate::types::{ContainerKind, Key, Path, ToPath};
use crate::{value_type_name, PathError};

/// Largest number of `null`s a write pads a sequence with to reach an
/// index past its end.
pub const MAX_INDEX_GAP: usize = 1 << 16;

/// Re-key a sequence as a mapping of decimal indices so it can take a
/// member name.
fn sequence_into_mapping(node: &mut Value) {
    if let Value::Array(arr) = std::mem::take(node) {
        let map: Map<String, Value> = arr
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect();
        *node = Value::Object(map);
    }
}

/// Slot for `key` inside the container `node`, created as `null` when
/// absent. Sequences are padded with `null` up to the index, at most
/// [`MAX_INDEX_GAP`] of them.
fn slot<'a>(node: &'a mut Value, key: &Key, path: &Path) -> Result<&'a mut Value, PathError> {
    if matches!((&*node, key), (Value::Array(_), Key::Field(_))) {
        tracing::debug!(%path, %key, "converting sequence to mapping for member key");
        sequence_into_mapping(node);
    }
    match (node, key) {
        (Value::Object(map), key) => Ok(map
            .entry(key.member_name().into_owned())
            .or_insert(Value::Null)),
        (Value::Array(arr), Key::Index(i)) => {
            let i = *i;
            if i >= arr.len() {
                let len = arr.len();
                let new_len = i
                    .checked_add(1)
                    .filter(|_| i - len <= MAX_INDEX_GAP)
                    .ok_or(PathError::IndexTooFar { index: i, len })?;
                arr.resize(new_len, Value::Null);
            }
            Ok(&mut arr[i])
        }
        (other, _) => Err(PathError::NonContainerRoot {
            found: value_type_name(other),
        }),
    }
}

/// Step into `key`, making sure the child is a container of `kind`
/// unless it already is some container.
fn descend<'a>(
    node: &'a mut Value,
    key: &Key,
    kind: ContainerKind,
    path: &Path,
) -> Result<&'a mut Value, PathError> {
    let child = slot(node, key, path)?;
    if ContainerKind::of(child).is_none() {
        if child.is_null() {
            tracing::trace!(%path, %key, container = %kind, "creating missing container");
        } else {
            tracing::debug!(
                %path,
                %key,
                replaced = value_type_name(child),
                container = %kind,
                "replacing leaf with empty container"
            );
        }
        *child = kind.empty();
    }
    Ok(child)
}

/// Make `target` usable as a root container.
fn prepare_root(target: &mut Value) -> Result<(), PathError> {
    if target.is_null() {
        *target = Value::Object(Map::new());
    }
    match ContainerKind::of(target) {
        Some(_) => Ok(()),
        None => Err(PathError::NonContainerRoot {
            found: value_type_name(target),
        }),
    }
}

/// Set a value at a path, mutating `target` in place.
///
/// Missing or leaf intermediate nodes are replaced with an empty
/// container chosen by the following key (sequence for an index, mapping
/// otherwise). A leaf found in the way is discarded. An empty path is a
/// no-op. A `null` root becomes an empty mapping.
///
/// # Errors
///
/// `PathError::NonContainerRoot` if the root is a string, number or
/// boolean and the path is not empty. `PathError::IndexTooFar` if an index
/// lies more than [`MAX_INDEX_GAP`] past the end of its sequence; the
/// target may then already hold the containers created before it.
///
/// # Example
///
/// ```
/// use form_path::set_mut;
/// use serde_json::json;
///
/// let mut doc = json!({"a": 5});
/// set_mut(&mut doc, "a.b", json!(1)).unwrap();
/// assert_eq!(doc, json!({"a": {"b": 1}}));
/// ```
pub fn set_mut<P: ToPath + ?Sized>(
    target: &mut Value,
    path: &P,
    value: Value,
) -> Result<(), PathError> {
    let path = path.to_path();
    let keys = path.keys();
    let Some(last) = keys.last() else {
        return Ok(());
    };
    prepare_root(target)?;

    let mut node = target;
    for pair in keys.windows(2) {
        node = descend(node, &pair[0], ContainerKind::for_key(&pair[1]), &path)?;
    }
    *slot(node, last, &path)? = value;
    Ok(())
}

/// Set a value at a path on a deep copy of `target`.
///
/// The input is left untouched; an absent target starts from an empty
/// mapping. Container creation follows [`set_mut`].
///
/// # Example
///
/// ```
/// use form_path::set;
/// use serde_json::json;
///
/// let out = set(None, "a.0.b", json!("v")).unwrap();
/// assert_eq!(out, json!({"a": [{"b": "v"}]}));
/// ```
pub fn set<P: ToPath + ?Sized>(
    target: Option<&Value>,
    path: &P,
    value: Value,
) -> Result<Value, PathError> {
    let mut root = match target {
        Some(target) => target.clone(),
        None => Value::Object(Map::new()),
    };
    set_mut(&mut root, path, value)?;
    Ok(root)
}

/// Make sure a container exists at `path`, creating it as `kind` when
/// the node is missing or a leaf. Intermediates follow [`set_mut`];
/// existing containers are kept. The empty path addresses the root.
///
/// Returns `Ok(None)` without touching the node when the walk meets a
/// sequence that would need a member name. Unlike [`set_mut`], the
/// sequence is not re-keyed.
pub fn ensure_container<'a, P: ToPath + ?Sized>(
    target: &'a mut Value,
    path: &P,
    kind: ContainerKind,
) -> Result<Option<&'a mut Value>, PathError> {
    let path = path.to_path();
    prepare_root(target)?;
    let keys = path.keys();
    let mut node = target;
    for (i, key) in keys.iter().enumerate() {
        if matches!((&*node, key), (Value::Array(_), Key::Field(_))) {
            tracing::trace!(%path, %key, "sequence cannot take a member key");
            return Ok(None);
        }
        let next_kind = keys.get(i + 1).map_or(kind, ContainerKind::for_key);
        node = descend(node, key, next_kind, &path)?;
    }
    Ok(Some(node))
}
