use serde_json::Value;

use crate::types::{Key, ToPath};

fn child<'a>(node: &'a Value, key: &Key) -> Option<&'a Value> {
    match (node, key) {
        (Value::Object(map), key) => map.get(&*key.member_name()),
        (Value::Array(arr), Key::Index(i)) => arr.get(*i),
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, key: &Key) -> Option<&'a mut Value> {
    match (node, key) {
        (Value::Object(map), key) => map.get_mut(&*key.member_name()),
        (Value::Array(arr), Key::Index(i)) => arr.get_mut(*i),
        _ => None,
    }
}

/// Get a value from form data by path.
///
/// Returns `None` if the path is empty or does not resolve. A leaf met
/// before the last key (including `null`) ends the walk.
pub fn get<'a, P: ToPath + ?Sized>(target: &'a Value, path: &P) -> Option<&'a Value> {
    let path = path.to_path();
    if path.is_empty() {
        return None;
    }
    let mut current = target;
    for key in path.iter() {
        current = child(current, key)?;
    }
    Some(current)
}

/// Get a mutable reference to a value in form data by path.
pub fn get_mut<'a, P: ToPath + ?Sized>(target: &'a mut Value, path: &P) -> Option<&'a mut Value> {
    let path = path.to_path();
    if path.is_empty() {
        return None;
    }
    let mut current = target;
    for key in path.iter() {
        current = child_mut(current, key)?;
    }
    Some(current)
}

/// Read a value from form data, falling back to `default`.
///
/// Absence is never an error: a missing target, an empty path and an
/// unresolved path all yield `default`.
pub fn read<P: ToPath + ?Sized>(target: Option<&Value>, path: &P, default: Value) -> Value {
    target
        .and_then(|target| get(target, path))
        .cloned()
        .unwrap_or(default)
}
