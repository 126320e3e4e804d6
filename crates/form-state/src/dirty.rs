//! Dirty-field detection: which leaves differ between two data trees.

use std::collections::BTreeSet;

use form_path::{Key, Path};
use serde_json::{Map, Value};

/// Paths of every leaf where `current` differs from `initial`.
///
/// Containers present on both sides are walked; a value present on one
/// side only, or a change of shape, is reported at the path where it
/// happens. Mapping members that look numeric are reported as indices,
/// matching string path canonicalization.
pub fn dirty_paths(initial: &Value, current: &Value) -> Vec<Path> {
    let mut out = Vec::new();
    diff_at(&mut out, &mut Path::root(), Some(initial), Some(current));
    out
}

fn diff_at(out: &mut Vec<Path>, path: &mut Path, src: Option<&Value>, dst: Option<&Value>) {
    if src == dst {
        return;
    }
    match (src, dst) {
        (Some(Value::Object(s)), Some(Value::Object(d))) => diff_obj(out, path, s, d),
        (Some(Value::Array(s)), Some(Value::Array(d))) => diff_arr(out, path, s, d),
        _ => out.push(path.clone()),
    }
}

fn diff_obj(
    out: &mut Vec<Path>,
    path: &mut Path,
    src: &Map<String, Value>,
    dst: &Map<String, Value>,
) {
    let keys: BTreeSet<&String> = src.keys().chain(dst.keys()).collect();
    for key in keys {
        path.push(Key::parse(key));
        diff_at(out, path, src.get(key), dst.get(key));
        path.pop();
    }
}

fn diff_arr(out: &mut Vec<Path>, path: &mut Path, src: &[Value], dst: &[Value]) {
    for i in 0..src.len().max(dst.len()) {
        path.push(Key::Index(i));
        diff_at(out, path, src.get(i), dst.get(i));
        path.pop();
    }
}
