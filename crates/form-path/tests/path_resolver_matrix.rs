use form_path::{
    get, is_index_key, parse_path, read, set, set_mut, Key, Path, PathError, MAX_INDEX_GAP,
};
use serde_json::{json, Value};

#[test]
fn default_value_fallback_matrix() {
    let defaults = [json!("d"), json!(0), json!(null), json!([1]), json!({"k": true})];
    for d in defaults {
        assert_eq!(read(Some(&json!({})), "a.b.c", d.clone()), d);
        assert_eq!(read(None, "x", d.clone()), d);
    }
}

#[test]
fn container_inference_matrix() {
    let cases = [
        ("a.0.b", json!({"a": [{"b": "v"}]})),
        ("a[0].b", json!({"a": [{"b": "v"}]})),
        ("a.b", json!({"a": {"b": "v"}})),
        ("a.01.b", json!({"a": {"01": {"b": "v"}}})),
        ("a.a1", json!({"a": {"a1": "v"}})),
        ("a[0][1]", json!({"a": [[null, "v"]]})),
    ];
    for (path, expected) in cases {
        let out = set(Some(&json!({})), path, json!("v")).expect("write ok");
        assert_eq!(out, expected, "path: {}", path);
    }
}

#[test]
fn overwrite_on_conflict() {
    let out = set(Some(&json!({"a": 5})), "a.b", json!("v")).unwrap();
    assert_eq!(out, json!({"a": {"b": "v"}}));

    let mut doc = json!({"a": "text", "keep": 1});
    set_mut(&mut doc, "a.0", json!(true)).unwrap();
    assert_eq!(doc, json!({"a": [true], "keep": 1}));
}

#[test]
fn empty_path_is_noop() {
    let doc = json!({"a": [1, 2]});
    assert_eq!(set(Some(&doc), &Path::root(), json!("v")).unwrap(), doc);
    assert_eq!(set(Some(&doc), &Vec::<Key>::new(), json!("v")).unwrap(), doc);
    assert_eq!(set(Some(&doc), "..", json!("v")).unwrap(), doc);
}

#[test]
fn string_and_key_list_paths_agree() {
    let doc = json!({"user": {"emails": ["a@x", "b@x"]}});
    let keys = vec![Key::field("user"), Key::field("emails"), Key::Index(1)];
    assert_eq!(get(&doc, &keys), Some(&json!("b@x")));
    assert_eq!(get(&doc, "user.emails[1]"), Some(&json!("b@x")));
    assert_eq!(get(&doc, "user.emails.1"), Some(&json!("b@x")));
    assert_eq!(parse_path("user.emails[1]"), Path::from(keys));
}

#[test]
fn numeric_key_classification() {
    assert!(is_index_key("0"));
    assert!(!is_index_key("01"));
    assert!(!is_index_key("a1"));
    assert_eq!(Key::parse("0"), Key::Index(0));
    assert_eq!(Key::parse("01"), Key::field("01"));
}

#[test]
fn falsy_values_along_the_path_resolve_normally() {
    let doc = json!({"zero": 0, "empty": [], "nested": {"list": [0, []]}});
    assert_eq!(read(Some(&doc), "zero", json!("d")), json!(0));
    assert_eq!(read(Some(&doc), "empty", json!("d")), json!([]));
    assert_eq!(read(Some(&doc), "nested.list.1", json!("d")), json!([]));
    assert_eq!(read(Some(&doc), "empty.0", json!("d")), json!("d"));
}

#[test]
fn write_then_read_returns_value() {
    let targets = [json!({}), json!({"a": 1}), json!({"a": [1, {"b": 2}]}), Value::Null];
    let paths = ["a", "a.b", "a.1.b", "a[3]", "x.y.z"];
    for target in &targets {
        for path in paths {
            let out = set(Some(target), path, json!({"v": path})).expect("write ok");
            assert_eq!(get(&out, path), Some(&json!({"v": path})), "path: {}", path);
        }
    }
}

#[test]
fn huge_indices_are_rejected_without_padding() {
    let cases = [
        ("a.18446744073709551615", usize::MAX),
        ("a[100000000000000000]", 100_000_000_000_000_000),
    ];
    for (path, index) in cases {
        assert_eq!(
            set(None, path, json!(1)),
            Err(PathError::IndexTooFar { index, len: 0 }),
            "path: {}",
            path
        );
    }

    let mut doc = json!({"a": [0, 1]});
    let err = set_mut(&mut doc, &Path::root().key("a").index(usize::MAX), json!(1)).unwrap_err();
    assert_eq!(err, PathError::IndexTooFar { index: usize::MAX, len: 2 });
    assert_eq!(doc, json!({"a": [0, 1]}));
}

#[test]
fn padding_up_to_the_gap_limit_is_allowed() {
    let out = set(None, &Path::root().key("a").index(MAX_INDEX_GAP), json!("v")).unwrap();
    let seq = out["a"].as_array().expect("sequence");
    assert_eq!(seq.len(), MAX_INDEX_GAP + 1);
    assert!(seq[..MAX_INDEX_GAP].iter().all(Value::is_null));
    assert_eq!(seq[MAX_INDEX_GAP], json!("v"));
}
