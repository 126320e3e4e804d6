use crate::types::{Key, Path};

/// Check if a raw segment addresses a sequence index.
///
/// Accepts `"0"` and any run of ASCII digits without a leading zero that
/// fits in `usize`. `"01"`, `"a1"`, `"-1"`, `"1.5"` and `""` are member
/// names.
pub fn is_index_key(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    let bytes = segment.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit()) && segment.parse::<usize>().is_ok()
}

#[inline]
fn is_delimiter(c: char) -> bool {
    matches!(c, '.' | '[' | ']')
}

/// Canonicalize a dot/bracket string path into a key list.
///
/// Splits on every run of `.`, `[` and `]`, drops empty segments and
/// classifies each remaining segment with [`is_index_key`].
pub fn parse_path(path: &str) -> Path {
    path.split(is_delimiter)
        .filter(|segment| !segment.is_empty())
        .map(Key::parse)
        .collect()
}

/// Format a key list as `a.b[0].c`.
pub fn format_path(path: &Path) -> String {
    path.to_string()
}

/// Check if `parent` strictly contains `child`.
pub fn is_child(parent: &Path, child: &Path) -> bool {
    parent.len() < child.len() && parent.is_prefix_of(child)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_index_key() {
        assert!(is_index_key("0"));
        assert!(is_index_key("7"));
        assert!(is_index_key("123"));
        assert!(!is_index_key("01"));
        assert!(!is_index_key("a1"));
        assert!(!is_index_key("1a"));
        assert!(!is_index_key("-1"));
        assert!(!is_index_key("1.5"));
        assert!(!is_index_key(""));
        assert!(!is_index_key("99999999999999999999999999"));
    }

    #[test]
    fn test_parse_path_dots() {
        assert_eq!(parse_path("a.b.c"), Path::root().key("a").key("b").key("c"));
    }

    #[test]
    fn test_parse_path_brackets_and_numeric_dots() {
        let expected = Path::root().key("a").index(0).key("b");
        assert_eq!(parse_path("a[0].b"), expected);
        assert_eq!(parse_path("a.0.b"), expected);
        assert_eq!(parse_path("a[0]b"), expected);
    }

    #[test]
    fn test_parse_path_drops_empty_segments() {
        assert_eq!(parse_path(""), Path::root());
        assert_eq!(parse_path("..[]"), Path::root());
        assert_eq!(parse_path(".a..b."), Path::root().key("a").key("b"));
        assert_eq!(parse_path("[0][1]"), Path::root().index(0).index(1));
    }

    #[test]
    fn test_parse_path_non_numeric_segments() {
        assert_eq!(
            parse_path("list.01.a1"),
            Path::root().key("list").key("01").key("a1")
        );
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&parse_path("a.0.b")), "a[0].b");
        assert_eq!(format_path(&Path::root()), "");
    }

    #[test]
    fn test_is_child() {
        let parent = parse_path("a");
        let child = parse_path("a.b");
        assert!(is_child(&parent, &child));
        assert!(!is_child(&child, &parent));
        assert!(!is_child(&parent, &parent));
        assert!(!is_child(&parent, &parse_path("b.c")));
    }
}
