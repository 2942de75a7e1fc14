use staticd::http::path::is_safe;

#[test]
fn test_absolute_paths_are_rejected() {
    assert!(!is_safe("/etc/passwd"));
    assert!(!is_safe("/"));
    assert!(!is_safe("/index.html"));
}

#[test]
fn test_parent_traversal_is_rejected() {
    assert!(!is_safe(".."));
    assert!(!is_safe("../etc/passwd"));
    assert!(!is_safe("a/../b"));
    assert!(!is_safe("a/b/.."));
}

#[test]
fn test_dotdot_substring_is_rejected_even_in_plain_names() {
    // Documented false positive: the check is substring-level.
    assert!(!is_safe("foo..bar"));
    assert!(!is_safe("archive..tar"));
}

#[test]
fn test_embedded_nul_is_rejected() {
    assert!(!is_safe("index.html\0.jpg"));
    assert!(!is_safe("\0"));
}

#[test]
fn test_empty_path_is_safe() {
    assert!(is_safe(""));
}

#[test]
fn test_ordinary_relative_paths_are_safe() {
    assert!(is_safe("index.html"));
    assert!(is_safe("assets/css/site.css"));
    assert!(is_safe("a.b.c"));
    assert!(is_safe(".hidden"));
}
