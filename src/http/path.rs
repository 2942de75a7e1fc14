//! Path-traversal defense.

/// Decides whether a request path may be resolved under the document root.
///
/// Rejects absolute paths, paths with embedded NUL bytes, and anything
/// containing `..`. The `..` check is a deliberate substring match: it also
/// rejects legitimate names like `foo..bar`, a false positive accepted for
/// safety. The empty path passes and simply fails to open later.
pub fn is_safe(path: &str) -> bool {
    if path.starts_with('/') {
        return false;
    }
    if path.contains('\0') {
        return false;
    }
    if path.contains("..") {
        return false;
    }
    true
}
