//! Identifier synthesis for templates and stages

/// Build the template ID from an application and pipeline name
///
/// Every character of `name` outside `[A-Za-z0-9_]` is dropped. Empty
/// inputs are accepted and yield a degenerate ID such as `"-"`.
pub fn template_id(application: &str, name: &str) -> String {
    let sanitized: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    format!("{}-{}", application, sanitized)
}

/// Build a stage ID by concatenating its type and refId
///
/// There is no separator, so `("foo1", "23")` and `("foo", "123")` both
/// produce `"foo123"`.
pub fn stage_id(stage_type: &str, ref_id: &str) -> String {
    format!("{}{}", stage_type, ref_id)
}
