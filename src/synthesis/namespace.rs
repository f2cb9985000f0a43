/// Namespace every generated fixture lives in, or below.
pub const TEMP_NAMESPACE: &str = "tempnamespace";

/// `<namespace>.tempnamespace` when the class sits directly in a namespace,
/// plain `tempnamespace` otherwise.
pub fn derive_namespace(enclosing: Option<&str>) -> String {
    match enclosing {
        Some(namespace) if !namespace.is_empty() => format!("{}.{}", namespace, TEMP_NAMESPACE),
        _ => TEMP_NAMESPACE.to_string(),
    }
}
