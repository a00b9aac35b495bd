use serde_json::Value;

/// Walk a dot-separated path (`essential_indicators.anti_corruption_policy.has_policy`).
///
/// Numeric segments index into arrays. An empty path addresses `root` itself.
/// JSON `null` counts as absent.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    if !path.is_empty() {
        for segment in path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
    }

    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Resolve the first present path from an ordered alias list.
///
/// The canonical path comes first; a present canonical value wins even when it
/// is `false`, `0` or an empty string.
pub fn resolve<'a>(root: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|path| lookup(root, path))
}
