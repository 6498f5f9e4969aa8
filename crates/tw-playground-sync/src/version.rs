//! Tailwind version normalization

use serde_json::Value;

/// Version used when the requested one is missing or unknown
pub const DEFAULT_TAILWIND_VERSION: &str = "3";

const KNOWN_VERSIONS: [&str; 4] = ["1", "2", "3", "insiders"];

/// Map a requested version onto one the playground supports
pub fn to_valid_tailwind_version(version: &str) -> String {
    let version = version.trim();
    if KNOWN_VERSIONS.contains(&version) {
        version.to_string()
    } else {
        DEFAULT_TAILWIND_VERSION.to_string()
    }
}

/// Same as [`to_valid_tailwind_version`] for a raw JSON field; numbers are
/// accepted as well as strings
pub fn version_from_json(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => to_valid_tailwind_version(s),
        Some(Value::Number(n)) => to_valid_tailwind_version(&n.to_string()),
        _ => DEFAULT_TAILWIND_VERSION.to_string(),
    }
}
