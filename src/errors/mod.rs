use std::path::Path;

/// Add context to roster file read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read roster file: {}", path.display())
}

/// Add context to roster parse errors
pub fn parse_context(path: &Path) -> String {
    format!("Failed to parse role ratings from: {}", path.display())
}
