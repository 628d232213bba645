//! A centralized module for user-facing formatting utilities.

use std::path::Path;

use thousands::Separable;

/// Formats a byte count with thousands separators, e.g. "12,345 B".
pub fn format_bytes(n: u64) -> String {
    format!("{} B", n.separate_with_commas())
}

/// Creates a user-friendly label for a path: its final component.
pub fn format_path_label<P: AsRef<Path>>(p: P) -> String {
    p.as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_get_separators() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1_234_567), "1,234,567 B");
    }

    #[test]
    fn label_is_last_component() {
        assert_eq!(format_path_label("/work/demo"), "demo");
        assert_eq!(format_path_label("demo"), "demo");
    }
}
