//! Shared helper functions for CLI commands

use console::style;

/// Format a record id for display, truncating if too long
///
/// Generated ids are 30 characters (prefix + ULID); table columns show the
/// first 13 with "..." for a consistent width. Imported ids are arbitrary
/// UTF-8, so the cut is made on character boundaries.
pub fn format_short_id(id: &str) -> String {
    if id.chars().count() > 16 {
        let head: String = id.chars().take(13).collect();
        format!("{}...", head)
    } else {
        id.to_string()
    }
}

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Style a severity name for terminal output
///
/// The stored hex color is a browser hint; in the terminal the well-known
/// level names map to red/yellow/green, anything else stays unstyled.
pub fn severity_badge(name: &str) -> String {
    match name.to_lowercase().as_str() {
        "serious" => style(name).red().bold().to_string(),
        "moderate" => style(name).yellow().bold().to_string(),
        "minor" => style(name).green().to_string(),
        _ => style(name).white().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_id() {
        assert_eq!(format_short_id("CAT001"), "CAT001");
        assert_eq!(
            format_short_id("DRG-01J123456789ABCDEF123456"),
            "DRG-01J123456..."
        );
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_cuts_on_char_boundaries() {
        // a multibyte char straddling the cut point must not panic
        let name = "aaaaaaaaaaaaaaaaaaaézzzz";
        assert_eq!(truncate_str(name, 23), "aaaaaaaaaaaaaaaaaaaé...");
        assert_eq!(truncate_str("éééé", 3), "...");
        assert_eq!(truncate_str("éé", 4), "éé");
    }

    #[test]
    fn test_format_short_id_handles_multibyte_ids() {
        // imported documents may carry non-ASCII ids
        assert_eq!(format_short_id("催化剂催化剂催化剂催化剂催化剂催化剂"), "催化剂催化剂催化剂催化剂催...");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv("with\nnewline"), "\"with\nnewline\"");
    }

    #[test]
    fn test_severity_badge_passes_unknown_names_through() {
        assert!(severity_badge("Contraindicated").contains("Contraindicated"));
    }
}
