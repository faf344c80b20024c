//! Formatting utilities for file sizes, dates, and other display values.

use time::OffsetDateTime;
use time::macros::format_description;

/// Format file size for display (e.g., "1.2 KB", "3.4 MB").
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_000_000_000 {
        format!("{:.1} GB", bytes as f64 / 1_000_000_000.0)
    } else if bytes >= 1_000_000 {
        format!("{:.1} MB", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1} KB", bytes as f64 / 1_000.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a release timestamp as `YYYY-MM-DD HH:MM` in its own offset.
pub fn format_date(timestamp: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    timestamp
        .format(&format)
        .unwrap_or_else(|_| timestamp.date().to_string())
}

/// Shorten a hex digest to its first 12 characters.
pub fn short_digest(sha256: &str) -> &str {
    const LEN: usize = 12;
    sha256.get(..LEN).unwrap_or(sha256)
}
