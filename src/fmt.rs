//! Formatting helpers for table cells.
//!
//! Pure functions only; styles and layout live in `tui`.

/// Format byte count as compact human-readable size: `"1.5G"`, `"100.3M"`,
/// `"50.0K"`, `"512B"`.
pub fn format_bytes(bytes: u64) -> String {
    const GB: u64 = 1024 * 1024 * 1024;
    const MB: u64 = 1024 * 1024;
    const KB: u64 = 1024;

    let f = bytes as f64;
    if bytes >= GB {
        format!("{:.1}G", f / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", f / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", f / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Format a percentage with one decimal: `"12.5%"`.
pub fn format_percent(pct: f64) -> String {
    if !pct.is_finite() {
        return "-".to_string();
    }
    format!("{:.1}%", pct)
}

/// Memory cell: `"usage / limit"`, or just usage when the limit is unknown.
pub fn format_mem(usage: u64, limit: u64) -> String {
    if limit == 0 {
        format_bytes(usage)
    } else {
        format!("{} / {}", format_bytes(usage), format_bytes(limit))
    }
}

/// Network cell: `"rx / tx"`.
pub fn format_net(rx: u64, tx: u64) -> String {
    format!("{} / {}", format_bytes(rx), format_bytes(tx))
}

/// Truncates `s` to at most `max` characters.
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512B");
        assert_eq!(format_bytes(1024), "1.0K");
        assert_eq!(format_bytes(1536 * 1024), "1.5M");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0G");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_percent(f64::NAN), "-");
    }

    #[test]
    fn test_format_mem_and_net() {
        assert_eq!(format_mem(1024, 0), "1.0K");
        assert_eq!(format_mem(512 * 1024 * 1024, 1024 * 1024 * 1024), "512.0M / 1.0G");
        assert_eq!(format_net(0, 2048), "0B / 2.0K");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("0123456789abcdef", 12), "0123456789ab");
        assert_eq!(truncate("short", 12), "short");
        assert_eq!(truncate("ärger", 2), "är");
    }
}
