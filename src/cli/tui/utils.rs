//! Shared helpers for TUI views

/// Shortens `s` to at most `max_width` characters, ending in `…` when cut
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max_width - 1).collect();
    out.push('…');
    out
}
