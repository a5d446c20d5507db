/// Shorten `text` to at most `max` characters, ending with "…" when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Progress as a fixed-width percentage, e.g. " 42%".
pub fn format_percent(progress: u16) -> String {
    format!("{:>3}%", progress.min(100))
}

/// Proficiency gauge label: the item's own label, or its level.
pub fn format_level(level: u16, label: &str) -> String {
    if label.trim().is_empty() {
        format_percent(level).trim_start().to_string()
    } else {
        label.trim().to_string()
    }
}
