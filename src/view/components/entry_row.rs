use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::model::{Palette, TimelineEntry};

/// Pure function: one dated row (role or degree).
/// The selected row is highlighted; a revealed row shows its date with the
/// duration appended.
pub fn entry_line(
    entry: &TimelineEntry,
    selected: bool,
    revealed: bool,
    palette: &Palette,
) -> Line<'static> {
    let bg = if selected {
        palette.selection_bg
    } else {
        palette.background
    };
    let marker = if selected { "▸ " } else { "  " };

    let mut spans = vec![
        Span::styled(format!("  {}", marker), Style::default().fg(palette.accent).bg(bg)),
        Span::styled(
            entry.heading.clone(),
            Style::default()
                .fg(palette.text)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let with_duration = revealed && entry.duration.is_some();
    let date = if with_duration {
        entry.label()
    } else {
        entry.display_date.trim().to_string()
    };
    if !date.is_empty() {
        let color = if with_duration {
            palette.accent_warm
        } else {
            palette.muted_text
        };
        spans.push(Span::styled(format!("  {}", date), Style::default().fg(color).bg(bg)));
    }

    if revealed && selected && entry.duration.is_none() {
        spans.push(Span::styled(
            "  (no duration)",
            Style::default().fg(palette.muted_text).bg(bg),
        ));
    }

    Line::from(spans)
}

/// First line to show so that `selected_line` stays inside a viewport of
/// `height` lines.
pub fn scroll_offset(selected_line: usize, height: u16) -> u16 {
    let height = usize::from(height.max(1));
    let offset = (selected_line + 1).saturating_sub(height);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryKind;

    fn entry(duration: Option<&str>) -> TimelineEntry {
        TimelineEntry {
            kind: EntryKind::Experience,
            organization: "Acme".into(),
            heading: "Data Scientist".into(),
            display_date: "Jan 2022 - Present".into(),
            start: Some("2022-01".into()),
            end: Some("present".into()),
            duration: duration.map(String::from),
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn hidden_duration_shows_date_only() {
        let line = entry_line(&entry(Some("2 years")), false, false, &Palette::DARK);
        let text = text(&line);
        assert!(text.contains("Data Scientist"));
        assert!(text.contains("Jan 2022 - Present"));
        assert!(!text.contains("2 years"));
    }

    #[test]
    fn revealed_duration_is_appended() {
        let line = entry_line(&entry(Some("2 years and 7 months")), true, true, &Palette::DARK);
        let text = text(&line);
        assert!(text.contains("▸"));
        assert!(text.ends_with("Jan 2022 - Present, duration: 2 years and 7 months"));
    }

    #[test]
    fn revealed_without_duration_explains_when_selected() {
        let line = entry_line(&entry(None), true, true, &Palette::LIGHT);
        assert!(text(&line).contains("(no duration)"));

        let line = entry_line(&entry(None), false, true, &Palette::LIGHT);
        assert!(!text(&line).contains("duration"));
    }

    #[test]
    fn selection_uses_selection_background() {
        let line = entry_line(&entry(None), true, false, &Palette::DARK);
        assert!(line
            .spans
            .iter()
            .all(|s| s.style.bg == Some(Palette::DARK.selection_bg)));
    }

    #[test]
    fn scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(25, 10), 16);
        assert_eq!(scroll_offset(3, 0), 3);
    }
}
