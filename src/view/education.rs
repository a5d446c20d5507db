use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, Section};
use crate::model::Education;

use super::components::{entry_line, scroll_offset};
use super::{asset_name, render_empty, section_block};

/// Render the education section, one selectable row per degree.
pub fn render_education(frame: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();

    let Some(education) = state.site.education.as_ref().filter(|e| !e.items.is_empty()) else {
        render_empty(frame, area, "Education", "No education data", palette);
        return;
    };

    let (lines, selected_line) = build_education_lines(state, education);
    let viewport = area.height.saturating_sub(2);
    let offset = selected_line.map_or(0, |line| scroll_offset(line, viewport));

    let paragraph = Paragraph::new(lines)
        .block(section_block("Education", palette))
        .scroll((offset, 0));

    frame.render_widget(paragraph, area);
}

/// Pure function: education lines plus the index of the selected degree's line.
fn build_education_lines(
    state: &AppState,
    education: &Education,
) -> (Vec<Line<'static>>, Option<usize>) {
    let palette = state.theme.palette();
    let entries = state.section_entries(Section::Education);
    let cursor = state.cursor.get(Section::Education);

    let mut lines = Vec::new();
    let mut selected_line = None;

    for (position, item) in education.items.iter().enumerate() {
        let mut header = vec![Span::styled(
            item.institution.clone(),
            Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(logo) = item.logo.as_deref().filter(|l| !l.is_empty()) {
            header.push(Span::styled(
                format!("  [{}]", asset_name(logo)),
                Style::default().fg(palette.separator),
            ));
        }
        lines.push(Line::from(header));

        let timeline_index = entries.get(position).copied();
        if let Some(entry) = timeline_index.and_then(|i| state.timeline.get(i)) {
            let selected = position == cursor;
            if selected {
                selected_line = Some(lines.len());
            }
            let revealed = timeline_index.is_some_and(|i| state.is_revealed(i));
            lines.push(entry_line(entry, selected, revealed, palette));
        }

        if let Some(grade) = item.grade.as_deref().filter(|g| !g.is_empty()) {
            lines.push(Line::from(vec![
                Span::styled("      Grade: ", Style::default().fg(palette.muted_text)),
                Span::styled(grade.to_string(), Style::default().fg(palette.success)),
            ]));
        }

        lines.push(Line::from(""));
    }

    (lines, selected_line)
}
