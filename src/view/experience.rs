use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, Section};

use super::components::{entry_line, scroll_offset};
use super::{asset_name, render_empty, section_block};

/// Render the experience section: one block per company, one selectable
/// row per role. The view follows the selected role.
pub fn render_experience(frame: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();

    let Some(experience) = state.site.experience.as_ref().filter(|e| !e.items.is_empty()) else {
        render_empty(frame, area, "Experience", "No experience data", palette);
        return;
    };

    let (lines, selected_line) = build_experience_lines(state, experience);
    let viewport = area.height.saturating_sub(2);
    let offset = selected_line.map_or(0, |line| scroll_offset(line, viewport));

    let paragraph = Paragraph::new(lines)
        .block(section_block("Experience", palette))
        .scroll((offset, 0));

    frame.render_widget(paragraph, area);
}

/// Pure function: experience lines plus the index of the selected role's line.
fn build_experience_lines(
    state: &AppState,
    experience: &crate::model::Experience,
) -> (Vec<Line<'static>>, Option<usize>) {
    let palette = state.theme.palette();
    let entries = state.section_entries(Section::Experience);
    let cursor = state.cursor.get(Section::Experience);

    let mut lines = Vec::new();
    let mut selected_line = None;
    let mut position = 0;

    for company in &experience.items {
        let mut header = vec![Span::styled(
            company.company.clone(),
            Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
        )];
        if !company.location.is_empty() {
            header.push(Span::styled(
                format!("  {}", company.location),
                Style::default().fg(palette.muted_text),
            ));
        }
        let logo = company.logo.for_mode(state.theme.current);
        if !logo.is_empty() {
            header.push(Span::styled(
                format!("  [{}]", asset_name(logo)),
                Style::default().fg(palette.separator),
            ));
        }
        lines.push(Line::from(header));

        for role in &company.roles {
            let timeline_index = entries.get(position).copied();
            let selected = position == cursor;
            position += 1;

            let Some(entry) = timeline_index.and_then(|i| state.timeline.get(i)) else {
                continue;
            };
            if selected {
                selected_line = Some(lines.len());
            }
            let revealed = timeline_index.is_some_and(|i| state.is_revealed(i));
            lines.push(entry_line(entry, selected, revealed, palette));

            for responsibility in &role.responsibilities {
                lines.push(Line::from(Span::styled(
                    format!("      • {}", responsibility),
                    Style::default().fg(palette.muted_text),
                )));
            }
        }

        lines.push(Line::from(""));
    }

    (lines, selected_line)
}
