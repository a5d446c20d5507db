use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, Section};

use super::format::format_percent;

/// Render header bar.
/// Shows: owner name, section tabs, theme indicator, reading progress.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();
    let style = Style::default()
        .fg(palette.text)
        .bg(palette.header_bg)
        .add_modifier(Modifier::BOLD);

    let right = build_status_text(state);
    let right_width = u16::try_from(right.width()).unwrap_or(u16::MAX);
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);

    frame.render_widget(Paragraph::new(build_header_text(state)).style(style), left_area);
    frame.render_widget(Paragraph::new(right).style(style), right_area);
}

/// Pure function: owner name followed by the section tabs.
fn build_header_text(state: &AppState) -> Line<'static> {
    let palette = state.theme.palette();

    let name = state
        .site
        .profile
        .as_ref()
        .map(|p| p.name.trim())
        .filter(|n| !n.is_empty())
        .unwrap_or("folio")
        .to_string();

    let mut spans = vec![
        Span::styled(name, Style::default().fg(palette.accent)),
        Span::raw(" "),
    ];

    for section in Section::ALL {
        let label = format!(" {}:{} ", section.index() + 1, section.title());
        let style = if section == state.section {
            Style::default()
                .fg(palette.heading)
                .bg(palette.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette.muted_text)
                .remove_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(label, style));
    }

    Line::from(spans)
}

/// Pure function: theme indicator and progress, right-aligned in the header.
/// The theme is marked "auto" while it still follows the terminal.
fn build_status_text(state: &AppState) -> Line<'static> {
    let palette = state.theme.palette();
    let theme = if state.theme.explicit {
        format!("{} ", state.theme.current)
    } else {
        format!("{} (auto) ", state.theme.current)
    };

    Line::from(vec![
        Span::styled(theme, Style::default().fg(palette.info)),
        Span::styled(
            format!("{} ", format_percent(state.scroll_progress())),
            Style::default().fg(palette.accent_warm),
        ),
    ])
}
