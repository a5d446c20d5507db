use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::Palette;

use super::popup::centered_rect;

/// Render the help overlay.
/// Displayed as centered popup when show_help is true.
/// Lists all keybindings grouped by category.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();

    // Create centered popup area (60% width, 70% height)
    let popup_area = centered_rect(60, 70, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let help_text = build_help_text(palette);

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help - press any key to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.active_border)),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(palette.background).fg(palette.text));

    frame.render_widget(paragraph, popup_area);
}

fn heading(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(palette.info)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Build help text with keybindings grouped by category.
fn build_help_text(palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        heading("SECTIONS", palette),
        Line::from("  1-4         - Profile / Experience / Education / Skills"),
        Line::from("  Tab / S-Tab - Next / previous section"),
        Line::from("  h / l       - Previous / next section"),
        Line::from("  m           - Section menu"),
        Line::from(""),
        heading("SCROLLING", palette),
        Line::from("  j / k       - Down / up (selects entries)"),
        Line::from("  Ctrl+d / u  - Page down / up"),
        Line::from("  g / G       - Jump to top / bottom"),
        Line::from(""),
        heading("DURATIONS", palette),
        Line::from("  d / Enter   - Show or hide the selected entry's duration"),
        Line::from("  D           - Show or hide all durations"),
        Line::from("  Esc         - Hide durations"),
        Line::from(""),
        heading("ACTIONS", palette),
        Line::from("  t           - Toggle light / dark theme"),
        Line::from("  c           - Save the CV to the current directory"),
        Line::from("  ?           - Toggle help overlay"),
        Line::from("  q           - Quit application"),
        Line::from(""),
    ]
}
