use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{AppState, Section};

/// Render the section menu as a small centered modal.
/// Skipped when the menu is closed.
pub fn render_menu_popup(frame: &mut Frame, state: &AppState) {
    let Some(highlighted) = state.menu else {
        return;
    };
    let palette = state.theme.palette();

    let area = centered_fixed(28, Section::ALL.len() as u16 + 2, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let marker = if *section == state.section { "•" } else { " " };
            let style = if i == highlighted {
                Style::default()
                    .fg(palette.heading)
                    .bg(palette.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(palette.accent)),
                Span::styled(format!("{} {}", i + 1, section.title()), style),
            ])
        })
        .collect();

    let menu = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.active_border))
                .title(" Sections (Esc to close) "),
        )
        .style(Style::default().bg(palette.surface));

    frame.render_widget(menu, area);
}

/// Helper to create a centered rect using up certain percentage of the available rect `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Centered rect of a fixed size, shrunk to fit `r`.
fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 70, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 60);
    }

    #[test]
    fn centered_fixed_shrinks_to_fit() {
        let rect = centered_fixed(28, 6, Rect::new(0, 0, 10, 3));
        assert_eq!(rect, Rect::new(0, 0, 10, 3));

        let rect = centered_fixed(20, 6, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(30, 9, 20, 6));
    }

    #[test]
    fn closed_menu_draws_nothing() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = AppState::new();

        let result = terminal
            .draw(|frame| render_menu_popup(frame, &state))
            .unwrap();
        let text: String = result.buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(!text.contains("Sections"));
    }

    #[test]
    fn open_menu_lists_sections() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = AppState::new();
        state.menu = Some(2);

        let result = terminal
            .draw(|frame| render_menu_popup(frame, &state))
            .unwrap();
        let text: String = result.buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("1 Profile"));
        assert!(text.contains("3 Education"));
        assert!(text.contains("4 Skills"));
    }

    #[test]
    fn open_menu_on_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(5, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = AppState::new();
        state.menu = Some(0);

        terminal
            .draw(|frame| render_menu_popup(frame, &state))
            .unwrap();
    }
}
