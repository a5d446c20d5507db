use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, Section};
use crate::model::Palette;

/// Render footer status bar with keybinding hints.
/// Shows different keybindings based on current section.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();
    let footer_text = build_footer_text(state);

    let footer = Paragraph::new(footer_text).style(
        Style::default()
            .fg(palette.text)
            .bg(palette.footer_bg)
            .add_modifier(Modifier::DIM),
    );

    frame.render_widget(footer, area);
}

fn hint(spans: &mut Vec<Span<'static>>, palette: &Palette, key: &'static str, action: &'static str) {
    spans.push(Span::styled(key, Style::default().fg(palette.info)));
    spans.push(Span::raw(format!(":{} ", action)));
}

/// Pure function: build footer text based on current section and state.
fn build_footer_text(state: &AppState) -> Line<'static> {
    let palette = state.theme.palette();
    let mut spans = Vec::new();

    hint(&mut spans, palette, "q", "quit");
    hint(&mut spans, palette, "1-4", "sections");

    match state.section {
        Section::Experience | Section::Education => {
            hint(&mut spans, palette, "j/k", "select");
            hint(&mut spans, palette, "d", "duration");
            hint(&mut spans, palette, "D", "all durations");
        }
        Section::Skills => {
            hint(&mut spans, palette, "j/k", "category");
        }
        Section::Profile => {
            hint(&mut spans, palette, "j/k", "scroll");
        }
    }

    hint(&mut spans, palette, "t", "theme");
    hint(&mut spans, palette, "c", "CV");
    hint(&mut spans, palette, "m", "menu");
    spans.push(Span::styled("?", Style::default().fg(palette.info)));
    spans.push(Span::raw(":help"));

    if !state.errors.is_empty() {
        spans.push(Span::styled(
            format!("  ! {} errors (see log)", state.errors.len()),
            Style::default().fg(palette.error),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn footer_string(state: &AppState) -> String {
        let line = build_footer_text(state);
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn render_footer_does_not_panic() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let state = AppState::new();

        terminal
            .draw(|frame| {
                render_footer(frame, frame.area(), &state);
            })
            .unwrap();
    }

    #[test]
    fn build_footer_text_includes_common_keys() {
        let text = footer_string(&AppState::new());

        assert!(text.contains("q:quit"));
        assert!(text.contains("1-4:sections"));
        assert!(text.contains("t:theme"));
        assert!(text.contains("c:CV"));
        assert!(text.contains("m:menu"));
        assert!(text.contains("?:help"));
    }

    #[test]
    fn build_footer_text_profile() {
        let text = footer_string(&AppState::new());
        assert!(text.contains("j/k:scroll"));
        assert!(!text.contains("d:duration"));
    }

    #[test]
    fn build_footer_text_dated_sections() {
        for section in [Section::Experience, Section::Education] {
            let text = footer_string(&AppState::new().with_section(section));
            assert!(text.contains("j/k:select"));
            assert!(text.contains("d:duration"));
            assert!(text.contains("D:all durations"));
        }
    }

    #[test]
    fn build_footer_text_reports_errors() {
        let mut state = AppState::new();
        state.push_error("skills.json: bad".into());
        let text = footer_string(&state);
        assert!(text.contains("1 errors"));
    }
}
