use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;

use super::{asset_name, render_empty, section_block};

/// Render the profile section: name, title, contact rows and the summary.
/// Scrolls by line.
pub fn render_profile(frame: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();

    if state.site.profile.is_none() && state.site.summary.is_none() {
        render_empty(frame, area, "Profile", "No profile data", palette);
        return;
    }

    let offset = u16::try_from(state.cursor.profile).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(build_profile_lines(state))
        .block(section_block("Profile", palette))
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));

    frame.render_widget(paragraph, area);
}

/// Pure function: profile lines in display order.
fn build_profile_lines(state: &AppState) -> Vec<Line<'static>> {
    let palette = state.theme.palette();
    let mut lines = Vec::new();

    if let Some(profile) = &state.site.profile {
        lines.push(Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
        )));
        if !profile.title.is_empty() {
            lines.push(Line::from(Span::styled(
                profile.title.clone(),
                Style::default().fg(palette.accent),
            )));
        }
        if let Some(photo) = &profile.photo {
            lines.push(Line::from(Span::styled(
                format!("[photo: {}]", asset_name(photo)),
                Style::default().fg(palette.muted_text),
            )));
        }
        lines.push(Line::from(""));

        for (label, value) in profile.contact.rows() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", label), Style::default().fg(palette.muted_text)),
                Span::styled(value, Style::default().fg(palette.text)),
            ]));
        }
        if let Some(dial) = profile.contact.dial_number() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", ""), Style::default()),
                Span::styled(format!("tel:{}", dial), Style::default().fg(palette.info)),
            ]));
        }
    }

    if let Some(summary) = &state.site.summary {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "About",
            Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
        )));
        for paragraph in summary.content.lines() {
            lines.push(Line::from(Span::styled(
                paragraph.to_string(),
                Style::default().fg(palette.text),
            )));
        }
    }

    lines
}
