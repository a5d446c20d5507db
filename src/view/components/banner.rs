use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::{AppState, BannerKind};

/// True when the banner row should be laid out.
pub fn banner_visible(state: &AppState) -> bool {
    state.banner.is_some() || !state.loaded
}

/// Render the status banner: the current announcement, or a loading notice
/// before the first content load.
pub fn render_banner(frame: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();
    let (message, color) = match &state.banner {
        Some(banner) => {
            let color = match banner.kind {
                BannerKind::Info => palette.success,
                BannerKind::Error => palette.error,
            };
            (banner.text.clone(), color)
        }
        None if !state.loaded => ("Loading content…".to_string(), palette.warning),
        None => return,
    };

    let paragraph = Paragraph::new(Line::from(message))
        .style(Style::default().fg(color).bg(palette.header_bg))
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(paragraph, area);
}
