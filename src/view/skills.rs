use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::model::{Palette, SkillCategory, SkillGroup, SkillItem};

use super::components::format::{format_level, truncate};
use super::{render_empty, section_block};

/// Width reserved for a proficiency item's name
const GAUGE_NAME_WIDTH: usize = 24;

/// Render the skills section. Categories are drawn top to bottom starting
/// at the selected one; proficiency items become gauges.
pub fn render_skills(frame: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();

    let Some(skills) = state.site.skills.as_ref().filter(|s| !s.categories.is_empty()) else {
        render_empty(frame, area, "Skills", "No skills data", palette);
        return;
    };

    let block = section_block("Skills", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let selected = state.cursor.skills;
    let mut cursor = RowCursor::new(inner);

    for (index, category) in skills.categories.iter().enumerate().skip(selected) {
        let Some(row) = cursor.next_row() else {
            break;
        };
        frame.render_widget(
            Paragraph::new(category_heading(category, index == selected, palette)),
            row,
        );

        render_group(frame, &mut cursor, category, palette);
        cursor.skip_row();
    }
}

/// Hands out one-line rects from the top of an area until it is full.
struct RowCursor {
    area: Rect,
    y: u16,
}

impl RowCursor {
    fn new(area: Rect) -> Self {
        Self { area, y: area.y }
    }

    fn next_row(&mut self) -> Option<Rect> {
        if self.y >= self.area.bottom() || self.area.width == 0 {
            return None;
        }
        let row = Rect {
            x: self.area.x,
            y: self.y,
            width: self.area.width,
            height: 1,
        };
        self.y += 1;
        Some(row)
    }

    fn skip_row(&mut self) {
        self.y = self.y.saturating_add(1);
    }
}

fn category_heading(category: &SkillCategory, selected: bool, palette: &Palette) -> Line<'static> {
    let mut style = Style::default()
        .fg(palette.heading)
        .add_modifier(Modifier::BOLD);
    if selected {
        style = style.bg(palette.selection_bg);
    }
    Line::from(Span::styled(category.name.clone(), style))
}

fn render_group(frame: &mut Frame, cursor: &mut RowCursor, category: &SkillCategory, palette: &Palette) {
    match &category.group {
        SkillGroup::List { items } => {
            for item in items {
                let Some(row) = cursor.next_row() else {
                    return;
                };
                let line = Line::from(vec![
                    Span::styled("  • ", Style::default().fg(palette.accent)),
                    Span::styled(item.name().to_string(), Style::default().fg(palette.text)),
                ]);
                frame.render_widget(Paragraph::new(line), row);
            }
        }
        SkillGroup::Tags { items } => {
            for line in tag_lines(items, usize::from(cursor.area.width), palette) {
                let Some(row) = cursor.next_row() else {
                    return;
                };
                frame.render_widget(Paragraph::new(line), row);
            }
        }
        SkillGroup::Proficiency { items } => {
            for item in items {
                let Some(row) = cursor.next_row() else {
                    return;
                };
                let label = format!(
                    "  {:<width$} {:>8} ",
                    truncate(&item.name, GAUGE_NAME_WIDTH),
                    format_level(item.level, &item.label),
                    width = GAUGE_NAME_WIDTH
                );
                let gauge = LineGauge::default()
                    .ratio(item.ratio())
                    .label(label)
                    .line_set(symbols::line::THICK)
                    .filled_style(Style::default().fg(palette.gauge))
                    .unfilled_style(Style::default().fg(palette.separator))
                    .style(Style::default().fg(palette.text));
                frame.render_widget(gauge, row);
            }
        }
        SkillGroup::Unknown => {}
    }
}

/// Pure function: wrap tags as `[name]` chips into lines no wider than `width`.
fn tag_lines(items: &[SkillItem], width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let indent = 2;
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];
    let mut used = indent;

    for item in items {
        let chip = format!("[{}]", item.name());
        let chip_width = chip.chars().count() + 1;
        if used + chip_width > width && used > indent {
            lines.push(Line::from(std::mem::replace(&mut spans, vec![Span::raw("  ")])));
            used = indent;
        }
        spans.push(Span::styled(chip, Style::default().fg(palette.accent)));
        spans.push(Span::raw(" "));
        used += chip_width;
    }

    if used > indent {
        lines.push(Line::from(spans));
    }
    lines
}
