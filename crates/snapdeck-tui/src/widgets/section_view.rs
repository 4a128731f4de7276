use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use snapdeck_core::{Clock, Section};

use crate::app::App;
use crate::theme::Theme;

pub struct SectionViewWidget;

impl SectionViewWidget {
    /// Draw every section that intersects the body at the current offset
    pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
        frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg0)), area);

        let count = app.deck.len();
        for (index, rel) in app.navigator.host().visible_sections() {
            let Some(section) = app.deck.sections.get(index) else {
                continue;
            };

            // Clip the section's full-height box to the body
            let skip = (-rel).max(0) as u16;
            let top = area.y + rel.max(0) as u16;
            let height = area
                .height
                .saturating_sub(skip)
                .min((area.y + area.height).saturating_sub(top));
            if height == 0 {
                continue;
            }
            let clipped = Rect::new(area.x, top, area.width, height);

            let paragraph = Paragraph::new(Self::content(section, index, count, area.height, &app.theme))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false })
                .scroll((skip, 0));
            frame.render_widget(paragraph, clipped);
        }
    }

    fn content(section: &Section, index: usize, count: usize, height: u16, theme: &Theme) -> Text<'static> {
        let body_lines = section.body.lines().count() as u16;
        let top_padding = height.saturating_sub(body_lines + 4) / 2;

        let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
        let title = if section.title.is_empty() {
            section.id.clone()
        } else {
            section.title.clone()
        };
        lines.push(Line::from(Span::styled(
            title,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        for line in section.body.lines() {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(theme.fg0),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} / {}", index + 1, count),
            Style::default().fg(theme.grey),
        )));

        Text::from(lines)
    }
}
