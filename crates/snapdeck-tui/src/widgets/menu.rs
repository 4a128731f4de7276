use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use snapdeck_core::Clock;

use crate::app::App;
use crate::layout;

pub struct MenuWidget;

impl MenuWidget {
    /// Section menu popup, centered over `area`
    pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
        let theme = &app.theme;
        let links = app.deck.menu_links();
        let popup_area = layout::menu_area(area, links);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Sections ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        frame.render_widget(block, popup_area);

        for (i, (rect, link)) in layout::menu_entry_areas(popup_area, links.len())
            .into_iter()
            .zip(links)
            .enumerate()
        {
            let style = if i == app.menu.cursor {
                Style::default()
                    .fg(theme.fg1)
                    .bg(theme.bg2)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg0)
            };
            let line = Line::from(Span::styled(format!(" {}", link.label), style));
            frame.render_widget(Paragraph::new(line).style(style), rect);
        }
    }
}
