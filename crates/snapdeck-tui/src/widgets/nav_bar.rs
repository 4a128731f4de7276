use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use snapdeck_core::Clock;

use crate::app::App;
use crate::layout::NAV_GAP;

pub struct NavBarWidget;

impl NavBarWidget {
    /// Deck title followed by the nav links; the link of the current section
    /// is highlighted and the bar is raised once the deck has been scrolled
    pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
        let theme = &app.theme;
        let bg = if app.is_elevated() {
            theme.elevated
        } else {
            theme.bg1
        };
        let links = app.links();
        let current = app.navigator.current_index();

        let mut spans = vec![Span::styled(
            format!(" {} ", app.deck.title),
            Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
        )];
        for link in &app.deck.nav {
            spans.push(Span::raw(" ".repeat(NAV_GAP as usize)));
            let style = if links.resolve(&link.href) == Some(current) {
                Style::default().fg(theme.accent).add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.fg0)
            };
            spans.push(Span::styled(link.label.clone(), style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
    }
}
