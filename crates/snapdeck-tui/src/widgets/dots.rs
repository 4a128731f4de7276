use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};
use snapdeck_core::Clock;

use crate::app::App;
use crate::layout;

pub struct DotsWidget;

impl DotsWidget {
    /// Dots for the sections in view; the active one is filled
    pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
        let ui = app.ui();
        let indicators = ui.indicators();
        let active = indicators.active_index().unwrap_or(0);
        for (index, rect) in layout::dot_areas(area, indicators.len(), active) {
            let (symbol, color) = if indicators.is_active(index) {
                ("●", app.theme.dot_active)
            } else {
                ("○", app.theme.dot_inactive)
            };
            frame.render_widget(Paragraph::new(symbol).style(Style::default().fg(color)), rect);
        }
    }
}
