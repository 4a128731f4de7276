use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use snapdeck_core::Clock;

use crate::app::App;

pub struct ProgressBarWidget;

impl ProgressBarWidget {
    pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
        let filled = filled_width(app.ui().progress(), area.width);
        let line = Line::from(vec![
            Span::styled(
                "▀".repeat(filled as usize),
                Style::default().fg(app.theme.progress).bg(app.theme.bg0),
            ),
            Span::styled(
                " ".repeat(area.width.saturating_sub(filled) as usize),
                Style::default().bg(app.theme.bg0),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Columns covered by a bar at `percent` of `width`
fn filled_width(percent: f64, width: u16) -> u16 {
    ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_width() {
        assert_eq!(filled_width(25.0, 80), 20);
        assert_eq!(filled_width(100.0, 80), 80);
        assert_eq!(filled_width(150.0, 10), 10);
        assert_eq!(filled_width(0.0, 10), 0);
    }
}
