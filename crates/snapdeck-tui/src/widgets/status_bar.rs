use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use snapdeck_core::Clock;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
        let theme = &app.theme;
        let index = app.navigator.current_index();
        let title = app
            .deck
            .sections
            .get(index)
            .map(|s| if s.title.is_empty() { s.id.as_str() } else { s.title.as_str() })
            .unwrap_or_default();

        let status_text = format!(" {}/{} | {} ", index + 1, app.deck.len(), title);
        let busy_text = if app.is_busy() { " ... " } else { "" };
        let help_hint = " q:quit j/k:move g/G:ends m:menu ";

        let padding_len = padding_width(area.width, &[&status_text, busy_text, help_hint]);

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(busy_text, Style::default().fg(theme.busy).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Blank columns left after `parts` on a line `width` columns wide
fn padding_width(width: u16, parts: &[&str]) -> usize {
    let used: usize = parts.iter().map(|part| part.width()).sum();
    (width as usize).saturating_sub(used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_counts_columns_not_bytes() {
        let status = " 1/4 | Überblick 日本語 ";
        assert_eq!(status.len(), 28);
        assert_eq!(padding_width(40, &[status]), 16);
        assert_eq!(padding_width(40, &[status, " ... "]), 11);
        assert_eq!(padding_width(10, &[status]), 0);
    }
}
