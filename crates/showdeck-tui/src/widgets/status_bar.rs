use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let mode_str = if app.rotation.auto_advance_enabled() {
            "PLAYING"
        } else {
            "PAUSED"
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", mode_str, msg)
        } else {
            format!(
                " {} | Card {}/{}",
                mode_str,
                app.rotation.active_index() + 1,
                app.rotation.len()
            )
        };

        let help_hint = if app.show_hints {
            " q:quit h/l:cards 1-9:jump space:pause r:replay ?:hints "
        } else {
            ""
        };
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
