use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

/// Title, tagline, and the hero statistics counting up underneath
pub struct HeroWidget;

impl HeroWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            app.deck.title.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let tagline = Paragraph::new(Line::from(Span::styled(
            app.deck.tagline.clone(),
            Style::default().fg(theme.grey),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(tagline, chunks[1]);

        let stats = app.hero_display();
        if stats.is_empty() {
            return;
        }

        // One equal column per stat
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, stats.len() as u32);
                stats.len()
            ])
            .split(chunks[3]);

        for ((value, label), column) in stats.into_iter().zip(columns.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(theme.yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(label, Style::default().fg(theme.fg1))),
            ];
            let stat = Paragraph::new(lines).alignment(Alignment::Center);
            frame.render_widget(stat, *column);
        }
    }
}
