use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

/// The active case-study card with its animated result metrics
pub struct CaseCardWidget;

impl CaseCardWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let card = app.rotation.active();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.bg2))
            .title(Span::styled(
                " Case Studies ",
                Style::default().fg(theme.fg0),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(2),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(inner);

        let header = Line::from(vec![
            Span::styled(
                card.client.clone(),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", card.industry),
                Style::default().fg(theme.grey),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        let summary = Paragraph::new(Span::styled(
            card.summary.clone(),
            Style::default().fg(theme.fg1),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(summary, chunks[2]);

        // Animated metrics, one equal column each
        let metrics = app.card_display();
        if !metrics.is_empty() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![
                    Constraint::Ratio(1, metrics.len() as u32);
                    metrics.len()
                ])
                .split(chunks[3]);

            for ((value, label), column) in metrics.into_iter().zip(columns.iter()) {
                let lines = vec![
                    Line::from(Span::styled(
                        value,
                        Style::default()
                            .fg(theme.green)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(label, Style::default().fg(theme.grey))),
                ];
                frame.render_widget(
                    Paragraph::new(lines).alignment(Alignment::Center),
                    *column,
                );
            }
        }

        // Pagination dots
        let active = app.rotation.active_index();
        let dots: Vec<Span> = (0..app.rotation.len())
            .map(|i| {
                if i == active {
                    Span::styled("● ", Style::default().fg(theme.accent))
                } else {
                    Span::styled("○ ", Style::default().fg(theme.grey))
                }
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
            chunks[4],
        );
    }
}
