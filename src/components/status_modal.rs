// ABOUTME: Status modal overlay for upload progress, success and errors

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::app::{AppState, StatusKind};

pub struct StatusModalComponent;

impl StatusModalComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(status) = state.dialog.status() else {
            return;
        };

        let popup_area = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup_area);

        let (title, color) = match status.kind {
            StatusKind::Processing => ("Processing", Color::Yellow),
            StatusKind::Success => ("Success", Color::Green),
            StatusKind::Error => ("Error", Color::Red),
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                status.text.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Esc/Enter to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, popup_area);
    }
}

impl Default for StatusModalComponent {
    fn default() -> Self {
        Self::new()
    }
}
