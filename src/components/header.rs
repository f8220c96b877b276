// ABOUTME: Header bar showing the app title, the current PDF and the upload hint

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::AppState;

pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(12), Constraint::Min(0)])
            .split(inner);

        let title = Paragraph::new(Span::styled(
            "PDF Chat",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, chunks[0]);

        let mut spans = Vec::new();
        if let Some(ref file) = state.uploaded_file {
            spans.push(Span::styled(
                format!("▣ {}", file.name),
                Style::default().fg(Color::Green),
            ));
            spans.push(Span::styled(
                " [Ctrl+X remove]",
                Style::default().fg(Color::Gray),
            ));
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            "[Ctrl+O] Upload PDF",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));

        let right = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
        frame.render_widget(right, chunks[1]);
    }
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}
