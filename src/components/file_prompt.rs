// ABOUTME: Upload prompt where the user types the path of the PDF to send

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use super::message_input::visible_tail;
use crate::app::AppState;

pub struct FilePromptComponent;

impl FilePromptComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(ref input) = state.file_prompt else {
            return;
        };

        let popup_area = centered_rect(70, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Upload PDF")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Label
                Constraint::Length(3), // Path input
                Constraint::Min(0),
                Constraint::Length(1), // Instructions
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new("Path to a PDF file:").style(Style::default().fg(Color::Yellow)),
            chunks[0],
        );

        let width = usize::from(chunks[1].width.saturating_sub(3));
        let shown = visible_tail(input, width);
        let field = Paragraph::new(shown.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );
        frame.render_widget(field, chunks[1]);

        frame.render_widget(
            Paragraph::new("Enter: upload • Esc: cancel • ~ expands to home")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            chunks[3],
        );

        if !state.dialog.is_open() {
            let x = chunks[1].x + 1 + u16::try_from(shown.chars().count()).unwrap_or(0);
            frame.set_cursor(x, chunks[1].y + 1);
        }
    }
}

impl Default for FilePromptComponent {
    fn default() -> Self {
        Self::new()
    }
}
