// ABOUTME: Message input box with placeholder, cursor and a spinner while an answer is pending

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::AppState;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const PLACEHOLDER: &str = "Send a message...";

pub struct MessageInputComponent;

impl MessageInputComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let input = &state.chat_input;
        let inner_width = usize::from(area.width.saturating_sub(2));

        let (content, border_color) = if input.busy {
            let index = usize::try_from(state.frame_count % SPINNER.len() as u64).unwrap_or(0);
            (
                Line::from(vec![
                    Span::styled(SPINNER[index], Style::default().fg(Color::Yellow)),
                    Span::styled(" Waiting for the AI...", Style::default().fg(Color::Gray)),
                ]),
                Color::DarkGray,
            )
        } else if input.draft.is_empty() {
            (
                Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))),
                Color::White,
            )
        } else {
            (Line::from(visible_tail(&input.draft, inner_width.saturating_sub(1))), Color::White)
        };

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .title("Message (Enter to send)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(paragraph, area);

        let has_focus = !input.busy
            && !state.dialog.is_open()
            && state.file_prompt.is_none()
            && !state.help_visible;
        if has_focus {
            let typed = visible_tail(&input.draft, inner_width.saturating_sub(1))
                .chars()
                .count();
            let x = area.x + 1 + u16::try_from(typed).unwrap_or(0);
            frame.set_cursor(x.min(area.right().saturating_sub(2)), area.y + 1);
        }
    }
}

impl Default for MessageInputComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// The end of `text` that fits in `width` columns, so the cursor stays visible.
pub(crate) fn visible_tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(width)).collect()
}
