// ABOUTME: Confirmation dialog asking before the file and chat history are cleared

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::app::dialog::CLEAR_WARNING_MESSAGE;
use crate::app::AppState;

pub struct ConfirmationDialogComponent;

impl ConfirmationDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(confirm_selected) = state.dialog.warning_choice() else {
            return;
        };

        let popup_area = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup_area);

        let selected = Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let idle = Style::default().fg(Color::Gray);
        let (cancel_style, confirm_style) = if confirm_selected {
            (idle, selected.bg(Color::Red).fg(Color::White))
        } else {
            (selected, idle)
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                CLEAR_WARNING_MESSAGE,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Cancel ", cancel_style),
                Span::raw("    "),
                Span::styled(" Confirm ", confirm_style),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "←/→ select • Enter apply • y/n",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title("Remove file")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, popup_area);
    }
}

impl Default for ConfirmationDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
