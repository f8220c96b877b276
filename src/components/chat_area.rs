// ABOUTME: Chat area component rendering the conversation, markdown for AI answers and plain text for the user

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::markdown::render_markdown;
use crate::app::AppState;
use crate::models::{Message, Sender};

pub struct ChatAreaComponent;

impl ChatAreaComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines = Self::build_lines(state);

        // Keep the newest message in view unless the user scrolled up
        let inner_width = area.width.saturating_sub(2).max(1);
        let inner_height = area.height.saturating_sub(2);
        let total = wrapped_height(&lines, inner_width);
        let offset = total
            .saturating_sub(inner_height)
            .saturating_sub(state.chat_scroll);

        let border_color = if state.dialog.is_open() {
            Color::DarkGray
        } else {
            Color::Cyan
        };
        let title = if state.chat_scroll > 0 {
            "Chat (scrolled, PgDn to return)"
        } else {
            "Chat"
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            )
            .wrap(Wrap { trim: false })
            .scroll((offset, 0));

        frame.render_widget(paragraph, area);
    }

    pub fn build_lines(state: &AppState) -> Vec<Line<'static>> {
        if state.conversation.is_empty() {
            return vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Upload a PDF with Ctrl+O, then ask anything about it.",
                    Style::default().fg(Color::Gray),
                )),
            ];
        }

        let mut lines = Vec::new();
        for message in state.conversation.messages() {
            lines.push(Self::header_line(message));
            match message.sender() {
                Sender::User => {
                    lines.extend(message.text().lines().map(|l| Line::from(l.to_string())));
                }
                Sender::Ai => lines.extend(render_markdown(message.text())),
            }
            lines.push(Line::from(""));
        }
        lines
    }

    fn header_line(message: &Message) -> Line<'static> {
        let color = match message.sender() {
            Sender::User => Color::Green,
            Sender::Ai => Color::Magenta,
        };
        Line::from(vec![
            Span::styled(
                message.sender().label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", message.sent_at().format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }
}

impl Default for ChatAreaComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}
