// ABOUTME: Main layout component stacking header, chat, input and key bar, with overlays on top

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Style},
};

use crate::app::AppState;
use super::{
    ChatAreaComponent, ConfirmationDialogComponent, FilePromptComponent, HeaderComponent,
    HelpComponent, MessageInputComponent, StatusModalComponent,
};

pub struct LayoutComponent {
    header: HeaderComponent,
    chat_area: ChatAreaComponent,
    message_input: MessageInputComponent,
    file_prompt: FilePromptComponent,
    help: HelpComponent,
    status_modal: StatusModalComponent,
    confirmation_dialog: ConfirmationDialogComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            header: HeaderComponent::new(),
            chat_area: ChatAreaComponent::new(),
            message_input: MessageInputComponent::new(),
            file_prompt: FilePromptComponent::new(),
            help: HelpComponent::new(),
            status_modal: StatusModalComponent::new(),
            confirmation_dialog: ConfirmationDialogComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Conversation
                Constraint::Length(3), // Message input
                Constraint::Length(3), // Bottom menu bar
            ])
            .split(frame.size());

        self.header.render(frame, chunks[0], state);
        self.chat_area.render(frame, chunks[1], state);
        self.message_input.render(frame, chunks[2], state);
        self.render_menu_bar(frame, chunks[3], state);

        if state.file_prompt.is_some() {
            self.file_prompt.render(frame, frame.size(), state);
        }

        if state.help_visible {
            self.help.render(frame, frame.size());
        }

        // Dialogs are drawn last so nothing covers them
        self.status_modal.render(frame, frame.size(), state);
        self.confirmation_dialog.render(frame, frame.size(), state);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let menu_text = if state.uploaded_file.is_some() {
            "[Enter]send [Ctrl+O]upload [Ctrl+X]remove [PgUp/PgDn]scroll [F1]help [Ctrl+C]quit"
        } else {
            "[Enter]send [Ctrl+O]upload [PgUp/PgDn]scroll [F1]help [Ctrl+C]quit"
        };

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// A rectangle centered in `r` taking the given percentages of its size.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
