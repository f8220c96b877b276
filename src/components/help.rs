// ABOUTME: Help overlay component displaying keyboard shortcuts

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    style::{Color, Modifier, Style},
};

use super::layout::centered_rect;

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);

        let section = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Document:").style(section),
            ListItem::new("  Ctrl+O     Upload a PDF"),
            ListItem::new("  Ctrl+X     Remove file and chat history"),
            ListItem::new(""),
            ListItem::new("Chat:").style(section),
            ListItem::new("  Enter      Send message"),
            ListItem::new("  PgUp/PgDn  Scroll conversation"),
            ListItem::new(""),
            ListItem::new("Dialogs:").style(section),
            ListItem::new("  Esc/Enter  Close status message"),
            ListItem::new("  ←/→        Choose Cancel or Confirm"),
            ListItem::new("  y/n        Confirm or cancel removal"),
            ListItem::new(""),
            ListItem::new("General:").style(section),
            ListItem::new("  F1         Toggle this help"),
            ListItem::new("  Ctrl+C     Quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press F1 or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
