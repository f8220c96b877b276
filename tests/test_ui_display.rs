// ABOUTME: Test UI display components: header, menu bar, conversation and dialog overlays

use std::time::Instant;

use pdf_chat::app::{AppState, StatusMessage};
use pdf_chat::components::LayoutComponent;
use pdf_chat::models::UploadedFile;
use ratatui::{backend::TestBackend, Terminal};

fn render(state: &AppState) -> String {
    let backend = TestBackend::new(160, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut layout = LayoutComponent::new();

    terminal
        .draw(|frame| {
            layout.render(frame, state);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_bottom_menu_bar_shows_keys() {
    let state = AppState::new();
    let content = render(&state);

    assert!(content.contains("[Ctrl+O]upload"), "menu should offer upload");
    assert!(content.contains("[F1]help"), "Should contain '[F1]help'");
    assert!(content.contains("[Ctrl+C]quit"), "Should contain '[Ctrl+C]quit'");
    assert!(!content.contains("[Ctrl+X]remove"), "remove needs a file");
}

#[test]
fn test_header_shows_uploaded_file() {
    let mut state = AppState::new();
    state.uploaded_file = Some(UploadedFile {
        name: "report.pdf".to_string(),
        path: "/tmp/report.pdf".into(),
    });

    let content = render(&state);

    assert!(content.contains("report.pdf"));
    assert!(content.contains("[Ctrl+X]remove"));
}

#[test]
fn test_placeholder_when_draft_empty() {
    let content = render(&AppState::new());
    assert!(content.contains("Send a message..."));
}

#[test]
fn test_conversation_is_rendered() {
    let mut state = AppState::new();
    state.conversation.push_user("What is this about?");
    state.conversation.push_ai("It's about **X**.");

    let content = render(&state);

    assert!(content.contains("What is this about?"));
    assert!(content.contains("It's about X."));
}

#[test]
fn test_busy_input_shows_waiting() {
    let mut state = AppState::new();
    state.chat_input.busy = true;

    let content = render(&state);

    assert!(content.contains("Waiting for the AI"));
    assert!(!content.contains("Send a message..."));
}

#[test]
fn test_status_modal_is_drawn() {
    let mut state = AppState::new();
    state
        .dialog
        .show_status(StatusMessage::upload_succeeded("report.pdf"), Instant::now());

    let content = render(&state);

    assert!(content.contains("Success"));
    assert!(content.contains("processed successfully"));
}

#[test]
fn test_warning_dialog_is_drawn() {
    let mut state = AppState::new();
    state.dialog.open_warning();

    let content = render(&state);

    assert!(content.contains("Are you sure"));
    assert!(content.contains("Cancel"));
    assert!(content.contains("Confirm"));
}

#[test]
fn test_file_prompt_is_drawn() {
    let mut state = AppState::new();
    state.open_file_prompt();

    let content = render(&state);

    assert!(content.contains("Path to a PDF file:"));
}
