// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to correct app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pdf_chat::app::{AppEvent, AppState, EventHandler, StatusMessage};
use pdf_chat::models::UploadedFile;
use std::time::Instant;

fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn create_ctrl_key_event(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn press(state: &mut AppState, key: KeyEvent) {
    if let Some(event) = EventHandler::handle_key_event(key, state) {
        EventHandler::process_event(event, state);
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        press(state, create_key_event(KeyCode::Char(ch)));
    }
}

fn with_file(state: &mut AppState) {
    state.uploaded_file = Some(UploadedFile {
        name: "report.pdf".to_string(),
        path: "/tmp/report.pdf".into(),
    });
}

#[test]
fn test_ctrl_c_quits_from_anywhere() {
    let mut state = AppState::default();
    state.dialog.open_warning();

    press(&mut state, create_ctrl_key_event('c'));

    assert!(state.should_quit);
}

#[test]
fn test_typing_goes_to_draft() {
    let mut state = AppState::default();

    type_text(&mut state, "hello");
    press(&mut state, create_key_event(KeyCode::Backspace));

    assert_eq!(state.chat_input.draft, "hell");
}

#[test]
fn test_q_is_text_not_quit() {
    let mut state = AppState::default();

    press(&mut state, create_key_event(KeyCode::Char('q')));

    assert!(!state.should_quit);
    assert_eq!(state.chat_input.draft, "q");
}

#[test]
fn test_enter_maps_to_send() {
    let state = AppState::default();
    let event = EventHandler::handle_key_event(create_key_event(KeyCode::Enter), &state);
    assert!(matches!(event, Some(AppEvent::SendMessage)));
}

#[test]
fn test_busy_input_ignores_typing_and_enter() {
    let mut state = AppState::default();
    state.chat_input.busy = true;

    assert!(EventHandler::handle_key_event(create_key_event(KeyCode::Char('a')), &state).is_none());
    assert!(EventHandler::handle_key_event(create_key_event(KeyCode::Enter), &state).is_none());
    // Scrolling still works while waiting
    assert!(matches!(
        EventHandler::handle_key_event(create_key_event(KeyCode::PageUp), &state),
        Some(AppEvent::ScrollUp)
    ));
}

#[test]
fn test_remove_file_key_only_with_file() {
    let mut state = AppState::default();
    assert!(EventHandler::handle_key_event(create_ctrl_key_event('x'), &state).is_none());

    with_file(&mut state);
    assert!(matches!(
        EventHandler::handle_key_event(create_ctrl_key_event('x'), &state),
        Some(AppEvent::RequestRemoveFile)
    ));
}

#[test]
fn test_file_prompt_captures_keys() {
    let mut state = AppState::default();

    press(&mut state, create_ctrl_key_event('o'));
    assert_eq!(state.file_prompt.as_deref(), Some(""));

    type_text(&mut state, "a.pdf");
    press(&mut state, create_key_event(KeyCode::Backspace));
    assert_eq!(state.file_prompt.as_deref(), Some("a.pd"));
    assert!(state.chat_input.draft.is_empty());

    press(&mut state, create_key_event(KeyCode::Esc));
    assert!(state.file_prompt.is_none());
}

#[test]
fn test_status_modal_only_responds_to_close_keys() {
    let mut state = AppState::default();
    state
        .dialog
        .show_status(StatusMessage::processing(), Instant::now());

    assert!(EventHandler::handle_key_event(create_key_event(KeyCode::Char('j')), &state).is_none());
    assert!(EventHandler::handle_key_event(create_ctrl_key_event('o'), &state).is_none());

    press(&mut state, create_key_event(KeyCode::Esc));
    assert!(!state.dialog.is_open());
}

#[test]
fn test_warning_keys() {
    let mut state = AppState::default();
    with_file(&mut state);
    press(&mut state, create_ctrl_key_event('x'));
    assert!(state.dialog.is_warning());

    press(&mut state, create_key_event(KeyCode::Right));
    assert_eq!(state.dialog.warning_choice(), Some(true));
    press(&mut state, create_key_event(KeyCode::Tab));
    assert_eq!(state.dialog.warning_choice(), Some(false));

    // Enter applies the highlighted button, which is Cancel here
    press(&mut state, create_key_event(KeyCode::Enter));
    assert!(!state.dialog.is_open());
    assert!(state.uploaded_file.is_some());
}

#[test]
fn test_help_visible_only_responds_to_help_and_esc() {
    let mut state = AppState::default();
    state.help_visible = true;

    assert!(EventHandler::handle_key_event(create_key_event(KeyCode::Char('j')), &state).is_none());
    assert!(EventHandler::handle_key_event(create_key_event(KeyCode::F(1)), &state).is_some());

    press(&mut state, create_key_event(KeyCode::Esc));
    assert!(!state.help_visible);
}

#[test]
fn test_scroll_is_bounded_at_bottom() {
    let mut state = AppState::default();

    press(&mut state, create_key_event(KeyCode::PageUp));
    press(&mut state, create_key_event(KeyCode::PageUp));
    assert_eq!(state.chat_scroll, 6);

    for _ in 0..5 {
        press(&mut state, create_key_event(KeyCode::PageDown));
    }
    assert_eq!(state.chat_scroll, 0);
}
