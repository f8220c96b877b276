// ABOUTME: Tests for the upload controller: validation, session tokens and applying upload outcomes

use pdf_chat::api::{ApiError, UploadReceipt};
use pdf_chat::app::{AppEvent, AppState, AsyncAction, EventHandler, StatusKind};
use pdf_chat::models::{FileCandidate, SessionToken};
use pretty_assertions::assert_eq;

fn receipt(filename: &str) -> UploadReceipt {
    UploadReceipt {
        filename: filename.to_string(),
        message: None,
        page_count: Some(2),
        status: Some("success".to_string()),
    }
}

fn select(state: &mut AppState, path: &str) {
    EventHandler::process_event(AppEvent::SelectFile(FileCandidate::from_path(path)), state);
}

fn queued_upload_token(state: &AppState) -> SessionToken {
    match state.pending_async_actions.back() {
        Some(AsyncAction::UploadPdf { token, .. }) => token.clone(),
        other => panic!("expected a queued upload, got {:?}", other),
    }
}

#[test]
fn test_non_pdf_is_rejected_without_network() {
    let mut state = AppState::new();

    select(&mut state, "image.png");

    assert!(state.pending_async_actions.is_empty());
    assert!(state.session.current().is_none());
    assert!(state.uploaded_file.is_none());
    let status = state.dialog.status().expect("modal should be open");
    assert_eq!(status.text, "Error: Please select a valid PDF file.");
    assert_eq!(status.kind, StatusKind::Error);
}

#[test]
fn test_non_pdf_drops_previously_held_file_but_keeps_token() {
    let mut state = AppState::new();
    select(&mut state, "/docs/report.pdf");
    let token = queued_upload_token(&state);
    state.dialog.close_status();

    select(&mut state, "notes.txt");

    assert!(state.uploaded_file.is_none());
    assert_eq!(state.session.current(), Some(&token));
}

#[test]
fn test_pdf_selection_creates_session_and_queues_upload() {
    let mut state = AppState::new();

    select(&mut state, "/docs/report.pdf");

    let token = state.session.current().cloned().expect("token created");
    assert_eq!(state.pending_async_actions.len(), 1);
    match &state.pending_async_actions[0] {
        AsyncAction::UploadPdf { file, token: sent } => {
            assert_eq!(file.name, "report.pdf");
            assert_eq!(sent, &token);
        }
        other => panic!("unexpected action {:?}", other),
    }
    assert_eq!(state.uploaded_file.as_ref().map(|f| f.name.as_str()), Some("report.pdf"));
    assert_eq!(
        state.dialog.status().map(|s| s.text.as_str()),
        Some("Processing your PDF...")
    );
}

#[test]
fn test_successful_upload_scenario() {
    let mut state = AppState::new();
    select(&mut state, "report.pdf");
    let token = queued_upload_token(&state);
    state.take_pending_actions();

    EventHandler::process_event(
        AppEvent::UploadFinished {
            token: token.clone(),
            result: Ok(receipt("report.pdf")),
        },
        &mut state,
    );

    let status = state.dialog.status().expect("modal open");
    assert_eq!(
        status.text,
        "PDF \"report.pdf\" processed successfully. Now you can chat with the AI."
    );
    assert_eq!(status.kind, StatusKind::Success);

    let close_at = state.dialog.auto_close_at().expect("deadline");
    state.tick(close_at - std::time::Duration::from_millis(1));
    assert!(state.dialog.is_open());
    state.tick(close_at);
    assert!(!state.dialog.is_open());

    assert_eq!(state.session.current(), Some(&token));
    assert!(state.uploaded_file.is_some());
}

#[test]
fn test_each_upload_gets_a_fresh_token() {
    let mut state = AppState::new();
    select(&mut state, "first.pdf");
    let first = queued_upload_token(&state);
    EventHandler::process_event(
        AppEvent::UploadFinished {
            token: first.clone(),
            result: Ok(receipt("first.pdf")),
        },
        &mut state,
    );
    state.dialog.close_status();

    select(&mut state, "second.pdf");
    let second = queued_upload_token(&state);

    assert_ne!(first, second);
    assert_eq!(state.session.current(), Some(&second));
}

#[test]
fn test_failed_upload_clears_file_but_not_token() {
    let mut state = AppState::new();
    select(&mut state, "report.pdf");
    let token = queued_upload_token(&state);

    EventHandler::process_event(
        AppEvent::UploadFinished {
            token: token.clone(),
            result: Err(ApiError::Server {
                status: 500,
                message: "Error processing PDF: broken xref".to_string(),
            }),
        },
        &mut state,
    );

    assert_eq!(
        state.dialog.status().map(|s| s.text.as_str()),
        Some("Upload error: Error processing PDF: broken xref")
    );
    assert!(state.uploaded_file.is_none());
    assert_eq!(state.session.current(), Some(&token));
}

#[test]
fn test_missing_filename_is_an_upload_error() {
    let mut state = AppState::new();
    select(&mut state, "report.pdf");
    let token = queued_upload_token(&state);

    EventHandler::process_event(
        AppEvent::UploadFinished {
            token,
            result: Err(ApiError::MissingField("filename")),
        },
        &mut state,
    );

    assert_eq!(
        state.dialog.status().map(|s| s.text.as_str()),
        Some("Upload error: API response missing 'filename' field")
    );
}

#[test]
fn test_result_for_replaced_session_is_ignored() {
    let mut state = AppState::new();
    select(&mut state, "old.pdf");
    let old = queued_upload_token(&state);
    state.dialog.close_status();
    select(&mut state, "new.pdf");

    EventHandler::process_event(
        AppEvent::UploadFinished {
            token: old,
            result: Err(ApiError::Malformed("Failed to parse API response as JSON")),
        },
        &mut state,
    );

    assert_eq!(state.uploaded_file.as_ref().map(|f| f.name.as_str()), Some("new.pdf"));
    assert_eq!(
        state.dialog.status().map(|s| s.text.as_str()),
        Some("Processing your PDF...")
    );
}

#[test]
fn test_file_prompt_submission_selects_file() {
    let mut state = AppState::new();
    state.open_file_prompt();
    for ch in "/tmp/paper.PDF".chars() {
        state.file_prompt_push(ch);
    }

    EventHandler::process_event(AppEvent::FilePromptSubmit, &mut state);

    assert!(state.file_prompt.is_none());
    assert_eq!(state.uploaded_file.as_ref().map(|f| f.name.as_str()), Some("paper.PDF"));
    assert_eq!(state.pending_async_actions.len(), 1);
}

#[test]
fn test_empty_file_prompt_does_nothing() {
    let mut state = AppState::new();
    state.open_file_prompt();

    EventHandler::process_event(AppEvent::FilePromptSubmit, &mut state);

    assert!(state.file_prompt.is_none());
    assert!(!state.dialog.is_open());
    assert!(state.pending_async_actions.is_empty());
}
