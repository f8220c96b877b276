// ABOUTME: Event handling: maps keys to app events and applies every event to the state in one place

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::api::{Answer, ApiError, UploadReceipt};
use crate::app::AppState;
use crate::models::{FileCandidate, SessionToken};

#[derive(Debug)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Chat input
    InputChar(char),
    InputBackspace,
    SendMessage,
    ScrollUp,
    ScrollDown,
    // Upload path prompt
    OpenFilePrompt,
    FilePromptChar(char),
    FilePromptBackspace,
    FilePromptSubmit,
    FilePromptCancel,
    SelectFile(FileCandidate),
    // Dialogs
    RequestRemoveFile,
    CloseStatusModal,
    WarningToggle,
    WarningSubmit,
    WarningConfirm,
    WarningCancel,
    // Completions posted by network tasks
    UploadFinished {
        token: SessionToken,
        result: Result<UploadReceipt, ApiError>,
    },
    AnswerReceived {
        epoch: u64,
        result: Result<Answer, ApiError>,
    },
}

impl AppEvent {
    /// Events triggered by the user that change state outside the dialogs.
    fn is_locked_by_dialog(&self) -> bool {
        matches!(
            self,
            AppEvent::ToggleHelp
                | AppEvent::InputChar(_)
                | AppEvent::InputBackspace
                | AppEvent::SendMessage
                | AppEvent::ScrollUp
                | AppEvent::ScrollDown
                | AppEvent::OpenFilePrompt
                | AppEvent::FilePromptChar(_)
                | AppEvent::FilePromptBackspace
                | AppEvent::FilePromptSubmit
                | AppEvent::FilePromptCancel
                | AppEvent::SelectFile(_)
                | AppEvent::RequestRemoveFile
        )
    }
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key_event.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        // Dialogs take every key while open
        if state.dialog.status().is_some() {
            return match key_event.code {
                KeyCode::Esc | KeyCode::Enter => Some(AppEvent::CloseStatusModal),
                _ => None,
            };
        }
        if state.dialog.is_warning() {
            return match key_event.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => Some(AppEvent::WarningToggle),
                KeyCode::Enter => Some(AppEvent::WarningSubmit),
                KeyCode::Char('y') | KeyCode::Char('Y') => Some(AppEvent::WarningConfirm),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(AppEvent::WarningCancel)
                }
                _ => None,
            };
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::F(1) | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if state.file_prompt.is_some() {
            return match key_event.code {
                KeyCode::Esc => Some(AppEvent::FilePromptCancel),
                KeyCode::Enter => Some(AppEvent::FilePromptSubmit),
                KeyCode::Backspace => Some(AppEvent::FilePromptBackspace),
                KeyCode::Char(ch) if !ctrl => Some(AppEvent::FilePromptChar(ch)),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::F(1) => Some(AppEvent::ToggleHelp),
            KeyCode::Char('o') if ctrl => Some(AppEvent::OpenFilePrompt),
            KeyCode::Char('x') if ctrl && state.uploaded_file.is_some() => {
                Some(AppEvent::RequestRemoveFile)
            }
            KeyCode::PageUp => Some(AppEvent::ScrollUp),
            KeyCode::PageDown => Some(AppEvent::ScrollDown),
            // Input is disabled while waiting for an answer
            _ if state.chat_input.busy => None,
            KeyCode::Enter => Some(AppEvent::SendMessage),
            KeyCode::Backspace => Some(AppEvent::InputBackspace),
            KeyCode::Char(ch) if !ctrl => Some(AppEvent::InputChar(ch)),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        if state.dialog.is_open() && event.is_locked_by_dialog() {
            debug!("Ignoring {:?} while a dialog is open", event);
            return;
        }

        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::InputChar(ch) => state.chat_input.push_char(ch),
            AppEvent::InputBackspace => state.chat_input.backspace(),
            AppEvent::SendMessage => state.send_message(),
            AppEvent::ScrollUp => state.scroll_up(),
            AppEvent::ScrollDown => state.scroll_down(),
            AppEvent::OpenFilePrompt => state.open_file_prompt(),
            AppEvent::FilePromptChar(ch) => state.file_prompt_push(ch),
            AppEvent::FilePromptBackspace => state.file_prompt_backspace(),
            AppEvent::FilePromptSubmit => state.submit_file_prompt(),
            AppEvent::FilePromptCancel => state.cancel_file_prompt(),
            AppEvent::SelectFile(candidate) => state.select_file(candidate),
            AppEvent::RequestRemoveFile => state.request_remove_file(),
            AppEvent::CloseStatusModal => {
                state.dialog.close_status();
            }
            AppEvent::WarningToggle => state.dialog.toggle_warning_choice(),
            AppEvent::WarningSubmit => state.submit_warning(),
            AppEvent::WarningConfirm => state.confirm_warning(),
            AppEvent::WarningCancel => state.cancel_warning(),
            AppEvent::UploadFinished { token, result } => state.finish_upload(&token, result),
            AppEvent::AnswerReceived { epoch, result } => state.finish_question(epoch, result),
        }
    }
}
