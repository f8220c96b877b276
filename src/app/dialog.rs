// ABOUTME: Dialog state machine for the status modal and the clear-session warning
// Both live in one enum so they can never be open at the same time

use std::time::{Duration, Instant};

pub const INVALID_FILE_MESSAGE: &str = "Error: Please select a valid PDF file.";
pub const PROCESSING_MESSAGE: &str = "Processing your PDF...";
pub const CLEAR_WARNING_MESSAGE: &str = "Are you sure you want to clear the file and chat history?";

pub const SUCCESS_AUTO_CLOSE: Duration = Duration::from_millis(5000);
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Processing,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn processing() -> Self {
        Self {
            kind: StatusKind::Processing,
            text: PROCESSING_MESSAGE.to_string(),
        }
    }

    pub fn invalid_file() -> Self {
        Self {
            kind: StatusKind::Error,
            text: INVALID_FILE_MESSAGE.to_string(),
        }
    }

    pub fn upload_succeeded(filename: &str) -> Self {
        Self {
            kind: StatusKind::Success,
            text: format!(
                "PDF \"{filename}\" processed successfully. Now you can chat with the AI."
            ),
        }
    }

    pub fn upload_failed(reason: impl std::fmt::Display) -> Self {
        Self {
            kind: StatusKind::Error,
            text: format!("Upload error: {reason}"),
        }
    }

    /// Success stays up longer so the user has time to read the file name.
    pub fn auto_close_after(&self) -> Duration {
        match self.kind {
            StatusKind::Success => SUCCESS_AUTO_CLOSE,
            StatusKind::Processing | StatusKind::Error => DEFAULT_AUTO_CLOSE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    None,
    StatusModal {
        status: StatusMessage,
        close_at: Instant,
    },
    WarningConfirm {
        confirm_selected: bool,
    },
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::None)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        match self {
            DialogState::StatusModal { status, .. } => Some(status),
            _ => None,
        }
    }

    pub fn auto_close_at(&self) -> Option<Instant> {
        match self {
            DialogState::StatusModal { close_at, .. } => Some(*close_at),
            _ => None,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, DialogState::WarningConfirm { .. })
    }

    /// Shows `status`, replacing whatever dialog was open.
    ///
    /// The auto-close timer restarts unless the same message is already showing.
    pub fn show_status(&mut self, status: StatusMessage, now: Instant) {
        if self.status() == Some(&status) {
            return;
        }
        let close_at = now + status.auto_close_after();
        *self = DialogState::StatusModal { status, close_at };
    }

    pub fn close_status(&mut self) -> bool {
        if matches!(self, DialogState::StatusModal { .. }) {
            *self = DialogState::None;
            return true;
        }
        false
    }

    /// Opens the warning only from the idle state.
    pub fn open_warning(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        *self = DialogState::WarningConfirm {
            confirm_selected: false,
        };
        true
    }

    pub fn toggle_warning_choice(&mut self) {
        if let DialogState::WarningConfirm { confirm_selected } = self {
            *confirm_selected = !*confirm_selected;
        }
    }

    pub fn warning_choice(&self) -> Option<bool> {
        match self {
            DialogState::WarningConfirm { confirm_selected } => Some(*confirm_selected),
            _ => None,
        }
    }

    pub fn close_warning(&mut self) -> bool {
        if self.is_warning() {
            *self = DialogState::None;
            return true;
        }
        false
    }

    /// Closes the status modal once its deadline has passed. Returns true if it closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self.auto_close_at().is_some_and(|close_at| now >= close_at);
        if expired {
            *self = DialogState::None;
        }
        expired
    }
}
