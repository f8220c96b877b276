// ABOUTME: Upload controller: validates the picked file, queues the upload and applies its outcome

use std::time::Instant;

use tracing::{info, warn};

use super::dialog::StatusMessage;
use super::state::{AppState, AsyncAction};
use crate::api::{ApiError, UploadReceipt};
use crate::models::{FileCandidate, SessionToken, UploadedFile};

impl AppState {
    /// Accepts a picked file. Anything not declared as a PDF is rejected locally.
    pub fn select_file(&mut self, candidate: FileCandidate) {
        if !candidate.is_pdf() {
            warn!("Rejected {} with media type {:?}", candidate.name, candidate.media_type);
            self.uploaded_file = None;
            self.dialog.show_status(StatusMessage::invalid_file(), Instant::now());
            return;
        }

        let token = self.session.create();
        let file = UploadedFile::from(candidate);
        self.uploaded_file = Some(file.clone());
        self.submit_upload(file, token);
    }

    fn submit_upload(&mut self, file: UploadedFile, token: SessionToken) {
        info!("Queueing upload of {} for session {}", file.name, token);
        self.dialog.show_status(StatusMessage::processing(), Instant::now());
        self.pending_async_actions.push_back(AsyncAction::UploadPdf { file, token });
    }

    pub fn finish_upload(&mut self, token: &SessionToken, result: Result<UploadReceipt, ApiError>) {
        if !self.session.is_current(token) {
            info!("Ignoring upload result for replaced session {}", token);
            return;
        }

        match result {
            Ok(receipt) => {
                info!(
                    "Backend processed {} ({} pages)",
                    receipt.filename,
                    receipt.page_count.unwrap_or_default()
                );
                self.dialog.show_status(
                    StatusMessage::upload_succeeded(&receipt.filename),
                    Instant::now(),
                );
            }
            Err(e) => {
                warn!("Upload failed: {}", e);
                self.dialog.show_status(StatusMessage::upload_failed(&e), Instant::now());
                self.uploaded_file = None;
                // The backend never ingested this file but the token is left in place.
                warn!("Session {} remains active after failed upload", token);
            }
        }
    }

    /// Drops the file, the conversation and the session. Reached only through the warning.
    pub fn clear_file_and_history(&mut self) {
        info!("Clearing file and chat history");
        self.uploaded_file = None;
        self.conversation.clear();
        self.session.clear();
        self.chat_scroll = 0;
        self.dialog.close_warning();
    }
}
