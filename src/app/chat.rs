// ABOUTME: Chat input controller: draft editing, sending questions and appending answers

use tracing::{debug, info, warn};

use super::state::{AppState, AsyncAction};
use crate::api::{Answer, ApiError};
use crate::models::Message;

pub const NO_SESSION_MESSAGE: &str = "Error: No session found. Please upload a PDF first.";

#[derive(Debug, Clone, Default)]
pub struct ChatInput {
    pub draft: String,
    /// Set while a question is in flight; input is disabled until it clears
    pub busy: bool,
}

impl ChatInput {
    pub fn push_char(&mut self, ch: char) {
        if !self.busy {
            self.draft.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if !self.busy {
            self.draft.pop();
        }
    }
}

impl AppState {
    pub fn send_message(&mut self) {
        if self.chat_input.busy {
            debug!("Ignoring send while a question is in flight");
            return;
        }
        if self.chat_input.draft.trim().is_empty() {
            return;
        }

        let Some(token) = self.session.current().cloned() else {
            self.append_message(Message::ai(NO_SESSION_MESSAGE));
            return;
        };

        let question = std::mem::take(&mut self.chat_input.draft);
        self.append_message(Message::user(question.clone()));
        self.chat_input.busy = true;
        self.pending_async_actions.push_back(AsyncAction::AskQuestion {
            question,
            token,
            epoch: self.conversation.epoch(),
        });
    }

    /// Appends the outcome of a question asked while the conversation was at `epoch`.
    /// A newer upload keeps the history, so only a clear makes the answer stale.
    pub fn finish_question(&mut self, epoch: u64, result: Result<Answer, ApiError>) {
        self.chat_input.busy = false;

        if epoch != self.conversation.epoch() {
            info!("Dropping answer for a conversation that has since been cleared");
            return;
        }

        match result {
            Ok(answer) => self.append_message(Message::ai(answer.answer)),
            Err(e) => {
                warn!("Question failed: {}", e);
                self.append_message(Message::ai(format!("Error: {e}")));
            }
        }
    }
}
