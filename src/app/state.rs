// ABOUTME: Application state, queued network work, and the runtime glue that feeds completions back

use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::chat::ChatInput;
use super::dialog::DialogState;
use super::events::{AppEvent, EventHandler};
use crate::api::ApiClient;
use crate::models::{Conversation, FileCandidate, Message, SessionHolder, SessionToken, UploadedFile};

const SCROLL_STEP: u16 = 3;
const PING_TIMEOUT: Duration = Duration::from_secs(3);

/// Network work requested by a state change, executed outside the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncAction {
    UploadPdf {
        file: UploadedFile,
        token: SessionToken,
    },
    AskQuestion {
        question: String,
        token: SessionToken,
        /// Conversation epoch when the question was asked
        epoch: u64,
    },
}

#[derive(Debug, Default)]
pub struct AppState {
    pub session: SessionHolder,
    pub conversation: Conversation,
    pub uploaded_file: Option<UploadedFile>,
    pub dialog: DialogState,
    pub chat_input: ChatInput,
    /// Path being typed into the upload prompt, when it is open
    pub file_prompt: Option<String>,
    pub help_visible: bool,
    /// Lines scrolled up from the bottom of the chat
    pub chat_scroll: u16,
    pub should_quit: bool,
    pub frame_count: u64,
    pub pending_async_actions: VecDeque<AsyncAction>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(SCROLL_STEP);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(SCROLL_STEP);
    }

    pub fn open_file_prompt(&mut self) {
        self.file_prompt = Some(String::new());
    }

    pub fn file_prompt_push(&mut self, ch: char) {
        if let Some(ref mut input) = self.file_prompt {
            input.push(ch);
        }
    }

    pub fn file_prompt_backspace(&mut self) {
        if let Some(ref mut input) = self.file_prompt {
            input.pop();
        }
    }

    pub fn cancel_file_prompt(&mut self) {
        self.file_prompt = None;
    }

    /// Closes the prompt and hands the typed path to the upload controller.
    pub fn submit_file_prompt(&mut self) {
        let Some(input) = self.file_prompt.take() else {
            return;
        };
        match FileCandidate::from_user_input(&input) {
            Some(candidate) => self.select_file(candidate),
            None => debug!("Empty path submitted, nothing selected"),
        }
    }

    pub fn request_remove_file(&mut self) {
        if self.uploaded_file.is_none() {
            return;
        }
        self.dialog.open_warning();
    }

    pub fn confirm_warning(&mut self) {
        if self.dialog.is_warning() {
            self.clear_file_and_history();
        }
    }

    pub fn cancel_warning(&mut self) {
        self.dialog.close_warning();
    }

    /// Applies whichever warning button is highlighted.
    pub fn submit_warning(&mut self) {
        match self.dialog.warning_choice() {
            Some(true) => self.confirm_warning(),
            Some(false) => self.cancel_warning(),
            None => {}
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.frame_count = self.frame_count.wrapping_add(1);
        if self.dialog.tick(now) {
            debug!("Status modal closed automatically");
        }
    }

    pub fn take_pending_actions(&mut self) -> Vec<AsyncAction> {
        self.pending_async_actions.drain(..).collect()
    }

    pub(crate) fn append_message(&mut self, message: Message) {
        self.conversation.push(message);
        self.chat_scroll = 0;
    }
}

pub struct App {
    pub state: AppState,
    client: ApiClient,
    completions_tx: mpsc::UnboundedSender<AppEvent>,
    completions_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(client: ApiClient) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            client,
            completions_tx,
            completions_rx,
        }
    }

    pub async fn init(&mut self, initial_file: Option<PathBuf>) {
        match tokio::time::timeout(PING_TIMEOUT, self.client.ping()).await {
            Ok(Ok(())) => info!("Backend reachable at {}", self.client.base_url()),
            Ok(Err(e)) => warn!("Backend at {} is not healthy: {}", self.client.base_url(), e),
            Err(_) => warn!("Backend at {} did not answer in time", self.client.base_url()),
        }

        if let Some(path) = initial_file {
            EventHandler::process_event(
                AppEvent::SelectFile(FileCandidate::from_path(path)),
                &mut self.state,
            );
        }
        self.dispatch_pending();
    }

    /// Applies finished network work, advances timers and starts newly queued work.
    pub fn tick(&mut self) {
        self.drain_completions();
        self.state.tick(Instant::now());
        self.dispatch_pending();
    }

    fn drain_completions(&mut self) {
        while let Ok(event) = self.completions_rx.try_recv() {
            EventHandler::process_event(event, &mut self.state);
        }
    }

    pub fn dispatch_pending(&mut self) {
        for action in self.state.take_pending_actions() {
            self.spawn(action);
        }
    }

    fn spawn(&self, action: AsyncAction) {
        let client = self.client.clone();
        let tx = self.completions_tx.clone();

        tokio::spawn(async move {
            let event = match action {
                AsyncAction::UploadPdf { file, token } => {
                    let result = client.upload_pdf(&file, &token).await;
                    AppEvent::UploadFinished { token, result }
                }
                AsyncAction::AskQuestion {
                    question,
                    token,
                    epoch,
                } => {
                    let result = client.ask_question(&question, &token).await;
                    AppEvent::AnswerReceived { epoch, result }
                }
            };
            if tx.send(event).is_err() {
                debug!("Application closed before a completion was delivered");
            }
        });
    }
}
