// ABOUTME: Application state machine: session, upload, chat and dialog controllers plus event dispatch

pub mod chat;
pub mod dialog;
pub mod events;
pub mod state;
pub mod upload;

pub use chat::{ChatInput, NO_SESSION_MESSAGE};
pub use dialog::{DialogState, StatusKind, StatusMessage};
pub use events::{AppEvent, EventHandler};
pub use state::{App, AppState, AsyncAction};
