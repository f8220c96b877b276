// ABOUTME: UI components for the TUI: header, chat area, input, dialogs and help

pub mod chat_area;
pub mod confirmation_dialog;
pub mod file_prompt;
pub mod header;
pub mod help;
pub mod layout;
pub mod markdown;
pub mod message_input;
pub mod status_modal;

pub use chat_area::ChatAreaComponent;
pub use confirmation_dialog::ConfirmationDialogComponent;
pub use file_prompt::FilePromptComponent;
pub use header::HeaderComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use markdown::render_markdown;
pub use message_input::MessageInputComponent;
pub use status_modal::StatusModalComponent;
