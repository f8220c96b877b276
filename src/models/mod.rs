// ABOUTME: Core data models for the PDF chat client: session identity, messages and uploaded files

pub mod conversation;
pub mod message;
pub mod session;
pub mod upload;

pub use conversation::Conversation;
pub use message::{Message, Sender};
pub use session::{SessionHolder, SessionToken};
pub use upload::{FileCandidate, UploadedFile, PDF_MEDIA_TYPE};
