// ABOUTME: HTTP client for the PDF ingestion and question-answering backend

pub mod client;
pub mod error;
pub mod response;

pub use client::ApiClient;
pub use error::ApiError;
pub use response::{parse_answer_response, parse_upload_response, Answer, UploadReceipt};
