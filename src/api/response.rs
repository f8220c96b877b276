// ABOUTME: Response bodies of the backend endpoints and the rules for turning them into results
// Kept free of any transport so the rules can be exercised without a server

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;

const UPLOAD_FAILED: &str = "Failed to upload PDF";
const UPLOAD_INVALID_JSON: &str = "Failed to upload PDF: Invalid JSON response";
const ANSWER_FAILED: &str = "Failed to get response";
const UNPARSABLE_SUCCESS: &str = "Failed to parse API response as JSON";

/// Successful `/upload_pdf` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub filename: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub page_count: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Successful `/ask_question` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawUpload {
    filename: Option<String>,
    message: Option<String>,
    page_count: Option<u64>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAnswer {
    answer: Option<String>,
    question: Option<String>,
    metadata: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl ErrorBody {
    /// Validation errors carry a list instead of a string; show those as JSON text.
    fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

pub fn parse_upload_response(status: StatusCode, body: &str) -> Result<UploadReceipt, ApiError> {
    if !status.is_success() {
        let error: ErrorBody =
            serde_json::from_str(body).map_err(|_| ApiError::Malformed(UPLOAD_INVALID_JSON))?;
        return Err(ApiError::Server {
            status: status.as_u16(),
            message: error.detail_text().unwrap_or_else(|| UPLOAD_FAILED.to_string()),
        });
    }

    let raw: RawUpload =
        serde_json::from_str(body).map_err(|_| ApiError::Malformed(UNPARSABLE_SUCCESS))?;
    let filename = raw
        .filename
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::MissingField("filename"))?;

    Ok(UploadReceipt {
        filename,
        message: raw.message,
        page_count: raw.page_count,
        status: raw.status,
    })
}

pub fn parse_answer_response(status: StatusCode, body: &str) -> Result<Answer, ApiError> {
    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|error| error.detail_text());
        return Err(ApiError::Server {
            status: status.as_u16(),
            message: detail.unwrap_or_else(|| ANSWER_FAILED.to_string()),
        });
    }

    let raw: RawAnswer =
        serde_json::from_str(body).map_err(|_| ApiError::Malformed(UNPARSABLE_SUCCESS))?;
    let answer = raw.answer.ok_or(ApiError::MissingField("answer"))?;

    Ok(Answer {
        answer,
        question: raw.question,
        metadata: raw.metadata,
    })
}
