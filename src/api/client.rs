// ABOUTME: reqwest-based client for the two backend endpoints plus a health probe
// Each call is independent; there is no retry and no cancellation once sent

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, info};

use super::error::ApiError;
use super::response::{parse_answer_response, parse_upload_response, Answer, UploadReceipt};
use crate::config::Config;
use crate::models::{SessionToken, UploadedFile, PDF_MEDIA_TYPE};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Sends the PDF and the session token to the ingestion endpoint.
    pub async fn upload_pdf(
        &self,
        file: &UploadedFile,
        token: &SessionToken,
    ) -> Result<UploadReceipt, ApiError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| ApiError::Io {
                path: file.path.clone(),
                source,
            })?;
        info!("Uploading {} ({} bytes) for session {}", file.name, bytes.len(), token);

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(PDF_MEDIA_TYPE)?;
        let form = Form::new()
            .part("file", part)
            .text("uuid", token.to_string());

        let response = self
            .http
            .post(self.endpoint("upload_pdf"))
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("upload_pdf responded {}: {}", status, body);

        parse_upload_response(status, &body)
    }

    pub async fn ask_question(
        &self,
        question: &str,
        token: &SessionToken,
    ) -> Result<Answer, ApiError> {
        debug!("Asking question for session {}", token);
        let form = Form::new()
            .text("question", question.to_string())
            .text("uuid", token.to_string());

        let response = self
            .http
            .post(self.endpoint("ask_question"))
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("ask_question responded {}", status);

        parse_answer_response(status, &body)
    }

    /// Checks that the backend answers on its root path.
    pub async fn ping(&self) -> Result<(), ApiError> {
        self.http
            .get(self.endpoint(""))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
