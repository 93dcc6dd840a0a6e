use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use super::types::{
    ChatRequest, ChatResponse, ContactResponse, DeleteAccountResponse, HistoryResponse,
};
use crate::csrf::CSRF_HEADER;
use crate::types::HistoryEntry;

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(StatusCode),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request rejected: {}", .0.as_deref().unwrap_or("no detail"))]
    Rejected(Option<String>),
}

impl ApiError {
    /// True for a well-formed response that reported `success: false`.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(Some(message)) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// Backend seam
// ============================================

/// Every call the pages make against the chat backend.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn send_message(&self, message: &str) -> ApiResult<String>;

    async fn chat_history(&self) -> ApiResult<Vec<HistoryEntry>>;

    async fn delete_account(&self) -> ApiResult<()>;

    /// Posts the contact form fields and returns the server's confirmation text.
    async fn submit_contact(&self, fields: &BTreeMap<String, String>) -> ApiResult<String>;
}

pub const CHAT_PATH: &str = "/api/";
pub const HISTORY_PATH: &str = "/chat-history/";
pub const DELETE_ACCOUNT_PATH: &str = "/delete-account/";
pub const CONTACT_PATH: &str = "/contact/";

/// reqwest-backed client for the chat backend.
pub struct BackendClient {
    client: Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, csrf_token: Option<String>) -> Self {
        if csrf_token.is_none() {
            tracing::warn!("no CSRF token found; state-changing requests will likely be refused");
        }
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            csrf_token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn with_csrf(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.csrf_token {
            Some(token) => request.header(CSRF_HEADER, token),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl ChatBackend for BackendClient {
    async fn send_message(&self, message: &str) -> ApiResult<String> {
        let request = self
            .client
            .post(self.url(CHAT_PATH))
            .json(&ChatRequest { message });
        let response = self.with_csrf(request).send().await?;
        Self::read_json::<ChatResponse>(response).await?.into_result()
    }

    async fn chat_history(&self) -> ApiResult<Vec<HistoryEntry>> {
        let request = self.client.get(self.url(HISTORY_PATH));
        let response = self.with_csrf(request).send().await?;
        Self::read_json::<HistoryResponse>(response).await?.into_result()
    }

    async fn delete_account(&self) -> ApiResult<()> {
        let request = self
            .client
            .post(self.url(DELETE_ACCOUNT_PATH))
            .header("Content-Type", "application/x-www-form-urlencoded");
        let response = self.with_csrf(request).send().await?;
        Self::read_json::<DeleteAccountResponse>(response)
            .await?
            .into_result()
    }

    async fn submit_contact(&self, fields: &BTreeMap<String, String>) -> ApiResult<String> {
        let request = self.client.post(self.url(CONTACT_PATH)).json(fields);
        let response = self.with_csrf(request).send().await?;
        Self::read_json::<ContactResponse>(response).await?.into_result()
    }
}
