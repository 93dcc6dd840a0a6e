use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResult};
use crate::types::HistoryEntry;

#[derive(Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    pub response: Option<String>,
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn into_result(self) -> ApiResult<String> {
        match (self.success, self.response) {
            (true, Some(response)) => Ok(response),
            (true, None) => Err(ApiError::Rejected(Some("response field missing".into()))),
            (false, _) => Err(ApiError::Rejected(self.error)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub success: bool,
    pub history: Option<Vec<HistoryEntry>>,
    pub error: Option<String>,
}

impl HistoryResponse {
    pub fn into_result(self) -> ApiResult<Vec<HistoryEntry>> {
        match (self.success, self.history) {
            (true, Some(history)) => Ok(history),
            (true, None) => Err(ApiError::Rejected(Some("history field missing".into()))),
            (false, _) => Err(ApiError::Rejected(self.error)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteAccountResponse {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
}

impl DeleteAccountResponse {
    pub fn into_result(self) -> ApiResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.error))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ContactResponse {
    pub fn into_result(self) -> ApiResult<String> {
        if self.success {
            Ok(self.message)
        } else {
            Err(ApiError::Rejected(Some(self.message)))
        }
    }
}
