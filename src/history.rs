use crate::api::ApiResult;
use crate::format::format_bot_response;
use crate::tokens::{RequestToken, RequestTokens};
use crate::types::HistoryEntry;

pub const EMPTY_HISTORY_NOTICE: &str =
    "No chat history found. Start a conversation to see it here!";
pub const HISTORY_ERROR_NOTICE: &str = "Failed to load chat history.";

/// One past exchange, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryBlock {
    pub message: String,
    pub response_html: String,
    pub timestamp: String,
}

impl From<HistoryEntry> for HistoryBlock {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            response_html: format_bot_response(&entry.response),
            message: entry.message,
            timestamp: entry.timestamp,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HistoryView {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<HistoryBlock>),
    Empty,
    Failed,
}

impl HistoryView {
    pub fn from_result(result: ApiResult<Vec<HistoryEntry>>) -> Self {
        match result {
            Ok(entries) if entries.is_empty() => HistoryView::Empty,
            Ok(entries) => HistoryView::Loaded(entries.into_iter().map(HistoryBlock::from).collect()),
            Err(err) => {
                tracing::error!("chat history request failed: {err}");
                HistoryView::Failed
            }
        }
    }
}

/// Content of the history modal. Every open starts a fresh load; a load that
/// finishes after a newer one started is dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryLoader {
    view: HistoryView,
    tokens: RequestTokens,
}

impl HistoryLoader {
    pub fn view(&self) -> &HistoryView {
        &self.view
    }

    pub fn begin(&mut self) -> RequestToken {
        self.view = HistoryView::Loading;
        self.tokens.issue()
    }

    /// Returns whether the result was applied.
    pub fn finish(&mut self, token: RequestToken, result: ApiResult<Vec<HistoryEntry>>) -> bool {
        if !self.tokens.is_current(token) {
            tracing::debug!(token = token.value(), "discarding superseded history load");
            return false;
        }
        self.view = HistoryView::from_result(result);
        true
    }
}
