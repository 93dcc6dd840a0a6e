/// Backend API module
///
/// Request/response contracts for the chat backend and a `reqwest` client
/// implementing them. The pages only see the [`ChatBackend`] trait, which
/// keeps the network out of the state machines and their tests.
///
/// # Architecture
///
/// - `client` - `ApiError`, the `ChatBackend` trait and `BackendClient`
/// - `types` - wire shapes for each endpoint
///
/// # Usage
///
/// ```rust,no_run
/// use chatbot_web::api::{BackendClient, ChatBackend};
///
/// # async fn example() -> Result<(), chatbot_web::api::ApiError> {
/// let client = BackendClient::new("http://127.0.0.1:8000", None);
/// let reply = client.send_message("Hello!").await?;
/// # Ok(())
/// # }
/// ```
mod client;
pub mod types;

pub use client::{
    ApiError, ApiResult, BackendClient, CHAT_PATH, CONTACT_PATH, ChatBackend, DELETE_ACCOUNT_PATH,
    HISTORY_PATH,
};
