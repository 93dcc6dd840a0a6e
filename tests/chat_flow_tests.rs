//! Integration tests for the chat page flows
//!
//! Drives the transcript, history loader, contact form and account notices
//! against an in-memory backend, the same way the views do.

use async_trait::async_trait;
use chatbot_web::account::{self, DELETE_ERROR_NOTICE, DELETED_NOTICE, DELETING_NOTICE};
use chatbot_web::api::{ApiError, ApiResult, ChatBackend};
use chatbot_web::history::{EMPTY_HISTORY_NOTICE, HistoryLoader, HistoryView};
use chatbot_web::landing::ContactForm;
use chatbot_web::landing::contact::CONTACT_ERROR_NOTICE;
use chatbot_web::notify::NotificationCenter;
use chatbot_web::overlay::{Overlay, OverlayController};
use chatbot_web::transcript::{CONNECTION_FALLBACK, EMPTY_INPUT_NOTICE, Transcript, TranscriptEntry};
use chatbot_web::types::{HistoryEntry, NotificationKind, Sender};
use reqwest::StatusCode;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Canned backend that counts every call it receives.
#[derive(Default)]
struct FakeBackend {
    calls: Cell<usize>,
    sent: RefCell<Vec<String>>,
    reply: Option<String>,
    history: Vec<HistoryEntry>,
    delete_ok: bool,
    /// Overlays the page shows; inspected when the delete request starts.
    overlays: Option<Rc<RefCell<OverlayController>>>,
    confirm_open_at_delete: Cell<Option<bool>>,
}

impl FakeBackend {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            delete_ok: true,
            ..Self::default()
        }
    }

    fn offline() -> Self {
        Self::default()
    }

    fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

#[async_trait(?Send)]
impl ChatBackend for FakeBackend {
    async fn send_message(&self, message: &str) -> ApiResult<String> {
        self.bump();
        self.sent.borrow_mut().push(message.to_string());
        self.reply
            .clone()
            .ok_or(ApiError::Status(StatusCode::BAD_GATEWAY))
    }

    async fn chat_history(&self) -> ApiResult<Vec<HistoryEntry>> {
        self.bump();
        if self.reply.is_none() {
            return Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(self.history.clone())
    }

    async fn delete_account(&self) -> ApiResult<()> {
        self.bump();
        if let Some(overlays) = &self.overlays {
            let open = overlays.borrow().is_open(Overlay::DeleteAccount);
            self.confirm_open_at_delete.set(Some(open));
        }
        if self.delete_ok {
            Ok(())
        } else {
            Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }

    async fn submit_contact(&self, fields: &BTreeMap<String, String>) -> ApiResult<String> {
        self.bump();
        match &self.reply {
            Some(_) => Ok(format!("Thanks, {}!", fields["name"])),
            None => Err(ApiError::Status(StatusCode::SERVICE_UNAVAILABLE)),
        }
    }
}

async fn send(transcript: &mut Transcript, backend: &FakeBackend, raw: &str) {
    match transcript.begin_send(raw) {
        Ok(pending) => {
            let outcome = backend.send_message(&pending.text).await;
            transcript.complete_send(pending.token, outcome);
        }
        Err(notice) => panic!("unexpected notice: {}", notice.message),
    }
}

mod sending {
    use super::*;

    #[tokio::test]
    async fn test_blank_input_makes_no_request() {
        let backend = FakeBackend::replying("unused");
        let mut transcript = Transcript::default();

        let notice = transcript.begin_send("   \n").unwrap_err();
        assert_eq!(notice.message, EMPTY_INPUT_NOTICE);
        assert_eq!(notice.kind, NotificationKind::Error);
        assert!(transcript.is_empty());
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_send_appends_user_then_formatted_reply() {
        let backend = FakeBackend::replying("Here is **bold** news");
        let mut transcript = Transcript::default();

        let pending = transcript.begin_send("  hello  ").unwrap();
        assert_eq!(pending.text, "hello");
        assert_eq!(transcript.typing_count(), 1);

        let outcome = backend.send_message(&pending.text).await;
        transcript.complete_send(pending.token, outcome);

        assert_eq!(backend.calls.get(), 1);
        assert_eq!(backend.sent.borrow().as_slice(), ["hello"]);
        assert_eq!(transcript.typing_count(), 0);

        let messages: Vec<_> = transcript.messages().collect();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "hello");
        assert_eq!(messages[1].sender, Sender::Bot);
        assert_eq!(
            messages[1].html().as_deref(),
            Some("Here is <strong>bold</strong> news")
        );
    }

    #[tokio::test]
    async fn test_transport_failure_shows_connection_fallback() {
        let backend = FakeBackend::offline();
        let mut transcript = Transcript::default();

        send(&mut transcript, &backend, "anyone there?").await;

        let last = transcript.messages().last().unwrap();
        assert_eq!(last.text, CONNECTION_FALLBACK);
        assert_eq!(transcript.typing_count(), 0);
    }

    #[tokio::test]
    async fn test_overlapping_sends_remove_their_own_indicator() {
        let backend = FakeBackend::replying("ok");
        let mut transcript = Transcript::default();

        let first = transcript.begin_send("one").unwrap();
        let second = transcript.begin_send("two").unwrap();
        assert_eq!(transcript.typing_count(), 2);

        let reply = backend.send_message(&second.text).await;
        transcript.complete_send(second.token, reply);
        assert_eq!(transcript.typing_count(), 1);
        assert!(
            transcript
                .entries()
                .iter()
                .any(|entry| *entry == TranscriptEntry::Typing(first.token))
        );

        let reply = backend.send_message(&first.text).await;
        transcript.complete_send(first.token, reply);
        assert_eq!(transcript.typing_count(), 0);
        assert_eq!(transcript.messages().count(), 4);
    }
}

mod history {
    use super::*;

    fn entry(i: usize) -> HistoryEntry {
        HistoryEntry {
            message: format!("question {i}"),
            response: format!("answer *{i}*"),
            timestamp: format!("2024-01-0{i} 10:00"),
        }
    }

    #[tokio::test]
    async fn test_history_renders_one_block_per_entry() {
        let backend = FakeBackend {
            history: (1..=3).map(entry).collect(),
            ..FakeBackend::replying("ok")
        };
        let mut loader = HistoryLoader::default();

        let token = loader.begin();
        assert_eq!(*loader.view(), HistoryView::Loading);
        assert!(loader.finish(token, backend.chat_history().await));

        let HistoryView::Loaded(blocks) = loader.view() else {
            panic!("expected loaded history, got {:?}", loader.view());
        };
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].message, "question 1");
        assert_eq!(blocks[0].response_html, "answer <em>1</em>");
    }

    #[tokio::test]
    async fn test_empty_history_shows_notice_state() {
        let backend = FakeBackend::replying("ok");
        let mut loader = HistoryLoader::default();

        let token = loader.begin();
        loader.finish(token, backend.chat_history().await);
        assert_eq!(*loader.view(), HistoryView::Empty);
        assert!(EMPTY_HISTORY_NOTICE.starts_with("No chat history found"));
    }

    #[tokio::test]
    async fn test_reopening_discards_the_slower_load() {
        let backend = FakeBackend {
            history: vec![entry(1)],
            ..FakeBackend::replying("ok")
        };
        let mut loader = HistoryLoader::default();

        let stale = loader.begin();
        let fresh = loader.begin();
        assert!(loader.finish(fresh, backend.chat_history().await));
        assert!(!loader.finish(stale, Err(ApiError::Status(StatusCode::GATEWAY_TIMEOUT))));
        assert!(matches!(loader.view(), HistoryView::Loaded(blocks) if blocks.len() == 1));
    }

    #[tokio::test]
    async fn test_failed_load_shows_error_state() {
        let backend = FakeBackend::offline();
        let mut loader = HistoryLoader::default();

        let token = loader.begin();
        loader.finish(token, backend.chat_history().await);
        assert_eq!(*loader.view(), HistoryView::Failed);
    }
}

mod account_deletion {
    use super::*;

    /// Confirms a deletion the way the chat page does and returns the
    /// request's outcome.
    async fn confirm(
        backend: &FakeBackend,
        overlays: &Rc<RefCell<OverlayController>>,
        notices: &mut NotificationCenter,
    ) -> ApiResult<()> {
        account::begin_deletion(&mut overlays.borrow_mut(), notices);
        backend.delete_account().await
    }

    fn watching(mut backend: FakeBackend) -> (FakeBackend, Rc<RefCell<OverlayController>>) {
        let overlays = Rc::new(RefCell::new(OverlayController::default()));
        overlays.borrow_mut().open(Overlay::Settings);
        overlays.borrow_mut().open(Overlay::DeleteAccount);
        backend.overlays = Some(overlays.clone());
        (backend, overlays)
    }

    #[tokio::test]
    async fn test_confirmation_closes_before_request_on_success() {
        let (backend, overlays) = watching(FakeBackend::replying("ok"));
        let mut notices = NotificationCenter::default();

        let result = confirm(&backend, &overlays, &mut notices).await;

        assert!(result.is_ok());
        assert_eq!(backend.confirm_open_at_delete.get(), Some(false));
        assert_eq!(overlays.borrow().open_modal(), None);
        assert_eq!(notices.current().unwrap().message, DELETING_NOTICE);
    }

    #[tokio::test]
    async fn test_confirmation_closes_before_request_on_failure() {
        let (backend, overlays) = watching(FakeBackend::offline());
        let mut notices = NotificationCenter::default();

        let result = confirm(&backend, &overlays, &mut notices).await;

        assert!(result.is_err());
        assert_eq!(backend.confirm_open_at_delete.get(), Some(false));
        assert_eq!(overlays.borrow().open_modal(), None);
        assert_eq!(
            account::deletion_outcome_notice(&result).message,
            DELETE_ERROR_NOTICE
        );
    }

    #[tokio::test]
    async fn test_successful_delete_announces_success() {
        let backend = FakeBackend::replying("ok");
        let result = backend.delete_account().await;
        let notice = account::deletion_outcome_notice(&result);
        assert_eq!(notice.kind, NotificationKind::Success);
        assert_eq!(notice.message, DELETED_NOTICE);
        assert_eq!(backend.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_server_error_is_reported_generically() {
        let backend = FakeBackend::offline();
        let result = backend.delete_account().await;
        let notice = account::deletion_outcome_notice(&result);
        assert_eq!(notice.kind, NotificationKind::Error);
        assert_eq!(notice.message, DELETE_ERROR_NOTICE);
    }
}

mod contact {
    use super::*;
    use chatbot_web::landing::ContactFields;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        }
    }

    #[tokio::test]
    async fn test_success_resets_fields_and_shows_server_message() {
        let backend = FakeBackend::replying("ok");
        let mut form = ContactForm::default();

        let token = form.begin().unwrap();
        let outcome = backend.submit_contact(&filled().to_payload()).await;
        assert!(form.finish(token, outcome));

        let status = form.status().unwrap();
        assert!(status.success);
        assert_eq!(status.message, "Thanks, Ada!");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_fields() {
        let backend = FakeBackend::offline();
        let mut form = ContactForm::default();

        let token = form.begin().unwrap();
        let outcome = backend.submit_contact(&filled().to_payload()).await;
        assert!(!form.finish(token, outcome));
        assert_eq!(form.status().unwrap().message, CONTACT_ERROR_NOTICE);
        assert_eq!(backend.calls.get(), 1);
    }
}
