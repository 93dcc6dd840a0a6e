use crate::api::{ApiError, ApiResult};
use crate::tokens::{RequestToken, RequestTokens};
use crate::types::{ChatMessage, Notification};

pub const TYPING_LABEL: &str = "ChatBot is typing";
pub const EMPTY_INPUT_NOTICE: &str = "Please enter a message";
pub const RESPONSE_FALLBACK: &str =
    "Sorry, I'm having trouble responding right now. Please try again.";
pub const CONNECTION_FALLBACK: &str =
    "Sorry, I'm having trouble connecting to the server. Please try again.";

#[derive(Clone, Debug, PartialEq)]
pub enum TranscriptEntry {
    Message(ChatMessage),
    /// Placeholder owned by the send that created it.
    Typing(RequestToken),
}

/// A send that passed validation and now needs exactly one backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub token: RequestToken,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    tokens: RequestTokens,
}

impl Transcript {
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter().filter_map(|entry| match entry {
            TranscriptEntry::Message(message) => Some(message),
            TranscriptEntry::Typing(_) => None,
        })
    }

    pub fn typing_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, TranscriptEntry::Typing(_)))
            .count()
    }

    /// Validates the raw input and, when it is not blank, appends the user
    /// message and a typing indicator. A blank input yields the notification
    /// to show instead, and no send exists to perform.
    pub fn begin_send(&mut self, raw: &str) -> Result<PendingSend, Notification> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(Notification::error(EMPTY_INPUT_NOTICE));
        }

        let token = self.tokens.issue();
        self.entries
            .push(TranscriptEntry::Message(ChatMessage::user(text)));
        self.entries.push(TranscriptEntry::Typing(token));
        Ok(PendingSend {
            token,
            text: text.to_string(),
        })
    }

    /// Replaces the send's typing indicator with the bot reply or a fallback.
    pub fn complete_send(&mut self, token: RequestToken, outcome: ApiResult<String>) {
        let typing_at = self
            .entries
            .iter()
            .position(|entry| matches!(entry, TranscriptEntry::Typing(t) if *t == token));
        if let Some(index) = typing_at {
            self.entries.remove(index);
        } else {
            tracing::debug!(token = token.value(), "completed send had no typing indicator");
        }

        let reply = match outcome {
            Ok(response) => ChatMessage::bot(response),
            Err(err) => {
                tracing::error!("chat request failed: {err}");
                ChatMessage::bot_plain(fallback_for(&err))
            }
        };
        self.entries.push(TranscriptEntry::Message(reply));
    }
}

fn fallback_for(err: &ApiError) -> &'static str {
    if err.is_rejection() {
        RESPONSE_FALLBACK
    } else {
        CONNECTION_FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NotificationKind, Sender};
    use reqwest::StatusCode;

    #[test]
    fn blank_input_is_rejected_without_touching_transcript() {
        let mut transcript = Transcript::default();
        let notice = transcript.begin_send("   \n\t").unwrap_err();
        assert_eq!(notice.kind, NotificationKind::Error);
        assert_eq!(notice.message, EMPTY_INPUT_NOTICE);
        assert!(transcript.is_empty());
    }

    #[test]
    fn send_appends_trimmed_user_message_and_typing() {
        let mut transcript = Transcript::default();
        let pending = transcript.begin_send("  hello  ").unwrap();
        assert_eq!(pending.text, "hello");
        assert_eq!(
            transcript.entries(),
            &[
                TranscriptEntry::Message(ChatMessage::user("hello")),
                TranscriptEntry::Typing(pending.token),
            ]
        );
    }

    #[test]
    fn success_replaces_typing_with_formatted_reply() {
        let mut transcript = Transcript::default();
        let pending = transcript.begin_send("hi").unwrap();
        transcript.complete_send(pending.token, Ok("**hey**".into()));

        assert_eq!(transcript.typing_count(), 0);
        let last = transcript.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.formatted);
        assert_eq!(last.html().as_deref(), Some("<strong>hey</strong>"));
    }

    #[test]
    fn failures_use_generic_fallbacks() {
        let mut transcript = Transcript::default();
        let rejected = transcript.begin_send("one").unwrap();
        let offline = transcript.begin_send("two").unwrap();
        transcript.complete_send(rejected.token, Err(ApiError::Rejected(Some("boom".into()))));
        transcript.complete_send(offline.token, Err(ApiError::Status(StatusCode::BAD_GATEWAY)));

        let bot_lines = transcript
            .messages()
            .filter(|m| m.sender == Sender::Bot)
            .map(|m| (m.text.as_str(), m.formatted))
            .collect::<Vec<_>>();
        assert_eq!(
            bot_lines,
            vec![(RESPONSE_FALLBACK, false), (CONNECTION_FALLBACK, false)]
        );
    }

    #[test]
    fn out_of_order_completion_removes_the_right_indicator() {
        let mut transcript = Transcript::default();
        let first = transcript.begin_send("first").unwrap();
        let second = transcript.begin_send("second").unwrap();

        transcript.complete_send(second.token, Ok("reply to second".into()));
        assert_eq!(transcript.typing_count(), 1);
        assert!(
            transcript
                .entries()
                .contains(&TranscriptEntry::Typing(first.token))
        );

        transcript.complete_send(first.token, Ok("reply to first".into()));
        assert_eq!(transcript.typing_count(), 0);
        let texts = transcript.messages().map(|m| m.text.as_str()).collect::<Vec<_>>();
        assert_eq!(
            texts,
            vec!["first", "second", "reply to second", "reply to first"]
        );
    }
}
