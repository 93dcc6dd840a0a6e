use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::format::format_bot_response;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// A rendered transcript line. Only formatted bot messages are turned into markup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub formatted: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            formatted: false,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            formatted: true,
        }
    }

    pub fn bot_plain(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            formatted: false,
        }
    }

    pub fn html(&self) -> Option<String> {
        match (self.sender, self.formatted) {
            (Sender::Bot, true) => Some(format_bot_response(&self.text)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub message: String,
    pub response: String,
    pub timestamp: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Info,
        }
    }
}

/// The two pages the application can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppPage {
    Landing,
    Chat,
}

impl AppPage {
    pub fn from_path(path: &str) -> Self {
        if path.trim_start_matches('/').starts_with("chat") {
            AppPage::Chat
        } else {
            AppPage::Landing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_formatted_bot_messages_render_markup() {
        assert_eq!(ChatMessage::user("**hi**").html(), None);
        assert_eq!(ChatMessage::bot_plain("**hi**").html(), None);
        assert_eq!(
            ChatMessage::bot("**hi**").html().as_deref(),
            Some("<strong>hi</strong>")
        );
    }

    #[test]
    fn theme_mode_parses_stored_values() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light\n".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("octane".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn page_is_picked_from_path() {
        assert_eq!(AppPage::from_path("/chat/"), AppPage::Chat);
        assert_eq!(AppPage::from_path("chat"), AppPage::Chat);
        assert_eq!(AppPage::from_path("/"), AppPage::Landing);
        assert_eq!(AppPage::from_path("/contact/"), AppPage::Landing);
    }
}
