use crate::tokens::{RequestToken, RequestTokens};
use crate::types::{Notification, NotificationKind};

pub const NOTIFICATION_DISPLAY_MS: u64 = 5000;
pub const NOTIFICATION_FADE_MS: u64 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticePhase {
    #[default]
    Hidden,
    Visible,
    Fading,
}

pub struct NoticePalette {
    pub background: &'static str,
    pub color: &'static str,
    pub border: &'static str,
}

pub fn palette(kind: NotificationKind) -> NoticePalette {
    match kind {
        NotificationKind::Success => NoticePalette {
            background: "#d1fae5",
            color: "#065f46",
            border: "#a7f3d0",
        },
        NotificationKind::Error => NoticePalette {
            background: "#fee2e2",
            color: "#dc2626",
            border: "#fecaca",
        },
        NotificationKind::Info => NoticePalette {
            background: "#dbeafe",
            color: "#1e40af",
            border: "#bfdbfe",
        },
    }
}

/// The single notification banner. Showing a new notification replaces the
/// current one, and timers started for the replaced one become no-ops.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationCenter {
    current: Option<Notification>,
    phase: NoticePhase,
    tokens: RequestTokens,
}

impl NotificationCenter {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn phase(&self) -> NoticePhase {
        self.phase
    }

    pub fn show(&mut self, notification: Notification) -> RequestToken {
        self.current = Some(notification);
        self.phase = NoticePhase::Visible;
        self.tokens.issue()
    }

    pub fn begin_fade(&mut self, token: RequestToken) -> bool {
        if !self.tokens.is_current(token) || self.phase != NoticePhase::Visible {
            return false;
        }
        self.phase = NoticePhase::Fading;
        true
    }

    pub fn hide(&mut self, token: RequestToken) -> bool {
        if !self.tokens.is_current(token) {
            return false;
        }
        self.phase = NoticePhase::Hidden;
        true
    }

    /// Inline style for the banner in its current phase.
    pub fn style(&self) -> String {
        let Some(notification) = &self.current else {
            return "display: none;".to_string();
        };
        let colors = palette(notification.kind);
        let (display, opacity, transform) = match self.phase {
            NoticePhase::Visible => ("block", "1", "translateY(0)"),
            NoticePhase::Fading => ("block", "0", "translateY(-20px)"),
            NoticePhase::Hidden => ("none", "0", "translateY(-20px)"),
        };
        format!(
            "display: {display}; opacity: {opacity}; transform: {transform}; \
             background-color: {}; color: {}; border: 1px solid {};",
            colors.background, colors.color, colors.border
        )
    }
}
