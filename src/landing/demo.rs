use crate::types::ChatMessage;

pub const DEMO_FOLLOW_UP: &str =
    "I can also help with research, answer questions, and even tell jokes!";
/// Messages the demo is trimmed back to once the script ends.
pub const DEMO_KEEP: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoStep {
    ShowTyping,
    Reply,
    Trim,
}

/// Each step runs after the delay (ms) since the previous one.
pub const DEMO_SCRIPT: [(u64, DemoStep); 3] = [
    (4000, DemoStep::ShowTyping),
    (2000, DemoStep::Reply),
    (8000, DemoStep::Trim),
];

#[derive(Clone, Debug, PartialEq)]
pub struct DemoChat {
    messages: Vec<ChatMessage>,
    typing: bool,
}

impl DemoChat {
    pub fn seeded() -> Self {
        Self {
            messages: vec![
                ChatMessage::user("Hi! What can you do?"),
                ChatMessage::bot_plain(
                    "I can chat about anything, check the weather, and help you plan your day.",
                ),
                ChatMessage::user("What's the weather in London?"),
            ],
            typing: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn apply(&mut self, step: DemoStep) {
        match step {
            DemoStep::ShowTyping => self.typing = true,
            DemoStep::Reply => {
                self.typing = false;
                self.messages.push(ChatMessage::bot_plain(DEMO_FOLLOW_UP));
            }
            DemoStep::Trim => {
                self.typing = false;
                self.messages.truncate(DEMO_KEEP);
            }
        }
    }
}
