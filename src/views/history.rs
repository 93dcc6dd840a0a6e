use crate::history::{EMPTY_HISTORY_NOTICE, HISTORY_ERROR_NOTICE, HistoryLoader, HistoryView};
use crate::overlay::{Overlay, OverlayController};
use crate::views::shared::Modal;
use dioxus::prelude::*;

#[component]
pub fn HistoryModal(overlays: Signal<OverlayController>, history: Signal<HistoryLoader>) -> Element {
    let mut overlays = overlays;
    let state = overlays.read().state(Overlay::ChatHistory);
    let view = history.read().view().clone();

    rsx! {
        Modal {
            id: "chat-history-modal",
            title: "Chat history",
            state,
            on_close: move |_| overlays.with_mut(|o| o.close(Overlay::ChatHistory)),
            div { id: "chat-history-content", class: "chat-history-content",
                HistoryContent { view }
            }
        }
    }
}

#[component]
fn HistoryContent(view: HistoryView) -> Element {
    match view {
        HistoryView::Idle => rsx! {},
        HistoryView::Loading => rsx! {
            div { class: "loading-spinner" }
        },
        HistoryView::Empty => rsx! {
            div { class: "no-history", {EMPTY_HISTORY_NOTICE} }
        },
        HistoryView::Failed => rsx! {
            div { class: "error", {HISTORY_ERROR_NOTICE} }
        },
        HistoryView::Loaded(blocks) => rsx! {
            for (i, block) in blocks.iter().enumerate() {
                div { key: "{i}", class: "history-message",
                    div { class: "history-user", "You: {block.message}" }
                    div { class: "history-bot",
                        "Bot: "
                        span { dangerous_inner_html: "{block.response_html}" }
                    }
                    div { class: "history-time", "{block.timestamp}" }
                }
            }
        },
    }
}
