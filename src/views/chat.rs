use crate::account::{self, REDIRECT_PATH};
use crate::history::HistoryLoader;
use crate::notify::NotificationCenter;
use crate::overlay::{Overlay, OverlayController};
use crate::platform;
use crate::services::AppServices;
use crate::transcript::{TYPING_LABEL, Transcript, TranscriptEntry};
use crate::types::{AppPage, ThemeMode};
use crate::views::history::HistoryModal;
use crate::views::settings::{DeleteAccountModal, SettingsModal};
use crate::views::shared::{NotificationBanner, schedule_dismiss, show_notification};
use dioxus::events::Key;
use dioxus::html::{MountedData, ScrollBehavior};
use dioxus::prelude::*;
use std::rc::Rc;

const INITIAL_SCROLL_DELAY_MS: u64 = 100;

/// Signals behind the chat page. All of them are `Copy`, so handlers take
/// the bundle by value.
#[derive(Clone, Copy)]
struct ChatState {
    transcript: Signal<Transcript>,
    input: Signal<String>,
    overlays: Signal<OverlayController>,
    notices: Signal<NotificationCenter>,
    history: Signal<HistoryLoader>,
}

impl ChatState {
    fn update_overlays(mut self, change: impl FnOnce(&mut OverlayController)) {
        self.overlays.with_mut(change);
    }
}

/// Enter sends, with or without modifiers; the input is a single line.
fn is_submit_key(key: &Key) -> bool {
    *key == Key::Enter
}

fn submit_message(mut state: ChatState, services: &AppServices) {
    let raw = state.input.cloned();
    match state.transcript.with_mut(|t| t.begin_send(&raw)) {
        Err(notice) => show_notification(state.notices, services.config.notification_ms, notice),
        Ok(pending) => {
            state.input.set(String::new());
            let backend = services.backend.clone();
            let mut transcript = state.transcript;
            spawn(async move {
                let outcome = backend.send_message(&pending.text).await;
                transcript.with_mut(|t| t.complete_send(pending.token, outcome));
            });
        }
    }
}

fn open_history(mut state: ChatState, services: &AppServices) {
    state.update_overlays(|o| o.open(Overlay::ChatHistory));
    let token = state.history.with_mut(HistoryLoader::begin);
    let backend = services.backend.clone();
    let mut history = state.history;
    spawn(async move {
        let result = backend.chat_history().await;
        history.with_mut(|loader| loader.finish(token, result));
    });
}

fn confirm_delete(mut state: ChatState, services: &AppServices, mut page: Signal<AppPage>) {
    let display_ms = services.config.notification_ms;
    let redirect_ms = services.config.redirect_delay_ms;

    let token = {
        let mut overlays = state.overlays.write();
        let mut notices = state.notices.write();
        account::begin_deletion(&mut overlays, &mut notices)
    };
    schedule_dismiss(state.notices, display_ms, token);

    let backend = services.backend.clone();
    let notices = state.notices;
    spawn(async move {
        let result = backend.delete_account().await;
        if let Err(err) = &result {
            tracing::error!("account deletion failed: {err}");
        }
        show_notification(notices, display_ms, account::deletion_outcome_notice(&result));
        if result.is_ok() {
            platform::sleep_ms(redirect_ms).await;
            platform::redirect(REDIRECT_PATH);
            page.set(AppPage::Landing);
        }
    });
}

#[component]
pub fn ChatView(page: Signal<AppPage>, theme: Signal<ThemeMode>) -> Element {
    let services = use_context::<AppServices>();
    let state = ChatState {
        transcript: use_signal(Transcript::default),
        input: use_signal(String::new),
        overlays: use_signal(OverlayController::default),
        notices: use_signal(NotificationCenter::default),
        history: use_signal(HistoryLoader::default),
    };
    let mut input = state.input;
    let mut bottom_anchor = use_signal(|| Option::<Rc<MountedData>>::None);

    use_effect(move || {
        let _entries = state.transcript.read().len();
        if let Some(anchor) = bottom_anchor() {
            spawn(async move {
                let _ = anchor.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    });

    let on_send = {
        let services = services.clone();
        move |_: MouseEvent| submit_message(state, &services)
    };
    let on_key = {
        let services = services.clone();
        move |evt: KeyboardEvent| {
            if is_submit_key(&evt.key()) {
                evt.prevent_default();
                submit_message(state, &services);
            }
        }
    };
    let on_history = {
        let services = services.clone();
        move |_: MouseEvent| open_history(state, &services)
    };
    let on_confirm_delete = {
        let services = services.clone();
        move |_: ()| confirm_delete(state, &services, page)
    };

    let entries = state.transcript.read().entries().to_vec();
    let menu_class = state.overlays.read().state(Overlay::UserMenu).class();

    rsx! {
        div {
            class: "chat-page",
            onclick: move |_| state.update_overlays(OverlayController::outside_click),
            header { class: "chat-header",
                h1 { class: "chat-title", "ChatBot" }
                div { class: "user-menu-wrap",
                    button {
                        id: "user-menu-btn",
                        class: "user-menu-btn",
                        r#type: "button",
                        aria_label: "Account menu",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            state.update_overlays(OverlayController::toggle_user_menu);
                        },
                        "☰"
                    }
                    div {
                        id: "user-menu",
                        class: "user-menu {menu_class}",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        button {
                            id: "chat-history-btn",
                            class: "menu-item",
                            r#type: "button",
                            onclick: on_history,
                            "Chat history"
                        }
                        button {
                            id: "settings-menu-btn",
                            class: "menu-item",
                            r#type: "button",
                            onclick: move |_| state.update_overlays(|o| o.open(Overlay::Settings)),
                            "Settings"
                        }
                        a { class: "menu-item", href: "/logout/", "Log out" }
                    }
                }
            }

            div { id: "chat-box", class: "chat-box",
                for (i, entry) in entries.into_iter().enumerate() {
                    TranscriptRow { key: "{i}", entry }
                }
                div {
                    class: "chat-bottom",
                    onmounted: move |evt: MountedEvent| {
                        let node = evt.data();
                        bottom_anchor.set(Some(node.clone()));
                        spawn(async move {
                            platform::sleep_ms(INITIAL_SCROLL_DELAY_MS).await;
                            let _ = node.scroll_to(ScrollBehavior::Instant).await;
                        });
                    },
                }
            }

            div { class: "chat-input",
                input {
                    id: "user-input",
                    r#type: "text",
                    placeholder: "Type your message...",
                    autocomplete: "off",
                    value: "{input}",
                    oninput: move |evt: FormEvent| input.set(evt.value()),
                    onkeydown: on_key,
                }
                button { id: "send-btn", class: "btn btn-primary", r#type: "button", onclick: on_send, "Send" }
            }

            SettingsModal { overlays: state.overlays, theme }
            DeleteAccountModal { overlays: state.overlays, on_confirm: on_confirm_delete }
            HistoryModal { overlays: state.overlays, history: state.history }
            NotificationBanner { notices: state.notices }
        }
    }
}

#[component]
fn TranscriptRow(entry: TranscriptEntry) -> Element {
    match entry {
        TranscriptEntry::Typing(_) => rsx! {
            div { class: "typing",
                {TYPING_LABEL}
                span {}
                span {}
                span {}
            }
        },
        TranscriptEntry::Message(message) => {
            let sender = message.sender.css_class();
            match message.html() {
                Some(html) => rsx! {
                    div { class: "message {sender}", dangerous_inner_html: "{html}" }
                },
                None => rsx! {
                    div { class: "message {sender}", "{message.text}" }
                },
            }
        }
    }
}
