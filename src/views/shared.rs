use crate::notify::{NOTIFICATION_FADE_MS, NotificationCenter};
use crate::overlay::OverlayState;
use crate::platform;
use crate::tokens::RequestToken;
use crate::types::Notification;
use dioxus::prelude::*;

/// Shows `notification` in the banner and schedules its fade and removal.
pub fn show_notification(
    mut notices: Signal<NotificationCenter>,
    display_ms: u64,
    notification: Notification,
) {
    let token = notices.with_mut(|center| center.show(notification));
    schedule_dismiss(notices, display_ms, token);
}

/// Fades and hides the notification shown under `token`, unless a newer one
/// has replaced it by then.
pub fn schedule_dismiss(notices: Signal<NotificationCenter>, display_ms: u64, token: RequestToken) {
    spawn(async move {
        let mut notices = notices;
        platform::sleep_ms(display_ms).await;
        if notices.with_mut(|center| center.begin_fade(token)) {
            platform::sleep_ms(NOTIFICATION_FADE_MS).await;
            notices.with_mut(|center| center.hide(token));
        }
    });
}

#[component]
pub fn NotificationBanner(notices: Signal<NotificationCenter>) -> Element {
    let (message, style) = {
        let center = notices.read();
        let message = center
            .current()
            .map(|notification| notification.message.clone())
            .unwrap_or_default();
        (message, center.style())
    };
    rsx! {
        div { id: "notification", class: "notification", role: "status", style: "{style}", "{message}" }
    }
}

/// Backdrop plus panel. Clicking the backdrop or the close button calls
/// `on_close`; clicks inside the panel stay inside it.
#[component]
pub fn Modal(
    id: &'static str,
    title: &'static str,
    state: OverlayState,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            id: id,
            class: format_args!("modal-overlay {}", state.class()),
            aria_hidden: (!state.is_open()).to_string(),
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}
