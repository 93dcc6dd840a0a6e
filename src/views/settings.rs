use crate::overlay::{Overlay, OverlayController};
use crate::services::AppServices;
use crate::theme::{persist_theme, theme_definition};
use crate::types::ThemeMode;
use crate::views::shared::Modal;
use dioxus::prelude::*;

fn choose_theme(mut theme: Signal<ThemeMode>, services: &AppServices, mode: ThemeMode) {
    theme.set(mode);
    if let Err(err) = persist_theme(services.theme_store.as_ref(), mode) {
        tracing::warn!("theme preference not saved: {err}");
    }
}

#[component]
pub fn SettingsModal(overlays: Signal<OverlayController>, theme: Signal<ThemeMode>) -> Element {
    let mut overlays = overlays;
    let state = overlays.read().state(Overlay::Settings);

    rsx! {
        Modal {
            id: "settings-modal",
            title: "Settings",
            state,
            on_close: move |_| overlays.with_mut(|o| o.close(Overlay::Settings)),
            div { class: "settings-section",
                h3 { class: "section-title", "Theme" }
                div { class: "theme-toggle",
                    for mode in [ThemeMode::Light, ThemeMode::Dark] {
                        ThemeOption { key: "{mode}", mode, theme }
                    }
                }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "Account" }
                p { class: "text-muted", "Permanently remove your account and chat history." }
                button {
                    id: "delete-account",
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| overlays.with_mut(|o| o.open(Overlay::DeleteAccount)),
                    "Delete account"
                }
            }
        }
    }
}

#[component]
fn ThemeOption(mode: ThemeMode, theme: Signal<ThemeMode>) -> Element {
    let services = use_context::<AppServices>();
    let definition = theme_definition(mode);
    rsx! {
        button {
            id: "theme-{mode}",
            class: format_args!("theme-option {}", if theme() == mode { "active" } else { "" }),
            r#type: "button",
            onclick: move |_| choose_theme(theme, &services, mode),
            "{definition.toggle_label}"
        }
    }
}

#[component]
pub fn DeleteAccountModal(
    overlays: Signal<OverlayController>,
    on_confirm: EventHandler<()>,
) -> Element {
    let mut overlays = overlays;
    let state = overlays.read().state(Overlay::DeleteAccount);

    rsx! {
        Modal {
            id: "delete-account-modal",
            title: "Delete account",
            state,
            on_close: move |_| overlays.with_mut(|o| o.close(Overlay::DeleteAccount)),
            p { "This permanently deletes your account and all of your chat history. This cannot be undone." }
            div { class: "modal-actions",
                button {
                    id: "cancel-delete",
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| overlays.with_mut(|o| o.close(Overlay::DeleteAccount)),
                    "Cancel"
                }
                button {
                    id: "confirm-delete",
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| on_confirm.call(()),
                    "Delete"
                }
            }
        }
    }
}
