use crate::platform;
use crate::services::AppServices;
use crate::theme::{load_theme, theme_definition};
use crate::types::{AppPage, ThemeMode};
use crate::views::{ChatView, LandingView};
use dioxus::prelude::*;

const APP_CSS: Asset = asset!("/assets/app.css");

#[component]
pub fn App() -> Element {
    let services = use_context_provider(AppServices::load);
    let page = use_signal(|| AppPage::from_path(&platform::initial_path()));
    let theme = use_signal(|| load_theme(services.theme_store.as_ref()).unwrap_or_default());

    use_effect(move || platform::set_root_theme(theme()));

    rsx! {
        ThemeStyles { theme }
        PageSwitch { page, theme }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn PageSwitch(page: Signal<AppPage>, theme: Signal<ThemeMode>) -> Element {
    match page() {
        AppPage::Landing => rsx! {
            LandingView { page }
        },
        AppPage::Chat => rsx! {
            ChatView { page, theme }
        },
    }
}
