use crate::landing::contact::STATUS_CLEAR_MS;
use crate::landing::{
    ContactFields, ContactForm, DEMO_SCRIPT, DemoChat, MobileNav, RevealKind, STAT_COUNTERS,
    StatCounter, anchor_target, in_view,
};
use crate::platform;
use crate::services::AppServices;
use crate::types::AppPage;
use dioxus::html::{MountedData, ScrollBehavior};
use dioxus::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#stats", "Stats"),
    ("#demo", "Demo"),
    ("#contact", "Contact"),
];

const FEATURES: [(&str, &str, RevealKind); 3] = [
    (
        "Natural conversation",
        "Ask follow-up questions and get answers that keep the thread.",
        RevealKind::FadeIn,
    ),
    (
        "Saved history",
        "Every exchange is stored with your account so you can look back at it.",
        RevealKind::SlideIn,
    ),
    (
        "Light and dark",
        "Pick the theme that suits you. It is remembered on this device.",
        RevealKind::FadeIn,
    ),
];

/// Page-wide signals the landing sections share. `scroll_tick` bumps on
/// every scroll of the page container so reveals re-measure themselves.
#[derive(Clone, Copy, PartialEq)]
struct LandingState {
    nav: Signal<MobileNav>,
    sections: Signal<HashMap<&'static str, Rc<MountedData>>>,
    scroll_tick: Signal<u64>,
    viewport_height: Signal<f64>,
    container: Signal<Option<Rc<MountedData>>>,
}

fn refresh_reveals(mut state: LandingState) {
    state.scroll_tick.with_mut(|tick| *tick += 1);
    let Some(container) = state.container.cloned() else {
        return;
    };
    let mut viewport = state.viewport_height;
    spawn(async move {
        match container.get_client_rect().await {
            Ok(rect) if *viewport.peek() != rect.size.height => viewport.set(rect.size.height),
            Ok(_) => {}
            Err(err) => tracing::debug!("viewport not measurable: {err:?}"),
        }
    });
}

fn scroll_to_anchor(state: LandingState, href: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    let Some(section) = state.sections.read().get(id).cloned() else {
        tracing::debug!("no section for anchor {href}");
        return;
    };
    spawn(async move {
        let _ = section.scroll_to(ScrollBehavior::Smooth).await;
    });
}

fn submit_contact(fields: Signal<ContactFields>, mut form: Signal<ContactForm>, services: &AppServices) {
    let Some(token) = form.with_mut(ContactForm::begin) else {
        return;
    };
    let payload = fields.read().to_payload();
    let backend = services.backend.clone();
    spawn(async move {
        let mut fields = fields;
        let outcome = backend.submit_contact(&payload).await;
        if form.with_mut(|f| f.finish(token, outcome)) {
            fields.set(ContactFields::default());
        }
        platform::sleep_ms(STATUS_CLEAR_MS).await;
        form.with_mut(|f| f.clear_status(token));
    });
}

#[component]
pub fn LandingView(page: Signal<AppPage>) -> Element {
    let state = LandingState {
        nav: use_signal(MobileNav::default),
        sections: use_signal(HashMap::new),
        scroll_tick: use_signal(|| 0),
        viewport_height: use_signal(|| 0.0),
        container: use_signal(|| None),
    };
    let mut page = page;
    let overflow = state.nav.read().overflow();

    rsx! {
        div {
            class: "landing",
            style: "overflow-y: {overflow};",
            onmounted: move |evt: MountedEvent| {
                let mut container = state.container;
                container.set(Some(evt.data()));
                refresh_reveals(state);
            },
            onscroll: move |_| refresh_reveals(state),

            LandingHeader { state, page }

            Section { id: "hero", class: "hero", state,
                div { class: "hero-content",
                    h1 { class: "hero-title", "Your assistant, one message away" }
                    p { class: "hero-subtitle",
                        "Ask questions, plan your day and pick up where you left off."
                    }
                    button {
                        class: "btn btn-primary btn-large",
                        r#type: "button",
                        onclick: move |_| page.set(AppPage::Chat),
                        "Start chatting"
                    }
                }
            }

            Section { id: "features", class: "features", state,
                h2 { class: "section-heading", "Features" }
                div { class: "feature-grid",
                    for (title, body, kind) in FEATURES {
                        Reveal { key: "{title}", kind, state,
                            div { class: "feature-card",
                                h3 { "{title}" }
                                p { "{body}" }
                            }
                        }
                    }
                }
            }

            Section { id: "stats", class: "stats", state,
                div { class: "stat-grid",
                    for counter in STAT_COUNTERS {
                        StatCounterView { key: "{counter.caption}", counter }
                    }
                }
            }

            Section { id: "demo", class: "demo", state,
                h2 { class: "section-heading", "See it in action" }
                Reveal { kind: RevealKind::SlideIn, state, DemoChatView {} }
            }

            Section { id: "contact", class: "contact", state,
                h2 { class: "section-heading", "Get in touch" }
                ContactSection {}
            }

            footer { class: "landing-footer", "© ChatBot" }
        }
    }
}

#[component]
fn LandingHeader(state: LandingState, page: Signal<AppPage>) -> Element {
    let mut nav_signal = state.nav;
    let mut page = page;
    let nav = *state.nav.read();

    rsx! {
        header { class: "landing-header",
            a {
                class: "brand",
                href: "#hero",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    scroll_to_anchor(state, "#hero");
                },
                "ChatBot"
            }
            button {
                class: "mobile-menu-btn {nav.active_class()}",
                r#type: "button",
                aria_label: "Menu",
                aria_expanded: nav.is_open().to_string(),
                onclick: move |_| nav_signal.with_mut(MobileNav::toggle),
                span {}
                span {}
                span {}
            }
            nav { class: "landing-nav {nav.active_class()}",
                for (href, label) in NAV_LINKS {
                    AnchorLink { key: "{href}", href, label, state }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        nav_signal.with_mut(MobileNav::close);
                        page.set(AppPage::Chat);
                    },
                    "Open chat"
                }
            }
        }
    }
}

#[component]
fn AnchorLink(href: &'static str, label: &'static str, state: LandingState) -> Element {
    rsx! {
        a {
            class: "nav-link",
            href,
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                let mut nav = state.nav;
                nav.with_mut(MobileNav::close);
                scroll_to_anchor(state, href);
            },
            "{label}"
        }
    }
}

/// Registers itself under `id` so anchors can scroll to it.
#[component]
fn Section(id: &'static str, class: &'static str, state: LandingState, children: Element) -> Element {
    let mut sections = state.sections;
    rsx! {
        section {
            id,
            class,
            onmounted: move |evt: MountedEvent| {
                sections.with_mut(|map| {
                    map.insert(id, evt.data());
                });
            },
            {children}
        }
    }
}

#[component]
fn Reveal(kind: RevealKind, state: LandingState, children: Element) -> Element {
    let mut node = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut visible = use_signal(|| false);

    use_effect(move || {
        let _tick = *state.scroll_tick.read();
        let viewport = *state.viewport_height.read();
        if let Some(element) = node.cloned() {
            spawn(async move {
                if let Ok(rect) = element.get_client_rect().await {
                    let shown = in_view(rect.origin.y, viewport);
                    if *visible.peek() != shown {
                        visible.set(shown);
                    }
                }
            });
        }
    });

    rsx! {
        div {
            class: kind.class_name(),
            style: kind.style(visible()),
            onmounted: move |evt: MountedEvent| node.set(Some(evt.data())),
            {children}
        }
    }
}

#[component]
fn StatCounterView(counter: StatCounter) -> Element {
    let mut label = use_signal(|| counter.label_at(0.0));

    use_future(move || async move {
        let started = platform::now_ms();
        loop {
            let elapsed = platform::now_ms() - started;
            label.set(counter.label_at(elapsed));
            if StatCounter::is_finished(elapsed) {
                break;
            }
            platform::next_frame().await;
        }
    });

    rsx! {
        div { class: "stat",
            div { class: "stat-number", "{label}" }
            div { class: "stat-caption", "{counter.caption}" }
        }
    }
}

#[component]
fn DemoChatView() -> Element {
    let mut demo = use_signal(DemoChat::seeded);

    use_future(move || async move {
        for (delay, step) in DEMO_SCRIPT {
            platform::sleep_ms(delay).await;
            demo.with_mut(|chat| chat.apply(step));
        }
    });

    let (messages, typing) = {
        let chat = demo.read();
        (chat.messages().to_vec(), chat.is_typing())
    };

    rsx! {
        div { class: "chat-demo",
            for (i, message) in messages.iter().enumerate() {
                div { key: "{i}", class: "message {message.sender.css_class()}", "{message.text}" }
            }
            if typing {
                div { class: "typing-indicator",
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

#[component]
fn ContactSection() -> Element {
    let services = use_context::<AppServices>();
    let mut fields = use_signal(ContactFields::default);
    let form = use_signal(ContactForm::default);

    let current = fields.read().clone();
    let submitting = form.read().is_submitting();
    let status = form.read().status().cloned();

    rsx! {
        form {
            id: "contact-form",
            class: "contact-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                submit_contact(fields, form, &services);
            },
            div { class: "form-row",
                input {
                    name: "name",
                    r#type: "text",
                    placeholder: "Name",
                    required: true,
                    value: "{current.name}",
                    oninput: move |evt: FormEvent| fields.with_mut(|f| f.name = evt.value()),
                }
                input {
                    name: "email",
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: "{current.email}",
                    oninput: move |evt: FormEvent| fields.with_mut(|f| f.email = evt.value()),
                }
            }
            input {
                name: "subject",
                r#type: "text",
                placeholder: "Subject",
                value: "{current.subject}",
                oninput: move |evt: FormEvent| fields.with_mut(|f| f.subject = evt.value()),
            }
            textarea {
                name: "message",
                placeholder: "Message",
                rows: "5",
                required: true,
                value: "{current.message}",
                oninput: move |evt: FormEvent| fields.with_mut(|f| f.message = evt.value()),
            }
            button {
                class: "btn btn-primary form-submit-btn",
                r#type: "submit",
                disabled: submitting,
                span { class: if submitting { "btn-text hidden" } else { "btn-text" }, "Send message" }
                span { class: if submitting { "btn-loader" } else { "btn-loader hidden" } }
            }
            if let Some(status) = status {
                div { class: "form-message {status.class()}", "{status.message}" }
            }
        }
    }
}
