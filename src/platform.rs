//! Thin wrappers over what differs between the browser and native targets:
//! timers, the frame clock, cookies, the page location and the root element.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

use crate::types::ThemeMode;

#[cfg(not(target_arch = "wasm32"))]
static CLOCK_START: Lazy<Instant> = Lazy::new(Instant::now);

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_FRAME: Duration = Duration::from_millis(16);

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Milliseconds on a monotonic clock.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    CLOCK_START.elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Waits for the next animation frame.
#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    tokio::time::sleep(NATIVE_FRAME).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(&resolve);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

#[cfg(target_arch = "wasm32")]
pub fn document_cookies() -> Option<String> {
    document()?.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn document_cookies() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn meta_content(name: &str) -> Option<String> {
    document()?
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??
        .get_attribute("content")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn meta_content(_name: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn initial_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn initial_path() -> String {
    std::env::var("CHAT_START_PATH").unwrap_or_else(|_| "/".to_string())
}

/// Full navigation in the browser. Native shells switch pages in-app instead.
#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window()
        && window.location().set_href(path).is_err()
    {
        tracing::warn!("failed to navigate to {path}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(path: &str) {
    tracing::debug!("redirect to {path} handled in-app");
}

/// Mirrors the theme onto the root element's `data-theme` attribute.
#[cfg(target_arch = "wasm32")]
pub fn set_root_theme(mode: ThemeMode) {
    let root = document().and_then(|doc| doc.document_element());
    if let Some(root) = root
        && root
            .set_attribute(crate::theme::THEME_ATTRIBUTE, mode.as_str())
            .is_err()
    {
        tracing::warn!("failed to set root theme attribute");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_root_theme(mode: ThemeMode) {
    tracing::debug!(theme = mode.as_str(), "theme applied through injected styles");
}
