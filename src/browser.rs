//! Browser-side adapters for folio-core traits.
//!
//! - `BrowserHistory` drives `window.history`
//! - `LocalStore` keeps preferences in `localStorage` as raw strings
//! - window events (popstate, keys, scroll, touch) arrive as `WindowEvent`s
//!   through a long-lived `document::eval` channel

use dioxus::document;
use folio_core::{FolioError, FolioResult, History, HistoryEntry, PreferenceStore};
use gloo::file::{Blob, ObjectUrl};
use gloo::storage::{LocalStorage, Storage};
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// `History` over the real browser history stack.
///
/// The entry state is the page id as a plain string.
#[derive(Debug, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    fn state(entry: &HistoryEntry) -> JsValue {
        match entry.page {
            Some(page) => JsValue::from_str(page.as_str()),
            None => JsValue::NULL,
        }
    }
}

impl History for BrowserHistory {
    fn push(&mut self, entry: HistoryEntry) {
        let history = gloo::utils::history();
        if let Err(e) = history.push_state_with_url(&Self::state(&entry), "", Some(&entry.fragment)) {
            tracing::warn!(error = ?e, fragment = %entry.fragment, "pushState failed");
        }
    }

    fn replace(&mut self, entry: HistoryEntry) {
        let history = gloo::utils::history();
        if let Err(e) = history.replace_state_with_url(&Self::state(&entry), "", Some(&entry.fragment)) {
            tracing::warn!(error = ?e, fragment = %entry.fragment, "replaceState failed");
        }
    }
}

/// Current `location.hash`, if the page was opened with one.
pub fn current_fragment() -> Option<String> {
    gloo::utils::window()
        .location()
        .hash()
        .ok()
        .filter(|hash| !hash.is_empty())
}

/// `PreferenceStore` over `localStorage`.
#[derive(Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> FolioResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| FolioError::Storage(format!("{e:?}")))
    }
}

/// Events forwarded from `window` listeners.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WindowEvent {
    /// Back/forward traversal
    Pop {
        page: Option<String>,
        fragment: String,
    },
    /// Alt+Arrow press that will move; the browser default was prevented
    Key { alt: bool, key: String },
    Scroll { y: f64 },
    TouchStart { y: f64 },
    TouchMove { y: f64 },
}

impl WindowEvent {
    /// History entry carried by a `Pop` event.
    pub fn history_entry(page: Option<&str>, fragment: &str) -> HistoryEntry {
        HistoryEntry {
            page: page.and_then(|p| p.parse().ok()),
            fragment: fragment.to_string(),
        }
    }
}

/// Installs the window listeners and forwards them with `dioxus.send`.
///
/// Alt+Arrow is only taken over when the navbar's `data-can-prev` /
/// `data-can-next` flag, rendered from [`folio_core::Router::can_step`], is
/// set.
pub const WINDOW_EVENTS_JS: &str = r#"
window.addEventListener("popstate", (e) => {
    const page = typeof e.state === "string" ? e.state : (e.state && e.state.page) || null;
    dioxus.send({ kind: "pop", page, fragment: window.location.hash });
});
document.addEventListener("keydown", (e) => {
    if (!e.altKey) return;
    const flag = { ArrowLeft: "canPrev", ArrowRight: "canNext" }[e.key];
    if (!flag) return;
    const nav = document.getElementById("navbar");
    // At either end the browser keeps its own Alt+Arrow (back/forward)
    if (!nav || nav.dataset[flag] !== "true") return;
    e.preventDefault();
    dioxus.send({ kind: "key", alt: true, key: e.key });
});
window.addEventListener("scroll", () => {
    dioxus.send({ kind: "scroll", y: window.pageYOffset });
}, { passive: true });
if ("ontouchstart" in window) {
    document.addEventListener("touchstart", (e) => {
        dioxus.send({ kind: "touchstart", y: e.touches[0].clientY });
    }, { passive: true });
    document.addEventListener("touchmove", (e) => {
        dioxus.send({ kind: "touchmove", y: e.touches[0].clientY });
    }, { passive: true });
}
"#;

/// Offer generated text to the user as a file save.
pub async fn save_text(file_name: &str, mime: &str, body: &str) {
    let blob = Blob::new_with_options(body, Some(mime));
    let url = ObjectUrl::from(blob);
    click_download(&url, file_name).await;
    // `url` is revoked on drop, after the click has been dispatched
}

/// Trigger a download of `href` through a temporary anchor.
pub async fn click_download(href: &str, file_name: &str) {
    let script = format!(
        r#"const a = document.createElement("a");
a.href = {href};
a.download = {name};
document.body.appendChild(a);
a.click();
document.body.removeChild(a);
return true;"#,
        href = serde_json::Value::from(href),
        name = serde_json::Value::from(file_name),
    );

    if let Err(e) = document::eval(&script).await {
        tracing::warn!(error = ?e, file_name, "Download click failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::PageId;

    #[test]
    fn window_events_decode() {
        let pop: WindowEvent =
            serde_json::from_str(r##"{ "kind": "pop", "page": "cv", "fragment": "#cv" }"##).unwrap();
        assert!(matches!(pop, WindowEvent::Pop { page: Some(ref p), .. } if p == "cv"));

        let key: WindowEvent =
            serde_json::from_str(r#"{ "kind": "key", "alt": true, "key": "ArrowLeft" }"#).unwrap();
        assert!(matches!(key, WindowEvent::Key { alt: true, .. }));

        let touch: WindowEvent = serde_json::from_str(r#"{ "kind": "touchmove", "y": 12.5 }"#).unwrap();
        assert!(matches!(touch, WindowEvent::TouchMove { y } if y == 12.5));
    }

    #[test]
    fn key_listener_respects_step_flags() {
        assert!(WINDOW_EVENTS_JS.contains(r#"getElementById("navbar")"#));
        assert!(WINDOW_EVENTS_JS.contains(r#"dataset[flag] !== "true""#));
        let guard = WINDOW_EVENTS_JS.find("dataset[flag]").unwrap();
        let prevent = WINDOW_EVENTS_JS.find("e.preventDefault()").unwrap();
        assert!(guard < prevent);
    }

    #[test]
    fn pop_state_maps_to_history_entry() {
        let entry = WindowEvent::history_entry(Some("projects"), "#projects");
        assert_eq!(entry.page, Some(PageId::Projects));

        let entry = WindowEvent::history_entry(Some("bogus"), "#bogus");
        assert_eq!(entry.page, None);
        assert_eq!(entry.page_or_default(), PageId::Home);
    }
}
