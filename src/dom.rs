//! DOM Utilities
//!
//! Viewport test, animation-frame throttling and one-shot global listener
//! binding shared by the gallery and the lazy-image loader.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Is `el` within the viewport? With `partial` any overlap counts, otherwise
/// the element must fit entirely.
pub fn is_in_viewport(el: &web_sys::Element, partial: bool) -> bool {
    let Some(win) = web_sys::window() else {
        return false;
    };
    let viewport_h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let viewport_w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let rect = el.get_bounding_client_rect();

    if partial {
        rect.bottom() >= 0.0 && rect.right() >= 0.0 && rect.top() <= viewport_h && rect.left() <= viewport_w
    } else {
        rect.top() >= 0.0 && rect.left() >= 0.0 && rect.bottom() <= viewport_h && rect.right() <= viewport_w
    }
}

/// Wrap `f` so bursts of calls collapse to one invocation per animation
/// frame. Scroll and resize handlers go through this.
pub fn raf_throttle(f: impl Fn() + 'static) -> impl Fn() + Clone + 'static {
    let f = Rc::new(f);
    let scheduled = Rc::new(Cell::new(false));
    move || {
        if scheduled.replace(true) {
            return;
        }
        let f = Rc::clone(&f);
        let scheduled = Rc::clone(&scheduled);
        let cb = Closure::once_into_js(move |_timestamp: f64| {
            scheduled.set(false);
            f();
        });
        if let Some(win) = web_sys::window() {
            let _ = win.request_animation_frame(cb.unchecked_ref());
        }
    }
}

/// Bind a document-level event handler for the page's lifetime.
pub fn bind_document_listener(event: &str, handler: impl Fn() + 'static) {
    let cb = Closure::<dyn FnMut()>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    }
    cb.forget();
}

/// Bind a window-level event handler for the page's lifetime.
pub fn bind_window_listener(event: &str, handler: impl Fn() + 'static) {
    let cb = Closure::<dyn FnMut()>::new(handler);
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    }
    cb.forget();
}

/// Current `location.search`, empty when unavailable.
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Current `location.pathname`, `/` when unavailable.
pub fn location_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Full `location.href`, empty when unavailable.
pub fn location_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Resolve a root-relative URL against the page origin. The HTTP client
/// requires absolute URLs; server-rendered links are usually root-relative.
pub fn absolute_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{url}")
}

/// Server-rendered page flag from the body dataset
/// (`<body data-user-can-rate="true">` → `dataset_value("userCanRate")`).
pub fn dataset_value(key: &str) -> Option<String> {
    let body = web_sys::window()?.document()?.body()?;
    body.dataset().get(key)
}

pub fn dataset_flag(key: &str) -> bool {
    dataset_value(key).as_deref() == Some("true")
}
