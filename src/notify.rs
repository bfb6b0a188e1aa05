//! Toast Notifications
//!
//! Site-global success/warning/error toasts, appended to the body and
//! removed after their timeout.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NotifyLevel {
    Success,
    Warning,
    Error,
}

impl NotifyLevel {
    fn class(self) -> &'static str {
        match self {
            NotifyLevel::Success => "success",
            NotifyLevel::Warning => "warning",
            NotifyLevel::Error => "error",
        }
    }
}

/// Show a toast for `timeout_ms`. `html` may carry markup, matching the
/// server-provided messages.
pub fn notify(level: NotifyLevel, html: &str, timeout_ms: u32) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let Ok(toast) = doc.create_element("div") else {
        return;
    };
    toast.set_class_name(&format!("alert-toast top-center {}", level.class()));
    toast.set_inner_html(html);
    if body.append_child(&toast).is_err() {
        return;
    }
    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        toast.remove();
    });
}

pub fn success(html: &str, timeout_ms: u32) {
    notify(NotifyLevel::Success, html, timeout_ms);
}

pub fn warning(html: &str, timeout_ms: u32) {
    notify(NotifyLevel::Warning, html, timeout_ms);
}

pub fn error(html: &str, timeout_ms: u32) {
    notify(NotifyLevel::Error, html, timeout_ms);
}
