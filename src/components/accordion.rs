//! Accordion Component
//!
//! Collapsible content section. The expanded state animates through explicit
//! height/opacity and survives navigation within the tab via
//! `sessionStorage`, keyed by the accordion id.

use leptos::prelude::*;

fn saved_state(id: &str) -> Option<bool> {
    let storage = web_sys::window()?.session_storage().ok()??;
    let state = storage.get_item(id).ok()??;
    Some(state == "expanded")
}

fn save_state(id: &str, expanded: bool) {
    if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
        let state = if expanded { "expanded" } else { "collapsed" };
        let _ = storage.set_item(id, state);
    }
}

#[component]
pub fn Accordion(
    /// Stable id, also the sessionStorage key
    #[prop(into)] id: String,
    #[prop(into)] header: String,
    #[prop(default = false)] expanded: bool,
    children: Children,
) -> impl IntoView {
    let initial = saved_state(&id).unwrap_or(expanded);
    let (is_expanded, set_is_expanded) = signal(initial);
    let storage_key = StoredValue::new(id);
    let content_ref = NodeRef::<leptos::html::Div>::new();

    // Height runs to scrollHeight when open so the CSS transition has a
    // concrete target; re-applied on every toggle and once after mount.
    Effect::new(move |_| {
        let expanded = is_expanded.get();
        if let Some(content) = content_ref.get_untracked() {
            let style = web_sys::HtmlElement::style(&content);
            let height = if expanded {
                format!("{}px", content.scroll_height())
            } else {
                "0".to_string()
            };
            let _ = style.set_property("height", &height);
            let _ = style.set_property("opacity", if expanded { "1" } else { "0" });
        }
    });

    let toggle = move |_: web_sys::MouseEvent| {
        let next = !is_expanded.get_untracked();
        set_is_expanded.set(next);
        save_state(&storage_key.get_value(), next);
    };

    view! {
        <div
            class="accordion"
            data-accordion=move || if is_expanded.get() { "expanded" } else { "collapsed" }
        >
            <h3 class="accordion-header" on:click=toggle>{header}</h3>
            <div class="accordion-content" node_ref=content_ref>
                {children()}
            </div>
        </div>
    }
}
