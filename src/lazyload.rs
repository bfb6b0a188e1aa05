//! Lazy Image Loading
//!
//! Promotes `data-src`/`data-srcset` to the live attributes for lazy-marked
//! images once they come near the viewport. The gallery calls
//! [`lazyload_init`] after every render batch; the first call also binds the
//! scroll/resize listeners that promote images entering the viewport later.

use std::cell::Cell;

use wasm_bindgen::JsCast;

use crate::dom;

thread_local! {
    static LISTENERS_BOUND: Cell<bool> = const { Cell::new(false) };
}

pub fn lazyload_init() {
    promote_visible();
    if LISTENERS_BOUND.with(|bound| bound.replace(true)) {
        return;
    }
    let tick = dom::raf_throttle(promote_visible);
    dom::bind_document_listener("scroll", tick.clone());
    dom::bind_window_listener("resize", tick);
}

fn promote_visible() {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = doc.query_selector_all("img.lazyload") else {
        return;
    };
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        let Ok(img) = node.dyn_into::<web_sys::HtmlImageElement>() else {
            continue;
        };
        if dom::is_in_viewport(&img, true) {
            promote(&img);
        }
    }
}

fn promote(img: &web_sys::HtmlImageElement) {
    if let Some(srcset) = img.get_attribute("data-srcset") {
        let _ = img.set_attribute("srcset", &srcset);
    }
    match img.get_attribute("data-sizes").as_deref() {
        // `auto`: the rendered slot width decides which variant loads.
        Some("auto") => {
            let width = img.client_width();
            if width > 0 {
                let _ = img.set_attribute("sizes", &format!("{width}px"));
            }
        }
        Some(sizes) => {
            let _ = img.set_attribute("sizes", sizes);
        }
        None => {}
    }
    if let Some(src) = img.get_attribute("data-src") {
        img.set_src(&src);
    }
    let classes = img.class_list();
    let _ = classes.remove_1("lazyload");
    let _ = classes.add_1("lazyloaded");
}
