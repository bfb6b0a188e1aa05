//! Project Gallery Component
//!
//! The infinitely-scrolling listing: card grid, filter bar and the sentinel
//! anchor that both marks the scroll trigger point and carries the feed URL.
//! Scroll, resize, sentinel clicks and post-render chaining all funnel into a
//! single tick counter; one effect evaluates the feed gate per tick.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;
use paged_feed::{Applied, FeedState, PageRequest, PageResponse};

use crate::api::{self, FormMethod};
use crate::components::{FilterBar, ProjectCard};
use crate::dom;
use crate::lazyload;
use crate::media::{card_view_model, MediaConfig};
use crate::models::ProjectsPage;
use crate::store::{self, GalleryStateStoreFields};

#[component]
pub fn ProjectGallery(
    /// Base URL of the listing endpoint; also rendered as the sentinel href
    #[prop(into)] endpoint: String,
    /// Declared method of the filter form
    #[prop(default = FormMethod::Get)] filter_method: FormMethod,
) -> impl IntoView {
    let gallery = store::use_gallery_store();

    let feed = StoredValue::new(FeedState::new());
    let endpoint = StoredValue::new(endpoint);

    // Sentinel lifecycle: shown while pages remain, fading for 200ms once the
    // feed ends, then gone for good (until a filter change brings it back).
    let (has_more, set_has_more) = signal(true);
    let (fading, set_fading) = signal(false);
    let (load_tick, set_load_tick) = signal(0u32);

    let sentinel_ref = NodeRef::<leptos::html::A>::new();

    let finish = move || {
        set_fading.set(true);
        spawn_local(async move {
            TimeoutFuture::new(200).await;
            // A filter change during the fade restores the feed; keep the
            // sentinel in that case.
            let exhausted = feed.try_with_value(|f| !f.has_next()).unwrap_or(false);
            if exhausted {
                set_has_more.set(false);
            }
        });
    };

    let apply_page = move |request: PageRequest, page: ProjectsPage| {
        let media = MediaConfig {
            media_url: page.media_url,
            default_placeholder: page.default_placeholder,
        };
        let response = PageResponse {
            items: page.projects,
            page: page.current_page,
            has_next: page.next_page,
        };
        let applied = feed
            .try_update_value(|f| f.apply_response(request, response))
            .unwrap_or(Applied::Stale);
        match applied {
            Applied::Appended { page, items, has_next } => {
                store::store_set_media(&gallery, media.clone());
                let cards = items.iter().map(|p| card_view_model(p, &media)).collect();
                if page == 1 {
                    store::store_replace_cards(&gallery, cards);
                } else {
                    store::store_append_cards(&gallery, cards);
                }
                if has_next {
                    // Chained prefetch: if the sentinel is still visible
                    // after this batch, load the next page right away.
                    set_load_tick.update(|n| *n += 1);
                } else {
                    finish();
                }
                lazyload::lazyload_init();
            }
            Applied::Finished => finish(),
            Applied::Stale => {}
        }
    };

    let issue = move |request: PageRequest, params: String, method: FormMethod| {
        spawn_local(async move {
            let url = dom::absolute_url(&endpoint.get_value());
            match api::fetch_projects(&url, &params, method).await {
                Ok(page) => apply_page(request, page),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[FEED] page {} failed: {}", request.page, err).into(),
                    );
                    feed.update_value(|f| f.fail(request));
                }
            }
        });
    };

    let maybe_load_next = move || {
        if !has_more.get_untracked() {
            return;
        }
        let Some(sentinel) = sentinel_ref.get_untracked() else {
            return;
        };
        let visible = dom::is_in_viewport(&sentinel, true);
        let Some(request) = feed.try_update_value(|f| f.try_begin_load(visible)).flatten() else {
            return;
        };
        let mut params = format!("page={}", request.page);
        let filter_query = gallery.filter_query().get_untracked();
        if !filter_query.is_empty() {
            params.push('&');
            params.push_str(&filter_query);
        }
        // Scroll loads are always GET, whatever the filter form declares.
        issue(request, params, FormMethod::Get);
    };

    // The filter bar has already written its serialization into the store
    // when this fires.
    let on_filter_change = Callback::new(move |()| {
        // Clear before the response resolves; a stale in-flight page must
        // not land in the fresh listing (generation guard in the feed).
        store::store_clear_cards(&gallery);
        set_fading.set(false);
        set_has_more.set(true);
        let Some(request) = feed.try_update_value(|f| f.reset()) else {
            return;
        };
        let query = gallery.filter_query().get_untracked();
        let mut params = String::from("page=1");
        if !query.is_empty() {
            params.push('&');
            params.push_str(&query);
        }
        issue(request, params, gallery.filter_method().get_untracked());
    });

    // One evaluation per tick. The first run on mount issues the page=1
    // request; later ticks come from scroll/resize, sentinel clicks and
    // chained prefetch.
    Effect::new(move |_| {
        let _ = load_tick.get();
        maybe_load_next();
    });

    Effect::new(move |_| {
        let tick = dom::raf_throttle(move || set_load_tick.update(|n| *n += 1));
        dom::bind_document_listener("scroll", tick.clone());
        dom::bind_window_listener("resize", tick);
    });

    view! {
        <section class="projects-section">
            <FilterBar on_change=on_filter_change method=filter_method />
            <div
                id="projects"
                class=move || {
                    if gallery.filtered().get() { "projects-grid filtered" } else { "projects-grid" }
                }
            >
                {move || {
                    gallery.cards().get()
                        .into_iter()
                        .map(|vm| view! { <ProjectCard vm=vm /> })
                        .collect_view()
                }}
                {move || has_more.get().then(|| view! {
                    <a
                        node_ref=sentinel_ref
                        id="preloader"
                        class=move || if fading.get() { "preloader grid-cell" } else { "preloader grid-cell show" }
                        href=endpoint.get_value()
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            set_load_tick.update(|n| *n += 1);
                        }
                    >
                        <span class="loader"></span>
                    </a>
                })}
            </div>
        </section>
    }
}
