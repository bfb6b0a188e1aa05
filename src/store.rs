//! Gallery State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Shared between
//! the gallery feed and the filter bar.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::FormMethod;
use crate::media::{MediaConfig, ProjectCardVm};

/// Listing-page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct GalleryState {
    /// Rendered cards, in feed order
    pub cards: Vec<ProjectCardVm>,
    /// Media settings from the most recent page response
    pub media: MediaConfig,
    /// Serialized filter fields appended to every feed request
    pub filter_query: String,
    /// Declared method of the filter form, used for filter submissions
    pub filter_method: FormMethod,
    /// Whether any filter is active (drives the `filtered` grid class)
    pub filtered: bool,
}

/// Type alias for the store
pub type GalleryStore = Store<GalleryState>;

/// Get the gallery store from context
pub fn use_gallery_store() -> GalleryStore {
    expect_context::<GalleryStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole listing (page 1 of a fresh feed)
pub fn store_replace_cards(store: &GalleryStore, cards: Vec<ProjectCardVm>) {
    store.cards().set(cards);
}

/// Append a batch before the sentinel (page 2+)
pub fn store_append_cards(store: &GalleryStore, mut cards: Vec<ProjectCardVm>) {
    store.cards().write().append(&mut cards);
}

/// Drop all rendered cards (filter change)
pub fn store_clear_cards(store: &GalleryStore) {
    store.cards().write().clear();
}

pub fn store_set_media(store: &GalleryStore, media: MediaConfig) {
    store.media().set(media);
}

/// Record the active filter serialization and its form method
pub fn store_set_filters(store: &GalleryStore, query: String, method: FormMethod) {
    store.filtered().set(!query.is_empty());
    store.filter_query().set(query);
    store.filter_method().set(method);
}
