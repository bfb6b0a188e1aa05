//! Projects Filter Component
//!
//! Checkbox group over the exhibition nomination groups. Every change
//! reserializes the checked values and hands them to the gallery; the submit
//! button doubles as the reset control.

use leptos::prelude::*;

use crate::api::FormMethod;
use crate::dom;
use crate::filters;
use crate::store;

/// Nomination group options (value, label), matching the server-side form
const FILTER_GROUPS: &[(&str, &str)] = &[
    ("1", "Интерьер"),
    ("2", "Графический дизайн"),
    ("3", "Предметный дизайн"),
    ("4", "Иллюстрация"),
    ("5", "Архитектура"),
];

#[component]
pub fn FilterBar(
    /// Fired after the serialized filter fields land in the gallery store
    on_change: Callback<()>,
    #[prop(default = FormMethod::Get)] method: FormMethod,
) -> impl IntoView {
    let gallery = store::use_gallery_store();

    // Checked values, kept in form order at serialization time
    let (checked, set_checked) = signal(Vec::<String>::new());

    let serialize = move || {
        let checked = checked.get_untracked();
        let pairs: Vec<(&str, &str)> = FILTER_GROUPS
            .iter()
            .filter(|(value, _)| checked.iter().any(|c| c == value))
            .map(|(value, _)| ("filter-group", *value))
            .collect();
        filters::serialize_params(&pairs)
    };

    let submit_filter = move || {
        store::store_set_filters(&gallery, serialize(), method);
        on_change.run(());
    };

    let toggle = move |value: String| {
        set_checked.update(|checked| {
            if let Some(pos) = checked.iter().position(|c| *c == value) {
                checked.remove(pos);
            } else {
                checked.push(value);
            }
        });
        submit_filter();
    };

    // Preset from the page URL; an active preset issues the first filtered
    // request immediately, as if the user had just checked those boxes.
    Effect::new(move |_| {
        let preset = filters::values_from_query(&dom::location_search(), "filter-group");
        let preset: Vec<String> = preset
            .into_iter()
            .filter(|v| FILTER_GROUPS.iter().any(|(value, _)| value == v))
            .collect();
        if !preset.is_empty() {
            set_checked.set(preset);
            submit_filter();
        }
    });

    // The submit button resets every checkbox
    let clear = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_checked.set(Vec::new());
        submit_filter();
    };

    view! {
        <form name="projects-filter" class="projects-filter" method=method.as_str() on:submit=clear>
            {FILTER_GROUPS.iter().map(|(value, label)| {
                let val = value.to_string();
                view! {
                    <label class="filter-option">
                        <input
                            type="checkbox"
                            name="filter-group"
                            value=*value
                            prop:checked=move || checked.get().iter().any(|c| c == value)
                            on:change=move |_| toggle(val.clone())
                        />
                        <span>{*label}</span>
                    </label>
                }
            }).collect_view()}
            <button type="submit" disabled=move || checked.get().is_empty()>
                "сбросить фильтры"
            </button>
        </form>
    }
}
