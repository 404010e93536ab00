//! Category Filter Component
//!
//! Dropdown over the categories present in the item list plus "all".

use leptos::prelude::*;

use crate::filter::{categories_of, ALL_CATEGORIES};
use crate::store::{use_app_store, AppStateStoreFields};

/// Category filter dropdown; writes the shared selection signal
#[component]
pub fn CategoryFilter(set_selected_category: WriteSignal<String>) -> impl IntoView {
    let store = use_app_store();

    let categories = move || categories_of(&store.items().get());

    view! {
        <select
            class="category-filter"
            on:change=move |ev| {
                set_selected_category.set(event_target_value(&ev));
            }
        >
            <option value=ALL_CATEGORIES>"All categories"</option>
            <For
                each=categories
                key=|cat| cat.clone()
                children=move |cat| {
                    view! {
                        <option value=cat.clone()>{cat.clone()}</option>
                    }
                }
            />
        </select>
    }
}
