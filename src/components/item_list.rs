//! Item List Component
//!
//! Shopping-list rows with category-based visibility. Hidden rows stay in the
//! DOM with a `hidden` class; an empty visible set is fine.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::filter::category_matches;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList(selected_category: ReadSignal<String>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="item-list">
            <For
                each=move || store.items().get()
                // Key on the mutable fields so stock patches re-render the row
                key=|item| (item.id, item.quantity, item.item_name.clone())
                children=move |item| {
                    let category = item.category.clone();
                    let visible = move || category_matches(&selected_category.get(), &category);
                    view! {
                        <div
                            class="item-row"
                            data-category=item.category.clone()
                            class:hidden=move || !visible()
                        >
                            <ItemRow item=item.clone() />
                        </div>
                    }
                }
            />
        </div>
    }
}
