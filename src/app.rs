//! Shopcart Frontend App
//!
//! Root component: seeds the store from the bootstrap payload, provides
//! context, and lays out the filter, item list, cart, and toast surfaces.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::boot::read_initial_items;
use crate::components::{CartModal, CategoryFilter, ItemList, Toast, ViewCartButton};
use crate::context::AppContext;
use crate::filter::ALL_CATEGORIES;
use crate::models::EditContract;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState {
        items: read_initial_items(),
        cart: Vec::new(),
    });
    let (selected_category, set_selected_category) = signal(ALL_CATEGORIES.to_string());
    let toast = signal::<Option<String>>(None);
    let cart_open = signal(false);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(toast, cart_open, EditContract::default()));

    view! {
        <div class="shop-layout">
            <header class="shop-header">
                <h1>"Shopping List"</h1>
                <CategoryFilter set_selected_category=set_selected_category />
                <ViewCartButton />
            </header>

            <main class="shop-content">
                <ItemList selected_category=selected_category />
            </main>

            <CartModal />
            <Toast />
        </div>
    }
}
