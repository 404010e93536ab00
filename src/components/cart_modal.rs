//! Cart Modal Component
//!
//! "View cart" button plus the modal listing the latest cart snapshot. The
//! modal opens only after the snapshot fetch resolves, so stale or empty
//! content is never flashed. Every render is a full rebuild in response order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::store::{store_apply_mutation, store_replace_cart, use_app_store, AppStateStoreFields};

/// Button that fetches the cart and reveals the modal
#[component]
pub fn ViewCartButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let view_cart = move |_| {
        spawn_local(async move {
            match api::get_cart().await {
                Ok(snapshot) => {
                    store_replace_cart(&store, snapshot.cart);
                    ctx.open_cart();
                }
                Err(e) => {
                    // Modal stays closed; the user can click again
                    web_sys::console::error_1(&format!("[CART] fetch failed: {}", e).into());
                }
            }
        });
    };

    view! {
        <button class="view-cart-btn" on:click=view_cart>
            "View Cart"
        </button>
    }
}

/// Modal listing the cart lines with per-line delete
#[component]
pub fn CartModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let delete_line = move |cart_line_id: u32| {
        spawn_local(async move {
            match api::delete_from_cart(cart_line_id).await {
                // Delete is unconditional: whatever came back is the cart now
                Ok(resp) => store_apply_mutation(&store, resp),
                Err(e) => {
                    web_sys::console::error_1(&format!("[CART] delete failed: {}", e).into());
                }
            }
        });
    };

    view! {
        <Show when=move || ctx.cart_open.get()>
            <div class="cart-modal">
                <div class="cart-modal-header">
                    <span class="cart-modal-title">"Your Cart"</span>
                    <button class="close-btn" on:click=move |_| ctx.close_cart()>
                        "×"
                    </button>
                </div>
                <ul class="cart-items-list">
                    <For
                        each=move || store.cart().get()
                        key=|line| (line.id, line.quantity)
                        children=move |line| {
                            let line_id = line.id;
                            view! {
                                <li class="cart-line">
                                    {line.label()}
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| delete_line(line_id)
                                    >
                                        "Delete"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </Show>
    }
}
