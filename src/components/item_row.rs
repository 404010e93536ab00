//! Item Row Component
//!
//! One shopping-list row with two presentations: a static display (name,
//! category, stock, add-to-cart) and an inline edit form. The edit form is a
//! per-row draft; on a successful submit the static fields are patched with
//! exactly the strings that were sent, on an application failure the user is
//! alerted and the static fields stay as they were.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{EditDraft, Item};
use crate::store::{store_apply_mutation, use_app_store};

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let item_id = item.id;
    let out_of_stock = item.quantity <= 0;
    let add_name = item.item_name.clone();

    // Display / Editing state
    let (editing, set_editing) = signal(false);

    // Static display values; patched with the submitted strings on success
    let initial = EditDraft::from_item(&item);
    let (shown_name, set_shown_name) = signal(initial.item_name.clone());
    let (shown_category, set_shown_category) = signal(initial.category.clone());
    let (shown_quantity, set_shown_quantity) = signal(initial.quantity.clone());
    let (shown_price, set_shown_price) = signal(initial.price.clone());

    // Raw (unpadded) values; drafts are seeded from these so a padded
    // deployment pads each submit exactly once
    let (raw_values, set_raw_values) = signal(initial);

    let (draft_name, set_draft_name) = signal(String::new());
    let (draft_category, set_draft_category) = signal(String::new());
    let (draft_quantity, set_draft_quantity) = signal(String::new());
    let (draft_price, set_draft_price) = signal(String::new());

    let start_editing = move |_| {
        let raw = raw_values.get();
        set_draft_name.set(raw.item_name);
        set_draft_category.set(raw.category);
        set_draft_quantity.set(raw.quantity);
        set_draft_price.set(raw.price);
        set_editing.set(true);
    };

    let cancel_editing = move |_| {
        // Draft is discarded; the static display was never touched
        set_editing.set(false);
    };

    let submit_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = EditDraft {
            item_name: draft_name.get(),
            category: draft_category.get(),
            quantity: draft_quantity.get(),
            price: draft_price.get(),
        };
        let contract = ctx.edit_contract;

        spawn_local(async move {
            match api::edit_item(item_id, &draft, &contract).await {
                Ok(status) if status.is_success() => {
                    set_shown_name.set(contract.format_field(&draft.item_name));
                    set_shown_category.set(contract.format_field(&draft.category));
                    set_shown_quantity.set(contract.format_field(&draft.quantity));
                    if contract.include_price {
                        set_shown_price.set(contract.format_field(&draft.price));
                    }
                    set_raw_values.set(draft);
                    set_editing.set(false);
                }
                Ok(status) => {
                    let message = status
                        .message
                        .unwrap_or_else(|| "Failed to update item.".to_string());
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                    set_editing.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[EDIT] request failed: {}", e).into());
                }
            }
        });
    };

    let add_to_cart = move |_| {
        let item_name = add_name.clone();
        spawn_local(async move {
            match api::add_to_cart(&item_name).await {
                Ok(resp) if resp.is_success() => {
                    store_apply_mutation(&store, resp);
                    ctx.show_toast(format!("{} added to cart", item_name));
                }
                Ok(resp) => {
                    let message = resp
                        .message
                        .unwrap_or_else(|| "Could not add item to cart.".to_string());
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[CART] add failed: {}", e).into());
                }
            }
        });
    };

    view! {
        // Static display
        <div class="item-static" class:hidden=move || editing.get()>
            <span class="item-name">{move || shown_name.get()}</span>
            <span class="item-category">{move || shown_category.get()}</span>
            <span class="item-stock">{move || shown_quantity.get()}</span>
            {move || {
                let price = shown_price.get();
                (!price.is_empty()).then(|| view! {
                    <span class="item-price">{price}</span>
                })
            }}
            <button
                class="add-btn"
                disabled=out_of_stock
                on:click=add_to_cart
            >
                "Add to cart"
            </button>
            <button class="edit-btn" on:click=start_editing>
                "Edit"
            </button>
        </div>

        // Edit form
        <form class="item-edit" class:hidden=move || !editing.get() on:submit=submit_edit>
            <input
                type="text"
                class="edit-item-name"
                prop:value=move || draft_name.get()
                on:input=move |ev| set_draft_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="edit-category"
                prop:value=move || draft_category.get()
                on:input=move |ev| set_draft_category.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="edit-quantity"
                prop:value=move || draft_quantity.get()
                on:input=move |ev| set_draft_quantity.set(event_target_value(&ev))
            />
            {ctx.edit_contract.include_price.then(|| view! {
                <input
                    type="text"
                    class="edit-price"
                    prop:value=move || draft_price.get()
                    on:input=move |ev| set_draft_price.set(event_target_value(&ev))
                />
            })}
            <button type="submit">"Save"</button>
            <button type="button" on:click=cancel_editing>"Cancel"</button>
        </form>
    }
}
