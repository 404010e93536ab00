//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store mirrors
//! the latest backend response; it is never merged incrementally, only
//! overwritten from snapshots.

use crate::models::{CartLine, CartMutation, Item};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Shopping-list items, seeded from the bootstrap payload
    pub items: Vec<Item>,
    /// Latest authoritative cart snapshot
    pub cart: Vec<CartLine>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole cart with the latest snapshot (never merged)
pub fn store_replace_cart(store: &AppStore, cart: Vec<CartLine>) {
    *store.cart().write() = cart;
}

/// Patch one item's stock from a mutation response
pub fn store_apply_stock(store: &AppStore, item_id: u32, stock: i32) {
    if let Some(item) = store
        .items()
        .write()
        .iter_mut()
        .find(|item| item.id == item_id)
    {
        item.quantity = stock;
    }
}

/// Apply a full add/delete response: cart replace plus optional stock patch
pub fn store_apply_mutation(store: &AppStore, mutation: CartMutation) {
    if let Some((item_id, stock)) = mutation.stock_patch() {
        store_apply_stock(store, item_id, stock);
    }
    store_replace_cart(store, mutation.cart);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CartMutation;

    fn make_item(id: u32, name: &str, quantity: i32) -> Item {
        Item {
            id,
            item_name: name.to_string(),
            category: "tools".to_string(),
            quantity,
            price: None,
        }
    }

    fn make_line(id: u32, name: &str, quantity: u32) -> CartLine {
        CartLine {
            id,
            item_name: Some(name.to_string()),
            quantity,
        }
    }

    #[test]
    fn test_snapshot_fully_replaces_cart() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(AppState {
            items: Vec::new(),
            cart: vec![make_line(7, "Pliers", 2), make_line(9, "Bread", 1)],
        });

        // Shorter snapshot leaves no stale rows behind
        store_replace_cart(&store, vec![make_line(9, "Bread", 3)]);
        let cart = store.cart().get();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].id, 9);
        assert_eq!(cart[0].quantity, 3);

        // Empty snapshot empties the cart
        store_replace_cart(&store, Vec::new());
        assert!(store.cart().get().is_empty());
    }

    #[test]
    fn test_mutation_replaces_cart_and_patches_the_right_item() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(AppState {
            items: vec![make_item(3, "Pliers", 5), make_item(4, "Bread", 2)],
            cart: vec![make_line(7, "Pliers", 2)],
        });

        let mutation = CartMutation {
            status: None,
            message: None,
            cart: Vec::new(),
            item_id: Some(3),
            stock: Some(0),
        };
        store_apply_mutation(&store, mutation);

        assert!(store.cart().get().is_empty());
        let items = store.items().get();
        assert_eq!(items[0].quantity, 0);
        assert_eq!(items[1].quantity, 2);
    }

    #[test]
    fn test_stock_patch_for_unknown_item_changes_nothing() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(AppState {
            items: vec![make_item(3, "Pliers", 5)],
            cart: Vec::new(),
        });

        store_apply_stock(&store, 99, 1);
        assert_eq!(store.items().get()[0].quantity, 5);
    }
}
