//! UI Components
//!
//! Reusable Leptos components.

mod cart_modal;
mod category_filter;
mod item_list;
mod item_row;
mod toast;

pub use cart_modal::{CartModal, ViewCartButton};
pub use category_filter::CategoryFilter;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use toast::Toast;
