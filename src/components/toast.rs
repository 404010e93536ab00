//! Toast Component
//!
//! Transient notice shown after a successful add; auto-hidden by the context.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.toast.get().map(|message| view! {
            <div class="cart-toast">{message}</div>
        })}
    }
}
