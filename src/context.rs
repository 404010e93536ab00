//! Application Context
//!
//! Shared UI signals provided via Leptos Context API.

use crate::models::EditContract;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_MS: u32 = 3000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Toast message shown after a successful add - read
    pub toast: ReadSignal<Option<String>>,
    set_toast: WriteSignal<Option<String>>,
    /// Whether the cart modal is revealed - read
    pub cart_open: ReadSignal<bool>,
    set_cart_open: WriteSignal<bool>,
    /// Edit-payload variant expected by the deployed backend
    pub edit_contract: EditContract,
}

impl AppContext {
    pub fn new(
        toast: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        cart_open: (ReadSignal<bool>, WriteSignal<bool>),
        edit_contract: EditContract,
    ) -> Self {
        Self {
            toast: toast.0,
            set_toast: toast.1,
            cart_open: cart_open.0,
            set_cart_open: cart_open.1,
            edit_contract,
        }
    }

    /// Show a toast and auto-hide it after a few seconds
    pub fn show_toast(&self, message: impl Into<String>) {
        let set_toast = self.set_toast;
        set_toast.set(Some(message.into()));
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            set_toast.set(None);
        });
    }

    /// Reveal the cart modal (only after the snapshot fetch resolved)
    pub fn open_cart(&self) {
        self.set_cart_open.set(true);
    }

    pub fn close_cart(&self) {
        self.set_cart_open.set(false);
    }
}
