//! Cart Badge Component
//!
//! Item-count badge next to the cart link, hidden while the cart is
//! empty.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CartBadge() -> impl IntoView {
    let store = use_app_store();

    let count = Memo::new(move |_| store.cart().read().len());
    let visible = move || count.get() > 0;

    view! {
        <Show when=visible>
            <span class="cart-badge">{move || count.get()}</span>
        </Show>
    }
}
