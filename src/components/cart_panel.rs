//! Cart Panel Component
//!
//! Shared cart display with per-line removal and checkout. The list is
//! replaced wholesale from server snapshots; there is no local diffing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Api;
use crate::context::AppContext;
use crate::models::CartItem;
use crate::store::{use_app_store, AppStateStoreFields, CartStatus};

#[component]
pub fn CartPanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        <aside class="cart-panel">
            <h2>"Cart"</h2>
            {move || match store.cart_status().get() {
                CartStatus::Loading => view! {
                    <p class="cart-loading">"Loading the cart..."</p>
                }
                .into_any(),
                CartStatus::Unavailable => view! {
                    <p class="error">"Could not load the cart"</p>
                }
                .into_any(),
                CartStatus::Ready => view! {
                    <div class="cart-items">
                        <Show when=move || store.cart().read().is_empty()>
                            <p class="empty-cart">"The cart is empty"</p>
                        </Show>
                        <For
                            each=move || store.cart().get().into_iter().enumerate()
                            key=|(index, item)| (*index, item.name.clone())
                            children=move |(_, item): (usize, CartItem)| {
                                view! { <CartRow item=item /> }
                            }
                        />
                    </div>
                    <CheckoutButton />
                }
                .into_any(),
            }}
        </aside>
    }
}

/// One cart line with its remove button
#[component]
fn CartRow(item: CartItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_context::<Api>().expect("Api should be provided");

    let (removing, set_removing) = signal(false);
    let name = item.name.clone();

    let remove = move |_| {
        if removing.get_untracked() {
            return;
        }
        set_removing.set(true);
        let api = api.clone();
        let name = name.clone();
        spawn_local(async move {
            match api.remove_from_cart(&name).await {
                Ok(()) => {
                    ctx.notify_success(format!("{name} removed from the cart"));
                    ctx.reload_cart();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[CART] Remove failed: {err}").into());
                    ctx.notify_error("Could not remove the item");
                }
            }
            set_removing.set(false);
        });
    };

    view! {
        <div class="cart-item">
            <div>
                <h3>{item.name.clone()}</h3>
                <p>{item.details.clone().unwrap_or_default()}</p>
            </div>
            <button
                class="remove-btn"
                disabled=move || removing.get()
                on:click=remove
            >
                {move || if removing.get() { "Removing..." } else { "Remove" }}
            </button>
        </div>
    }
}

/// Completes the purchase by resetting the shared cart
#[component]
fn CheckoutButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_context::<Api>().expect("Api should be provided");

    let (working, set_working) = signal(false);

    let checkout = move |_| {
        if working.get_untracked() {
            return;
        }
        set_working.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.reset_cart().await {
                Ok(()) => {
                    ctx.notify_success("Purchase complete");
                    ctx.reload_cart();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[CART] Checkout failed: {err}").into());
                    ctx.notify_error("Could not complete the purchase");
                }
            }
            set_working.set(false);
        });
    };

    view! {
        <button
            class="checkout-btn"
            disabled=move || working.get()
            on:click=checkout
        >
            {move || if working.get() { "Completing purchase..." } else { "Checkout" }}
        </button>
    }
}
