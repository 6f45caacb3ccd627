//! Shopfront App
//!
//! Root component. Builds the store, API client and synchronizer once,
//! provides them via context, and starts the pollers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::Api;
use crate::components::{CartBadge, CartPanel, FilterBar, NotificationArea, ProductGrid};
use crate::config::ShopConfig;
use crate::context::AppContext;
use crate::store::AppState;
use crate::sync::Synchronizer;

#[component]
pub fn App() -> impl IntoView {
    let config = ShopConfig::default();

    let store = Store::new(AppState::default());
    let (cart_reload, set_cart_reload) = signal(0u32);
    let ctx = AppContext::new((cart_reload, set_cart_reload), store, config.notice_ttl_ms);
    let api = Api::new(&config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);
    provide_context(api.clone());

    let sync = Synchronizer::new(api, store, ctx, config.server_filtering);

    // Load the catalog on mount
    {
        let sync = sync.clone();
        Effect::new(move |_| {
            let sync = sync.clone();
            spawn_local(async move {
                sync.load_catalog().await;
            });
        });
    }

    // Fetch the cart right away, and again whenever a mutation asks
    // for a refresh instead of waiting out the poll interval
    {
        let sync = sync.clone();
        Effect::new(move |_| {
            let tick = cart_reload.get();
            let sync = sync.clone();
            spawn_local(async move {
                web_sys::console::log_1(&format!("[CART] Reload #{}", tick).into());
                sync.poll_cart().await;
            });
        });
    }

    // Pollers run for the whole page session and pause themselves
    // while the page is hidden
    sync.start(config.poll_interval_ms);

    view! {
        <div class="shop-layout">
            <header class="shop-header">
                <h1>"Shopfront"</h1>
                <div class="cart-link">
                    "Cart"
                    <CartBadge />
                </div>
            </header>

            <FilterBar sync=sync />

            <main class="main-content">
                <ProductGrid />
                <CartPanel />
            </main>

            <NotificationArea />
        </div>
    }
}
