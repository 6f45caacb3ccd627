//! Product Grid Component
//!
//! Catalog display narrowed by the active filter. Filtering always
//! runs locally, even when the server already narrowed the catalog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Api;
use crate::context::AppContext;
use crate::filter::filter_products;
use crate::models::{CartItem, Product};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        filter_products(&store.products().read(), &store.filter().read())
    });

    view! {
        <section class="products-section">
            <h2>"Products"</h2>

            {move || store.catalog_error().get().map(|err| view! {
                <p class="error">{format!("Could not load products: {err}")}</p>
            })}

            <div class="product-grid">
                <For
                    each=move || visible.get()
                    key=|product| product.name.clone()
                    children=move |product: Product| {
                        view! { <ProductCard product=product /> }
                    }
                />
            </div>

            {move || {
                let empty = visible.read().is_empty() && store.catalog_error().read().is_none();
                empty.then(|| view! {
                    <p class="empty-grid">"No products match the current filter"</p>
                })
            }}
        </section>
    }
}

/// One catalog entry with its add-to-cart button
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_context::<Api>().expect("Api should be provided");

    let (adding, set_adding) = signal(false);

    let item = CartItem {
        name: product.name.clone(),
        details: (!product.details.is_empty()).then(|| product.details.clone()),
    };

    let add = move |_| {
        if adding.get_untracked() {
            return;
        }
        set_adding.set(true);
        let api = api.clone();
        let item = item.clone();
        spawn_local(async move {
            match api.add_to_cart(&item).await {
                Ok(()) => {
                    ctx.notify_success(format!("{} added to the cart", item.name));
                    ctx.reload_cart();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[CART] Add failed: {err}").into());
                    ctx.notify_error("Could not add the item to the cart");
                }
            }
            set_adding.set(false);
        });
    };

    view! {
        <div class="product">
            <h3>{product.name.clone()}</h3>
            <p>{product.details.clone()}</p>
            <button
                class="add-btn"
                disabled=move || adding.get()
                on:click=add
            >
                {move || if adding.get() { "Adding..." } else { "Add to cart" }}
            </button>
        </div>
    }
}
