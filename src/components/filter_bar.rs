//! Filter Bar Component
//!
//! Category and brand selects bound to the shared filter. Changing a
//! select publishes the new filter for every client; filters adopted
//! from polling land here through the store without re-publishing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::filter::{distinct_brands, distinct_categories};
use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::Synchronizer;

/// Read the selected value out of a `<select>` change event
fn select_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
    select.value()
}

#[component]
pub fn FilterBar(sync: Synchronizer) -> impl IntoView {
    let store = use_app_store();

    // Options come from the catalog itself
    let categories = Memo::new(move |_| distinct_categories(&store.products().read()));
    let brands = Memo::new(move |_| distinct_brands(&store.products().read()));

    let push = {
        let sync = sync.clone();
        move |filter: Filter| {
            let sync = sync.clone();
            spawn_local(async move {
                sync.push_filter(filter).await;
            });
        }
    };

    let on_category = {
        let push = push.clone();
        move |ev: web_sys::Event| {
            let filter = Filter {
                category: select_value(&ev),
                brand: store.filter().read_untracked().brand.clone(),
            };
            push(filter);
        }
    };

    let on_brand = move |ev: web_sys::Event| {
        let filter = Filter {
            category: store.filter().read_untracked().category.clone(),
            brand: select_value(&ev),
        };
        push(filter);
    };

    view! {
        <div class="filter-bar">
            <select
                id="categoryFilter"
                on:change=on_category
                prop:value=move || {
                    // Depend on the catalog so the value re-applies once
                    // the options exist
                    let _ = store.products().read();
                    store.filter().read().category.clone()
                }
            >
                <option value="">"All categories"</option>
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children=move |category: String| {
                        let value = category.clone();
                        view! { <option value=value>{category}</option> }
                    }
                />
            </select>

            <select
                id="brandFilter"
                on:change=on_brand
                prop:value=move || {
                    let _ = store.products().read();
                    store.filter().read().brand.clone()
                }
            >
                <option value="">"All brands"</option>
                <For
                    each=move || brands.get()
                    key=|brand| brand.clone()
                    children=move |brand: String| {
                        let value = brand.clone();
                        view! { <option value=value>{brand}</option> }
                    }
                />
            </select>
        </div>
    }
}
