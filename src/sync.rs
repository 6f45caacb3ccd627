//! Client State Synchronizer
//!
//! Reconciles local state with the server for the two shared resources
//! (filter, cart). Remote changes arrive via polling; local edits apply
//! immediately and are pushed best-effort. Conflicts resolve as last
//! writer wins, so a poll landing right after a local edit may briefly
//! undo it until the next tick round-trips.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_poll::{bind_visibility_pause, start_polling, PollHandle};

use crate::api::Api;
use crate::context::AppContext;
use crate::filter::filter_summary;
use crate::models::Filter;
use crate::store::{
    store_note_cart_failure, store_replace_cart, AppStateStoreFields, AppStore,
};

/// Keeps this client in step with the server. Constructed once per
/// page session; clones share the same signals.
#[derive(Clone)]
pub struct Synchronizer {
    api: Api,
    store: AppStore,
    ctx: AppContext,
    /// Most recently applied filter, local or remote. Polls compare
    /// against this so an unchanged fetch applies nothing.
    last_filter: ReadSignal<Option<Filter>>,
    set_last_filter: WriteSignal<Option<Filter>>,
    server_filtering: bool,
}

impl Synchronizer {
    pub fn new(api: Api, store: AppStore, ctx: AppContext, server_filtering: bool) -> Self {
        let (last_filter, set_last_filter) = signal(None);
        Self {
            api,
            store,
            ctx,
            last_filter,
            set_last_filter,
            server_filtering,
        }
    }

    /// Start both pollers. Ticks that would overlap an in-flight fetch
    /// are skipped, and both polls pause while the page is hidden.
    pub fn start(&self, poll_interval_ms: u32) -> (PollHandle, PollHandle) {
        let sync = self.clone();
        let filter_poll = start_polling(poll_interval_ms, move || {
            let sync = sync.clone();
            async move { sync.poll_filter().await }
        });
        bind_visibility_pause(filter_poll.clone());

        let sync = self.clone();
        let cart_poll = start_polling(poll_interval_ms, move || {
            let sync = sync.clone();
            async move { sync.poll_cart().await }
        });
        bind_visibility_pause(cart_poll.clone());

        (filter_poll, cart_poll)
    }

    /// Fetch the full catalog once at mount.
    pub async fn load_catalog(&self) {
        self.fetch_catalog(None).await;
    }

    /// One filter poll tick. A fetched filter is adopted only when it
    /// differs from the last applied value.
    pub async fn poll_filter(&self) {
        match self.api.get_filter().await {
            Ok(fetched) => {
                if remote_changed(self.last_filter.get_untracked().as_ref(), &fetched) {
                    web_sys::console::log_1(
                        &format!("[SYNC] Remote filter changed: {fetched:?}").into(),
                    );
                    self.apply_filter(fetched);
                }
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[POLL] Filter poll failed: {err}").into());
            }
        }
    }

    /// One cart poll tick. Snapshots equal to the displayed cart are
    /// dropped by the store so nothing re-renders.
    pub async fn poll_cart(&self) {
        match self.api.get_cart().await {
            Ok(items) => {
                if store_replace_cart(&self.store, items) {
                    web_sys::console::log_1(&"[SYNC] Cart updated from server".into());
                }
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[POLL] Cart poll failed: {err}").into());
                store_note_cart_failure(&self.store);
            }
        }
    }

    /// Apply a locally edited filter and publish it for other clients.
    /// The local apply happens first so the page answers immediately
    /// and the next poll already knows the edit.
    pub async fn push_filter(&self, filter: Filter) {
        self.apply_filter(filter.clone());
        if let Err(err) = self.api.set_filter(&filter).await {
            web_sys::console::error_1(&format!("[SYNC] Filter push failed: {err}").into());
            self.ctx.notify_error("Could not share the filter");
        }
    }

    /// Make `filter` the active filter: remember it for change
    /// detection, narrow the product display, and tell the user.
    fn apply_filter(&self, filter: Filter) {
        self.set_last_filter.set(Some(filter.clone()));
        self.ctx.notify_success(filter_summary(&filter));
        if self.server_filtering {
            let sync = self.clone();
            let query = filter.clone();
            spawn_local(async move {
                sync.fetch_catalog(Some(&query)).await;
            });
        }
        self.store.filter().set(filter);
    }

    async fn fetch_catalog(&self, filter: Option<&Filter>) {
        match self.api.get_products(filter).await {
            Ok(products) => {
                web_sys::console::log_1(
                    &format!("[API] Loaded {} products", products.len()).into(),
                );
                self.store.catalog_error().set(None);
                self.store.products().set(products);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[API] Catalog load failed: {err}").into());
                self.store.catalog_error().set(Some(err.to_string()));
                self.ctx.notify_error("Could not load the product catalog");
            }
        }
    }
}

/// Whether a fetched filter differs from the last applied one. Nothing
/// applied yet counts as changed, so the first fetch always applies.
fn remote_changed(last: Option<&Filter>, fetched: &Filter) -> bool {
    last != Some(fetched)
}
