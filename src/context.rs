//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::NoticeKind;
use crate::store::{store_push_notice, store_remove_notice, AppStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to re-fetch the cart right now - read
    pub cart_reload: ReadSignal<u32>,
    /// Trigger to re-fetch the cart right now - write
    set_cart_reload: WriteSignal<u32>,
    store: AppStore,
    notice_ttl_ms: u32,
}

impl AppContext {
    pub fn new(
        cart_reload: (ReadSignal<u32>, WriteSignal<u32>),
        store: AppStore,
        notice_ttl_ms: u32,
    ) -> Self {
        Self {
            cart_reload: cart_reload.0,
            set_cart_reload: cart_reload.1,
            store,
            notice_ttl_ms,
        }
    }

    /// Request an immediate cart refresh instead of waiting for the
    /// next poll tick.
    pub fn reload_cart(&self) {
        self.set_cart_reload.update(|v| *v += 1);
    }

    /// Show a notice that dismisses itself after the configured TTL.
    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let id = store_push_notice(&self.store, message.into(), kind);
        let store = self.store;
        let ttl = self.notice_ttl_ms;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ttl).await;
            store_remove_notice(&store, id);
        });
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Success, message);
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Error, message);
    }
}
