//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Everything
//! the server owns (catalog, cart, filter) lands here; components read
//! subfields and re-render only when their slice changes.

use crate::models::{CartItem, Filter, Notice, NoticeKind, Product};
use leptos::prelude::*;
use reactive_stores::Store;

/// Where the cart display currently stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CartStatus {
    /// First fetch has not completed yet
    #[default]
    Loading,
    /// Cart mirrors the server
    Ready,
    /// Never managed to load the cart
    Unavailable,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Product catalog as last fetched
    pub products: Vec<Product>,
    /// Shared cart as last fetched
    pub cart: Vec<CartItem>,
    /// Shared filter, applied to the catalog before rendering
    pub filter: Filter,
    pub cart_status: CartStatus,
    /// Set when the catalog could not be loaded
    pub catalog_error: Option<String>,
    /// Transient notices, newest last
    pub notices: Vec<Notice>,
    /// Id handed to the next notice (increment to keep keys unique)
    pub next_notice_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cart with a fresh server snapshot and return whether the
/// contents actually changed. Status and contents are written only on
/// real transitions; a snapshot equal to the displayed cart notifies no
/// subscriber, so nothing re-renders.
pub fn store_replace_cart(store: &AppStore, items: Vec<CartItem>) -> bool {
    if store.cart_status().get_untracked() != CartStatus::Ready {
        store.cart_status().set(CartStatus::Ready);
    }
    let changed = *store.cart().read_untracked() != items;
    if changed {
        store.cart().set(items);
    }
    changed
}

/// Record a failed cart fetch. A cart we once loaded stays on screen;
/// only a cart that never loaded becomes unavailable.
pub fn store_note_cart_failure(store: &AppStore) {
    if store.cart_status().get_untracked() == CartStatus::Loading {
        store.cart_status().set(CartStatus::Unavailable);
    }
}

/// Queue a notice and return its id so the caller can dismiss it later.
pub fn store_push_notice(store: &AppStore, message: String, kind: NoticeKind) -> u32 {
    let id = store.next_notice_id().get_untracked();
    store.next_notice_id().set(id + 1);
    store.notices().write().push(Notice { id, message, kind });
    id
}

pub fn store_remove_notice(store: &AppStore, id: u32) {
    store.notices().write().retain(|notice| notice.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn line(name: &str) -> CartItem {
        CartItem {
            name: name.into(),
            details: None,
        }
    }

    #[test]
    fn test_replace_cart_reports_change() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());

        assert!(store_replace_cart(&store, vec![line("Milk")]));
        assert_eq!(store.cart_status().get_untracked(), CartStatus::Ready);

        assert!(!store_replace_cart(&store, vec![line("Milk")]));
        assert!(store_replace_cart(&store, vec![line("Milk"), line("Soap")]));
    }

    #[test]
    fn test_unchanged_snapshot_notifies_nobody() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());

        // Stands in for the cart panel: re-runs whenever the status or
        // the contents it tracks are written
        let runs = Arc::new(AtomicU32::new(0));
        let snapshot = Memo::new({
            let runs = runs.clone();
            move |_| {
                runs.fetch_add(1, Ordering::Relaxed);
                (store.cart_status().get(), store.cart().read().len())
            }
        });

        assert_eq!(snapshot.get(), (CartStatus::Loading, 0));
        store_replace_cart(&store, vec![line("Milk")]);
        assert_eq!(snapshot.get(), (CartStatus::Ready, 1));
        let after_first = runs.load(Ordering::Relaxed);

        store_replace_cart(&store, vec![line("Milk")]);
        assert_eq!(snapshot.get(), (CartStatus::Ready, 1));
        assert_eq!(runs.load(Ordering::Relaxed), after_first);

        store_replace_cart(&store, vec![line("Milk"), line("Soap")]);
        assert_eq!(snapshot.get(), (CartStatus::Ready, 2));
    }

    #[test]
    fn test_cart_failure_keeps_last_snapshot() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());

        store_note_cart_failure(&store);
        assert_eq!(store.cart_status().get_untracked(), CartStatus::Unavailable);

        store_replace_cart(&store, vec![line("Milk")]);
        store_note_cart_failure(&store);
        assert_eq!(store.cart_status().get_untracked(), CartStatus::Ready);
        assert_eq!(store.cart().read_untracked().len(), 1);
    }
}
