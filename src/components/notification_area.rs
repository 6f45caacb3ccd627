//! Notification Area Component
//!
//! Transient notices in arrival order. Each notice dismisses itself
//! after a few seconds; clicking one dismisses it early.

use leptos::prelude::*;

use crate::models::Notice;
use crate::store::{store_remove_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationArea() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notification-area">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=format!("notification {}", notice.kind.as_class())
                            on:click=move |_| store_remove_notice(&store, id)
                        >
                            {notice.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
