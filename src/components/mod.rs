//! UI Components
//!
//! Reusable Leptos components.

mod cart_badge;
mod cart_panel;
mod filter_bar;
mod notification_area;
mod product_grid;

pub use cart_badge::CartBadge;
pub use cart_panel::CartPanel;
pub use filter_bar::FilterBar;
pub use notification_area::NotificationArea;
pub use product_grid::ProductGrid;
