//! Frontend Models
//!
//! Data structures matching the shop API payloads.

use serde::{Deserialize, Serialize};

/// Catalog entry as served by `GET /api/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub details: String,
    pub category: String,
    pub brand: String,
}

/// One cart line. The server keys lines by `name`; `details` is
/// display-only and may be absent or null in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Shared filter state. Empty strings mean "no constraint" on that
/// dimension, so `Filter::default()` matches everything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.brand.is_empty()
    }
}

/// Transient UI notice shown in the notification area
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}
