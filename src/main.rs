#![allow(warnings)]
//! Shopfront Entry Point

mod api;
mod app;
mod cart;
mod components;
mod config;
mod context;
mod filter;
mod models;
mod store;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
