//! OctoFit Dashboard
//!
//! Browser dashboard for the OctoFit Tracker API built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every page mounts one resource view from the `octofit`
//! crate and turns its render tree into HTML.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
