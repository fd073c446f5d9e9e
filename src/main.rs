//! Warborne Guild Dashboard
//!
//! Administrative dashboard for the Warborne guild management tool,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Guild-wide summary counters
//! - Player roster with client-side search
//! - Loadout and guild management views
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the guild management API over HTTP and falls
//! back to bundled sample data whenever the API is unreachable, so the
//! dashboard always renders something usable.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
