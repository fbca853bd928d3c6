//! Folio Web Frontend
//!
//! Portfolio site built with Leptos (WASM).
//!
//! # Features
//!
//! - Home page with profile, project cards, learning journey and contact
//! - One detail page per project, selected by `#project/<id>`
//! - Browser back/forward and manual hash edits switch pages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All content is compiled in; the app makes no network calls.
//! Routing, content and view models come from the `folio` library; this crate
//! adds the browser location and the markup.

use leptos::*;

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
