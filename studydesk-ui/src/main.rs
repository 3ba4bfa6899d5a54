//! StudyDesk Dashboard
//!
//! Learner and administrator dashboards built with Leptos (WASM).
//!
//! # Features
//!
//! - Learner sign-in, registration and study material
//! - Admin overview, user management and activity monitoring
//! - Sessions that survive reloads through `localStorage`
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Routing, sessions and the API client come from the
//! `studydesk` core; this crate supplies the `fetch` transport, browser token
//! storage and the views.

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
