//! Tableside - Dioxus Web Application
//!
//! Customer-facing frontend for the Tableside table-ordering product: a landing
//! page plus a phone + OTP sign-in flow against the external auth API.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod device;
mod pages;
mod routes;
mod state;

fn main() {
    // Initialize logging
    dioxus::logger::initialize_default();

    dioxus::launch(app::App);
}
