//! Newsroom Admin — Dioxus web dashboard
//!
//! Single-page admin console for the Newsroom publishing platform. All data
//! comes from the platform's REST API via the `newsroom-api` crate; this
//! crate owns the session, the role gates, and the screens.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --platform web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --platform web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod nav;
mod pages;
mod routes;
mod session;
mod state;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // API base URL is baked in at build time; defaults to a same-origin proxy.
    let api_url = option_env!("NEWSROOM_API_URL").unwrap_or("/api/v1");
    newsroom_api::init_api_url(api_url.to_string());

    dioxus::launch(app::App);
}
