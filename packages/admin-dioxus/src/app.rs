//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::session::SessionProvider;
use crate::state::NoticeState;

/// Root application component
#[component]
pub fn App() -> Element {
    // Notices outlive any one page; the session provider wraps the router so
    // every route sees the same auth state.
    use_context_provider(NoticeState::new);

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
