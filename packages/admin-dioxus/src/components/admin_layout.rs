//! Admin layout wrapper with auth protection

use dioxus::prelude::*;

use crate::components::{AdminNav, LoadingSpinner, NoticeTray};
use crate::routes::Route;
use crate::session::use_session;

/// Admin layout component: navigation chrome plus the auth gate for every
/// route nested under it. The gate re-evaluates on each navigation.
#[component]
pub fn AdminLayout() -> Element {
    let session = use_session();

    // Still restoring from storage — hold a neutral view so a signed-in user
    // reloading the page never sees a flash of the login screen.
    if session.is_loading() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-100",
                LoadingSpinner {}
            }
        };
    }

    if !session.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Login {} }
        };
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            // Navigation
            AdminNav {}

            // Main content
            main {
                class: "p-6",
                Outlet::<Route> {}
            }

            // Transient notices (floating)
            NoticeTray {}
        }
    }
}
