//! Empty-state panel.
//!
//! Shown both for genuinely empty lists and for lists that recovered from a
//! failed or unrecognizable response — the distinction lives in the logs,
//! not the UI.

use dioxus::prelude::*;

#[component]
pub fn EmptyState(
    icon: &'static str,
    message: String,
    #[props(default)] action: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
            p { class: "text-4xl mb-3", "{icon}" }
            p { class: "text-gray-500 mb-4", "{message}" }
            if let Some(action) = action {
                div { class: "flex justify-center", {action} }
            }
        }
    }
}
