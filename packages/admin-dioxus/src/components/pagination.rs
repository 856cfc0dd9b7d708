//! Pagination controls wired to the canonical list envelope.

use dioxus::prelude::*;
use newsroom_api::types::Pagination;

#[component]
pub fn PaginationControls(pagination: Pagination, on_page: EventHandler<u32>) -> Element {
    let current = pagination.current_page;

    rsx! {
        div {
            class: "flex items-center justify-between mt-4",
            p {
                class: "text-sm text-gray-500",
                "Page {pagination.current_page} of {pagination.total_pages} \u{00b7} {pagination.total_items} total"
            }
            div {
                class: "flex gap-2",
                button {
                    class: "px-3 py-1.5 text-sm rounded border border-gray-300 bg-white hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: !pagination.has_previous,
                    onclick: move |_| on_page.call(current.saturating_sub(1).max(1)),
                    "Previous"
                }
                button {
                    class: "px-3 py-1.5 text-sm rounded border border-gray-300 bg-white hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: !pagination.has_next,
                    onclick: move |_| on_page.call(current + 1),
                    "Next"
                }
            }
        }
    }
}
