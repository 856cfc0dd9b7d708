//! Floating notice tray.

use dioxus::prelude::*;

use crate::state::{use_notices, NoticeKind};

#[component]
pub fn NoticeTray() -> Element {
    let mut notices = use_notices();

    rsx! {
        div {
            class: "fixed bottom-6 right-6 flex flex-col gap-2 z-50",
            for notice in notices.list() {
                div {
                    key: "{notice.id}",
                    class: match notice.kind {
                        NoticeKind::Error => "flex items-center gap-3 bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg shadow-md text-sm",
                        NoticeKind::Info => "flex items-center gap-3 bg-white border border-gray-200 text-gray-700 px-4 py-3 rounded-lg shadow-md text-sm",
                    },
                    span { "{notice.message}" }
                    button {
                        class: "text-gray-400 hover:text-gray-600",
                        onclick: move |_| notices.dismiss(notice.id),
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}
