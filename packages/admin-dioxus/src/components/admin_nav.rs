//! Admin navigation component
//!
//! Renders the role-filtered entry table from `nav`, with a second row of
//! children for the section the current path falls under. Recomputed on
//! every render, so a role change is reflected immediately.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use newsroom_api::services::notifications;

use crate::nav::{self, NavEntry};
use crate::routes::Route;
use crate::session::use_session;

const POLL_INTERVAL_MS: u32 = 30_000;

/// Admin navigation bar
#[component]
pub fn AdminNav() -> Element {
    let mut session = use_session();
    let navigator = use_navigator();
    let current = use_route::<Route>().to_string();
    let role = session.role();

    // Silent unread-count poll: failures show nothing, by contract.
    let mut unread = use_signal(|| 0u64);
    use_future(move || async move {
        loop {
            if session.is_authenticated() {
                if let Ok(count) = notifications::unread_count(&session.client()).await {
                    unread.set(count);
                }
            }
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
        }
    });

    let handle_logout = move |_| {
        spawn(async move {
            session.logout().await;
            navigator.push(Route::Login {});
        });
    };

    let entries = nav::visible(role, nav::NAV_ENTRIES);
    let active_parent = entries
        .iter()
        .copied()
        .find(|entry| nav::is_active(&current, entry.path));

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between",

                // Brand + entries
                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::Dashboard {},
                        class: "text-xl font-bold text-sky-700",
                        "Newsroom Admin"
                    }

                    div {
                        class: "hidden md:flex items-center gap-1",
                        for entry in entries.iter().copied() {
                            NavLink {
                                entry,
                                current: current.clone(),
                                role_landing: entry.landing_path(role),
                            }
                        }
                    }
                }

                // User menu
                div {
                    class: "flex items-center gap-4",
                    if *unread.read() > 0 {
                        button {
                            class: "text-xs bg-sky-100 text-sky-700 px-2 py-1 rounded-full hover:bg-sky-200",
                            title: "Mark all notifications read",
                            onclick: move |_| {
                                spawn(async move {
                                    // Same silent contract as the poll.
                                    if notifications::mark_all_read(&session.client()).await.is_ok() {
                                        unread.set(0);
                                    }
                                });
                            },
                            "\u{1F514} {unread}"
                        }
                    }
                    if let Some(user) = session.user() {
                        Link {
                            to: Route::Profile {},
                            class: "flex items-center gap-2 text-sm text-gray-600 hover:text-gray-900",
                            span { "{user.full_name}" }
                            span {
                                class: "text-xs bg-gray-100 text-gray-600 px-2 py-0.5 rounded",
                                "{user.role_label()}"
                            }
                        }
                    }
                    button {
                        class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }

            // Children of the active section
            if let Some(parent) = active_parent {
                if !parent.children.is_empty() {
                    div {
                        class: "flex items-center gap-1 mt-2 pl-1",
                        for child in parent.visible_children(role) {
                            ChildLink { entry: child, current: current.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(entry: &'static NavEntry, current: String, role_landing: &'static str) -> Element {
    let is_active = nav::is_active(&current, entry.path);

    rsx! {
        Link {
            to: role_landing,
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-sky-100 text-sky-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{entry.name}"
        }
    }
}

#[component]
fn ChildLink(entry: &'static NavEntry, current: String) -> Element {
    let is_active = nav::is_active(&current, entry.path);

    rsx! {
        Link {
            to: entry.path,
            class: if is_active {
                "px-2 py-1 rounded text-xs font-medium bg-gray-100 text-gray-900"
            } else {
                "px-2 py-1 rounded text-xs font-medium text-gray-500 hover:text-gray-900"
            },
            "{entry.name}"
        }
    }
}
