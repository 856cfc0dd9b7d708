//! Time Saver digest pages: card grid plus create.

use dioxus::prelude::*;
use newsroom_api::services::time_saver::{self, TimeSaverDraft};
use newsroom_api::types::TimeSaverItem;

use crate::components::{EmptyState, LoadingSpinner, PaginationControls, RoleGate};
use crate::nav;
use crate::pages::report_error;
use crate::routes::Route;
use crate::session::use_session;
use crate::state::use_notices;

/// Time Saver list page
#[component]
pub fn TimeSaver() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();

    let mut page = use_signal(|| 1u32);

    let mut list = use_resource(move || async move {
        time_saver::list(&session.client(), page()).await
    });

    use_effect(move || {
        if let Some(Err(err)) = &*list.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });

    let handle_delete = move |id: i64| {
        spawn(async move {
            match time_saver::delete(&session.client(), id).await {
                Ok(()) => {
                    notices.info("Card removed");
                    list.restart();
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Time Saver" }
                RoleGate {
                    allowed: nav::AI_CREATOR_ROLES,
                    fallback: rsx! {},
                    Link {
                        to: Route::TimeSaverCreate {},
                        class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800",
                        "New Card"
                    }
                }
            }

            match &*list.read() {
                Some(Ok(data)) if !data.items.is_empty() => rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                        for item in data.items.iter() {
                            TimeSaverCard { item: item.clone(), on_delete: handle_delete }
                        }
                    }
                    PaginationControls {
                        pagination: data.pagination.clone(),
                        on_page: move |p| page.set(p),
                    }
                },
                Some(Ok(_)) => rsx! {
                    EmptyState {
                        icon: "\u{23F1}",
                        message: "No Time Saver cards yet.".to_string(),
                    }
                },
                Some(Err(_)) => rsx! {
                    EmptyState {
                        icon: "\u{26A0}",
                        message: "Couldn't load Time Saver cards.".to_string(),
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", LoadingSpinner {} }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TimeSaverCardProps {
    item: TimeSaverItem,
    on_delete: EventHandler<i64>,
}

#[component]
fn TimeSaverCard(props: TimeSaverCardProps) -> Element {
    let item = &props.item;

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 flex flex-col",
            div {
                class: "flex items-center justify-between mb-2",
                if let Some(category) = &item.category {
                    span { class: "text-xs bg-sky-100 text-sky-700 px-2 py-0.5 rounded", "{category}" }
                }
                if let Some(minutes) = item.read_time_minutes {
                    span { class: "text-xs text-gray-400", "{minutes} min read" }
                }
            }
            h3 { class: "text-sm font-medium text-gray-900", "{item.title}" }
            p { class: "text-sm text-gray-600 mt-1 flex-1 line-clamp-3", "{item.summary}" }
            div {
                class: "flex items-center justify-between mt-3",
                if let Some(url) = &item.source_url {
                    a {
                        href: "{url}",
                        target: "_blank",
                        class: "text-xs text-sky-600 hover:text-sky-700",
                        "Source"
                    }
                }
                RoleGate {
                    allowed: nav::AI_CREATOR_ROLES,
                    fallback: rsx! {},
                    button {
                        class: "px-2 py-1 bg-red-100 text-red-700 text-xs rounded hover:bg-red-200",
                        onclick: {
                            let id = item.id;
                            move |_| props.on_delete.call(id)
                        },
                        "Remove"
                    }
                }
            }
        }
    }
}

/// Create a Time Saver card. ADMIN is view-only for this section.
#[component]
pub fn TimeSaverCreate() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();

    let mut title = use_signal(String::new);
    let mut summary = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut read_time = use_signal(String::new);
    let mut source_url = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_| {
        spawn(async move {
            saving.set(true);
            let draft = TimeSaverDraft {
                title: title().trim().to_string(),
                summary: summary().trim().to_string(),
                category: Some(category()).filter(|s| !s.trim().is_empty()),
                read_time_minutes: read_time().trim().parse().ok(),
                source_url: Some(source_url()).filter(|s| !s.trim().is_empty()),
                image: None,
            };

            match time_saver::create(&session.client(), &draft).await {
                Ok(_) => {
                    notices.info("Card created");
                    navigator.push(Route::TimeSaver {});
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
            saving.set(false);
        });
    };

    rsx! {
        RoleGate {
            allowed: nav::AI_CREATOR_ROLES,
            div {
                h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Time Saver \u{00b7} New Card" }
                form {
                    onsubmit: handle_submit,
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 max-w-2xl space-y-4",

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Title" }
                        input {
                            r#type: "text",
                            value: "{title}",
                            oninput: move |e| title.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Summary" }
                        textarea {
                            value: "{summary}",
                            oninput: move |e| summary.set(e.value()),
                            rows: 4,
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                        }
                    }

                    div {
                        class: "grid grid-cols-3 gap-4",
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2", "Category" }
                            input {
                                r#type: "text",
                                value: "{category}",
                                oninput: move |e| category.set(e.value()),
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2", "Read time (min)" }
                            input {
                                r#type: "number",
                                min: "1",
                                value: "{read_time}",
                                oninput: move |e| read_time.set(e.value()),
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2", "Source URL" }
                            input {
                                r#type: "url",
                                value: "{source_url}",
                                oninput: move |e| source_url.set(e.value()),
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: saving() || title().trim().is_empty() || summary().trim().is_empty(),
                        if saving() { "Creating..." } else { "Create Card" }
                    }
                }
            }
        }
    }
}
