//! Category pages: list plus inline create.

use dioxus::prelude::*;
use newsroom_api::services::categories::{self, slugify, CategoryDraft};
use newsroom_api::types::Category;

use crate::components::{EmptyState, LoadingSpinner, RoleGate};
use crate::nav;
use crate::pages::report_error;
use crate::session::use_session;
use crate::state::use_notices;

/// Categories list page
#[component]
pub fn Categories() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let mut list = use_resource(move || async move {
        categories::list(&session.client()).await
    });

    use_effect(move || {
        if let Some(Err(err)) = &*list.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });

    let handle_create = move |_| {
        let display_name = name().trim().to_string();
        if display_name.is_empty() {
            return;
        }
        spawn(async move {
            saving.set(true);
            let draft = CategoryDraft {
                slug: slugify(&display_name),
                name: display_name,
                description: None,
            };
            match categories::create(&session.client(), &draft).await {
                Ok(_) => {
                    notices.info("Category created");
                    name.set(String::new());
                    list.restart();
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
            saving.set(false);
        });
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            match categories::delete(&session.client(), id).await {
                Ok(()) => {
                    notices.info("Category deleted");
                    list.restart();
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Categories" }

            RoleGate {
                allowed: nav::CONTENT_ROLES,
                fallback: rsx! {},
                form {
                    onsubmit: handle_create,
                    class: "flex gap-2 mb-6",
                    input {
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                        placeholder: "New category name",
                        class: "w-72 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                        disabled: saving(),
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800 disabled:opacity-50",
                        disabled: saving() || name().trim().is_empty(),
                        "Add"
                    }
                }
            }

            match &*list.read() {
                Some(Ok(data)) if !data.items.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                        for category in data.items.iter() {
                            CategoryRow {
                                category: category.clone(),
                                on_delete: handle_delete,
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    EmptyState {
                        icon: "\u{1F3F7}",
                        message: "No categories yet.".to_string(),
                    }
                },
                Some(Err(_)) => rsx! {
                    EmptyState {
                        icon: "\u{26A0}",
                        message: "Couldn't load categories.".to_string(),
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
struct CategoryRowProps {
    category: Category,
    on_delete: EventHandler<i64>,
}

#[component]
fn CategoryRow(props: CategoryRowProps) -> Element {
    let category = &props.category;

    rsx! {
        div {
            class: "p-4 flex items-center justify-between hover:bg-gray-50",
            div {
                p { class: "text-sm font-medium text-gray-900", "{category.name}" }
                p { class: "text-xs text-gray-500", "/{category.slug} \u{00b7} {category.article_count} articles" }
            }
            RoleGate {
                allowed: nav::ADMIN_ONLY,
                fallback: rsx! {},
                button {
                    class: "px-2 py-1 bg-gray-100 text-gray-600 text-xs rounded hover:bg-gray-200",
                    onclick: {
                        let id = category.id;
                        move |_| props.on_delete.call(id)
                    },
                    "Delete"
                }
            }
        }
    }
}
