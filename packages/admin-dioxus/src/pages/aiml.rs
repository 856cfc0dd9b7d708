//! AI/ML content pages: trending list, categories, create.
//!
//! Creation is open to editors and ad managers only; admins browse these
//! sections read-only.

use dioxus::prelude::*;
use newsroom_api::services::aiml::{self, AimlDraft};
use newsroom_api::tags;
use newsroom_api::types::AimlArticle;

use crate::components::{EmptyState, LoadingSpinner, PaginationControls, RoleGate};
use crate::nav;
use crate::pages::report_error;
use crate::routes::Route;
use crate::session::use_session;
use crate::state::use_notices;

/// Trending AI/ML articles
#[component]
pub fn AimlTrending() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();

    let mut page = use_signal(|| 1u32);

    let mut list = use_resource(move || async move {
        aiml::trending(&session.client(), page()).await
    });

    use_effect(move || {
        if let Some(Err(err)) = &*list.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });

    let handle_delete = move |id: i64| {
        spawn(async move {
            match aiml::delete(&session.client(), id).await {
                Ok(()) => {
                    notices.info("Article removed");
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
                h1 { class: "text-2xl font-bold text-gray-900", "AI/ML \u{00b7} Trending" }
                RoleGate {
                    allowed: nav::AI_CREATOR_ROLES,
                    fallback: rsx! {},
                    Link {
                        to: Route::AimlCreate {},
                        class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800",
                        "Create Article"
                    }
                }
            }

            match &*list.read() {
                Some(Ok(data)) if !data.items.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                        for article in data.items.iter() {
                            AimlRow { article: article.clone(), on_delete: handle_delete }
                        }
                    }
                    PaginationControls {
                        pagination: data.pagination.clone(),
                        on_page: move |p| page.set(p),
                    }
                },
                Some(Ok(_)) => rsx! {
                    EmptyState {
                        icon: "\u{1F916}",
                        message: "No trending AI/ML articles right now.".to_string(),
                    }
                },
                Some(Err(_)) => rsx! {
                    EmptyState {
                        icon: "\u{26A0}",
                        message: "Couldn't load AI/ML articles.".to_string(),
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
struct AimlRowProps {
    article: AimlArticle,
    on_delete: EventHandler<i64>,
}

#[component]
fn AimlRow(props: AimlRowProps) -> Element {
    let article = &props.article;

    rsx! {
        div {
            class: "p-4 hover:bg-gray-50",
            div {
                class: "flex items-start justify-between",
                div {
                    class: "flex-1 min-w-0",
                    h3 { class: "text-sm font-medium text-gray-900 truncate", "{article.title}" }
                    if let Some(summary) = &article.summary {
                        p { class: "text-sm text-gray-600 mt-1 line-clamp-2", "{summary}" }
                    }
                    div {
                        class: "flex items-center gap-2 mt-1",
                        if let Some(model) = &article.model_name {
                            span { class: "text-xs bg-violet-100 text-violet-700 px-2 py-0.5 rounded", "{model}" }
                        }
                        span { class: "text-xs text-gray-400", "score {article.trending_score}" }
                        for tag in article.tags.iter() {
                            span { class: "text-xs bg-gray-100 text-gray-500 px-2 py-0.5 rounded", "{tag}" }
                        }
                    }
                }
                RoleGate {
                    allowed: nav::AI_CREATOR_ROLES,
                    fallback: rsx! {},
                    button {
                        class: "px-2 py-1 bg-red-100 text-red-700 text-xs rounded hover:bg-red-200 ml-4",
                        onclick: {
                            let id = article.id;
                            move |_| props.on_delete.call(id)
                        },
                        "Remove"
                    }
                }
            }
        }
    }
}

/// AI/ML categories
#[component]
pub fn AimlCategories() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();

    let list = use_resource(move || async move {
        aiml::categories(&session.client()).await
    });

    use_effect(move || {
        if let Some(Err(err)) = &*list.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "AI/ML \u{00b7} Categories" }

            match &*list.read() {
                Some(Ok(data)) if !data.items.is_empty() => rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        for category in data.items.iter() {
                            div {
                                key: "{category.id}",
                                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",
                                p { class: "text-sm font-medium text-gray-900", "{category.name}" }
                                p { class: "text-xs text-gray-500 mt-1", "{category.article_count} articles" }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    EmptyState {
                        icon: "\u{1F3F7}",
                        message: "No AI/ML categories yet.".to_string(),
                    }
                },
                Some(Err(_)) => rsx! {
                    EmptyState {
                        icon: "\u{26A0}",
                        message: "Couldn't load AI/ML categories.".to_string(),
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", LoadingSpinner {} }
                }
            }
        }
    }
}

/// Create AI/ML article. ADMIN lands on the denial panel here, by design.
#[component]
pub fn AimlCreate() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();

    let mut title = use_signal(String::new);
    let mut summary = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut model_name = use_signal(String::new);
    let mut tag_input = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_| {
        spawn(async move {
            saving.set(true);
            let mut draft = AimlDraft {
                title: title().trim().to_string(),
                content: content(),
                summary: Some(summary()).filter(|s| !s.trim().is_empty()),
                model_name: Some(model_name()).filter(|s| !s.trim().is_empty()),
                ..Default::default()
            };
            draft.set_tags(&tags::parse_tags(&tag_input()));

            match aiml::create(&session.client(), &draft).await {
                Ok(_) => {
                    notices.info("AI/ML article created");
                    navigator.push(Route::AimlTrending {});
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
                h1 { class: "text-2xl font-bold text-gray-900 mb-6", "AI/ML \u{00b7} Create Article" }
                form {
                    onsubmit: handle_submit,
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 max-w-3xl space-y-4",

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
                        class: "grid grid-cols-2 gap-4",
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2", "Model" }
                            input {
                                r#type: "text",
                                value: "{model_name}",
                                oninput: move |e| model_name.set(e.value()),
                                placeholder: "gpt-summarizer-v2",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2", "Tags" }
                            input {
                                r#type: "text",
                                value: "{tag_input}",
                                oninput: move |e| tag_input.set(e.value()),
                                placeholder: "llm, research",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            }
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Summary" }
                        input {
                            r#type: "text",
                            value: "{summary}",
                            oninput: move |e| summary.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Content" }
                        textarea {
                            value: "{content}",
                            oninput: move |e| content.set(e.value()),
                            rows: 10,
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md font-mono text-sm focus:outline-none focus:ring-2 focus:ring-sky-500",
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: saving() || title().trim().is_empty(),
                        if saving() { "Publishing..." } else { "Publish" }
                    }
                }
            }
        }
    }
}
