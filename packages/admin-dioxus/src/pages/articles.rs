//! Article pages: list with search and approval, create, edit.

use dioxus::prelude::*;
use newsroom_api::services::articles::{self, ArticleDraft};
use newsroom_api::services::categories;
use newsroom_api::tags;
use newsroom_api::types::{Article, ArticleStatus};

use crate::components::{EmptyState, LoadingSpinner, PaginationControls, RoleGate};
use crate::nav;
use crate::pages::report_error;
use crate::routes::Route;
use crate::session::use_session;
use crate::state::use_notices;

/// Articles list page
#[component]
pub fn Articles() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();
    let role = session.role();

    let mut page = use_signal(|| 1u32);
    let mut query = use_signal(String::new);

    let mut list = use_resource(move || async move {
        let client = session.client();
        let q = query();
        let q = q.trim();
        if q.is_empty() {
            articles::list(&client, page()).await
        } else {
            articles::search(&client, q, page()).await
        }
    });

    // Error funnel: a 401 tears the session down once; anything else is a
    // notice plus the empty state below.
    use_effect(move || {
        if let Some(Err(err)) = &*list.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });

    let handle_approve = move |id: i64| {
        spawn(async move {
            match articles::approve(&session.client(), id).await {
                Ok(()) => {
                    notices.info("Article approved");
                    list.restart();
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
        });
    };

    let handle_reject = move |id: i64| {
        spawn(async move {
            match articles::reject(&session.client(), id, "Rejected from dashboard").await {
                Ok(()) => {
                    notices.info("Article rejected");
                    list.restart();
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
        });
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            match articles::delete(&session.client(), id).await {
                Ok(()) => {
                    notices.info("Article deleted");
                    list.restart();
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
        });
    };

    let can_approve = role.map_or(false, |r| nav::APPROVAL_ROLES.contains(&r));
    let can_edit = role.map_or(false, |r| nav::CONTENT_ROLES.contains(&r));

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Articles" }
                RoleGate {
                    allowed: nav::CONTENT_ROLES,
                    fallback: rsx! {},
                    Link {
                        to: Route::ArticleCreate {},
                        class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800",
                        "New Article"
                    }
                }
            }

            input {
                r#type: "search",
                value: "{query}",
                oninput: move |e| {
                    query.set(e.value());
                    page.set(1);
                },
                placeholder: "Search articles...",
                class: "w-full md:w-80 px-3 py-2 mb-4 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
            }

            match &*list.read() {
                Some(Ok(data)) if !data.items.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Title" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Author" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Views" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Published" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Actions" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-gray-200",
                                for article in data.items.iter() {
                                    ArticleRow {
                                        article: article.clone(),
                                        can_approve,
                                        can_edit,
                                        on_approve: handle_approve,
                                        on_reject: handle_reject,
                                        on_delete: handle_delete,
                                    }
                                }
                            }
                        }
                    }
                    PaginationControls {
                        pagination: data.pagination.clone(),
                        on_page: move |p| page.set(p),
                    }
                },
                Some(Ok(_)) => rsx! {
                    EmptyState {
                        icon: "\u{1F4F0}",
                        message: "No articles found.".to_string(),
                        action: if can_edit {
                            Some(rsx! {
                                Link {
                                    to: Route::ArticleCreate {},
                                    class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800",
                                    "Write the first one"
                                }
                            })
                        } else {
                            None
                        },
                    }
                },
                Some(Err(_)) => rsx! {
                    EmptyState {
                        icon: "\u{26A0}",
                        message: "Couldn't load articles.".to_string(),
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
struct ArticleRowProps {
    article: Article,
    can_approve: bool,
    can_edit: bool,
    on_approve: EventHandler<i64>,
    on_reject: EventHandler<i64>,
    on_delete: EventHandler<i64>,
}

#[component]
fn ArticleRow(props: ArticleRowProps) -> Element {
    let article = &props.article;

    let status_class = match article.status {
        ArticleStatus::Published => "bg-green-100 text-green-700",
        ArticleStatus::Pending => "bg-yellow-100 text-yellow-700",
        ArticleStatus::Rejected => "bg-red-100 text-red-700",
        ArticleStatus::Draft => "bg-gray-100 text-gray-700",
    };

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4",
                if props.can_edit {
                    Link {
                        to: Route::ArticleEdit { id: article.id },
                        class: "text-sky-600 hover:text-sky-700 font-medium",
                        "{article.title}"
                    }
                } else {
                    span { class: "font-medium text-gray-900", "{article.title}" }
                }
            }
            td { class: "px-6 py-4 text-sm text-gray-500", "{article.author_name()}" }
            td {
                class: "px-6 py-4",
                span {
                    class: "px-2 py-1 rounded text-xs font-medium {status_class}",
                    "{article.status.label()}"
                }
            }
            td { class: "px-6 py-4 text-sm text-gray-500", "{article.views}" }
            td { class: "px-6 py-4 text-sm text-gray-500", "{article.published_on()}" }
            td {
                class: "px-6 py-4",
                div {
                    class: "flex gap-2",
                    if props.can_approve && article.status == ArticleStatus::Pending {
                        button {
                            class: "px-2 py-1 bg-green-100 text-green-700 text-xs rounded hover:bg-green-200",
                            onclick: {
                                let id = article.id;
                                move |_| props.on_approve.call(id)
                            },
                            "Approve"
                        }
                        button {
                            class: "px-2 py-1 bg-red-100 text-red-700 text-xs rounded hover:bg-red-200",
                            onclick: {
                                let id = article.id;
                                move |_| props.on_reject.call(id)
                            },
                            "Reject"
                        }
                    }
                    if props.can_edit {
                        button {
                            class: "px-2 py-1 bg-gray-100 text-gray-600 text-xs rounded hover:bg-gray-200",
                            onclick: {
                                let id = article.id;
                                move |_| props.on_delete.call(id)
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

/// New article page
#[component]
pub fn ArticleCreate() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();
    let mut saving = use_signal(|| false);

    let handle_save = move |draft: ArticleDraft| {
        spawn(async move {
            saving.set(true);
            match articles::create(&session.client(), &draft).await {
                Ok(_) => {
                    notices.info("Article created");
                    navigator.push(Route::Articles {});
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
            saving.set(false);
        });
    };

    rsx! {
        RoleGate {
            allowed: nav::CONTENT_ROLES,
            div {
                h1 { class: "text-2xl font-bold text-gray-900 mb-6", "New Article" }
                ArticleForm { on_save: handle_save, saving: saving() }
            }
        }
    }
}

/// Edit article page
#[component]
pub fn ArticleEdit(id: i64) -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();
    let mut saving = use_signal(|| false);

    let article = use_resource(move || async move {
        articles::get(&session.client(), id).await
    });

    use_effect(move || {
        if let Some(Err(err)) = &*article.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });

    let handle_save = move |draft: ArticleDraft| {
        spawn(async move {
            saving.set(true);
            match articles::update(&session.client(), id, &draft).await {
                Ok(_) => {
                    notices.info("Article saved");
                    navigator.push(Route::Articles {});
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
            saving.set(false);
        });
    };

    rsx! {
        RoleGate {
            allowed: nav::CONTENT_ROLES,
            div {
                h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Edit Article" }
                match &*article.read() {
                    Some(Ok(Some(article))) => rsx! {
                        ArticleForm {
                            article: article.clone(),
                            on_save: handle_save,
                            saving: saving(),
                        }
                    },
                    // The id resolved to nothing recognizable — offer the way back.
                    Some(Ok(None)) => rsx! {
                        EmptyState {
                            icon: "\u{1F50D}",
                            message: "This article no longer exists.".to_string(),
                            action: rsx! {
                                Link {
                                    to: Route::Articles {},
                                    class: "px-4 py-2 bg-gray-100 text-gray-700 text-sm rounded-md hover:bg-gray-200",
                                    "Back to articles"
                                }
                            },
                        }
                    },
                    Some(Err(_)) => rsx! {
                        EmptyState {
                            icon: "\u{26A0}",
                            message: "Couldn't load this article.".to_string(),
                        }
                    },
                    None => rsx! {
                        div { class: "text-center py-12", LoadingSpinner {} }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ArticleFormProps {
    #[props(default)]
    article: Option<Article>,
    on_save: EventHandler<ArticleDraft>,
    saving: bool,
}

#[component]
fn ArticleForm(props: ArticleFormProps) -> Element {
    let session = use_session();

    let mut title = use_signal(|| props.article.as_ref().map(|a| a.title.clone()).unwrap_or_default());
    let mut content =
        use_signal(|| props.article.as_ref().map(|a| a.content.clone()).unwrap_or_default());
    let mut excerpt = use_signal(|| {
        props
            .article
            .as_ref()
            .and_then(|a| a.excerpt.clone())
            .unwrap_or_default()
    });
    let mut category = use_signal(|| {
        props
            .article
            .as_ref()
            .and_then(|a| a.category.clone())
            .unwrap_or_default()
    });
    let mut tag_input = use_signal(|| {
        props
            .article
            .as_ref()
            .map(|a| tags::serialize_tags(&a.tags))
            .unwrap_or_default()
    });

    // Fetched independently of the article itself; the select fills in
    // whenever this resolves, in any order.
    let category_options = use_resource(move || async move {
        categories::list(&session.client()).await
    });

    let on_save = props.on_save;
    let saving = props.saving;

    let handle_submit = move |_| {
        let mut draft = ArticleDraft {
            title: title().trim().to_string(),
            content: content(),
            excerpt: Some(excerpt()).filter(|s| !s.trim().is_empty()),
            category: Some(category()).filter(|s| !s.is_empty()),
            ..Default::default()
        };
        draft.set_tags(&tags::parse_tags(&tag_input()));
        on_save.call(draft);
    };

    rsx! {
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
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Category" }
                select {
                    value: "{category}",
                    onchange: move |e| category.set(e.value()),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md bg-white",
                    option { value: "", "No category" }
                    if let Some(Ok(cats)) = &*category_options.read() {
                        for cat in cats.items.iter() {
                            option {
                                key: "{cat.id}",
                                value: "{cat.slug}",
                                selected: category() == cat.slug,
                                "{cat.name}"
                            }
                        }
                    }
                }
            }

            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Excerpt" }
                input {
                    r#type: "text",
                    value: "{excerpt}",
                    oninput: move |e| excerpt.set(e.value()),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                }
            }

            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Content" }
                textarea {
                    value: "{content}",
                    oninput: move |e| content.set(e.value()),
                    rows: 12,
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md font-mono text-sm focus:outline-none focus:ring-2 focus:ring-sky-500",
                }
            }

            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Tags" }
                input {
                    r#type: "text",
                    value: "{tag_input}",
                    oninput: move |e| tag_input.set(e.value()),
                    placeholder: "politics, economy",
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                }
                p { class: "mt-1 text-xs text-gray-500", "Comma-separated" }
            }

            button {
                r#type: "submit",
                class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800 disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: saving || title().trim().is_empty(),
                if saving { "Saving..." } else { "Save Article" }
            }
        }
    }
}
