//! Advertisement pages: list, create, edit. All of it is restricted to ad
//! managers and admins.

use dioxus::prelude::*;
use newsroom_api::services::ads::{self, AdDraft};
use newsroom_api::types::{AdStatus, Advertisement};

use crate::components::{EmptyState, LoadingSpinner, PaginationControls, RoleGate};
use crate::nav;
use crate::pages::report_error;
use crate::routes::Route;
use crate::session::use_session;
use crate::state::use_notices;

/// Ads list page
#[component]
pub fn Ads() -> Element {
    rsx! {
        RoleGate {
            allowed: nav::APPROVAL_ROLES,
            AdsInner {}
        }
    }
}

#[component]
fn AdsInner() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();

    let mut page = use_signal(|| 1u32);

    let mut list = use_resource(move || async move {
        ads::list(&session.client(), page()).await
    });

    use_effect(move || {
        if let Some(Err(err)) = &*list.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });

    let handle_toggle = move |(id, active): (i64, bool)| {
        spawn(async move {
            match ads::set_active(&session.client(), id, active).await {
                Ok(()) => {
                    notices.info(if active { "Ad resumed" } else { "Ad paused" });
                    list.restart();
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
        });
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            match ads::delete(&session.client(), id).await {
                Ok(()) => {
                    notices.info("Ad deleted");
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
                h1 { class: "text-2xl font-bold text-gray-900", "Advertisements" }
                Link {
                    to: Route::AdCreate {},
                    class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800",
                    "New Ad"
                }
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
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Clicks" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Impressions" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Budget" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Actions" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-gray-200",
                                for ad in data.items.iter() {
                                    AdRow {
                                        ad: ad.clone(),
                                        on_toggle: handle_toggle,
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
                        icon: "\u{1F4E2}",
                        message: "No advertisements yet.".to_string(),
                        action: rsx! {
                            Link {
                                to: Route::AdCreate {},
                                class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800",
                                "Create the first one"
                            }
                        },
                    }
                },
                Some(Err(_)) => rsx! {
                    EmptyState {
                        icon: "\u{26A0}",
                        message: "Couldn't load advertisements.".to_string(),
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
struct AdRowProps {
    ad: Advertisement,
    on_toggle: EventHandler<(i64, bool)>,
    on_delete: EventHandler<i64>,
}

#[component]
fn AdRow(props: AdRowProps) -> Element {
    let ad = &props.ad;

    let status_class = match ad.status {
        AdStatus::Active => "bg-green-100 text-green-700",
        AdStatus::Paused => "bg-yellow-100 text-yellow-700",
    };

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4",
                Link {
                    to: Route::AdDetail { id: ad.id },
                    class: "text-sky-600 hover:text-sky-700 font-medium",
                    "{ad.title}"
                }
            }
            td {
                class: "px-6 py-4",
                span {
                    class: "px-2 py-1 rounded text-xs font-medium {status_class}",
                    "{ad.status.label()}"
                }
            }
            td { class: "px-6 py-4 text-sm text-gray-500", "{ad.clicks}" }
            td { class: "px-6 py-4 text-sm text-gray-500", "{ad.impressions}" }
            td { class: "px-6 py-4 text-sm text-gray-500", "${ad.budget}" }
            td {
                class: "px-6 py-4",
                div {
                    class: "flex gap-2",
                    button {
                        class: "px-2 py-1 bg-gray-100 text-gray-600 text-xs rounded hover:bg-gray-200",
                        onclick: {
                            let id = ad.id;
                            let resume = ad.status == AdStatus::Paused;
                            move |_| props.on_toggle.call((id, resume))
                        },
                        if ad.status == AdStatus::Active { "Pause" } else { "Resume" }
                    }
                    button {
                        class: "px-2 py-1 bg-red-100 text-red-700 text-xs rounded hover:bg-red-200",
                        onclick: {
                            let id = ad.id;
                            move |_| props.on_delete.call(id)
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

/// New ad page
#[component]
pub fn AdCreate() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();
    let mut saving = use_signal(|| false);

    let handle_save = move |draft: AdDraft| {
        spawn(async move {
            saving.set(true);
            match ads::create(&session.client(), &draft).await {
                Ok(_) => {
                    notices.info("Ad created");
                    navigator.push(Route::Ads {});
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
            saving.set(false);
        });
    };

    rsx! {
        RoleGate {
            allowed: nav::APPROVAL_ROLES,
            div {
                h1 { class: "text-2xl font-bold text-gray-900 mb-6", "New Advertisement" }
                AdForm { on_save: handle_save, saving: saving() }
            }
        }
    }
}

/// Ad detail / edit page
#[component]
pub fn AdDetail(id: i64) -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();
    let mut saving = use_signal(|| false);

    let ad = use_resource(move || async move {
        ads::get(&session.client(), id).await
    });

    use_effect(move || {
        if let Some(Err(err)) = &*ad.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });

    let handle_save = move |draft: AdDraft| {
        spawn(async move {
            saving.set(true);
            match ads::update(&session.client(), id, &draft).await {
                Ok(_) => {
                    notices.info("Ad saved");
                    navigator.push(Route::Ads {});
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
            saving.set(false);
        });
    };

    rsx! {
        RoleGate {
            allowed: nav::APPROVAL_ROLES,
            div {
                h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Edit Advertisement" }
                match &*ad.read() {
                    Some(Ok(Some(ad))) => rsx! {
                        AdForm {
                            ad: ad.clone(),
                            on_save: handle_save,
                            saving: saving(),
                        }
                    },
                    Some(Ok(None)) => rsx! {
                        EmptyState {
                            icon: "\u{1F50D}",
                            message: "This ad no longer exists.".to_string(),
                            action: rsx! {
                                Link {
                                    to: Route::Ads {},
                                    class: "px-4 py-2 bg-gray-100 text-gray-700 text-sm rounded-md hover:bg-gray-200",
                                    "Back to ads"
                                }
                            },
                        }
                    },
                    Some(Err(_)) => rsx! {
                        EmptyState {
                            icon: "\u{26A0}",
                            message: "Couldn't load this ad.".to_string(),
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
struct AdFormProps {
    #[props(default)]
    ad: Option<Advertisement>,
    on_save: EventHandler<AdDraft>,
    saving: bool,
}

#[component]
fn AdForm(props: AdFormProps) -> Element {
    let mut title = use_signal(|| props.ad.as_ref().map(|a| a.title.clone()).unwrap_or_default());
    let mut description =
        use_signal(|| props.ad.as_ref().map(|a| a.description.clone()).unwrap_or_default());
    let mut active = use_signal(|| {
        props
            .ad
            .as_ref()
            .map(|a| a.status == AdStatus::Active)
            .unwrap_or(true)
    });
    // Edited as a number, shipped as a string.
    let mut budget = use_signal(|| {
        props
            .ad
            .as_ref()
            .map(|a| a.budget.to_string())
            .unwrap_or_default()
    });
    let mut placement = use_signal(|| {
        props
            .ad
            .as_ref()
            .and_then(|a| a.placement.clone())
            .unwrap_or_default()
    });

    let on_save = props.on_save;
    let saving = props.saving;
    // Dates aren't edited here; carry them through unchanged on update.
    let existing = props.ad.clone();

    let handle_submit = move |_| {
        let budget_value: f64 = budget().trim().parse().unwrap_or(0.0);
        let draft = AdDraft {
            title: title().trim().to_string(),
            content: description(),
            is_active: active(),
            budget: budget_value.to_string(),
            start_date: existing.as_ref().and_then(|a| a.start_date.clone()),
            end_date: existing.as_ref().and_then(|a| a.end_date.clone()),
            placement: Some(placement()).filter(|s| !s.trim().is_empty()),
        };
        on_save.call(draft);
    };

    rsx! {
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
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Description" }
                textarea {
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                    rows: 4,
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                }
            }

            div {
                class: "grid grid-cols-2 gap-4",
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Budget (USD)" }
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        value: "{budget}",
                        oninput: move |e| budget.set(e.value()),
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Placement" }
                    input {
                        r#type: "text",
                        value: "{placement}",
                        oninput: move |e| placement.set(e.value()),
                        placeholder: "homepage-banner",
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                    }
                }
            }

            label {
                class: "flex items-center gap-2 text-sm text-gray-700",
                input {
                    r#type: "checkbox",
                    checked: active(),
                    onchange: move |e| active.set(e.checked()),
                }
                "Active"
            }

            button {
                r#type: "submit",
                class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800 disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: saving || title().trim().is_empty(),
                if saving { "Saving..." } else { "Save Ad" }
            }
        }
    }
}
