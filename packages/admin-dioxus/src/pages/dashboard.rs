//! Dashboard page with stats overview

use dioxus::prelude::*;
use newsroom_api::services::analytics;
use newsroom_api::types::DashboardStats;
use newsroom_api::ApiError;

use crate::nav;
use crate::pages::report_error;
use crate::routes::Route;
use crate::session::use_session;
use crate::state::use_notices;

#[component]
pub fn Dashboard() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();
    let role = session.role();

    let stats_resource = use_resource(move || async move {
        analytics::dashboard_stats(&session.client()).await
    });

    // The cards degrade to zeros on failure, but an expired session must
    // still tear down here — this is the landing page.
    use_effect(move || {
        if let Some(Err(err @ ApiError::Unauthorized)) = &*stats_resource.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });

    let stats = match &*stats_resource.read() {
        Some(Ok(stats)) => stats.clone(),
        // A failed stats fetch renders zeros; the page itself never breaks.
        _ => DashboardStats::default(),
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Dashboard" }

            // Stats Grid
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8",

                StatCard {
                    title: "Articles",
                    value: stats.total_articles,
                    icon: "\u{1F4F0}",
                    color: "blue"
                }
                StatCard {
                    title: "Pending Approval",
                    value: stats.pending_articles,
                    icon: "\u{23F3}",
                    color: "amber"
                }
                StatCard {
                    title: "Active Ads",
                    value: stats.active_ads,
                    icon: "\u{1F4E2}",
                    color: "green"
                }
                StatCard {
                    title: "Users",
                    value: stats.total_users,
                    icon: "\u{1F465}",
                    color: "violet"
                }
            }

            // Quick Actions, filtered by the same allow-lists as the nav
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Actions" }
                div {
                    class: "flex flex-wrap gap-3",
                    QuickActionLink {
                        to: Route::Articles {},
                        label: "Review Articles",
                        icon: "\u{1F4DD}"
                    }
                    if role.map_or(false, |r| nav::CONTENT_ROLES.contains(&r)) {
                        QuickActionLink {
                            to: Route::ArticleCreate {},
                            label: "Write Article",
                            icon: "\u{270F}"
                        }
                    }
                    if role.map_or(false, |r| nav::APPROVAL_ROLES.contains(&r)) {
                        QuickActionLink {
                            to: Route::Ads {},
                            label: "Manage Ads",
                            icon: "\u{1F4E2}"
                        }
                    }
                    if role.map_or(false, |r| nav::ADMIN_ONLY.contains(&r)) {
                        QuickActionLink {
                            to: Route::Users {},
                            label: "Manage Users",
                            icon: "\u{1F465}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: &'static str, value: u64, icon: &'static str, color: &'static str) -> Element {
    let bg_class = match color {
        "blue" => "bg-blue-50",
        "amber" => "bg-amber-50",
        "green" => "bg-green-50",
        "violet" => "bg-violet-50",
        _ => "bg-gray-50",
    };

    let text_class = match color {
        "blue" => "text-blue-700",
        "amber" => "text-amber-700",
        "green" => "text-green-700",
        "violet" => "text-violet-700",
        _ => "text-gray-700",
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center gap-4",
                div {
                    class: "w-12 h-12 rounded-lg flex items-center justify-center text-2xl {bg_class}",
                    "{icon}"
                }
                div {
                    p { class: "text-sm text-gray-500", "{title}" }
                    p { class: "text-2xl font-bold {text_class}", "{value}" }
                }
            }
        }
    }
}

#[component]
fn QuickActionLink(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "flex items-center gap-2 px-4 py-2 bg-gray-50 hover:bg-gray-100 rounded-lg text-sm font-medium text-gray-700",
            span { "{icon}" }
            span { "{label}" }
        }
    }
}
