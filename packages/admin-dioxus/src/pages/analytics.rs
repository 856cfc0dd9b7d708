//! Analytics page: aggregate counters and the most-viewed articles.

use dioxus::prelude::*;
use newsroom_api::services::analytics;
use newsroom_api::types::DashboardStats;

use crate::components::{EmptyState, LoadingSpinner, RoleGate};
use crate::nav;
use crate::pages::report_error;
use crate::session::use_session;
use crate::state::use_notices;

/// Analytics page
#[component]
pub fn Analytics() -> Element {
    rsx! {
        RoleGate {
            allowed: nav::APPROVAL_ROLES,
            AnalyticsInner {}
        }
    }
}

#[component]
fn AnalyticsInner() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();

    // Two independent fetches; they resolve in any order and each section
    // renders as soon as its own data lands.
    let stats_resource = use_resource(move || async move {
        analytics::dashboard_stats(&session.client()).await
    });
    let top_articles = use_resource(move || async move {
        analytics::top_articles(&session.client()).await
    });

    use_effect(move || {
        if let Some(Err(err)) = &*top_articles.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });
    use_effect(move || {
        if let Some(Err(err)) = &*stats_resource.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });

    let stats = match &*stats_resource.read() {
        Some(Ok(stats)) => stats.clone(),
        _ => DashboardStats::default(),
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Analytics" }

            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-8",
                MetricCard { label: "Total Views", value: stats.total_views }
                MetricCard { label: "Published Articles", value: stats.total_articles }
                MetricCard { label: "Active Ads", value: stats.active_ads }
            }

            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Most Viewed" }
            match &*top_articles.read() {
                Some(Ok(data)) if !data.items.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                        for article in data.items.iter() {
                            div {
                                key: "{article.id}",
                                class: "p-4 flex items-center justify-between",
                                div {
                                    p { class: "text-sm font-medium text-gray-900", "{article.title}" }
                                    p { class: "text-xs text-gray-500", "{article.author_name()} \u{00b7} {article.published_on()}" }
                                }
                                span { class: "text-sm text-gray-600 font-medium", "{article.views} views" }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    EmptyState {
                        icon: "\u{1F4C8}",
                        message: "No view data yet.".to_string(),
                    }
                },
                Some(Err(_)) => rsx! {
                    EmptyState {
                        icon: "\u{26A0}",
                        message: "Couldn't load analytics.".to_string(),
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", LoadingSpinner {} }
                }
            }
        }
    }
}

#[component]
fn MetricCard(label: &'static str, value: u64) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            p { class: "text-sm text-gray-500", "{label}" }
            p { class: "text-3xl font-bold text-gray-900 mt-1", "{value}" }
        }
    }
}
