//! Analytics endpoints.

use crate::client::ApiClient;
use crate::envelope::{extract_detail, extract_list};
use crate::error::ApiError;
use crate::types::{Article, DashboardStats, Paginated};

/// Aggregate counters for the dashboard cards. A response with no
/// recognizable stats object renders as zeros, not as an error.
pub async fn dashboard_stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    let body = client.get("/analytics/dashboard").await?;
    Ok(extract_detail(&body, &["stats"]).unwrap_or_default())
}

/// Most-viewed articles for the analytics page.
pub async fn top_articles(client: &ApiClient) -> Result<Paginated<Article>, ApiError> {
    let body = client.get("/analytics/top-articles").await?;
    Ok(extract_list(&body, &["articles"], None))
}
