//! Article endpoints.

use chrono::DateTime;
use serde::Serialize;

use crate::client::ApiClient;
use crate::envelope::{extract_detail, extract_list};
use crate::error::ApiError;
use crate::tags;
use crate::types::{Article, Paginated};

const LIST_NAMES: &[&str] = &["articles"];
const DETAIL_NAMES: &[&str] = &["article"];

pub async fn list(client: &ApiClient, page: u32) -> Result<Paginated<Article>, ApiError> {
    let body = client
        .get_query("/articles", &[("page", page.to_string())])
        .await?;
    Ok(extract_list(&body, LIST_NAMES, Some(page)))
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Option<Article>, ApiError> {
    let body = client.get(&format!("/articles/{id}")).await?;
    Ok(extract_detail(&body, DETAIL_NAMES))
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Comma-joined on the wire; see [`crate::tags`].
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
}

impl ArticleDraft {
    pub fn set_tags(&mut self, tags: &[String]) {
        self.tags = tags::serialize_tags(tags);
    }
}

pub async fn create(client: &ApiClient, draft: &ArticleDraft) -> Result<Option<Article>, ApiError> {
    let body = client.post("/articles", draft).await?;
    Ok(extract_detail(&body, DETAIL_NAMES))
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    draft: &ArticleDraft,
) -> Result<Option<Article>, ApiError> {
    let body = client.put(&format!("/articles/{id}"), draft).await?;
    Ok(extract_detail(&body, DETAIL_NAMES))
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/articles/{id}")).await?;
    Ok(())
}

pub async fn approve(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .post(&format!("/articles/{id}/approve"), &serde_json::json!({}))
        .await?;
    Ok(())
}

pub async fn reject(client: &ApiClient, id: i64, reason: &str) -> Result<(), ApiError> {
    client
        .post(
            &format!("/articles/{id}/reject"),
            &serde_json::json!({ "reason": reason }),
        )
        .await?;
    Ok(())
}

/// Search articles. The dedicated endpoint is not deployed everywhere; when
/// it is missing the full list is filtered locally and ordered by most recent
/// publish date to approximate the server's ranking.
pub async fn search(
    client: &ApiClient,
    query: &str,
    page: u32,
) -> Result<Paginated<Article>, ApiError> {
    let params = [("q", query.to_string()), ("page", page.to_string())];
    match client.get_query("/articles/search", &params).await {
        Ok(body) => Ok(extract_list(&body, LIST_NAMES, Some(page))),
        Err(ApiError::Api {
            status: 404 | 501, ..
        }) => {
            tracing::debug!("search endpoint unavailable; filtering client-side");
            let all = list(client, 1).await?;
            Ok(filter_locally(all.items, query))
        }
        Err(other) => Err(other),
    }
}

fn filter_locally(mut items: Vec<Article>, query: &str) -> Paginated<Article> {
    let needle = query.to_lowercase();
    items.retain(|article| {
        article.title.to_lowercase().contains(&needle)
            || article.content.to_lowercase().contains(&needle)
    });
    items.sort_by_key(|article| std::cmp::Reverse(publish_ts(article)));
    Paginated::from_items(items)
}

fn publish_ts(article: &Article) -> i64 {
    article
        .published_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.timestamp())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article(id: i64, title: &str, published_at: Option<&str>) -> Article {
        serde_json::from_value(json!({
            "id": id,
            "title": title,
            "content": "body text",
            "publishedAt": published_at,
        }))
        .unwrap()
    }

    #[test]
    fn local_filter_matches_title_and_content_case_insensitively() {
        let items = vec![
            article(1, "Budget Vote", None),
            article(2, "Sports roundup", None),
        ];
        let out = filter_locally(items, "budget");
        assert_eq!(out.items.len(), 1);
        assert_eq!(out.items[0].id, 1);
        assert_eq!(out.pagination.total_items, 1);
    }

    #[test]
    fn local_results_sort_by_descending_publish_date() {
        let items = vec![
            article(1, "old news", Some("2025-01-01T00:00:00Z")),
            article(2, "news without a date", None),
            article(3, "fresh news", Some("2025-06-01T00:00:00Z")),
        ];
        let out = filter_locally(items, "news");
        let ids: Vec<i64> = out.items.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn draft_tags_serialize_comma_joined() {
        let mut draft = ArticleDraft::default();
        draft.set_tags(&["politics".to_string(), " economy ".to_string()]);
        assert_eq!(draft.tags, "politics, economy");
    }
}
