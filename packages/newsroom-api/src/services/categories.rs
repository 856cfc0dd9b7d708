//! Category endpoints.

use serde::Serialize;

use crate::client::ApiClient;
use crate::envelope::{extract_detail, extract_list};
use crate::error::ApiError;
use crate::types::{Category, Paginated};

pub async fn list(client: &ApiClient) -> Result<Paginated<Category>, ApiError> {
    let body = client.get("/categories").await?;
    Ok(extract_list(&body, &["categories"], None))
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub async fn create(client: &ApiClient, draft: &CategoryDraft) -> Result<Option<Category>, ApiError> {
    let body = client.post("/categories", draft).await?;
    Ok(extract_detail(&body, &["category"]))
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/categories/{id}")).await?;
    Ok(())
}

/// Slug derived from the display name: lowercase, hyphen-separated.
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Local  News & Politics"), "local-news-politics");
        assert_eq!(slugify("  AI/ML  "), "ai-ml");
    }
}
