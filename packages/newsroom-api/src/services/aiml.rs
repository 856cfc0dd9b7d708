//! AI/ML content endpoints.

use serde::Serialize;

use crate::client::ApiClient;
use crate::envelope::{extract_detail, extract_list};
use crate::error::ApiError;
use crate::tags;
use crate::types::{AimlArticle, Category, Paginated};

const LIST_NAMES: &[&str] = &["articles", "aimlArticles"];

pub async fn trending(client: &ApiClient, page: u32) -> Result<Paginated<AimlArticle>, ApiError> {
    let body = client
        .get_query("/aiml/trending", &[("page", page.to_string())])
        .await?;
    Ok(extract_list(&body, LIST_NAMES, Some(page)))
}

pub async fn categories(client: &ApiClient) -> Result<Paginated<Category>, ApiError> {
    let body = client.get("/aiml/categories").await?;
    Ok(extract_list(&body, &["categories"], None))
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AimlDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Comma-joined on the wire; see [`crate::tags`].
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

impl AimlDraft {
    pub fn set_tags(&mut self, tags: &[String]) {
        self.tags = tags::serialize_tags(tags);
    }
}

pub async fn create(client: &ApiClient, draft: &AimlDraft) -> Result<Option<AimlArticle>, ApiError> {
    let body = client.post("/aiml/articles", draft).await?;
    Ok(extract_detail(&body, &["article"]))
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/aiml/articles/{id}")).await?;
    Ok(())
}
