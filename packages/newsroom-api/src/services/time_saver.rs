//! Time Saver digest endpoints.

use serde::Serialize;

use crate::client::ApiClient;
use crate::envelope::{extract_detail, extract_list};
use crate::error::ApiError;
use crate::types::{Paginated, TimeSaverItem};

const LIST_NAMES: &[&str] = &["timeSavers", "items"];

pub async fn list(client: &ApiClient, page: u32) -> Result<Paginated<TimeSaverItem>, ApiError> {
    let body = client
        .get_query("/time-saver", &[("page", page.to_string())])
        .await?;
    Ok(extract_list(&body, LIST_NAMES, Some(page)))
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSaverDraft {
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub async fn create(
    client: &ApiClient,
    draft: &TimeSaverDraft,
) -> Result<Option<TimeSaverItem>, ApiError> {
    let body = client.post("/time-saver", draft).await?;
    Ok(extract_detail(&body, &["timeSaver", "item"]))
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/time-saver/{id}")).await?;
    Ok(())
}
