//! Notification endpoints. These are polled in the background; callers treat
//! them as *silent* — failures never produce a user-facing notice.

use serde::Deserialize;

use crate::client::ApiClient;
use crate::envelope::extract_detail;
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
struct UnreadCount {
    #[serde(default)]
    count: u64,
}

pub async fn unread_count(client: &ApiClient) -> Result<u64, ApiError> {
    let body = client.get("/notifications/unread-count").await?;
    Ok(extract_detail::<UnreadCount>(&body, &["unread"])
        .map(|unread| unread.count)
        .unwrap_or(0))
}

pub async fn mark_all_read(client: &ApiClient) -> Result<(), ApiError> {
    client
        .post("/notifications/read-all", &serde_json::json!({}))
        .await?;
    Ok(())
}
