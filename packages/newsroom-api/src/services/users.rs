//! User management endpoints. All of these are admin-only on the backend;
//! the dashboard additionally hides them behind the same allow-list.

use serde::Serialize;

use crate::client::ApiClient;
use crate::envelope::{extract_detail, extract_list};
use crate::error::ApiError;
use crate::types::{Paginated, Role, User};

pub async fn list(client: &ApiClient, page: u32) -> Result<Paginated<User>, ApiError> {
    let body = client
        .get_query("/users", &[("page", page.to_string())])
        .await?;
    Ok(extract_list(&body, &["users"], Some(page)))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInvite {
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

pub async fn invite(client: &ApiClient, draft: &UserInvite) -> Result<Option<User>, ApiError> {
    let body = client.post("/users", draft).await?;
    Ok(extract_detail(&body, &["user"]))
}

pub async fn set_role(client: &ApiClient, id: i64, role: Role) -> Result<(), ApiError> {
    client
        .put(&format!("/users/{id}/role"), &serde_json::json!({ "role": role }))
        .await?;
    Ok(())
}

pub async fn set_active(client: &ApiClient, id: i64, active: bool) -> Result<(), ApiError> {
    client
        .put(
            &format!("/users/{id}/status"),
            &serde_json::json!({ "isActive": active }),
        )
        .await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/users/{id}")).await?;
    Ok(())
}
