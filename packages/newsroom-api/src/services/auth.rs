//! Authentication endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::envelope::extract_detail;
use crate::error::ApiError;
use crate::types::User;

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// What a successful login yields. The caller persists both together.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub user: User,
    pub token: String,
}

/// Log in. Some deployments nest the payload one level deeper
/// (`data.data.{user, accessToken}`) than others (`data.{user, accessToken}`);
/// the nested path is checked first. A response with no access token in
/// either shape is a login failure, reported with the backend's message.
pub async fn login(
    client: &ApiClient,
    credentials: &LoginCredentials,
) -> Result<LoginSession, ApiError> {
    let body = match client.post("/auth/login", credentials).await {
        Ok(body) => body,
        Err(ApiError::Unauthorized) => {
            return Err(ApiError::Auth("Invalid email or password".to_string()))
        }
        Err(ApiError::Api { message, .. }) => return Err(ApiError::Auth(message)),
        Err(other) => return Err(other),
    };

    extract_session(&body).ok_or_else(|| ApiError::Auth(login_error_message(&body)))
}

/// Best-effort remote logout. Errors are swallowed — the caller clears the
/// local session regardless.
pub async fn logout(client: &ApiClient) {
    if let Err(err) = client.post("/auth/logout", &serde_json::json!({})).await {
        tracing::debug!(%err, "remote logout failed; local session is cleared anyway");
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// Update the signed-in user's profile. Returns the fresh user record when
/// the backend echoes one back.
pub async fn update_profile(
    client: &ApiClient,
    update: &ProfileUpdate,
) -> Result<Option<User>, ApiError> {
    let body = client.put("/auth/profile", update).await?;
    Ok(extract_detail(&body, &["user"]))
}

fn extract_session(body: &Value) -> Option<LoginSession> {
    let outer = body.get("data").unwrap_or(body);
    let payload = match outer.get("data") {
        Some(inner) if inner.get("accessToken").is_some() => inner,
        _ => outer,
    };

    let token = payload.get("accessToken")?.as_str()?.to_string();
    let user = serde_json::from_value(payload.get("user")?.clone()).ok()?;
    Some(LoginSession { user, token })
}

fn login_error_message(body: &Value) -> String {
    body.get("message")
        .or_else(|| body.get("data").and_then(|data| data.get("message")))
        .and_then(Value::as_str)
        .unwrap_or("Login failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use serde_json::json;

    fn user_json() -> Value {
        json!({"id": 1, "email": "e@example.com", "role": "EDITOR"})
    }

    #[test]
    fn nested_login_payload_wins() {
        let body = json!({
            "success": true,
            "data": {"data": {"user": user_json(), "accessToken": "nested-token"}}
        });
        let session = extract_session(&body).unwrap();
        assert_eq!(session.token, "nested-token");
        assert_eq!(session.user.role, Some(Role::Editor));
    }

    #[test]
    fn flat_login_payload_is_accepted() {
        let body = json!({
            "success": true,
            "data": {"user": user_json(), "accessToken": "flat-token"}
        });
        let session = extract_session(&body).unwrap();
        assert_eq!(session.token, "flat-token");
    }

    #[test]
    fn missing_token_is_a_failure_with_backend_message() {
        let body = json!({"success": false, "message": "Account disabled"});
        assert!(extract_session(&body).is_none());
        assert_eq!(login_error_message(&body), "Account disabled");
    }

    #[test]
    fn missing_token_and_message_gets_generic_failure() {
        let body = json!({"data": {"user": user_json()}});
        assert!(extract_session(&body).is_none());
        assert_eq!(login_error_message(&body), "Login failed");
    }
}
