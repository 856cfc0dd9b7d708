//! Canonical domain types for the admin dashboard.
//!
//! These are the frontend shapes. The wire formats vary per endpoint and are
//! reconciled in `envelope` and the service modules — page code only ever
//! sees the records below.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Roles
// ============================================================================

/// The sole axis of authorization. Closed set — every allow-list in the app
/// is a slice of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    AdManager,
    Editor,
    User,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::AdManager => "Ad Manager",
            Role::Editor => "Editor",
            Role::User => "Reader",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::AdManager => "AD_MANAGER",
            Role::Editor => "EDITOR",
            Role::User => "USER",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "ADMIN" => Some(Role::Admin),
            "AD_MANAGER" => Some(Role::AdManager),
            "EDITOR" => Some(Role::Editor),
            "USER" => Some(Role::User),
            _ => None,
        }
    }
}

/// A role string the backend sends that we don't recognize means "no access",
/// not a failed deserialization.
pub(crate) fn role_lenient<'de, D>(de: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.as_deref().and_then(Role::parse))
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, deserialize_with = "role_lenient")]
    pub role: Option<Role>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_login_at: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn role_label(&self) -> &'static str {
        self.role.map(|r| r.label()).unwrap_or("Unknown")
    }
}

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Pagination {
    /// Synthesized pagination for responses that carry none.
    pub fn fallback(requested_page: Option<u32>, item_count: usize) -> Self {
        Pagination {
            current_page: requested_page.unwrap_or(1),
            total_pages: 1,
            total_items: item_count as u64,
            has_next: false,
            has_previous: false,
        }
    }
}

/// The canonical list envelope every list page consumes. `items` is never
/// null and `pagination` is always populated, whatever the wire said.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    pub fn empty(requested_page: Option<u32>) -> Self {
        Paginated {
            items: Vec::new(),
            pagination: Pagination::fallback(requested_page, 0),
        }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        let pagination = Pagination::fallback(None, items.len());
        Paginated { items, pagination }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

// ============================================================================
// Articles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleStatus {
    Draft,
    Pending,
    Published,
    Rejected,
}

impl Default for ArticleStatus {
    fn default() -> Self {
        ArticleStatus::Draft
    }
}

impl ArticleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Draft",
            ArticleStatus::Pending => "Pending",
            ArticleStatus::Published => "Published",
            ArticleStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "crate::tags::tags_lenient")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Article {
    pub fn author_name(&self) -> &str {
        self.author.as_deref().unwrap_or("Unknown")
    }

    pub fn published_on(&self) -> &str {
        self.published_at.as_deref().unwrap_or("N/A")
    }
}

// ============================================================================
// Categories
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub article_count: u64,
}

// ============================================================================
// Advertisements
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdStatus {
    Active,
    Paused,
}

impl AdStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AdStatus::Active => "Active",
            AdStatus::Paused => "Paused",
        }
    }
}

/// The frontend advertisement record. The wire shape is older than this
/// dashboard and uses different field names; `services::ads` owns the
/// translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Advertisement {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: AdStatus,
    pub clicks: u64,
    pub impressions: u64,
    pub budget: f64,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub placement: Option<String>,
}

impl Advertisement {
    pub fn starts_on(&self) -> &str {
        self.start_date.as_deref().unwrap_or("N/A")
    }

    pub fn ends_on(&self) -> &str {
        self.end_date.as_deref().unwrap_or("N/A")
    }
}

// ============================================================================
// AI/ML content
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AimlArticle {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "crate::tags::tags_lenient")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub trending_score: f64,
    #[serde(default)]
    pub created_at: String,
}

// ============================================================================
// Time Saver content
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSaverItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub read_time_minutes: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

// ============================================================================
// Analytics
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_articles: u64,
    #[serde(default)]
    pub pending_articles: u64,
    #[serde(default)]
    pub active_ads: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_views: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_round_trips_through_wire_names() {
        for role in [Role::Admin, Role::AdManager, Role::Editor, Role::User] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn unknown_role_deserializes_to_none() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "email": "x@example.com",
            "role": "SUPERUSER"
        }))
        .expect("unknown role must not fail deserialization");
        assert_eq!(user.role, None);
        assert_eq!(user.role_label(), "Unknown");
    }

    #[test]
    fn missing_optional_user_fields_take_defaults() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "email": "e@example.com",
            "role": "EDITOR"
        }))
        .unwrap();
        assert_eq!(user.role, Some(Role::Editor));
        assert!(user.is_active);
        assert_eq!(user.full_name, "");
    }

    #[test]
    fn article_display_fallbacks() {
        let article: Article = serde_json::from_value(json!({
            "id": 3,
            "title": "Untitled"
        }))
        .unwrap();
        assert_eq!(article.author_name(), "Unknown");
        assert_eq!(article.published_on(), "N/A");
        assert_eq!(article.views, 0);
        assert_eq!(article.status, ArticleStatus::Draft);
    }
}
