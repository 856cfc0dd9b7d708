//! Advertisement endpoints.
//!
//! The ad wire format predates this dashboard: `content` where the UI says
//! `description`, a bare `isActive` boolean instead of a status, counters
//! named `clickCount`, and the budget serialized as a string. The mapping to
//! and from the frontend record lives here and nowhere else.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::client::ApiClient;
use crate::envelope::{extract_detail, extract_list};
use crate::error::ApiError;
use crate::types::{AdStatus, Advertisement, Paginated};

const LIST_NAMES: &[&str] = &["ads", "advertisements"];
const DETAIL_NAMES: &[&str] = &["ad", "advertisement"];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdvertisementWire {
    id: i64,
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    is_active: bool,
    #[serde(default)]
    click_count: u64,
    #[serde(default)]
    impressions: u64,
    #[serde(default, deserialize_with = "budget_lenient")]
    budget: f64,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    placement: Option<String>,
}

/// Budget arrives as a string (`"500"`), occasionally as a number.
fn budget_lenient<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    Ok(match value {
        Value::String(raw) => raw.trim().parse().unwrap_or(0.0),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    })
}

impl From<AdvertisementWire> for Advertisement {
    fn from(wire: AdvertisementWire) -> Self {
        Advertisement {
            id: wire.id,
            title: wire.title,
            description: wire.content,
            status: if wire.is_active {
                AdStatus::Active
            } else {
                AdStatus::Paused
            },
            clicks: wire.click_count,
            impressions: wire.impressions,
            budget: wire.budget,
            start_date: wire.start_date,
            end_date: wire.end_date,
            placement: wire.placement,
        }
    }
}

/// Write shape, mirroring the wire's legacy names. Budget goes back out as a
/// string.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdDraft {
    pub title: String,
    pub content: String,
    pub is_active: bool,
    pub budget: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

impl AdDraft {
    /// Build the wire draft from an edited frontend record.
    pub fn from_record(ad: &Advertisement) -> Self {
        AdDraft {
            title: ad.title.clone(),
            content: ad.description.clone(),
            is_active: ad.status == AdStatus::Active,
            budget: format_budget(ad.budget),
            start_date: ad.start_date.clone(),
            end_date: ad.end_date.clone(),
            placement: ad.placement.clone(),
        }
    }
}

fn format_budget(budget: f64) -> String {
    if budget.fract() == 0.0 {
        format!("{}", budget as i64)
    } else {
        format!("{budget}")
    }
}

pub async fn list(client: &ApiClient, page: u32) -> Result<Paginated<Advertisement>, ApiError> {
    let body = client
        .get_query("/ads", &[("page", page.to_string())])
        .await?;
    let wire: Paginated<AdvertisementWire> = extract_list(&body, LIST_NAMES, Some(page));
    Ok(wire.map(Advertisement::from))
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Option<Advertisement>, ApiError> {
    let body = client.get(&format!("/ads/{id}")).await?;
    Ok(extract_detail::<AdvertisementWire>(&body, DETAIL_NAMES).map(Advertisement::from))
}

pub async fn create(client: &ApiClient, draft: &AdDraft) -> Result<Option<Advertisement>, ApiError> {
    let body = client.post("/ads", draft).await?;
    Ok(extract_detail::<AdvertisementWire>(&body, DETAIL_NAMES).map(Advertisement::from))
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    draft: &AdDraft,
) -> Result<Option<Advertisement>, ApiError> {
    let body = client.put(&format!("/ads/{id}"), draft).await?;
    Ok(extract_detail::<AdvertisementWire>(&body, DETAIL_NAMES).map(Advertisement::from))
}

pub async fn set_active(client: &ApiClient, id: i64, active: bool) -> Result<(), ApiError> {
    client
        .put(
            &format!("/ads/{id}/status"),
            &serde_json::json!({ "isActive": active }),
        )
        .await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/ads/{id}")).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_record_maps_to_frontend_names() {
        let wire: AdvertisementWire = serde_json::from_value(json!({
            "id": 4,
            "title": "Spring sale",
            "content": "Buy now",
            "isActive": false,
            "clickCount": 12,
            "impressions": 340,
            "budget": "500"
        }))
        .unwrap();
        let ad = Advertisement::from(wire);
        assert_eq!(ad.description, "Buy now");
        assert_eq!(ad.status, AdStatus::Paused);
        assert_eq!(ad.clicks, 12);
        assert_eq!(ad.budget, 500.0);
    }

    #[test]
    fn numeric_budget_is_tolerated() {
        let wire: AdvertisementWire =
            serde_json::from_value(json!({"id": 1, "title": "t", "budget": 99.5})).unwrap();
        assert_eq!(wire.budget, 99.5);
    }

    #[test]
    fn unparseable_budget_falls_back_to_zero() {
        let wire: AdvertisementWire =
            serde_json::from_value(json!({"id": 1, "title": "t", "budget": "lots"})).unwrap();
        assert_eq!(wire.budget, 0.0);
    }

    #[test]
    fn draft_round_trips_budget_as_string() {
        let ad = Advertisement {
            id: 4,
            title: "Spring sale".to_string(),
            description: "Buy now".to_string(),
            status: AdStatus::Active,
            clicks: 0,
            impressions: 0,
            budget: 500.0,
            start_date: None,
            end_date: None,
            placement: None,
        };
        let draft = AdDraft::from_record(&ad);
        assert_eq!(draft.budget, "500");
        assert_eq!(draft.content, "Buy now");
        assert!(draft.is_active);
    }
}
