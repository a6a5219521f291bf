//! Pledge levels. The older protocol calls them rewards, the newer one
//! tiers; both carry the same attributes.

use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::models::relationship::ToOne;
use crate::models::scalar::{flexible_int, null_as_default};
use crate::models::Id;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: TierAttributes,
    #[serde(default)]
    pub relationships: TierRelationships,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: TierAttributes,
    #[serde(default)]
    pub relationships: TierRelationships,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierAttributes {
    /// Only sent on rewards; dollars rather than cents.
    #[serde(deserialize_with = "flexible_int")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "flexible_int")]
    pub amount_cents: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub discord_role_ids: Vec<String>,
    pub edited_at: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "flexible_int")]
    pub patron_count: Option<i64>,
    #[serde(deserialize_with = "flexible_int")]
    pub post_count: Option<i64>,
    pub published: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "flexible_int")]
    pub remaining: Option<i64>,
    pub requires_shipping: Option<bool>,
    pub title: Option<String>,
    pub unpublished_at: Option<DateTime<Utc>>,
    pub url: Option<String>,
    #[serde(deserialize_with = "flexible_int")]
    pub user_limit: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierRelationships {
    pub campaign: ToOne,
}
