use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::models::relationship::{ToMany, ToOne};
use crate::models::scalar::flexible_int;
use crate::models::Id;

/// The primary `data` record: a member (or, in the older protocol, a pledge).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: MemberAttributes,
    #[serde(default)]
    pub relationships: MemberRelationships,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberAttributes {
    #[serde(deserialize_with = "flexible_int")]
    pub currently_entitled_amount_cents: Option<i64>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_follower: Option<bool>,
    pub last_charge_date: Option<DateTime<Utc>>,
    pub last_charge_status: Option<String>,
    #[serde(deserialize_with = "flexible_int")]
    pub lifetime_support_cents: Option<i64>,
    pub note: Option<String>,
    pub patron_status: Option<String>,
    #[serde(deserialize_with = "flexible_int")]
    pub pledge_amount_cents: Option<i64>,
    #[serde(deserialize_with = "flexible_int")]
    pub pledge_cap_amount_cents: Option<i64>,
    pub pledge_relationship_start: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "flexible_int")]
    pub will_pay_amount_cents: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberRelationships {
    pub address: ToOne,
    pub campaign: ToOne,
    pub user: ToOne,
    pub currently_entitled_tiers: ToMany,
}

impl Member {
    pub fn is_active_patron(&self) -> bool {
        self.attributes.patron_status.as_deref() == Some("active_patron")
    }
}
