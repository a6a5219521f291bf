use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::models::relationship::ToOne;
use crate::models::scalar::flexible_int;
use crate::models::Id;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: GoalAttributes,
    #[serde(default)]
    pub relationships: GoalRelationships,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalAttributes {
    #[serde(deserialize_with = "flexible_int")]
    pub amount_cents: Option<i64>,
    #[serde(deserialize_with = "flexible_int")]
    pub completed_percentage: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub reached_at: Option<DateTime<Utc>>,
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalRelationships {
    pub campaign: ToOne,
}

impl Goal {
    pub fn is_reached(&self) -> bool {
        self.attributes.reached_at.is_some()
    }
}
