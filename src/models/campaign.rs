use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::models::relationship::{ToMany, ToOne};
use crate::models::scalar::flexible_int;
use crate::models::Id;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: CampaignAttributes,
    #[serde(default)]
    pub relationships: CampaignRelationships,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignAttributes {
    pub avatar_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "flexible_int")]
    pub creation_count: Option<i64>,
    pub creation_name: Option<String>,
    pub discord_server_id: Option<String>,
    pub display_patron_goals: Option<bool>,
    pub earnings_visibility: Option<String>,
    pub google_analytics_id: Option<String>,
    pub has_rss: Option<bool>,
    pub has_sent_rss_notify: Option<bool>,
    pub image_small_url: Option<String>,
    pub image_url: Option<String>,
    pub is_charge_upfront: Option<bool>,
    pub is_charged_immediately: Option<bool>,
    pub is_monthly: Option<bool>,
    pub is_nsfw: Option<bool>,
    pub is_plural: Option<bool>,
    pub main_video_embed: Option<String>,
    pub main_video_url: Option<String>,
    pub name: Option<String>,
    pub one_liner: Option<String>,
    #[serde(deserialize_with = "flexible_int")]
    pub outstanding_payment_amount_cents: Option<i64>,
    #[serde(deserialize_with = "flexible_int")]
    pub patron_count: Option<i64>,
    pub pay_per_name: Option<String>,
    #[serde(deserialize_with = "flexible_int")]
    pub pledge_sum: Option<i64>,
    pub pledge_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub rss_artwork_url: Option<String>,
    pub rss_feed_title: Option<String>,
    pub summary: Option<String>,
    pub thanks_embed: Option<String>,
    pub thanks_msg: Option<String>,
    pub thanks_video_url: Option<String>,
    pub url: Option<String>,
    pub vanity: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignRelationships {
    pub creator: ToOne,
    pub goals: ToMany,
    pub rewards: ToMany,
}
