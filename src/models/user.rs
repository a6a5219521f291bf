use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::models::relationship::ToOne;
use crate::models::scalar::{flexible_int, null_as_default};
use crate::models::Id;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: UserAttributes,
    #[serde(default)]
    pub relationships: UserRelationships,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAttributes {
    pub about: Option<String>,
    pub can_see_nsfw: Option<bool>,
    pub created: Option<DateTime<Utc>>,
    pub default_country_code: Option<String>,
    pub discord_id: Option<String>,
    pub email: Option<String>,
    pub facebook: Option<String>,
    pub facebook_id: Option<Id>,
    pub first_name: Option<String>,
    pub full_name: Option<String>,
    #[serde(deserialize_with = "flexible_int")]
    pub gender: Option<i64>,
    pub has_password: Option<bool>,
    pub hide_pledges: Option<bool>,
    pub image_url: Option<String>,
    pub is_creator: Option<bool>,
    pub is_deleted: Option<bool>,
    pub is_email_verified: Option<bool>,
    pub is_nuked: Option<bool>,
    pub is_suspended: Option<bool>,
    pub last_name: Option<String>,
    #[serde(deserialize_with = "flexible_int")]
    pub like_count: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub social_connections: SocialConnections,
    pub thumb_url: Option<String>,
    pub twitch: Option<String>,
    pub twitter: Option<String>,
    pub url: Option<String>,
    pub vanity: Option<String>,
    pub youtube: Option<String>,
}

/// Linked third-party accounts; each platform is `null` when not connected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConnections {
    pub deviantart: Option<SocialConnection>,
    pub discord: Option<SocialConnection>,
    pub facebook: Option<SocialConnection>,
    pub instagram: Option<SocialConnection>,
    pub reddit: Option<SocialConnection>,
    pub spotify: Option<SocialConnection>,
    pub twitch: Option<SocialConnection>,
    pub twitter: Option<SocialConnection>,
    pub youtube: Option<SocialConnection>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConnection {
    #[serde(deserialize_with = "null_as_default")]
    pub scopes: Vec<String>,
    pub url: Option<String>,
    pub user_id: Option<Id>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRelationships {
    pub campaign: ToOne,
}
