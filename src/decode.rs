//! Decoding of authenticated webhook bodies.
//!
//! Payloads are JSON:API documents: the subject of the event sits in `data`
//! and every related resource is flattened into the `included` array, told
//! apart only by its `type`. Each entry is peeked for that discriminator
//! first and then decoded into the matching concrete shape.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde_derive::{Deserialize, Serialize};
use serde_json::value::RawValue;
use tracing::{debug, trace};

use crate::error::{Result, WebhookError};
use crate::models::scalar::null_as_default;
use crate::models::{Campaign, Goal, Member, Reward, Tier, User};

/// A fully decoded delivery.
///
/// `campaign` and `user` keep the last entry of their kind when the sender
/// repeats one; the sequences keep the order of the `included` array.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Webhook {
    pub data: Member,
    pub links: HashMap<String, String>,
    pub campaign: Option<Campaign>,
    pub user: Option<User>,
    pub rewards: Vec<Reward>,
    pub tiers: Vec<Tier>,
    pub goals: Vec<Goal>,
}

impl Webhook {
    fn insert(&mut self, entity: Included) {
        match entity {
            Included::Campaign(campaign) => self.campaign = Some(campaign),
            Included::User(user) => self.user = Some(user),
            Included::Reward(reward) => self.rewards.push(reward),
            Included::Tier(tier) => self.tiers.push(tier),
            Included::Goal(goal) => self.goals.push(goal),
        }
    }
}

/// The resource kinds an `included` entry may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Campaign,
    User,
    Reward,
    Tier,
    Goal,
}

impl EntityKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "campaign" => Some(EntityKind::Campaign),
            "user" => Some(EntityKind::User),
            "reward" => Some(EntityKind::Reward),
            "tier" => Some(EntityKind::Tier),
            "goal" => Some(EntityKind::Goal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Campaign => "campaign",
            EntityKind::User => "user",
            EntityKind::Reward => "reward",
            EntityKind::Tier => "tier",
            EntityKind::Goal => "goal",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decoded entry of the `included` array.
#[derive(Clone, Debug, PartialEq)]
pub enum Included {
    Campaign(Campaign),
    User(User),
    Reward(Reward),
    Tier(Tier),
    Goal(Goal),
}

impl Included {
    /// Peeks the `type` of `raw` and decodes it into that shape.
    pub fn from_raw(raw: &RawValue) -> Result<Self> {
        let Discriminator { kind } = serde_json::from_str(raw.get())?;
        let Some(entity_kind) = EntityKind::parse(&kind) else {
            return Err(WebhookError::UnknownEntityKind(kind.into_owned()));
        };
        trace!(kind = %entity_kind, "decoding included entry");

        let json = raw.get();
        let entity = match entity_kind {
            EntityKind::Campaign => Included::Campaign(serde_json::from_str(json)?),
            EntityKind::User => Included::User(serde_json::from_str(json)?),
            EntityKind::Reward => Included::Reward(serde_json::from_str(json)?),
            EntityKind::Tier => Included::Tier(serde_json::from_str(json)?),
            EntityKind::Goal => Included::Goal(serde_json::from_str(json)?),
        };
        Ok(entity)
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Included::Campaign(_) => EntityKind::Campaign,
            Included::User(_) => EntityKind::User,
            Included::Reward(_) => EntityKind::Reward,
            Included::Tier(_) => EntityKind::Tier,
            Included::Goal(_) => EntityKind::Goal,
        }
    }
}

#[derive(Deserialize)]
struct Discriminator<'a> {
    #[serde(rename = "type", borrow)]
    kind: Cow<'a, str>,
}

#[derive(Deserialize)]
struct Envelope<'a> {
    data: Member,
    #[serde(default, deserialize_with = "null_as_default")]
    links: HashMap<String, String>,
    #[serde(default, borrow)]
    included: Option<Vec<&'a RawValue>>,
}

/// Decodes an authenticated body into a [`Webhook`].
///
/// All-or-nothing: any malformed entry or unknown `included` kind fails the
/// whole call.
#[tracing::instrument(skip_all, fields(bytes = raw.len()))]
pub fn decode(raw: &[u8]) -> Result<Webhook> {
    let envelope: Envelope = serde_json::from_slice(raw)?;

    let mut webhook = Webhook {
        data: envelope.data,
        links: envelope.links,
        ..Webhook::default()
    };
    for entry in envelope.included.unwrap_or_default() {
        webhook.insert(Included::from_raw(entry)?);
    }

    debug!(
        member = %webhook.data.id,
        campaign = webhook.campaign.is_some(),
        user = webhook.user.is_some(),
        rewards = webhook.rewards.len(),
        tiers = webhook.tiers.len(),
        goals = webhook.goals.len(),
        "webhook decoded"
    );
    Ok(webhook)
}
