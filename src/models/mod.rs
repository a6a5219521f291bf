//! Resource shapes carried by webhook payloads.
//!
//! Fields are the union of what both observed protocol versions send.
//! Missing attributes fall back to defaults; attributes the sender may null
//! out are `Option`s.

mod campaign;
mod goal;
mod id;
mod member;
mod relationship;
pub mod scalar;
mod tier;
mod user;

pub use campaign::{Campaign, CampaignAttributes, CampaignRelationships};
pub use goal::{Goal, GoalAttributes, GoalRelationships};
pub use id::Id;
pub use member::{Member, MemberAttributes, MemberRelationships};
pub use relationship::{RelationshipLinks, ResourceIdentifier, ToMany, ToOne};
pub use tier::{Reward, Tier, TierAttributes, TierRelationships};
pub use user::{SocialConnection, SocialConnections, User, UserAttributes, UserRelationships};
