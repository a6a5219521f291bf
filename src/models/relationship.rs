use serde_derive::{Deserialize, Serialize};

use crate::models::Id;
use crate::models::scalar::null_as_default;

/// A `{id, type}` pointer to another resource. Never resolved here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipLinks {
    #[serde(default)]
    pub related: Option<String>,
}

/// Relationship to at most one resource; `data` may be `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToOne {
    #[serde(default)]
    pub data: Option<ResourceIdentifier>,
    #[serde(default)]
    pub links: Option<RelationshipLinks>,
}

impl ToOne {
    pub fn id(&self) -> Option<&Id> {
        self.data.as_ref().map(|data| &data.id)
    }
}

/// Relationship to an ordered list of resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToMany {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<ResourceIdentifier>,
    #[serde(default)]
    pub links: Option<RelationshipLinks>,
}

impl ToMany {
    pub fn ids(&self) -> impl Iterator<Item = &Id> {
        self.data.iter().map(|data| &data.id)
    }
}
