use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The trigger named in the `X-Patreon-Event` header.
///
/// Unrecognised triggers are kept verbatim in [`EventKind::Other`]; only the
/// payload itself is decoded fail-closed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PledgeCreate,
    PledgeUpdate,
    PledgeDelete,
    MemberCreate,
    MemberUpdate,
    MemberDelete,
    MemberPledgeCreate,
    MemberPledgeUpdate,
    MemberPledgeDelete,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::PledgeCreate => "pledges:create",
            EventKind::PledgeUpdate => "pledges:update",
            EventKind::PledgeDelete => "pledges:delete",
            EventKind::MemberCreate => "members:create",
            EventKind::MemberUpdate => "members:update",
            EventKind::MemberDelete => "members:delete",
            EventKind::MemberPledgeCreate => "members:pledge:create",
            EventKind::MemberPledgeUpdate => "members:pledge:update",
            EventKind::MemberPledgeDelete => "members:pledge:delete",
            EventKind::Other(name) => name,
        }
    }

    /// Whether the event ends a pledge or membership.
    pub fn is_delete(&self) -> bool {
        matches!(
            self,
            EventKind::PledgeDelete | EventKind::MemberDelete | EventKind::MemberPledgeDelete
        )
    }
}

impl From<&str> for EventKind {
    fn from(value: &str) -> Self {
        match value {
            "pledges:create" => EventKind::PledgeCreate,
            "pledges:update" => EventKind::PledgeUpdate,
            "pledges:delete" => EventKind::PledgeDelete,
            "members:create" => EventKind::MemberCreate,
            "members:update" => EventKind::MemberUpdate,
            "members:delete" => EventKind::MemberDelete,
            "members:pledge:create" => EventKind::MemberPledgeCreate,
            "members:pledge:update" => EventKind::MemberPledgeUpdate,
            "members:pledge:delete" => EventKind::MemberPledgeDelete,
            other => EventKind::Other(other.to_string()),
        }
    }
}

impl From<String> for EventKind {
    fn from(value: String) -> Self {
        EventKind::from(value.as_str())
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(EventKind::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_triggers_render_back_unchanged() {
        for name in [
            "pledges:create",
            "pledges:update",
            "pledges:delete",
            "members:create",
            "members:update",
            "members:delete",
            "members:pledge:create",
            "members:pledge:update",
            "members:pledge:delete",
        ] {
            let kind = EventKind::from(name);
            assert!(!matches!(kind, EventKind::Other(_)), "{name}");
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn unknown_trigger_is_kept_verbatim() {
        let kind = EventKind::from("posts:publish");
        assert_eq!(kind, EventKind::Other("posts:publish".into()));
        assert_eq!(kind.as_str(), "posts:publish");
    }

    #[test]
    fn delete_events() {
        assert!(EventKind::MemberPledgeDelete.is_delete());
        assert!(!EventKind::MemberUpdate.is_delete());
    }
}
