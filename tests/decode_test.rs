//! Decoding of full webhook payloads from both protocol versions.

use anyhow::Result;
use patreon_webhooks::{EntityKind, Included, WebhookError, decode};

const PLEDGES_CREATE: &str = include_str!("fixtures/pledges_create.json");
const MEMBERS_PLEDGE_CREATE: &str = include_str!("fixtures/members_pledge_create.json");

#[test]
fn pledge_payload_yields_one_of_each_singleton() -> Result<()> {
    let webhook = decode(PLEDGES_CREATE.as_bytes())?;

    assert_eq!(webhook.data.id, "5531742");
    assert_eq!(webhook.data.kind, "pledge");
    assert_eq!(webhook.data.attributes.pledge_amount_cents, Some(100));
    assert_eq!(webhook.data.attributes.pledge_cap_amount_cents, None);
    assert_eq!(
        webhook.links.get("self").map(String::as_str),
        Some("https://www.patreon.com/api/pledges/5531742")
    );

    let campaign = webhook.campaign.as_ref().expect("campaign");
    assert_eq!(campaign.id, "70261");
    assert_eq!(campaign.attributes.name.as_deref(), Some("Platform Podcast"));

    let user = webhook.user.as_ref().expect("user");
    assert_eq!(user.id, "32187");
    assert_eq!(user.attributes.email.as_deref(), Some("platform@example.com"));

    assert_eq!(webhook.goals.len(), 1);
    assert!(!webhook.goals[0].is_reached());
    assert!(webhook.tiers.is_empty());
    Ok(())
}

#[test]
fn rewards_follow_included_order() -> Result<()> {
    let webhook = decode(PLEDGES_CREATE.as_bytes())?;

    let ids: Vec<&str> = webhook.rewards.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["-1", "0", "1983621"]);

    // The campaign's own references line up with what was included.
    let campaign = webhook.campaign.as_ref().expect("campaign");
    let referenced: Vec<&str> = campaign.relationships.rewards.ids().map(|id| id.as_str()).collect();
    assert_eq!(referenced, ids);

    let listener = &webhook.rewards[2];
    assert_eq!(listener.attributes.title.as_deref(), Some("Listener"));
    assert_eq!(listener.attributes.remaining, None);
    assert_eq!(webhook.rewards[0].attributes.remaining, Some(0));
    Ok(())
}

#[test]
fn member_payload_accepts_numeric_ids_and_tiers() -> Result<()> {
    let webhook = decode(MEMBERS_PLEDGE_CREATE.as_bytes())?;

    assert_eq!(webhook.data.kind, "member");
    assert!(webhook.data.is_active_patron());
    assert_eq!(webhook.data.attributes.pledge_cap_amount_cents, Some(500));
    assert_eq!(webhook.data.attributes.last_charge_date, None);
    assert_eq!(
        webhook.data.relationships.currently_entitled_tiers.data[0].id,
        "3023476"
    );

    assert_eq!(webhook.campaign.as_ref().expect("campaign").id, "1640371");
    assert!(webhook.campaign.as_ref().expect("campaign").relationships.goals.data.is_empty());
    assert_eq!(webhook.user.as_ref().expect("user").id, "14209341");

    let tiers: Vec<(&str, Option<i64>)> = webhook
        .tiers
        .iter()
        .map(|t| (t.id.as_str(), t.attributes.user_limit))
        .collect();
    assert_eq!(tiers, [("3023476", None), ("3023480", Some(60))]);
    assert!(webhook.rewards.is_empty());
    assert!(webhook.goals.is_empty());
    Ok(())
}

#[test]
fn one_unknown_entry_poisons_a_valid_payload() -> Result<()> {
    let mut document: serde_json::Value = serde_json::from_str(MEMBERS_PLEDGE_CREATE)?;
    document["included"]
        .as_array_mut()
        .expect("included array")
        .push(serde_json::json!({"id": "77", "type": "unknown_kind", "attributes": {}}));
    let body = serde_json::to_vec(&document)?;

    match decode(&body) {
        Err(WebhookError::UnknownEntityKind(kind)) => assert_eq!(kind, "unknown_kind"),
        other => panic!("expected unknown kind, got {other:?}"),
    }
    Ok(())
}

#[test]
fn every_kind_lands_in_its_slot_when_interleaved() -> Result<()> {
    let body = br#"{
        "data": {"id": "77", "type": "member", "attributes": {"patron_status": "active_patron"}},
        "included": [
            {"id": "r1", "type": "reward", "attributes": {"amount_cents": 100}},
            {"id": "t1", "type": "tier", "attributes": {"amount_cents": 300}},
            {"id": "9", "type": "campaign", "attributes": {"name": "Mixed"}},
            {"id": "g1", "type": "goal", "attributes": {"amount_cents": 10000}},
            {"id": "r2", "type": "reward", "attributes": {"amount_cents": 200}},
            {"id": 42, "type": "user", "attributes": {"full_name": "Mixed Patron"}},
            {"id": "t2", "type": "tier", "attributes": {"amount_cents": 600}}
        ]
    }"#;
    let webhook = decode(body)?;

    assert_eq!(webhook.data.id, "77");
    assert_eq!(webhook.campaign.as_ref().map(|c| c.id.as_ref()), Some("9"));
    assert_eq!(webhook.user.as_ref().map(|u| u.id.as_ref()), Some("42"));
    assert_eq!(webhook.goals.len(), 1);
    assert_eq!(webhook.goals[0].id, "g1");

    let rewards: Vec<&str> = webhook.rewards.iter().map(|r| r.id.as_ref()).collect();
    assert_eq!(rewards, ["r1", "r2"]);
    let tiers: Vec<&str> = webhook.tiers.iter().map(|t| t.id.as_ref()).collect();
    assert_eq!(tiers, ["t1", "t2"]);
    assert_eq!(webhook.tiers[1].attributes.amount_cents, Some(600));
    Ok(())
}

#[test]
fn mistyped_attribute_is_malformed() {
    let body = br#"{"data":{"id":"1","type":"member"},"included":[
        {"id":"3","type":"tier","attributes":{"published":"yes"}}
    ]}"#;
    assert!(matches!(decode(body), Err(WebhookError::MalformedPayload(_))));
}

#[test]
fn included_entries_decode_individually() -> Result<()> {
    let document: serde_json::Value = serde_json::from_str(PLEDGES_CREATE)?;
    let kinds = document["included"]
        .as_array()
        .expect("included array")
        .iter()
        .map(|entry| -> Result<EntityKind> {
            let raw = serde_json::value::to_raw_value(entry)?;
            Ok(Included::from_raw(&raw)?.kind())
        })
        .collect::<Result<Vec<_>>>()?;

    assert_eq!(
        kinds,
        [
            EntityKind::Campaign,
            EntityKind::User,
            EntityKind::Reward,
            EntityKind::Reward,
            EntityKind::Reward,
            EntityKind::Goal,
        ]
    );
    Ok(())
}
