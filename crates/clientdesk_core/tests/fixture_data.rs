use clientdesk_core::fixture::{load_contacts, load_news, load_next_steps, load_triggers};
use clientdesk_core::{TriggerKind, TriggerStatus};
use std::collections::BTreeSet;

#[test]
fn ids_are_unique_within_each_collection() {
    let contacts = load_contacts().unwrap();
    let contact_ids: BTreeSet<_> = contacts.iter().map(|c| c.id).collect();
    assert_eq!(contact_ids.len(), contacts.len());

    let news = load_news().unwrap();
    let news_ids: BTreeSet<_> = news.iter().map(|n| n.id).collect();
    assert_eq!(news_ids.len(), news.len());

    let triggers = load_triggers().unwrap();
    let trigger_ids: BTreeSet<_> = triggers.iter().map(|t| t.id).collect();
    assert_eq!(trigger_ids.len(), triggers.len());
}

#[test]
fn trigger_fixture_round_trips_type_and_status_spelling() {
    let triggers = load_triggers().unwrap();
    assert_eq!(triggers[0].kind, TriggerKind::Email);
    assert_eq!(triggers[1].kind, TriggerKind::Meeting);
    assert_eq!(triggers[3].status, TriggerStatus::Inactive);
    let active = triggers
        .iter()
        .filter(|t| t.status == TriggerStatus::Active)
        .count();
    assert_eq!(active, 5);
}

#[test]
fn optional_contact_fields_decode_when_absent() {
    let contacts = load_contacts().unwrap();
    let emily = contacts.iter().find(|c| c.name == "Emily Davis").unwrap();
    assert!(emily.notes.is_none());
    assert!(emily.address.is_some());
}

#[test]
fn news_clients_reference_mostly_known_contacts() {
    // Denormalized by name only: David Miller has news but no contact row,
    // and nothing validates that.
    let contacts = load_contacts().unwrap();
    let known: BTreeSet<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    let news = load_news().unwrap();
    let unknown: Vec<&str> = news
        .iter()
        .map(|n| n.client.as_str())
        .filter(|client| !known.contains(client))
        .collect();
    assert_eq!(unknown, ["David Miller"]);
}

#[test]
fn next_step_priorities_cover_all_buckets() {
    let steps = load_next_steps().unwrap();
    assert_eq!(steps.len(), 3);
    let buckets: BTreeSet<String> = steps.iter().map(|s| format!("{:?}", s.priority)).collect();
    assert_eq!(buckets.len(), 3);
}
