use std::sync::{Arc, Mutex};

use rstest::rstest;

use super::*;
use crate::domain::{CardColor, ManualClock, MissingFields};
use crate::repository::{MemoryStore, DEFAULT_STORAGE_KEY};

const NOW: i64 = 1_700_000_000_000;

fn open_empty() -> (MemoryStore, ManualClock, Deck<MemoryStore, ManualClock>) {
    let store = MemoryStore::new();
    let clock = ManualClock::at_millis(NOW);
    let deck = Deck::open_with_clock(store.clone(), DeckConfig::default(), clock.clone());
    (store, clock, deck)
}

fn fireball() -> CardDraft {
    CardDraft::new("Fireball", "8d6 fire", "A bright streak flashes...", CardColor::Red)
}

fn stored_ids(store: &MemoryStore) -> Vec<CardId> {
    let raw = store.get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    codec::decode_cards(&raw).unwrap().cards.iter().map(|c| c.id).collect()
}

fn recorder<S: KeyValueStore, C: Clock>(deck: &mut Deck<S, C>) -> Arc<Mutex<Vec<DeckEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    deck.subscribe(move |e| sink.lock().unwrap().push(e.clone()));
    events
}

#[test]
fn test_first_run_seeds_and_saves_defaults() {
    let (store, _, deck) = open_empty();
    assert!(deck.seeded_with_defaults());
    assert_eq!(deck.len(), 4);
    assert_eq!(stored_ids(&store), vec![1, 2, 3, 4]);
}

#[rstest]
#[case("[]")]
#[case("{\"broken\"")]
#[case("{\"id\": 1}")]
fn test_unusable_storage_falls_back_to_defaults(#[case] raw: &str) {
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, raw);
    let deck = Deck::open_with_clock(store.clone(), DeckConfig::default(), ManualClock::at_millis(NOW));
    assert_eq!(deck.cards().iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(stored_ids(&store), vec![1, 2, 3, 4]);
}

#[test]
fn test_stored_cards_are_kept() {
    let raw = r#"[{"id":10,"title":"a","summary":"b","description":"c","color":"gray"}]"#;
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, raw);
    let deck = Deck::open_with_clock(store, DeckConfig::default(), ManualClock::at_millis(NOW));
    assert!(!deck.seeded_with_defaults());
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.cards()[0].color, CardColor::Gray);
}

#[test]
fn test_repeated_stored_ids_keep_first() {
    let raw = r#"[{"id":10,"title":"first"},{"id":11,"title":"other"},{"id":10,"title":"second"}]"#;
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, raw);
    let deck = Deck::open_with_clock(store.clone(), DeckConfig::default(), ManualClock::at_millis(NOW));
    assert_eq!(deck.cards().iter().map(|c| c.id).collect::<Vec<_>>(), vec![10, 11]);
    assert_eq!(deck.card(10).unwrap().title, "first");
    assert_eq!(stored_ids(&store), vec![10, 11]);
}

#[test]
fn test_loosely_typed_stored_card_is_not_lost() {
    let raw = r#"[{"id":10,"title":7,"summary":"b","description":"c","createdAt":"May 1st"}]"#;
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, raw);
    let deck = Deck::open_with_clock(store.clone(), DeckConfig::default(), ManualClock::at_millis(NOW));
    assert!(!deck.seeded_with_defaults());
    assert_eq!(deck.cards()[0].title, "7");

    let stored = store.get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(stored.contains(r#""createdAt":"May 1st""#));
}

#[test]
fn test_without_defaults_starts_empty() {
    let deck = Deck::open_with_clock(
        MemoryStore::new(),
        DeckConfig::default().without_defaults(),
        ManualClock::at_millis(NOW),
    );
    assert!(deck.is_empty());
    assert!(!deck.seeded_with_defaults());
}

#[test]
fn test_fireball_scenario() {
    let (store, _, mut deck) = open_empty();
    let before: Vec<Card> = deck.cards().to_vec();

    let id = deck.create(&fireball()).unwrap();

    assert_eq!(deck.len(), 5);
    assert_eq!(deck.cards()[..4], before[..]);
    let last = &deck.cards()[4];
    assert_eq!(last.id, id);
    assert!(!before.iter().any(|c| c.id == id));
    assert_eq!(last.title, "Fireball");
    assert_eq!(last.color, CardColor::Red);
    assert_eq!(last.created_at.map(|t| t.timestamp_millis()), Some(NOW));
    assert_eq!(stored_ids(&store), vec![1, 2, 3, 4, id]);
}

#[test]
fn test_create_rejects_blank_fields() {
    let (store, _, mut deck) = open_empty();
    let before = store.get_item(DEFAULT_STORAGE_KEY).unwrap();

    let draft = CardDraft::new("Fireball", "   ", "", CardColor::Red);
    let err = deck.create(&draft).unwrap_err();

    assert_eq!(
        err,
        DomainError::Validation(MissingFields(vec![DraftField::Summary, DraftField::Description]))
    );
    assert_eq!(deck.len(), 4);
    assert_eq!(store.get_item(DEFAULT_STORAGE_KEY).unwrap(), before);
}

#[test]
fn test_ids_stay_unique_within_one_millisecond() {
    let (_, _, mut deck) = open_empty();
    let a = deck.create(&fireball()).unwrap();
    let b = deck.create(&fireball()).unwrap();
    let c = deck.create(&fireball()).unwrap();
    assert_eq!((a, b, c), (NOW, NOW + 1, NOW + 2));
}

#[test]
fn test_id_skips_imported_collision() {
    let (_, _, mut deck) = open_empty();
    deck.import(&format!(r#"[{{"id":{}}}]"#, NOW)).unwrap();
    let id = deck.create(&fireball()).unwrap();
    assert_eq!(id, NOW + 1);
}

#[test]
fn test_ids_near_the_top_of_the_range() {
    let (_, _, mut deck) = open_empty();
    deck.import(&format!(r#"[{{"id":{}}}]"#, CardId::MAX)).unwrap();
    assert_eq!(deck.add_sample_cards(), 20);

    let a = deck.create(&fireball()).unwrap();
    let b = deck.create(&fireball()).unwrap();
    assert_eq!((a, b), (CardId::MAX - 1, CardId::MAX - 2));

    let mut ids: Vec<_> = deck.cards().iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), deck.len());
}

#[test]
fn test_sample_pack_at_the_top_of_the_range() {
    let (_, clock, mut deck) = open_empty();
    clock.advance_millis(CardId::MAX - NOW - 6);
    assert_eq!(deck.add_sample_cards(), 6);
    assert!(deck.create(&fireball()).is_ok());
}

#[test]
fn test_update_preserves_identity() {
    let (_, clock, mut deck) = open_empty();
    let original = deck.cards()[1].clone();
    clock.advance_millis(60_000);

    deck.update(2, &CardDraft::new(" Flurry ", "two hits", "ki", CardColor::Indigo)).unwrap();

    let updated = &deck.cards()[1];
    assert_eq!(deck.len(), 4);
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.title, "Flurry");
    assert_eq!(updated.color, CardColor::Indigo);
}

#[test]
fn test_update_validation_and_missing() {
    let (_, _, mut deck) = open_empty();
    let before = deck.cards().to_vec();
    assert!(matches!(
        deck.update(2, &CardDraft::default()),
        Err(DomainError::Validation(_))
    ));
    assert_eq!(deck.update(77, &fireball()), Err(DomainError::NotFound(77)));
    assert_eq!(deck.cards(), &before[..]);
}

#[test]
fn test_delete_needs_two_calls() {
    let (store, _, mut deck) = open_empty();

    assert_eq!(deck.delete(3), Ok(DeleteOutcome::Pending));
    assert_eq!(deck.len(), 4);
    assert_eq!(deck.selection().pending_delete(), Some(3));

    assert_eq!(deck.delete(3), Ok(DeleteOutcome::Deleted));
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.selection().pending_delete(), None);
    assert_eq!(stored_ids(&store), vec![1, 2, 4]);
}

#[test]
fn test_delete_mark_moves_to_other_card() {
    let (_, _, mut deck) = open_empty();
    deck.delete(1).unwrap();
    assert_eq!(deck.delete(2), Ok(DeleteOutcome::Pending));
    assert_eq!(deck.delete(1), Ok(DeleteOutcome::Pending));
    assert_eq!(deck.len(), 4);
    assert_eq!(deck.delete(1), Ok(DeleteOutcome::Deleted));
    assert_eq!(deck.len(), 3);
}

#[test]
fn test_delete_unknown_card() {
    let (_, _, mut deck) = open_empty();
    assert_eq!(deck.delete(42), Err(DomainError::NotFound(42)));
    assert_eq!(deck.selection().pending_delete(), None);
}

#[test]
fn test_confirmed_delete_closes_detail_view() {
    let (_, _, mut deck) = open_empty();
    assert!(deck.view_card(2, None));
    deck.delete(2).unwrap();
    assert_eq!(deck.viewed_card().map(|c| c.id), Some(2));
    deck.delete(2).unwrap();
    assert!(deck.selection().modal().is_closed());
}

#[test]
fn test_cancel_delete() {
    let (_, _, mut deck) = open_empty();
    deck.delete(2).unwrap();
    deck.cancel_delete();
    assert_eq!(deck.delete(2), Ok(DeleteOutcome::Pending));
}

#[test]
fn test_reorder() {
    let (store, _, mut deck) = open_empty();
    assert!(!deck.reorder(2, 2));
    assert!(!deck.reorder(2, 99));
    assert!(deck.reorder(1, 3));
    assert_eq!(stored_ids(&store), vec![2, 3, 1, 4]);
}

#[test]
fn test_drop_clears_drag_state() {
    let (_, _, mut deck) = open_empty();
    deck.drag_start(4);
    deck.drag_enter(1);
    assert_eq!(deck.selection().drag().over, Some(1));
    assert!(deck.drop_on(1));
    assert_eq!(deck.cards().iter().map(|c| c.id).collect::<Vec<_>>(), vec![4, 1, 2, 3]);
    assert!(!deck.selection().drag().is_active());

    deck.drag_start(2);
    assert!(!deck.drop_on(2));
    assert_eq!(deck.selection().drag(), DragState::default());

    deck.drag_start(2);
    deck.drag_end();
    assert!(!deck.drop_on(3));
}

#[test]
fn test_export_then_import_is_idempotent() {
    let (store, _, mut deck) = open_empty();
    deck.create(&fireball()).unwrap();
    let file = deck.export().unwrap();
    let before = store.get_item(DEFAULT_STORAGE_KEY).unwrap();

    let report = deck.import(&file.contents).unwrap();

    assert_eq!(report, ImportReport { added: 0, duplicates: 5, rejected: 0 });
    assert_eq!(deck.len(), 5);
    assert_eq!(store.get_item(DEFAULT_STORAGE_KEY).unwrap(), before);
}

#[rstest]
#[case("{\"id\": 9}")]
#[case("not json at all")]
#[case("[{\"id\": 9,")]
fn test_bad_import_leaves_deck_alone(#[case] raw: &str) {
    let (_, _, mut deck) = open_empty();
    let before = deck.cards().to_vec();
    assert!(matches!(deck.import(raw), Err(DomainError::Format(_))));
    assert_eq!(deck.cards(), &before[..]);
}

#[test]
fn test_import_appends_in_order_as_given() {
    let (_, _, mut deck) = open_empty();
    let raw = r#"[
        {"id": 2, "title": "dup"},
        {"id": 500, "title": " untrimmed ", "summary": "", "description": "d", "color": "chartreuse", "source": "srd"},
        {"id": 400, "title": "b", "summary": "s", "description": "d", "color": "pink"}
    ]"#;
    let report = deck.import(raw).unwrap();
    assert_eq!(report, ImportReport { added: 2, duplicates: 1, rejected: 0 });

    let ids: Vec<_> = deck.cards().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 500, 400]);
    let imported = deck.card(500).unwrap();
    assert_eq!(imported.title, " untrimmed ");
    assert_eq!(imported.color, CardColor::Blue);
    assert_eq!(imported.extra.get("source").and_then(|v| v.as_str()), Some("srd"));
    assert_eq!(deck.card(2).unwrap().title, "Flurry of Blows");
}

#[test]
fn test_import_keeps_loosely_typed_fields() {
    let (_, _, mut deck) = open_empty();
    let raw = r#"[
        {"id": 500, "title": "a", "summary": "s", "description": "d", "createdAt": "May 1st"},
        {"id": 501, "title": 42, "summary": "s", "description": "d", "createdAt": 1714557600000}
    ]"#;
    let report = deck.import(raw).unwrap();
    assert_eq!(report, ImportReport { added: 2, duplicates: 0, rejected: 0 });
    assert_eq!(deck.len(), 6);
    assert_eq!(deck.card(501).unwrap().title, "42");

    let export = deck.export().unwrap();
    assert!(export.contents.contains(r#""createdAt": "May 1st""#));
    assert!(export.contents.contains(r#""createdAt": 1714557600000"#));
}

#[test]
fn test_add_sample_cards() {
    let (_, clock, mut deck) = open_empty();
    deck.open_about();
    assert_eq!(deck.add_sample_cards(), 20);
    assert_eq!(deck.len(), 24);
    assert!(deck.selection().modal().is_closed());
    assert_eq!(deck.add_sample_cards(), 0);

    let id = deck.create(&fireball()).unwrap();
    assert!(id > NOW + 20);

    clock.advance_millis(1_000);
    assert_eq!(deck.add_sample_cards(), 20);
}

#[test]
fn test_create_form_flow() {
    let (_, _, mut deck) = open_empty();
    deck.open_create_form();
    deck.set_draft_field(DraftField::Title, "Haste".into());
    deck.set_draft_field(DraftField::Summary, "double speed".into());

    assert!(matches!(deck.submit_form(), Err(DomainError::Validation(_))));
    assert_eq!(deck.selection().modal().draft().map(|d| d.title.as_str()), Some("Haste"));

    deck.set_draft_field(DraftField::Description, "+2 AC, extra action".into());
    deck.set_draft_color(CardColor::Yellow);
    let id = deck.submit_form().unwrap().unwrap();

    assert!(deck.selection().modal().is_closed());
    assert_eq!(deck.card(id).map(|c| c.color), Some(CardColor::Yellow));
}

#[test]
fn test_edit_form_flow() {
    let (_, _, mut deck) = open_empty();
    assert!(!deck.edit_viewed_card());

    deck.view_card(1, Some(Anchor { x: 90.0, y: 40.0 }));
    let rage_text = deck.cards()[0].description.clone();
    assert_eq!(deck.copy_text(), Some(rage_text));
    deck.delete(1).unwrap();
    assert!(deck.edit_viewed_card());
    assert_eq!(deck.selection().pending_delete(), None);

    deck.set_draft_field(DraftField::Title, "Reckless Rage".into());
    assert_eq!(deck.submit_form(), Ok(Some(1)));
    assert_eq!(deck.cards()[0].title, "Reckless Rage");
    assert!(deck.selection().modal().is_closed());
}

#[test]
fn test_backdrop_discards_draft() {
    let (_, _, mut deck) = open_empty();
    deck.open_create_form();
    deck.set_draft_field(DraftField::Title, "half typed".into());
    deck.close_modal();
    assert!(!deck.set_draft_field(DraftField::Title, "x".into()));
    assert_eq!(deck.submit_form(), Ok(None));
    deck.open_create_form();
    assert_eq!(deck.selection().modal().draft(), Some(&CardDraft::default()));
}

#[test]
fn test_write_failure_keeps_change_and_notifies() {
    let (store, _, mut deck) = open_empty();
    let events = recorder(&mut deck);
    store.set_fail_writes(true);

    let id = deck.create(&fireball()).unwrap();

    assert!(deck.card(id).is_some());
    let events = events.lock().unwrap();
    assert!(matches!(events[0], DeckEvent::PersistFailed(_)));
    assert_eq!(events[1], DeckEvent::Created(id));
    assert!(events[0].notice().is_some());
}

#[test]
fn test_subscribers_see_events() {
    let (_, _, mut deck) = open_empty();
    let events = recorder(&mut deck);
    let quiet = deck.subscribe(|_| {});

    deck.delete(1).unwrap();
    deck.delete(1).unwrap();
    deck.reorder(2, 3);

    assert!(deck.unsubscribe(quiet));
    assert!(!deck.unsubscribe(quiet));
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            DeckEvent::DeletePending(1),
            DeckEvent::Deleted(1),
            DeckEvent::Reordered { moved: 2, target: 3 },
        ]
    );
}

#[test]
fn test_detail_view_survives_delete_mark_and_drag() {
    let (_, _, mut deck) = open_empty();
    assert!(deck.view_card(1, None));

    assert_eq!(deck.delete(1), Ok(DeleteOutcome::Pending));
    assert_eq!(deck.viewed_card().map(|c| c.id), Some(1));
    deck.cancel_delete();
    assert_eq!(deck.viewed_card().map(|c| c.id), Some(1));

    deck.drag_start(2);
    deck.drag_enter(3);
    deck.drag_end();
    assert_eq!(deck.viewed_card().map(|c| c.id), Some(1));
}
