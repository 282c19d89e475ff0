use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// Helpers
// =============================================================

fn entry(id: &str, name: &str) -> MaterialEntry {
    MaterialEntry {
        id: id.to_owned(),
        name: name.to_owned(),
        ihm_part: IhmPart::PartI,
        hazardous_materials: vec!["Asbestos".to_owned()],
        compartment: "Engine Room".to_owned(),
        equipment: "Boiler".to_owned(),
        component: "Lagging".to_owned(),
        material: "Insulation".to_owned(),
        quantity: "12".to_owned(),
        unit: "kg".to_owned(),
        hm_status: HmStatus::Chm,
        documents: Vec::new(),
        pin: Some(Point::new(120.0, 80.0)),
    }
}

fn key(section: &str) -> SectionKey {
    SectionKey::new("MV Northern Star", section)
}

fn ok<T, E: std::fmt::Display>(r: Result<T, E>) -> T {
    r.unwrap_or_else(|e| panic!("{e}"))
}

fn seed(store: &MemoryStore, section: &str, entries: &[MaterialEntry]) {
    ok(save_json(store, &key(section).storage_key(), &entries.to_vec()));
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn entry_serializes_camel_case_with_document_labels() {
    let json = ok(serde_json::to_value(entry("1", "Pipe lagging")));
    assert_eq!(json["ihmPart"], "PART I");
    assert_eq!(json["hmStatus"], "CHM");
    assert_eq!(json["hazardousMaterials"][0], "Asbestos");
    assert_eq!(json["pin"]["x"], 120.0);
}

#[test]
fn entry_tolerates_missing_optional_fields() {
    let raw = r#"{"id":"x","name":"Paint","ihmPart":"PART III"}"#;
    let parsed: MaterialEntry = ok(serde_json::from_str(raw));
    assert!(parsed.pin.is_none());
    assert!(parsed.documents.is_empty());
    assert_eq!(parsed.hm_status, HmStatus::Chm);
}

#[test]
fn new_entry_ids_are_unique() {
    assert_ne!(new_entry_id(), new_entry_id());
}

#[test]
fn hm_status_labels_round_trip() {
    for s in HmStatus::ALL {
        assert_eq!(HmStatus::from_label(s.label()), Some(s));
    }
}

// =============================================================
// Load / save
// =============================================================

#[test]
fn load_missing_section_is_empty_and_synced() {
    let store = MemoryStore::new();
    let mut inv = SectionInventory::default();
    ok(inv.load(&store, key("Main Deck")));
    assert!(inv.entries.is_empty());
    assert!(inv.is_synced());
}

#[test]
fn load_replaces_entries_with_stored_list() {
    let store = MemoryStore::new();
    seed(&store, "Main Deck", &[entry("1", "A"), entry("2", "B")]);
    let mut inv = SectionInventory::default();
    inv.entries.push(entry("stale", "Stale"));
    ok(inv.load(&store, key("Main Deck")));
    assert_eq!(inv.entries.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), vec!["1", "2"]);
}

#[test]
fn save_writes_and_notifies_when_synced() {
    let store = MemoryStore::new();
    let mut inv = SectionInventory::default();
    ok(inv.load(&store, key("Main Deck")));
    inv.entries.push(entry("1", "A"));
    assert!(ok(inv.save(&store)));
    assert_eq!(store.notifications(), 1);
    let stored: Option<Vec<MaterialEntry>> = ok(load_json(&store, &key("Main Deck").storage_key()));
    assert_eq!(stored.map(|v| v.len()), Some(1));
}

#[test]
fn save_skips_empty_list() {
    let store = MemoryStore::new();
    let mut inv = SectionInventory::default();
    ok(inv.load(&store, key("Main Deck")));
    assert!(!ok(inv.save(&store)));
    assert!(!store.contains(&key("Main Deck").storage_key()));
    assert_eq!(store.notifications(), 0);
}

#[test]
fn save_refused_between_select_and_reload() {
    let store = MemoryStore::new();
    seed(&store, "Main Deck", &[entry("1", "A")]);
    let mut inv = SectionInventory::default();
    ok(inv.load(&store, key("Main Deck")));
    inv.select(key("Engine Room"));
    assert!(!inv.is_synced());
    assert!(!ok(inv.save(&store)));
    assert!(!store.contains(&key("Engine Room").storage_key()));
}

#[test]
fn switching_sections_and_back_keeps_inventory() {
    let store = MemoryStore::new();
    seed(&store, "Main Deck", &[entry("1", "A"), entry("2", "B")]);
    let mut inv = SectionInventory::default();
    ok(inv.load(&store, key("Main Deck")));
    let before = inv.entries.clone();

    inv.select(key("Engine Room"));
    ok(inv.save(&store));
    ok(inv.reload(&store));
    ok(inv.save(&store));
    assert!(inv.entries.is_empty());

    inv.select(key("Main Deck"));
    ok(inv.save(&store));
    ok(inv.reload(&store));
    assert_eq!(inv.entries, before);
}

#[test]
fn malformed_stored_value_is_an_error_and_blocks_saves() {
    let store = MemoryStore::new();
    ok(store.set(&key("Main Deck").storage_key(), "[{broken"));
    let mut inv = SectionInventory::default();
    let result = inv.load(&store, key("Main Deck"));
    assert!(matches!(result, Err(StorageError::Malformed { .. })));
    assert!(!inv.is_synced());
    inv.entries.push(entry("1", "A"));
    assert!(!ok(inv.save(&store)));
    assert_eq!(ok(store.get(&key("Main Deck").storage_key())).as_deref(), Some("[{broken"));
}

#[test]
fn pins_only_include_placed_entries() {
    let mut inv = SectionInventory::default();
    let mut unplaced = entry("2", "B");
    unplaced.pin = None;
    inv.entries = vec![entry("1", "A"), unplaced];
    let pins = inv.pins();
    assert_eq!(pins.len(), 1);
    assert_eq!(pins[0].id, "1");
    assert!(inv.entry("2").is_some());
    assert!(inv.entry("3").is_none());
}

// =============================================================
// Creation
// =============================================================

#[test]
fn commit_appends_one_entry_and_one_summary() {
    let store = MemoryStore::new();
    let mut inv = SectionInventory::default();
    ok(inv.load(&store, key("Main Deck")));
    ok(inv.commit_new_entry(&store, entry("1", "A")));

    assert_eq!(inv.entries.len(), 1);
    let stored: Option<Vec<MaterialEntry>> = ok(load_json(&store, &key("Main Deck").storage_key()));
    assert_eq!(stored.map(|v| v.len()), Some(1));
    let records = ok(load_vessel_records(&store, "MV Northern Star"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "1");
    assert_eq!(records[0].section, "Main Deck");
}

#[test]
fn vessel_records_are_append_only_across_sections() {
    let store = MemoryStore::new();
    let mut inv = SectionInventory::default();
    ok(inv.load(&store, key("Main Deck")));
    ok(inv.commit_new_entry(&store, entry("1", "A")));
    ok(inv.load(&store, key("Engine Room")));
    ok(inv.commit_new_entry(&store, entry("2", "B")));
    let records = ok(load_vessel_records(&store, "MV Northern Star"));
    assert_eq!(records.iter().map(|r| r.section.as_str()).collect::<Vec<_>>(), vec!["Main Deck", "Engine Room"]);
}

#[test]
fn commit_without_section_fails() {
    let store = MemoryStore::new();
    let mut inv = SectionInventory::default();
    assert!(inv.commit_new_entry(&store, entry("1", "A")).is_err());
    assert!(inv.entries.is_empty());
}

#[test]
fn commit_on_unloaded_section_changes_nothing() {
    let store = MemoryStore::new();
    let storage_key = key("Main Deck").storage_key();
    ok(store.set(&storage_key, "[{broken"));
    let mut inv = SectionInventory::default();
    assert!(inv.load(&store, key("Main Deck")).is_err());

    let result = inv.commit_new_entry(&store, entry("1", "A"));
    assert!(matches!(result, Err(AppError::SectionNotLoaded(ref s)) if s == "Main Deck"));
    assert!(inv.entries.is_empty());
    assert_eq!(ok(store.get(&storage_key)).as_deref(), Some("[{broken"));
    assert!(ok(load_vessel_records(&store, "MV Northern Star")).is_empty());
    assert_eq!(store.notifications(), 0);
}

#[test]
fn rejected_section_write_keeps_memory_unchanged() {
    let store = MemoryStore::new();
    seed(&store, "Main Deck", &[entry("1", "A")]);
    let mut inv = SectionInventory::default();
    ok(inv.load(&store, key("Main Deck")));
    store.reject_writes(key("Main Deck").storage_key());

    for _ in 0..2 {
        let result = inv.commit_new_entry(&store, entry("2", "B"));
        assert!(matches!(result, Err(AppError::Storage(StorageError::WriteRejected { .. }))));
        assert_eq!(inv.entries.len(), 1);
    }
    assert_eq!(ok(stored_entry_count(&store, &key("Main Deck"))), 1);
    assert!(ok(load_vessel_records(&store, "MV Northern Star")).is_empty());
}

// =============================================================
// Removal
// =============================================================

#[test]
fn remove_entry_writes_even_when_list_becomes_empty() {
    let store = MemoryStore::new();
    seed(&store, "Main Deck", &[entry("1", "A")]);
    let removed = ok(remove_entry(&store, &key("Main Deck"), "1"));
    assert_eq!(removed.name, "A");
    let stored: Option<Vec<MaterialEntry>> = ok(load_json(&store, &key("Main Deck").storage_key()));
    assert_eq!(stored, Some(Vec::new()));
    assert_eq!(store.notifications(), 1);
}

#[test]
fn remove_unknown_entry_is_not_found() {
    let store = MemoryStore::new();
    seed(&store, "Main Deck", &[entry("1", "A")]);
    let result = remove_entry(&store, &key("Main Deck"), "nope");
    assert!(matches!(result, Err(AppError::EntryNotFound(_))));
    assert_eq!(ok(stored_entry_count(&store, &key("Main Deck"))), 1);
}

// =============================================================
// Sections store
// =============================================================

#[test]
fn load_sections_seeds_from_registry_once() {
    let store = MemoryStore::new();
    let registry = Registry::mock();
    let first = ok(load_sections(&store, &registry, "MV Northern Star"));
    assert!(!first.is_empty());
    assert!(store.contains(&sections_key("MV Northern Star")));

    let custom = vec![DeckSection { name: "Bridge".to_owned(), crop: deckplan::camera::Rect::new(0.0, 0.0, 10.0, 10.0) }];
    ok(save_json(&store, &sections_key("MV Northern Star"), &custom));
    assert_eq!(ok(load_sections(&store, &registry, "MV Northern Star")), custom);
}

#[test]
fn load_sections_for_unknown_vessel_writes_nothing() {
    let store = MemoryStore::new();
    let sections = ok(load_sections(&store, &Registry::mock(), "Ghost Ship"));
    assert!(sections.is_empty());
    assert!(!store.contains(&sections_key("Ghost Ship")));
}
