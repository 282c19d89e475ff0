use super::*;
use crate::util::storage::MemoryStore;

#[cfg(not(feature = "csr"))]
#[test]
fn read_preference_defaults_to_light_without_browser() {
    assert!(!read_preference(&MemoryStore::new()));
}

#[test]
fn stored_preference_wins() {
    let store = MemoryStore::new();
    store.set(STORAGE_KEY, "true").unwrap_or_else(|e| panic!("{e}"));
    assert!(read_preference(&store));
    store.set(STORAGE_KEY, "false").unwrap_or_else(|e| panic!("{e}"));
    assert!(!read_preference(&store));
}

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStore::new();
    assert!(toggle(&store, false));
    assert_eq!(store.get(STORAGE_KEY).unwrap_or_else(|e| panic!("{e}")).as_deref(), Some("true"));
    assert!(!toggle(&store, true));
    assert!(!read_preference(&store));
}

#[test]
fn apply_is_callable() {
    apply(false);
    apply(true);
}
