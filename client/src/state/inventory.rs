//! Per-deck-section material inventory and its persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `(vessel, deck section)` pair owns a JSON list of [`MaterialEntry`]
//! under `inventory_<vessel>_<section>`. Newly created entries are also
//! mirrored as [`VesselInventoryRecord`]s into `vessel_inventory_<vessel>`,
//! a flat append-only projection read by the materials view.
//!
//! DESIGN
//! ======
//! [`SectionInventory`] remembers which key it last loaded. Saves are skipped
//! unless that key matches the current section and the list is non-empty, so
//! a section switch can never write one section's entries (or an empty list)
//! over another's.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use deckplan::camera::Point;
use deckplan::hit::PlacedPin;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, StorageError};
use crate::state::registry::{DeckSection, IhmPart, Registry};
use crate::util::storage::{
    KeyValueStore, inventory_key, load_json, save_json, sections_key, vessel_inventory_key,
};

/// Confirmed vs potential hazardous material.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HmStatus {
    #[default]
    #[serde(rename = "CHM")]
    Chm,
    #[serde(rename = "PCHM")]
    Pchm,
}

impl HmStatus {
    pub const ALL: [HmStatus; 2] = [HmStatus::Chm, HmStatus::Pchm];

    pub fn label(self) -> &'static str {
        match self {
            Self::Chm => "CHM",
            Self::Pchm => "PCHM",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Attached document (lab report, certificate, photo).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A material located on a deck plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialEntry {
    pub id: String,
    pub name: String,
    pub ihm_part: IhmPart,
    #[serde(default)]
    pub hazardous_materials: Vec<String>,
    #[serde(default)]
    pub compartment: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub hm_status: HmStatus,
    #[serde(default)]
    pub documents: Vec<DocumentRef>,
    /// Absolute plan pixels; `None` until placed.
    #[serde(default)]
    pub pin: Option<Point>,
}

/// Identity for a new entry. UUIDv7 embeds the creation timestamp.
pub fn new_entry_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Summary row appended to the vessel-wide list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselInventoryRecord {
    pub id: String,
    pub name: String,
    pub ihm_part: IhmPart,
    pub hm_status: HmStatus,
    pub hazardous_materials: Vec<String>,
    pub quantity: String,
    pub unit: String,
    pub section: String,
    pub pin: Option<Point>,
}

impl VesselInventoryRecord {
    pub fn from_entry(entry: &MaterialEntry, section: &str) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            ihm_part: entry.ihm_part,
            hm_status: entry.hm_status,
            hazardous_materials: entry.hazardous_materials.clone(),
            quantity: entry.quantity.clone(),
            unit: entry.unit.clone(),
            section: section.to_owned(),
            pin: entry.pin,
        }
    }
}

/// `(vessel, section)` pair owning one persisted entry list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionKey {
    pub vessel: String,
    pub section: String,
}

impl SectionKey {
    pub fn new(vessel: impl Into<String>, section: impl Into<String>) -> Self {
        Self { vessel: vessel.into(), section: section.into() }
    }

    pub fn storage_key(&self) -> String {
        inventory_key(&self.vessel, &self.section)
    }
}

/// In-memory entries of the active section plus the key they were loaded from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionInventory {
    current: Option<SectionKey>,
    loaded_key: Option<String>,
    pub entries: Vec<MaterialEntry>,
}

impl SectionInventory {
    /// Load `key` from `store`, replacing the in-memory list.
    pub fn load(&mut self, store: &impl KeyValueStore, key: SectionKey) -> Result<(), StorageError> {
        self.select(key);
        self.reload(store)
    }

    /// Make `key` current without touching the entries. Until the next
    /// [`SectionInventory::reload`] the entries still belong to the old
    /// section, and saves are refused.
    pub fn select(&mut self, key: SectionKey) {
        self.current = Some(key);
    }

    /// Replace the entries with whatever is stored for the current key.
    ///
    /// On a malformed value the list is cleared and the key stays unloaded,
    /// so nothing is written back over the bad data.
    pub fn reload(&mut self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        self.loaded_key = None;
        self.entries.clear();
        let Some(current) = &self.current else {
            return Ok(());
        };
        let key = current.storage_key();
        let stored: Option<Vec<MaterialEntry>> = load_json(store, &key)?;
        self.entries = stored.unwrap_or_default();
        log::info!("inventory: loaded {} entries from {key}", self.entries.len());
        self.loaded_key = Some(key);
        Ok(())
    }

    pub fn current(&self) -> Option<&SectionKey> {
        self.current.as_ref()
    }

    /// Whether the entries were loaded for the current key.
    pub fn is_synced(&self) -> bool {
        match (&self.current, &self.loaded_key) {
            (Some(current), Some(loaded)) => current.storage_key() == *loaded,
            _ => false,
        }
    }

    /// Overwrite the stored list when synced and non-empty. Returns whether a write happened.
    pub fn save(&self, store: &impl KeyValueStore) -> Result<bool, StorageError> {
        if !self.is_synced() || self.entries.is_empty() {
            return Ok(false);
        }
        let Some(key) = self.loaded_key.as_deref() else {
            return Ok(false);
        };
        save_json(store, key, &self.entries)?;
        store.notify_changed();
        Ok(true)
    }

    pub fn entry(&self, id: &str) -> Option<&MaterialEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Placed entries as hit-test pins.
    pub fn pins(&self) -> Vec<PlacedPin> {
        self.entries
            .iter()
            .filter_map(|e| e.pin.map(|at| PlacedPin { id: e.id.clone(), at }))
            .collect()
    }

    /// Append a new entry, persist the section, and mirror a summary into the
    /// vessel-wide list.
    ///
    /// The in-memory list only grows once the section write has succeeded, so
    /// a refused or unsynced commit leaves both memory and storage unchanged.
    pub fn commit_new_entry(&mut self, store: &impl KeyValueStore, entry: MaterialEntry) -> Result<(), AppError> {
        let Some(current) = self.current.clone() else {
            return Err(AppError::UnknownSection(String::new()));
        };
        let key = match self.loaded_key.as_deref() {
            Some(loaded) if self.is_synced() => loaded.to_owned(),
            _ => return Err(AppError::SectionNotLoaded(current.section)),
        };
        let record = VesselInventoryRecord::from_entry(&entry, &current.section);
        log::info!("inventory: adding {} ({}) to {key}", entry.name, entry.id);

        let mut next = self.entries.clone();
        next.push(entry);
        save_json(store, &key, &next)?;
        store.notify_changed();
        self.entries = next;

        append_vessel_record(store, &current.vessel, record)?;
        Ok(())
    }
}

/// Remove `id` from the stored list under `key`, writing the result even if
/// it is now empty. Returns the removed entry.
pub fn remove_entry(store: &impl KeyValueStore, key: &SectionKey, id: &str) -> Result<MaterialEntry, AppError> {
    let storage_key = key.storage_key();
    let mut entries: Vec<MaterialEntry> = load_json(store, &storage_key)?.unwrap_or_default();
    let Some(index) = entries.iter().position(|e| e.id == id) else {
        return Err(AppError::EntryNotFound(id.to_owned()));
    };
    let removed = entries.remove(index);
    save_json(store, &storage_key, &entries)?;
    store.notify_changed();
    log::info!("inventory: removed {} from {storage_key}", removed.id);
    Ok(removed)
}

/// Number of entries stored for `key`, without loading them into a view.
pub fn stored_entry_count(store: &impl KeyValueStore, key: &SectionKey) -> Result<usize, StorageError> {
    let entries: Option<Vec<MaterialEntry>> = load_json(store, &key.storage_key())?;
    Ok(entries.map_or(0, |e| e.len()))
}

/// The vessel-wide summary list.
pub fn load_vessel_records(store: &impl KeyValueStore, vessel: &str) -> Result<Vec<VesselInventoryRecord>, StorageError> {
    Ok(load_json(store, &vessel_inventory_key(vessel))?.unwrap_or_default())
}

fn append_vessel_record(
    store: &impl KeyValueStore,
    vessel: &str,
    record: VesselInventoryRecord,
) -> Result<(), StorageError> {
    let key = vessel_inventory_key(vessel);
    let mut records = load_vessel_records(store, vessel)?;
    records.push(record);
    save_json(store, &key, &records)?;
    store.notify_changed();
    Ok(())
}

/// A vessel's deck sections, seeding the store from the registry on first read.
pub fn load_sections(
    store: &impl KeyValueStore,
    registry: &Registry,
    vessel: &str,
) -> Result<Vec<DeckSection>, StorageError> {
    let key = sections_key(vessel);
    if let Some(sections) = load_json::<Vec<DeckSection>>(store, &key)? {
        return Ok(sections);
    }
    let defaults = registry.default_sections(vessel);
    if !defaults.is_empty() {
        save_json(store, &key, &defaults)?;
        log::info!("inventory: seeded {} sections for {vessel}", defaults.len());
    }
    Ok(defaults)
}
