//! Moving a material entry from one deck section to another.
//!
//! SYSTEM CONTEXT
//! ==============
//! A transfer deletes the entry from the source section's stored list, then
//! navigates to the destination mapping view carrying the entry in memory.
//! The destination re-creates it only after the user places a new pin.
//!
//! TRADE-OFFS
//! ==========
//! The delete happens before the destination placement. Leaving the
//! destination (or reloading the page) before saving drops the entry; the
//! in-memory payload does not survive a reload.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

use crate::error::AppError;
use crate::state::inventory::{MaterialEntry, SectionKey, remove_entry};
use crate::state::registry::{DeckSection, Vessel};
use crate::util::query::DeckPlanParams;
use crate::util::storage::KeyValueStore;

/// Entry in flight between two sections.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferPayload {
    pub entry: MaterialEntry,
    pub vessel: String,
    pub from_section: String,
    pub to_section: String,
}

impl TransferPayload {
    /// Whether this payload is meant for the mapping view showing `key`.
    pub fn is_for(&self, key: &SectionKey) -> bool {
        self.vessel == key.vessel && self.to_section == key.section
    }

    /// Text of the arrival prompt.
    pub fn arrival_message(&self) -> String {
        format!(
            "Transferring \"{}\" from {} to {}. Click on the deck plan to place it, then save.",
            self.entry.name, self.from_section, self.to_section
        )
    }
}

/// Sections an entry in `current` may move to.
pub fn destinations<'a>(sections: &'a [DeckSection], current: &str) -> Vec<&'a DeckSection> {
    sections.iter().filter(|s| s.name != current).collect()
}

/// Remove `entry_id` from `source` and prepare navigation to `destination`.
///
/// Validation happens before anything is written; once the entry is removed
/// the caller must navigate with the returned parameters.
pub fn begin_transfer(
    store: &impl KeyValueStore,
    vessel: &Vessel,
    sections: &[DeckSection],
    source: &SectionKey,
    entry_id: &str,
    destination: Option<&str>,
) -> Result<(TransferPayload, DeckPlanParams), AppError> {
    let Some(destination) = destination.filter(|d| !d.is_empty()) else {
        return Err(AppError::NoDestination);
    };
    let Some(target) = destinations(sections, &source.section)
        .into_iter()
        .find(|s| s.name == destination)
    else {
        return Err(AppError::UnknownSection(destination.to_owned()));
    };

    let entry = remove_entry(store, source, entry_id)?;
    log::info!(
        "transfer: {} ({}) from {} to {} on {}",
        entry.name,
        entry.id,
        source.section,
        target.name,
        vessel.name
    );
    let payload = TransferPayload {
        entry,
        vessel: vessel.name.clone(),
        from_section: source.section.clone(),
        to_section: target.name.clone(),
    };
    Ok((payload, DeckPlanParams::for_section(vessel, target)))
}
