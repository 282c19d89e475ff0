//! Deck-plan mapping view state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Ties the pure [`EngineCore`] (camera, tool, pending pin) to the active
//! section's [`SectionInventory`] and the add-material form. The page holds
//! one `RwSignal<MappingState>` and forwards browser events here; everything
//! that decides what happens to data lives in this module so it can be tested
//! without a browser.

#[cfg(test)]
#[path = "mapping_test.rs"]
mod mapping_test;

use deckplan::camera::Rect;
use deckplan::engine::{Action, EngineCore};
use deckplan::input::Tool;

use crate::error::{AppError, StorageError};
use crate::state::inventory::{MaterialEntry, SectionInventory, SectionKey};
use crate::state::material_form::MaterialForm;
use crate::state::registry::DeckSection;
use crate::state::transfer::TransferPayload;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Debug, PartialEq)]
pub struct MappingState {
    pub engine: EngineCore,
    pub inventory: SectionInventory,
    pub form: MaterialForm,
    /// Vessel sections, for the section switcher and transfer destinations.
    pub sections: Vec<DeckSection>,
    /// Entry shown in the details card.
    pub selected: Option<String>,
    /// Transfer dialog is open.
    pub transfer_open: bool,
    pub transfer_destination: Option<String>,
    pub cursor: &'static str,
}

impl Default for MappingState {
    fn default() -> Self {
        Self {
            engine: EngineCore::new(Rect::new(0.0, 0.0, 1.0, 1.0)),
            inventory: SectionInventory::default(),
            form: MaterialForm::new(),
            sections: Vec::new(),
            selected: None,
            transfer_open: false,
            transfer_destination: None,
            cursor: "grab",
        }
    }
}

impl MappingState {
    /// Show `key` cropped to `crop`, replacing the in-memory entries with the
    /// stored ones. Leaves add mode.
    ///
    /// On a storage error the view still switches; the list stays empty and
    /// unsynced.
    pub fn open_section(&mut self, store: &impl KeyValueStore, key: SectionKey, crop: Rect) -> Result<(), StorageError> {
        self.exit_add_mode();
        self.selected = None;
        self.close_transfer();
        self.engine.set_crop(crop);
        self.inventory.select(key);
        let loaded = self.inventory.reload(store);
        self.sync_pins();
        loaded
    }

    /// Re-read the current section, e.g. after another view wrote to storage.
    pub fn reload(&mut self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        let loaded = self.inventory.reload(store);
        if self.selected.as_deref().is_some_and(|id| self.inventory.entry(id).is_none()) {
            self.selected = None;
        }
        self.sync_pins();
        loaded
    }

    pub fn is_adding(&self) -> bool {
        self.engine.tool == Tool::PlacePin
    }

    /// Placement tool on. The form keeps whatever it holds.
    pub fn enter_add_mode(&mut self) {
        self.selected = None;
        let action = self.engine.set_tool(Tool::PlacePin);
        self.apply(vec![action]);
    }

    /// Placement tool off and pending pin cleared.
    pub fn exit_add_mode(&mut self) {
        self.engine.clear_pending_pin();
        let action = self.engine.set_tool(Tool::Pan);
        self.apply(vec![action]);
    }

    /// Close the form, discarding its input.
    pub fn cancel_add(&mut self) {
        self.form.reset();
        self.exit_add_mode();
    }

    /// Validate the form against the pending pin and persist a new entry.
    ///
    /// On a validation error nothing is mutated and add mode stays on.
    pub fn submit(&mut self, store: &impl KeyValueStore) -> Result<String, AppError> {
        let entry = self.form.build_entry(self.engine.pending_pin)?;
        let id = entry.id.clone();
        self.inventory.commit_new_entry(store, entry)?;
        self.form.reset();
        self.exit_add_mode();
        self.sync_pins();
        Ok(id)
    }

    /// Apply engine actions to view state.
    pub fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::PinSelected(id) => self.selected = Some(id),
                Action::SelectionCleared => self.selected = None,
                Action::SetCursor(cursor) => self.cursor = cursor,
                Action::ViewChanged | Action::PinPlaced(_) => {}
            }
        }
    }

    pub fn selected_entry(&self) -> Option<&MaterialEntry> {
        self.selected.as_deref().and_then(|id| self.inventory.entry(id))
    }

    /// Select `id` and centre the view on its pin. False if it is not here.
    pub fn focus_material(&mut self, id: &str) -> bool {
        let Some(pin) = self.inventory.entry(id).map(|e| e.pin) else {
            return false;
        };
        self.selected = Some(id.to_owned());
        if let Some(pin) = pin {
            self.engine.focus(pin);
        }
        true
    }

    /// Start placing a transferred entry: prefill the form and turn placement on.
    pub fn receive_transfer(&mut self, payload: &TransferPayload) {
        self.form = MaterialForm::prefilled(&payload.entry);
        self.enter_add_mode();
    }

    pub fn open_transfer(&mut self) {
        if self.selected.is_some() {
            self.transfer_open = true;
            self.transfer_destination = None;
        }
    }

    pub fn close_transfer(&mut self) {
        self.transfer_open = false;
        self.transfer_destination = None;
    }

    fn sync_pins(&mut self) {
        self.engine.set_pins(self.inventory.pins());
    }
}
