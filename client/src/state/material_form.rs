//! Add-material form model for the deck-plan mapping view.
//!
//! DESIGN
//! ======
//! The form holds raw user input only. [`MaterialForm::build_entry`] is the
//! single validation gate: it either yields a complete [`MaterialEntry`] with a
//! fresh id and the pending pin, or an [`AppError`] naming the first missing
//! piece, leaving everything else untouched.

#[cfg(test)]
#[path = "material_form_test.rs"]
mod material_form_test;

use deckplan::camera::Point;

use crate::error::AppError;
use crate::state::inventory::{DocumentRef, HmStatus, MaterialEntry, new_entry_id};
use crate::state::registry::IhmPart;

/// Raw add-material form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialForm {
    pub name: String,
    pub ihm_part: Option<IhmPart>,
    pub hazardous_materials: Vec<String>,
    pub compartment: String,
    pub equipment: String,
    pub component: String,
    pub material: String,
    pub quantity: String,
    pub unit: String,
    pub hm_status: HmStatus,
    pub documents: Vec<DocumentRef>,
}

impl MaterialForm {
    /// A fresh form with the IHM part preselected.
    pub fn new() -> Self {
        Self { ihm_part: Some(IhmPart::PartI), ..Self::default() }
    }

    /// Form prefilled from an entry carried over by a transfer. The pin is
    /// not copied: the destination needs a new click.
    pub fn prefilled(entry: &MaterialEntry) -> Self {
        Self {
            name: entry.name.clone(),
            ihm_part: Some(entry.ihm_part),
            hazardous_materials: entry.hazardous_materials.clone(),
            compartment: entry.compartment.clone(),
            equipment: entry.equipment.clone(),
            component: entry.component.clone(),
            material: entry.material.clone(),
            quantity: entry.quantity.clone(),
            unit: entry.unit.clone(),
            hm_status: entry.hm_status,
            documents: entry.documents.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Add or remove one hazardous-material tag.
    pub fn toggle_hazard(&mut self, tag: &str) {
        if let Some(index) = self.hazardous_materials.iter().position(|t| t == tag) {
            self.hazardous_materials.remove(index);
        } else {
            self.hazardous_materials.push(tag.to_owned());
        }
    }

    pub fn has_hazard(&self, tag: &str) -> bool {
        self.hazardous_materials.iter().any(|t| t == tag)
    }

    /// Attach a document by name. Blank names are ignored.
    pub fn add_document(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.documents.push(DocumentRef { name: name.to_owned(), url: None });
    }

    pub fn remove_document(&mut self, index: usize) {
        if index < self.documents.len() {
            self.documents.remove(index);
        }
    }

    /// Validate and turn the form into a new entry placed at `pending_pin`.
    ///
    /// Checks run in order: pin, name, IHM part, hazardous-material tags.
    pub fn build_entry(&self, pending_pin: Option<Point>) -> Result<MaterialEntry, AppError> {
        let Some(pin) = pending_pin else {
            return Err(AppError::MissingPin);
        };
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::MissingField("Material Name"));
        }
        let Some(ihm_part) = self.ihm_part else {
            return Err(AppError::MissingField("IHM Part"));
        };
        if self.hazardous_materials.is_empty() {
            return Err(AppError::NoHazardTags);
        }
        Ok(MaterialEntry {
            id: new_entry_id(),
            name: name.to_owned(),
            ihm_part,
            hazardous_materials: self.hazardous_materials.clone(),
            compartment: self.compartment.trim().to_owned(),
            equipment: self.equipment.trim().to_owned(),
            component: self.component.trim().to_owned(),
            material: self.material.trim().to_owned(),
            quantity: self.quantity.trim().to_owned(),
            unit: self.unit.trim().to_owned(),
            hm_status: self.hm_status,
            documents: self.documents.clone(),
            pin: Some(pin),
        })
    }
}
