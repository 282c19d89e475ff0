//! Materials record view state: row selection and the in-memory edit flow.
//!
//! DESIGN
//! ======
//! Edits go through a draft copy. Saving validates the draft and replaces the
//! record in this list only; the registry itself and storage are never touched,
//! so a reload restores the mock data.

#[cfg(test)]
#[path = "materials_test.rs"]
mod materials_test;

use crate::error::AppError;
use crate::state::registry::{Material, Registry};

/// Editable copy of a material. Completion stays raw text until save.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDraft {
    pub material: Material,
    pub completion: String,
}

impl MaterialDraft {
    fn from_material(material: &Material) -> Self {
        Self { material: material.clone(), completion: material.completion.to_string() }
    }

    fn validate(&self) -> Result<Material, AppError> {
        if self.material.name.trim().is_empty() {
            return Err(AppError::MissingField("Name"));
        }
        let Ok(completion) = self.completion.trim().parse::<i64>() else {
            return Err(AppError::MissingField("Completion"));
        };
        let Ok(completion) = u8::try_from(completion) else {
            return Err(AppError::CompletionOutOfRange(completion));
        };
        if completion > 100 {
            return Err(AppError::CompletionOutOfRange(i64::from(completion)));
        }
        let mut material = self.material.clone();
        material.name = material.name.trim().to_owned();
        material.completion = completion;
        Ok(material)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialsState {
    pub materials: Vec<Material>,
    pub selected: Option<String>,
    pub draft: Option<MaterialDraft>,
}

impl MaterialsState {
    pub fn from_registry(registry: &Registry) -> Self {
        Self { materials: registry.materials.clone(), selected: None, draft: None }
    }

    pub fn selected_material(&self) -> Option<&Material> {
        let id = self.selected.as_deref()?;
        self.materials.iter().find(|m| m.id == id)
    }

    /// Open the detail panel for `id`. Any unsaved draft is discarded.
    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_owned());
        self.draft = None;
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.draft = None;
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Copy the selected record into a draft.
    pub fn begin_edit(&mut self) {
        self.draft = self.selected_material().map(MaterialDraft::from_material);
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Validate the draft and replace the record. On error the draft is kept.
    pub fn save_edit(&mut self) -> Result<(), AppError> {
        let Some(draft) = &self.draft else {
            return Ok(());
        };
        let updated = draft.validate()?;
        let Some(slot) = self.materials.iter_mut().find(|m| m.id == updated.id) else {
            return Err(AppError::EntryNotFound(updated.id));
        };
        log::info!("materials: updated {} ({})", updated.name, updated.id);
        *slot = updated;
        self.draft = None;
        Ok(())
    }
}
