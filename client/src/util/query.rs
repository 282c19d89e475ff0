//! Route paths and query-parameter codecs for page navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The mapping view is entered from the vessel page, from the materials view
//! and from a transfer, always through `/deck-plan?plan&section&crop&vessel`
//! with optional `material` and `mode=add`. Everything a page needs to
//! restore its state lives in these parameters.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use deckplan::camera::Rect;

use crate::state::inventory::SectionKey;
use crate::state::registry::{DeckSection, Vessel};

pub const DECK_PLAN_PATH: &str = "/deck-plan";
pub const MATERIALS_PATH: &str = "/materials";
pub const VESSELS_PATH: &str = "/vessels";

/// `/vessels/<name>`
pub fn vessel_href(name: &str) -> String {
    format!("{VESSELS_PATH}/{}", urlencoding::encode(name))
}

/// `/materials`, optionally scoped to one vessel.
pub fn materials_href(vessel: Option<&str>) -> String {
    match vessel {
        Some(v) => format!("{MATERIALS_PATH}?vessel={}", urlencoding::encode(v)),
        None => MATERIALS_PATH.to_owned(),
    }
}

/// Percent-decode a path or query value, keeping it as-is if it is not valid UTF-8.
pub fn decode_param(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_owned(),
    }
}

/// Navigation parameters of the deck-plan mapping view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckPlanParams {
    /// Plan image reference.
    pub plan: String,
    pub section: String,
    /// `None` when absent or malformed.
    pub crop: Option<Rect>,
    pub vessel: String,
    /// Entry id to focus.
    pub material: Option<String>,
    /// `mode=add`: open with placement on.
    pub add_mode: bool,
}

impl DeckPlanParams {
    /// Parameters opening `section` of `vessel`.
    pub fn for_section(vessel: &Vessel, section: &DeckSection) -> Self {
        Self {
            plan: vessel.plan_image.clone(),
            section: section.name.clone(),
            crop: Some(section.crop),
            vessel: vessel.name.clone(),
            material: None,
            add_mode: false,
        }
    }

    /// Decode from a query lookup. Missing text parameters become empty.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            plan: get("plan").unwrap_or_default(),
            section: get("section").unwrap_or_default(),
            crop: get("crop").as_deref().and_then(Rect::parse),
            vessel: get("vessel").unwrap_or_default(),
            material: get("material").filter(|m| !m.is_empty()),
            add_mode: get("mode").as_deref() == Some("add"),
        }
    }

    #[must_use]
    pub fn with_material(mut self, id: impl Into<String>) -> Self {
        self.material = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_add_mode(mut self) -> Self {
        self.add_mode = true;
        self
    }

    pub fn section_key(&self) -> SectionKey {
        SectionKey::new(self.vessel.clone(), self.section.clone())
    }

    /// Crop to show: the parameter, else the named section, else the whole plan.
    pub fn resolve_crop(&self, sections: &[DeckSection], vessel: Option<&Vessel>) -> Option<Rect> {
        if let Some(crop) = self.crop {
            return Some(crop);
        }
        if let Some(section) = sections.iter().find(|s| s.name == self.section) {
            return Some(section.crop);
        }
        vessel.map(Vessel::full_plan)
    }

    /// Plan image to show: the parameter, else the vessel's.
    pub fn resolve_plan(&self, vessel: Option<&Vessel>) -> String {
        if !self.plan.is_empty() {
            return self.plan.clone();
        }
        vessel.map(|v| v.plan_image.clone()).unwrap_or_default()
    }

    pub fn href(&self) -> String {
        let mut pairs = vec![
            ("plan", self.plan.clone()),
            ("section", self.section.clone()),
        ];
        if let Some(crop) = self.crop {
            pairs.push(("crop", crop.to_param()));
        }
        pairs.push(("vessel", self.vessel.clone()));
        if let Some(material) = &self.material {
            pairs.push(("material", material.clone()));
        }
        if self.add_mode {
            pairs.push(("mode", "add".to_owned()));
        }
        let query = pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{DECK_PLAN_PATH}?{query}")
    }
}
