//! Material record filtering.
//!
//! Every criterion is optional and they all AND together. An empty filter
//! matches every material. Nothing here is persisted; the materials view
//! recomputes the visible rows on each state change.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use crate::state::registry::{ComplianceStatus, IhmPart, Material, RiskCategory};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialFilter {
    /// Case-insensitive substring of name or id.
    pub search: String,
    pub vessel: Option<String>,
    pub tag: Option<String>,
    pub risk: Option<RiskCategory>,
    pub compliance: Option<ComplianceStatus>,
    /// Inclusive bounds on the threshold value.
    pub threshold_min: Option<f64>,
    pub threshold_max: Option<f64>,
    /// Empty means any part.
    pub ihm_parts: Vec<IhmPart>,
    /// Empty means any zone.
    pub zones: Vec<String>,
}

impl MaterialFilter {
    pub fn matches(&self, material: &Material) -> bool {
        self.matches_search(material)
            && self.vessel.as_ref().is_none_or(|v| material.vessel == *v)
            && self.tag.as_ref().is_none_or(|t| material.tags.iter().any(|mt| mt == t))
            && self.risk.is_none_or(|r| material.risk == r)
            && self.compliance.is_none_or(|c| material.compliance == c)
            && self.threshold_min.is_none_or(|min| material.threshold_value >= min)
            && self.threshold_max.is_none_or(|max| material.threshold_value <= max)
            && (self.ihm_parts.is_empty() || self.ihm_parts.contains(&material.ihm_part))
            && (self.zones.is_empty()
                || material.zone.as_ref().is_some_and(|z| self.zones.contains(z)))
    }

    fn matches_search(&self, material: &Material) -> bool {
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || material.name.to_lowercase().contains(&needle)
            || material.id.to_lowercase().contains(&needle)
    }

    /// Materials passing the filter, in input order.
    pub fn apply<'a>(&self, materials: impl IntoIterator<Item = &'a Material>) -> Vec<&'a Material> {
        materials.into_iter().filter(|m| self.matches(m)).collect()
    }

    pub fn toggle_part(&mut self, part: IhmPart) {
        toggle(&mut self.ihm_parts, part);
    }

    pub fn toggle_zone(&mut self, zone: &str) {
        toggle(&mut self.zones, zone.to_owned());
    }

    /// Number of criteria in effect, search excluded. Drives the filter badge.
    pub fn active_count(&self) -> usize {
        [
            self.tag.is_some(),
            self.risk.is_some(),
            self.compliance.is_some(),
            self.threshold_min.is_some() || self.threshold_max.is_some(),
            !self.ihm_parts.is_empty(),
            !self.zones.is_empty(),
        ]
        .into_iter()
        .filter(|on| *on)
        .count()
    }

    /// Drop every criterion except search and vessel scope.
    pub fn clear(&mut self) {
        *self = Self { search: std::mem::take(&mut self.search), vessel: self.vessel.take(), ..Self::default() };
    }
}

/// Parse a threshold bound typed by the user. Blank or non-numeric is no bound.
pub fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(index) = items.iter().position(|i| *i == item) {
        items.remove(index);
    } else {
        items.push(item);
    }
}
