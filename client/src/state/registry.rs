//! Static vessel/material registry backing every dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend: vessels, registry materials, purchase orders and the
//! default deck sections are fixed mock records loaded once at start. Only
//! the materials list is mutated, through the in-memory edit flow in
//! `state::materials`.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use deckplan::camera::Rect;
use serde::{Deserialize, Serialize};

/// Hazardous-material vocabulary offered by the add-material form.
pub const HAZARDOUS_MATERIALS: &[&str] = &[
    "Asbestos",
    "PCBs",
    "Ozone-depleting substances",
    "Anti-fouling (TBT)",
    "PFOS",
    "Cadmium",
    "Hexavalent chromium",
    "Lead",
    "Mercury",
    "PBBs",
    "PBDEs",
    "Radioactive substances",
];

/// SOC compliance status of a vessel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VesselStatus {
    Compliant,
    Warning,
    Expired,
}

impl VesselStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::Warning => "Warning",
            Self::Expired => "Expired",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    pub name: String,
    pub imo: String,
    pub vessel_type: String,
    pub gross_tonnage: u32,
    pub flag: String,
    pub class_society: String,
    pub soc_reference: String,
    /// ISO date (`YYYY-MM-DD`).
    pub soc_expiry: String,
    pub status: VesselStatus,
    /// General-arrangement plan image URL.
    pub plan_image: String,
    pub plan_width: f64,
    pub plan_height: f64,
}

impl Vessel {
    /// The whole plan image as a crop rectangle.
    pub fn full_plan(&self) -> Rect {
        Rect::new(0.0, 0.0, self.plan_width, self.plan_height)
    }
}

/// IHM document part a material belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IhmPart {
    #[default]
    #[serde(rename = "PART I")]
    PartI,
    #[serde(rename = "PART II")]
    PartII,
    #[serde(rename = "PART III")]
    PartIII,
}

impl IhmPart {
    pub const ALL: [IhmPart; 3] = [IhmPart::PartI, IhmPart::PartII, IhmPart::PartIII];

    pub fn label(self) -> &'static str {
        match self {
            Self::PartI => "PART I",
            Self::PartII => "PART II",
            Self::PartIII => "PART III",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Hazard,
    Warning,
    Safe,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] = [RiskCategory::Hazard, RiskCategory::Warning, RiskCategory::Safe];

    pub fn label(self) -> &'static str {
        match self {
            Self::Hazard => "Hazard",
            Self::Warning => "Warning",
            Self::Safe => "Safe",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    Pending,
    NonCompliant,
}

impl ComplianceStatus {
    pub const ALL: [ComplianceStatus; 3] =
        [ComplianceStatus::Compliant, ComplianceStatus::Pending, ComplianceStatus::NonCompliant];

    pub fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::Pending => "Pending",
            Self::NonCompliant => "Non-compliant",
        }
    }
}

/// Registry material record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub vessel: String,
    pub ihm_part: IhmPart,
    pub risk: RiskCategory,
    pub compliance: ComplianceStatus,
    /// 0..=100
    pub completion: u8,
    pub threshold_value: f64,
    pub threshold_message: String,
    pub tags: Vec<String>,
    pub zone: Option<String>,
    pub po_id: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoStatus {
    Open,
    Delivered,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub vessel: String,
    pub supplier: String,
    pub description: String,
    pub order_date: String,
    pub status: PoStatus,
}

/// Named crop of a vessel's plan used as a mapping surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckSection {
    pub name: String,
    pub crop: Rect,
}

/// Headline numbers for the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_vessels: usize,
    pub compliant_vessels: usize,
    pub warning_vessels: usize,
    pub expired_vessels: usize,
    pub total_materials: usize,
    pub hazard_materials: usize,
    pub pending_materials: usize,
    pub average_completion: f64,
}

/// All static dashboard data.
#[derive(Clone, Debug, PartialEq)]
pub struct Registry {
    pub vessels: Vec<Vessel>,
    pub materials: Vec<Material>,
    pub purchase_orders: Vec<PurchaseOrder>,
    sections: Vec<(String, Vec<DeckSection>)>,
}

impl Registry {
    pub fn vessel(&self, name: &str) -> Option<&Vessel> {
        self.vessels.iter().find(|v| v.name == name)
    }

    pub fn materials_for<'a>(&'a self, vessel: &'a str) -> impl Iterator<Item = &'a Material> + 'a {
        self.materials.iter().filter(move |m| m.vessel == vessel)
    }

    pub fn purchase_order(&self, id: &str) -> Option<&PurchaseOrder> {
        self.purchase_orders.iter().find(|po| po.id == id)
    }

    /// Sections shipped with the registry, used to seed the sections store.
    pub fn default_sections(&self, vessel: &str) -> Vec<DeckSection> {
        self.sections
            .iter()
            .find(|(name, _)| name == vessel)
            .map(|(_, sections)| sections.clone())
            .unwrap_or_default()
    }

    /// Sorted, de-duplicated tags across all materials.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags = self.materials.iter().flat_map(|m| m.tags.iter().cloned()).collect::<Vec<_>>();
        tags.sort();
        tags.dedup();
        tags
    }

    /// Sorted, de-duplicated zones across all materials.
    pub fn all_zones(&self) -> Vec<String> {
        let mut zones = self.materials.iter().filter_map(|m| m.zone.clone()).collect::<Vec<_>>();
        zones.sort();
        zones.dedup();
        zones
    }

    pub fn stats(&self) -> DashboardStats {
        let count_status = |status| self.vessels.iter().filter(|v| v.status == status).count();
        let total_materials = self.materials.len();
        let completion_sum: f64 = self.materials.iter().map(|m| f64::from(m.completion)).sum();
        let average_completion = if total_materials == 0 {
            0.0
        } else {
            completion_sum / f64::from(u32::try_from(total_materials).unwrap_or(u32::MAX))
        };
        DashboardStats {
            total_vessels: self.vessels.len(),
            compliant_vessels: count_status(VesselStatus::Compliant),
            warning_vessels: count_status(VesselStatus::Warning),
            expired_vessels: count_status(VesselStatus::Expired),
            total_materials,
            hazard_materials: self.materials.iter().filter(|m| m.risk == RiskCategory::Hazard).count(),
            pending_materials: self
                .materials
                .iter()
                .filter(|m| m.compliance != ComplianceStatus::Compliant)
                .count(),
            average_completion,
        }
    }

    /// The fixed mock dataset.
    #[allow(clippy::too_many_lines)]
    pub fn mock() -> Self {
        let vessels = vec![
            vessel(
                "MV Northern Star",
                "9234567",
                "Bulk Carrier",
                43_500,
                "Panama",
                "DNV",
                "SOC-2023-0412",
                "2027-04-12",
                VesselStatus::Compliant,
                "/assets/plans/northern-star.png",
                (3200.0, 900.0),
            ),
            vessel(
                "MT Ocean Pearl",
                "9345678",
                "Oil Tanker",
                61_200,
                "Liberia",
                "Lloyd's Register",
                "SOC-2022-1187",
                "2026-11-30",
                VesselStatus::Warning,
                "/assets/plans/ocean-pearl.png",
                (3600.0, 1000.0),
            ),
            vessel(
                "MV Baltic Trader",
                "9456789",
                "Container Ship",
                28_900,
                "Malta",
                "Bureau Veritas",
                "SOC-2020-0098",
                "2025-08-01",
                VesselStatus::Expired,
                "/assets/plans/baltic-trader.png",
                (2800.0, 800.0),
            ),
            vessel(
                "MV Coral Bay",
                "9567890",
                "General Cargo",
                12_400,
                "Marshall Islands",
                "ABS",
                "SOC-2024-0233",
                "2028-02-15",
                VesselStatus::Compliant,
                "/assets/plans/coral-bay.png",
                (2400.0, 700.0),
            ),
        ];

        let sections = vessels
            .iter()
            .map(|v| {
                let (w, h) = (v.plan_width, v.plan_height);
                let third = (w / 3.0).floor();
                (
                    v.name.clone(),
                    vec![
                        section("Main Deck", 0.0, 0.0, w, h * 0.5),
                        section("Engine Room", 0.0, h * 0.5, third, h * 0.5),
                        section("Cargo Holds", third, h * 0.5, third, h * 0.5),
                        section("Accommodation", third * 2.0, h * 0.5, w - third * 2.0, h * 0.5),
                    ],
                )
            })
            .collect();

        let materials = vec![
            material("MAT-001", "Pipe insulation", "MV Northern Star", IhmPart::PartI, RiskCategory::Hazard, ComplianceStatus::NonCompliant, 40, 0.1, "Asbestos above 0.1% by weight", &["Asbestos", "Insulation"], Some("Engine Room"), Some("PO-1001")),
            material("MAT-002", "Transformer oil", "MV Northern Star", IhmPart::PartI, RiskCategory::Hazard, ComplianceStatus::Pending, 65, 50.0, "PCBs above 50 mg/kg", &["PCBs", "Electrical"], Some("Engine Room"), None),
            material("MAT-003", "Hull coating", "MV Northern Star", IhmPart::PartI, RiskCategory::Warning, ComplianceStatus::Compliant, 100, 2500.0, "TBT above 2500 mg/kg", &["Anti-fouling", "Coating"], Some("Hull"), Some("PO-1002")),
            material("MAT-004", "Refrigerant R-22", "MT Ocean Pearl", IhmPart::PartI, RiskCategory::Hazard, ComplianceStatus::Pending, 55, 0.0, "Any ozone-depleting substance", &["ODS", "HVAC"], Some("Accommodation"), Some("PO-2001")),
            material("MAT-005", "Lead-acid batteries", "MT Ocean Pearl", IhmPart::PartII, RiskCategory::Warning, ComplianceStatus::Compliant, 90, 1000.0, "Lead above 0.1%", &["Lead", "Electrical"], Some("Engine Room"), None),
            material("MAT-006", "Sludge residue", "MT Ocean Pearl", IhmPart::PartII, RiskCategory::Warning, ComplianceStatus::Pending, 30, 5.0, "Operational waste in m3", &["Waste", "Oil"], Some("Cargo Holds"), None),
            material("MAT-007", "Fire extinguisher foam", "MV Baltic Trader", IhmPart::PartI, RiskCategory::Hazard, ComplianceStatus::NonCompliant, 20, 10.0, "PFOS above 10 mg/kg", &["PFOS", "Fire Safety"], Some("Accommodation"), Some("PO-3001")),
            material("MAT-008", "Mercury thermometers", "MV Baltic Trader", IhmPart::PartI, RiskCategory::Hazard, ComplianceStatus::Pending, 45, 0.1, "Mercury above 0.1%", &["Mercury", "Instruments"], Some("Engine Room"), None),
            material("MAT-009", "Galley provisions", "MV Baltic Trader", IhmPart::PartIII, RiskCategory::Safe, ComplianceStatus::Compliant, 100, 0.0, "Stores, no threshold", &["Stores"], Some("Accommodation"), None),
            material("MAT-010", "Gasket material", "MV Coral Bay", IhmPart::PartI, RiskCategory::Warning, ComplianceStatus::Compliant, 85, 0.1, "Asbestos above 0.1% by weight", &["Asbestos", "Sealing"], Some("Main Deck"), Some("PO-4001")),
            material("MAT-011", "Paint stores", "MV Coral Bay", IhmPart::PartIII, RiskCategory::Safe, ComplianceStatus::Compliant, 100, 0.0, "Stores, no threshold", &["Stores", "Coating"], Some("Main Deck"), None),
            material("MAT-012", "Cable sheathing", "MV Coral Bay", IhmPart::PartI, RiskCategory::Warning, ComplianceStatus::Pending, 60, 50.0, "PCNs above 50 mg/kg", &["PCNs", "Electrical"], Some("Cargo Holds"), None),
        ];

        let purchase_orders = vec![
            purchase_order("PO-1001", "MV Northern Star", "Marine Insulation Ltd", "Replacement lagging, 40 m", "2025-01-14", PoStatus::Delivered),
            purchase_order("PO-1002", "MV Northern Star", "Hempel", "Silyl acrylate antifouling, 800 L", "2025-03-02", PoStatus::Open),
            purchase_order("PO-2001", "MT Ocean Pearl", "Daikin Marine", "R-407C conversion kit", "2025-02-20", PoStatus::Open),
            purchase_order("PO-3001", "MV Baltic Trader", "Survitec", "Fluorine-free foam concentrate", "2024-11-05", PoStatus::Cancelled),
            purchase_order("PO-4001", "MV Coral Bay", "Klinger", "Non-asbestos gasket sheets", "2025-04-18", PoStatus::Delivered),
        ];

        Self { vessels, materials, purchase_orders, sections }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::mock()
    }
}

#[allow(clippy::too_many_arguments)]
fn vessel(
    name: &str,
    imo: &str,
    vessel_type: &str,
    gross_tonnage: u32,
    flag: &str,
    class_society: &str,
    soc_reference: &str,
    soc_expiry: &str,
    status: VesselStatus,
    plan_image: &str,
    (plan_width, plan_height): (f64, f64),
) -> Vessel {
    Vessel {
        name: name.to_owned(),
        imo: imo.to_owned(),
        vessel_type: vessel_type.to_owned(),
        gross_tonnage,
        flag: flag.to_owned(),
        class_society: class_society.to_owned(),
        soc_reference: soc_reference.to_owned(),
        soc_expiry: soc_expiry.to_owned(),
        status,
        plan_image: plan_image.to_owned(),
        plan_width,
        plan_height,
    }
}

fn section(name: &str, x: f64, y: f64, width: f64, height: f64) -> DeckSection {
    DeckSection { name: name.to_owned(), crop: Rect::new(x, y, width, height) }
}

#[allow(clippy::too_many_arguments)]
fn material(
    id: &str,
    name: &str,
    vessel: &str,
    ihm_part: IhmPart,
    risk: RiskCategory,
    compliance: ComplianceStatus,
    completion: u8,
    threshold_value: f64,
    threshold_message: &str,
    tags: &[&str],
    zone: Option<&str>,
    po_id: Option<&str>,
) -> Material {
    Material {
        id: id.to_owned(),
        name: name.to_owned(),
        vessel: vessel.to_owned(),
        ihm_part,
        risk,
        compliance,
        completion,
        threshold_value,
        threshold_message: threshold_message.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        zone: zone.map(str::to_owned),
        po_id: po_id.map(str::to_owned),
    }
}

fn purchase_order(id: &str, vessel: &str, supplier: &str, description: &str, order_date: &str, status: PoStatus) -> PurchaseOrder {
    PurchaseOrder {
        id: id.to_owned(),
        vessel: vessel.to_owned(),
        supplier: supplier.to_owned(),
        description: description.to_owned(),
        order_date: order_date.to_owned(),
        status,
    }
}
