//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation shell, the materials record view and the
//! deck-plan mapping surface. Shared state comes from Leptos context
//! providers; mapping components take the page's `MappingState` signal.

pub mod add_material_form;
pub mod entry_list;
pub mod filter_panel;
pub mod header;
pub mod material_detail_panel;
pub mod material_table;
pub mod plan_host;
pub mod sidebar;
pub mod status_bar;
pub mod transfer_dialog;
pub mod vessel_card;
