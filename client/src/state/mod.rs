//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`registry`, `inventory`, `mapping`, etc.) so
//! pages and components depend on small focused models. Everything here is
//! plain Rust with no browser handles; pages wrap the structs in `RwSignal`s.

pub mod filters;
pub mod inventory;
pub mod mapping;
pub mod material_form;
pub mod materials;
pub mod registry;
pub mod transfer;
pub mod ui;
