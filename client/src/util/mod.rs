//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, dialogs, pointer
//! geometry, query strings) from page and component logic so that logic can
//! be tested natively.

pub mod alert;
pub mod dark_mode;
pub mod plan_input;
pub mod plan_viewport;
pub mod query;
pub mod storage;
