//! Deck-plan viewport and pin-placement engine for the IHM dashboard.
//!
//! This crate holds everything about the mapping surface that does not need a
//! browser: the three coordinate spaces (absolute plan pixels, the crop
//! rectangle of the active deck section, and on-screen viewport pixels), the
//! pan/zoom camera, the pointer gesture state machine, and pin hit-testing.
//! The Leptos host in `client` forwards DOM events here and applies the
//! resulting [`engine::Action`]s to application state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] driving tools, gestures and pending pins |
//! | [`camera`] | Points, crop rectangles, pan/zoom camera and coordinate conversions |
//! | [`input`] | Tool, button and wheel types plus the gesture state |
//! | [`hit`] | Hit-testing placed pins in screen space |
//! | [`consts`] | Shared numeric constants (zoom limits, click slop, pin radius) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
