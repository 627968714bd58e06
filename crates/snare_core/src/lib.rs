//! `snare_core` — the foundational library for the Snare controlled-property
//! interception engine.
//!
//! # Crate layout
//!
//! - [`host`] — Dynamic host objects: property values, native descriptors,
//!   and the string-keyed property table the controllers instrument.
//! - [`control`] — Interception control state: activation flags, controlled
//!   descriptors, descriptor chains, and the controllers that own them.

/// Error types shared across the engine.
pub mod error;
/// Interception control state: flags, descriptors, chains, controllers.
pub mod control;
/// Dynamic host objects and their native property descriptors.
pub mod host;
