//! Interception control state.
//!
//! The modules here form the control plane for one instrumented property:
//! which direction of access is live, which descriptor version is current,
//! and what history of superseded descriptors is retained.

/// Activation flags and access directions.
pub mod active;
/// Descriptor chains: ordered history of controlled descriptors.
pub mod chain;
/// The standalone per-descriptor controller.
pub mod controller;
/// Controlled descriptor records and partial configurations.
pub mod descriptor;
/// Chain-owning property controllers.
pub mod property;
