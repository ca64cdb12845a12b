//! Developer Tooling: read-only inspection of animal worlds.
//!
//! # Invariants
//! - Inspection never mutates the world.

pub mod inspector;

pub use inspector::{WorldInspector, WorldSummary};
