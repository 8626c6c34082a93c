//! Infrastructure layer for seibi-planner
//!
//! File-based implementations of the domain repository traits.

pub mod persistence;
pub mod vehicle_registry_loader;
