//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_history_repo;
mod file_vehicle_registry;

pub use file_history_repo::FileHistoryRepository;
pub use file_vehicle_registry::FileVehicleRegistry;
