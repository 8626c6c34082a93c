//! Domain model types

pub mod maintenance_record;
pub mod registered_vehicle;

pub use maintenance_record::{MaintenancePlan, MaintenanceRecord};
pub use registered_vehicle::RegisteredVehicle;
