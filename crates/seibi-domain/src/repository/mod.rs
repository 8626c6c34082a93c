//! Repository trait definitions for data persistence

use crate::model::{MaintenanceRecord, RegisteredVehicle};
use seibi_types::Error;

/// Repository for per-vehicle maintenance history.
///
/// Implementations must return records sorted ascending by
/// `mileage_at_service`; the cycle calculator relies on this ordering.
pub trait MaintenanceHistoryRepository {
    /// Fetch the full history for a vehicle, ascending by mileage.
    /// Unknown vehicles yield an empty history.
    fn fetch_history(&self, vehicle_number: &str) -> Result<Vec<MaintenanceRecord>, Error>;

    /// Append a maintenance record for a vehicle
    fn append(&mut self, vehicle_number: &str, record: MaintenanceRecord) -> Result<(), Error>;
}

/// Repository for the vehicle registry
pub trait VehicleRegistry {
    /// Find a vehicle by number
    fn find_by_number(&self, vehicle_number: &str) -> Result<Option<RegisteredVehicle>, Error>;

    /// Find all registered vehicles
    fn find_all(&self) -> Result<Vec<RegisteredVehicle>, Error>;
}
