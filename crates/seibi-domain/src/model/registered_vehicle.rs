//! Registered vehicle type definitions

use serde::{Deserialize, Serialize};

use seibi_types::VehicleClass;

/// A vehicle known to the registry, resolving its number to a class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredVehicle {
    /// 車両番号 (e.g., "1122", "1111")
    pub vehicle_number: String,
    /// Maintenance class the cycle rules key on
    pub class: VehicleClass,
    /// Owner or operating company
    pub owner: Option<String>,
}
