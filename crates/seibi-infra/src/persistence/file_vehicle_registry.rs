//! File-based implementation of VehicleRegistry

use std::path::PathBuf;

use seibi_domain::model::RegisteredVehicle;
use seibi_domain::repository::VehicleRegistry;
use seibi_types::{Error, Result};

use crate::vehicle_registry_loader::VehicleRegistryLoader;

/// File-based VehicleRegistry (TOML)
pub struct FileVehicleRegistry {
    toml_path: PathBuf,
    loader: VehicleRegistryLoader,
}

impl FileVehicleRegistry {
    /// Create a new registry from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self> {
        let loader = VehicleRegistryLoader::load_from_file(&toml_path)?;
        Ok(Self { toml_path, loader })
    }

    /// Get the TOML path
    pub fn toml_path(&self) -> &PathBuf {
        &self.toml_path
    }

    /// Reload data from TOML
    pub fn reload(&mut self) -> Result<()> {
        self.loader = VehicleRegistryLoader::load_from_file(&self.toml_path)?;
        Ok(())
    }
}

impl VehicleRegistry for FileVehicleRegistry {
    fn find_by_number(&self, vehicle_number: &str) -> std::result::Result<Option<RegisteredVehicle>, Error> {
        Ok(self.loader.get_vehicle(vehicle_number).cloned())
    }

    fn find_all(&self) -> std::result::Result<Vec<RegisteredVehicle>, Error> {
        let mut vehicles: Vec<RegisteredVehicle> =
            self.loader.all_vehicles().into_iter().cloned().collect();
        vehicles.sort_by(|a, b| a.vehicle_number.cmp(&b.vehicle_number));
        Ok(vehicles)
    }
}
