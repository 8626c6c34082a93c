//! Vehicle registry loader from TOML configuration

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use seibi_domain::model::RegisteredVehicle;
use seibi_types::{ConfigError, Error, Result};

/// Raw registry entry as written in vehicles.toml; the class stays a
/// string here so an unknown value surfaces as UnknownVehicleClass
/// rather than a generic TOML parse error.
#[derive(Debug, Deserialize)]
struct RegistryEntry {
    vehicle_number: String,
    class: String,
    owner: Option<String>,
}

/// Container for parsing vehicles.toml
#[derive(Debug, Deserialize)]
struct RegistryConfig {
    vehicles: Vec<RegistryEntry>,
}

/// Vehicle registry loaded from TOML
#[derive(Debug)]
pub struct VehicleRegistryLoader {
    /// Map of vehicle_number to RegisteredVehicle
    vehicles: HashMap<String, RegisteredVehicle>,
}

impl VehicleRegistryLoader {
    /// Load the registry from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read vehicle registry file: {}",
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load the registry from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: RegistryConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse vehicle registry TOML: {}",
                e
            )))
        })?;

        let mut vehicles = HashMap::new();
        for entry in config.vehicles {
            let vehicle = RegisteredVehicle {
                vehicle_number: entry.vehicle_number.clone(),
                class: entry.class.parse()?,
                owner: entry.owner,
            };
            vehicles.insert(entry.vehicle_number, vehicle);
        }

        Ok(Self { vehicles })
    }

    /// Look up a vehicle by number
    pub fn get_vehicle(&self, vehicle_number: &str) -> Option<&RegisteredVehicle> {
        self.vehicles.get(vehicle_number)
    }

    /// Get all registered vehicles
    pub fn all_vehicles(&self) -> Vec<&RegisteredVehicle> {
        self.vehicles.values().collect()
    }

    /// Get the total number of registered vehicles
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }
}
