//! Core types for maintenance cycle planning

mod error;

pub use error::*;

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Vehicle class (車両区分), determines which maintenance cycle applies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleClass {
    /// Small-engine vehicles: 4000 km interval, Minor/Major alternating
    SmallEngine,
    /// Medium-engine vehicles: 5000 km interval, Minor/Minor/Major
    MediumEngine,
    /// Electric vehicles: no scheduled engine maintenance
    Electric,
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleClass::SmallEngine => write!(f, "small-engine"),
            VehicleClass::MediumEngine => write!(f, "medium-engine"),
            VehicleClass::Electric => write!(f, "electric"),
        }
    }
}

impl FromStr for VehicleClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "small-engine" => Ok(VehicleClass::SmallEngine),
            "medium-engine" => Ok(VehicleClass::MediumEngine),
            "electric" => Ok(VehicleClass::Electric),
            other => Err(Error::UnknownVehicleClass(other.to_string())),
        }
    }
}

/// Kind of maintenance event (整備種別)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceKind {
    /// Inspection only, no work performed; does not advance the cycle
    #[default]
    None,
    Minor,
    Major,
}

impl std::fmt::Display for MaintenanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaintenanceKind::None => write!(f, "none"),
            MaintenanceKind::Minor => write!(f, "minor"),
            MaintenanceKind::Major => write!(f, "major"),
        }
    }
}

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
