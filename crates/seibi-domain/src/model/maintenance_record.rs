//! Maintenance record and plan type definitions

use serde::{Deserialize, Serialize};

use seibi_types::MaintenanceKind;

/// A single historical maintenance event (整備記録)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// What was done
    pub kind: MaintenanceKind,
    /// Odometer reading at service time (km)
    pub mileage_at_service: u32,
    /// Service date, when known
    pub serviced_on: Option<chrono::NaiveDate>,
    /// Free-form workshop note
    pub note: Option<String>,
}

impl MaintenanceRecord {
    pub fn new(kind: MaintenanceKind, mileage_at_service: u32) -> Self {
        Self {
            kind,
            mileage_at_service,
            serviced_on: None,
            note: None,
        }
    }

    /// Inspection-only entries (kind = none) do not advance the cycle
    pub fn advances_cycle(&self) -> bool {
        self.kind != MaintenanceKind::None
    }
}

/// Result of a next-maintenance calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenancePlan {
    /// Kind of the next maintenance event
    pub kind: MaintenanceKind,
    /// Odometer milestone at which it falls due; absent for electric
    pub next_milestone: Option<u32>,
    /// Distance left until the milestone (km); absent for electric
    pub distance_remaining: Option<u32>,
    /// Interval between milestones for this class (km)
    pub interval: u32,
    /// Index within the repeating cycle of maintenance kinds
    pub cycle_position: usize,
}
