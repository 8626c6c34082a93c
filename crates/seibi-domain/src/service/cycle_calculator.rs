//! Maintenance cycle calculation service
//!
//! Each vehicle class repeats a fixed sequence of maintenance kinds at a
//! fixed mileage interval. The position within the sequence is derived
//! from the number of cycle-advancing events already on record.

use seibi_types::{Error, MaintenanceKind, VehicleClass};

use crate::model::{MaintenancePlan, MaintenanceRecord};
use crate::repository::{MaintenanceHistoryRepository, VehicleRegistry};

/// Repeating kind sequence and milestone interval (km) per class
fn cycle_rule(class: VehicleClass) -> (u32, &'static [MaintenanceKind]) {
    match class {
        VehicleClass::SmallEngine => (4000, &[MaintenanceKind::Minor, MaintenanceKind::Major]),
        VehicleClass::MediumEngine => (
            5000,
            &[
                MaintenanceKind::Minor,
                MaintenanceKind::Minor,
                MaintenanceKind::Major,
            ],
        ),
        VehicleClass::Electric => (0, &[]),
    }
}

/// Smallest multiple of `interval` strictly greater than `current_mileage`.
///
/// A mileage sitting exactly on a milestone advances a full interval: a
/// vehicle at 4000 km with a 4000 km interval is scheduled for 8000 km.
pub fn next_milestone(current_mileage: u32, interval: u32) -> u32 {
    (current_mileage / interval + 1) * interval
}

/// Compute the next scheduled maintenance for a vehicle class.
///
/// `history` may arrive in any order; it is sorted ascending by mileage
/// before the cycle position is derived, and inspection-only entries
/// (kind = none) are excluded from the count.
pub fn calculate_next(
    class: VehicleClass,
    current_mileage: u32,
    history: &[MaintenanceRecord],
) -> MaintenancePlan {
    let (interval, cycle) = cycle_rule(class);

    if cycle.is_empty() {
        // Electric: no scheduled engine maintenance
        return MaintenancePlan {
            kind: MaintenanceKind::None,
            next_milestone: None,
            distance_remaining: None,
            interval: 0,
            cycle_position: 0,
        };
    }

    let mut sorted: Vec<&MaintenanceRecord> = history.iter().collect();
    sorted.sort_by_key(|r| r.mileage_at_service);
    let valid_count = sorted.iter().filter(|r| r.advances_cycle()).count();

    let cycle_position = valid_count % cycle.len();
    let milestone = next_milestone(current_mileage, interval);

    MaintenancePlan {
        kind: cycle[cycle_position],
        next_milestone: Some(milestone),
        distance_remaining: Some(milestone - current_mileage),
        interval,
        cycle_position,
    }
}

/// Resolve a vehicle number through the registry, pull its history, and
/// compute the next maintenance. Repository failures propagate unmodified.
pub fn plan_for_vehicle<R, H>(
    registry: &R,
    history_repo: &H,
    vehicle_number: &str,
    current_mileage: u32,
) -> Result<MaintenancePlan, Error>
where
    R: VehicleRegistry,
    H: MaintenanceHistoryRepository,
{
    let vehicle = registry
        .find_by_number(vehicle_number)?
        .ok_or_else(|| Error::VehicleNotFound(vehicle_number.to_string()))?;
    let history = history_repo.fetch_history(vehicle_number)?;
    Ok(calculate_next(vehicle.class, current_mileage, &history))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: MaintenanceKind, mileage: u32) -> MaintenanceRecord {
        MaintenanceRecord::new(kind, mileage)
    }

    #[test]
    fn test_small_engine_empty_history() {
        let plan = calculate_next(VehicleClass::SmallEngine, 500, &[]);
        assert_eq!(plan.kind, MaintenanceKind::Minor);
        assert_eq!(plan.next_milestone, Some(4000));
        assert_eq!(plan.distance_remaining, Some(3500));
        assert_eq!(plan.interval, 4000);
        assert_eq!(plan.cycle_position, 0);
    }

    #[test]
    fn test_small_engine_after_one_minor() {
        let history = vec![record(MaintenanceKind::Minor, 4000)];
        let plan = calculate_next(VehicleClass::SmallEngine, 4500, &history);
        assert_eq!(plan.kind, MaintenanceKind::Major);
        assert_eq!(plan.next_milestone, Some(8000));
        assert_eq!(plan.distance_remaining, Some(3500));
        assert_eq!(plan.cycle_position, 1);
    }

    #[test]
    fn test_small_engine_cycle_wraps_after_major() {
        let history = vec![
            record(MaintenanceKind::Minor, 4000),
            record(MaintenanceKind::Major, 8000),
        ];
        let plan = calculate_next(VehicleClass::SmallEngine, 9000, &history);
        assert_eq!(plan.kind, MaintenanceKind::Minor);
        assert_eq!(plan.cycle_position, 0);
        assert_eq!(plan.next_milestone, Some(12000));
    }

    #[test]
    fn test_exact_multiple_advances_full_interval() {
        let plan = calculate_next(VehicleClass::SmallEngine, 4000, &[]);
        assert_eq!(plan.next_milestone, Some(8000));
        assert_eq!(plan.distance_remaining, Some(4000));
    }

    #[test]
    fn test_zero_mileage_points_at_first_interval() {
        let plan = calculate_next(VehicleClass::MediumEngine, 0, &[]);
        assert_eq!(plan.next_milestone, Some(5000));
        assert_eq!(plan.distance_remaining, Some(5000));
    }

    #[test]
    fn test_medium_engine_third_step_is_major() {
        let history = vec![
            record(MaintenanceKind::Minor, 5000),
            record(MaintenanceKind::Minor, 10000),
        ];
        let plan = calculate_next(VehicleClass::MediumEngine, 12000, &history);
        assert_eq!(plan.kind, MaintenanceKind::Major);
        assert_eq!(plan.next_milestone, Some(15000));
        assert_eq!(plan.distance_remaining, Some(3000));
        assert_eq!(plan.interval, 5000);
        assert_eq!(plan.cycle_position, 2);
    }

    #[test]
    fn test_medium_engine_cycle_wraps_after_major() {
        let history = vec![
            record(MaintenanceKind::Minor, 5000),
            record(MaintenanceKind::Minor, 10000),
            record(MaintenanceKind::Major, 15000),
        ];
        let plan = calculate_next(VehicleClass::MediumEngine, 15500, &history);
        assert_eq!(plan.kind, MaintenanceKind::Minor);
        assert_eq!(plan.cycle_position, 0);
        assert_eq!(plan.next_milestone, Some(20000));
    }

    #[test]
    fn test_electric_never_schedules() {
        for mileage in [0, 500, 4000, 123_456] {
            let plan = calculate_next(VehicleClass::Electric, mileage, &[]);
            assert_eq!(plan.kind, MaintenanceKind::None);
            assert_eq!(plan.next_milestone, None);
            assert_eq!(plan.distance_remaining, None);
            assert_eq!(plan.interval, 0);
            assert_eq!(plan.cycle_position, 0);
        }
    }

    #[test]
    fn test_electric_ignores_history() {
        let history = vec![record(MaintenanceKind::Major, 8000)];
        let plan = calculate_next(VehicleClass::Electric, 9000, &history);
        assert_eq!(plan.kind, MaintenanceKind::None);
        assert_eq!(plan.cycle_position, 0);
    }

    #[test]
    fn test_none_records_do_not_advance_cycle() {
        let history = vec![
            record(MaintenanceKind::None, 2000),
            record(MaintenanceKind::Minor, 4000),
            record(MaintenanceKind::None, 6000),
        ];
        let plan = calculate_next(VehicleClass::SmallEngine, 7000, &history);
        assert_eq!(plan.kind, MaintenanceKind::Major);
        assert_eq!(plan.cycle_position, 1);
    }

    #[test]
    fn test_unsorted_history_is_handled() {
        let history = vec![
            record(MaintenanceKind::Major, 8000),
            record(MaintenanceKind::Minor, 4000),
        ];
        let plan = calculate_next(VehicleClass::SmallEngine, 9000, &history);
        assert_eq!(plan.kind, MaintenanceKind::Minor);
        assert_eq!(plan.cycle_position, 0);
    }

    #[test]
    fn test_next_milestone_between_multiples() {
        assert_eq!(next_milestone(500, 4000), 4000);
        assert_eq!(next_milestone(3999, 4000), 4000);
        assert_eq!(next_milestone(4001, 4000), 8000);
        assert_eq!(next_milestone(12000, 5000), 15000);
    }
}
