//! Output formatting module

use seibi_domain::model::{MaintenancePlan, MaintenanceRecord, RegisteredVehicle};
use seibi_types::{OutputFormat, Result};

pub fn output_plan(output_format: OutputFormat, plan: &MaintenancePlan) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(plan)?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nNext Maintenance");
        println!("================");

        match (plan.next_milestone, plan.distance_remaining) {
            (Some(milestone), Some(remaining)) => {
                println!("Kind:            {}", plan.kind);
                println!("Milestone:       {} km", milestone);
                println!("Remaining:       {} km", remaining);
                println!("Interval:        {} km", plan.interval);
                println!("Cycle position:  {}", plan.cycle_position);
            }
            _ => {
                println!("No scheduled maintenance for this vehicle class");
            }
        }
    }

    Ok(())
}

pub fn output_history(
    output_format: OutputFormat,
    vehicle_number: &str,
    history: &[MaintenanceRecord],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(history)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nMaintenance History: {}", vehicle_number);
    println!("==============================");
    if history.is_empty() {
        println!("(no records)");
        return Ok(());
    }

    println!("{:<8} {:>10} {:<12} {}", "Kind", "Mileage", "Date", "Note");
    for record in history {
        let date = record
            .serviced_on
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8} {:>7} km {:<12} {}",
            record.kind.to_string(),
            record.mileage_at_service,
            date,
            record.note.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

pub fn output_vehicles(output_format: OutputFormat, vehicles: &[RegisteredVehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(vehicles)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nRegistered Vehicles");
    println!("===================");
    if vehicles.is_empty() {
        println!("(no vehicles)");
        return Ok(());
    }

    println!("{:<12} {:<15} {}", "Number", "Class", "Owner");
    for vehicle in vehicles {
        println!(
            "{:<12} {:<15} {}",
            vehicle.vehicle_number,
            vehicle.class.to_string(),
            vehicle.owner.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
