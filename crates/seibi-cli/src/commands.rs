//! Command handlers

use chrono::NaiveDate;

use seibi_domain::model::MaintenanceRecord;
use seibi_domain::repository::{MaintenanceHistoryRepository, VehicleRegistry};
use seibi_domain::service::{calculate_next, plan_for_vehicle};
use seibi_infra::persistence::{FileHistoryRepository, FileVehicleRegistry};
use seibi_types::{MaintenanceKind, OutputFormat, Result, VehicleClass};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::{output_history, output_plan, output_vehicles};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?.with_overrides(cli.store_dir, cli.registry);

    match cli.command {
        Commands::Next {
            class,
            vehicle,
            mileage,
            format,
        } => cmd_next(&config, class, vehicle, mileage, format),
        Commands::Record {
            vehicle,
            kind,
            mileage,
            date,
            note,
        } => cmd_record(&config, &vehicle, kind, mileage, date, note),
        Commands::History { vehicle, format } => cmd_history(&config, &vehicle, format),
        Commands::Vehicles { format } => cmd_vehicles(&config, format),
    }
}

fn cmd_next(
    config: &Config,
    class: Option<VehicleClass>,
    vehicle: Option<String>,
    mileage: u32,
    format: OutputFormat,
) -> Result<()> {
    let plan = if let Some(class) = class {
        // Explicit class, no stored history: fresh cycle
        calculate_next(class, mileage, &[])
    } else if let Some(number) = vehicle {
        let registry = FileVehicleRegistry::new(config.registry_path()?)?;
        let history_repo = FileHistoryRepository::open(config.store_dir()?)?;
        plan_for_vehicle(&registry, &history_repo, &number, mileage)?
    } else {
        unreachable!("clap requires --class or --vehicle");
    };

    output_plan(format, &plan)
}

fn cmd_record(
    config: &Config,
    vehicle: &str,
    kind: MaintenanceKind,
    mileage: u32,
    date: Option<NaiveDate>,
    note: Option<String>,
) -> Result<()> {
    let mut repo = FileHistoryRepository::open(config.store_dir()?)?;
    let record = MaintenanceRecord {
        kind,
        mileage_at_service: mileage,
        serviced_on: date,
        note,
    };
    repo.append(vehicle, record)?;
    println!("Recorded {} maintenance for {} at {} km", kind, vehicle, mileage);
    Ok(())
}

fn cmd_history(config: &Config, vehicle: &str, format: OutputFormat) -> Result<()> {
    let repo = FileHistoryRepository::open(config.store_dir()?)?;
    let history = repo.fetch_history(vehicle)?;
    output_history(format, vehicle, &history)
}

fn cmd_vehicles(config: &Config, format: OutputFormat) -> Result<()> {
    let registry = FileVehicleRegistry::new(config.registry_path()?)?;
    let vehicles = registry.find_all()?;
    output_vehicles(format, &vehicles)
}
