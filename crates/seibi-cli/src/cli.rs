//! CLI argument definitions

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use seibi_types::{MaintenanceKind, OutputFormat, VehicleClass};

#[derive(Parser)]
#[command(name = "seibi-planner")]
#[command(about = "Vehicle maintenance cycle planner", version)]
pub struct Cli {
    /// Override the store directory (history and registry location)
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Override the vehicle registry TOML path
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the next scheduled maintenance event
    #[command(group(
        clap::ArgGroup::new("target").required(true).args(["class", "vehicle"])
    ))]
    Next {
        /// Vehicle class; mutually exclusive with --vehicle
        #[arg(long)]
        class: Option<VehicleClass>,

        /// Registered vehicle number; class and history come from the store
        #[arg(long)]
        vehicle: Option<String>,

        /// Current odometer reading (km)
        #[arg(long)]
        mileage: u32,

        /// Output format
        #[arg(long, short, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Record a maintenance event for a vehicle
    Record {
        /// Vehicle number
        #[arg(long)]
        vehicle: String,

        /// Kind of maintenance performed
        #[arg(long)]
        kind: MaintenanceKind,

        /// Odometer reading at service time (km)
        #[arg(long)]
        mileage: u32,

        /// Service date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Workshop note
        #[arg(long)]
        note: Option<String>,
    },

    /// List recorded maintenance for a vehicle
    History {
        /// Vehicle number
        #[arg(long)]
        vehicle: String,

        /// Output format
        #[arg(long, short, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the vehicle registry
    Vehicles {
        /// Output format
        #[arg(long, short, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}
