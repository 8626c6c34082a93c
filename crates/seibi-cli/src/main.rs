//! Seibi Planner - Vehicle maintenance cycle planning
//!
//! A CLI tool that computes the next scheduled maintenance event for a
//! vehicle from its class, mileage, and maintenance history.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
