//! Domain services

pub mod cycle_calculator;

pub use cycle_calculator::{calculate_next, next_milestone, plan_for_vehicle};
