//! Domain layer for seibi-planner: models, repository traits, and the
//! maintenance cycle calculator.

pub mod model;
pub mod repository;
pub mod service;
