//! Demonstration wiring: one supplier, one purchase order, two lines.

pub mod config;
pub mod run;

pub use config::DemoConfig;
pub use run::run;
