//! IO module - configuration handling for the dashboard driver.

mod config;

pub use config::{read_run_config, RunConfig};
