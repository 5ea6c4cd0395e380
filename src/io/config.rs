//! Driver run configuration, read from YAML.

use serde::{Deserialize, Serialize};

/// Settings for the dashboard driver loop.
///
/// These shape only the driver (cadence, run length, seeding, verbosity);
/// the core's window, threshold and retention constants are fixed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seconds between ticks.
    pub tick_interval_secs: f64,
    /// Optional hard stop for headless runs.
    pub max_ticks: Option<usize>,
    /// Seed for reproducible runs; thread RNG when absent.
    pub seed: Option<u64>,
    /// Print per-method energies every tick.
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: 2.0,
            max_ticks: None,
            seed: None,
            verbose: true,
        }
    }
}

/// Read a [`RunConfig`] from a YAML file.
pub fn read_run_config(filename: &str) -> RunConfig {
    let file = std::fs::File::open(filename).unwrap();
    let reader = std::io::BufReader::new(file);
    let config: RunConfig = serde_yaml::from_reader(reader).unwrap();
    config
}

// example of yaml file
// tick_interval_secs: 2.0
// max_ticks: 120
// seed: 42
// verbose: true
