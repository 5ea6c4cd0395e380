//! VQE Dashboard - synthetic energy convergence curves in Rust
//!
//! This crate provides the simulation core behind a VQE convergence
//! dashboard: per-tick sample generation for three labeled method variants,
//! windowed convergence detection, bounded history retention, and run
//! orchestration behind a pluggable display seam.

pub mod method;
pub mod series;
pub mod sampling;
pub mod convergence;
pub mod run;
pub mod schedule;
pub mod display;
pub mod io;

// Re-export commonly used types at crate root
pub use method::{CurveParams, Method};
pub use series::{EnergyPoint, EnergySeries, MAX_POINTS};
pub use sampling::SampleGenerator;
pub use convergence::{ConvergenceParams, ConvergenceTracker};
pub use run::{ConvergenceEvent, DashboardSnapshot, MethodSnapshot, RunController, TickReport};
pub use schedule::{IntervalScheduler, TICK_INTERVAL};
pub use display::{ConsoleDisplay, DisplaySink};
pub use io::{read_run_config, RunConfig};
