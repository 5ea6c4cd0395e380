//! Run orchestration: the tick loop, reset, and display snapshots.
//!
//! A run spans one reset to the next. The controller exclusively owns all
//! run state; display collaborators only ever see copies.

use rand::Rng;
use serde::Serialize;

use crate::convergence::{ConvergenceParams, ConvergenceTracker};
use crate::method::Method;
use crate::sampling::SampleGenerator;
use crate::series::{EnergyPoint, EnergySeries};

/// Raised once per method per run, on the tick where it converges.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ConvergenceEvent {
    pub method: Method,
    pub iteration: usize,
    pub energy: f64,
}

/// What happened during one completed tick.
#[derive(Clone, Debug)]
pub struct TickReport {
    /// Iteration index stamped on this tick's samples.
    pub iteration: usize,
    /// Methods that newly converged this tick.
    pub events: Vec<ConvergenceEvent>,
    /// True when this tick converged the last method and stopped the run.
    pub completed: bool,
}

/// Read-only per-method view handed to display sinks.
#[derive(Clone, Debug, Serialize)]
pub struct MethodSnapshot {
    pub method: Method,
    pub points: Vec<EnergyPoint>,
    pub latest: Option<f64>,
    pub converged: bool,
}

/// Read-only view of the whole run after a tick.
#[derive(Clone, Debug, Serialize)]
pub struct DashboardSnapshot {
    pub methods: Vec<MethodSnapshot>,
    pub current_iteration: usize,
    pub converged: Vec<Method>,
    pub converged_count: usize,
    pub stopped: bool,
}

/// Drives sampling, history retention and convergence tracking for all
/// three methods.
pub struct RunController<R: Rng> {
    generator: SampleGenerator<R>,
    tracker: ConvergenceTracker,
    series: [EnergySeries; 3],
    current_iteration: usize,
    stopped: bool,
}

impl<R: Rng> RunController<R> {
    pub fn new(rng: R) -> Self {
        Self::with_params(rng, ConvergenceParams::default())
    }

    pub fn with_params(rng: R, params: ConvergenceParams) -> Self {
        Self {
            generator: SampleGenerator::new(rng),
            tracker: ConvergenceTracker::new(params),
            series: Default::default(),
            current_iteration: 0,
            stopped: false,
        }
    }

    pub fn current_iteration(&self) -> usize {
        self.current_iteration
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn series(&self, method: Method) -> &EnergySeries {
        &self.series[method.index()]
    }

    pub fn tracker(&self) -> &ConvergenceTracker {
        &self.tracker
    }

    /// Run one timer tick.
    ///
    /// Returns `None` without sampling when the run is already stopped or
    /// every method has converged; the stopped flag latches in that case.
    /// Otherwise each method gets one sample (frozen branch once converged),
    /// its series is truncated, and the tracker re-examined, after which the
    /// iteration counter advances by one.
    pub fn tick(&mut self) -> Option<TickReport> {
        if self.stopped || self.tracker.all_converged() {
            self.stopped = true;
            return None;
        }

        let iteration = self.current_iteration;
        let mut events = Vec::new();
        for method in Method::ALL {
            let series = &mut self.series[method.index()];
            let frozen = if self.tracker.is_converged(method) {
                series.last_energy()
            } else {
                None
            };
            let energy = self.generator.next_energy(method, iteration, frozen);
            series.push(EnergyPoint { iteration, energy });
            if self.tracker.observe(method, series) {
                events.push(ConvergenceEvent {
                    method,
                    iteration,
                    energy,
                });
            }
        }
        self.current_iteration += 1;

        let completed = self.tracker.all_converged();
        if completed {
            self.stopped = true;
        }
        Some(TickReport {
            iteration,
            events,
            completed,
        })
    }

    /// Start a fresh run: iteration 0, nothing converged, all series empty.
    pub fn reset(&mut self) {
        self.current_iteration = 0;
        self.stopped = false;
        self.tracker.reset();
        for series in &mut self.series {
            series.clear();
        }
    }

    /// Copy out the current state for the display layer.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let methods = Method::ALL
            .iter()
            .map(|&method| {
                let series = self.series(method);
                MethodSnapshot {
                    method,
                    points: series.points().to_vec(),
                    latest: series.last_energy(),
                    converged: self.tracker.is_converged(method),
                }
            })
            .collect();
        DashboardSnapshot {
            methods,
            current_iteration: self.current_iteration,
            converged: self.tracker.converged_methods(),
            converged_count: self.tracker.converged_count(),
            stopped: self.stopped,
        }
    }
}
