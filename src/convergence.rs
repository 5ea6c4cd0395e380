//! Windowed convergence detection.

use std::collections::HashSet;

use crate::method::Method;
use crate::series::EnergySeries;

/// Settings for the convergence check.
#[derive(Copy, Clone, Debug)]
pub struct ConvergenceParams {
    /// Number of trailing points inspected.
    pub window: usize,
    /// Max-min range below which a method counts as converged.
    pub threshold: f64,
}

impl Default for ConvergenceParams {
    fn default() -> Self {
        Self {
            window: 5,
            threshold: 0.001,
        }
    }
}

/// Tracks which methods have converged within the current run.
///
/// Membership is one-shot: once a method converges it is never re-evaluated
/// until [`ConvergenceTracker::reset`].
#[derive(Clone, Debug, Default)]
pub struct ConvergenceTracker {
    params: ConvergenceParams,
    converged: HashSet<Method>,
}

impl ConvergenceTracker {
    pub fn new(params: ConvergenceParams) -> Self {
        Self {
            params,
            converged: HashSet::new(),
        }
    }

    pub fn params(&self) -> ConvergenceParams {
        self.params
    }

    pub fn is_converged(&self, method: Method) -> bool {
        self.converged.contains(&method)
    }

    pub fn converged_count(&self) -> usize {
        self.converged.len()
    }

    /// Converged methods in display order.
    pub fn converged_methods(&self) -> Vec<Method> {
        Method::ALL
            .iter()
            .copied()
            .filter(|m| self.converged.contains(m))
            .collect()
    }

    pub fn all_converged(&self) -> bool {
        self.converged.len() == Method::ALL.len()
    }

    /// Re-examine `method` after a new sample has been appended.
    ///
    /// Returns `true` only on the tick where the method newly converges.
    pub fn observe(&mut self, method: Method, series: &EnergySeries) -> bool {
        if self.converged.contains(&method) {
            return false;
        }
        match series.window_range(self.params.window) {
            Some(range) if range < self.params.threshold => {
                self.converged.insert(method);
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.converged.clear();
    }
}
