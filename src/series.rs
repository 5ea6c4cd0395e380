//! Bounded per-method energy history.

use serde::{Deserialize, Serialize};

/// Maximum number of points retained per method.
pub const MAX_POINTS: usize = 50;

/// One sampled `(iteration, energy)` pair.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergyPoint {
    pub iteration: usize,
    pub energy: f64,
}

/// Insertion-ordered energy history, truncated to the most recent
/// [`MAX_POINTS`] entries (oldest discarded first).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EnergySeries {
    points: Vec<EnergyPoint>,
}

impl EnergySeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point, dropping the oldest entries beyond the cap.
    pub fn push(&mut self, point: EnergyPoint) {
        self.points.push(point);
        if self.points.len() > MAX_POINTS {
            let excess = self.points.len() - MAX_POINTS;
            self.points.drain(..excess);
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[EnergyPoint] {
        &self.points
    }

    /// Most recently appended energy, if any.
    pub fn last_energy(&self) -> Option<f64> {
        self.points.last().map(|p| p.energy)
    }

    /// Max-min spread of the last `window` energies.
    ///
    /// Returns `None` until at least `window` points are stored, so callers
    /// never take a min/max over an empty slice.
    pub fn window_range(&self, window: usize) -> Option<f64> {
        if window == 0 || self.points.len() < window {
            return None;
        }
        let recent = &self.points[self.points.len() - window..];
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in recent {
            lo = lo.min(p.energy);
            hi = hi.max(p.energy);
        }
        Some(hi - lo)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
