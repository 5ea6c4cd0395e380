//! Simulation variants tracked by the dashboard.

use serde::{Deserialize, Serialize};

/// Fixed per-method constants for the synthetic convergence curve.
///
/// Before convergence the energy follows
/// `base - amplitude * (1 - exp(-iteration / decay)) + noise * U(0,1)`;
/// afterwards it random-walks in steps of `jitter * U(-0.5, 0.5)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveParams {
    pub base: f64,
    pub amplitude: f64,
    pub decay: f64,
    pub noise: f64,
    pub jitter: f64,
}

/// One of the three synthetic simulation variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    NormalVqe,
    VqeUccsdHybrid,
    VqeUccsdHybridZne,
}

impl Method {
    /// All tracked methods, in display order.
    pub const ALL: [Method; 3] = [
        Method::NormalVqe,
        Method::VqeUccsdHybrid,
        Method::VqeUccsdHybridZne,
    ];

    /// Stable storage key for the method.
    pub fn key(&self) -> &'static str {
        match self {
            Method::NormalVqe => "normal_vqe",
            Method::VqeUccsdHybrid => "vqe_uccsd_hybrid",
            Method::VqeUccsdHybridZne => "vqe_uccsd_hybrid_zne",
        }
    }

    /// Human-readable panel label.
    pub fn label(&self) -> &'static str {
        match self {
            Method::NormalVqe => "Normal VQE",
            Method::VqeUccsdHybrid => "VQE + UCCSD + Hybrid",
            Method::VqeUccsdHybridZne => "VQE + UCCSD + Hybrid + ZNE",
        }
    }

    /// Curve constants for this method.
    ///
    /// Normal VQE converges slowest with the most noise; the ZNE variant
    /// reaches the lowest asymptote fastest with the least noise.
    pub fn curve(&self) -> CurveParams {
        match self {
            Method::NormalVqe => CurveParams {
                base: -0.8,
                amplitude: 0.4,
                decay: 20.0,
                noise: 0.08,
                jitter: 0.001,
            },
            Method::VqeUccsdHybrid => CurveParams {
                base: -1.0,
                amplitude: 0.4,
                decay: 10.0,
                noise: 0.03,
                jitter: 0.001,
            },
            Method::VqeUccsdHybridZne => CurveParams {
                base: -1.1,
                amplitude: 0.5,
                decay: 8.0,
                noise: 0.02,
                jitter: 0.0005,
            },
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Method::NormalVqe => 0,
            Method::VqeUccsdHybrid => 1,
            Method::VqeUccsdHybridZne => 2,
        }
    }
}
