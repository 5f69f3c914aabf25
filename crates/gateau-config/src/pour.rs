//! Chocolate-pour overlay progress.
//!
//! A bounded, monotone, auto-terminating value driven by elapsed-time
//! deltas, so behavior is frame-rate independent. The advance is a pure
//! function from state and delta to state; applying it to a renderable
//! overlay is the rendering collaborator's job.

use serde::{Deserialize, Serialize};

/// Progress gained per second while pouring.
pub const POUR_RATE: f64 = 0.2;

/// Unclamped progress at which the pour saturates and auto-stops.
pub const POUR_SATURATION: f64 = 1.2;

/// State of the pour overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PourState {
    /// Is the pour currently running?
    pub pouring: bool,
    /// Glaze coverage in `[0, 1]`.
    pub progress: f64,
}

impl PourState {
    /// Begin pouring.
    pub fn started(self) -> Self {
        Self {
            pouring: true,
            ..self
        }
    }

    /// Stop pouring, keeping accumulated progress.
    pub fn stopped(self) -> Self {
        Self {
            pouring: false,
            ..self
        }
    }

    /// Advance by `dt` seconds. Progress grows linearly while pouring;
    /// reaching the saturation threshold clamps coverage to 1 and stops
    /// the pour.
    pub fn advanced(self, dt: f64) -> Self {
        if !self.pouring || dt <= 0.0 {
            return self;
        }
        let next = self.progress + dt * POUR_RATE;
        if next >= POUR_SATURATION {
            Self {
                pouring: false,
                progress: 1.0,
            }
        } else {
            Self {
                pouring: true,
                progress: next,
            }
        }
    }
}
