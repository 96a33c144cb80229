//! Concentrated loads and distributed-load vertices

use serde::{Deserialize, Serialize};

/// A magnitude acting at a station along the beam.
///
/// Used on its own for point forces and point moments, and as one vertex
/// of a [`LoadSegmentSeries`](super::LoadSegmentSeries) for distributed
/// loads. Negative force magnitudes act downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadInstance {
    /// Load magnitude (force, moment, or intensity per unit length)
    pub magnitude: f64,
    /// Distance from the start of the beam
    pub position: f64,
}

impl LoadInstance {
    /// Create a new load instance
    pub const fn new(magnitude: f64, position: f64) -> Self {
        Self {
            magnitude,
            position,
        }
    }
}

impl From<(f64, f64)> for LoadInstance {
    /// Build from a `(magnitude, position)` pair
    fn from((magnitude, position): (f64, f64)) -> Self {
        Self::new(magnitude, position)
    }
}
