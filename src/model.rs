//! Analysis model - one simply-supported beam and its loads

use serde::Serialize;

use crate::analysis::ResponseEngine;
use crate::error::{BeamError, BeamResult};
use crate::loads::LoadAssembly;

/// A simply-supported beam pinned at `x = 0` and `x = L`.
///
/// Immutable once built. Load positions are not checked against the span;
/// loads beyond the supports simply extrapolate through the bracket terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisModel {
    length: f64,
    e: f64,
    i: f64,
    loads: LoadAssembly,
}

impl AnalysisModel {
    /// Create a new model
    ///
    /// # Arguments
    /// * `length` - Span between supports
    /// * `e` - Modulus of elasticity
    /// * `i` - Second moment of area about the bending axis
    /// * `loads` - Loads acting on the span
    pub fn new(length: f64, e: f64, i: f64, loads: LoadAssembly) -> BeamResult<Self> {
        for (name, value) in [("length", length), ("E", e), ("I", i)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BeamError::invalid_input(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(Self { length, e, i, loads })
    }

    /// Span between supports
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Modulus of elasticity
    pub fn e(&self) -> f64 {
        self.e
    }

    /// Second moment of area
    pub fn i(&self) -> f64 {
        self.i
    }

    /// Flexural rigidity EI
    pub fn ei(&self) -> f64 {
        self.i * self.e
    }

    /// Loads acting on the beam
    pub fn loads(&self) -> &LoadAssembly {
        &self.loads
    }

    /// Bind a response engine to this model
    pub fn engine(&self) -> ResponseEngine<'_> {
        ResponseEngine::new(self)
    }

    /// Serialize the model to pretty-printed JSON
    pub fn to_json(&self) -> BeamResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
