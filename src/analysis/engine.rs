//! Closed-form response engine for simply-supported beams
//!
//! Every load is expressed as Macaulay bracket terms and integrated
//! analytically. A superposition pass at integration level `n` sums the
//! bracket terms of all loads; the four response quantities then add the
//! two boundary constants solved from zero moment and zero deflection at
//! the far support.
//!
//! Integration levels passed to [`ResponseEngine::accumulate`]:
//! - `-1` shear
//! - `0` moment
//! - `1` slope
//! - `2` deflection

use super::{AnalysisOptions, ResponseDiagram};
use crate::error::BeamResult;
use crate::loads::{LoadInstance, LoadSegment};
use crate::math::{factorial_denominator, singularity};
use crate::model::AnalysisModel;
use crate::results::{BoundaryConstants, ResponseValues};

/// Evaluates shear, moment, slope and deflection for one model.
///
/// The engine only borrows the model, so any number of engines may query
/// the same model concurrently.
#[derive(Debug, Clone, Copy)]
pub struct ResponseEngine<'a> {
    model: &'a AnalysisModel,
}

impl<'a> ResponseEngine<'a> {
    /// Bind an engine to a model
    pub fn new(model: &'a AnalysisModel) -> Self {
        Self { model }
    }

    /// The model being analyzed
    pub fn model(&self) -> &'a AnalysisModel {
        self.model
    }

    // ========================
    // Load-class processors
    // ========================

    /// Bracket term of a concentrated force or moment
    fn point_term(load: &LoadInstance, ei: f64, exponent: i32, x: f64) -> BeamResult<f64> {
        Ok((-load.magnitude / (factorial_denominator(exponent)? * ei))
            * singularity(load.position, exponent, x)?)
    }

    /// Step plus ramp terms of one linear distributed-force segment
    fn distributed_force_term(
        segment: &LoadSegment,
        ei: f64,
        exponent: i32,
        x: f64,
    ) -> BeamResult<f64> {
        let LoadSegment { start, end } = segment;

        let step = (1.0 / (factorial_denominator(exponent)? * ei))
            * (-singularity(start.position, exponent, x)? * start.magnitude
                + singularity(end.position, exponent, x)? * end.magnitude);

        let ramp = (end.magnitude - start.magnitude)
            / (factorial_denominator(exponent + 1)? * ei * (end.position - start.position))
            * (-singularity(start.position, exponent + 1, x)?
                + singularity(end.position, exponent + 1, x)?);

        Ok(step + ramp)
    }

    /// Bracket term of one distributed-moment segment.
    ///
    /// Only the start magnitude is used; distributed moments are constant
    /// over each segment.
    fn distributed_moment_term(
        segment: &LoadSegment,
        ei: f64,
        exponent: i32,
        x: f64,
    ) -> BeamResult<f64> {
        let LoadSegment { start, end } = segment;
        Ok((start.magnitude / (factorial_denominator(exponent)? * ei))
            * (singularity(start.position, exponent, x)? - singularity(end.position, exponent, x)?))
    }

    /// Superpose the bracket terms of every load at integration level
    /// `min_exponent`, evaluated at `x`
    fn accumulate(&self, min_exponent: i32, x: f64) -> BeamResult<f64> {
        let loads = self.model.loads();
        let ei = self.model.ei();

        let mut output = 0.0;
        for load in loads.point_forces() {
            output += Self::point_term(load, ei, min_exponent + 1, x)?;
        }
        for load in loads.point_moments() {
            output += Self::point_term(load, ei, min_exponent, x)?;
        }
        for series in loads.distributed_forces() {
            for segment in series.segments() {
                output += Self::distributed_force_term(&segment, ei, min_exponent + 2, x)?;
            }
        }
        for series in loads.distributed_moments() {
            for segment in series.segments() {
                output += Self::distributed_moment_term(&segment, ei, min_exponent + 1, x)?;
            }
        }
        Ok(output)
    }

    // ========================
    // Boundary conditions
    // ========================

    /// Solve the start shear and start slope from the support conditions
    /// at `x = L`
    pub fn boundary_constants(&self) -> BeamResult<BoundaryConstants> {
        let length = self.model.length();
        let e = self.model.e();
        let i = self.model.i();

        // Zero moment at the far support
        let start_shear = -self.accumulate(0, length)? * e * i / length;
        // Zero deflection at the far support
        let start_slope =
            (-start_shear * length.powi(3) / (6.0 * i * e) - self.accumulate(2, length)?) / length;

        log::debug!(
            "boundary constants: start_shear = {start_shear:e}, start_slope = {start_slope:e}"
        );
        Ok(BoundaryConstants {
            start_shear,
            start_slope,
        })
    }

    fn shear_with(&self, bc: &BoundaryConstants, x: f64) -> BeamResult<f64> {
        Ok(bc.start_shear + self.model.ei() * self.accumulate(-1, x)?)
    }

    fn moment_with(&self, bc: &BoundaryConstants, x: f64) -> BeamResult<f64> {
        Ok(bc.start_shear * x + self.model.ei() * self.accumulate(0, x)?)
    }

    fn slope_with(&self, bc: &BoundaryConstants, x: f64) -> BeamResult<f64> {
        let ei = self.model.ei();
        Ok(bc.start_slope + bc.start_shear * x.powi(2) / (2.0 * ei) + self.accumulate(1, x)?)
    }

    fn deflection_with(&self, bc: &BoundaryConstants, x: f64) -> BeamResult<f64> {
        let ei = self.model.ei();
        Ok(bc.start_slope * x
            + bc.start_shear * x.powi(3) / (factorial_denominator(3)? * ei)
            + self.accumulate(2, x)?)
    }

    // ========================
    // Public queries
    // ========================

    /// Shear force at `x`
    pub fn shear(&self, x: f64) -> BeamResult<f64> {
        self.shear_with(&self.boundary_constants()?, x)
    }

    /// Bending moment at `x`
    pub fn moment(&self, x: f64) -> BeamResult<f64> {
        self.moment_with(&self.boundary_constants()?, x)
    }

    /// Slope at `x`
    pub fn slope(&self, x: f64) -> BeamResult<f64> {
        self.slope_with(&self.boundary_constants()?, x)
    }

    /// Deflection at `x`
    pub fn deflection(&self, x: f64) -> BeamResult<f64> {
        self.deflection_with(&self.boundary_constants()?, x)
    }

    /// All four quantities at `x`, solving the boundary constants once
    pub fn response_at(&self, x: f64) -> BeamResult<ResponseValues> {
        self.response_with(&self.boundary_constants()?, x)
    }

    /// All four quantities at `x` using boundary constants already solved
    /// for this model
    pub fn response_with(&self, bc: &BoundaryConstants, x: f64) -> BeamResult<ResponseValues> {
        Ok(ResponseValues {
            x,
            shear: self.shear_with(bc, x)?,
            moment: self.moment_with(bc, x)?,
            slope: self.slope_with(bc, x)?,
            deflection: self.deflection_with(bc, x)?,
        })
    }

    /// Sample the beam into a response diagram
    pub fn diagram(&self, options: &AnalysisOptions) -> BeamResult<ResponseDiagram> {
        ResponseDiagram::sample(self, options)
    }
}
