//! Piecewise-linear distributed loads and moments

use serde::{Deserialize, Serialize};

use super::load_instance::LoadInstance;
use crate::error::{BeamError, BeamResult};

/// Segments whose end positions differ by no more than this are treated
/// as zero-length and skipped during superposition.
pub const DEGENERATE_SEGMENT_TOLERANCE: f64 = 1e-10;

/// An ordered run of load vertices along the beam.
///
/// Each consecutive pair of vertices bounds one linear segment. Two
/// consecutive vertices at the same position describe a jump in intensity
/// and produce a zero-length segment, which is skipped rather than divided
/// by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LoadInstance>", into = "Vec<LoadInstance>")]
pub struct LoadSegmentSeries {
    instances: Vec<LoadInstance>,
}

/// One non-degenerate linear piece of a [`LoadSegmentSeries`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSegment {
    /// Vertex at the start of the segment
    pub start: LoadInstance,
    /// Vertex at the end of the segment
    pub end: LoadInstance,
}

impl LoadSegment {
    /// Signed segment length (end position minus start position)
    pub fn length(&self) -> f64 {
        self.end.position - self.start.position
    }

    /// Resultant force of the trapezoid under this segment
    pub fn resultant(&self) -> f64 {
        (self.start.magnitude + self.end.magnitude) / 2.0 * self.length()
    }
}

impl LoadSegmentSeries {
    /// Create a series from at least two vertices
    pub fn new(instances: Vec<LoadInstance>) -> BeamResult<Self> {
        if instances.len() < 2 {
            return Err(BeamError::invalid_input(format!(
                "distributed load series needs at least 2 instances, got {}",
                instances.len()
            )));
        }
        Ok(Self { instances })
    }

    /// Create a constant-intensity series between two positions
    pub fn uniform(magnitude: f64, start: f64, end: f64) -> Self {
        Self {
            instances: vec![
                LoadInstance::new(magnitude, start),
                LoadInstance::new(magnitude, end),
            ],
        }
    }

    /// Create a linearly varying series between two vertices
    pub fn linear(start: LoadInstance, end: LoadInstance) -> Self {
        Self {
            instances: vec![start, end],
        }
    }

    /// All vertices in insertion order
    pub fn instances(&self) -> &[LoadInstance] {
        &self.instances
    }

    /// Iterate over the segments with non-zero length
    pub fn segments(&self) -> impl Iterator<Item = LoadSegment> + '_ {
        self.instances.windows(2).filter_map(|pair| {
            let segment = LoadSegment {
                start: pair[0],
                end: pair[1],
            };
            if segment.length().abs() <= DEGENERATE_SEGMENT_TOLERANCE {
                log::trace!(
                    "skipping zero-length segment at x = {}",
                    segment.start.position
                );
                return None;
            }
            Some(segment)
        })
    }

    /// Total resultant force carried by the series
    pub fn resultant(&self) -> f64 {
        self.segments().map(|segment| segment.resultant()).sum()
    }
}

impl TryFrom<Vec<LoadInstance>> for LoadSegmentSeries {
    type Error = BeamError;

    fn try_from(instances: Vec<LoadInstance>) -> BeamResult<Self> {
        Self::new(instances)
    }
}

impl From<LoadSegmentSeries> for Vec<LoadInstance> {
    fn from(series: LoadSegmentSeries) -> Self {
        series.instances
    }
}
