//! Response evaluation and analysis options

mod diagram;
mod engine;

pub use diagram::ResponseDiagram;
pub use engine::ResponseEngine;

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

/// Fewest evenly spaced stations a diagram will use
pub const MIN_SAMPLE_POINTS: usize = 11;

/// Most evenly spaced stations a diagram will accept
pub const MAX_SAMPLE_POINTS: usize = 100_001;

/// Options for sampling response diagrams
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Number of evenly spaced stations from 0 to L (inclusive)
    pub sample_points: usize,
    /// Offset either side of a discontinuity, as a fraction of the span
    pub discontinuity_offset_ratio: f64,
    /// Add stations at and around load positions
    pub include_critical_points: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            sample_points: 101,
            discontinuity_offset_ratio: 0.001,
            include_critical_points: true,
        }
    }
}

impl AnalysisOptions {
    /// Set the number of evenly spaced stations
    pub fn with_sample_points(mut self, points: usize) -> Self {
        self.sample_points = points.clamp(MIN_SAMPLE_POINTS, MAX_SAMPLE_POINTS);
        self
    }

    /// Set the discontinuity offset ratio
    pub fn with_offset_ratio(mut self, ratio: f64) -> Self {
        self.discontinuity_offset_ratio = ratio;
        self
    }

    /// Sample only the evenly spaced stations
    pub fn without_critical_points(mut self) -> Self {
        self.include_critical_points = false;
        self
    }

    /// Check options that may have come straight from JSON
    pub fn validate(&self) -> BeamResult<()> {
        if self.sample_points > MAX_SAMPLE_POINTS {
            return Err(BeamError::invalid_input(format!(
                "sample_points must not exceed {MAX_SAMPLE_POINTS}, got {}",
                self.sample_points
            )));
        }
        let ratio = self.discontinuity_offset_ratio;
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(BeamError::invalid_input(format!(
                "discontinuity_offset_ratio must be finite and non-negative, got {ratio}"
            )));
        }
        Ok(())
    }

    /// Sample count actually used (deserialized options may hold less
    /// than the minimum)
    pub(crate) fn effective_sample_points(&self) -> usize {
        self.sample_points.clamp(MIN_SAMPLE_POINTS, MAX_SAMPLE_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_points_clamped() {
        assert_eq!(AnalysisOptions::default().with_sample_points(3).sample_points, 11);
        assert_eq!(AnalysisOptions::default().with_sample_points(51).sample_points, 51);
        assert_eq!(
            AnalysisOptions::default().with_sample_points(usize::MAX).sample_points,
            MAX_SAMPLE_POINTS
        );
    }

    #[test]
    fn test_validate_rejects_oversized_sample_count() {
        let options: AnalysisOptions =
            serde_json::from_str(r#"{"sample_points": 18446744073709551615}"#).unwrap();
        assert!(matches!(options.validate(), Err(BeamError::InvalidInput(_))));
        assert_eq!(options.effective_sample_points(), MAX_SAMPLE_POINTS);

        let at_limit = AnalysisOptions {
            sample_points: MAX_SAMPLE_POINTS,
            ..AnalysisOptions::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_offset_ratio() {
        for ratio in [-0.001, f64::NAN, f64::INFINITY] {
            let options = AnalysisOptions::default().with_offset_ratio(ratio);
            assert!(matches!(options.validate(), Err(BeamError::InvalidInput(_))));
        }
        assert!(AnalysisOptions::default().with_offset_ratio(0.0).validate().is_ok());
        assert!(AnalysisOptions::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: AnalysisOptions = serde_json::from_str(r#"{"sample_points": 5}"#).unwrap();
        assert_eq!(options.effective_sample_points(), MIN_SAMPLE_POINTS);
        assert!(options.include_critical_points);
        assert_eq!(options.discontinuity_offset_ratio, 0.001);
    }
}
