//! Sampled response diagrams

use serde::{Deserialize, Serialize};

use super::{AnalysisOptions, ResponseEngine};
use crate::error::BeamResult;
use crate::results::{BoundaryConstants, DiagramSummary, ResponseValues};

/// Shear, moment, slope and deflection sampled along the span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDiagram {
    /// Boundary constants used for every station
    pub boundary: BoundaryConstants,
    /// Sampled stations in ascending order
    pub stations: Vec<ResponseValues>,
    /// Extremes over the sampled stations
    pub summary: DiagramSummary,
}

impl ResponseDiagram {
    pub(crate) fn sample(
        engine: &ResponseEngine<'_>,
        options: &AnalysisOptions,
    ) -> BeamResult<Self> {
        options.validate()?;
        let boundary = engine.boundary_constants()?;
        let stations = sample_positions(engine, options)
            .into_iter()
            .map(|x| engine.response_with(&boundary, x))
            .collect::<BeamResult<Vec<_>>>()?;
        let summary = DiagramSummary::from_stations(&stations);

        log::debug!("sampled response diagram at {} stations", stations.len());
        Ok(Self {
            boundary,
            stations,
            summary,
        })
    }

    /// Station closest to `x`
    pub fn nearest(&self, x: f64) -> Option<&ResponseValues> {
        self.stations
            .iter()
            .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
    }
}

/// Evenly spaced stations plus stations at and either side of every
/// interior load position. The span ends and the load positions are
/// always kept; other stations within half an offset of a kept one are
/// merged into it.
fn sample_positions(engine: &ResponseEngine<'_>, options: &AnalysisOptions) -> Vec<f64> {
    let length = engine.model().length();
    let count = options.effective_sample_points();
    let epsilon = length * options.discontinuity_offset_ratio;

    // (position, required)
    let mut candidates: Vec<(f64, bool)> = (1..count - 1)
        .map(|i| (length * i as f64 / (count - 1) as f64, false))
        .collect();
    candidates.extend([(0.0, true), (length, true)]);

    if options.include_critical_points {
        for pos in engine.model().loads().critical_positions() {
            if pos <= 0.0 || pos >= length {
                continue;
            }
            candidates.push((pos, true));
            for offset in [pos - epsilon, pos + epsilon] {
                if offset > 0.0 && offset < length {
                    candidates.push((offset, false));
                }
            }
        }
    }

    candidates.sort_by(|a, b| a.0.total_cmp(&b.0));

    let tolerance = epsilon / 2.0;
    let mut kept: Vec<(f64, bool)> = Vec::with_capacity(candidates.len());
    for (x, required) in candidates {
        match kept.last_mut() {
            Some(last) if x - last.0 <= tolerance => {
                if required && !last.1 {
                    *last = (x, true);
                } else if required && x != last.0 {
                    kept.push((x, true));
                }
            }
            _ => kept.push((x, required)),
        }
    }

    kept.into_iter().map(|(x, _)| x).collect()
}
