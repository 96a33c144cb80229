//! Load assemblies

use serde::{Deserialize, Serialize};

use super::load_instance::LoadInstance;
use super::series::LoadSegmentSeries;
use crate::error::BeamResult;

/// Every load acting on one beam, grouped by load class.
///
/// An assembly is an immutable snapshot produced by
/// [`LoadAssemblyBuilder::build`]. Collections keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadAssembly {
    #[serde(default)]
    point_forces: Vec<LoadInstance>,
    #[serde(default)]
    point_moments: Vec<LoadInstance>,
    #[serde(default)]
    distributed_forces: Vec<LoadSegmentSeries>,
    #[serde(default)]
    distributed_moments: Vec<LoadSegmentSeries>,
}

impl LoadAssembly {
    /// Start building a new assembly
    pub fn builder() -> LoadAssemblyBuilder {
        LoadAssemblyBuilder::default()
    }

    /// Concentrated transverse forces
    pub fn point_forces(&self) -> &[LoadInstance] {
        &self.point_forces
    }

    /// Concentrated moments
    pub fn point_moments(&self) -> &[LoadInstance] {
        &self.point_moments
    }

    /// Distributed transverse load series
    pub fn distributed_forces(&self) -> &[LoadSegmentSeries] {
        &self.distributed_forces
    }

    /// Distributed moment series
    pub fn distributed_moments(&self) -> &[LoadSegmentSeries] {
        &self.distributed_moments
    }

    /// Check whether the assembly carries no loads at all
    pub fn is_empty(&self) -> bool {
        self.point_forces.is_empty()
            && self.point_moments.is_empty()
            && self.distributed_forces.is_empty()
            && self.distributed_moments.is_empty()
    }

    /// Number of load items the engine visits per superposition pass
    /// (point loads plus non-degenerate distributed segments)
    pub fn item_count(&self) -> usize {
        let segments: usize = self
            .distributed_forces
            .iter()
            .chain(&self.distributed_moments)
            .map(|series| series.segments().count())
            .sum();
        self.point_forces.len() + self.point_moments.len() + segments
    }

    /// Net applied transverse force (point forces plus distributed resultants)
    pub fn total_transverse_force(&self) -> f64 {
        let points: f64 = self.point_forces.iter().map(|load| load.magnitude).sum();
        let distributed: f64 = self
            .distributed_forces
            .iter()
            .map(LoadSegmentSeries::resultant)
            .sum();
        points + distributed
    }

    /// Stations where the loading changes character: point-load positions
    /// and distributed-series vertices, in insertion order
    pub fn critical_positions(&self) -> Vec<f64> {
        self.point_forces
            .iter()
            .chain(&self.point_moments)
            .map(|load| load.position)
            .chain(
                self.distributed_forces
                    .iter()
                    .chain(&self.distributed_moments)
                    .flat_map(|series| series.instances().iter().map(|load| load.position)),
            )
            .collect()
    }
}

/// Owned builder for [`LoadAssembly`].
///
/// Loads are registered additively; [`build`](Self::build) hands back an
/// immutable snapshot so an already-issued model can never change under
/// its results.
#[derive(Debug, Clone, Default)]
pub struct LoadAssemblyBuilder {
    assembly: LoadAssembly,
}

impl LoadAssemblyBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a concentrated force
    pub fn point_force(mut self, magnitude: f64, position: f64) -> Self {
        self.assembly
            .point_forces
            .push(LoadInstance::new(magnitude, position));
        self
    }

    /// Add a concentrated moment
    pub fn point_moment(mut self, magnitude: f64, position: f64) -> Self {
        self.assembly
            .point_moments
            .push(LoadInstance::new(magnitude, position));
        self
    }

    /// Add a distributed force from an ordered list of vertices
    pub fn distributed_force<I>(mut self, instances: I) -> BeamResult<Self>
    where
        I: IntoIterator<Item = LoadInstance>,
    {
        let series = LoadSegmentSeries::new(instances.into_iter().collect())?;
        self.assembly.distributed_forces.push(series);
        Ok(self)
    }

    /// Add a distributed moment from an ordered list of vertices
    pub fn distributed_moment<I>(mut self, instances: I) -> BeamResult<Self>
    where
        I: IntoIterator<Item = LoadInstance>,
    {
        let series = LoadSegmentSeries::new(instances.into_iter().collect())?;
        self.assembly.distributed_moments.push(series);
        Ok(self)
    }

    /// Add an already-validated distributed force series
    pub fn distributed_force_series(mut self, series: LoadSegmentSeries) -> Self {
        self.assembly.distributed_forces.push(series);
        self
    }

    /// Add an already-validated distributed moment series
    pub fn distributed_moment_series(mut self, series: LoadSegmentSeries) -> Self {
        self.assembly.distributed_moments.push(series);
        self
    }

    /// Finish building
    pub fn build(self) -> LoadAssembly {
        self.assembly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BeamError;
    use approx::assert_relative_eq;

    #[test]
    fn test_builder_preserves_order() {
        let loads = LoadAssembly::builder()
            .point_force(-10.0, 5.0)
            .point_force(-3.0, 2.0)
            .point_moment(4.0, 7.0)
            .build();

        assert_eq!(
            loads.point_forces(),
            &[LoadInstance::new(-10.0, 5.0), LoadInstance::new(-3.0, 2.0)]
        );
        assert_eq!(loads.point_moments(), &[LoadInstance::new(4.0, 7.0)]);
        assert!(loads.distributed_forces().is_empty());
    }

    #[test]
    fn test_short_series_rejected() {
        let result = LoadAssembly::builder().distributed_force([LoadInstance::new(-1.0, 0.0)]);
        assert!(matches!(result, Err(BeamError::InvalidInput(_))));
    }

    #[test]
    fn test_totals_and_counts() {
        let loads = LoadAssembly::builder()
            .point_force(-10.0, 5.0)
            .distributed_force([
                LoadInstance::new(-2.0, 0.0),
                LoadInstance::new(-2.0, 4.0),
                LoadInstance::new(-6.0, 4.0),
                LoadInstance::new(-6.0, 10.0),
            ])
            .unwrap()
            .distributed_moment_series(LoadSegmentSeries::uniform(1.0, 2.0, 3.0))
            .build();

        assert_relative_eq!(loads.total_transverse_force(), -10.0 - 8.0 - 36.0);
        // 1 point force + 2 force segments + 1 moment segment
        assert_eq!(loads.item_count(), 4);
        assert_eq!(
            loads.critical_positions(),
            vec![5.0, 0.0, 4.0, 4.0, 10.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_empty_assembly() {
        let loads = LoadAssemblyBuilder::new().build();
        assert!(loads.is_empty());
        assert_eq!(loads.item_count(), 0);
        assert_eq!(loads.total_transverse_force(), 0.0);
    }

    #[test]
    fn test_deserialize_with_missing_collections() {
        let loads: LoadAssembly =
            serde_json::from_str(r#"{"point_forces":[{"magnitude":-10.0,"position":5.0}]}"#)
                .unwrap();
        assert_eq!(loads, LoadAssembly::builder().point_force(-10.0, 5.0).build());
    }
}
